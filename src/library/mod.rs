mod catalogue;

pub use catalogue::Catalogue;

static LEGAL_EXTENSION: std::sync::LazyLock<std::collections::HashSet<&'static str>> =
    std::sync::LazyLock::new(|| {
        std::collections::HashSet::from(["mp3", "m4a", "m4b", "flac", "ogg", "opus", "wav"])
    });
