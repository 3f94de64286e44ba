use podcastr::{app_core, Catalogue, Config};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    if let Err(e) = app_core::init_logging() {
        eprintln!("{e}");
    }

    let config = Config::load()?;
    let source = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.catalogue.clone());

    let catalogue = match source {
        Some(path) => Catalogue::load(path)?,
        None => Catalogue::default(),
    };

    app_core::Podcastr::new(config, catalogue).run()
}
