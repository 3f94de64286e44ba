use crate::player::PodcastBackend;
use anyhow::Result;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::{fs::File, io::BufReader, path::Path, time::Duration};

pub struct RodioBackend {
    sink: Sink,
    loaded: bool,
    _stream: OutputStream,
}

impl RodioBackend {
    pub fn new() -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // Dropping the stream would otherwise print over the terminal UI
        stream.log_on_drop(false);
        let sink = Sink::connect_new(stream.mixer());

        Ok(Self {
            sink,
            loaded: false,
            _stream: stream,
        })
    }
}

impl PodcastBackend for RodioBackend {
    fn load(&mut self, source: &Path) -> Result<()> {
        let decoded = decode(source)?;

        // `clear` leaves the sink paused
        self.sink.clear();
        self.sink.append(decoded);
        self.loaded = true;

        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn resume(&mut self) {
        self.sink.play();
    }

    fn stop(&mut self) {
        self.sink.stop();
        self.loaded = false;
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.sink
            .try_seek(position)
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn is_paused(&self) -> bool {
        self.sink.is_paused()
    }

    fn track_ended(&self) -> bool {
        self.loaded && self.sink.empty()
    }
}

fn decode(source: &Path) -> Result<Decoder<BufReader<File>>> {
    let file = File::open(source)?;
    let len = file.metadata()?.len();

    let mut builder = Decoder::builder()
        .with_data(BufReader::new(file))
        .with_byte_len(len)
        .with_seekable(true);

    if let Some(ext) = source.extension().and_then(|e| e.to_str()) {
        let hint = match ext {
            "adif" | "adts" => "aac",
            "m4a" | "m4b" | "mp4" => "audio/mp4",
            "bit" | "mpga" => "mp3",
            "oga" | "opus" | "spx" => "audio/ogg",
            "wave" => "wav",
            _ => ext,
        };
        builder = builder.with_hint(hint);
    }

    Ok(builder.build()?)
}
