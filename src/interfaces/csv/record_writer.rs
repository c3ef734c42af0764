use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Output encoding for batch results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

enum Sink<W: Write> {
    Csv(csv::Writer<W>),
    Json { writer: W, started: bool },
}

/// Writes result records as CSV (header taken from the first record) or as a
/// single JSON array, one element per line.
///
/// Both formats are streamed; the JSON array is closed by
/// [`RecordWriter::finish`].
pub struct RecordWriter<W: Write> {
    sink: Sink<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        let sink = match format {
            OutputFormat::Csv => Sink::Csv(csv::Writer::from_writer(writer)),
            OutputFormat::Json => Sink::Json {
                writer,
                started: false,
            },
        };
        Self { sink }
    }

    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.serialize(record)?,
            Sink::Json { writer, started } => {
                writer.write_all(if *started { b",\n" } else { b"[\n" })?;
                *started = true;
                serde_json::to_writer(&mut *writer, record)?;
            }
        }
        Ok(())
    }

    /// Flushes pending output. Must be called once all records are written.
    pub fn finish(self) -> Result<()> {
        match self.sink {
            Sink::Csv(mut writer) => writer.flush()?,
            Sink::Json {
                mut writer,
                started,
            } => {
                writer.write_all(if started { b"\n]\n" } else { b"[]\n" })?;
                writer.flush()?;
            }
        }
        Ok(())
    }
}
