use crate::error::{CalcError, Result};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::marker::PhantomData;

/// Reads batch requests from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and accepting ragged rows. A row
/// that cannot be deserialized shows up as an `Err` item without ending the
/// stream.
pub struct RequestReader<R: Read, T> {
    reader: csv::Reader<R>,
    _request: PhantomData<T>,
}

impl<R: Read, T: DeserializeOwned> RequestReader<R, T> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self {
            reader,
            _request: PhantomData,
        }
    }

    /// Lazily deserializes requests, one per row.
    pub fn requests(self) -> impl Iterator<Item = Result<T>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CalcError::from))
    }
}

/// Input line on which an unreadable record starts, when the error carries one.
///
/// Quoted fields may span lines, so this can differ from the record count.
pub fn error_line(error: &CalcError) -> Option<u64> {
    match error {
        CalcError::CsvError(e) => e.position().map(|position| position.line()),
        _ => None,
    }
}
