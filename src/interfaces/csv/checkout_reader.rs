use crate::domain::checkout::CheckoutRequest;
use crate::error::{CheckoutError, Result};
use std::io::Read;

/// Reads checkout requests from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<CheckoutRequest>`. It handles whitespace trimming and flexible
/// record lengths automatically; empty `reference` and `currency` fields
/// deserialize as absent.
pub struct CheckoutReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CheckoutReader<R> {
    /// Creates a new `CheckoutReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    ///
    /// This allows for processing large files in a streaming fashion without
    /// loading the entire dataset into memory.
    pub fn requests(self) -> impl Iterator<Item = Result<CheckoutRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CheckoutError::from))
    }
}
