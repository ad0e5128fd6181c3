use crate::domain::checkout::SignedCheckout;
use crate::error::Result;
use std::io::Write;

/// Writes signed checkouts to a CSV sink.
///
/// The header row (`reference,amount_in_cents,currency,signature`) is derived
/// from the record's fields on the first write.
pub struct CheckoutWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CheckoutWriter<W> {
    /// Creates a new `CheckoutWriter` over any `Write` sink (e.g., Stdout, File).
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new().from_writer(sink);
        Self { writer }
    }

    /// Serializes all checkouts and flushes the sink.
    pub fn write_checkouts(&mut self, checkouts: Vec<SignedCheckout>) -> Result<()> {
        for checkout in checkouts {
            self.writer.serialize(checkout)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
