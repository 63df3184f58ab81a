use crate::application::engine::BookingDecision;
use crate::error::Result;
use std::io::Write;

/// Writes booking decisions as CSV with the wire-contract header
/// (`reservationId, currency, nightlyPrice, ...`).
pub struct DecisionWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> DecisionWriter<W> {
    /// Creates a new `DecisionWriter` over any `Write` target (e.g., Stdout).
    pub fn new(target: W) -> Self {
        let writer = csv::WriterBuilder::new().from_writer(target);
        Self { writer }
    }

    /// Serializes one decision; the header row is emitted on first write.
    pub fn write_decision(&mut self, decision: &BookingDecision) -> Result<()> {
        self.writer.serialize(decision)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
