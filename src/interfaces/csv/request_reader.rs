use crate::domain::request::BookingRequest;
use crate::error::{BookingError, Result};
use std::io::Read;

/// Reads booking requests from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<BookingRequest>`. It handles whitespace trimming and flexible
/// record lengths automatically; an empty `guests` cell becomes `None`.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<BookingRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BookingError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "property_id, start_date, end_date, guests\n\
                    p1, 2024-07-01, 2024-07-04, 2\n\
                    p2, 2024-08-10, 2024-08-12,";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<BookingRequest>> = reader.requests().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.property_id, "p1");
        assert_eq!(first.guests, Some(2));
        let second = results[1].as_ref().unwrap();
        assert_eq!(second.guests, None);
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "property_id, start_date, end_date, guests\np1, 2024-07-01, 2024-07-04, lots";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<BookingRequest>> = reader.requests().collect();

        assert!(results[0].is_err());
    }
}
