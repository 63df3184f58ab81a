use crate::domain::property::PropertyRecord;
use crate::domain::reservation::StoredReservation;
use crate::error::{BookingError, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use std::io::Read;
use tracing::warn;

/// Property catalog row: `id, nightly_price, cleaning_fee, service_fee,
/// currency`. Empty cells fall back to the record defaults at validation
/// time.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PropertyRow {
    pub id: String,
    pub nightly_price: Option<i64>,
    pub cleaning_fee: Option<i64>,
    pub service_fee: Option<i64>,
    pub currency: Option<String>,
}

impl PropertyRow {
    pub fn into_parts(self) -> (String, PropertyRecord) {
        (
            self.id,
            PropertyRecord {
                nightly_price: self.nightly_price,
                cleaning_fee: self.cleaning_fee,
                service_fee: self.service_fee,
                currency: self.currency,
            },
        )
    }
}

/// Existing reservation row: `property_id, start, end, status`. Boundaries
/// are RFC 3339 timestamps or plain dates; an empty cell is a missing
/// boundary.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReservationRow {
    pub property_id: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub status: String,
}

impl ReservationRow {
    /// Converts the row into a store entry. An unparsable boundary is
    /// logged and treated as missing, same as the conflict checker treats
    /// malformed legacy rows.
    pub fn into_reservation(self) -> StoredReservation {
        StoredReservation {
            start: parse_boundary(self.start, "start"),
            end: parse_boundary(self.end, "end"),
            property_id: self.property_id,
            status: self.status,
        }
    }
}

fn parse_boundary(raw: Option<String>, field: &str) -> Option<DateTime<Utc>> {
    let raw = raw?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(day) = raw.parse::<NaiveDate>() {
        return Some(day.and_time(NaiveTime::MIN).and_utc());
    }
    warn!(field, value = %raw, "unparsable reservation boundary, treating as missing");
    None
}

/// Reads the property catalog seed file.
pub fn read_properties<R: Read>(source: R) -> Result<Vec<PropertyRow>> {
    read_rows(source)
}

/// Reads the existing-reservation seed file.
pub fn read_reservations<R: Read>(source: R) -> Result<Vec<ReservationRow>> {
    read_rows(source)
}

fn read_rows<R: Read, T: for<'de> Deserialize<'de>>(source: R) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);
    reader
        .deserialize()
        .map(|row| row.map_err(BookingError::from))
        .collect()
}
