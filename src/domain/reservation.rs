use super::request::truncate_to_utc_day;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reservation statuses that block new bookings over the same dates. The
/// status set is open; anything outside this list (pending, cancelled,
/// expired, ...) does not hold the dates.
pub const BLOCKING_STATUSES: [&str; 2] = ["paid", "confirmed"];

/// Reservation row read from the store. The store owns its lifecycle; this
/// crate only ever reads a filtered snapshot.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StoredReservation {
    pub property_id: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub status: String,
}

/// Half-open `[start, end)` interval of midnight-UTC-aligned dates. The
/// exclusive end means back-to-back stays sharing a boundary day never
/// conflict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Two half-open intervals overlap iff each one starts before the other
/// ends. Symmetric in its arguments.
pub fn overlaps(a: &DateRange, b: &DateRange) -> bool {
    a.start < b.end && a.end > b.start
}

/// Returns the first stored reservation whose dates collide with
/// `requested`.
///
/// Stored boundaries are re-normalized to midnight UTC before comparison in
/// case the store carries a stray time-of-day component. A record missing
/// either boundary is skipped rather than rejected: malformed legacy rows
/// must not block new bookings. That leniency is a documented policy choice,
/// not an accident.
pub fn find_conflict<'a>(
    requested: &DateRange,
    existing: &'a [StoredReservation],
) -> Option<&'a StoredReservation> {
    existing.iter().find(|reservation| {
        let (Some(start), Some(end)) = (reservation.start, reservation.end) else {
            return false;
        };
        let stored = DateRange {
            start: truncate_to_utc_day(start),
            end: truncate_to_utc_day(end),
        };
        overlaps(requested, &stored)
    })
}
