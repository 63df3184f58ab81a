use crate::error::{BookingError, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

const SECONDS_PER_DAY: i64 = 86_400;

/// Caller-supplied booking request, exactly as received. Never persisted.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BookingRequest {
    pub property_id: String,
    pub start_date: String,
    pub end_date: String,
    pub guests: Option<u32>,
}

/// A request that passed validation: dates normalized to midnight UTC,
/// night count derived, guest count defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRequest {
    pub property_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub nights: i64,
    pub guests: u32,
}

impl BookingRequest {
    /// Checks field presence, parses both dates, and derives the night
    /// count. The first failure wins and is reported as `InvalidArgument`.
    ///
    /// Guest count defaults to 1. There is deliberately no upper bound on
    /// guests or on how far ahead a stay may be booked.
    pub fn validate(&self) -> Result<NormalizedRequest> {
        if self.property_id.is_empty() || self.start_date.is_empty() || self.end_date.is_empty() {
            return Err(BookingError::InvalidArgument(
                "missing booking fields".to_string(),
            ));
        }

        let start = parse_calendar_date(&self.start_date, "start_date")?;
        let end = parse_calendar_date(&self.end_date, "end_date")?;

        let nights = nights_between(start, end);
        if nights <= 0 {
            return Err(BookingError::InvalidArgument(
                "end_date must be later than start_date".to_string(),
            ));
        }

        Ok(NormalizedRequest {
            property_id: self.property_id.clone(),
            start,
            end,
            nights,
            guests: self.guests.unwrap_or(1),
        })
    }
}

/// Parses an RFC 3339 timestamp or a plain `%Y-%m-%d` date and projects it
/// onto midnight UTC of its UTC calendar day. Any time-of-day component in
/// the input is discarded, which keeps interval comparison date-granular and
/// timezone-independent.
pub fn parse_calendar_date(raw: &str, field: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(midnight_utc(ts.with_timezone(&Utc).date_naive()));
    }
    raw.parse::<NaiveDate>().map(midnight_utc).map_err(|_| {
        BookingError::InvalidArgument(format!("{field} is not a valid ISO date"))
    })
}

/// Truncates a timestamp to midnight of its UTC calendar day. Projection:
/// applying it twice is a no-op.
pub fn truncate_to_utc_day(ts: DateTime<Utc>) -> DateTime<Utc> {
    midnight_utc(ts.date_naive())
}

fn midnight_utc(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// Night count between two normalized timestamps, rounded to the nearest
/// whole day. Exact for midnight-aligned inputs.
pub fn nights_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let seconds = end.signed_duration_since(start).num_seconds();
    (seconds + SECONDS_PER_DAY / 2).div_euclid(SECONDS_PER_DAY)
}
