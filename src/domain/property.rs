use crate::error::{BookingError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CLEANING_FEE: i64 = 150;
pub const DEFAULT_SERVICE_FEE: i64 = 300;
pub const DEFAULT_CURRENCY: &str = "eur";

/// Raw property row as it comes back from the store.
///
/// The store "should" only hold well-formed pricing data, but it is treated
/// as untrusted input: every monetary field is re-validated through
/// [`PropertyRecord::validate`] before pricing. A violation is a
/// `FailedPrecondition` (a data problem), never an `InvalidArgument` (a
/// request problem).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PropertyRecord {
    pub nightly_price: Option<i64>,
    pub cleaning_fee: Option<i64>,
    pub service_fee: Option<i64>,
    pub currency: Option<String>,
}

/// Pricing inputs validated out of a raw [`PropertyRecord`]. All amounts are
/// integer minor currency units; the currency code is lowercased.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPricing {
    pub nightly_price: i64,
    pub cleaning_fee: i64,
    pub service_fee: i64,
    pub currency: String,
}

impl PropertyRecord {
    pub fn validate(&self) -> Result<PropertyPricing> {
        let nightly_price = require_positive(self.nightly_price, "nightly_price")?;
        let cleaning_fee =
            require_non_negative(self.cleaning_fee.unwrap_or(DEFAULT_CLEANING_FEE), "cleaning_fee")?;
        let service_fee =
            require_non_negative(self.service_fee.unwrap_or(DEFAULT_SERVICE_FEE), "service_fee")?;
        let currency = self
            .currency
            .as_deref()
            .unwrap_or(DEFAULT_CURRENCY)
            .to_lowercase();

        Ok(PropertyPricing {
            nightly_price,
            cleaning_fee,
            service_fee,
            currency,
        })
    }
}

fn require_positive(value: Option<i64>, field: &str) -> Result<i64> {
    match value {
        Some(v) if v > 0 => Ok(v),
        _ => Err(BookingError::FailedPrecondition(format!(
            "{field} must be a positive integer in property data"
        ))),
    }
}

fn require_non_negative(value: i64, field: &str) -> Result<i64> {
    if value >= 0 {
        Ok(value)
    } else {
        Err(BookingError::FailedPrecondition(format!(
            "{field} must be a non-negative integer"
        )))
    }
}
