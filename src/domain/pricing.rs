use super::property::PropertyPricing;
use crate::error::{BookingError, Result};
use serde::Serialize;

/// Deterministic pricing breakdown for a stay, in integer minor currency
/// units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub nights: i64,
    pub subtotal: i64,
    pub total: i64,
    pub currency: String,
}

/// Derives the charge for a stay: `subtotal = nightly_price * nights`,
/// `total = subtotal + cleaning_fee + service_fee`.
///
/// Exact integer arithmetic only. The total is already in the smallest
/// currency unit the payment provider expects; a non-positive (or
/// overflowing) charge is a data problem and fails `FailedPrecondition`.
pub fn quote_stay(pricing: &PropertyPricing, nights: i64) -> Result<Quote> {
    let subtotal = pricing
        .nightly_price
        .checked_mul(nights)
        .ok_or_else(|| overflow("subtotal"))?;
    let total = subtotal
        .checked_add(pricing.cleaning_fee)
        .and_then(|t| t.checked_add(pricing.service_fee))
        .ok_or_else(|| overflow("total"))?;

    if total <= 0 {
        return Err(BookingError::FailedPrecondition(
            "calculated payment amount is invalid".to_string(),
        ));
    }

    Ok(Quote {
        nights,
        subtotal,
        total,
        currency: pricing.currency.clone(),
    })
}

fn overflow(field: &str) -> BookingError {
    BookingError::FailedPrecondition(format!("stay {field} overflows the charge amount"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn pricing(nightly: i64, cleaning: i64, service: i64) -> PropertyPricing {
        PropertyPricing {
            nightly_price: nightly,
            cleaning_fee: cleaning,
            service_fee: service,
            currency: "eur".to_string(),
        }
    }

    #[test]
    fn test_quote_three_nights() {
        let quote = quote_stay(&pricing(10_000, 150, 300), 3).unwrap();
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.subtotal, 30_000);
        assert_eq!(quote.total, 30_450);
        assert_eq!(quote.currency, "eur");
    }

    #[test]
    fn test_quote_is_exact_over_randomized_inputs() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let nightly = rng.gen_range(1..=1_000_000);
            let nights = rng.gen_range(1..=365);
            let cleaning = rng.gen_range(0..=100_000);
            let service = rng.gen_range(0..=100_000);

            let quote = quote_stay(&pricing(nightly, cleaning, service), nights).unwrap();
            assert_eq!(quote.subtotal, nightly * nights);
            assert_eq!(quote.total, nightly * nights + cleaning + service);
        }
    }

    #[test]
    fn test_quote_rejects_overflowing_subtotal() {
        let err = quote_stay(&pricing(i64::MAX, 0, 0), 2).unwrap_err();
        assert!(matches!(err, BookingError::FailedPrecondition(_)));
    }

    #[test]
    fn test_quote_rejects_overflowing_total() {
        let err = quote_stay(&pricing(i64::MAX, 1, 0), 1).unwrap_err();
        assert_eq!(err.kind(), "failed-precondition");
    }
}
