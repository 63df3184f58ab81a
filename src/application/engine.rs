use crate::domain::ports::{
    PaymentGatewayBox, PaymentMetadata, PropertyStoreBox, ReservationStoreBox,
};
use crate::domain::pricing::quote_stay;
use crate::domain::request::BookingRequest;
use crate::domain::reservation::{BLOCKING_STATUSES, DateRange, find_conflict};
use crate::error::{BookingError, Result};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// Verified caller identity. Established by the transport layer before the
/// engine runs; the opaque id is forwarded only as payment metadata and
/// plays no part in any authorization decision here.
#[derive(Debug, Clone, PartialEq)]
pub struct Caller {
    pub user_id: String,
}

/// The handler's output: a freshly issued reservation id, the pricing
/// breakdown, and the payment authorization handle. Field names follow the
/// wire contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDecision {
    pub reservation_id: String,
    pub currency: String,
    pub nightly_price: i64,
    pub cleaning_fee: i64,
    pub service_fee: i64,
    pub nights: i64,
    pub total_amount: i64,
    pub payment_authorization_id: String,
    pub payment_client_secret: String,
}

/// The main entry point for the booking flow.
///
/// `BookingEngine` validates a requested stay, checks it against confirmed
/// reservations, prices it, and initiates a payment authorization. It holds
/// no per-request mutable state, so one engine may serve many concurrent
/// requests.
///
/// The conflict check and the eventual durable write of the new reservation
/// are not one atomic transaction: two concurrent requests for overlapping
/// dates can both pass the check before either reservation is recorded.
/// This engine decides against a single point-in-time snapshot and fails
/// clearly when a conflict is visible; closing the race requires a
/// serializable read-and-write transaction (or a uniqueness constraint on a
/// derived conflict key) in the external store.
pub struct BookingEngine {
    properties: PropertyStoreBox,
    reservations: ReservationStoreBox,
    gateway: Option<PaymentGatewayBox>,
}

impl BookingEngine {
    /// Creates a new `BookingEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `properties` - The store for property pricing metadata.
    /// * `reservations` - The store for existing reservations.
    /// * `gateway` - The payment gateway, or `None` when the process runs
    ///   without a configured payment provider. An unconfigured engine
    ///   fails every request with `FailedPrecondition`.
    pub fn new(
        properties: PropertyStoreBox,
        reservations: ReservationStoreBox,
        gateway: Option<PaymentGatewayBox>,
    ) -> Self {
        Self {
            properties,
            reservations,
            gateway,
        }
    }

    /// Processes one booking request end to end.
    ///
    /// Stages run in a fixed order and fail fast: authentication, gateway
    /// configuration, request validation, property fetch and pricing-data
    /// re-validation, conflict check, pricing, payment authorization. The
    /// first failure is surfaced; nothing is retried and no partial result
    /// is returned. Once the authorization succeeds the operation is not
    /// rolled back on a later local failure.
    pub async fn create_booking(
        &self,
        caller: Option<&Caller>,
        request: BookingRequest,
    ) -> Result<BookingDecision> {
        let Some(caller) = caller else {
            return Err(BookingError::Unauthenticated(
                "user must be authenticated".to_string(),
            ));
        };
        let Some(gateway) = self.gateway.as_ref() else {
            return Err(BookingError::FailedPrecondition(
                "payment gateway is not configured".to_string(),
            ));
        };

        let normalized = request.validate()?;

        let record = self
            .properties
            .fetch(&normalized.property_id)
            .await?
            .ok_or_else(|| BookingError::NotFound("property was not found".to_string()))?;
        let pricing = record.validate()?;

        let existing = self
            .reservations
            .find_with_status(&normalized.property_id, &BLOCKING_STATUSES)
            .await?;
        let requested = DateRange {
            start: normalized.start,
            end: normalized.end,
        };
        if find_conflict(&requested, &existing).is_some() {
            return Err(BookingError::AlreadyExists(
                "selected dates are no longer available".to_string(),
            ));
        }

        let quote = quote_stay(&pricing, normalized.nights)?;

        let reservation_id = Uuid::new_v4().to_string();
        let metadata = PaymentMetadata {
            reservation_id: reservation_id.clone(),
            property_id: normalized.property_id.clone(),
            user_id: caller.user_id.clone(),
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            nights: quote.nights,
            guests: normalized.guests,
        };

        let authorization = gateway
            .create_authorization(quote.total, &quote.currency, &metadata)
            .await?;
        let client_secret = authorization.client_secret.ok_or_else(|| {
            BookingError::Internal(
                "payment provider did not return a client secret".to_string(),
            )
        })?;

        info!(
            %reservation_id,
            property_id = %normalized.property_id,
            nights = quote.nights,
            total = quote.total,
            "booking authorized"
        );

        Ok(BookingDecision {
            reservation_id,
            currency: quote.currency,
            nightly_price: pricing.nightly_price,
            cleaning_fee: pricing.cleaning_fee,
            service_fee: pricing.service_fee,
            nights: quote.nights,
            total_amount: quote.total,
            payment_authorization_id: authorization.id,
            payment_client_secret: client_secret,
        })
    }
}
