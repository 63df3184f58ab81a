use super::property::PropertyRecord;
use super::reservation::StoredReservation;
use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;

/// Point lookup of property pricing metadata by id.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    async fn fetch(&self, property_id: &str) -> Result<Option<PropertyRecord>>;
}

/// Filtered snapshot reads over existing reservations. The booking flow
/// never creates, mutates, or deletes reservation rows through this port.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Reservations for `property_id` whose status is in `statuses`.
    /// Ordering is irrelevant to the conflict check.
    async fn find_with_status(
        &self,
        property_id: &str,
        statuses: &[&str],
    ) -> Result<Vec<StoredReservation>>;
}

/// Audit trail forwarded verbatim to the payment provider. The booking flow
/// never reads it back and no decision depends on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentMetadata {
    pub reservation_id: String,
    pub property_id: String,
    pub user_id: String,
    pub start_date: String,
    pub end_date: String,
    pub nights: i64,
    pub guests: u32,
}

/// Opaque authorization handle returned by the payment provider. The client
/// secret is what the end user needs to complete payment client-side; a
/// provider response without one violates the provider contract.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentAuthorization {
    pub id: String,
    pub client_secret: Option<String>,
}

/// Creates charge authorizations with the payment provider. Timeout and
/// retry policy belong to the implementation, not to the booking flow.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Authorizes a charge of `amount` minor units of `currency`.
    async fn create_authorization(
        &self,
        amount: i64,
        currency: &str,
        metadata: &PaymentMetadata,
    ) -> Result<PaymentAuthorization>;
}

pub type PropertyStoreBox = Box<dyn PropertyStore>;
pub type ReservationStoreBox = Box<dyn ReservationStore>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
