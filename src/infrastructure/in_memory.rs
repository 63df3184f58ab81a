use crate::domain::ports::{
    PaymentAuthorization, PaymentGateway, PaymentMetadata, PropertyStore, ReservationStore,
};
use crate::domain::property::PropertyRecord;
use crate::domain::reservation::StoredReservation;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A thread-safe in-memory property catalog keyed by property id.
///
/// Uses `Arc<RwLock<HashMap<String, PropertyRecord>>>` to allow shared
/// concurrent access. Ideal for tests and demos where persistence is not
/// required.
#[derive(Default, Clone)]
pub struct InMemoryPropertyStore {
    properties: Arc<RwLock<HashMap<String, PropertyRecord>>>,
}

impl InMemoryPropertyStore {
    /// Creates a new, empty in-memory property store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a property row. Not part of the store port; the booking flow
    /// only reads.
    pub async fn insert(&self, property_id: impl Into<String>, record: PropertyRecord) {
        let mut properties = self.properties.write().await;
        properties.insert(property_id.into(), record);
    }
}

#[async_trait]
impl PropertyStore for InMemoryPropertyStore {
    async fn fetch(&self, property_id: &str) -> Result<Option<PropertyRecord>> {
        let properties = self.properties.read().await;
        Ok(properties.get(property_id).cloned())
    }
}

/// A thread-safe in-memory reservation store.
///
/// Filtering by property and status happens on read, mirroring the
/// status-in-set query the production document store serves.
#[derive(Default, Clone)]
pub struct InMemoryReservationStore {
    reservations: Arc<RwLock<Vec<StoredReservation>>>,
}

impl InMemoryReservationStore {
    /// Creates a new, empty in-memory reservation store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a reservation row. Not part of the store port.
    pub async fn insert(&self, reservation: StoredReservation) {
        let mut reservations = self.reservations.write().await;
        reservations.push(reservation);
    }
}

#[async_trait]
impl ReservationStore for InMemoryReservationStore {
    async fn find_with_status(
        &self,
        property_id: &str,
        statuses: &[&str],
    ) -> Result<Vec<StoredReservation>> {
        let reservations = self.reservations.read().await;
        Ok(reservations
            .iter()
            .filter(|r| r.property_id == property_id && statuses.contains(&r.status.as_str()))
            .cloned()
            .collect())
    }
}

/// One authorization as the in-memory gateway saw it, kept for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedAuthorization {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub metadata: PaymentMetadata,
}

/// A deterministic local payment gateway for tests and demos.
///
/// Issues authorization handles without talking to any provider and records
/// every request so tests can assert on amounts and audit metadata.
#[derive(Default, Clone)]
pub struct InMemoryPaymentGateway {
    authorizations: Arc<RwLock<Vec<RecordedAuthorization>>>,
}

impl InMemoryPaymentGateway {
    /// Creates a new gateway with no recorded authorizations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every authorization created so far, oldest first.
    pub async fn recorded(&self) -> Vec<RecordedAuthorization> {
        self.authorizations.read().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for InMemoryPaymentGateway {
    async fn create_authorization(
        &self,
        amount: i64,
        currency: &str,
        metadata: &PaymentMetadata,
    ) -> Result<PaymentAuthorization> {
        let id = format!("auth_{}", Uuid::new_v4().simple());
        let client_secret = format!("sec_{}", Uuid::new_v4().simple());

        let mut authorizations = self.authorizations.write().await;
        authorizations.push(RecordedAuthorization {
            id: id.clone(),
            amount,
            currency: currency.to_string(),
            metadata: metadata.clone(),
        });

        Ok(PaymentAuthorization {
            id,
            client_secret: Some(client_secret),
        })
    }
}
