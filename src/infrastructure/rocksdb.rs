use crate::domain::ports::{PropertyStore, ReservationStore};
use crate::domain::property::PropertyRecord;
use crate::domain::reservation::StoredReservation;
use crate::error::{BookingError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// Column Family for storing property pricing records.
pub const CF_PROPERTIES: &str = "properties";
/// Column Family for storing reservation rows.
pub const CF_RESERVATIONS: &str = "reservations";

/// A persistent store implementation using RocksDB.
///
/// Handles storage for both `PropertyRecord` and `StoredReservation` rows
/// using separate Column Families. Seeding goes through the inherent
/// `insert_*` methods; the booking flow itself only reads through the
/// `PropertyStore` and `ReservationStore` ports.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the required column families ("properties" and
    /// "reservations") exist.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the database will be stored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_properties = ColumnFamilyDescriptor::new(CF_PROPERTIES, Options::default());
        let cf_reservations = ColumnFamilyDescriptor::new(CF_RESERVATIONS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_properties, cf_reservations])?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Seeds or replaces a property row.
    pub fn insert_property(&self, property_id: &str, record: &PropertyRecord) -> Result<()> {
        let cf = self
            .db
            .cf_handle(CF_PROPERTIES)
            .ok_or_else(|| BookingError::Internal("properties column family not found".into()))?;

        let value = serde_json::to_vec(record)
            .map_err(|e| BookingError::Internal(format!("serialization error: {e}")))?;
        self.db.put_cf(&cf, property_id.as_bytes(), value)?;

        Ok(())
    }

    /// Seeds a reservation row under a fresh storage key.
    pub fn insert_reservation(&self, reservation: &StoredReservation) -> Result<()> {
        let cf = self
            .db
            .cf_handle(CF_RESERVATIONS)
            .ok_or_else(|| BookingError::Internal("reservations column family not found".into()))?;

        let key = Uuid::new_v4();
        let value = serde_json::to_vec(reservation)
            .map_err(|e| BookingError::Internal(format!("serialization error: {e}")))?;
        self.db.put_cf(&cf, key.as_bytes(), value)?;

        Ok(())
    }
}

#[async_trait]
impl PropertyStore for RocksDBStore {
    async fn fetch(&self, property_id: &str) -> Result<Option<PropertyRecord>> {
        let cf = self
            .db
            .cf_handle(CF_PROPERTIES)
            .ok_or_else(|| BookingError::Internal("properties column family not found".into()))?;

        let result = self.db.get_cf(&cf, property_id.as_bytes())?;

        if let Some(bytes) = result {
            let record = serde_json::from_slice(&bytes)
                .map_err(|e| BookingError::Internal(format!("deserialization error: {e}")))?;
            Ok(Some(record))
        } else {
            Ok(None)
        }
    }
}

#[async_trait]
impl ReservationStore for RocksDBStore {
    async fn find_with_status(
        &self,
        property_id: &str,
        statuses: &[&str],
    ) -> Result<Vec<StoredReservation>> {
        let cf = self
            .db
            .cf_handle(CF_RESERVATIONS)
            .ok_or_else(|| BookingError::Internal("reservations column family not found".into()))?;

        let mut matching = Vec::new();
        let iter = self.db.iterator_cf(cf, rocksdb::IteratorMode::Start);

        for item in iter {
            let (_key, value) = item
                .map_err(|e| BookingError::Internal(format!("RocksDB iteration error: {e}")))?;
            let reservation: StoredReservation = serde_json::from_slice(&value)
                .map_err(|e| BookingError::Internal(format!("deserialization error: {e}")))?;
            if reservation.property_id == property_id
                && statuses.contains(&reservation.status.as_str())
            {
                matching.push(reservation);
            }
        }

        Ok(matching)
    }
}
