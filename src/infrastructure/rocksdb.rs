use crate::domain::checkout::SignedCheckout;
use crate::domain::ports::CheckoutStore;
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing signed checkouts.
pub const CF_CHECKOUTS: &str = "checkouts";

/// A persistent store implementation using RocksDB.
///
/// Signed checkouts are keyed by their transaction reference in a dedicated
/// Column Family, so a reference signed in an earlier run is still rejected
/// as a duplicate after a restart.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "checkouts" column family exists.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the database will be stored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_checkouts = ColumnFamilyDescriptor::new(CF_CHECKOUTS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_checkouts])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf_handle(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(CF_CHECKOUTS).ok_or_else(|| {
            CheckoutError::InternalError(Box::new(std::io::Error::other(
                "Checkouts column family not found",
            )))
        })
    }
}

#[async_trait]
impl CheckoutStore for RocksDBStore {
    async fn store(&self, checkout: SignedCheckout) -> Result<()> {
        let cf = self.cf_handle()?;

        let value = serde_json::to_vec(&checkout).map_err(|e| {
            CheckoutError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization error: {}", e),
            )))
        })?;

        self.db.put_cf(&cf, checkout.reference.as_bytes(), value)?;

        Ok(())
    }

    async fn get(&self, reference: &str) -> Result<Option<SignedCheckout>> {
        let cf = self.cf_handle()?;

        let result = self.db.get_cf(&cf, reference.as_bytes())?;

        if let Some(bytes) = result {
            let checkout = serde_json::from_slice(&bytes).map_err(|e| {
                CheckoutError::InternalError(Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Deserialization error: {}", e),
                )))
            })?;
            Ok(Some(checkout))
        } else {
            Ok(None)
        }
    }

    async fn exists(&self, reference: &str) -> Result<bool> {
        let cf = self.cf_handle()?;

        // Just check if the key exists without retrieving the value
        let result = self.db.get_pinned_cf(&cf, reference.as_bytes())?;
        Ok(result.is_some())
    }

    async fn get_all(&self) -> Result<Vec<SignedCheckout>> {
        let cf = self.cf_handle()?;

        let mut checkouts = Vec::new();
        let iter = self.db.iterator_cf(cf, rocksdb::IteratorMode::Start);

        for item in iter {
            let (_key, value) = item?;
            let checkout: SignedCheckout = serde_json::from_slice(&value).map_err(|e| {
                CheckoutError::InternalError(Box::new(std::io::Error::other(format!(
                    "Failed to deserialize checkout: {}",
                    e
                ))))
            })?;
            checkouts.push(checkout);
        }

        Ok(checkouts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::signature::{IntegritySecret, IntegritySigner};
    use tempfile::tempdir;

    fn signed(reference: &str, amount_in_cents: u64) -> SignedCheckout {
        let signer = IntegritySigner::new(IntegritySecret::new("test-secret").unwrap());
        SignedCheckout {
            reference: reference.to_string(),
            amount_in_cents,
            currency: "COP".to_string(),
            signature: signer.sign(reference, amount_in_cents, "COP"),
        }
    }

    #[tokio::test]
    async fn test_rocksdb_open_cf() {
        let dir = tempdir().unwrap();
        let store = RocksDBStore::open(dir.path()).expect("Failed to open RocksDB");

        assert!(store.db.cf_handle(CF_CHECKOUTS).is_some());
    }

    #[tokio::test]
    async fn test_rocksdb_checkout_store() {
        let dir = tempdir().unwrap();
        let store = RocksDBStore::open(dir.path()).unwrap();

        let checkout = signed("ZAFTA-TEST-1", 5000);
        store.store(checkout.clone()).await.unwrap();

        let retrieved = store.get("ZAFTA-TEST-1").await.unwrap().unwrap();
        assert_eq!(retrieved, checkout);

        assert!(store.exists("ZAFTA-TEST-1").await.unwrap());
        assert!(!store.exists("ZAFTA-TEST-2").await.unwrap());
        assert!(store.get("ZAFTA-TEST-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rocksdb_survives_reopen() {
        let dir = tempdir().unwrap();

        {
            let store = RocksDBStore::open(dir.path()).unwrap();
            store.store(signed("ZAFTA-TEST-1", 5000)).await.unwrap();
        }

        let store = RocksDBStore::open(dir.path()).unwrap();
        assert!(store.exists("ZAFTA-TEST-1").await.unwrap());

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].reference, "ZAFTA-TEST-1");
    }
}
