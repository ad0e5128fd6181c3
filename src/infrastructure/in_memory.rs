use crate::domain::checkout::SignedCheckout;
use crate::domain::ports::CheckoutStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for signed checkouts.
///
/// Uses `Arc<RwLock<HashMap<String, SignedCheckout>>>` to allow shared
/// concurrent access. Ideal for testing or single-run invocations where
/// persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryCheckoutStore {
    checkouts: Arc<RwLock<HashMap<String, SignedCheckout>>>,
}

impl InMemoryCheckoutStore {
    /// Creates a new, empty in-memory checkout store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CheckoutStore for InMemoryCheckoutStore {
    async fn store(&self, checkout: SignedCheckout) -> Result<()> {
        let mut checkouts = self.checkouts.write().await;
        checkouts.insert(checkout.reference.clone(), checkout);
        Ok(())
    }

    async fn get(&self, reference: &str) -> Result<Option<SignedCheckout>> {
        let checkouts = self.checkouts.read().await;
        Ok(checkouts.get(reference).cloned())
    }

    async fn exists(&self, reference: &str) -> Result<bool> {
        let checkouts = self.checkouts.read().await;
        Ok(checkouts.contains_key(reference))
    }

    async fn get_all(&self) -> Result<Vec<SignedCheckout>> {
        let checkouts = self.checkouts.read().await;
        Ok(checkouts.values().cloned().collect())
    }
}
