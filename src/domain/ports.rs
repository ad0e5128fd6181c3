use super::checkout::SignedCheckout;
use crate::error::Result;
use async_trait::async_trait;

/// Source of wall-clock time for reference generation.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u128;
}

/// Source of short random tokens for reference suffixes.
///
/// Uniqueness is probabilistic, not guaranteed; implementations are not
/// required to be cryptographically secure.
pub trait TokenSource: Send + Sync {
    /// Returns `len` uppercase base-36 characters.
    fn token(&self, len: usize) -> String;
}

/// Keyed store of signed checkouts, indexed by transaction reference.
#[async_trait]
pub trait CheckoutStore: Send + Sync {
    async fn store(&self, checkout: SignedCheckout) -> Result<()>;
    async fn get(&self, reference: &str) -> Result<Option<SignedCheckout>>;
    async fn exists(&self, reference: &str) -> Result<bool>;
    async fn get_all(&self) -> Result<Vec<SignedCheckout>>;
}

pub type ClockBox = Box<dyn Clock>;
pub type TokenSourceBox = Box<dyn TokenSource>;
pub type CheckoutStoreBox = Box<dyn CheckoutStore>;
