use crate::error::{CheckoutError, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Environment variable holding the shared secret agreed with the gateway.
pub const INTEGRITY_SECRET_ENV: &str = "WOMPI_INTEGRITY_SECRET";

/// Currency applied when a checkout request does not name one.
pub const DEFAULT_CURRENCY: &str = "COP";

/// The shared secret used to sign checkout payloads.
///
/// The value is a credential: it never appears in `Debug` output, is never
/// serialized, and only the signer reads it. An empty secret is rejected at
/// construction so a misconfigured deployment cannot produce forgeable
/// signatures.
#[derive(Clone)]
pub struct IntegritySecret(String);

impl IntegritySecret {
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(CheckoutError::ConfigurationError(format!(
                "integrity secret is empty; set {INTEGRITY_SECRET_ENV}"
            )));
        }
        Ok(Self(secret))
    }

    /// Loads the secret from `WOMPI_INTEGRITY_SECRET`.
    ///
    /// A missing or empty variable is a deployment defect, not a transient
    /// condition: the error propagates so the checkout flow aborts before
    /// anything reaches the gateway.
    pub fn from_env() -> Result<Self> {
        match std::env::var(INTEGRITY_SECRET_ENV) {
            Ok(value) => Self::new(value),
            Err(_) => Err(CheckoutError::ConfigurationError(format!(
                "{INTEGRITY_SECRET_ENV} is not set"
            ))),
        }
    }
}

impl fmt::Debug for IntegritySecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntegritySecret").field(&"[REDACTED]").finish()
    }
}

/// A computed integrity signature: 64 lowercase hex characters.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Signature(String);

impl Signature {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computes the integrity signature the payment gateway verifies.
///
/// The gateway recomputes the same digest from the transaction fields it
/// receives and rejects the transaction on mismatch, so the construction
/// below is a wire contract: SHA-256 over the concatenation of reference,
/// amount in cents (decimal), currency and secret, in that order, with no
/// separators.
pub struct IntegritySigner {
    secret: IntegritySecret,
}

impl IntegritySigner {
    pub fn new(secret: IntegritySecret) -> Self {
        Self { secret }
    }

    /// Signs one transaction attempt.
    ///
    /// Pure and deterministic: identical inputs always produce the identical
    /// hex string. Field order and the absence of delimiters must match the
    /// gateway's own concatenation rule bit-for-bit.
    pub fn sign(&self, reference: &str, amount_in_cents: u64, currency: &str) -> Signature {
        let mut hasher = Sha256::new();
        hasher.update(reference.as_bytes());
        hasher.update(amount_in_cents.to_string().as_bytes());
        hasher.update(currency.as_bytes());
        hasher.update(self.secret.0.as_bytes());
        Signature(format!("{:x}", hasher.finalize()))
    }
}
