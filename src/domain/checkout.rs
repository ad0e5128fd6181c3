use super::signature::Signature;
use serde::{Deserialize, Serialize};

/// One checkout attempt as submitted by the storefront.
///
/// `reference` and `currency` are optional: a missing reference is generated
/// and a missing currency falls back to the default. The amount is in the
/// smallest currency unit; `u64` enforces the non-negative whole-number
/// invariant the gateway requires.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CheckoutRequest {
    pub reference: Option<String>,
    pub amount_in_cents: u64,
    pub currency: Option<String>,
}

/// A checkout attempt with its integrity signature, as sent to the gateway
/// and persisted alongside the order record.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct SignedCheckout {
    pub reference: String,
    pub amount_in_cents: u64,
    pub currency: String,
    pub signature: Signature,
}
