use crate::domain::checkout::{CheckoutRequest, SignedCheckout};
use crate::domain::ports::CheckoutStoreBox;
use crate::domain::reference::ReferenceGenerator;
use crate::domain::signature::{DEFAULT_CURRENCY, IntegritySigner};
use crate::error::{CheckoutError, Result};

/// The main entry point for the checkout signing application.
///
/// `CheckoutEngine` resolves references and currencies, signs each checkout
/// attempt, and records the result so a reference is never signed twice.
/// It owns the storage backend and ensures sequential consistency by awaiting
/// storage operations for each checkout.
pub struct CheckoutEngine {
    signer: IntegritySigner,
    references: ReferenceGenerator,
    store: CheckoutStoreBox,
}

impl CheckoutEngine {
    /// Creates a new `CheckoutEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `signer` - The integrity signer, already holding the shared secret.
    /// * `references` - The generator for caller-omitted references.
    /// * `store` - The store recording signed checkouts.
    pub fn new(
        signer: IntegritySigner,
        references: ReferenceGenerator,
        store: CheckoutStoreBox,
    ) -> Self {
        Self {
            signer,
            references,
            store,
        }
    }

    /// Signs one checkout request and records the result.
    ///
    /// A caller-supplied reference that was already signed is rejected: the
    /// gateway requires references to be unique per transaction attempt, and
    /// silently re-signing could mask an amount mismatch.
    pub async fn sign_checkout(&self, request: CheckoutRequest) -> Result<SignedCheckout> {
        let reference = match request.reference {
            Some(reference) if !reference.is_empty() => reference,
            _ => self.references.generate(),
        };

        if self.store.exists(&reference).await? {
            return Err(CheckoutError::ValidationError(format!(
                "reference already signed: {reference}"
            )));
        }

        let currency = match request.currency {
            Some(currency) if !currency.is_empty() => currency,
            _ => DEFAULT_CURRENCY.to_string(),
        };

        let signature = self
            .signer
            .sign(&reference, request.amount_in_cents, &currency);

        let signed = SignedCheckout {
            reference,
            amount_in_cents: request.amount_in_cents,
            currency,
            signature,
        };
        self.store.store(signed.clone()).await?;

        Ok(signed)
    }

    /// Consumes the engine and returns all recorded signed checkouts,
    /// ordered by reference for stable output.
    pub async fn into_results(self) -> Result<Vec<SignedCheckout>> {
        let mut checkouts = self.store.get_all().await?;
        checkouts.sort_by(|a, b| a.reference.cmp(&b.reference));
        Ok(checkouts)
    }
}
