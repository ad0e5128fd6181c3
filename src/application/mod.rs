//! Application layer orchestrating the checkout signing flow.
//!
//! This module defines the `CheckoutEngine`, the primary entry point for
//! turning checkout requests into signed checkout records.

pub mod engine;
