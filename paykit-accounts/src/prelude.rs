//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits. Import
//! everything with:
//!
//! ```rust
//! use paykit_accounts::prelude::*;
//! ```
//!
//! ## What's Included
//!
//! - Payloads: `AccountPayload`, its nested enums and the `PayloadVariant` trait
//! - Accounts: `Account`, `PaymentAccount`, `SigningIdentity`
//! - Error types: `AccountError`, `AccountErrorCode`, `Result`
//! - Codec: `AccountCodec`, `EncodeMode`
//! - Age witnesses: signer and verifier capabilities

// Payloads
pub use crate::payload::{
    AccountPayload, BankAccountPayload, CountryBasedAccountPayload, PayloadFamily, PayloadVariant,
};

// Accounts
pub use crate::account::{
    Account, AccountOrigin, KeyAlgorithm, KeyPair, PaymentAccount, SigningIdentity,
};

// Error handling
pub use crate::errors::{AccountError, AccountErrorCode, Constraint, ValidationError};
pub use crate::Result;

// Catalog
pub use crate::catalog::FiatPaymentRail;

// Configuration and codec
pub use crate::codec::{AccountCodec, EncodeMode};
pub use crate::config::AccountConfig;

// Age witnesses
pub use crate::age_witness::{
    AccountAgeWitness, AccountTimestamp, WitnessSigner, WitnessVerifier,
};
