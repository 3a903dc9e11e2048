//! Paykit fiat payment accounts.
//!
//! This crate models the payment data a user shares with a trade peer: one
//! typed payload per payment rail, the account record around it, a protobuf
//! wire codec, and the legacy-compatible fingerprints that account age
//! witnesses are computed over. It is stateless; signing keys and storage
//! stay with the caller.
//!
//! # Features
//!
//! - **Closed payload hierarchy**: flat, country based and bank payloads, each
//!   validated on construction and on decode
//! - **Wire codec**: a complete wire form and a hash-canonical form without
//!   private key material
//! - **Fingerprints**: byte-exact with data published by the predecessor
//!   system
//! - **Age witnesses**: blinded commitments signed through caller-supplied
//!   capabilities
//!
//! # Example
//!
//! ```
//! use paykit_accounts::codec::{decode_account, encode_account, EncodeMode};
//! use paykit_accounts::payload::SepaAccountPayload;
//! use paykit_accounts::{Account, PaymentAccount};
//!
//! let payload = SepaAccountPayload::new(
//!     "p1",
//!     "Alice Example",
//!     "DE89370400440532013000",
//!     "DEUTDEFF",
//!     "DE",
//!     vec!["DE".into(), "FR".into()],
//! )?;
//! let account: PaymentAccount = Account::fresh(payload).into();
//!
//! let bytes = encode_account(&account, EncodeMode::Wire);
//! assert_eq!(decode_account(&bytes)?, account);
//! # Ok::<(), paykit_accounts::AccountError>(())
//! ```

pub mod account;
pub mod age_witness;
pub mod catalog;
pub mod codec;
pub mod config;
pub mod errors;
pub mod fingerprint;
pub mod payload;
pub mod prelude;
pub mod validation;

/// Test fixtures for payloads and accounts.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use account::{
    Account, AccountOrigin, BankAccount, CountryBasedAccount, KeyAlgorithm, KeyPair,
    PaymentAccount, SigningIdentity,
};
pub use catalog::FiatPaymentRail;
pub use config::AccountConfig;
pub use errors::{AccountError, AccountErrorCode, Constraint, ValidationError};
pub use payload::{
    AccountPayload, BankAccountPayload, CountryBasedAccountPayload, PayloadFamily, PayloadVariant,
};

/// Common result alias for account operations.
pub type Result<T> = std::result::Result<T, AccountError>;
