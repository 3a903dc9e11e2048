//! Test utilities for account payloads.
//!
//! Available to this crate's tests and, with the `test-utils` feature, to
//! downstream crates.
//!
//! ## Usage
//!
//! ```rust
//! use paykit_accounts::test_utils::TestFixtures;
//!
//! let payload = TestFixtures::sepa();
//! assert_eq!(payload.iban(), "DE89370400440532013000");
//! ```

mod fixtures;

pub use fixtures::TestFixtures;
