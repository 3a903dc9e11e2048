//! Protobuf codec for payloads and accounts.
//!
//! Two modes share one schema. [`EncodeMode::Wire`] is the complete form used
//! for storage and transport. [`EncodeMode::HashCanonical`] first runs every
//! message through [`ResolveForHash`] and is the input for content hashes and
//! signatures.
//!
//! Decoding is all-or-nothing: an unknown tag, a missing field or a payload
//! that fails verification rejects the whole message.
//!
//! # Example
//!
//! ```
//! use paykit_accounts::codec::{decode_payload, encode_payload, EncodeMode};
//! use paykit_accounts::payload::{AccountPayload, ZelleAccountPayload};
//!
//! let payload: AccountPayload = ZelleAccountPayload::new("p1", "Alice", "alice@example.com")?.into();
//! let bytes = encode_payload(&payload, EncodeMode::Wire);
//! assert_eq!(decode_payload(&bytes)?, payload);
//! # Ok::<(), paykit_accounts::AccountError>(())
//! ```

mod account;
mod payload;
pub mod proto;

use prost::Message;
use sha2::{Digest, Sha256};

use crate::account::PaymentAccount;
use crate::config::AccountConfig;
use crate::payload::AccountPayload;
use crate::{AccountError, Result};

/// Which form of a message to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodeMode {
    /// Every field, for storage and transport.
    Wire,
    /// Deterministic form for hashing and signing.
    HashCanonical,
}

/// Reduce a message to its hash-bearing form.
pub trait ResolveForHash {
    fn resolve_for_hash(self) -> Self;
}

impl ResolveForHash for proto::AccountPayload {
    // Payload data is identity-bearing in full.
    fn resolve_for_hash(self) -> Self {
        self
    }
}

impl ResolveForHash for proto::Account {
    fn resolve_for_hash(mut self) -> Self {
        self.account_payload = self.account_payload.map(ResolveForHash::resolve_for_hash);
        if let Some(signing) = self.signing.as_mut() {
            signing.private_key.clear();
        }
        self
    }
}

impl ResolveForHash for proto::AccountAgeWitness {
    fn resolve_for_hash(self) -> Self {
        self
    }
}

impl ResolveForHash for proto::AccountTimestamp {
    fn resolve_for_hash(self) -> Self {
        self
    }
}

/// Serialize a message in the requested mode. The only place bytes are
/// produced.
pub fn encode_message<M>(message: M, mode: EncodeMode) -> Vec<u8>
where
    M: Message + ResolveForHash,
{
    let message = match mode {
        EncodeMode::Wire => message,
        EncodeMode::HashCanonical => message.resolve_for_hash(),
    };
    message.encode_to_vec()
}

/// Encode a payload.
pub fn encode_payload(payload: &AccountPayload, mode: EncodeMode) -> Vec<u8> {
    encode_message(proto::AccountPayload::from(payload), mode)
}

/// Decode and verify a payload.
pub fn decode_payload(bytes: &[u8]) -> Result<AccountPayload> {
    AccountPayload::try_from(proto::AccountPayload::decode(bytes)?)
}

/// Encode an account together with its payload.
pub fn encode_account(account: &PaymentAccount, mode: EncodeMode) -> Vec<u8> {
    encode_message(proto::Account::from(account), mode)
}

/// Decode an account. The account variant must match the payload variant.
pub fn decode_account(bytes: &[u8]) -> Result<PaymentAccount> {
    PaymentAccount::try_from(proto::Account::decode(bytes)?)
}

/// SHA-256 of the hash-canonical encoding of an account.
pub fn account_content_hash(account: &PaymentAccount) -> [u8; 32] {
    Sha256::digest(encode_account(account, EncodeMode::HashCanonical)).into()
}

/// SHA-256 of the hash-canonical encoding of a payload.
pub fn payload_content_hash(payload: &AccountPayload) -> [u8; 32] {
    Sha256::digest(encode_payload(payload, EncodeMode::HashCanonical)).into()
}

/// Codec bound to an [`AccountConfig`].
///
/// Applies the configured size limit in both directions. The free functions
/// in this module apply no limit.
#[derive(Debug, Clone, Default)]
pub struct AccountCodec {
    config: AccountConfig,
}

impl AccountCodec {
    /// Create a codec, rejecting an invalid configuration.
    pub fn new(config: AccountConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AccountConfig {
        &self.config
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, payload), fields(rail = %payload.payment_rail())))]
    pub fn encode_payload(&self, payload: &AccountPayload, mode: EncodeMode) -> Result<Vec<u8>> {
        self.check_len(encode_payload(payload, mode))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, bytes), fields(len = bytes.len())))]
    pub fn decode_payload(&self, bytes: &[u8]) -> Result<AccountPayload> {
        self.check_input(bytes)?;
        decode_payload(bytes).inspect_err(|_err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "rejected payload bytes");
        })
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, account), fields(id = %account.id())))]
    pub fn encode_account(&self, account: &PaymentAccount, mode: EncodeMode) -> Result<Vec<u8>> {
        self.check_len(encode_account(account, mode))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, bytes), fields(len = bytes.len())))]
    pub fn decode_account(&self, bytes: &[u8]) -> Result<PaymentAccount> {
        self.check_input(bytes)?;
        decode_account(bytes).inspect_err(|_err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "rejected account bytes");
        })
    }

    fn check_input(&self, bytes: &[u8]) -> Result<()> {
        if bytes.len() > self.config.max_wire_len {
            #[cfg(feature = "tracing")]
            tracing::warn!(len = bytes.len(), max = self.config.max_wire_len, "oversized input");
            return Err(AccountError::Decode(format!(
                "{} bytes exceeds limit of {}",
                bytes.len(),
                self.config.max_wire_len
            )));
        }
        Ok(())
    }

    fn check_len(&self, bytes: Vec<u8>) -> Result<Vec<u8>> {
        self.check_input(&bytes)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{AccountOrigin, KeyAlgorithm, KeyPair, SigningIdentity};
    use crate::errors::Constraint;
    use crate::test_utils::TestFixtures;

    fn signed_account() -> PaymentAccount {
        let signing = SigningIdentity::new(
            KeyPair::new(vec![1; 32], vec![2; 32]),
            KeyAlgorithm::Ed25519,
            AccountOrigin::Created,
        );
        PaymentAccount::from_payload("acc-1", 1_700_000_000_000, "Zelle", TestFixtures::zelle().into(), Some(signing))
    }

    #[test]
    fn test_hash_mode_drops_private_key() {
        let account = signed_account();
        let wire = decode_account(&encode_account(&account, EncodeMode::Wire)).unwrap();
        assert_eq!(wire, account);

        let hashed = decode_account(&encode_account(&account, EncodeMode::HashCanonical)).unwrap();
        let signing = hashed.signing().unwrap();
        assert!(signing.key_pair.private_key.is_empty());
        assert_eq!(signing.key_pair.public_key, vec![1; 32]);
    }

    #[test]
    fn test_content_hash_ignores_private_key() {
        let a = signed_account();
        let b = match a.clone() {
            PaymentAccount::Zelle(account) => {
                let signing = SigningIdentity::new(
                    KeyPair::new(vec![1; 32], vec![9; 32]),
                    KeyAlgorithm::Ed25519,
                    AccountOrigin::Created,
                );
                PaymentAccount::Zelle(account.with_signing(signing))
            }
            other => other,
        };
        assert_ne!(a, b);
        assert_eq!(account_content_hash(&a), account_content_hash(&b));
    }

    #[test]
    fn test_payload_hash_mode_matches_wire() {
        for payload in TestFixtures::all_payloads() {
            assert_eq!(
                encode_payload(&payload, EncodeMode::Wire),
                encode_payload(&payload, EncodeMode::HashCanonical)
            );
        }
    }

    #[test]
    fn test_codec_rejects_oversized_input() {
        let codec = AccountCodec::new(AccountConfig::new().with_max_wire_len(16)).unwrap();
        let bytes = encode_payload(&TestFixtures::sepa().into(), EncodeMode::Wire);
        assert!(bytes.len() > 16);
        assert!(matches!(codec.decode_payload(&bytes), Err(AccountError::Decode(_))));
        assert!(matches!(
            codec.encode_payload(&TestFixtures::sepa().into(), EncodeMode::Wire),
            Err(AccountError::Decode(_))
        ));
    }

    #[test]
    fn test_codec_rejects_invalid_config() {
        let result = AccountCodec::new(AccountConfig::new().with_max_wire_len(0));
        assert!(matches!(result, Err(AccountError::Config(_))));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let result = decode_payload(&[0xff, 0xff, 0xff]);
        assert!(matches!(result, Err(AccountError::Decode(_))));
    }

    #[test]
    fn test_empty_message_has_no_variant() {
        let result = decode_payload(&[]);
        assert!(matches!(
            result,
            Err(AccountError::UnresolvableVariant { level: "payload", .. })
        ));
    }

    #[test]
    fn test_tampered_field_fails_verification() {
        let mut message = proto::AccountPayload::from(&AccountPayload::from(TestFixtures::zelle()));
        if let Some(proto::account_payload::Message::ZelleAccountPayload(zelle)) = message.message.as_mut() {
            zelle.holder_name = String::new();
        }
        let err = decode_payload(&message.encode_to_vec()).unwrap_err();
        assert_eq!(
            err.validation().map(|e| (e.field.as_str(), &e.constraint)),
            Some(("holder_name", &Constraint::Empty))
        );
    }
}
