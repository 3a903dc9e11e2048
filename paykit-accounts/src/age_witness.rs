//! Account age witnesses and account timestamps.
//!
//! Both prove that an account's payment data existed at a point in time
//! without revealing the data. The witness commits to
//! `SHA-256(age_witness_input_data ‖ salt ‖ public_key)`, the timestamp to
//! `SHA-256(fingerprint ‖ salt ‖ public_key)`. The signed message is the
//! hash-canonical encoding of the witness or timestamp record.
//!
//! Signing and verification go through [`WitnessSigner`] and
//! [`WitnessVerifier`] so key handling stays with the caller. Publishing to
//! oracles is out of scope; this module only builds and checks requests.

use sha2::{Digest, Sha256};

use crate::account::{AccountOrigin, KeyAlgorithm, PaymentAccount};
use crate::codec::{encode_message, proto, EncodeMode};
use crate::config::AccountConfig;
use crate::payload::AccountPayload;
use crate::validation::validate_date;
use crate::{AccountError, Result};

/// Signs with the private key of an account.
pub trait WitnessSigner {
    /// Sign `message` with the given algorithm.
    fn sign(&self, message: &[u8], algorithm: KeyAlgorithm) -> Result<Vec<u8>>;
}

/// Checks a signature against a public key.
pub trait WitnessVerifier {
    /// `Ok(false)` for a well-formed but wrong signature, `Err` if the key or
    /// signature cannot be parsed.
    fn verify(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
        algorithm: KeyAlgorithm,
    ) -> Result<bool>;
}

/// `age_witness_input_data ‖ salt`.
pub fn blinded_age_witness_input(payload: &AccountPayload) -> Vec<u8> {
    let mut data = payload.age_witness_input_data();
    data.extend_from_slice(payload.salt());
    data
}

/// SHA-256 of the blinded input followed by the public key bytes.
pub fn age_witness_hash(payload: &AccountPayload, public_key: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(blinded_age_witness_input(payload));
    hasher.update(public_key);
    hasher.finalize().into()
}

/// `fingerprint ‖ salt`.
pub fn salted_fingerprint(payload: &AccountPayload) -> Vec<u8> {
    let mut data = payload.fingerprint();
    data.extend_from_slice(payload.salt());
    data
}

/// SHA-256 of the salted fingerprint followed by the public key bytes.
pub fn account_timestamp_hash(payload: &AccountPayload, public_key: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salted_fingerprint(payload));
    hasher.update(public_key);
    hasher.finalize().into()
}

/// Whether a published record should be republished.
pub fn is_half_expired(publish_date: i64, ttl_ms: i64, now: i64) -> bool {
    publish_date <= now.saturating_sub(ttl_ms / 2)
}

/// [`is_half_expired`] with the configured `witness_ttl_ms`.
pub fn is_half_expired_with(config: &AccountConfig, publish_date: i64, now: i64) -> bool {
    is_half_expired(publish_date, config.witness_ttl_ms, now)
}

/// Commitment to an account's payment data at `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountAgeWitness {
    pub hash: [u8; 32],
    /// Unix milliseconds.
    pub date: i64,
}

impl AccountAgeWitness {
    pub fn new(hash: [u8; 32], date: i64) -> Self {
        Self { hash, date }
    }

    /// Bytes covered by the signature.
    pub fn signing_message(&self) -> Vec<u8> {
        encode_message(
            proto::AccountAgeWitness {
                hash: self.hash.to_vec(),
                date: self.date,
            },
            EncodeMode::HashCanonical,
        )
    }
}

/// Everything an oracle needs to authorize a witness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeWitnessRequest {
    pub witness: AccountAgeWitness,
    pub blinded_input: Vec<u8>,
    pub public_key: Vec<u8>,
    pub signature: Vec<u8>,
    pub key_algorithm: KeyAlgorithm,
    pub date: i64,
}

/// Build and sign a witness request for an account.
///
/// Fails with [`AccountError::Signature`] if the account has no signing
/// identity or the signer fails, and with [`AccountError::FieldValidation`]
/// if `now` predates the network launch.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(account, signer), fields(id = %account.id())))]
pub fn create_age_witness_request(
    account: &PaymentAccount,
    now: i64,
    signer: &dyn WitnessSigner,
) -> Result<AgeWitnessRequest> {
    validate_date("date", now, now)?;
    let signing = account
        .signing()
        .ok_or_else(|| AccountError::Signature("account has no signing identity".into()))?;
    let payload = account.payload();
    let public_key = signing.public_key().to_vec();
    let witness = AccountAgeWitness::new(age_witness_hash(&payload, &public_key), now);
    let signature = signer.sign(&witness.signing_message(), signing.key_algorithm)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(hash = %hex::encode(witness.hash), "created age witness");

    Ok(AgeWitnessRequest {
        blinded_input: blinded_age_witness_input(&payload),
        witness,
        public_key,
        signature,
        key_algorithm: signing.key_algorithm,
        date: now,
    })
}

/// Check a peer's witness against the payload they presented.
///
/// Rejects a peer clock more than `witness_clock_tolerance_ms` away from
/// `now`, a witness date before the network launch or more than two hours
/// ahead of `now`, a witness hash that does not commit to `payload` and
/// `public_key`, and a signature that does not verify.
#[allow(clippy::too_many_arguments)]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(config, witness, payload, public_key, signature, verifier))
)]
pub fn verify_age_witness(
    config: &AccountConfig,
    witness: &AccountAgeWitness,
    payload: &AccountPayload,
    peer_now: i64,
    now: i64,
    public_key: &[u8],
    signature: &[u8],
    key_algorithm: KeyAlgorithm,
    verifier: &dyn WitnessVerifier,
) -> Result<()> {
    let drift = peer_now.saturating_sub(now).saturating_abs();
    if drift > config.witness_clock_tolerance_ms {
        return Err(rejected(format!("peer clock off by {} ms", drift)));
    }
    if let Err(err) = validate_date("date", witness.date, now) {
        return Err(rejected(err.to_string()));
    }
    if witness.hash != age_witness_hash(payload, public_key) {
        return Err(rejected("witness hash does not match payload"));
    }
    if !verifier.verify(public_key, &witness.signing_message(), signature, key_algorithm)? {
        return Err(rejected("signature verification failed"));
    }
    Ok(())
}

/// Who created the account a timestamp is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampType {
    LegacyImport,
    Created,
}

impl From<AccountOrigin> for TimestampType {
    fn from(origin: AccountOrigin) -> Self {
        match origin {
            AccountOrigin::LegacyImport => Self::LegacyImport,
            AccountOrigin::Created => Self::Created,
        }
    }
}

/// Commitment to an account's fingerprint at `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountTimestamp {
    pub hash: [u8; 32],
    /// Unix milliseconds.
    pub date: i64,
}

impl AccountTimestamp {
    pub fn new(hash: [u8; 32], date: i64) -> Self {
        Self { hash, date }
    }

    /// Timestamp for an account, dated at its creation.
    ///
    /// Fails if the account has no signing identity.
    pub fn for_account(account: &PaymentAccount) -> Result<Self> {
        let signing = account
            .signing()
            .ok_or_else(|| AccountError::Signature("account has no signing identity".into()))?;
        Ok(Self::new(
            account_timestamp_hash(&account.payload(), signing.public_key()),
            account.creation_date(),
        ))
    }

    pub fn signing_message(&self) -> Vec<u8> {
        encode_message(
            proto::AccountTimestamp {
                hash: self.hash.to_vec(),
                date: self.date,
            },
            EncodeMode::HashCanonical,
        )
    }
}

/// Signed timestamp request for an oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountTimestampRequest {
    pub timestamp_type: TimestampType,
    pub timestamp: AccountTimestamp,
    pub salted_fingerprint: Vec<u8>,
    pub public_key: Vec<u8>,
    pub signature: Vec<u8>,
    pub key_algorithm: KeyAlgorithm,
}

/// Build and sign a timestamp request for an account.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(account, signer), fields(id = %account.id())))]
pub fn create_account_timestamp_request(
    account: &PaymentAccount,
    signer: &dyn WitnessSigner,
) -> Result<AccountTimestampRequest> {
    let timestamp = AccountTimestamp::for_account(account)?;
    let signing = account
        .signing()
        .ok_or_else(|| AccountError::Signature("account has no signing identity".into()))?;
    let signature = signer.sign(&timestamp.signing_message(), signing.key_algorithm)?;
    Ok(AccountTimestampRequest {
        timestamp_type: signing.account_origin.into(),
        timestamp,
        salted_fingerprint: salted_fingerprint(&account.payload()),
        public_key: signing.public_key().to_vec(),
        signature,
        key_algorithm: signing.key_algorithm,
    })
}

/// Check a timestamp against a payload, public key and signature.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(timestamp, payload, public_key, signature, verifier))
)]
pub fn verify_account_timestamp(
    timestamp: &AccountTimestamp,
    payload: &AccountPayload,
    public_key: &[u8],
    signature: &[u8],
    key_algorithm: KeyAlgorithm,
    verifier: &dyn WitnessVerifier,
) -> Result<()> {
    if timestamp.hash != account_timestamp_hash(payload, public_key) {
        return Err(rejected("timestamp hash does not match payload"));
    }
    if !verifier.verify(public_key, &timestamp.signing_message(), signature, key_algorithm)? {
        return Err(rejected("signature verification failed"));
    }
    Ok(())
}

fn rejected(reason: impl Into<String>) -> AccountError {
    let reason = reason.into();
    #[cfg(feature = "tracing")]
    tracing::warn!(%reason, "age witness rejected");
    AccountError::AgeWitness(reason)
}
