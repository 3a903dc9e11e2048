//! Age witnesses and account timestamps signed with real Ed25519 keys.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use paykit_accounts::age_witness::{
    age_witness_hash, create_account_timestamp_request, create_age_witness_request,
    is_half_expired, is_half_expired_with, verify_account_timestamp, verify_age_witness,
    AccountAgeWitness, TimestampType, WitnessSigner, WitnessVerifier,
};
use paykit_accounts::test_utils::TestFixtures;
use paykit_accounts::{
    AccountConfig, AccountError, AccountOrigin, AccountPayload, KeyAlgorithm, KeyPair,
    PaymentAccount, Result, SigningIdentity,
};

struct Ed25519Signer(SigningKey);

impl WitnessSigner for Ed25519Signer {
    fn sign(&self, message: &[u8], algorithm: KeyAlgorithm) -> Result<Vec<u8>> {
        if algorithm != KeyAlgorithm::Ed25519 {
            return Err(AccountError::Signature(format!("unsupported {}", algorithm.as_str())));
        }
        Ok(self.0.sign(message).to_bytes().to_vec())
    }
}

struct Ed25519Verifier;

impl WitnessVerifier for Ed25519Verifier {
    fn verify(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
        _algorithm: KeyAlgorithm,
    ) -> Result<bool> {
        let key: [u8; 32] = public_key
            .try_into()
            .map_err(|_| AccountError::Signature("public key must be 32 bytes".into()))?;
        let key = VerifyingKey::from_bytes(&key)
            .map_err(|e| AccountError::Signature(e.to_string()))?;
        let signature =
            Signature::from_slice(signature).map_err(|e| AccountError::Signature(e.to_string()))?;
        Ok(key.verify(message, &signature).is_ok())
    }
}

const NOW: i64 = 1_700_000_100_000;

fn signing_key(seed: u8) -> SigningKey {
    SigningKey::from_bytes(&[seed; 32])
}

fn account_for(payload: AccountPayload, key: &SigningKey) -> PaymentAccount {
    let identity = SigningIdentity::new(
        KeyPair::new(key.verifying_key().to_bytes().to_vec(), key.to_bytes().to_vec()),
        KeyAlgorithm::Ed25519,
        AccountOrigin::Created,
    );
    PaymentAccount::from_payload("acc-1", TestFixtures::CREATION_DATE, "SEPA", payload, Some(identity))
}

#[test]
fn test_witness_request_verifies() {
    let key = signing_key(7);
    let account = account_for(TestFixtures::sepa().into(), &key);
    let request = create_age_witness_request(&account, NOW, &Ed25519Signer(key)).unwrap();

    assert_eq!(request.signature.len(), 64);
    assert_eq!(request.date, NOW);
    verify_age_witness(
        &AccountConfig::default(),
        &request.witness,
        &account.payload(),
        NOW,
        NOW,
        &request.public_key,
        &request.signature,
        request.key_algorithm,
        &Ed25519Verifier,
    )
    .unwrap();
}

#[test]
fn test_witness_from_other_key_is_rejected() {
    let account = account_for(TestFixtures::sepa().into(), &signing_key(7));
    let request = create_age_witness_request(&account, NOW, &Ed25519Signer(signing_key(8))).unwrap();

    let err = verify_age_witness(
        &AccountConfig::default(),
        &request.witness,
        &account.payload(),
        NOW,
        NOW,
        &request.public_key,
        &request.signature,
        request.key_algorithm,
        &Ed25519Verifier,
    )
    .unwrap_err();
    assert!(matches!(err, AccountError::AgeWitness(_)));
}

#[test]
fn test_witness_for_other_payload_is_rejected() {
    let key = signing_key(7);
    let account = account_for(TestFixtures::sepa().into(), &key);
    let request = create_age_witness_request(&account, NOW, &Ed25519Signer(key)).unwrap();

    let other: AccountPayload = TestFixtures::sepa_instant().into();
    let err = verify_age_witness(
        &AccountConfig::default(),
        &request.witness,
        &other,
        NOW,
        NOW,
        &request.public_key,
        &request.signature,
        request.key_algorithm,
        &Ed25519Verifier,
    )
    .unwrap_err();
    assert!(matches!(err, AccountError::AgeWitness(_)));
}

#[test]
fn test_tampered_date_breaks_signature() {
    let key = signing_key(7);
    let account = account_for(TestFixtures::zelle().into(), &key);
    let request = create_age_witness_request(&account, NOW, &Ed25519Signer(key)).unwrap();

    let backdated = AccountAgeWitness::new(request.witness.hash, NOW - 1_000_000);
    let err = verify_age_witness(
        &AccountConfig::default(),
        &backdated,
        &account.payload(),
        NOW,
        NOW,
        &request.public_key,
        &request.signature,
        request.key_algorithm,
        &Ed25519Verifier,
    )
    .unwrap_err();
    assert!(matches!(err, AccountError::AgeWitness(_)));
}

#[test]
fn test_peer_clock_outside_tolerance_is_rejected() {
    let key = signing_key(7);
    let account = account_for(TestFixtures::pix().into(), &key);
    let request = create_age_witness_request(&account, NOW, &Ed25519Signer(key)).unwrap();
    let config = AccountConfig::default().with_witness_clock_tolerance_ms(60_000);

    let verify_at = |peer_now: i64| {
        verify_age_witness(
            &config,
            &request.witness,
            &account.payload(),
            peer_now,
            NOW,
            &request.public_key,
            &request.signature,
            request.key_algorithm,
            &Ed25519Verifier,
        )
    };
    assert!(verify_at(NOW + 60_000).is_ok());
    assert!(verify_at(NOW - 60_000).is_ok());
    assert!(matches!(verify_at(NOW + 60_001), Err(AccountError::AgeWitness(_))));
}

#[test]
fn test_malformed_public_key_is_signature_error() {
    let key = signing_key(7);
    let account = account_for(TestFixtures::zelle().into(), &key);
    let request = create_age_witness_request(&account, NOW, &Ed25519Signer(key)).unwrap();
    let short_key = &request.public_key[..16];
    let witness = AccountAgeWitness::new(age_witness_hash(&account.payload(), short_key), NOW);

    let err = verify_age_witness(
        &AccountConfig::default(),
        &witness,
        &account.payload(),
        NOW,
        NOW,
        short_key,
        &request.signature,
        request.key_algorithm,
        &Ed25519Verifier,
    )
    .unwrap_err();
    assert!(matches!(err, AccountError::Signature(_)));
}

#[test]
fn test_unsupported_algorithm_fails_to_sign() {
    let key = signing_key(7);
    let identity = SigningIdentity::new(
        KeyPair::new(key.verifying_key().to_bytes().to_vec(), key.to_bytes().to_vec()),
        KeyAlgorithm::Ec,
        AccountOrigin::LegacyImport,
    );
    let account = PaymentAccount::from_payload(
        "acc-1",
        TestFixtures::CREATION_DATE,
        "Zelle",
        TestFixtures::zelle().into(),
        Some(identity),
    );
    let err = create_age_witness_request(&account, NOW, &Ed25519Signer(key)).unwrap_err();
    assert!(matches!(err, AccountError::Signature(_)));
}

#[test]
fn test_timestamp_request_verifies() {
    let key = signing_key(9);
    let account = account_for(TestFixtures::national_bank_ar().into(), &key);
    let request = create_account_timestamp_request(&account, &Ed25519Signer(key)).unwrap();

    assert_eq!(request.timestamp_type, TimestampType::Created);
    assert_eq!(request.timestamp.date, TestFixtures::CREATION_DATE);
    let mut expected = account.payload().fingerprint();
    expected.extend_from_slice(&TestFixtures::ZERO_SALT);
    assert_eq!(request.salted_fingerprint, expected);

    verify_account_timestamp(
        &request.timestamp,
        &account.payload(),
        &request.public_key,
        &request.signature,
        request.key_algorithm,
        &Ed25519Verifier,
    )
    .unwrap();
}

#[test]
fn test_timestamp_for_other_payload_is_rejected() {
    let key = signing_key(9);
    let account = account_for(TestFixtures::national_bank_ar().into(), &key);
    let request = create_account_timestamp_request(&account, &Ed25519Signer(key)).unwrap();

    let other: AccountPayload = TestFixtures::national_bank_se().into();
    let err = verify_account_timestamp(
        &request.timestamp,
        &other,
        &request.public_key,
        &request.signature,
        request.key_algorithm,
        &Ed25519Verifier,
    )
    .unwrap_err();
    assert!(matches!(err, AccountError::AgeWitness(_)));
}

#[test]
fn test_half_expiry_uses_configured_ttl() {
    let ttl = AccountConfig::default().witness_ttl_ms;
    assert!(!is_half_expired(NOW, ttl, NOW));
    assert!(!is_half_expired(NOW, ttl, NOW + ttl / 2 - 1));
    assert!(is_half_expired(NOW, ttl, NOW + ttl / 2));

    let config = AccountConfig::default().with_witness_ttl_ms(2 * 60 * 60 * 1000);
    assert!(!is_half_expired_with(&config, NOW, NOW + 60 * 60 * 1000 - 1));
    assert!(is_half_expired_with(&config, NOW, NOW + 60 * 60 * 1000));
}
