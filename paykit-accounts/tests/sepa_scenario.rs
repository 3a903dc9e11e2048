//! A SEPA account from construction to a signed-over witness digest.

use paykit_accounts::age_witness::{age_witness_hash, blinded_age_witness_input};
use paykit_accounts::codec::{decode_account, encode_account, EncodeMode};
use paykit_accounts::payload::{SepaAccountPayload, SepaInstantAccountPayload};
use paykit_accounts::test_utils::TestFixtures;
use paykit_accounts::{
    Account, AccountPayload, Constraint, CountryBasedAccount, FiatPaymentRail, PaymentAccount,
    PayloadVariant,
};

const IBAN: &str = "DE89370400440532013000";
const BIC: &str = "COBADEFFXXX";

fn accepted() -> Vec<String> {
    vec!["DE".into(), "FR".into(), "NL".into()]
}

#[test]
fn test_sepa_end_to_end() {
    let payload = SepaAccountPayload::new("sepa-1", "Alice Example", IBAN, BIC, "DE", accepted())
        .unwrap();
    payload.verify().unwrap();
    payload.verify().unwrap();
    assert_eq!(payload.payment_rail(), FiatPaymentRail::Sepa);
    assert_eq!(payload.default_account_name(), "SEPA-DE89");

    let account: PaymentAccount = Account::fresh(payload.clone()).into();
    assert!(matches!(
        account,
        PaymentAccount::CountryBased(CountryBasedAccount::Sepa(_))
    ));
    assert_eq!(account.account_name(), "SEPA-DE89");

    let decoded = decode_account(&encode_account(&account, EncodeMode::Wire)).unwrap();
    assert_eq!(decoded, account);

    let parts: [&[u8]; 4] = [b"SEPA", b"DE", IBAN.as_bytes(), BIC.as_bytes()];
    let expected = parts.concat();
    assert_eq!(decoded.payload().fingerprint(), expected);
    assert_eq!(decoded.payload().fingerprint(), payload.fingerprint());

    let payload: AccountPayload = payload.into();
    let digest = age_witness_hash(&payload, &TestFixtures::PUBLIC_KEY);
    assert_eq!(digest.len(), 32);
    assert_eq!(digest, age_witness_hash(&decoded.payload(), &TestFixtures::PUBLIC_KEY));
    assert!(blinded_age_witness_input(&payload).starts_with(&expected));
}

#[test]
fn test_display_lists_every_field() {
    let payload = TestFixtures::sepa();
    let display = payload.account_data_display_string();
    assert!(display.contains(IBAN));
    assert!(display.contains("DEUTDEFF"));
    assert!(display.contains("Alice"));
}

#[test]
fn test_iban_country_mismatch_fails_construction() {
    let err = SepaAccountPayload::new("sepa-1", "Alice Example", IBAN, BIC, "FR", accepted())
        .unwrap_err();
    let validation = err.validation().unwrap();
    assert_eq!(validation.field, "iban");
    assert_eq!(
        validation.constraint,
        Constraint::Mismatch {
            expected: "FR".into(),
            actual: "DE".into(),
        }
    );
}

#[test]
fn test_non_sepa_country_is_rejected() {
    let err = SepaInstantAccountPayload::new(
        "sepa-1",
        "Alice Example",
        "BR1800360305000010009795493C1",
        BIC,
        "BR",
        accepted(),
    )
    .unwrap_err();
    assert_eq!(
        err.validation().map(|e| (e.field.as_str(), e.constraint.clone())),
        Some(("country_code", Constraint::NotAllowed("BR".into())))
    );
}

#[test]
fn test_bad_checksum_is_rejected() {
    let err = SepaAccountPayload::new(
        "sepa-1",
        "Alice Example",
        "DE89370400440532013001",
        BIC,
        "DE",
        accepted(),
    )
    .unwrap_err();
    assert_eq!(
        err.validation().map(|e| (e.field.as_str(), e.constraint.clone())),
        Some(("iban", Constraint::Checksum))
    );
}

#[test]
fn test_accepted_countries_must_be_sepa() {
    let err = SepaAccountPayload::new(
        "sepa-1",
        "Alice Example",
        IBAN,
        BIC,
        "DE",
        vec!["DE".into(), "US".into()],
    )
    .unwrap_err();
    assert_eq!(
        err.validation().map(|e| e.field.as_str()),
        Some("accepted_country_codes")
    );
}
