//! Construction-time validation at field boundaries.

use paykit_accounts::payload::bank::{ACCOUNT_NR_MAX_LEN, BANK_NAME_MAX_LEN};
use paykit_accounts::payload::flat::{
    HOLDER_NAME_MAX_LEN, HOLDER_NAME_MIN_LEN, INTERAC_ANSWER_MAX_LEN, INTERAC_ANSWER_MIN_LEN,
    INTERAC_QUESTION_MAX_LEN,
};
use paykit_accounts::payload::{
    BankAccountType, BankDetails, FasterPaymentsAccountPayload, InteracETransferAccountPayload,
    NationalBankAccountPayload, PixAccountPayload, ZelleAccountPayload,
};
use paykit_accounts::test_utils::TestFixtures;
use paykit_accounts::{AccountError, Constraint, PayloadVariant};

fn salt() -> Vec<u8> {
    TestFixtures::ZERO_SALT.to_vec()
}

fn field_error(err: &AccountError) -> (&str, &Constraint) {
    let validation = err.validation().expect("validation error");
    (validation.field.as_str(), &validation.constraint)
}

fn zelle_with_holder(holder: &str) -> Result<ZelleAccountPayload, AccountError> {
    ZelleAccountPayload::with_salt("id", salt(), holder, "alice@example.com")
}

#[test]
fn test_holder_name_bounds() {
    let err = zelle_with_holder("").unwrap_err();
    assert_eq!(field_error(&err), ("holder_name", &Constraint::Empty));

    let err = zelle_with_holder("A").unwrap_err();
    assert_eq!(
        field_error(&err),
        ("holder_name", &Constraint::TooShort { min: HOLDER_NAME_MIN_LEN, actual: 1 })
    );

    let too_long = "A".repeat(HOLDER_NAME_MAX_LEN + 1);
    let err = zelle_with_holder(&too_long).unwrap_err();
    assert_eq!(
        field_error(&err),
        (
            "holder_name",
            &Constraint::TooLong { max: HOLDER_NAME_MAX_LEN, actual: HOLDER_NAME_MAX_LEN + 1 }
        )
    );

    assert!(zelle_with_holder(&"A".repeat(HOLDER_NAME_MIN_LEN)).is_ok());
    assert!(zelle_with_holder(&"A".repeat(HOLDER_NAME_MAX_LEN)).is_ok());
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let name = "Ä".repeat(HOLDER_NAME_MAX_LEN);
    assert!(name.len() > HOLDER_NAME_MAX_LEN);
    assert!(zelle_with_holder(&name).is_ok());
}

#[test]
fn test_interac_question_and_answer_bounds() {
    let build = |question: &str, answer: &str| {
        InteracETransferAccountPayload::with_salt(
            "id",
            salt(),
            "Alice",
            "alice@example.com",
            question,
            answer,
        )
    };
    assert!(build(
        "q".repeat(INTERAC_QUESTION_MAX_LEN).as_str(),
        "a".repeat(INTERAC_ANSWER_MIN_LEN).as_str(),
    ).is_ok());
    assert!(build("Question", "a".repeat(INTERAC_ANSWER_MAX_LEN).as_str()).is_ok());

    let err = build("q".repeat(INTERAC_QUESTION_MAX_LEN + 1).as_str(), "Answer").unwrap_err();
    assert_eq!(field_error(&err).0, "question");

    let err = build("Question", "a".repeat(INTERAC_ANSWER_MIN_LEN - 1).as_str()).unwrap_err();
    assert_eq!(field_error(&err).0, "answer");
}

#[test]
fn test_faster_payments_digit_rules() {
    let build = |sort_code: &str, account_nr: &str| {
        FasterPaymentsAccountPayload::with_salt("id", salt(), "Alice", sort_code, account_nr)
    };
    assert!(build("123456", "12345678").is_ok());
    assert_eq!(field_error(&build("12345", "12345678").unwrap_err()).0, "sort_code");
    assert_eq!(field_error(&build("12345a", "12345678").unwrap_err()).0, "sort_code");
    assert_eq!(field_error(&build("123456", "123456789").unwrap_err()).0, "account_nr");
}

#[test]
fn test_zelle_rejects_invalid_contact() {
    let err = ZelleAccountPayload::with_salt("id", salt(), "Alice", "not a contact").unwrap_err();
    assert_eq!(field_error(&err).0, "email_or_mobile_nr");
    assert!(ZelleAccountPayload::with_salt("id", salt(), "Alice", "+1 555-123-4567").is_ok());
}

#[test]
fn test_empty_id_and_salt_are_rejected() {
    let err = ZelleAccountPayload::with_salt("", salt(), "Alice", "alice@example.com").unwrap_err();
    assert_eq!(field_error(&err), ("id", &Constraint::Empty));

    let err = ZelleAccountPayload::with_salt("id", vec![], "Alice", "alice@example.com").unwrap_err();
    assert_eq!(field_error(&err), ("salt", &Constraint::Empty));
}

#[test]
fn test_fresh_payload_gets_random_salt() {
    let a = PixAccountPayload::new("id", "Alice", "pix-key").unwrap();
    let b = PixAccountPayload::new("id", "Alice", "pix-key").unwrap();
    assert_eq!(a.salt().len(), 32);
    assert_ne!(a.salt(), b.salt());
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn test_account_type_required_in_us_only() {
    let us = BankDetails::new("US", "USD", "123456789")
        .with_holder_name("Alice")
        .with_bank_name("Bank")
        .with_bank_id("111000025");
    let err = NationalBankAccountPayload::with_salt("id", salt(), us.clone()).unwrap_err();
    assert_eq!(field_error(&err), ("bank_account_type", &Constraint::Missing));

    let us = us.with_bank_account_type(BankAccountType::Checking);
    assert!(NationalBankAccountPayload::with_salt("id", salt(), us).is_ok());

    let de = BankDetails::new("DE", "EUR", "0532013000")
        .with_holder_name("Alice")
        .with_bank_name("Commerzbank")
        .with_bank_id("COBADEFF")
        .with_branch_id("370");
    assert!(NationalBankAccountPayload::with_salt("id", salt(), de).is_ok());
}

#[test]
fn test_country_requirements_name_the_missing_field() {
    let ar = TestFixtures::ar_bank_details();
    let mut without_holder_id = ar.clone();
    without_holder_id.holder_id = None;
    let err = NationalBankAccountPayload::with_salt("id", salt(), without_holder_id).unwrap_err();
    assert_eq!(field_error(&err), ("holder_id", &Constraint::Missing));

    let mut without_cbu = ar;
    without_cbu.national_account_id = None;
    let err = NationalBankAccountPayload::with_salt("id", salt(), without_cbu).unwrap_err();
    assert_eq!(field_error(&err), ("national_account_id", &Constraint::Missing));
}

#[test]
fn test_bank_field_bounds() {
    let mut bank = TestFixtures::se_bank_details();
    bank.account_nr = "1".repeat(ACCOUNT_NR_MAX_LEN + 1);
    let err = NationalBankAccountPayload::with_salt("id", salt(), bank).unwrap_err();
    assert_eq!(field_error(&err).0, "account_nr");

    let bank = TestFixtures::se_bank_details().with_bank_name("B".repeat(BANK_NAME_MAX_LEN + 1));
    let err = NationalBankAccountPayload::with_salt("id", salt(), bank).unwrap_err();
    assert_eq!(field_error(&err).0, "bank_name");
}

#[test]
fn test_unsupported_country_is_rejected() {
    let bank = BankDetails::new("XX", "EUR", "1234567");
    let err = NationalBankAccountPayload::with_salt("id", salt(), bank).unwrap_err();
    assert_eq!(field_error(&err), ("country_code", &Constraint::NotAllowed("XX".into())));
}

#[test]
fn test_validation_errors_are_recoverable() {
    let err = zelle_with_holder("").unwrap_err();
    assert!(err.is_recoverable());
    assert!(err.to_string().contains("holder_name"));
}

mod field_bounds {
    use paykit_accounts::payload::bank::{ACCOUNT_NR_MAX_LEN, BANK_NAME_MAX_LEN, ROUTING_NR_LEN};
    use paykit_accounts::payload::country_based::{
        ADDRESS_MAX_LEN, ADDRESS_MIN_LEN, CITY_MAX_LEN, CITY_MIN_LEN, STATE_MAX_LEN, STATE_MIN_LEN,
        SWIFT_CODE_MAX_LEN, SWIFT_CODE_MIN_LEN,
    };
    use paykit_accounts::payload::flat::{
        ACCOUNT_DATA_MAX_LEN, EXTRA_INFO_MAX_LEN, HOLDER_NAME_MAX_LEN, HOLDER_NAME_MIN_LEN,
        INTERAC_ANSWER_MAX_LEN, INTERAC_ANSWER_MIN_LEN, INTERAC_QUESTION_MAX_LEN,
        POSTAL_ADDRESS_MAX_LEN, POSTAL_ADDRESS_MIN_LEN, SORT_CODE_LEN, UK_ACCOUNT_NR_LEN,
    };
    use paykit_accounts::payload::*;
    use paykit_accounts::test_utils::TestFixtures;
    use paykit_accounts::Result;

    const SEPA_IBAN: &str = "DE89370400440532013000";
    const EMAIL: &str = "alice@example.com";
    const PHONE: &str = "+46701234567";

    fn salt() -> Vec<u8> {
        TestFixtures::ZERO_SALT.to_vec()
    }

    /// One field of one payload type with the values it must accept and reject.
    struct FieldBounds {
        variant: &'static str,
        field: &'static str,
        accepted: Vec<String>,
        rejected: Vec<String>,
        build: Box<dyn Fn(&str) -> Result<()>>,
    }

    fn explicit(
        variant: &'static str,
        field: &'static str,
        accepted: Vec<String>,
        rejected: Vec<String>,
        build: impl Fn(&str) -> Result<()> + 'static,
    ) -> FieldBounds {
        FieldBounds {
            variant,
            field,
            accepted,
            rejected,
            build: Box::new(build),
        }
    }

    // Empty, one below `min` and one above `max` fail; `min` and `max` pass.
    fn length(
        variant: &'static str,
        field: &'static str,
        min: usize,
        max: usize,
        build: impl Fn(&str) -> Result<()> + 'static,
    ) -> FieldBounds {
        explicit(
            variant,
            field,
            vec!["x".repeat(min), "x".repeat(max)],
            vec![String::new(), "x".repeat(min - 1), "x".repeat(max + 1)],
            build,
        )
    }

    fn holder_name(
        variant: &'static str,
        build: impl Fn(&str) -> Result<()> + 'static,
    ) -> FieldBounds {
        length(variant, "holder_name", HOLDER_NAME_MIN_LEN, HOLDER_NAME_MAX_LEN, build)
    }

    fn digits(
        variant: &'static str,
        field: &'static str,
        len: usize,
        build: impl Fn(&str) -> Result<()> + 'static,
    ) -> FieldBounds {
        explicit(
            variant,
            field,
            vec!["1".repeat(len)],
            vec![String::new(), "1".repeat(len - 1), "1".repeat(len + 1)],
            build,
        )
    }

    // 6 to 15 digits.
    fn phone(
        variant: &'static str,
        field: &'static str,
        build: impl Fn(&str) -> Result<()> + 'static,
    ) -> FieldBounds {
        explicit(
            variant,
            field,
            vec!["+123456".into(), "+123456789012345".into()],
            vec![String::new(), "+12345".into(), "+1234567890123456".into()],
            build,
        )
    }

    // Shortest well-formed address up to 100 characters.
    fn email_accepted() -> Vec<String> {
        vec!["a@b.co".into(), format!("{}@example.com", "a".repeat(88))]
    }

    fn email_rejected() -> Vec<String> {
        vec![String::new(), "a@b.c".into(), format!("{}@example.com", "a".repeat(89))]
    }

    fn email(
        variant: &'static str,
        field: &'static str,
        build: impl Fn(&str) -> Result<()> + 'static,
    ) -> FieldBounds {
        explicit(variant, field, email_accepted(), email_rejected(), build)
    }

    fn email_or_phone(
        variant: &'static str,
        build: impl Fn(&str) -> Result<()> + 'static,
    ) -> FieldBounds {
        let mut accepted = email_accepted();
        accepted.extend(["+123456".to_string(), "+123456789012345".to_string()]);
        let mut rejected = email_rejected();
        rejected.extend(["+12345".to_string(), "+1234567890123456".to_string()]);
        explicit(variant, "email_or_mobile_nr", accepted, rejected, build)
    }

    fn sepa_like(
        variant: &'static str,
        build: fn(&str, &str, &str) -> Result<()>,
    ) -> Vec<FieldBounds> {
        vec![
            holder_name(variant, move |v| build(v, SEPA_IBAN, "DEUTDEFF")),
            // Check digits are valid for every IBAN below, only the length varies.
            explicit(
                variant,
                "iban",
                vec!["DE5112345678901".into(), "DE87123456789012345678901234567890".into()],
                vec![
                    String::new(),
                    "DE791234567890".into(),
                    "DE341234567890123456789012345678901".into(),
                ],
                move |v| build("Alice", v, "DEUTDEFF"),
            ),
            explicit(
                variant,
                "bic",
                vec!["DEUTDEFF".into(), "DEUTDEFF500".into()],
                vec![String::new(), "DEUTDEF".into(), "DEUTDEFF5001".into()],
                move |v| build("Alice", SEPA_IBAN, v),
            ),
        ]
    }

    fn sepa(holder: &str, iban: &str, bic: &str) -> Result<()> {
        SepaAccountPayload::with_salt("id", salt(), holder, iban, bic, "DE", vec!["DE".into()])
            .map(drop)
    }

    fn sepa_instant(holder: &str, iban: &str, bic: &str) -> Result<()> {
        SepaInstantAccountPayload::with_salt("id", salt(), holder, iban, bic, "DE", vec!["DE".into()])
            .map(drop)
    }

    fn swift(edit: impl Fn(&mut SwiftDetails, &str) + 'static) -> impl Fn(&str) -> Result<()> {
        move |v| {
            let mut details = TestFixtures::swift_details();
            edit(&mut details, v);
            SwiftAccountPayload::with_salt("id", salt(), "US", details).map(drop)
        }
    }

    fn ach(edit: impl Fn(&mut [String; 4], &str) + 'static) -> impl Fn(&str) -> Result<()> {
        move |v| {
            let mut f = ["Alice".to_string(), "Bank".into(), "111000025".into(), "123456789".into()];
            edit(&mut f, v);
            let [holder, bank, routing, account] = f;
            AchTransferAccountPayload::with_salt(
                "id",
                salt(),
                holder,
                None,
                bank,
                routing,
                account,
                BankAccountType::Checking,
            )
            .map(drop)
        }
    }

    fn wire(edit: impl Fn(&mut [String; 4], &str) + 'static) -> impl Fn(&str) -> Result<()> {
        move |v| {
            let mut f = ["Alice".to_string(), "Bank".into(), "111000025".into(), "123456789".into()];
            edit(&mut f, v);
            let [holder, bank, routing, account] = f;
            DomesticWireTransferAccountPayload::with_salt(
                "id",
                salt(),
                holder,
                None,
                bank,
                routing,
                account,
            )
            .map(drop)
        }
    }

    fn all_field_bounds() -> Vec<FieldBounds> {
        let mut cases = vec![
            // Flat
            holder_name("Zelle", |v| {
                ZelleAccountPayload::with_salt("id", salt(), v, EMAIL).map(drop)
            }),
            email_or_phone("Zelle", |v| {
                ZelleAccountPayload::with_salt("id", salt(), "Alice", v).map(drop)
            }),
            holder_name("UsPostalMoneyOrder", |v| {
                UsPostalMoneyOrderAccountPayload::with_salt("id", salt(), v, "123 Main St").map(drop)
            }),
            length(
                "UsPostalMoneyOrder",
                "postal_address",
                POSTAL_ADDRESS_MIN_LEN,
                POSTAL_ADDRESS_MAX_LEN,
                |v| UsPostalMoneyOrderAccountPayload::with_salt("id", salt(), "Alice", v).map(drop),
            ),
            holder_name("PayId", |v| {
                PayIdAccountPayload::with_salt("id", salt(), v, "alice$bank").map(drop)
            }),
            length("PayId", "pay_id", 2, 100, |v| {
                PayIdAccountPayload::with_salt("id", salt(), "Alice", v).map(drop)
            }),
            holder_name("InteracETransfer", |v| {
                InteracETransferAccountPayload::with_salt("id", salt(), v, EMAIL, "Question", "Answer")
                    .map(drop)
            }),
            email("InteracETransfer", "email", |v| {
                InteracETransferAccountPayload::with_salt("id", salt(), "Alice", v, "Question", "Answer")
                    .map(drop)
            }),
            length("InteracETransfer", "question", 1, INTERAC_QUESTION_MAX_LEN, |v| {
                InteracETransferAccountPayload::with_salt("id", salt(), "Alice", EMAIL, v, "Answer")
                    .map(drop)
            }),
            length(
                "InteracETransfer",
                "answer",
                INTERAC_ANSWER_MIN_LEN,
                INTERAC_ANSWER_MAX_LEN,
                |v| {
                    InteracETransferAccountPayload::with_salt("id", salt(), "Alice", EMAIL, "Question", v)
                        .map(drop)
                },
            ),
            phone("HalCash", "mobile_nr", |v| {
                HalCashAccountPayload::with_salt("id", salt(), v).map(drop)
            }),
            holder_name("FasterPayments", |v| {
                FasterPaymentsAccountPayload::with_salt("id", salt(), v, "123456", "12345678").map(drop)
            }),
            digits("FasterPayments", "sort_code", SORT_CODE_LEN, |v| {
                FasterPaymentsAccountPayload::with_salt("id", salt(), "Alice", v, "12345678").map(drop)
            }),
            digits("FasterPayments", "account_nr", UK_ACCOUNT_NR_LEN, |v| {
                FasterPaymentsAccountPayload::with_salt("id", salt(), "Alice", "123456", v).map(drop)
            }),
            holder_name("Sbp", |v| {
                SbpAccountPayload::with_salt("id", salt(), v, "+79161234567", "Sberbank").map(drop)
            }),
            phone("Sbp", "mobile_number", |v| {
                SbpAccountPayload::with_salt("id", salt(), "Alice", v, "Sberbank").map(drop)
            }),
            length("Sbp", "bank_name", 2, 100, |v| {
                SbpAccountPayload::with_salt("id", salt(), "Alice", "+79161234567", v).map(drop)
            }),
            length(
                "CashByMail",
                "postal_address",
                POSTAL_ADDRESS_MIN_LEN,
                POSTAL_ADDRESS_MAX_LEN,
                |v| CashByMailAccountPayload::with_salt("id", salt(), v, "Alice", None).map(drop),
            ),
            length("CashByMail", "contact", 2, 100, |v| {
                CashByMailAccountPayload::with_salt("id", salt(), "123 Main St", v, None).map(drop)
            }),
            length("CashByMail", "extra_info", 1, EXTRA_INFO_MAX_LEN, |v| {
                CashByMailAccountPayload::with_salt("id", salt(), "123 Main St", "Alice", Some(v.into()))
                    .map(drop)
            }),
            length("Revolut", "user_name", 2, 100, |v| {
                RevolutAccountPayload::with_salt("id", salt(), v, vec!["EUR".into()]).map(drop)
            }),
            holder_name("Uphold", |v| {
                UpholdAccountPayload::with_salt("id", salt(), vec!["USD".into()], v, "acct-1").map(drop)
            }),
            length("Uphold", "account_id", 2, 100, |v| {
                UpholdAccountPayload::with_salt("id", salt(), vec!["USD".into()], "Alice", v).map(drop)
            }),
            length("UserDefinedFiat", "account_data", 1, ACCOUNT_DATA_MAX_LEN, |v| {
                UserDefinedFiatAccountPayload::with_salt("id", salt(), v).map(drop)
            }),
            // Country based
            email_or_phone("AmazonGiftCard", |v| {
                AmazonGiftCardAccountPayload::with_salt("id", salt(), "US", v).map(drop)
            }),
            holder_name("Swish", |v| {
                SwishAccountPayload::with_salt("id", salt(), v, PHONE).map(drop)
            }),
            phone("Swish", "mobile_nr", |v| {
                SwishAccountPayload::with_salt("id", salt(), "Alice", v).map(drop)
            }),
            phone("Bizum", "mobile_nr", |v| {
                BizumAccountPayload::with_salt("id", salt(), v).map(drop)
            }),
            length("F2f", "city", CITY_MIN_LEN, CITY_MAX_LEN, |v| {
                F2fAccountPayload::with_salt("id", salt(), "US", "USD", v, "Alice", None).map(drop)
            }),
            length("F2f", "contact", 2, 100, |v| {
                F2fAccountPayload::with_salt("id", salt(), "US", "USD", "New York", v, None).map(drop)
            }),
            length("F2f", "extra_info", 1, EXTRA_INFO_MAX_LEN, |v| {
                F2fAccountPayload::with_salt("id", salt(), "US", "USD", "New York", "Alice", Some(v.into()))
                    .map(drop)
            }),
            holder_name("Pix", |v| {
                PixAccountPayload::with_salt("id", salt(), v, "pix-key").map(drop)
            }),
            length("Pix", "pix_key", 2, 100, |v| {
                PixAccountPayload::with_salt("id", salt(), "Alice", v).map(drop)
            }),
            length("PromptPay", "prompt_pay_id", 2, 50, |v| {
                PromptPayAccountPayload::with_salt("id", salt(), v).map(drop)
            }),
            holder_name("Strike", |v| StrikeAccountPayload::with_salt("id", salt(), v).map(drop)),
            length("Upi", "virtual_payment_address", 2, 100, |v| {
                UpiAccountPayload::with_salt("id", salt(), v).map(drop)
            }),
            holder_name("Wise", |v| {
                WiseAccountPayload::with_salt("id", salt(), "DE", vec!["EUR".into()], v, EMAIL).map(drop)
            }),
            email("Wise", "email", |v| {
                WiseAccountPayload::with_salt("id", salt(), "DE", vec!["EUR".into()], "Alice", v)
                    .map(drop)
            }),
            holder_name("WiseUsd", |v| {
                WiseUsdAccountPayload::with_salt("id", salt(), v, EMAIL, "123 Main St").map(drop)
            }),
            email("WiseUsd", "email", |v| {
                WiseUsdAccountPayload::with_salt("id", salt(), "Alice", v, "123 Main St").map(drop)
            }),
            length("WiseUsd", "beneficiary_address", ADDRESS_MIN_LEN, ADDRESS_MAX_LEN, |v| {
                WiseUsdAccountPayload::with_salt("id", salt(), "Alice", EMAIL, v).map(drop)
            }),
            holder_name("MoneyGram", |v| {
                MoneyGramAccountPayload::with_salt("id", salt(), "US", vec!["USD".into()], v, EMAIL, None)
                    .map(drop)
            }),
            email("MoneyGram", "email", |v| {
                MoneyGramAccountPayload::with_salt("id", salt(), "US", vec!["USD".into()], "Alice", v, None)
                    .map(drop)
            }),
            length("MoneyGram", "state", STATE_MIN_LEN, STATE_MAX_LEN, |v| {
                MoneyGramAccountPayload::with_salt(
                    "id",
                    salt(),
                    "US",
                    vec!["USD".into()],
                    "Alice",
                    EMAIL,
                    Some(v.into()),
                )
                .map(drop)
            }),
            holder_name("MoneyBeam", |v| {
                MoneyBeamAccountPayload::with_salt("id", salt(), "DE", "EUR", v, EMAIL).map(drop)
            }),
            length("MoneyBeam", "account_id", 2, 100, |v| {
                MoneyBeamAccountPayload::with_salt("id", salt(), "DE", "EUR", "Alice", v).map(drop)
            }),
            phone("Pin4", "mobile_nr", |v| {
                Pin4AccountPayload::with_salt("id", salt(), v).map(drop)
            }),
            length(
                "Swift",
                "beneficiary_name",
                HOLDER_NAME_MIN_LEN,
                HOLDER_NAME_MAX_LEN,
                swift(|d, v| d.beneficiary_name = v.into()),
            ),
            length("Swift", "beneficiary_account_nr", 2, 50, swift(|d, v| {
                d.beneficiary_account_nr = v.into()
            })),
            length(
                "Swift",
                "beneficiary_address",
                ADDRESS_MIN_LEN,
                ADDRESS_MAX_LEN,
                swift(|d, v| d.beneficiary_address = v.into()),
            ),
            length(
                "Swift",
                "bank_swift_code",
                SWIFT_CODE_MIN_LEN,
                SWIFT_CODE_MAX_LEN,
                swift(|d, v| d.bank_swift_code = v.into()),
            ),
            length("Swift", "bank_name", 2, 100, swift(|d, v| d.bank_name = v.into())),
            length(
                "Swift",
                "bank_address",
                ADDRESS_MIN_LEN,
                ADDRESS_MAX_LEN,
                swift(|d, v| d.bank_address = v.into()),
            ),
            // Bank
            holder_name("AchTransfer", ach(|f, v| f[0] = v.into())),
            length("AchTransfer", "bank_name", 1, BANK_NAME_MAX_LEN, ach(|f, v| f[1] = v.into())),
            digits("AchTransfer", "routing_nr", ROUTING_NR_LEN, ach(|f, v| f[2] = v.into())),
            length("AchTransfer", "account_nr", 1, ACCOUNT_NR_MAX_LEN, ach(|f, v| f[3] = v.into())),
            holder_name("DomesticWireTransfer", wire(|f, v| f[0] = v.into())),
            length(
                "DomesticWireTransfer",
                "bank_name",
                1,
                BANK_NAME_MAX_LEN,
                wire(|f, v| f[1] = v.into()),
            ),
            digits("DomesticWireTransfer", "routing_nr", ROUTING_NR_LEN, wire(|f, v| f[2] = v.into())),
            length(
                "DomesticWireTransfer",
                "account_nr",
                1,
                ACCOUNT_NR_MAX_LEN,
                wire(|f, v| f[3] = v.into()),
            ),
            length("NationalBank", "account_nr", 1, ACCOUNT_NR_MAX_LEN, |v| {
                NationalBankAccountPayload::with_salt("id", salt(), BankDetails::new("SE", "SEK", v))
                    .map(drop)
            }),
            holder_name("NationalBank", |v| {
                let bank = TestFixtures::us_bank_details().with_holder_name(v);
                NationalBankAccountPayload::with_salt("id", salt(), bank).map(drop)
            }),
            length("SameBank", "account_nr", 1, ACCOUNT_NR_MAX_LEN, |v| {
                SameBankAccountPayload::with_salt("id", salt(), BankDetails::new("SE", "SEK", v))
                    .map(drop)
            }),
            length("CashDeposit", "bank_name", 1, BANK_NAME_MAX_LEN, |v| {
                let bank = TestFixtures::us_bank_details().with_bank_name(v);
                CashDepositAccountPayload::with_salt("id", salt(), bank, None).map(drop)
            }),
        ];
        cases.extend(sepa_like("Sepa", sepa));
        cases.extend(sepa_like("SepaInstant", sepa_instant));
        cases
    }

    #[test]
    fn test_every_variant_enforces_field_bounds() {
        for case in all_field_bounds() {
            for value in &case.accepted {
                if let Err(err) = (case.build)(value.as_str()) {
                    panic!("{} {} rejected {:?}: {}", case.variant, case.field, value, err);
                }
            }
            for value in &case.rejected {
                let err = match (case.build)(value.as_str()) {
                    Ok(()) => panic!("{} {} accepted {:?}", case.variant, case.field, value),
                    Err(err) => err,
                };
                assert_eq!(
                    err.validation().map(|e| e.field.as_str()),
                    Some(case.field),
                    "{} {} with {:?}: {}",
                    case.variant,
                    case.field,
                    value,
                    err
                );
            }
        }
    }
}
