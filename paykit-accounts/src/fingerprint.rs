//! Legacy-compatible payload fingerprints.
//!
//! A fingerprint is the UTF-8 concatenation of the rail's legacy method id,
//! optionally the payload's country code, and a fixed list of field values.
//! Age witnesses already published by the predecessor system were hashed
//! over these exact bytes, so the rules below must never change. Absent
//! optional fields contribute nothing.

use crate::catalog::FiatPaymentRail;
use crate::payload::{PayloadFamily, PayloadVariant};

/// What precedes the field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerprintBase {
    /// Legacy method id followed by the country code.
    CountryPrefixed,
    /// Legacy method id only.
    MethodIdOnly,
}

/// One element of the byte sequence after the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerprintPart {
    /// Value of a payload field, empty when absent.
    Field(&'static str),
    /// Fixed text.
    Literal(&'static str),
}

/// How the fingerprint of one rail is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerprintRule {
    pub rail: FiatPaymentRail,
    pub family: PayloadFamily,
    pub base: FingerprintBase,
    pub parts: &'static [FingerprintPart],
}

use FingerprintBase::{CountryPrefixed, MethodIdOnly};
use FingerprintPart::{Field, Literal};

// Bank fields in legacy order. Fields the country does not require are
// reported as absent by the payload.
const BANK_PARTS: &[FingerprintPart] = &[
    Field("bank_name"),
    Field("bank_id"),
    Field("branch_id"),
    Field("account_nr"),
    Field("bank_account_type"),
    Field("holder_id"),
    Field("national_account_id"),
];

const fn rule(
    rail: FiatPaymentRail,
    family: PayloadFamily,
    base: FingerprintBase,
    parts: &'static [FingerprintPart],
) -> FingerprintRule {
    FingerprintRule {
        rail,
        family,
        base,
        parts,
    }
}

static RULES: &[FingerprintRule] = &[
    // Flat
    rule(FiatPaymentRail::Zelle, PayloadFamily::Flat, MethodIdOnly, &[Field("email_or_mobile_nr")]),
    rule(
        FiatPaymentRail::UsPostalMoneyOrder,
        PayloadFamily::Flat,
        MethodIdOnly,
        &[Field("holder_name"), Field("postal_address")],
    ),
    rule(
        FiatPaymentRail::PayId,
        PayloadFamily::Flat,
        MethodIdOnly,
        &[Field("pay_id"), Field("holder_name")],
    ),
    rule(
        FiatPaymentRail::InteracETransfer,
        PayloadFamily::Flat,
        MethodIdOnly,
        &[Field("email"), Field("question"), Field("answer")],
    ),
    rule(FiatPaymentRail::HalCash, PayloadFamily::Flat, MethodIdOnly, &[Field("mobile_nr")]),
    rule(
        FiatPaymentRail::FasterPayments,
        PayloadFamily::Flat,
        MethodIdOnly,
        &[Field("sort_code"), Field("account_nr")],
    ),
    rule(
        FiatPaymentRail::Sbp,
        PayloadFamily::Flat,
        MethodIdOnly,
        &[Field("mobile_number"), Field("bank_name")],
    ),
    rule(
        FiatPaymentRail::CashByMail,
        PayloadFamily::Flat,
        MethodIdOnly,
        &[Field("contact"), Field("postal_address")],
    ),
    rule(FiatPaymentRail::Revolut, PayloadFamily::Flat, MethodIdOnly, &[Field("user_name")]),
    rule(FiatPaymentRail::Uphold, PayloadFamily::Flat, MethodIdOnly, &[Field("account_id")]),
    rule(FiatPaymentRail::Custom, PayloadFamily::Flat, MethodIdOnly, &[Field("account_data")]),
    // Country based
    rule(
        FiatPaymentRail::AmazonGiftCard,
        PayloadFamily::CountryBased,
        MethodIdOnly,
        &[Literal("AmazonGiftCard"), Field("email_or_mobile_nr")],
    ),
    rule(FiatPaymentRail::Swish, PayloadFamily::CountryBased, MethodIdOnly, &[Field("mobile_nr")]),
    rule(
        FiatPaymentRail::Sepa,
        PayloadFamily::CountryBased,
        CountryPrefixed,
        &[Field("iban"), Field("bic")],
    ),
    rule(
        FiatPaymentRail::SepaInstant,
        PayloadFamily::CountryBased,
        CountryPrefixed,
        &[Field("iban"), Field("bic")],
    ),
    rule(FiatPaymentRail::Bizum, PayloadFamily::CountryBased, CountryPrefixed, &[Field("mobile_nr")]),
    rule(
        FiatPaymentRail::F2f,
        PayloadFamily::CountryBased,
        CountryPrefixed,
        &[Field("contact"), Field("city")],
    ),
    rule(
        FiatPaymentRail::Pix,
        PayloadFamily::CountryBased,
        CountryPrefixed,
        &[Field("pix_key"), Field("holder_name")],
    ),
    rule(
        FiatPaymentRail::PromptPay,
        PayloadFamily::CountryBased,
        MethodIdOnly,
        &[Field("prompt_pay_id")],
    ),
    rule(FiatPaymentRail::Strike, PayloadFamily::CountryBased, CountryPrefixed, &[Field("holder_name")]),
    rule(
        FiatPaymentRail::Upi,
        PayloadFamily::CountryBased,
        CountryPrefixed,
        &[Field("virtual_payment_address")],
    ),
    rule(
        FiatPaymentRail::Wise,
        PayloadFamily::CountryBased,
        MethodIdOnly,
        &[Field("email"), Field("holder_name")],
    ),
    rule(FiatPaymentRail::WiseUsd, PayloadFamily::CountryBased, CountryPrefixed, &[Field("holder_name")]),
    rule(
        FiatPaymentRail::MoneyGram,
        PayloadFamily::CountryBased,
        CountryPrefixed,
        &[Field("state"), Field("holder_name"), Field("email")],
    ),
    rule(
        FiatPaymentRail::MoneyBeam,
        PayloadFamily::CountryBased,
        MethodIdOnly,
        &[Field("account_id"), Field("holder_name")],
    ),
    rule(FiatPaymentRail::Pin4, PayloadFamily::CountryBased, CountryPrefixed, &[Field("mobile_nr")]),
    rule(
        FiatPaymentRail::Swift,
        PayloadFamily::CountryBased,
        MethodIdOnly,
        &[Field("beneficiary_account_nr")],
    ),
    // Bank
    rule(FiatPaymentRail::AchTransfer, PayloadFamily::Bank, CountryPrefixed, BANK_PARTS),
    rule(FiatPaymentRail::NationalBank, PayloadFamily::Bank, CountryPrefixed, BANK_PARTS),
    rule(FiatPaymentRail::CashDeposit, PayloadFamily::Bank, CountryPrefixed, BANK_PARTS),
    rule(FiatPaymentRail::SameBank, PayloadFamily::Bank, CountryPrefixed, BANK_PARTS),
    rule(FiatPaymentRail::DomesticWireTransfer, PayloadFamily::Bank, CountryPrefixed, BANK_PARTS),
];

/// Every fingerprint rule, one per rail that has a payload type.
pub fn all_rules() -> &'static [FingerprintRule] {
    RULES
}

/// Rule for a rail, if the rail has a payload type.
pub fn rule_for(rail: FiatPaymentRail) -> Option<&'static FingerprintRule> {
    RULES.iter().find(|rule| rule.rail == rail)
}

pub(crate) fn derive<P: PayloadVariant>(payload: &P) -> Vec<u8> {
    let mut out = P::RAIL.legacy_method_id().as_bytes().to_vec();
    let Some(rule) = rule_for(P::RAIL) else {
        #[cfg(feature = "tracing")]
        tracing::warn!(rail = %P::RAIL, "no fingerprint rule, using method id only");
        return out;
    };
    if rule.base == CountryPrefixed {
        out.extend_from_slice(payload.country_code().unwrap_or_default().as_bytes());
    }
    for part in rule.parts {
        match part {
            Field(name) => {
                if let Some(value) = payload.fingerprint_field(name) {
                    out.extend_from_slice(value.as_bytes());
                }
            }
            Literal(text) => out.extend_from_slice(text.as_bytes()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestFixtures;

    #[test]
    fn test_one_rule_per_payload_rail() {
        for payload in TestFixtures::all_payloads() {
            let rule = rule_for(payload.payment_rail());
            assert!(rule.is_some(), "{}", payload.payment_rail());
            assert_eq!(rule.map(|r| r.family), Some(payload.family()));
        }
        let mut rails: Vec<_> = all_rules().iter().map(|r| r.rail).collect();
        rails.sort();
        rails.dedup();
        assert_eq!(rails.len(), all_rules().len());
    }

    #[test]
    fn test_rails_without_payload_have_no_rule() {
        assert!(rule_for(FiatPaymentRail::AliPay).is_none());
        assert!(rule_for(FiatPaymentRail::Neft).is_none());
    }

    #[test]
    fn test_fields_named_by_rules_are_populated() {
        // Optional fields may be absent, but at least one part must resolve.
        for payload in TestFixtures::all_payloads() {
            let rail = payload.payment_rail();
            let fingerprint = payload.fingerprint();
            assert!(
                fingerprint.len() > rail.legacy_method_id().len(),
                "{}",
                rail
            );
        }
    }

    #[test]
    fn test_sepa_variants_differ_by_method_id() {
        let sepa = TestFixtures::sepa().fingerprint();
        let instant = TestFixtures::sepa_instant().fingerprint();
        assert_ne!(sepa, instant);
        assert_eq!(sepa[b"SEPA".len()..], instant[b"SEPA_INSTANT".len()..]);
    }

    #[test]
    fn test_fingerprint_ignores_salt_and_id() {
        let a = crate::payload::ZelleAccountPayload::with_salt(
            "a",
            vec![1; 32],
            "Alice",
            "alice@example.com",
        )
        .unwrap();
        let b = crate::payload::ZelleAccountPayload::with_salt(
            "b",
            vec![2; 32],
            "Bob",
            "alice@example.com",
        )
        .unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint(), b"CLEAR_X_CHANGEalice@example.com".to_vec());
    }
}
