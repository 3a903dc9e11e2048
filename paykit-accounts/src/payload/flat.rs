//! Payloads that are not bound to a declared country.

use super::{field_accessors, verified, CurrencySelection, PayloadCore, PayloadFamily, PayloadVariant};
use crate::catalog::FiatPaymentRail;
use crate::validation::{
    validate_digits, validate_email, validate_email_or_phone, validate_optional_text,
    validate_phone_number, validate_required_text,
};
use crate::Result;

pub const HOLDER_NAME_MIN_LEN: usize = 2;
pub const HOLDER_NAME_MAX_LEN: usize = 100;
pub const POSTAL_ADDRESS_MIN_LEN: usize = 5;
pub const POSTAL_ADDRESS_MAX_LEN: usize = 200;
pub const EXTRA_INFO_MAX_LEN: usize = 300;
pub const ACCOUNT_DATA_MAX_LEN: usize = 1000;

fn validate_holder_name(value: &str) -> Result<()> {
    validate_required_text("holder_name", value, HOLDER_NAME_MIN_LEN, HOLDER_NAME_MAX_LEN)?;
    Ok(())
}

/// Zelle, US only. Paid to an e-mail address or a mobile number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZelleAccountPayload {
    core: PayloadCore,
    holder_name: String,
    email_or_mobile_nr: String,
}

field_accessors!(ZelleAccountPayload { str holder_name, str email_or_mobile_nr });

impl ZelleAccountPayload {
    pub fn new(
        id: impl Into<String>,
        holder_name: impl Into<String>,
        email_or_mobile_nr: impl Into<String>,
    ) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), holder_name, email_or_mobile_nr)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        holder_name: impl Into<String>,
        email_or_mobile_nr: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            holder_name: holder_name.into(),
            email_or_mobile_nr: email_or_mobile_nr.into(),
        })
    }
}

impl PayloadVariant for ZelleAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::Zelle;
    const FAMILY: PayloadFamily = PayloadFamily::Flat;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed("USD"))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_holder_name(&self.holder_name)?;
        validate_email_or_phone("email_or_mobile_nr", &self.email_or_mobile_nr)?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "email_or_mobile_nr" => Some(&self.email_or_mobile_nr),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Holder name", self.holder_name.clone()),
            ("Email or mobile no.", self.email_or_mobile_nr.clone()),
        ]
    }

    fn account_name_hint(&self) -> &str {
        &self.email_or_mobile_nr
    }
}

/// US Postal Service money order, mailed to a postal address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsPostalMoneyOrderAccountPayload {
    core: PayloadCore,
    holder_name: String,
    postal_address: String,
}

field_accessors!(UsPostalMoneyOrderAccountPayload { str holder_name, str postal_address });

impl UsPostalMoneyOrderAccountPayload {
    pub fn new(
        id: impl Into<String>,
        holder_name: impl Into<String>,
        postal_address: impl Into<String>,
    ) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), holder_name, postal_address)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        holder_name: impl Into<String>,
        postal_address: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            holder_name: holder_name.into(),
            postal_address: postal_address.into(),
        })
    }
}

impl PayloadVariant for UsPostalMoneyOrderAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::UsPostalMoneyOrder;
    const FAMILY: PayloadFamily = PayloadFamily::Flat;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed("USD"))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_holder_name(&self.holder_name)?;
        validate_required_text(
            "postal_address",
            &self.postal_address,
            POSTAL_ADDRESS_MIN_LEN,
            POSTAL_ADDRESS_MAX_LEN,
        )?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "holder_name" => Some(&self.holder_name),
            "postal_address" => Some(&self.postal_address),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Holder name", self.holder_name.clone()),
            ("Postal address", self.postal_address.clone()),
        ]
    }

    fn account_name_hint(&self) -> &str {
        &self.holder_name
    }
}

/// Australian PayID, an alias for a bank account (e-mail, phone, ABN).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayIdAccountPayload {
    core: PayloadCore,
    holder_name: String,
    pay_id: String,
}

field_accessors!(PayIdAccountPayload { str holder_name, str pay_id });

impl PayIdAccountPayload {
    pub fn new(
        id: impl Into<String>,
        holder_name: impl Into<String>,
        pay_id: impl Into<String>,
    ) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), holder_name, pay_id)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        holder_name: impl Into<String>,
        pay_id: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            holder_name: holder_name.into(),
            pay_id: pay_id.into(),
        })
    }
}

impl PayloadVariant for PayIdAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::PayId;
    const FAMILY: PayloadFamily = PayloadFamily::Flat;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed("AUD"))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_holder_name(&self.holder_name)?;
        validate_required_text("pay_id", &self.pay_id, 2, 100)?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "pay_id" => Some(&self.pay_id),
            "holder_name" => Some(&self.holder_name),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Holder name", self.holder_name.clone()),
            ("PayID", self.pay_id.clone()),
        ]
    }

    fn account_name_hint(&self) -> &str {
        &self.pay_id
    }
}

pub const INTERAC_QUESTION_MAX_LEN: usize = 40;
pub const INTERAC_ANSWER_MIN_LEN: usize = 3;
pub const INTERAC_ANSWER_MAX_LEN: usize = 25;

/// Interac e-Transfer, Canada. The security question and answer release
/// the transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteracETransferAccountPayload {
    core: PayloadCore,
    holder_name: String,
    email: String,
    question: String,
    answer: String,
}

field_accessors!(InteracETransferAccountPayload {
    str holder_name,
    str email,
    str question,
    str answer,
});

impl InteracETransferAccountPayload {
    pub fn new(
        id: impl Into<String>,
        holder_name: impl Into<String>,
        email: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), holder_name, email, question, answer)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        holder_name: impl Into<String>,
        email: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            holder_name: holder_name.into(),
            email: email.into(),
            question: question.into(),
            answer: answer.into(),
        })
    }
}

impl PayloadVariant for InteracETransferAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::InteracETransfer;
    const FAMILY: PayloadFamily = PayloadFamily::Flat;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed("CAD"))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_holder_name(&self.holder_name)?;
        validate_email("email", &self.email)?;
        validate_required_text("question", &self.question, 1, INTERAC_QUESTION_MAX_LEN)?;
        validate_required_text(
            "answer",
            &self.answer,
            INTERAC_ANSWER_MIN_LEN,
            INTERAC_ANSWER_MAX_LEN,
        )?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "email" => Some(&self.email),
            "question" => Some(&self.question),
            "answer" => Some(&self.answer),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Holder name", self.holder_name.clone()),
            ("Email", self.email.clone()),
            ("Secret question", self.question.clone()),
            ("Answer", self.answer.clone()),
        ]
    }

    fn account_name_hint(&self) -> &str {
        &self.email
    }
}

/// HalCash, Spain. Cash withdrawn at an ATM with a code sent by SMS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalCashAccountPayload {
    core: PayloadCore,
    mobile_nr: String,
}

field_accessors!(HalCashAccountPayload { str mobile_nr });

impl HalCashAccountPayload {
    pub fn new(id: impl Into<String>, mobile_nr: impl Into<String>) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), mobile_nr)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        mobile_nr: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            mobile_nr: mobile_nr.into(),
        })
    }
}

impl PayloadVariant for HalCashAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::HalCash;
    const FAMILY: PayloadFamily = PayloadFamily::Flat;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed("EUR"))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_phone_number("mobile_nr", &self.mobile_nr)?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "mobile_nr" => Some(&self.mobile_nr),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![("Mobile no.", self.mobile_nr.clone())]
    }

    fn account_name_hint(&self) -> &str {
        &self.mobile_nr
    }
}

pub const SORT_CODE_LEN: usize = 6;
pub const UK_ACCOUNT_NR_LEN: usize = 8;

/// UK Faster Payments, addressed by sort code and account number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FasterPaymentsAccountPayload {
    core: PayloadCore,
    holder_name: String,
    sort_code: String,
    account_nr: String,
}

field_accessors!(FasterPaymentsAccountPayload { str holder_name, str sort_code, str account_nr });

impl FasterPaymentsAccountPayload {
    pub fn new(
        id: impl Into<String>,
        holder_name: impl Into<String>,
        sort_code: impl Into<String>,
        account_nr: impl Into<String>,
    ) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), holder_name, sort_code, account_nr)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        holder_name: impl Into<String>,
        sort_code: impl Into<String>,
        account_nr: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            holder_name: holder_name.into(),
            sort_code: sort_code.into(),
            account_nr: account_nr.into(),
        })
    }
}

impl PayloadVariant for FasterPaymentsAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::FasterPayments;
    const FAMILY: PayloadFamily = PayloadFamily::Flat;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed("GBP"))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_holder_name(&self.holder_name)?;
        validate_digits("sort_code", &self.sort_code, SORT_CODE_LEN, SORT_CODE_LEN)?;
        validate_digits(
            "account_nr",
            &self.account_nr,
            UK_ACCOUNT_NR_LEN,
            UK_ACCOUNT_NR_LEN,
        )?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "sort_code" => Some(&self.sort_code),
            "account_nr" => Some(&self.account_nr),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Holder name", self.holder_name.clone()),
            ("UK sort code", self.sort_code.clone()),
            ("Account number", self.account_nr.clone()),
        ]
    }

    fn account_name_hint(&self) -> &str {
        &self.account_nr
    }
}

/// Russian Faster Payments System, addressed by mobile number and bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbpAccountPayload {
    core: PayloadCore,
    holder_name: String,
    mobile_number: String,
    bank_name: String,
}

field_accessors!(SbpAccountPayload { str holder_name, str mobile_number, str bank_name });

impl SbpAccountPayload {
    pub fn new(
        id: impl Into<String>,
        holder_name: impl Into<String>,
        mobile_number: impl Into<String>,
        bank_name: impl Into<String>,
    ) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), holder_name, mobile_number, bank_name)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        holder_name: impl Into<String>,
        mobile_number: impl Into<String>,
        bank_name: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            holder_name: holder_name.into(),
            mobile_number: mobile_number.into(),
            bank_name: bank_name.into(),
        })
    }
}

impl PayloadVariant for SbpAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::Sbp;
    const FAMILY: PayloadFamily = PayloadFamily::Flat;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed("RUB"))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_holder_name(&self.holder_name)?;
        validate_phone_number("mobile_number", &self.mobile_number)?;
        validate_required_text("bank_name", &self.bank_name, 2, 100)?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "mobile_number" => Some(&self.mobile_number),
            "bank_name" => Some(&self.bank_name),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Holder name", self.holder_name.clone()),
            ("Mobile no.", self.mobile_number.clone()),
            ("Bank name", self.bank_name.clone()),
        ]
    }

    fn account_name_hint(&self) -> &str {
        &self.mobile_number
    }
}

/// Cash sent in an envelope by mail. Any currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashByMailAccountPayload {
    core: PayloadCore,
    postal_address: String,
    contact: String,
    extra_info: Option<String>,
}

field_accessors!(CashByMailAccountPayload { str postal_address, str contact, opt extra_info });

impl CashByMailAccountPayload {
    pub fn new(
        id: impl Into<String>,
        postal_address: impl Into<String>,
        contact: impl Into<String>,
        extra_info: Option<String>,
    ) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), postal_address, contact, extra_info)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        postal_address: impl Into<String>,
        contact: impl Into<String>,
        extra_info: Option<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            postal_address: postal_address.into(),
            contact: contact.into(),
            extra_info,
        })
    }
}

impl PayloadVariant for CashByMailAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::CashByMail;
    const FAMILY: PayloadFamily = PayloadFamily::Flat;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        None
    }

    fn verify_fields(&self) -> Result<()> {
        validate_required_text(
            "postal_address",
            &self.postal_address,
            POSTAL_ADDRESS_MIN_LEN,
            POSTAL_ADDRESS_MAX_LEN,
        )?;
        validate_required_text("contact", &self.contact, 2, 100)?;
        validate_optional_text("extra_info", self.extra_info.as_deref(), 1, EXTRA_INFO_MAX_LEN)?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "contact" => Some(&self.contact),
            "postal_address" => Some(&self.postal_address),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Postal address", self.postal_address.clone()),
            ("Contact", self.contact.clone()),
        ];
        if let Some(extra_info) = &self.extra_info {
            fields.push(("Additional information", extra_info.clone()));
        }
        fields
    }

    fn account_name_hint(&self) -> &str {
        &self.contact
    }
}

/// Revolut, paid to a Revolut username in one of several currencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevolutAccountPayload {
    core: PayloadCore,
    user_name: String,
    selected_currency_codes: Vec<String>,
}

field_accessors!(RevolutAccountPayload { str user_name, list selected_currency_codes });

impl RevolutAccountPayload {
    pub fn new(
        id: impl Into<String>,
        user_name: impl Into<String>,
        selected_currency_codes: Vec<String>,
    ) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), user_name, selected_currency_codes)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        user_name: impl Into<String>,
        selected_currency_codes: Vec<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            user_name: user_name.into(),
            selected_currency_codes,
        })
    }
}

impl PayloadVariant for RevolutAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::Revolut;
    const FAMILY: PayloadFamily = PayloadFamily::Flat;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::SelectedMany(&self.selected_currency_codes))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_required_text("user_name", &self.user_name, 2, 100)?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "user_name" => Some(&self.user_name),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Username", self.user_name.clone()),
            ("Currencies", self.selected_currency_codes.join(", ")),
        ]
    }

    fn account_name_hint(&self) -> &str {
        &self.user_name
    }
}

/// Uphold, paid to an Uphold account id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpholdAccountPayload {
    core: PayloadCore,
    selected_currency_codes: Vec<String>,
    holder_name: String,
    account_id: String,
}

field_accessors!(UpholdAccountPayload {
    list selected_currency_codes,
    str holder_name,
    str account_id,
});

impl UpholdAccountPayload {
    pub fn new(
        id: impl Into<String>,
        selected_currency_codes: Vec<String>,
        holder_name: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Result<Self> {
        Self::with_salt(
            id,
            super::generate_salt(),
            selected_currency_codes,
            holder_name,
            account_id,
        )
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        selected_currency_codes: Vec<String>,
        holder_name: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            selected_currency_codes,
            holder_name: holder_name.into(),
            account_id: account_id.into(),
        })
    }
}

impl PayloadVariant for UpholdAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::Uphold;
    const FAMILY: PayloadFamily = PayloadFamily::Flat;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::SelectedMany(&self.selected_currency_codes))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_holder_name(&self.holder_name)?;
        validate_required_text("account_id", &self.account_id, 2, 100)?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "account_id" => Some(&self.account_id),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Holder name", self.holder_name.clone()),
            ("Account ID", self.account_id.clone()),
            ("Currencies", self.selected_currency_codes.join(", ")),
        ]
    }

    fn account_name_hint(&self) -> &str {
        &self.account_id
    }
}

/// Free-form payment instructions for rails without a dedicated type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDefinedFiatAccountPayload {
    core: PayloadCore,
    account_data: String,
}

field_accessors!(UserDefinedFiatAccountPayload { str account_data });

impl UserDefinedFiatAccountPayload {
    pub fn new(id: impl Into<String>, account_data: impl Into<String>) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), account_data)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        account_data: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            account_data: account_data.into(),
        })
    }
}

impl PayloadVariant for UserDefinedFiatAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::Custom;
    const FAMILY: PayloadFamily = PayloadFamily::Flat;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        None
    }

    fn verify_fields(&self) -> Result<()> {
        validate_required_text("account_data", &self.account_data, 1, ACCOUNT_DATA_MAX_LEN)?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "account_data" => Some(&self.account_data),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![("Account details", self.account_data.clone())]
    }

    fn account_name_hint(&self) -> &str {
        &self.account_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Constraint;
    use crate::test_utils::TestFixtures;

    fn salt() -> Vec<u8> {
        TestFixtures::ZERO_SALT.to_vec()
    }

    #[test]
    fn test_zelle_accepts_email_or_phone() {
        assert!(ZelleAccountPayload::with_salt("id", salt(), "Alice", "alice@example.com").is_ok());
        assert!(ZelleAccountPayload::with_salt("id", salt(), "Alice", "+12025550123").is_ok());
        let err = ZelleAccountPayload::with_salt("id", salt(), "Alice", "alice").unwrap_err();
        assert_eq!(err.validation().map(|e| e.field.as_str()), Some("email_or_mobile_nr"));
    }

    #[test]
    fn test_holder_name_bounds() {
        let err = ZelleAccountPayload::with_salt("id", salt(), "A", "alice@example.com").unwrap_err();
        assert_eq!(
            err.validation().map(|e| e.constraint.clone()),
            Some(Constraint::TooShort { min: 2, actual: 1 })
        );
        let long = "A".repeat(HOLDER_NAME_MAX_LEN + 1);
        assert!(ZelleAccountPayload::with_salt("id", salt(), long, "alice@example.com").is_err());
    }

    #[test]
    fn test_faster_payments_digits() {
        assert!(
            FasterPaymentsAccountPayload::with_salt("id", salt(), "Alice", "123456", "12345678")
                .is_ok()
        );
        let err =
            FasterPaymentsAccountPayload::with_salt("id", salt(), "Alice", "12-34-56", "12345678")
                .unwrap_err();
        assert_eq!(err.validation().map(|e| e.field.as_str()), Some("sort_code"));
    }

    #[test]
    fn test_interac_answer_bounds() {
        let err = InteracETransferAccountPayload::with_salt(
            "id",
            salt(),
            "Alice",
            "alice@example.com",
            "Question",
            "no",
        )
        .unwrap_err();
        assert_eq!(err.validation().map(|e| e.field.as_str()), Some("answer"));
    }

    #[test]
    fn test_revolut_currencies_checked() {
        assert!(RevolutAccountPayload::with_salt("id", salt(), "alice", vec!["EUR".into()]).is_ok());
        let err = RevolutAccountPayload::with_salt("id", salt(), "alice", vec!["BRL".into()])
            .unwrap_err();
        assert_eq!(
            err.validation().map(|e| e.constraint.clone()),
            Some(Constraint::NotAllowed("BRL".into()))
        );
        let err = RevolutAccountPayload::with_salt("id", salt(), "alice", vec![]).unwrap_err();
        assert_eq!(err.validation().map(|e| e.field.as_str()), Some("selected_currency_codes"));
    }

    #[test]
    fn test_cash_by_mail_display_omits_absent_extra_info() {
        let payload =
            CashByMailAccountPayload::with_salt("id", salt(), "123 Main St", "Alice", None).unwrap();
        assert_eq!(
            payload.account_data_display_string(),
            "Postal address: 123 Main St\nContact: Alice"
        );
        assert_eq!(payload.currency_selection(), None);
    }

    #[test]
    fn test_user_defined_fiat_uses_custom_rail() {
        let payload = UserDefinedFiatAccountPayload::with_salt("id", salt(), "custom data").unwrap();
        assert_eq!(payload.payment_rail(), FiatPaymentRail::Custom);
        assert!(UserDefinedFiatAccountPayload::with_salt("id", salt(), "").is_err());
    }
}
