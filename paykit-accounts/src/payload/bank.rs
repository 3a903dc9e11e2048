//! Bank transfer payloads.
//!
//! All bank payloads share [`BankDetails`]. National bank, cash deposit and
//! same-bank transfers decide which optional fields are mandatory from the
//! per-country catalog. ACH and domestic wire transfers are US-only and fix
//! their requirements themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CurrencySelection, PayloadCore, PayloadFamily, PayloadVariant};
use crate::catalog::{field_label, is_field_required, BankField, FiatPaymentRail};
use crate::errors::{Constraint, ValidationError};
use crate::validation::{validate_digits, validate_equals, validate_optional_text, validate_required_text};
use crate::{AccountError, Result};

pub const HOLDER_NAME_MIN_LEN: usize = 2;
pub const HOLDER_NAME_MAX_LEN: usize = 100;
pub const HOLDER_ID_MAX_LEN: usize = 50;
pub const BANK_NAME_MAX_LEN: usize = 100;
pub const BANK_ID_MAX_LEN: usize = 50;
pub const BRANCH_ID_MAX_LEN: usize = 30;
pub const ACCOUNT_NR_MAX_LEN: usize = 30;
pub const NATIONAL_ACCOUNT_ID_MAX_LEN: usize = 50;
pub const ADDRESS_MIN_LEN: usize = 5;
pub const ADDRESS_MAX_LEN: usize = 200;
pub const REQUIREMENTS_MAX_LEN: usize = 500;
pub const ROUTING_NR_LEN: usize = 9;

/// Checking or savings account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankAccountType {
    Checking,
    Savings,
}

impl BankAccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "CHECKING",
            Self::Savings => "SAVINGS",
        }
    }

    /// Parse the wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CHECKING" => Some(Self::Checking),
            "SAVINGS" => Some(Self::Savings),
            _ => None,
        }
    }
}

impl fmt::Display for BankAccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by every bank payload.
///
/// Plain data: bounds and country requirements are checked when a payload is
/// constructed from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BankDetails {
    pub country_code: String,
    pub selected_currency_code: String,
    pub holder_name: Option<String>,
    pub holder_id: Option<String>,
    pub bank_name: Option<String>,
    pub bank_id: Option<String>,
    pub branch_id: Option<String>,
    pub account_nr: String,
    pub bank_account_type: Option<BankAccountType>,
    pub national_account_id: Option<String>,
}

impl BankDetails {
    /// Details with only the mandatory fields set.
    pub fn new(
        country_code: impl Into<String>,
        selected_currency_code: impl Into<String>,
        account_nr: impl Into<String>,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            selected_currency_code: selected_currency_code.into(),
            account_nr: account_nr.into(),
            ..Default::default()
        }
    }

    pub fn with_holder_name(mut self, value: impl Into<String>) -> Self {
        self.holder_name = Some(value.into());
        self
    }

    pub fn with_holder_id(mut self, value: impl Into<String>) -> Self {
        self.holder_id = Some(value.into());
        self
    }

    pub fn with_bank_name(mut self, value: impl Into<String>) -> Self {
        self.bank_name = Some(value.into());
        self
    }

    pub fn with_bank_id(mut self, value: impl Into<String>) -> Self {
        self.bank_id = Some(value.into());
        self
    }

    pub fn with_branch_id(mut self, value: impl Into<String>) -> Self {
        self.branch_id = Some(value.into());
        self
    }

    pub fn with_bank_account_type(mut self, value: BankAccountType) -> Self {
        self.bank_account_type = Some(value);
        self
    }

    pub fn with_national_account_id(mut self, value: impl Into<String>) -> Self {
        self.national_account_id = Some(value.into());
        self
    }

    /// Length bounds of every present field.
    pub fn verify(&self) -> Result<()> {
        validate_optional_text(
            "holder_name",
            self.holder_name.as_deref(),
            HOLDER_NAME_MIN_LEN,
            HOLDER_NAME_MAX_LEN,
        )?;
        validate_optional_text("holder_id", self.holder_id.as_deref(), 1, HOLDER_ID_MAX_LEN)?;
        validate_optional_text("bank_name", self.bank_name.as_deref(), 1, BANK_NAME_MAX_LEN)?;
        validate_optional_text("bank_id", self.bank_id.as_deref(), 1, BANK_ID_MAX_LEN)?;
        validate_optional_text("branch_id", self.branch_id.as_deref(), 1, BRANCH_ID_MAX_LEN)?;
        validate_required_text("account_nr", &self.account_nr, 1, ACCOUNT_NR_MAX_LEN)?;
        validate_optional_text(
            "national_account_id",
            self.national_account_id.as_deref(),
            1,
            NATIONAL_ACCOUNT_ID_MAX_LEN,
        )?;
        Ok(())
    }

    /// Fields the catalog marks as required for the country must be present.
    pub fn verify_required_fields(&self) -> Result<()> {
        for field in BankField::ALL {
            if is_field_required(field, &self.country_code) && self.value(field).is_none() {
                return Err(ValidationError::new(field.name(), Constraint::Missing).into());
            }
        }
        Ok(())
    }

    /// Value of a field, whether or not the country requires it.
    pub fn value(&self, field: BankField) -> Option<&str> {
        match field {
            BankField::HolderName => self.holder_name.as_deref(),
            BankField::HolderId => self.holder_id.as_deref(),
            BankField::BankName => self.bank_name.as_deref(),
            BankField::BankId => self.bank_id.as_deref(),
            BankField::BranchId => self.branch_id.as_deref(),
            BankField::AccountNr => Some(self.account_nr.as_str()),
            BankField::AccountType => self.bank_account_type.as_ref().map(BankAccountType::as_str),
            BankField::NationalAccountId => self.national_account_id.as_deref(),
        }
    }

    /// Value of a field for fingerprinting. Fields the country does not
    /// require never contribute, even when present.
    pub fn fingerprint_field(&self, name: &str) -> Option<&str> {
        let field = BankField::ALL.into_iter().find(|f| f.name() == name)?;
        if !is_field_required(field, &self.country_code) {
            return None;
        }
        self.value(field)
    }

    /// Labelled present fields, country specific labels.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        BankField::ALL
            .into_iter()
            .filter_map(|field| {
                self.value(field)
                    .map(|value| (field_label(field, &self.country_code), value.to_string()))
            })
            .collect()
    }
}

macro_rules! bank_variant_common {
    () => {
        fn core(&self) -> &PayloadCore {
            &self.core
        }

        fn country_code(&self) -> Option<&str> {
            Some(&self.bank.country_code)
        }

        fn bank_details(&self) -> Option<&BankDetails> {
            Some(&self.bank)
        }

        fn fingerprint_field(&self, field: &str) -> Option<&str> {
            self.bank.fingerprint_field(field)
        }

        fn account_name_hint(&self) -> &str {
            &self.bank.account_nr
        }
    };
}

/// US ACH transfer. The routing number is carried as the bank id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchTransferAccountPayload {
    core: PayloadCore,
    bank: BankDetails,
    holder_address: Option<String>,
}

impl AchTransferAccountPayload {
    pub fn new(
        id: impl Into<String>,
        holder_name: impl Into<String>,
        holder_address: Option<String>,
        bank_name: impl Into<String>,
        routing_nr: impl Into<String>,
        account_nr: impl Into<String>,
        bank_account_type: BankAccountType,
    ) -> Result<Self> {
        Self::with_salt(
            id,
            super::generate_salt(),
            holder_name,
            holder_address,
            bank_name,
            routing_nr,
            account_nr,
            bank_account_type,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        holder_name: impl Into<String>,
        holder_address: Option<String>,
        bank_name: impl Into<String>,
        routing_nr: impl Into<String>,
        account_nr: impl Into<String>,
        bank_account_type: BankAccountType,
    ) -> Result<Self> {
        let bank = BankDetails::new("US", "USD", account_nr)
            .with_holder_name(holder_name)
            .with_bank_name(bank_name)
            .with_bank_id(routing_nr)
            .with_bank_account_type(bank_account_type);
        Self::from_parts(PayloadCore::new(id, salt), bank, holder_address)
    }

    /// Rebuild from decoded parts. Country and currency must be `US`/`USD`.
    pub(crate) fn from_parts(
        core: PayloadCore,
        bank: BankDetails,
        holder_address: Option<String>,
    ) -> Result<Self> {
        validate_routing_nr(&bank)?;
        let payload = Self {
            core,
            bank,
            holder_address,
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn bank(&self) -> &BankDetails {
        &self.bank
    }

    pub fn holder_name(&self) -> &str {
        self.bank.holder_name.as_deref().unwrap_or_default()
    }

    pub fn holder_address(&self) -> Option<&str> {
        self.holder_address.as_deref()
    }

    pub fn routing_nr(&self) -> &str {
        self.bank.bank_id.as_deref().unwrap_or_default()
    }

    pub fn bank_account_type(&self) -> Option<BankAccountType> {
        self.bank.bank_account_type
    }
}

impl PayloadVariant for AchTransferAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::AchTransfer;
    const FAMILY: PayloadFamily = PayloadFamily::Bank;

    bank_variant_common!();

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed(&self.bank.selected_currency_code))
    }

    fn verify_fields(&self) -> Result<()> {
        verify_us_transfer(&self.bank, "AchTransfer")?;
        validate_optional_text(
            "holder_address",
            self.holder_address.as_deref(),
            ADDRESS_MIN_LEN,
            ADDRESS_MAX_LEN,
        )?;
        if self.bank.bank_account_type.is_none() {
            return Err(AccountError::missing_field("AchTransfer", "bank_account_type"));
        }
        Ok(())
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = self.bank.display_fields();
        if let Some(address) = &self.holder_address {
            fields.push(("Holder address", address.clone()));
        }
        fields
    }
}

/// US domestic wire transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomesticWireTransferAccountPayload {
    core: PayloadCore,
    bank: BankDetails,
    holder_address: Option<String>,
}

impl DomesticWireTransferAccountPayload {
    pub fn new(
        id: impl Into<String>,
        holder_name: impl Into<String>,
        holder_address: Option<String>,
        bank_name: impl Into<String>,
        routing_nr: impl Into<String>,
        account_nr: impl Into<String>,
    ) -> Result<Self> {
        Self::with_salt(
            id,
            super::generate_salt(),
            holder_name,
            holder_address,
            bank_name,
            routing_nr,
            account_nr,
        )
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        holder_name: impl Into<String>,
        holder_address: Option<String>,
        bank_name: impl Into<String>,
        routing_nr: impl Into<String>,
        account_nr: impl Into<String>,
    ) -> Result<Self> {
        let bank = BankDetails::new("US", "USD", account_nr)
            .with_holder_name(holder_name)
            .with_bank_name(bank_name)
            .with_bank_id(routing_nr);
        Self::from_parts(PayloadCore::new(id, salt), bank, holder_address)
    }

    pub(crate) fn from_parts(
        core: PayloadCore,
        bank: BankDetails,
        holder_address: Option<String>,
    ) -> Result<Self> {
        validate_routing_nr(&bank)?;
        let payload = Self {
            core,
            bank,
            holder_address,
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn bank(&self) -> &BankDetails {
        &self.bank
    }

    pub fn holder_name(&self) -> &str {
        self.bank.holder_name.as_deref().unwrap_or_default()
    }

    pub fn holder_address(&self) -> Option<&str> {
        self.holder_address.as_deref()
    }

    pub fn routing_nr(&self) -> &str {
        self.bank.bank_id.as_deref().unwrap_or_default()
    }
}

impl PayloadVariant for DomesticWireTransferAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::DomesticWireTransfer;
    const FAMILY: PayloadFamily = PayloadFamily::Bank;

    bank_variant_common!();

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed(&self.bank.selected_currency_code))
    }

    fn verify_fields(&self) -> Result<()> {
        verify_us_transfer(&self.bank, "DomesticWireTransfer")?;
        validate_optional_text(
            "holder_address",
            self.holder_address.as_deref(),
            ADDRESS_MIN_LEN,
            ADDRESS_MAX_LEN,
        )?;
        if self.bank.bank_account_type.is_some() {
            return Err(ValidationError::new(
                "bank_account_type",
                Constraint::NotAllowed("account type on a wire transfer".into()),
            )
            .into());
        }
        Ok(())
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = self.bank.display_fields();
        if let Some(address) = &self.holder_address {
            fields.push(("Holder address", address.clone()));
        }
        fields
    }
}

// Rules shared by the US-only rails.
fn verify_us_transfer(bank: &BankDetails, variant: &'static str) -> Result<()> {
    validate_equals("country_code", &bank.country_code, "US")?;
    validate_equals("selected_currency_code", &bank.selected_currency_code, "USD")?;
    let holder_name = bank
        .holder_name
        .as_deref()
        .ok_or(AccountError::missing_field(variant, "holder_name"))?;
    validate_required_text("holder_name", holder_name, HOLDER_NAME_MIN_LEN, HOLDER_NAME_MAX_LEN)?;
    if bank.bank_name.is_none() {
        return Err(AccountError::missing_field(variant, "bank_name"));
    }
    if bank.bank_id.is_none() {
        return Err(AccountError::missing_field(variant, "routing_nr"));
    }
    validate_routing_nr(bank)
}

// The routing number travels as the bank id but is reported under its own
// name, ahead of the generic bank id bounds.
fn validate_routing_nr(bank: &BankDetails) -> Result<()> {
    if let Some(routing_nr) = bank.bank_id.as_deref() {
        validate_digits("routing_nr", routing_nr, ROUTING_NR_LEN, ROUTING_NR_LEN)?;
    }
    Ok(())
}

/// Transfer between accounts at any bank of the same country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NationalBankAccountPayload {
    core: PayloadCore,
    bank: BankDetails,
}

/// Cash paid in at a branch of the recipient's bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashDepositAccountPayload {
    core: PayloadCore,
    bank: BankDetails,
    requirements: Option<String>,
}

/// Transfer between two accounts at the same bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SameBankAccountPayload {
    core: PayloadCore,
    bank: BankDetails,
}

impl NationalBankAccountPayload {
    pub fn new(id: impl Into<String>, bank: BankDetails) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), bank)
    }

    pub fn with_salt(id: impl Into<String>, salt: Vec<u8>, bank: BankDetails) -> Result<Self> {
        let payload = Self {
            core: PayloadCore::new(id, salt),
            bank,
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn bank(&self) -> &BankDetails {
        &self.bank
    }
}

impl SameBankAccountPayload {
    pub fn new(id: impl Into<String>, bank: BankDetails) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), bank)
    }

    pub fn with_salt(id: impl Into<String>, salt: Vec<u8>, bank: BankDetails) -> Result<Self> {
        let payload = Self {
            core: PayloadCore::new(id, salt),
            bank,
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn bank(&self) -> &BankDetails {
        &self.bank
    }
}

impl CashDepositAccountPayload {
    pub fn new(
        id: impl Into<String>,
        bank: BankDetails,
        requirements: Option<String>,
    ) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), bank, requirements)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        bank: BankDetails,
        requirements: Option<String>,
    ) -> Result<Self> {
        let payload = Self {
            core: PayloadCore::new(id, salt),
            bank,
            requirements,
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn bank(&self) -> &BankDetails {
        &self.bank
    }

    /// Extra conditions for the deposit, such as a reference to quote.
    pub fn requirements(&self) -> Option<&str> {
        self.requirements.as_deref()
    }
}

impl PayloadVariant for NationalBankAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::NationalBank;
    const FAMILY: PayloadFamily = PayloadFamily::Bank;

    bank_variant_common!();

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Selected(&self.bank.selected_currency_code))
    }

    fn verify_fields(&self) -> Result<()> {
        self.bank.verify_required_fields()
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        self.bank.display_fields()
    }
}

impl PayloadVariant for SameBankAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::SameBank;
    const FAMILY: PayloadFamily = PayloadFamily::Bank;

    bank_variant_common!();

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Selected(&self.bank.selected_currency_code))
    }

    fn verify_fields(&self) -> Result<()> {
        self.bank.verify_required_fields()
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        self.bank.display_fields()
    }
}

impl PayloadVariant for CashDepositAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::CashDeposit;
    const FAMILY: PayloadFamily = PayloadFamily::Bank;

    bank_variant_common!();

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Selected(&self.bank.selected_currency_code))
    }

    fn verify_fields(&self) -> Result<()> {
        self.bank.verify_required_fields()?;
        validate_optional_text(
            "requirements",
            self.requirements.as_deref(),
            1,
            REQUIREMENTS_MAX_LEN,
        )?;
        Ok(())
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = self.bank.display_fields();
        if let Some(requirements) = &self.requirements {
            fields.push(("Requirements", requirements.clone()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestFixtures;

    fn us_details() -> BankDetails {
        BankDetails::new("US", "USD", "123456789")
            .with_holder_name("Alice")
            .with_bank_name("Bank")
            .with_bank_id("111000025")
    }

    #[test]
    fn test_account_type_required_in_us_only() {
        let salt = TestFixtures::ZERO_SALT.to_vec();
        let err = NationalBankAccountPayload::with_salt("id", salt.clone(), us_details())
            .unwrap_err();
        assert_eq!(
            err.validation().map(|e| (e.field.as_str(), e.constraint.clone())),
            Some(("bank_account_type", Constraint::Missing))
        );

        let us = us_details().with_bank_account_type(BankAccountType::Checking);
        assert!(NationalBankAccountPayload::with_salt("id", salt.clone(), us).is_ok());

        let de = BankDetails::new("DE", "EUR", "0532013000")
            .with_bank_name("Bank")
            .with_bank_id("37040044")
            .with_branch_id("001");
        assert!(NationalBankAccountPayload::with_salt("id", salt, de).is_ok());
    }

    #[test]
    fn test_bank_length_bounds() {
        let salt = TestFixtures::ZERO_SALT.to_vec();
        let details = BankDetails::new("SE", "SEK", "1".repeat(ACCOUNT_NR_MAX_LEN + 1));
        let err = SameBankAccountPayload::with_salt("id", salt.clone(), details).unwrap_err();
        assert_eq!(err.validation().map(|e| e.field.as_str()), Some("account_nr"));

        let details = BankDetails::new("SE", "SEK", "").with_holder_name("A");
        let err = SameBankAccountPayload::with_salt("id", salt, details).unwrap_err();
        assert_eq!(err.validation().map(|e| e.field.as_str()), Some("holder_name"));
    }

    #[test]
    fn test_fingerprint_field_filters_by_country() {
        let details = BankDetails::new("SE", "SEK", "1234567")
            .with_bank_name("Bank")
            .with_bank_id("BANKID");
        assert_eq!(details.fingerprint_field("bank_name"), None);
        assert_eq!(details.fingerprint_field("account_nr"), Some("1234567"));
        assert_eq!(details.fingerprint_field("unknown"), None);
    }

    #[test]
    fn test_ach_rules() {
        let salt = TestFixtures::ZERO_SALT.to_vec();
        let ach = AchTransferAccountPayload::with_salt(
            "id",
            salt.clone(),
            "Alice",
            Some("123 Main St".into()),
            "Bank",
            "111000025",
            "123456789",
            BankAccountType::Checking,
        )
        .unwrap();
        assert_eq!(ach.routing_nr(), "111000025");
        assert_eq!(ach.country_code(), Some("US"));

        let err = AchTransferAccountPayload::with_salt(
            "id",
            salt,
            "Alice",
            None,
            "Bank",
            "11100002",
            "123456789",
            BankAccountType::Savings,
        )
        .unwrap_err();
        assert_eq!(err.validation().map(|e| e.field.as_str()), Some("routing_nr"));
    }

    #[test]
    fn test_display_uses_country_labels() {
        let payload = TestFixtures::national_bank_ar();
        let display = payload.account_data_display_string();
        assert!(display.contains("CUIT/CUIL: CUIT123"));
        assert!(display.contains("CBU: CBU123"));
    }

    #[test]
    fn test_account_type_names() {
        assert_eq!(BankAccountType::from_name("SAVINGS"), Some(BankAccountType::Savings));
        assert_eq!(BankAccountType::from_name("savings"), None);
        assert_eq!(BankAccountType::Checking.to_string(), "CHECKING");
    }
}
