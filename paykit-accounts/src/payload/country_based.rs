//! Payloads bound to a declared country.
//!
//! Rails that operate in a single country fix the country in the type and
//! take no country argument.

use super::{field_accessors, verified, CurrencySelection, PayloadCore, PayloadFamily, PayloadVariant};
use crate::catalog::{all_sepa_country_codes, currency_for_country, FiatPaymentRail};
use crate::validation::{
    validate_bic_format, validate_country_code, validate_country_codes, validate_email,
    validate_email_or_phone, validate_iban_country_consistency, validate_optional_text,
    validate_phone_number, validate_required_text, validate_sepa_iban,
};
use crate::Result;

pub const HOLDER_NAME_MIN_LEN: usize = 2;
pub const HOLDER_NAME_MAX_LEN: usize = 100;
pub const ADDRESS_MIN_LEN: usize = 5;
pub const ADDRESS_MAX_LEN: usize = 200;
pub const EXTRA_INFO_MAX_LEN: usize = 300;

fn validate_holder_name(field: &str, value: &str) -> Result<()> {
    validate_required_text(field, value, HOLDER_NAME_MIN_LEN, HOLDER_NAME_MAX_LEN)?;
    Ok(())
}

/// Amazon eGift card, sent to an e-mail address or phone number. Paid in
/// the currency of the card's country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmazonGiftCardAccountPayload {
    core: PayloadCore,
    country_code: String,
    email_or_mobile_nr: String,
}

field_accessors!(AmazonGiftCardAccountPayload { str email_or_mobile_nr });

impl AmazonGiftCardAccountPayload {
    pub fn new(
        id: impl Into<String>,
        country_code: impl Into<String>,
        email_or_mobile_nr: impl Into<String>,
    ) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), country_code, email_or_mobile_nr)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        country_code: impl Into<String>,
        email_or_mobile_nr: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            country_code: country_code.into(),
            email_or_mobile_nr: email_or_mobile_nr.into(),
        })
    }
}

impl PayloadVariant for AmazonGiftCardAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::AmazonGiftCard;
    const FAMILY: PayloadFamily = PayloadFamily::CountryBased;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn country_code(&self) -> Option<&str> {
        Some(&self.country_code)
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        let code = currency_for_country(&self.country_code).map_or("", |c| c.code);
        Some(CurrencySelection::Fixed(code))
    }

    fn verify_fields(&self) -> Result<()> {
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
            ("Country", self.country_code.clone()),
            ("Email or mobile no.", self.email_or_mobile_nr.clone()),
        ]
    }

    fn account_name_hint(&self) -> &str {
        &self.email_or_mobile_nr
    }
}

/// Swish, Sweden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwishAccountPayload {
    core: PayloadCore,
    holder_name: String,
    mobile_nr: String,
}

field_accessors!(SwishAccountPayload { str holder_name, str mobile_nr });

impl SwishAccountPayload {
    pub const COUNTRY_CODE: &'static str = "SE";

    pub fn new(
        id: impl Into<String>,
        holder_name: impl Into<String>,
        mobile_nr: impl Into<String>,
    ) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), holder_name, mobile_nr)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        holder_name: impl Into<String>,
        mobile_nr: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            holder_name: holder_name.into(),
            mobile_nr: mobile_nr.into(),
        })
    }
}

impl PayloadVariant for SwishAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::Swish;
    const FAMILY: PayloadFamily = PayloadFamily::CountryBased;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn country_code(&self) -> Option<&str> {
        Some(Self::COUNTRY_CODE)
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed("SEK"))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_holder_name("holder_name", &self.holder_name)?;
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
        vec![
            ("Holder name", self.holder_name.clone()),
            ("Mobile no.", self.mobile_nr.clone()),
        ]
    }

    fn account_name_hint(&self) -> &str {
        &self.mobile_nr
    }
}

// SEPA and SEPA Instant share their fields and rules.
macro_rules! sepa_payload {
    ($(#[$meta:meta])* $name:ident, $rail:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            core: PayloadCore,
            holder_name: String,
            iban: String,
            bic: String,
            country_code: String,
            accepted_country_codes: Vec<String>,
        }

        field_accessors!($name {
            str holder_name,
            str iban,
            str bic,
            list accepted_country_codes,
        });

        impl $name {
            pub fn new(
                id: impl Into<String>,
                holder_name: impl Into<String>,
                iban: impl Into<String>,
                bic: impl Into<String>,
                country_code: impl Into<String>,
                accepted_country_codes: Vec<String>,
            ) -> Result<Self> {
                Self::with_salt(
                    id,
                    super::generate_salt(),
                    holder_name,
                    iban,
                    bic,
                    country_code,
                    accepted_country_codes,
                )
            }

            pub fn with_salt(
                id: impl Into<String>,
                salt: Vec<u8>,
                holder_name: impl Into<String>,
                iban: impl Into<String>,
                bic: impl Into<String>,
                country_code: impl Into<String>,
                accepted_country_codes: Vec<String>,
            ) -> Result<Self> {
                verified(Self {
                    core: PayloadCore::new(id, salt),
                    holder_name: holder_name.into(),
                    iban: iban.into(),
                    bic: bic.into(),
                    country_code: country_code.into(),
                    accepted_country_codes,
                })
            }
        }

        impl PayloadVariant for $name {
            const RAIL: FiatPaymentRail = $rail;
            const FAMILY: PayloadFamily = PayloadFamily::CountryBased;

            fn core(&self) -> &PayloadCore {
                &self.core
            }

            fn country_code(&self) -> Option<&str> {
                Some(&self.country_code)
            }

            fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
                Some(CurrencySelection::Fixed("EUR"))
            }

            fn verify_fields(&self) -> Result<()> {
                let sepa = all_sepa_country_codes();
                validate_holder_name("holder_name", &self.holder_name)?;
                validate_sepa_iban(&self.iban, &sepa)?;
                validate_iban_country_consistency(&self.iban, &self.country_code)?;
                validate_bic_format(&self.bic)?;
                validate_country_codes("accepted_country_codes", &self.accepted_country_codes, &sepa)?;
                Ok(())
            }

            fn fingerprint_field(&self, field: &str) -> Option<&str> {
                match field {
                    "iban" => Some(&self.iban),
                    "bic" => Some(&self.bic),
                    _ => None,
                }
            }

            fn display_fields(&self) -> Vec<(&'static str, String)> {
                vec![
                    ("Holder name", self.holder_name.clone()),
                    ("IBAN", self.iban.clone()),
                    ("BIC", self.bic.clone()),
                    ("Country of bank", self.country_code.clone()),
                    ("Accepted countries", self.accepted_country_codes.join(", ")),
                ]
            }

            fn account_name_hint(&self) -> &str {
                &self.iban
            }
        }
    };
}

sepa_payload!(
    /// SEPA credit transfer in euro.
    SepaAccountPayload,
    FiatPaymentRail::Sepa
);

sepa_payload!(
    /// SEPA instant credit transfer in euro.
    SepaInstantAccountPayload,
    FiatPaymentRail::SepaInstant
);

/// Bizum, Spain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BizumAccountPayload {
    core: PayloadCore,
    mobile_nr: String,
}

field_accessors!(BizumAccountPayload { str mobile_nr });

impl BizumAccountPayload {
    pub const COUNTRY_CODE: &'static str = "ES";

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

impl PayloadVariant for BizumAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::Bizum;
    const FAMILY: PayloadFamily = PayloadFamily::CountryBased;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn country_code(&self) -> Option<&str> {
        Some(Self::COUNTRY_CODE)
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

pub const CITY_MIN_LEN: usize = 2;
pub const CITY_MAX_LEN: usize = 50;

/// Face to face cash trade in a city, any currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct F2fAccountPayload {
    core: PayloadCore,
    country_code: String,
    selected_currency_code: String,
    city: String,
    contact: String,
    extra_info: Option<String>,
}

field_accessors!(F2fAccountPayload {
    str selected_currency_code,
    str city,
    str contact,
    opt extra_info,
});

impl F2fAccountPayload {
    pub fn new(
        id: impl Into<String>,
        country_code: impl Into<String>,
        selected_currency_code: impl Into<String>,
        city: impl Into<String>,
        contact: impl Into<String>,
        extra_info: Option<String>,
    ) -> Result<Self> {
        Self::with_salt(
            id,
            super::generate_salt(),
            country_code,
            selected_currency_code,
            city,
            contact,
            extra_info,
        )
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        country_code: impl Into<String>,
        selected_currency_code: impl Into<String>,
        city: impl Into<String>,
        contact: impl Into<String>,
        extra_info: Option<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            country_code: country_code.into(),
            selected_currency_code: selected_currency_code.into(),
            city: city.into(),
            contact: contact.into(),
            extra_info,
        })
    }
}

impl PayloadVariant for F2fAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::F2f;
    const FAMILY: PayloadFamily = PayloadFamily::CountryBased;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn country_code(&self) -> Option<&str> {
        Some(&self.country_code)
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Selected(&self.selected_currency_code))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_required_text("city", &self.city, CITY_MIN_LEN, CITY_MAX_LEN)?;
        validate_required_text("contact", &self.contact, 2, 100)?;
        validate_optional_text("extra_info", self.extra_info.as_deref(), 1, EXTRA_INFO_MAX_LEN)?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "contact" => Some(&self.contact),
            "city" => Some(&self.city),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Country", self.country_code.clone()),
            ("Currency", self.selected_currency_code.clone()),
            ("City", self.city.clone()),
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

/// Pix, Brazil's instant payment system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixAccountPayload {
    core: PayloadCore,
    holder_name: String,
    pix_key: String,
}

field_accessors!(PixAccountPayload { str holder_name, str pix_key });

impl PixAccountPayload {
    pub const COUNTRY_CODE: &'static str = "BR";

    pub fn new(
        id: impl Into<String>,
        holder_name: impl Into<String>,
        pix_key: impl Into<String>,
    ) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), holder_name, pix_key)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        holder_name: impl Into<String>,
        pix_key: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            holder_name: holder_name.into(),
            pix_key: pix_key.into(),
        })
    }
}

impl PayloadVariant for PixAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::Pix;
    const FAMILY: PayloadFamily = PayloadFamily::CountryBased;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn country_code(&self) -> Option<&str> {
        Some(Self::COUNTRY_CODE)
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed("BRL"))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_holder_name("holder_name", &self.holder_name)?;
        validate_required_text("pix_key", &self.pix_key, 2, 100)?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "pix_key" => Some(&self.pix_key),
            "holder_name" => Some(&self.holder_name),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Holder name", self.holder_name.clone()),
            ("Pix key", self.pix_key.clone()),
        ]
    }

    fn account_name_hint(&self) -> &str {
        &self.pix_key
    }
}

/// PromptPay, Thailand. Addressed by a citizen id, tax id or phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPayAccountPayload {
    core: PayloadCore,
    prompt_pay_id: String,
}

field_accessors!(PromptPayAccountPayload { str prompt_pay_id });

impl PromptPayAccountPayload {
    pub const COUNTRY_CODE: &'static str = "TH";

    pub fn new(id: impl Into<String>, prompt_pay_id: impl Into<String>) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), prompt_pay_id)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        prompt_pay_id: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            prompt_pay_id: prompt_pay_id.into(),
        })
    }
}

impl PayloadVariant for PromptPayAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::PromptPay;
    const FAMILY: PayloadFamily = PayloadFamily::CountryBased;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn country_code(&self) -> Option<&str> {
        Some(Self::COUNTRY_CODE)
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed("THB"))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_required_text("prompt_pay_id", &self.prompt_pay_id, 2, 50)?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "prompt_pay_id" => Some(&self.prompt_pay_id),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![("PromptPay ID", self.prompt_pay_id.clone())]
    }

    fn account_name_hint(&self) -> &str {
        &self.prompt_pay_id
    }
}

/// Strike, US. Paid to the Strike account of the holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrikeAccountPayload {
    core: PayloadCore,
    holder_name: String,
}

field_accessors!(StrikeAccountPayload { str holder_name });

impl StrikeAccountPayload {
    pub const COUNTRY_CODE: &'static str = "US";

    pub fn new(id: impl Into<String>, holder_name: impl Into<String>) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), holder_name)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        holder_name: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            holder_name: holder_name.into(),
        })
    }
}

impl PayloadVariant for StrikeAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::Strike;
    const FAMILY: PayloadFamily = PayloadFamily::CountryBased;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn country_code(&self) -> Option<&str> {
        Some(Self::COUNTRY_CODE)
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed("USD"))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_holder_name("holder_name", &self.holder_name)
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "holder_name" => Some(&self.holder_name),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![("Holder name", self.holder_name.clone())]
    }

    fn account_name_hint(&self) -> &str {
        &self.holder_name
    }
}

/// UPI, India. Addressed by a virtual payment address such as `name@bank`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpiAccountPayload {
    core: PayloadCore,
    virtual_payment_address: String,
}

field_accessors!(UpiAccountPayload { str virtual_payment_address });

impl UpiAccountPayload {
    pub const COUNTRY_CODE: &'static str = "IN";

    pub fn new(id: impl Into<String>, virtual_payment_address: impl Into<String>) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), virtual_payment_address)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        virtual_payment_address: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            virtual_payment_address: virtual_payment_address.into(),
        })
    }
}

impl PayloadVariant for UpiAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::Upi;
    const FAMILY: PayloadFamily = PayloadFamily::CountryBased;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn country_code(&self) -> Option<&str> {
        Some(Self::COUNTRY_CODE)
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed("INR"))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_required_text("virtual_payment_address", &self.virtual_payment_address, 2, 100)?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "virtual_payment_address" => Some(&self.virtual_payment_address),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![("Virtual payment address", self.virtual_payment_address.clone())]
    }

    fn account_name_hint(&self) -> &str {
        &self.virtual_payment_address
    }
}

/// Wise multi-currency account, addressed by e-mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiseAccountPayload {
    core: PayloadCore,
    country_code: String,
    selected_currency_codes: Vec<String>,
    holder_name: String,
    email: String,
}

field_accessors!(WiseAccountPayload {
    list selected_currency_codes,
    str holder_name,
    str email,
});

impl WiseAccountPayload {
    pub fn new(
        id: impl Into<String>,
        country_code: impl Into<String>,
        selected_currency_codes: Vec<String>,
        holder_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self> {
        Self::with_salt(
            id,
            super::generate_salt(),
            country_code,
            selected_currency_codes,
            holder_name,
            email,
        )
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        country_code: impl Into<String>,
        selected_currency_codes: Vec<String>,
        holder_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            country_code: country_code.into(),
            selected_currency_codes,
            holder_name: holder_name.into(),
            email: email.into(),
        })
    }
}

impl PayloadVariant for WiseAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::Wise;
    const FAMILY: PayloadFamily = PayloadFamily::CountryBased;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn country_code(&self) -> Option<&str> {
        Some(&self.country_code)
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::SelectedMany(&self.selected_currency_codes))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_holder_name("holder_name", &self.holder_name)?;
        validate_email("email", &self.email)?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "email" => Some(&self.email),
            "holder_name" => Some(&self.holder_name),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Holder name", self.holder_name.clone()),
            ("Email", self.email.clone()),
            ("Currencies", self.selected_currency_codes.join(", ")),
        ]
    }

    fn account_name_hint(&self) -> &str {
        &self.email
    }
}

/// Wise USD account, US only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiseUsdAccountPayload {
    core: PayloadCore,
    holder_name: String,
    email: String,
    beneficiary_address: String,
}

field_accessors!(WiseUsdAccountPayload { str holder_name, str email, str beneficiary_address });

impl WiseUsdAccountPayload {
    pub const COUNTRY_CODE: &'static str = "US";

    pub fn new(
        id: impl Into<String>,
        holder_name: impl Into<String>,
        email: impl Into<String>,
        beneficiary_address: impl Into<String>,
    ) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), holder_name, email, beneficiary_address)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        holder_name: impl Into<String>,
        email: impl Into<String>,
        beneficiary_address: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            holder_name: holder_name.into(),
            email: email.into(),
            beneficiary_address: beneficiary_address.into(),
        })
    }
}

impl PayloadVariant for WiseUsdAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::WiseUsd;
    const FAMILY: PayloadFamily = PayloadFamily::CountryBased;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn country_code(&self) -> Option<&str> {
        Some(Self::COUNTRY_CODE)
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed("USD"))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_holder_name("holder_name", &self.holder_name)?;
        validate_email("email", &self.email)?;
        validate_required_text(
            "beneficiary_address",
            &self.beneficiary_address,
            ADDRESS_MIN_LEN,
            ADDRESS_MAX_LEN,
        )?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "holder_name" => Some(&self.holder_name),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Holder name", self.holder_name.clone()),
            ("Email", self.email.clone()),
            ("Beneficiary address", self.beneficiary_address.clone()),
        ]
    }

    fn account_name_hint(&self) -> &str {
        &self.email
    }
}

pub const STATE_MIN_LEN: usize = 2;
pub const STATE_MAX_LEN: usize = 50;

/// MoneyGram cash transfer, collected at an agent location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyGramAccountPayload {
    core: PayloadCore,
    country_code: String,
    selected_currency_codes: Vec<String>,
    holder_name: String,
    email: String,
    state: Option<String>,
}

field_accessors!(MoneyGramAccountPayload {
    list selected_currency_codes,
    str holder_name,
    str email,
    opt state,
});

impl MoneyGramAccountPayload {
    pub fn new(
        id: impl Into<String>,
        country_code: impl Into<String>,
        selected_currency_codes: Vec<String>,
        holder_name: impl Into<String>,
        email: impl Into<String>,
        state: Option<String>,
    ) -> Result<Self> {
        Self::with_salt(
            id,
            super::generate_salt(),
            country_code,
            selected_currency_codes,
            holder_name,
            email,
            state,
        )
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        country_code: impl Into<String>,
        selected_currency_codes: Vec<String>,
        holder_name: impl Into<String>,
        email: impl Into<String>,
        state: Option<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            country_code: country_code.into(),
            selected_currency_codes,
            holder_name: holder_name.into(),
            email: email.into(),
            state,
        })
    }
}

impl PayloadVariant for MoneyGramAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::MoneyGram;
    const FAMILY: PayloadFamily = PayloadFamily::CountryBased;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn country_code(&self) -> Option<&str> {
        Some(&self.country_code)
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::SelectedMany(&self.selected_currency_codes))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_holder_name("holder_name", &self.holder_name)?;
        validate_email("email", &self.email)?;
        validate_optional_text("state", self.state.as_deref(), STATE_MIN_LEN, STATE_MAX_LEN)?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "state" => self.state.as_deref(),
            "holder_name" => Some(&self.holder_name),
            "email" => Some(&self.email),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Holder name", self.holder_name.clone()),
            ("Email", self.email.clone()),
        ];
        if let Some(state) = &self.state {
            fields.push(("State", state.clone()));
        }
        fields.push(("Currencies", self.selected_currency_codes.join(", ")));
        fields
    }

    fn account_name_hint(&self) -> &str {
        &self.email
    }
}

/// MoneyBeam (N26), paid to an account id in EUR or GBP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyBeamAccountPayload {
    core: PayloadCore,
    country_code: String,
    selected_currency_code: String,
    holder_name: String,
    account_id: String,
}

field_accessors!(MoneyBeamAccountPayload {
    str selected_currency_code,
    str holder_name,
    str account_id,
});

impl MoneyBeamAccountPayload {
    pub fn new(
        id: impl Into<String>,
        country_code: impl Into<String>,
        selected_currency_code: impl Into<String>,
        holder_name: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Result<Self> {
        Self::with_salt(
            id,
            super::generate_salt(),
            country_code,
            selected_currency_code,
            holder_name,
            account_id,
        )
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        country_code: impl Into<String>,
        selected_currency_code: impl Into<String>,
        holder_name: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            country_code: country_code.into(),
            selected_currency_code: selected_currency_code.into(),
            holder_name: holder_name.into(),
            account_id: account_id.into(),
        })
    }
}

impl PayloadVariant for MoneyBeamAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::MoneyBeam;
    const FAMILY: PayloadFamily = PayloadFamily::CountryBased;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn country_code(&self) -> Option<&str> {
        Some(&self.country_code)
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Selected(&self.selected_currency_code))
    }

    fn verify_fields(&self) -> Result<()> {
        validate_holder_name("holder_name", &self.holder_name)?;
        validate_required_text("account_id", &self.account_id, 2, 100)?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "account_id" => Some(&self.account_id),
            "holder_name" => Some(&self.holder_name),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Holder name", self.holder_name.clone()),
            ("Account ID", self.account_id.clone()),
            ("Currency", self.selected_currency_code.clone()),
        ]
    }

    fn account_name_hint(&self) -> &str {
        &self.account_id
    }
}

/// Pin 4, Poland. Paid to a mobile number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin4AccountPayload {
    core: PayloadCore,
    mobile_nr: String,
}

field_accessors!(Pin4AccountPayload { str mobile_nr });

impl Pin4AccountPayload {
    pub const COUNTRY_CODE: &'static str = "PL";

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

impl PayloadVariant for Pin4AccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::Pin4;
    const FAMILY: PayloadFamily = PayloadFamily::CountryBased;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn country_code(&self) -> Option<&str> {
        Some(Self::COUNTRY_CODE)
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Fixed("PLN"))
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

/// Beneficiary, bank and optional intermediary bank of a SWIFT transfer.
///
/// Plain data; bounds are checked by [`SwiftAccountPayload`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SwiftDetails {
    pub selected_currency_code: String,
    pub beneficiary_name: String,
    pub beneficiary_account_nr: String,
    pub beneficiary_phone: Option<String>,
    pub beneficiary_address: String,
    pub bank_swift_code: String,
    pub bank_name: String,
    pub bank_branch: Option<String>,
    pub bank_address: String,
    pub intermediary_bank_country_code: Option<String>,
    pub intermediary_bank_swift_code: Option<String>,
    pub intermediary_bank_name: Option<String>,
    pub intermediary_bank_branch: Option<String>,
    pub intermediary_bank_address: Option<String>,
    pub additional_instructions: Option<String>,
}

pub const SWIFT_CODE_MIN_LEN: usize = 8;
pub const SWIFT_CODE_MAX_LEN: usize = 11;

/// International SWIFT wire transfer in a selected currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwiftAccountPayload {
    core: PayloadCore,
    country_code: String,
    details: SwiftDetails,
}

impl SwiftAccountPayload {
    pub fn new(
        id: impl Into<String>,
        country_code: impl Into<String>,
        details: SwiftDetails,
    ) -> Result<Self> {
        Self::with_salt(id, super::generate_salt(), country_code, details)
    }

    pub fn with_salt(
        id: impl Into<String>,
        salt: Vec<u8>,
        country_code: impl Into<String>,
        details: SwiftDetails,
    ) -> Result<Self> {
        verified(Self {
            core: PayloadCore::new(id, salt),
            country_code: country_code.into(),
            details,
        })
    }

    pub fn details(&self) -> &SwiftDetails {
        &self.details
    }
}

impl PayloadVariant for SwiftAccountPayload {
    const RAIL: FiatPaymentRail = FiatPaymentRail::Swift;
    const FAMILY: PayloadFamily = PayloadFamily::CountryBased;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn country_code(&self) -> Option<&str> {
        Some(&self.country_code)
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
        Some(CurrencySelection::Selected(&self.details.selected_currency_code))
    }

    fn verify_fields(&self) -> Result<()> {
        let d = &self.details;
        validate_holder_name("beneficiary_name", &d.beneficiary_name)?;
        validate_required_text("beneficiary_account_nr", &d.beneficiary_account_nr, 2, 50)?;
        validate_optional_text("beneficiary_phone", d.beneficiary_phone.as_deref(), 5, 30)?;
        validate_required_text(
            "beneficiary_address",
            &d.beneficiary_address,
            ADDRESS_MIN_LEN,
            ADDRESS_MAX_LEN,
        )?;
        validate_required_text(
            "bank_swift_code",
            &d.bank_swift_code,
            SWIFT_CODE_MIN_LEN,
            SWIFT_CODE_MAX_LEN,
        )?;
        validate_required_text("bank_name", &d.bank_name, 2, 100)?;
        validate_optional_text("bank_branch", d.bank_branch.as_deref(), 2, 100)?;
        validate_required_text("bank_address", &d.bank_address, ADDRESS_MIN_LEN, ADDRESS_MAX_LEN)?;
        if let Some(code) = &d.intermediary_bank_country_code {
            validate_country_code("intermediary_bank_country_code", code)?;
        }
        validate_optional_text(
            "intermediary_bank_swift_code",
            d.intermediary_bank_swift_code.as_deref(),
            SWIFT_CODE_MIN_LEN,
            SWIFT_CODE_MAX_LEN,
        )?;
        validate_optional_text(
            "intermediary_bank_name",
            d.intermediary_bank_name.as_deref(),
            2,
            100,
        )?;
        validate_optional_text(
            "intermediary_bank_branch",
            d.intermediary_bank_branch.as_deref(),
            2,
            100,
        )?;
        validate_optional_text(
            "intermediary_bank_address",
            d.intermediary_bank_address.as_deref(),
            ADDRESS_MIN_LEN,
            ADDRESS_MAX_LEN,
        )?;
        validate_optional_text(
            "additional_instructions",
            d.additional_instructions.as_deref(),
            2,
            EXTRA_INFO_MAX_LEN,
        )?;
        Ok(())
    }

    fn fingerprint_field(&self, field: &str) -> Option<&str> {
        match field {
            "beneficiary_account_nr" => Some(&self.details.beneficiary_account_nr),
            _ => None,
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        let d = &self.details;
        let mut fields = vec![
            ("Currency", d.selected_currency_code.clone()),
            ("Beneficiary name", d.beneficiary_name.clone()),
            ("Beneficiary account no.", d.beneficiary_account_nr.clone()),
            ("Beneficiary address", d.beneficiary_address.clone()),
            ("Bank SWIFT code", d.bank_swift_code.clone()),
            ("Bank name", d.bank_name.clone()),
            ("Bank address", d.bank_address.clone()),
        ];
        let optional = [
            ("Beneficiary phone", &d.beneficiary_phone),
            ("Bank branch", &d.bank_branch),
            ("Intermediary bank country", &d.intermediary_bank_country_code),
            ("Intermediary bank SWIFT code", &d.intermediary_bank_swift_code),
            ("Intermediary bank name", &d.intermediary_bank_name),
            ("Intermediary bank branch", &d.intermediary_bank_branch),
            ("Intermediary bank address", &d.intermediary_bank_address),
            ("Additional instructions", &d.additional_instructions),
        ];
        fields.extend(
            optional
                .into_iter()
                .filter_map(|(label, value)| value.clone().map(|v| (label, v))),
        );
        fields
    }

    fn account_name_hint(&self) -> &str {
        &self.details.bank_swift_code
    }
}
