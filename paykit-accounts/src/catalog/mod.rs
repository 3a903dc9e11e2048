//! Static lookup data: payment rails, countries, currencies and bank fields.
//!
//! Everything here is compiled in and read-only. Lookup maps are built once
//! on first use.

pub mod bank_fields;
pub mod countries;
pub mod currencies;
pub mod rails;

pub use bank_fields::{
    field_label, field_short_label, is_field_required, required_fields, BankField,
};
pub use countries::{
    all_sepa_country_codes, find_country, is_known_country, is_sepa_country, Country, Region,
    SEPA_EURO_COUNTRY_CODES, SEPA_NON_EURO_COUNTRY_CODES,
};
pub use currencies::{currency_for_country, find_currency, is_known_currency, FiatCurrency};
pub use rails::{
    national_bank_country_codes, payment_rails_for_currency, ChargebackRisk, Coverage,
    FiatPaymentRail,
};
