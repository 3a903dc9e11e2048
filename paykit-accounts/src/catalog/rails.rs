//! The closed set of fiat payment rails and their static data.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::countries::{self, SEPA_EURO_COUNTRY_CODES};
use super::currencies;
use crate::AccountError;

/// How likely a completed payment can be reversed by the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargebackRisk {
    VeryLow,
    Low,
    Moderate,
    Medium,
}

/// Countries or currencies a rail can be used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Every entry of the repository.
    All,
    /// The listed codes only.
    Only(&'static [&'static str]),
}

impl Coverage {
    fn contains(&self, code: &str, known: impl Fn(&str) -> bool) -> bool {
        match self {
            Self::All => known(code),
            Self::Only(codes) => codes.contains(&code),
        }
    }
}

/// Every fiat payment rail known to the application, including rails that
/// have no account payload type yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FiatPaymentRail {
    AchTransfer,
    AdvancedCash,
    AliPay,
    AmazonGiftCard,
    Bizum,
    CashApp,
    CashByMail,
    CashDeposit,
    Custom,
    DomesticWireTransfer,
    #[serde(rename = "F2F")]
    F2f,
    FasterPayments,
    HalCash,
    Imps,
    InteracETransfer,
    MercadoPago,
    Monese,
    MoneyBeam,
    MoneyGram,
    NationalBank,
    Neft,
    PayId,
    Paysera,
    PerfectMoney,
    #[serde(rename = "PIN_4")]
    Pin4,
    Pix,
    PromptPay,
    Revolut,
    SameBank,
    Satispay,
    Sbp,
    Sepa,
    SepaInstant,
    Strike,
    Swift,
    Swish,
    Uphold,
    Upi,
    UsPostalMoneyOrder,
    Verse,
    WechatPay,
    Wise,
    WiseUsd,
    Zelle,
}

const US: &[&str] = &["US"];
const USD: &[&str] = &["USD"];
const EUR: &[&str] = &["EUR"];
const SEPA_COUNTRIES: &[&str] = &[
    "AD", "AT", "BE", "BG", "CH", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GB", "GI", "GR",
    "HR", "HU", "IE", "IS", "IT", "JE", "LI", "LT", "LU", "LV", "MC", "MT", "NL", "NO", "PL", "PT",
    "RO", "SE", "SI", "SK", "SM", "VA",
];

const REVOLUT_COUNTRIES: &[&str] = &[
    "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "EE", "FI", "FR", "DE", "GR", "HU", "IS", "IE", "IT",
    "LV", "LI", "LT", "LU", "MT", "NL", "NO", "PL", "PT", "RO", "SK", "SI", "ES", "SE", "GB", "AU",
    "CA", "SG", "CH", "US",
];
const REVOLUT_CURRENCIES: &[&str] = &[
    "AED", "AUD", "BGN", "CAD", "CHF", "CZK", "DKK", "EUR", "GBP", "HKD", "HUF", "ILS", "ISK", "JPY",
    "MAD", "MXN", "NOK", "NZD", "PLN", "QAR", "RON", "RSD", "RUB", "SAR", "SEK", "SGD", "THB", "TRY",
    "USD", "ZAR",
];

// Own list plus the SEPA euro countries.
const WISE_COUNTRIES: &[&str] = &[
    "AR", "AU", "BD", "BR", "BG", "CA", "CL", "CN", "CO", "CR", "CZ", "DK", "EG", "GE", "GH", "HK",
    "HU", "IN", "ID", "IL", "JP", "KE", "MY", "MX", "MA", "NP", "NZ", "NO", "PK", "PH", "PL", "RO",
    "SG", "ZA", "KR", "LK", "SE", "CH", "TZ", "TH", "TR", "UG", "UA", "AE", "GB", "US", "UY", "VN",
    "ZM", "AT", "BE", "CY", "DE", "EE", "FI", "FR", "GR", "IE", "IT", "LV", "LT", "LU", "MC", "MT",
    "NL", "PT", "SK", "SI", "ES", "AD", "SM", "VA",
];
const WISE_CURRENCIES: &[&str] = &[
    "AED", "ARS", "AUD", "BDT", "BGN", "BRL", "BWP", "CAD", "CHF", "CLP", "CNY", "COP", "CRC", "CZK",
    "DKK", "EGP", "EUR", "FJD", "GEL", "GHS", "GBP", "HKD", "HUF", "IDR", "ILS", "INR", "JPY", "KES",
    "KRW", "LKR", "MAD", "MXN", "MYR", "NOK", "NPR", "NZD", "PHP", "PKR", "PLN", "RON", "SEK", "SGD",
    "THB", "TRY", "UAH", "UGX", "USD", "UYU", "VND", "ZAR", "ZMW",
];

// Own list plus the SEPA euro countries that were missing from it.
const UPHOLD_COUNTRIES: &[&str] = &[
    "AD", "AE", "AG", "AI", "AL", "AO", "AR", "AS", "AT", "AU", "AW", "BB", "BD", "BE", "BF", "BG",
    "BH", "BI", "BJ", "BN", "BO", "BR", "BS", "BT", "BW", "BY", "BZ", "CK", "CL", "CR", "CW", "CX",
    "CY", "CZ", "DJ", "DK", "DM", "DO", "DZ", "EE", "ES", "FI", "FJ", "FK", "FM", "FO", "FR", "GA",
    "GB", "GD", "GG", "GH", "GI", "GL", "GM", "GP", "GQ", "GR", "GT", "GU", "GW", "GY", "HK", "HN",
    "HR", "HT", "HU", "IE", "IL", "IM", "IS", "IT", "JE", "JM", "JO", "JP", "KE", "KI", "KM", "KN",
    "KP", "KR", "KW", "KY", "KZ", "LA", "LC", "LI", "LK", "LS", "LT", "LU", "LV", "MA", "MC", "MG",
    "MH", "MK", "ML", "MM", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ",
    "NA", "NC", "NE", "NF", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PE", "PF", "PG", "PH",
    "PL", "PM", "PN", "PR", "PT", "PW", "PY", "QA", "RE", "RO", "RW", "SA", "SB", "SC", "SD", "SE",
    "SG", "SH", "SI", "SJ", "SK", "SM", "SN", "SR", "ST", "SV", "SX", "SY", "SZ", "TC", "TF", "TH",
    "TJ", "TK", "TL", "TM", "TN", "TO", "TR", "TT", "TV", "TW", "TZ", "US", "UY", "UZ", "VA", "VC",
    "VG", "VI", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM",
];
const UPHOLD_CURRENCIES: &[&str] = &[
    "AED", "ARS", "AUD", "BRL", "CAD", "CHF", "CNY", "DKK", "EUR", "GBP", "HKD", "ILS", "INR", "JPY",
    "KES", "MXN", "NOK", "NZD", "PHP", "PLN", "SEK", "SGD", "USD",
];

const AMAZON_COUNTRIES: &[&str] = &[
    "AU", "CA", "FR", "DE", "IT", "NL", "ES", "GB", "IN", "JP", "SA", "SE", "SG", "TR", "US",
];
const AMAZON_CURRENCIES: &[&str] = &[
    "AUD", "CAD", "EUR", "GBP", "INR", "JPY", "SAR", "SEK", "SGD", "TRY", "USD",
];

const MONEY_BEAM_CURRENCIES: &[&str] = &["EUR", "GBP"];

const MONEY_GRAM_COUNTRIES: &[&str] = &[
    "AE", "AR", "AU", "KI", "NR", "TV", "BN", "CA", "CH", "LI", "CZ", "DK", "FO", "GL", "AD", "AT",
    "BE", "CY", "EE", "FI", "FR", "DE", "GR", "IE", "IT", "LV", "LT", "LU", "MT", "MC", "ME", "NL",
    "PT", "SM", "SK", "SI", "ES", "VA", "FJ", "GB", "GG", "IM", "JE", "HK", "HU", "ID", "IL", "IN",
    "JP", "KR", "KW", "LK", "MA", "MG", "MX", "MY", "NO", "NZ", "OM", "PE", "PG", "PH", "PK", "PL",
    "SA", "SB", "SC", "SE", "SG", "TH", "TO", "TR", "TW", "US", "VN", "VU", "WS", "BJ", "BF", "ML",
    "NE", "SN", "TG", "PF", "NC", "WF", "ZA",
];
const MONEY_GRAM_CURRENCIES: &[&str] = &[
    "AED", "ARS", "AUD", "BND", "CAD", "CHF", "CZK", "DKK", "EUR", "FJD", "GBP", "HKD", "HUF", "IDR",
    "ILS", "INR", "JPY", "KRW", "KWD", "LKR", "MAD", "MGA", "MXN", "MYR", "NOK", "NZD", "OMR", "PEN",
    "PGK", "PHP", "PKR", "PLN", "SAR", "SBD", "SCR", "SEK", "SGD", "THB", "TOP", "TRY", "TWD", "USD",
    "VND", "VUV", "WST", "XOF", "XPF", "ZAR",
];

const ADVANCED_CASH_CURRENCIES: &[&str] = &["BRL", "EUR", "GBP", "KZT", "RUB", "UAH", "USD"];
const MONESE_CURRENCIES: &[&str] = &["EUR", "GBP", "RON"];
const PAYSERA_CURRENCIES: &[&str] = &[
    "AUD", "BGN", "BYN", "CAD", "CHF", "CNY", "CZK", "DKK", "EUR", "GBP", "HKD", "HUF", "ILS", "INR",
    "JPY", "KZT", "MXN", "NOK", "NZD", "PHP", "PLN", "RON", "RSD", "RUB", "SEK", "SGD", "THB", "TRY",
    "USD", "ZAR",
];
const VERSE_CURRENCIES: &[&str] = &["DKK", "EUR", "HUF", "PLN", "SEK"];

impl FiatPaymentRail {
    /// All rails in declaration order.
    pub const ALL: [Self; 44] = [
        Self::AchTransfer,
        Self::AdvancedCash,
        Self::AliPay,
        Self::AmazonGiftCard,
        Self::Bizum,
        Self::CashApp,
        Self::CashByMail,
        Self::CashDeposit,
        Self::Custom,
        Self::DomesticWireTransfer,
        Self::F2f,
        Self::FasterPayments,
        Self::HalCash,
        Self::Imps,
        Self::InteracETransfer,
        Self::MercadoPago,
        Self::Monese,
        Self::MoneyBeam,
        Self::MoneyGram,
        Self::NationalBank,
        Self::Neft,
        Self::PayId,
        Self::Paysera,
        Self::PerfectMoney,
        Self::Pin4,
        Self::Pix,
        Self::PromptPay,
        Self::Revolut,
        Self::SameBank,
        Self::Satispay,
        Self::Sbp,
        Self::Sepa,
        Self::SepaInstant,
        Self::Strike,
        Self::Swift,
        Self::Swish,
        Self::Uphold,
        Self::Upi,
        Self::UsPostalMoneyOrder,
        Self::Verse,
        Self::WechatPay,
        Self::Wise,
        Self::WiseUsd,
        Self::Zelle,
    ];

    /// Wire name of the rail.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AchTransfer => "ACH_TRANSFER",
            Self::AdvancedCash => "ADVANCED_CASH",
            Self::AliPay => "ALI_PAY",
            Self::AmazonGiftCard => "AMAZON_GIFT_CARD",
            Self::Bizum => "BIZUM",
            Self::CashApp => "CASH_APP",
            Self::CashByMail => "CASH_BY_MAIL",
            Self::CashDeposit => "CASH_DEPOSIT",
            Self::Custom => "CUSTOM",
            Self::DomesticWireTransfer => "DOMESTIC_WIRE_TRANSFER",
            Self::F2f => "F2F",
            Self::FasterPayments => "FASTER_PAYMENTS",
            Self::HalCash => "HAL_CASH",
            Self::Imps => "IMPS",
            Self::InteracETransfer => "INTERAC_E_TRANSFER",
            Self::MercadoPago => "MERCADO_PAGO",
            Self::Monese => "MONESE",
            Self::MoneyBeam => "MONEY_BEAM",
            Self::MoneyGram => "MONEY_GRAM",
            Self::NationalBank => "NATIONAL_BANK",
            Self::Neft => "NEFT",
            Self::PayId => "PAY_ID",
            Self::Paysera => "PAYSERA",
            Self::PerfectMoney => "PERFECT_MONEY",
            Self::Pin4 => "PIN_4",
            Self::Pix => "PIX",
            Self::PromptPay => "PROMPT_PAY",
            Self::Revolut => "REVOLUT",
            Self::SameBank => "SAME_BANK",
            Self::Satispay => "SATISPAY",
            Self::Sbp => "SBP",
            Self::Sepa => "SEPA",
            Self::SepaInstant => "SEPA_INSTANT",
            Self::Strike => "STRIKE",
            Self::Swift => "SWIFT",
            Self::Swish => "SWISH",
            Self::Uphold => "UPHOLD",
            Self::Upi => "UPI",
            Self::UsPostalMoneyOrder => "US_POSTAL_MONEY_ORDER",
            Self::Verse => "VERSE",
            Self::WechatPay => "WECHAT_PAY",
            Self::Wise => "WISE",
            Self::WiseUsd => "WISE_USD",
            Self::Zelle => "ZELLE",
        }
    }

    /// Payment method id used by the predecessor system.
    ///
    /// Fingerprints of existing accounts were computed with these ids, so they
    /// must never change.
    pub fn legacy_method_id(&self) -> &'static str {
        match self {
            Self::Zelle => "CLEAR_X_CHANGE",
            Self::PayId => "AUSTRALIA_PAYID",
            Self::Wise => "TRANSFERWISE",
            Self::WiseUsd => "TRANSFERWISE_USD",
            other => other.name(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AchTransfer => "ACH Transfer",
            Self::AdvancedCash => "Advanced Cash",
            Self::AliPay => "AliPay",
            Self::AmazonGiftCard => "Amazon eGift Card",
            Self::Bizum => "Bizum",
            Self::CashApp => "Cash App",
            Self::CashByMail => "Cash By Mail",
            Self::CashDeposit => "Cash Deposit",
            Self::Custom => "Custom",
            Self::DomesticWireTransfer => "Domestic Wire Transfer",
            Self::F2f => "Face to face (in person)",
            Self::FasterPayments => "Faster Payments",
            Self::HalCash => "HalCash",
            Self::Imps => "India/IMPS",
            Self::InteracETransfer => "Interac e-Transfer",
            Self::MercadoPago => "MercadoPago",
            Self::Monese => "Monese",
            Self::MoneyBeam => "MoneyBeam (N26)",
            Self::MoneyGram => "MoneyGram",
            Self::NationalBank => "National bank transfer",
            Self::Neft => "India/NEFT",
            Self::PayId => "Australian PayID",
            Self::Paysera => "Paysera",
            Self::PerfectMoney => "Perfect Money",
            Self::Pin4 => "Pin4",
            Self::Pix => "Pix",
            Self::PromptPay => "PromptPay",
            Self::Revolut => "Revolut",
            Self::SameBank => "Transfer with same bank",
            Self::Satispay => "Satispay",
            Self::Sbp => "Faster Payments System (SBP)",
            Self::Sepa => "SEPA",
            Self::SepaInstant => "SEPA Instant Payments",
            Self::Strike => "Strike",
            Self::Swift => "SWIFT International Wire Transfer",
            Self::Swish => "Swish",
            Self::Uphold => "Uphold",
            Self::Upi => "India/UPI",
            Self::UsPostalMoneyOrder => "US Postal Money Order",
            Self::Verse => "Verse",
            Self::WechatPay => "WeChat Pay",
            Self::Wise => "Wise",
            Self::WiseUsd => "Wise-USD",
            Self::Zelle => "Zelle",
        }
    }

    /// Compact name used in generated account names.
    pub fn short_display_name(&self) -> &'static str {
        match self {
            Self::AchTransfer => "ACH",
            Self::AdvancedCash => "AdvCash",
            Self::AmazonGiftCard => "Amazon",
            Self::CashByMail => "CashByMail",
            Self::CashDeposit => "CashDeposit",
            Self::DomesticWireTransfer => "Wire",
            Self::F2f => "F2F",
            Self::FasterPayments => "FPS",
            Self::Imps => "IMPS",
            Self::InteracETransfer => "Interac",
            Self::MoneyBeam => "MoneyBeam",
            Self::NationalBank => "NationalBank",
            Self::Neft => "NEFT",
            Self::PayId => "PayID",
            Self::PerfectMoney => "PerfectMoney",
            Self::SameBank => "SameBank",
            Self::Sbp => "SBP",
            Self::SepaInstant => "SEPA-Inst",
            Self::Swift => "SWIFT",
            Self::Upi => "UPI",
            Self::UsPostalMoneyOrder => "USPMO",
            Self::WiseUsd => "Wise-USD",
            other => other.display_name(),
        }
    }

    pub fn supported_countries(&self) -> Coverage {
        use Coverage::{All, Only};
        match self {
            Self::AchTransfer
            | Self::CashApp
            | Self::DomesticWireTransfer
            | Self::Strike
            | Self::UsPostalMoneyOrder
            | Self::WiseUsd
            | Self::Zelle => Only(US),
            Self::AliPay | Self::WechatPay => Only(&["CN"]),
            Self::AmazonGiftCard => Only(AMAZON_COUNTRIES),
            Self::Bizum | Self::HalCash => Only(&["ES"]),
            Self::FasterPayments => Only(&["GB"]),
            Self::Imps | Self::Neft | Self::Upi => Only(&["IN"]),
            Self::InteracETransfer => Only(&["CA"]),
            Self::MercadoPago => Only(&["AR"]),
            Self::MoneyBeam | Self::Sepa | Self::SepaInstant => Only(SEPA_COUNTRIES),
            Self::MoneyGram => Only(MONEY_GRAM_COUNTRIES),
            Self::PayId => Only(&["AU"]),
            Self::Pin4 => Only(&["PL"]),
            Self::Pix => Only(&["BR"]),
            Self::PromptPay => Only(&["TH"]),
            Self::Revolut => Only(REVOLUT_COUNTRIES),
            Self::Satispay => Only(&["IT"]),
            Self::Sbp => Only(&["RU"]),
            Self::Swish => Only(&["SE"]),
            Self::Uphold => Only(UPHOLD_COUNTRIES),
            Self::Wise => Only(WISE_COUNTRIES),
            Self::AdvancedCash
            | Self::CashByMail
            | Self::CashDeposit
            | Self::Custom
            | Self::F2f
            | Self::Monese
            | Self::NationalBank
            | Self::Paysera
            | Self::PerfectMoney
            | Self::SameBank
            | Self::Swift
            | Self::Verse => All,
        }
    }

    pub fn supported_currencies(&self) -> Coverage {
        use Coverage::{All, Only};
        match self {
            Self::AchTransfer
            | Self::CashApp
            | Self::DomesticWireTransfer
            | Self::PerfectMoney
            | Self::Strike
            | Self::UsPostalMoneyOrder
            | Self::WiseUsd
            | Self::Zelle => Only(USD),
            Self::AdvancedCash => Only(ADVANCED_CASH_CURRENCIES),
            Self::AliPay | Self::WechatPay => Only(&["CNY"]),
            Self::AmazonGiftCard => Only(AMAZON_CURRENCIES),
            Self::Bizum | Self::HalCash | Self::Satispay | Self::Sepa | Self::SepaInstant => {
                Only(EUR)
            }
            Self::FasterPayments => Only(&["GBP"]),
            Self::Imps | Self::Neft | Self::Upi => Only(&["INR"]),
            Self::InteracETransfer => Only(&["CAD"]),
            Self::MercadoPago => Only(&["ARS"]),
            Self::Monese => Only(MONESE_CURRENCIES),
            Self::MoneyBeam => Only(MONEY_BEAM_CURRENCIES),
            Self::MoneyGram => Only(MONEY_GRAM_CURRENCIES),
            Self::PayId => Only(&["AUD"]),
            Self::Paysera => Only(PAYSERA_CURRENCIES),
            Self::Pin4 => Only(&["PLN"]),
            Self::Pix => Only(&["BRL"]),
            Self::PromptPay => Only(&["THB"]),
            Self::Revolut => Only(REVOLUT_CURRENCIES),
            Self::Sbp => Only(&["RUB"]),
            Self::Swish => Only(&["SEK"]),
            Self::Uphold => Only(UPHOLD_CURRENCIES),
            Self::Verse => Only(VERSE_CURRENCIES),
            Self::Wise => Only(WISE_CURRENCIES),
            Self::CashByMail
            | Self::CashDeposit
            | Self::Custom
            | Self::F2f
            | Self::NationalBank
            | Self::SameBank
            | Self::Swift => All,
        }
    }

    pub fn supports_country(&self, country_code: &str) -> bool {
        self.supported_countries()
            .contains(country_code, countries::is_known_country)
    }

    pub fn supports_currency(&self, currency_code: &str) -> bool {
        self.supported_currencies()
            .contains(currency_code, currencies::is_known_currency)
    }

    /// Supported country codes, resolving [`Coverage::All`] against the repository.
    pub fn supported_country_codes(&self) -> Vec<&'static str> {
        match self.supported_countries() {
            Coverage::All => countries::all_country_codes().collect(),
            Coverage::Only(codes) => codes.to_vec(),
        }
    }

    /// Supported currency codes, resolving [`Coverage::All`] against the repository.
    pub fn supported_currency_codes(&self) -> Vec<&'static str> {
        match self.supported_currencies() {
            Coverage::All => currencies::all_currency_codes().collect(),
            Coverage::Only(codes) => codes.to_vec(),
        }
    }

    pub fn chargeback_risk(&self) -> ChargebackRisk {
        match self {
            Self::AdvancedCash => ChargebackRisk::VeryLow,
            Self::AliPay
            | Self::Bizum
            | Self::F2f
            | Self::HalCash
            | Self::PayId
            | Self::PerfectMoney
            | Self::Pin4
            | Self::PromptPay
            | Self::Swish
            | Self::Upi
            | Self::WechatPay => ChargebackRisk::Low,
            Self::MoneyGram | Self::Swift => ChargebackRisk::Medium,
            _ => ChargebackRisk::Moderate,
        }
    }

    /// Default trade limit in USD derived from the chargeback risk.
    pub fn trade_limit_usd(&self) -> u32 {
        match self.chargeback_risk() {
            ChargebackRisk::Low => 10_000,
            ChargebackRisk::Medium => 5_000,
            ChargebackRisk::VeryLow | ChargebackRisk::Moderate => 2_500,
        }
    }

    /// Maximum time a trade on this rail may take.
    pub fn trade_duration(&self) -> Duration {
        match self {
            Self::AchTransfer => Duration::days(5),
            Self::CashByMail => Duration::days(8),
            Self::DomesticWireTransfer => Duration::days(3),
            Self::Sepa => Duration::days(6),
            Self::AmazonGiftCard
            | Self::Bizum
            | Self::CashApp
            | Self::CashDeposit
            | Self::Custom
            | Self::F2f
            | Self::MoneyGram
            | Self::NationalBank
            | Self::PayId
            | Self::Strike
            | Self::Swift
            | Self::Upi
            | Self::UsPostalMoneyOrder
            | Self::Wise
            | Self::WiseUsd
            | Self::Zelle => Duration::days(4),
            _ => Duration::hours(24),
        }
    }

    /// Relative popularity, higher is more common. Unranked rails score 0.
    pub fn popularity_score(&self) -> u8 {
        match self {
            Self::Sepa | Self::SepaInstant => 10,
            Self::Zelle => 9,
            Self::Pix => 8,
            Self::NationalBank => 7,
            Self::Revolut | Self::CashByMail => 6,
            Self::AchTransfer | Self::Strike => 5,
            Self::InteracETransfer | Self::Wise | Self::WiseUsd => 4,
            Self::Uphold
            | Self::F2f
            | Self::UsPostalMoneyOrder
            | Self::DomesticWireTransfer
            | Self::PayId
            | Self::FasterPayments => 3,
            Self::AmazonGiftCard
            | Self::MoneyBeam
            | Self::Swish
            | Self::Swift
            | Self::Bizum
            | Self::PromptPay
            | Self::MoneyGram
            | Self::CashDeposit
            | Self::SameBank
            | Self::HalCash => 2,
            Self::Pin4 | Self::Upi => 1,
            _ => 0,
        }
    }

    /// Kept only so existing accounts still decode.
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::CashApp)
    }
}

impl fmt::Display for FiatPaymentRail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FiatPaymentRail {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|rail| rail.name() == s)
            .ok_or_else(|| AccountError::unresolvable("payment rail", s))
    }
}

/// Rails that can settle a trade in the given currency.
///
/// National bank transfers are offered for every currency except the euro,
/// where SEPA covers the same ground.
pub fn payment_rails_for_currency(currency_code: &str) -> Vec<FiatPaymentRail> {
    FiatPaymentRail::ALL
        .iter()
        .copied()
        .filter(|rail| match rail {
            FiatPaymentRail::NationalBank => currency_code != "EUR",
            _ => rail.supports_currency(currency_code),
        })
        .collect()
}

/// Countries where national bank transfers are offered.
pub fn national_bank_country_codes() -> Vec<&'static str> {
    countries::all_country_codes()
        .filter(|code| !SEPA_EURO_COUNTRY_CODES.contains(code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for rail in FiatPaymentRail::ALL {
            assert_eq!(rail.name().parse::<FiatPaymentRail>().unwrap(), rail);
        }
        assert!("NOPE".parse::<FiatPaymentRail>().is_err());
    }

    #[test]
    fn test_serde_matches_name() {
        for rail in FiatPaymentRail::ALL {
            let json = serde_json::to_string(&rail).unwrap();
            assert_eq!(json, format!("\"{}\"", rail.name()));
        }
    }

    #[test]
    fn test_legacy_method_ids() {
        assert_eq!(FiatPaymentRail::Zelle.legacy_method_id(), "CLEAR_X_CHANGE");
        assert_eq!(FiatPaymentRail::PayId.legacy_method_id(), "AUSTRALIA_PAYID");
        assert_eq!(FiatPaymentRail::Wise.legacy_method_id(), "TRANSFERWISE");
        assert_eq!(FiatPaymentRail::WiseUsd.legacy_method_id(), "TRANSFERWISE_USD");
        assert_eq!(FiatPaymentRail::Sepa.legacy_method_id(), "SEPA");
    }

    #[test]
    fn test_coverage_codes_are_known() {
        for rail in FiatPaymentRail::ALL {
            for code in rail.supported_country_codes() {
                assert!(countries::is_known_country(code), "{} {}", rail, code);
            }
            let currencies = rail.supported_currency_codes();
            assert!(!currencies.is_empty());
            for code in currencies {
                assert!(currencies::is_known_currency(code), "{} {}", rail, code);
            }
        }
    }

    #[test]
    fn test_sepa_countries_match_repository() {
        assert_eq!(SEPA_COUNTRIES.to_vec(), countries::all_sepa_country_codes());
    }

    #[test]
    fn test_supports() {
        assert!(FiatPaymentRail::Sepa.supports_country("CH"));
        assert!(!FiatPaymentRail::Sepa.supports_country("US"));
        assert!(FiatPaymentRail::Sepa.supports_currency("EUR"));
        assert!(!FiatPaymentRail::Sepa.supports_currency("CHF"));
        assert!(FiatPaymentRail::NationalBank.supports_country("AR"));
        assert!(!FiatPaymentRail::NationalBank.supports_country("ZZ"));
        assert!(FiatPaymentRail::MoneyGram.supports_currency("XOF"));
    }

    #[test]
    fn test_rails_for_currency() {
        let eur = payment_rails_for_currency("EUR");
        assert!(eur.contains(&FiatPaymentRail::Sepa));
        assert!(!eur.contains(&FiatPaymentRail::NationalBank));

        let ars = payment_rails_for_currency("ARS");
        assert!(ars.contains(&FiatPaymentRail::NationalBank));
        assert!(ars.contains(&FiatPaymentRail::MercadoPago));
        assert!(!ars.contains(&FiatPaymentRail::Zelle));
    }

    #[test]
    fn test_popularity_and_limits() {
        assert_eq!(FiatPaymentRail::Sepa.popularity_score(), 10);
        assert_eq!(FiatPaymentRail::Verse.popularity_score(), 0);
        assert_eq!(FiatPaymentRail::Swish.trade_limit_usd(), 10_000);
        assert_eq!(FiatPaymentRail::Swift.trade_limit_usd(), 5_000);
        assert_eq!(FiatPaymentRail::Sepa.trade_duration(), Duration::days(6));
        assert!(!national_bank_country_codes().contains(&"DE"));
    }
}
