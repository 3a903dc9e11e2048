//! Account payloads: the data that tells a counterparty how to pay.
//!
//! Payloads form a closed three-level hierarchy. [`AccountPayload`] holds the
//! flat variants plus [`CountryBasedAccountPayload`], which in turn holds the
//! country-bound variants plus [`BankAccountPayload`].
//!
//! Every concrete payload is validated in its constructor, so an instance
//! that exists has passed [`PayloadVariant::verify`]. Fields are private and
//! payloads are immutable.
//!
//! # Example
//!
//! ```
//! use paykit_accounts::payload::{PayloadVariant, SepaAccountPayload};
//!
//! let payload = SepaAccountPayload::new(
//!     "account-1",
//!     "Alice",
//!     "DE89370400440532013000",
//!     "DEUTDEFF",
//!     "DE",
//!     vec!["DE".to_string()],
//! )?;
//! assert_eq!(payload.salt().len(), 32);
//! # Ok::<(), paykit_accounts::AccountError>(())
//! ```

pub mod bank;
pub mod country_based;
pub mod flat;

pub use bank::{
    AchTransferAccountPayload, BankAccountType, BankDetails, CashDepositAccountPayload,
    DomesticWireTransferAccountPayload, NationalBankAccountPayload, SameBankAccountPayload,
};
pub use country_based::{
    AmazonGiftCardAccountPayload, BizumAccountPayload, F2fAccountPayload, MoneyBeamAccountPayload,
    MoneyGramAccountPayload, Pin4AccountPayload, PixAccountPayload, PromptPayAccountPayload,
    SepaAccountPayload, SepaInstantAccountPayload, StrikeAccountPayload, SwiftAccountPayload,
    SwiftDetails, SwishAccountPayload, UpiAccountPayload, WiseAccountPayload, WiseUsdAccountPayload,
};
pub use flat::{
    CashByMailAccountPayload, FasterPaymentsAccountPayload, HalCashAccountPayload,
    InteracETransferAccountPayload, PayIdAccountPayload, RevolutAccountPayload, SbpAccountPayload,
    UpholdAccountPayload, UserDefinedFiatAccountPayload, UsPostalMoneyOrderAccountPayload,
    ZelleAccountPayload,
};

use rand::RngCore;

use crate::catalog::FiatPaymentRail;
use crate::errors::{Constraint, ValidationError};
use crate::validation::{self, validate_currency_code, validate_id};
use crate::Result;

/// Length of freshly generated salts.
pub const SALT_LEN: usize = 32;

/// Generate a random salt for a new payload.
pub fn generate_salt() -> Vec<u8> {
    let mut salt = vec![0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}

/// Fields shared by every payload.
#[derive(Clone, PartialEq, Eq)]
pub struct PayloadCore {
    id: String,
    salt: Vec<u8>,
}

impl PayloadCore {
    pub fn new(id: impl Into<String>, salt: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            salt,
        }
    }

    /// Core with a freshly generated salt.
    pub fn fresh(id: impl Into<String>) -> Self {
        Self::new(id, generate_salt())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }
}

impl std::fmt::Debug for PayloadCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayloadCore")
            .field("id", &self.id)
            .field("salt", &hex::encode(&self.salt))
            .finish()
    }
}

/// Which level of the hierarchy a variant lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadFamily {
    Flat,
    CountryBased,
    Bank,
}

/// How a payload declares the currency it is paid in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySelection<'a> {
    /// Implied by the rail or the country.
    Fixed(&'a str),
    /// One currency picked by the user.
    Selected(&'a str),
    /// Several currencies picked by the user.
    SelectedMany(&'a [String]),
}

impl<'a> CurrencySelection<'a> {
    /// Selected currency codes in declaration order.
    pub fn codes(&self) -> Vec<&'a str> {
        match *self {
            Self::Fixed(code) | Self::Selected(code) => vec![code],
            Self::SelectedMany(codes) => codes.iter().map(String::as_str).collect(),
        }
    }
}

/// Behaviour shared by every concrete payload type.
///
/// Implementors provide field access and their own validation rules; the
/// parent-level checks, fingerprint and display helpers are provided.
pub trait PayloadVariant {
    /// Rail this payload type is used for.
    const RAIL: FiatPaymentRail;
    /// Hierarchy level of this payload type.
    const FAMILY: PayloadFamily;

    fn core(&self) -> &PayloadCore;

    /// Declared country, for country-based and bank payloads.
    fn country_code(&self) -> Option<&str> {
        None
    }

    /// Shared bank fields, for bank payloads.
    fn bank_details(&self) -> Option<&BankDetails> {
        None
    }

    fn currency_selection(&self) -> Option<CurrencySelection<'_>>;

    /// Rules specific to this payload type.
    fn verify_fields(&self) -> Result<()>;

    /// Value of a named field as used by the fingerprint rules.
    fn fingerprint_field(&self, field: &str) -> Option<&str>;

    /// `(label, value)` pairs for the account summary, optional fields only
    /// when present.
    fn display_fields(&self) -> Vec<(&'static str, String)>;

    /// Field whose first characters name the account by default.
    fn account_name_hint(&self) -> &str;

    fn id(&self) -> &str {
        self.core().id()
    }

    fn salt(&self) -> &[u8] {
        self.core().salt()
    }

    fn payment_rail(&self) -> FiatPaymentRail {
        Self::RAIL
    }

    /// Run every validation rule: core, country, currency and bank checks
    /// first, then the rules of the concrete type.
    fn verify(&self) -> Result<()> {
        verify_core(self.core())?;
        if let Some(country_code) = self.country_code() {
            verify_country(Self::RAIL, country_code)?;
        }
        if let Some(selection) = self.currency_selection() {
            verify_currency(Self::RAIL, selection)?;
        }
        if let Some(bank) = self.bank_details() {
            bank.verify()?;
        }
        self.verify_fields()
    }

    /// Legacy-compatible identity bytes of the payload.
    fn fingerprint(&self) -> Vec<u8>
    where
        Self: Sized,
    {
        crate::fingerprint::derive(self)
    }

    /// Input to the age witness hash. Same bytes as the fingerprint.
    fn age_witness_input_data(&self) -> Vec<u8>
    where
        Self: Sized,
    {
        self.fingerprint()
    }

    /// Multi-line `Label: value` summary.
    fn account_data_display_string(&self) -> String {
        self.display_fields()
            .into_iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `<short rail name>-<first 4 chars of the identifying field>`.
    fn default_account_name(&self) -> String {
        let hint: String = self.account_name_hint().chars().take(4).collect();
        format!("{}-{}", Self::RAIL.short_display_name(), hint)
    }
}

// Constructors hand out only verified payloads.
pub(crate) fn verified<P: PayloadVariant>(payload: P) -> Result<P> {
    payload.verify()?;
    Ok(payload)
}

pub(crate) fn verify_core(core: &PayloadCore) -> Result<()> {
    validate_id("id", core.id())?;
    if core.salt().is_empty() {
        return Err(ValidationError::new("salt", Constraint::Empty).into());
    }
    if core.salt().len() > SALT_LEN {
        return Err(ValidationError::new(
            "salt",
            Constraint::TooLong {
                max: SALT_LEN,
                actual: core.salt().len(),
            },
        )
        .into());
    }
    Ok(())
}

pub(crate) fn verify_country(rail: FiatPaymentRail, country_code: &str) -> Result<()> {
    validation::validate_country_code("country_code", country_code)?;
    if !rail.supports_country(country_code) {
        return Err(ValidationError::new(
            "country_code",
            Constraint::NotAllowed(country_code.to_string()),
        )
        .into());
    }
    Ok(())
}

pub(crate) fn verify_currency(rail: FiatPaymentRail, selection: CurrencySelection<'_>) -> Result<()> {
    let field = match selection {
        CurrencySelection::Fixed(_) | CurrencySelection::Selected(_) => "selected_currency_code",
        CurrencySelection::SelectedMany(_) => "selected_currency_codes",
    };
    let codes = selection.codes();
    if codes.is_empty() {
        return Err(ValidationError::new(field, Constraint::Empty).into());
    }
    for code in codes {
        validate_currency_code(field, code)?;
        if !rail.supports_currency(code) {
            return Err(
                ValidationError::new(field, Constraint::NotAllowed(code.to_string())).into(),
            );
        }
    }
    Ok(())
}

// Closed dispatch over every variant of one level. The body is expanded once
// per arm with `$p` bound to the inner value.
macro_rules! dispatch_bank {
    ($value:expr, $p:ident => $body:expr) => {
        match $value {
            BankAccountPayload::AchTransfer($p) => $body,
            BankAccountPayload::NationalBank($p) => $body,
            BankAccountPayload::CashDeposit($p) => $body,
            BankAccountPayload::SameBank($p) => $body,
            BankAccountPayload::DomesticWireTransfer($p) => $body,
        }
    };
}

macro_rules! dispatch_country_based {
    ($value:expr, $p:ident => $body:expr) => {
        match $value {
            CountryBasedAccountPayload::Bank($p) => $body,
            CountryBasedAccountPayload::AmazonGiftCard($p) => $body,
            CountryBasedAccountPayload::Swish($p) => $body,
            CountryBasedAccountPayload::Sepa($p) => $body,
            CountryBasedAccountPayload::SepaInstant($p) => $body,
            CountryBasedAccountPayload::Bizum($p) => $body,
            CountryBasedAccountPayload::F2f($p) => $body,
            CountryBasedAccountPayload::Pix($p) => $body,
            CountryBasedAccountPayload::PromptPay($p) => $body,
            CountryBasedAccountPayload::Strike($p) => $body,
            CountryBasedAccountPayload::Upi($p) => $body,
            CountryBasedAccountPayload::Wise($p) => $body,
            CountryBasedAccountPayload::WiseUsd($p) => $body,
            CountryBasedAccountPayload::MoneyGram($p) => $body,
            CountryBasedAccountPayload::MoneyBeam($p) => $body,
            CountryBasedAccountPayload::Pin4($p) => $body,
            CountryBasedAccountPayload::Swift($p) => $body,
        }
    };
}

macro_rules! dispatch_payload {
    ($value:expr, $p:ident => $body:expr) => {
        match $value {
            AccountPayload::Zelle($p) => $body,
            AccountPayload::UsPostalMoneyOrder($p) => $body,
            AccountPayload::PayId($p) => $body,
            AccountPayload::InteracETransfer($p) => $body,
            AccountPayload::HalCash($p) => $body,
            AccountPayload::FasterPayments($p) => $body,
            AccountPayload::Sbp($p) => $body,
            AccountPayload::CashByMail($p) => $body,
            AccountPayload::Revolut($p) => $body,
            AccountPayload::Uphold($p) => $body,
            AccountPayload::UserDefinedFiat($p) => $body,
            AccountPayload::CountryBased($p) => $body,
        }
    };
}

pub(crate) use {dispatch_bank, dispatch_country_based, dispatch_payload};

// Delegating methods shared by the three enums.
macro_rules! payload_enum_methods {
    ($dispatch:ident) => {
        pub fn id(&self) -> &str {
            $dispatch!(self, p => p.id())
        }

        pub fn salt(&self) -> &[u8] {
            $dispatch!(self, p => p.salt())
        }

        pub fn payment_rail(&self) -> FiatPaymentRail {
            $dispatch!(self, p => p.payment_rail())
        }

        pub fn verify(&self) -> Result<()> {
            $dispatch!(self, p => p.verify())
        }

        pub fn fingerprint(&self) -> Vec<u8> {
            $dispatch!(self, p => p.fingerprint())
        }

        pub fn age_witness_input_data(&self) -> Vec<u8> {
            $dispatch!(self, p => p.age_witness_input_data())
        }

        pub fn account_data_display_string(&self) -> String {
            $dispatch!(self, p => p.account_data_display_string())
        }

        pub fn default_account_name(&self) -> String {
            $dispatch!(self, p => p.default_account_name())
        }

        pub fn currency_selection(&self) -> Option<CurrencySelection<'_>> {
            $dispatch!(self, p => p.currency_selection())
        }

        pub fn country_code(&self) -> Option<&str> {
            $dispatch!(self, p => p.country_code())
        }
    };
}

/// Payloads of bank transfer rails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankAccountPayload {
    AchTransfer(AchTransferAccountPayload),
    NationalBank(NationalBankAccountPayload),
    CashDeposit(CashDepositAccountPayload),
    SameBank(SameBankAccountPayload),
    DomesticWireTransfer(DomesticWireTransferAccountPayload),
}

impl BankAccountPayload {
    payload_enum_methods!(dispatch_bank);

    pub fn bank_details(&self) -> &BankDetails {
        dispatch_bank!(self, p => p.bank())
    }

    pub fn family(&self) -> PayloadFamily {
        PayloadFamily::Bank
    }
}

/// Payloads bound to a declared country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryBasedAccountPayload {
    Bank(BankAccountPayload),
    AmazonGiftCard(AmazonGiftCardAccountPayload),
    Swish(SwishAccountPayload),
    Sepa(SepaAccountPayload),
    SepaInstant(SepaInstantAccountPayload),
    Bizum(BizumAccountPayload),
    F2f(F2fAccountPayload),
    Pix(PixAccountPayload),
    PromptPay(PromptPayAccountPayload),
    Strike(StrikeAccountPayload),
    Upi(UpiAccountPayload),
    Wise(WiseAccountPayload),
    WiseUsd(WiseUsdAccountPayload),
    MoneyGram(MoneyGramAccountPayload),
    MoneyBeam(MoneyBeamAccountPayload),
    Pin4(Pin4AccountPayload),
    Swift(SwiftAccountPayload),
}

impl CountryBasedAccountPayload {
    payload_enum_methods!(dispatch_country_based);

    pub fn family(&self) -> PayloadFamily {
        match self {
            Self::Bank(_) => PayloadFamily::Bank,
            _ => PayloadFamily::CountryBased,
        }
    }
}

/// Any account payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountPayload {
    Zelle(ZelleAccountPayload),
    UsPostalMoneyOrder(UsPostalMoneyOrderAccountPayload),
    PayId(PayIdAccountPayload),
    InteracETransfer(InteracETransferAccountPayload),
    HalCash(HalCashAccountPayload),
    FasterPayments(FasterPaymentsAccountPayload),
    Sbp(SbpAccountPayload),
    CashByMail(CashByMailAccountPayload),
    Revolut(RevolutAccountPayload),
    Uphold(UpholdAccountPayload),
    UserDefinedFiat(UserDefinedFiatAccountPayload),
    CountryBased(CountryBasedAccountPayload),
}

impl AccountPayload {
    payload_enum_methods!(dispatch_payload);

    pub fn family(&self) -> PayloadFamily {
        match self {
            Self::CountryBased(p) => p.family(),
            _ => PayloadFamily::Flat,
        }
    }
}

macro_rules! impl_from_leaf {
    ($($leaf:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$leaf> for AccountPayload {
                fn from(payload: $leaf) -> Self {
                    Self::$variant(payload)
                }
            }
        )*
    };
}

macro_rules! impl_from_country_based_leaf {
    ($($leaf:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$leaf> for AccountPayload {
                fn from(payload: $leaf) -> Self {
                    Self::CountryBased(CountryBasedAccountPayload::$variant(payload))
                }
            }
        )*
    };
}

macro_rules! impl_from_bank_leaf {
    ($($leaf:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$leaf> for AccountPayload {
                fn from(payload: $leaf) -> Self {
                    Self::CountryBased(CountryBasedAccountPayload::Bank(
                        BankAccountPayload::$variant(payload),
                    ))
                }
            }
        )*
    };
}

impl_from_leaf! {
    ZelleAccountPayload => Zelle,
    UsPostalMoneyOrderAccountPayload => UsPostalMoneyOrder,
    PayIdAccountPayload => PayId,
    InteracETransferAccountPayload => InteracETransfer,
    HalCashAccountPayload => HalCash,
    FasterPaymentsAccountPayload => FasterPayments,
    SbpAccountPayload => Sbp,
    CashByMailAccountPayload => CashByMail,
    RevolutAccountPayload => Revolut,
    UpholdAccountPayload => Uphold,
    UserDefinedFiatAccountPayload => UserDefinedFiat,
}

impl_from_country_based_leaf! {
    AmazonGiftCardAccountPayload => AmazonGiftCard,
    SwishAccountPayload => Swish,
    SepaAccountPayload => Sepa,
    SepaInstantAccountPayload => SepaInstant,
    BizumAccountPayload => Bizum,
    F2fAccountPayload => F2f,
    PixAccountPayload => Pix,
    PromptPayAccountPayload => PromptPay,
    StrikeAccountPayload => Strike,
    UpiAccountPayload => Upi,
    WiseAccountPayload => Wise,
    WiseUsdAccountPayload => WiseUsd,
    MoneyGramAccountPayload => MoneyGram,
    MoneyBeamAccountPayload => MoneyBeam,
    Pin4AccountPayload => Pin4,
    SwiftAccountPayload => Swift,
}

impl_from_bank_leaf! {
    AchTransferAccountPayload => AchTransfer,
    NationalBankAccountPayload => NationalBank,
    CashDepositAccountPayload => CashDeposit,
    SameBankAccountPayload => SameBank,
    DomesticWireTransferAccountPayload => DomesticWireTransfer,
}

impl From<CountryBasedAccountPayload> for AccountPayload {
    fn from(payload: CountryBasedAccountPayload) -> Self {
        Self::CountryBased(payload)
    }
}

impl From<BankAccountPayload> for AccountPayload {
    fn from(payload: BankAccountPayload) -> Self {
        Self::CountryBased(CountryBasedAccountPayload::Bank(payload))
    }
}

// Read-only accessors for payload fields.
macro_rules! field_accessors {
    ($ty:ident { $($kind:ident $field:ident),* $(,)? }) => {
        impl $ty {
            $( field_accessors!(@$kind $field); )*
        }
    };
    (@str $field:ident) => {
        pub fn $field(&self) -> &str {
            &self.$field
        }
    };
    (@opt $field:ident) => {
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }
    };
    (@list $field:ident) => {
        pub fn $field(&self) -> &[String] {
            &self.$field
        }
    };
}

pub(crate) use field_accessors;
