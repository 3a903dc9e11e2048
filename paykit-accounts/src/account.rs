//! Accounts: a payload plus the user-facing record around it.
//!
//! [`Account<P>`] is generic over the concrete payload type, so an account
//! can never hold a payload of the wrong variant. [`PaymentAccount`] and its
//! nested enums mirror the payload hierarchy level by level.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::FiatPaymentRail;
use crate::payload::*;

/// Key pair bytes as produced by the external key capability.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub public_key: Vec<u8>,
    pub private_key: Vec<u8>,
}

impl KeyPair {
    pub fn new(public_key: Vec<u8>, private_key: Vec<u8>) -> Self {
        Self {
            public_key,
            private_key,
        }
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(&self.public_key))
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Signature scheme of the account key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyAlgorithm {
    Ec,
    Dsa,
    Ed25519,
}

impl KeyAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ec => "EC",
            Self::Dsa => "DSA",
            Self::Ed25519 => "ED25519",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "EC" => Some(Self::Ec),
            "DSA" => Some(Self::Dsa),
            "ED25519" => Some(Self::Ed25519),
            _ => None,
        }
    }
}

/// Where an account came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountOrigin {
    /// Imported from the predecessor system, with its original key.
    LegacyImport,
    /// Created in this application.
    Created,
}

impl AccountOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LegacyImport => "LEGACY_IMPORT",
            Self::Created => "CREATED",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "LEGACY_IMPORT" => Some(Self::LegacyImport),
            "CREATED" => Some(Self::Created),
            _ => None,
        }
    }
}

/// Key material used to sign age witnesses and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningIdentity {
    pub key_pair: KeyPair,
    pub key_algorithm: KeyAlgorithm,
    pub account_origin: AccountOrigin,
}

impl SigningIdentity {
    pub fn new(key_pair: KeyPair, key_algorithm: KeyAlgorithm, account_origin: AccountOrigin) -> Self {
        Self {
            key_pair,
            key_algorithm,
            account_origin,
        }
    }

    pub fn public_key(&self) -> &[u8] {
        &self.key_pair.public_key
    }
}

/// A payment account holding a payload of type `P`.
///
/// Construction does not re-validate the payload: every payload that exists
/// has already passed its checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account<P> {
    id: String,
    creation_date: i64,
    account_name: String,
    payload: P,
    signing: Option<SigningIdentity>,
}

impl<P> Account<P> {
    pub fn new(
        id: impl Into<String>,
        creation_date: i64,
        account_name: impl Into<String>,
        payload: P,
    ) -> Self {
        Self {
            id: id.into(),
            creation_date,
            account_name: account_name.into(),
            payload,
            signing: None,
        }
    }

    /// Attach the key material of the account.
    pub fn with_signing(mut self, signing: SigningIdentity) -> Self {
        self.signing = Some(signing);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Creation time in unix milliseconds.
    pub fn creation_date(&self) -> i64 {
        self.creation_date
    }

    /// Creation time, `None` if out of chrono's range.
    pub fn creation_date_time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.creation_date).single()
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn signing(&self) -> Option<&SigningIdentity> {
        self.signing.as_ref()
    }

    pub fn into_payload(self) -> P {
        self.payload
    }

    // Move the record fields onto another payload.
    pub(crate) fn with_payload<Q>(self, payload: Q) -> Account<Q> {
        Account {
            id: self.id,
            creation_date: self.creation_date,
            account_name: self.account_name,
            payload,
            signing: self.signing,
        }
    }
}

impl<P: PayloadVariant> Account<P> {
    /// New account with a random id, the current time and the payload's
    /// default name.
    pub fn fresh(payload: P) -> Self {
        let name = payload.default_account_name();
        Self::new(
            uuid::Uuid::new_v4().to_string(),
            Utc::now().timestamp_millis(),
            name,
            payload,
        )
    }

    pub fn payment_rail(&self) -> FiatPaymentRail {
        P::RAIL
    }
}

macro_rules! dispatch_bank_account {
    ($value:expr, $a:ident => $body:expr) => {
        match $value {
            BankAccount::AchTransfer($a) => $body,
            BankAccount::NationalBank($a) => $body,
            BankAccount::CashDeposit($a) => $body,
            BankAccount::SameBank($a) => $body,
            BankAccount::DomesticWireTransfer($a) => $body,
        }
    };
}

macro_rules! dispatch_country_based_account {
    ($value:expr, $a:ident => $body:expr) => {
        match $value {
            CountryBasedAccount::Bank($a) => $body,
            CountryBasedAccount::AmazonGiftCard($a) => $body,
            CountryBasedAccount::Swish($a) => $body,
            CountryBasedAccount::Sepa($a) => $body,
            CountryBasedAccount::SepaInstant($a) => $body,
            CountryBasedAccount::Bizum($a) => $body,
            CountryBasedAccount::F2f($a) => $body,
            CountryBasedAccount::Pix($a) => $body,
            CountryBasedAccount::PromptPay($a) => $body,
            CountryBasedAccount::Strike($a) => $body,
            CountryBasedAccount::Upi($a) => $body,
            CountryBasedAccount::Wise($a) => $body,
            CountryBasedAccount::WiseUsd($a) => $body,
            CountryBasedAccount::MoneyGram($a) => $body,
            CountryBasedAccount::MoneyBeam($a) => $body,
            CountryBasedAccount::Pin4($a) => $body,
            CountryBasedAccount::Swift($a) => $body,
        }
    };
}

macro_rules! dispatch_account {
    ($value:expr, $a:ident => $body:expr) => {
        match $value {
            PaymentAccount::Zelle($a) => $body,
            PaymentAccount::UsPostalMoneyOrder($a) => $body,
            PaymentAccount::PayId($a) => $body,
            PaymentAccount::InteracETransfer($a) => $body,
            PaymentAccount::HalCash($a) => $body,
            PaymentAccount::FasterPayments($a) => $body,
            PaymentAccount::Sbp($a) => $body,
            PaymentAccount::CashByMail($a) => $body,
            PaymentAccount::Revolut($a) => $body,
            PaymentAccount::Uphold($a) => $body,
            PaymentAccount::UserDefinedFiat($a) => $body,
            PaymentAccount::CountryBased($a) => $body,
        }
    };
}

// Shared record accessors. Leaf arms resolve to `Account<P>` methods, nested
// arms to the same methods on the inner enum.
macro_rules! account_enum_methods {
    ($dispatch:ident) => {
        pub fn id(&self) -> &str {
            $dispatch!(self, a => a.id())
        }

        pub fn creation_date(&self) -> i64 {
            $dispatch!(self, a => a.creation_date())
        }

        pub fn account_name(&self) -> &str {
            $dispatch!(self, a => a.account_name())
        }

        pub fn signing(&self) -> Option<&SigningIdentity> {
            $dispatch!(self, a => a.signing())
        }

        pub fn payment_rail(&self) -> FiatPaymentRail {
            $dispatch!(self, a => a.payment_rail())
        }
    };
}

/// Accounts of bank transfer rails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankAccount {
    AchTransfer(Account<AchTransferAccountPayload>),
    NationalBank(Account<NationalBankAccountPayload>),
    CashDeposit(Account<CashDepositAccountPayload>),
    SameBank(Account<SameBankAccountPayload>),
    DomesticWireTransfer(Account<DomesticWireTransferAccountPayload>),
}

impl BankAccount {
    account_enum_methods!(dispatch_bank_account);

    /// The payload as a member of the payload hierarchy.
    pub fn payload(&self) -> BankAccountPayload {
        match self {
            Self::AchTransfer(a) => BankAccountPayload::AchTransfer(a.payload().clone()),
            Self::NationalBank(a) => BankAccountPayload::NationalBank(a.payload().clone()),
            Self::CashDeposit(a) => BankAccountPayload::CashDeposit(a.payload().clone()),
            Self::SameBank(a) => BankAccountPayload::SameBank(a.payload().clone()),
            Self::DomesticWireTransfer(a) => {
                BankAccountPayload::DomesticWireTransfer(a.payload().clone())
            }
        }
    }
}

/// Accounts of rails bound to a declared country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryBasedAccount {
    Bank(BankAccount),
    AmazonGiftCard(Account<AmazonGiftCardAccountPayload>),
    Swish(Account<SwishAccountPayload>),
    Sepa(Account<SepaAccountPayload>),
    SepaInstant(Account<SepaInstantAccountPayload>),
    Bizum(Account<BizumAccountPayload>),
    F2f(Account<F2fAccountPayload>),
    Pix(Account<PixAccountPayload>),
    PromptPay(Account<PromptPayAccountPayload>),
    Strike(Account<StrikeAccountPayload>),
    Upi(Account<UpiAccountPayload>),
    Wise(Account<WiseAccountPayload>),
    WiseUsd(Account<WiseUsdAccountPayload>),
    MoneyGram(Account<MoneyGramAccountPayload>),
    MoneyBeam(Account<MoneyBeamAccountPayload>),
    Pin4(Account<Pin4AccountPayload>),
    Swift(Account<SwiftAccountPayload>),
}

impl CountryBasedAccount {
    account_enum_methods!(dispatch_country_based_account);

    pub fn payload(&self) -> CountryBasedAccountPayload {
        use CountryBasedAccountPayload as P;
        match self {
            Self::Bank(a) => P::Bank(a.payload()),
            Self::AmazonGiftCard(a) => P::AmazonGiftCard(a.payload().clone()),
            Self::Swish(a) => P::Swish(a.payload().clone()),
            Self::Sepa(a) => P::Sepa(a.payload().clone()),
            Self::SepaInstant(a) => P::SepaInstant(a.payload().clone()),
            Self::Bizum(a) => P::Bizum(a.payload().clone()),
            Self::F2f(a) => P::F2f(a.payload().clone()),
            Self::Pix(a) => P::Pix(a.payload().clone()),
            Self::PromptPay(a) => P::PromptPay(a.payload().clone()),
            Self::Strike(a) => P::Strike(a.payload().clone()),
            Self::Upi(a) => P::Upi(a.payload().clone()),
            Self::Wise(a) => P::Wise(a.payload().clone()),
            Self::WiseUsd(a) => P::WiseUsd(a.payload().clone()),
            Self::MoneyGram(a) => P::MoneyGram(a.payload().clone()),
            Self::MoneyBeam(a) => P::MoneyBeam(a.payload().clone()),
            Self::Pin4(a) => P::Pin4(a.payload().clone()),
            Self::Swift(a) => P::Swift(a.payload().clone()),
        }
    }
}

/// Any payment account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentAccount {
    Zelle(Account<ZelleAccountPayload>),
    UsPostalMoneyOrder(Account<UsPostalMoneyOrderAccountPayload>),
    PayId(Account<PayIdAccountPayload>),
    InteracETransfer(Account<InteracETransferAccountPayload>),
    HalCash(Account<HalCashAccountPayload>),
    FasterPayments(Account<FasterPaymentsAccountPayload>),
    Sbp(Account<SbpAccountPayload>),
    CashByMail(Account<CashByMailAccountPayload>),
    Revolut(Account<RevolutAccountPayload>),
    Uphold(Account<UpholdAccountPayload>),
    UserDefinedFiat(Account<UserDefinedFiatAccountPayload>),
    CountryBased(CountryBasedAccount),
}

impl PaymentAccount {
    account_enum_methods!(dispatch_account);

    pub fn payload(&self) -> AccountPayload {
        use AccountPayload as P;
        match self {
            Self::Zelle(a) => P::Zelle(a.payload().clone()),
            Self::UsPostalMoneyOrder(a) => P::UsPostalMoneyOrder(a.payload().clone()),
            Self::PayId(a) => P::PayId(a.payload().clone()),
            Self::InteracETransfer(a) => P::InteracETransfer(a.payload().clone()),
            Self::HalCash(a) => P::HalCash(a.payload().clone()),
            Self::FasterPayments(a) => P::FasterPayments(a.payload().clone()),
            Self::Sbp(a) => P::Sbp(a.payload().clone()),
            Self::CashByMail(a) => P::CashByMail(a.payload().clone()),
            Self::Revolut(a) => P::Revolut(a.payload().clone()),
            Self::Uphold(a) => P::Uphold(a.payload().clone()),
            Self::UserDefinedFiat(a) => P::UserDefinedFiat(a.payload().clone()),
            Self::CountryBased(a) => P::CountryBased(a.payload()),
        }
    }

    /// Wrap a payload of any variant into the matching account.
    pub fn from_payload(
        id: impl Into<String>,
        creation_date: i64,
        account_name: impl Into<String>,
        payload: AccountPayload,
        signing: Option<SigningIdentity>,
    ) -> Self {
        let mut record = Account::new(id, creation_date, account_name, ());
        record.signing = signing;
        Self::from_record(record, payload)
    }

    pub(crate) fn from_record(record: Account<()>, payload: AccountPayload) -> Self {
        use AccountPayload as P;
        match payload {
            P::Zelle(p) => Self::Zelle(record.with_payload(p)),
            P::UsPostalMoneyOrder(p) => Self::UsPostalMoneyOrder(record.with_payload(p)),
            P::PayId(p) => Self::PayId(record.with_payload(p)),
            P::InteracETransfer(p) => Self::InteracETransfer(record.with_payload(p)),
            P::HalCash(p) => Self::HalCash(record.with_payload(p)),
            P::FasterPayments(p) => Self::FasterPayments(record.with_payload(p)),
            P::Sbp(p) => Self::Sbp(record.with_payload(p)),
            P::CashByMail(p) => Self::CashByMail(record.with_payload(p)),
            P::Revolut(p) => Self::Revolut(record.with_payload(p)),
            P::Uphold(p) => Self::Uphold(record.with_payload(p)),
            P::UserDefinedFiat(p) => Self::UserDefinedFiat(record.with_payload(p)),
            P::CountryBased(p) => Self::CountryBased(CountryBasedAccount::from_record(record, p)),
        }
    }
}

impl CountryBasedAccount {
    pub(crate) fn from_record(record: Account<()>, payload: CountryBasedAccountPayload) -> Self {
        use CountryBasedAccountPayload as P;
        match payload {
            P::Bank(p) => Self::Bank(BankAccount::from_record(record, p)),
            P::AmazonGiftCard(p) => Self::AmazonGiftCard(record.with_payload(p)),
            P::Swish(p) => Self::Swish(record.with_payload(p)),
            P::Sepa(p) => Self::Sepa(record.with_payload(p)),
            P::SepaInstant(p) => Self::SepaInstant(record.with_payload(p)),
            P::Bizum(p) => Self::Bizum(record.with_payload(p)),
            P::F2f(p) => Self::F2f(record.with_payload(p)),
            P::Pix(p) => Self::Pix(record.with_payload(p)),
            P::PromptPay(p) => Self::PromptPay(record.with_payload(p)),
            P::Strike(p) => Self::Strike(record.with_payload(p)),
            P::Upi(p) => Self::Upi(record.with_payload(p)),
            P::Wise(p) => Self::Wise(record.with_payload(p)),
            P::WiseUsd(p) => Self::WiseUsd(record.with_payload(p)),
            P::MoneyGram(p) => Self::MoneyGram(record.with_payload(p)),
            P::MoneyBeam(p) => Self::MoneyBeam(record.with_payload(p)),
            P::Pin4(p) => Self::Pin4(record.with_payload(p)),
            P::Swift(p) => Self::Swift(record.with_payload(p)),
        }
    }
}

impl BankAccount {
    pub(crate) fn from_record(record: Account<()>, payload: BankAccountPayload) -> Self {
        use BankAccountPayload as P;
        match payload {
            P::AchTransfer(p) => Self::AchTransfer(record.with_payload(p)),
            P::NationalBank(p) => Self::NationalBank(record.with_payload(p)),
            P::CashDeposit(p) => Self::CashDeposit(record.with_payload(p)),
            P::SameBank(p) => Self::SameBank(record.with_payload(p)),
            P::DomesticWireTransfer(p) => Self::DomesticWireTransfer(record.with_payload(p)),
        }
    }
}

macro_rules! account_from_leaf {
    (@wrap $a:ident, CountryBased :: $variant:ident) => {
        PaymentAccount::CountryBased(CountryBasedAccount::$variant($a))
    };
    (@wrap $a:ident, Bank :: $variant:ident) => {
        PaymentAccount::CountryBased(CountryBasedAccount::Bank(BankAccount::$variant($a)))
    };
    (@wrap $a:ident, $variant:ident) => {
        PaymentAccount::$variant($a)
    };
    ($($leaf:ty => $($path:ident)::+;)*) => {
        $(
            impl From<Account<$leaf>> for PaymentAccount {
                fn from(account: Account<$leaf>) -> Self {
                    account_from_leaf!(@wrap account, $($path)::+)
                }
            }
        )*
    };
}

account_from_leaf! {
    ZelleAccountPayload => Zelle;
    UsPostalMoneyOrderAccountPayload => UsPostalMoneyOrder;
    PayIdAccountPayload => PayId;
    InteracETransferAccountPayload => InteracETransfer;
    HalCashAccountPayload => HalCash;
    FasterPaymentsAccountPayload => FasterPayments;
    SbpAccountPayload => Sbp;
    CashByMailAccountPayload => CashByMail;
    RevolutAccountPayload => Revolut;
    UpholdAccountPayload => Uphold;
    UserDefinedFiatAccountPayload => UserDefinedFiat;
    AmazonGiftCardAccountPayload => CountryBased::AmazonGiftCard;
    SwishAccountPayload => CountryBased::Swish;
    SepaAccountPayload => CountryBased::Sepa;
    SepaInstantAccountPayload => CountryBased::SepaInstant;
    BizumAccountPayload => CountryBased::Bizum;
    F2fAccountPayload => CountryBased::F2f;
    PixAccountPayload => CountryBased::Pix;
    PromptPayAccountPayload => CountryBased::PromptPay;
    StrikeAccountPayload => CountryBased::Strike;
    UpiAccountPayload => CountryBased::Upi;
    WiseAccountPayload => CountryBased::Wise;
    WiseUsdAccountPayload => CountryBased::WiseUsd;
    MoneyGramAccountPayload => CountryBased::MoneyGram;
    MoneyBeamAccountPayload => CountryBased::MoneyBeam;
    Pin4AccountPayload => CountryBased::Pin4;
    SwiftAccountPayload => CountryBased::Swift;
    AchTransferAccountPayload => Bank::AchTransfer;
    NationalBankAccountPayload => Bank::NationalBank;
    CashDepositAccountPayload => Bank::CashDeposit;
    SameBankAccountPayload => Bank::SameBank;
    DomesticWireTransferAccountPayload => Bank::DomesticWireTransfer;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestFixtures;

    #[test]
    fn test_fresh_account_uses_default_name() {
        let account = Account::fresh(TestFixtures::zelle());
        assert_eq!(account.account_name(), "Zelle-alic");
        assert!(uuid::Uuid::parse_str(account.id()).is_ok());
        assert!(account.creation_date_time().is_some());
        assert_eq!(account.payment_rail(), FiatPaymentRail::Zelle);
    }

    #[test]
    fn test_leaf_account_lands_in_nested_arm() {
        let account = Account::new("acc-1", 1_700_000_000_000, "Ar bank", TestFixtures::national_bank_ar());
        let account: PaymentAccount = account.into();
        assert!(matches!(
            account,
            PaymentAccount::CountryBased(CountryBasedAccount::Bank(BankAccount::NationalBank(_)))
        ));
        assert_eq!(account.id(), "acc-1");
        assert_eq!(account.payment_rail(), FiatPaymentRail::NationalBank);
        assert_eq!(
            account.payload(),
            AccountPayload::from(TestFixtures::national_bank_ar())
        );
    }

    #[test]
    fn test_from_payload_preserves_variant() {
        for payload in TestFixtures::all_payloads() {
            let account =
                PaymentAccount::from_payload("acc", 1, "name", payload.clone(), None);
            assert_eq!(account.payload(), payload);
            assert_eq!(account.payment_rail(), payload.payment_rail());
        }
    }

    #[test]
    fn test_key_pair_debug_redacts_private_key() {
        let pair = KeyPair::new(vec![0xab], vec![0xcd, 0xef]);
        let debug = format!("{:?}", pair);
        assert!(debug.contains("ab"));
        assert!(!debug.contains("cdef"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_public_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PaymentAccount>();
        assert_send_sync::<AccountPayload>();
        assert_send_sync::<crate::AccountError>();
        assert_send_sync::<crate::codec::AccountCodec>();
    }

    #[test]
    fn test_enum_names_round_trip() {
        for alg in [KeyAlgorithm::Ec, KeyAlgorithm::Dsa, KeyAlgorithm::Ed25519] {
            assert_eq!(KeyAlgorithm::from_name(alg.as_str()), Some(alg));
        }
        for origin in [AccountOrigin::LegacyImport, AccountOrigin::Created] {
            assert_eq!(AccountOrigin::from_name(origin.as_str()), Some(origin));
        }
        assert_eq!(KeyAlgorithm::from_name("RSA"), None);
    }
}
