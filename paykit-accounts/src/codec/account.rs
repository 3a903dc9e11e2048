//! Account <-> protobuf conversion.
//!
//! The account oneof carries no data of its own. It names the account
//! variant, which must agree with the variant of the embedded payload.

use super::proto;
use super::proto::account::Message as AccountMessage;
use super::proto::bank_account::Message as BankMessage;
use super::proto::country_based_account::Message as CountryMessage;
use crate::account::{
    Account, AccountOrigin, BankAccount, CountryBasedAccount, KeyAlgorithm, KeyPair, PaymentAccount,
    SigningIdentity,
};
use crate::catalog::FiatPaymentRail;
use crate::payload::AccountPayload;
use crate::{AccountError, Result};

const MARKER: proto::AccountMarker = proto::AccountMarker {};

impl From<&PaymentAccount> for proto::Account {
    fn from(account: &PaymentAccount) -> Self {
        let message = match account {
            PaymentAccount::Zelle(_) => AccountMessage::ZelleAccount(MARKER),
            PaymentAccount::UsPostalMoneyOrder(_) => AccountMessage::UsPostalMoneyOrderAccount(MARKER),
            PaymentAccount::PayId(_) => AccountMessage::PayIdAccount(MARKER),
            PaymentAccount::InteracETransfer(_) => AccountMessage::InteracETransferAccount(MARKER),
            PaymentAccount::HalCash(_) => AccountMessage::HalCashAccount(MARKER),
            PaymentAccount::FasterPayments(_) => AccountMessage::FasterPaymentsAccount(MARKER),
            PaymentAccount::Sbp(_) => AccountMessage::SbpAccount(MARKER),
            PaymentAccount::CashByMail(_) => AccountMessage::CashByMailAccount(MARKER),
            PaymentAccount::Revolut(_) => AccountMessage::RevolutAccount(MARKER),
            PaymentAccount::Uphold(_) => AccountMessage::UpholdAccount(MARKER),
            PaymentAccount::UserDefinedFiat(_) => AccountMessage::UserDefinedFiatAccount(MARKER),
            PaymentAccount::CountryBased(a) => AccountMessage::CountryBasedAccount(a.into()),
        };
        Self {
            id: account.id().to_string(),
            creation_date: account.creation_date(),
            account_name: account.account_name().to_string(),
            account_payload: Some(proto::AccountPayload::from(&account.payload())),
            signing: account.signing().map(proto::SigningIdentity::from),
            message: Some(message),
        }
    }
}

impl From<&CountryBasedAccount> for proto::CountryBasedAccount {
    fn from(account: &CountryBasedAccount) -> Self {
        let message = match account {
            CountryBasedAccount::Bank(a) => CountryMessage::BankAccount(a.into()),
            CountryBasedAccount::AmazonGiftCard(_) => CountryMessage::AmazonGiftCardAccount(MARKER),
            CountryBasedAccount::Swish(_) => CountryMessage::SwishAccount(MARKER),
            CountryBasedAccount::Sepa(_) => CountryMessage::SepaAccount(MARKER),
            CountryBasedAccount::SepaInstant(_) => CountryMessage::SepaInstantAccount(MARKER),
            CountryBasedAccount::Bizum(_) => CountryMessage::BizumAccount(MARKER),
            CountryBasedAccount::F2f(_) => CountryMessage::F2fAccount(MARKER),
            CountryBasedAccount::Pix(_) => CountryMessage::PixAccount(MARKER),
            CountryBasedAccount::PromptPay(_) => CountryMessage::PromptPayAccount(MARKER),
            CountryBasedAccount::Strike(_) => CountryMessage::StrikeAccount(MARKER),
            CountryBasedAccount::Upi(_) => CountryMessage::UpiAccount(MARKER),
            CountryBasedAccount::Wise(_) => CountryMessage::WiseAccount(MARKER),
            CountryBasedAccount::WiseUsd(_) => CountryMessage::WiseUsdAccount(MARKER),
            CountryBasedAccount::MoneyGram(_) => CountryMessage::MoneyGramAccount(MARKER),
            CountryBasedAccount::MoneyBeam(_) => CountryMessage::MoneyBeamAccount(MARKER),
            CountryBasedAccount::Pin4(_) => CountryMessage::Pin4Account(MARKER),
            CountryBasedAccount::Swift(_) => CountryMessage::SwiftAccount(MARKER),
        };
        Self {
            message: Some(message),
        }
    }
}

impl From<&BankAccount> for proto::BankAccount {
    fn from(account: &BankAccount) -> Self {
        let message = match account {
            BankAccount::AchTransfer(_) => BankMessage::AchTransferAccount(MARKER),
            BankAccount::NationalBank(_) => BankMessage::NationalBankAccount(MARKER),
            BankAccount::CashDeposit(_) => BankMessage::CashDepositAccount(MARKER),
            BankAccount::SameBank(_) => BankMessage::SameBankAccount(MARKER),
            BankAccount::DomesticWireTransfer(_) => BankMessage::DomesticWireTransferAccount(MARKER),
        };
        Self {
            message: Some(message),
        }
    }
}

impl From<&SigningIdentity> for proto::SigningIdentity {
    fn from(signing: &SigningIdentity) -> Self {
        Self {
            public_key: signing.key_pair.public_key.clone(),
            private_key: signing.key_pair.private_key.clone(),
            key_algorithm: signing.key_algorithm.as_str().to_string(),
            account_origin: signing.account_origin.as_str().to_string(),
        }
    }
}

impl TryFrom<proto::SigningIdentity> for SigningIdentity {
    type Error = AccountError;

    fn try_from(message: proto::SigningIdentity) -> Result<Self> {
        let key_algorithm = KeyAlgorithm::from_name(&message.key_algorithm)
            .ok_or_else(|| AccountError::Decode(format!("unknown key algorithm {:?}", message.key_algorithm)))?;
        let account_origin = AccountOrigin::from_name(&message.account_origin)
            .ok_or_else(|| AccountError::Decode(format!("unknown account origin {:?}", message.account_origin)))?;
        Ok(Self::new(
            KeyPair::new(message.public_key, message.private_key),
            key_algorithm,
            account_origin,
        ))
    }
}

// Rail named by the account oneof, resolved through every nesting level.
fn declared_rail(message: &AccountMessage) -> Result<FiatPaymentRail> {
    Ok(match message {
        AccountMessage::ZelleAccount(_) => FiatPaymentRail::Zelle,
        AccountMessage::UsPostalMoneyOrderAccount(_) => FiatPaymentRail::UsPostalMoneyOrder,
        AccountMessage::PayIdAccount(_) => FiatPaymentRail::PayId,
        AccountMessage::InteracETransferAccount(_) => FiatPaymentRail::InteracETransfer,
        AccountMessage::HalCashAccount(_) => FiatPaymentRail::HalCash,
        AccountMessage::FasterPaymentsAccount(_) => FiatPaymentRail::FasterPayments,
        AccountMessage::SbpAccount(_) => FiatPaymentRail::Sbp,
        AccountMessage::CashByMailAccount(_) => FiatPaymentRail::CashByMail,
        AccountMessage::RevolutAccount(_) => FiatPaymentRail::Revolut,
        AccountMessage::UpholdAccount(_) => FiatPaymentRail::Uphold,
        AccountMessage::UserDefinedFiatAccount(_) => FiatPaymentRail::Custom,
        AccountMessage::CountryBasedAccount(m) => {
            let inner = m
                .message
                .as_ref()
                .ok_or_else(|| AccountError::unresolvable("country_based_account", "no variant set"))?;
            country_based_rail(inner)?
        }
    })
}

fn country_based_rail(message: &CountryMessage) -> Result<FiatPaymentRail> {
    Ok(match message {
        CountryMessage::BankAccount(m) => {
            let inner = m
                .message
                .as_ref()
                .ok_or_else(|| AccountError::unresolvable("bank_account", "no variant set"))?;
            match inner {
                BankMessage::AchTransferAccount(_) => FiatPaymentRail::AchTransfer,
                BankMessage::NationalBankAccount(_) => FiatPaymentRail::NationalBank,
                BankMessage::CashDepositAccount(_) => FiatPaymentRail::CashDeposit,
                BankMessage::SameBankAccount(_) => FiatPaymentRail::SameBank,
                BankMessage::DomesticWireTransferAccount(_) => FiatPaymentRail::DomesticWireTransfer,
            }
        }
        CountryMessage::AmazonGiftCardAccount(_) => FiatPaymentRail::AmazonGiftCard,
        CountryMessage::SwishAccount(_) => FiatPaymentRail::Swish,
        CountryMessage::SepaAccount(_) => FiatPaymentRail::Sepa,
        CountryMessage::SepaInstantAccount(_) => FiatPaymentRail::SepaInstant,
        CountryMessage::BizumAccount(_) => FiatPaymentRail::Bizum,
        CountryMessage::F2fAccount(_) => FiatPaymentRail::F2f,
        CountryMessage::PixAccount(_) => FiatPaymentRail::Pix,
        CountryMessage::PromptPayAccount(_) => FiatPaymentRail::PromptPay,
        CountryMessage::StrikeAccount(_) => FiatPaymentRail::Strike,
        CountryMessage::UpiAccount(_) => FiatPaymentRail::Upi,
        CountryMessage::WiseAccount(_) => FiatPaymentRail::Wise,
        CountryMessage::WiseUsdAccount(_) => FiatPaymentRail::WiseUsd,
        CountryMessage::MoneyGramAccount(_) => FiatPaymentRail::MoneyGram,
        CountryMessage::MoneyBeamAccount(_) => FiatPaymentRail::MoneyBeam,
        CountryMessage::Pin4Account(_) => FiatPaymentRail::Pin4,
        CountryMessage::SwiftAccount(_) => FiatPaymentRail::Swift,
    })
}

impl TryFrom<proto::Account> for PaymentAccount {
    type Error = AccountError;

    fn try_from(message: proto::Account) -> Result<Self> {
        let proto::Account {
            id,
            creation_date,
            account_name,
            account_payload,
            signing,
            message,
        } = message;
        let message = message.ok_or_else(|| AccountError::unresolvable("account", "no variant set"))?;
        let declared = declared_rail(&message)?;
        let payload = account_payload.ok_or_else(|| AccountError::missing_field("Account", "account_payload"))?;
        let payload = AccountPayload::try_from(payload)?;

        // Each rail has exactly one payload type, so equal rails mean equal
        // variants at every level.
        if payload.payment_rail() != declared {
            return Err(AccountError::unresolvable(
                "account",
                format!("{} account holds a {} payload", declared, payload.payment_rail()),
            ));
        }

        let mut record = Account::new(id, creation_date, account_name, ());
        if let Some(signing) = signing {
            record = record.with_signing(SigningIdentity::try_from(signing)?);
        }
        Ok(PaymentAccount::from_record(record, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestFixtures;

    #[test]
    fn test_every_fixture_account_converts_back() {
        for account in TestFixtures::all_accounts() {
            let message = proto::Account::from(&account);
            assert_eq!(PaymentAccount::try_from(message).unwrap(), account);
        }
    }

    #[test]
    fn test_marker_payload_mismatch() {
        let account: PaymentAccount = Account::new("a", 1, "n", TestFixtures::zelle()).into();
        let mut message = proto::Account::from(&account);
        message.message = Some(AccountMessage::RevolutAccount(MARKER));
        let err = PaymentAccount::try_from(message).unwrap_err();
        assert!(matches!(err, AccountError::UnresolvableVariant { level: "account", .. }));
    }

    #[test]
    fn test_nested_marker_mismatch() {
        let account: PaymentAccount = Account::new("a", 1, "n", TestFixtures::sepa()).into();
        let mut message = proto::Account::from(&account);
        message.message = Some(AccountMessage::CountryBasedAccount(proto::CountryBasedAccount {
            message: Some(CountryMessage::SepaInstantAccount(MARKER)),
        }));
        assert!(matches!(
            PaymentAccount::try_from(message),
            Err(AccountError::UnresolvableVariant { level: "account", .. })
        ));
    }

    #[test]
    fn test_missing_nested_marker() {
        let account: PaymentAccount = Account::new("a", 1, "n", TestFixtures::national_bank_ar()).into();
        let mut message = proto::Account::from(&account);
        message.message = Some(AccountMessage::CountryBasedAccount(proto::CountryBasedAccount {
            message: Some(CountryMessage::BankAccount(proto::BankAccount { message: None })),
        }));
        assert!(matches!(
            PaymentAccount::try_from(message),
            Err(AccountError::UnresolvableVariant { level: "bank_account", .. })
        ));
    }

    #[test]
    fn test_missing_payload() {
        let account: PaymentAccount = Account::new("a", 1, "n", TestFixtures::zelle()).into();
        let mut message = proto::Account::from(&account);
        message.account_payload = None;
        assert!(matches!(
            PaymentAccount::try_from(message),
            Err(AccountError::MissingRequiredField {
                variant: "Account",
                field: "account_payload"
            })
        ));
    }

    #[test]
    fn test_unknown_key_algorithm() {
        let message = proto::SigningIdentity {
            public_key: vec![1],
            private_key: vec![],
            key_algorithm: "RSA".into(),
            account_origin: "CREATED".into(),
        };
        assert!(matches!(SigningIdentity::try_from(message), Err(AccountError::Decode(_))));
    }
}
