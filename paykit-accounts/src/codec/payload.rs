//! Payload <-> protobuf conversion.
//!
//! Encoding is infallible. Decoding rebuilds every payload through its
//! constructor, so a decoded payload has passed the same checks as a new one.

use super::proto;
use super::proto::account_payload::Message as FlatMessage;
use super::proto::bank_account_payload::Message as BankMessage;
use super::proto::country_based_account_payload::Message as CountryMessage;
use crate::payload::*;
use crate::validation::validate_equals;
use crate::{AccountError, Result};

impl From<&AccountPayload> for proto::AccountPayload {
    fn from(payload: &AccountPayload) -> Self {
        let message = match payload {
            AccountPayload::Zelle(p) => FlatMessage::ZelleAccountPayload(proto::ZelleAccountPayload {
                holder_name: p.holder_name().to_string(),
                email_or_mobile_nr: p.email_or_mobile_nr().to_string(),
            }),
            AccountPayload::UsPostalMoneyOrder(p) => {
                FlatMessage::UsPostalMoneyOrderAccountPayload(proto::UsPostalMoneyOrderAccountPayload {
                    holder_name: p.holder_name().to_string(),
                    postal_address: p.postal_address().to_string(),
                })
            }
            AccountPayload::PayId(p) => FlatMessage::PayIdAccountPayload(proto::PayIdAccountPayload {
                holder_name: p.holder_name().to_string(),
                pay_id: p.pay_id().to_string(),
            }),
            AccountPayload::InteracETransfer(p) => {
                FlatMessage::InteracETransferAccountPayload(proto::InteracETransferAccountPayload {
                    holder_name: p.holder_name().to_string(),
                    email: p.email().to_string(),
                    question: p.question().to_string(),
                    answer: p.answer().to_string(),
                })
            }
            AccountPayload::HalCash(p) => FlatMessage::HalCashAccountPayload(proto::HalCashAccountPayload {
                mobile_nr: p.mobile_nr().to_string(),
            }),
            AccountPayload::FasterPayments(p) => {
                FlatMessage::FasterPaymentsAccountPayload(proto::FasterPaymentsAccountPayload {
                    holder_name: p.holder_name().to_string(),
                    sort_code: p.sort_code().to_string(),
                    account_nr: p.account_nr().to_string(),
                })
            }
            AccountPayload::Sbp(p) => FlatMessage::SbpAccountPayload(proto::SbpAccountPayload {
                holder_name: p.holder_name().to_string(),
                mobile_number: p.mobile_number().to_string(),
                bank_name: p.bank_name().to_string(),
            }),
            AccountPayload::CashByMail(p) => {
                FlatMessage::CashByMailAccountPayload(proto::CashByMailAccountPayload {
                    postal_address: p.postal_address().to_string(),
                    contact: p.contact().to_string(),
                    extra_info: p.extra_info().map(str::to_string),
                })
            }
            AccountPayload::Revolut(p) => FlatMessage::RevolutAccountPayload(proto::RevolutAccountPayload {
                user_name: p.user_name().to_string(),
                selected_currency_codes: p.selected_currency_codes().to_vec(),
            }),
            AccountPayload::Uphold(p) => FlatMessage::UpholdAccountPayload(proto::UpholdAccountPayload {
                selected_currency_codes: p.selected_currency_codes().to_vec(),
                holder_name: p.holder_name().to_string(),
                account_id: p.account_id().to_string(),
            }),
            AccountPayload::UserDefinedFiat(p) => {
                FlatMessage::UserDefinedFiatAccountPayload(proto::UserDefinedFiatAccountPayload {
                    account_data: p.account_data().to_string(),
                })
            }
            AccountPayload::CountryBased(p) => FlatMessage::CountryBasedAccountPayload(p.into()),
        };
        Self {
            id: payload.id().to_string(),
            salt: payload.salt().to_vec(),
            message: Some(message),
        }
    }
}

impl From<&CountryBasedAccountPayload> for proto::CountryBasedAccountPayload {
    fn from(payload: &CountryBasedAccountPayload) -> Self {
        use CountryBasedAccountPayload as P;
        let message = match payload {
            P::Bank(p) => CountryMessage::BankAccountPayload(p.into()),
            P::AmazonGiftCard(p) => CountryMessage::AmazonGiftCardAccountPayload(proto::AmazonGiftCardAccountPayload {
                email_or_mobile_nr: p.email_or_mobile_nr().to_string(),
            }),
            P::Swish(p) => CountryMessage::SwishAccountPayload(proto::SwishAccountPayload {
                holder_name: p.holder_name().to_string(),
                mobile_nr: p.mobile_nr().to_string(),
            }),
            P::Sepa(p) => CountryMessage::SepaAccountPayload(proto::SepaAccountPayload {
                holder_name: p.holder_name().to_string(),
                iban: p.iban().to_string(),
                bic: p.bic().to_string(),
                accepted_country_codes: p.accepted_country_codes().to_vec(),
            }),
            P::SepaInstant(p) => CountryMessage::SepaInstantAccountPayload(proto::SepaInstantAccountPayload {
                holder_name: p.holder_name().to_string(),
                iban: p.iban().to_string(),
                bic: p.bic().to_string(),
                accepted_country_codes: p.accepted_country_codes().to_vec(),
            }),
            P::Bizum(p) => CountryMessage::BizumAccountPayload(proto::BizumAccountPayload {
                mobile_nr: p.mobile_nr().to_string(),
            }),
            P::F2f(p) => CountryMessage::F2fAccountPayload(proto::F2fAccountPayload {
                selected_currency_code: p.selected_currency_code().to_string(),
                city: p.city().to_string(),
                contact: p.contact().to_string(),
                extra_info: p.extra_info().map(str::to_string),
            }),
            P::Pix(p) => CountryMessage::PixAccountPayload(proto::PixAccountPayload {
                holder_name: p.holder_name().to_string(),
                pix_key: p.pix_key().to_string(),
            }),
            P::PromptPay(p) => CountryMessage::PromptPayAccountPayload(proto::PromptPayAccountPayload {
                prompt_pay_id: p.prompt_pay_id().to_string(),
            }),
            P::Strike(p) => CountryMessage::StrikeAccountPayload(proto::StrikeAccountPayload {
                holder_name: p.holder_name().to_string(),
            }),
            P::Upi(p) => CountryMessage::UpiAccountPayload(proto::UpiAccountPayload {
                virtual_payment_address: p.virtual_payment_address().to_string(),
            }),
            P::Wise(p) => CountryMessage::WiseAccountPayload(proto::WiseAccountPayload {
                selected_currency_codes: p.selected_currency_codes().to_vec(),
                holder_name: p.holder_name().to_string(),
                email: p.email().to_string(),
            }),
            P::WiseUsd(p) => CountryMessage::WiseUsdAccountPayload(proto::WiseUsdAccountPayload {
                holder_name: p.holder_name().to_string(),
                email: p.email().to_string(),
                beneficiary_address: p.beneficiary_address().to_string(),
            }),
            P::MoneyGram(p) => CountryMessage::MoneyGramAccountPayload(proto::MoneyGramAccountPayload {
                selected_currency_codes: p.selected_currency_codes().to_vec(),
                holder_name: p.holder_name().to_string(),
                email: p.email().to_string(),
                state: p.state().map(str::to_string),
            }),
            P::MoneyBeam(p) => CountryMessage::MoneyBeamAccountPayload(proto::MoneyBeamAccountPayload {
                selected_currency_code: p.selected_currency_code().to_string(),
                holder_name: p.holder_name().to_string(),
                account_id: p.account_id().to_string(),
            }),
            P::Pin4(p) => CountryMessage::Pin4AccountPayload(proto::Pin4AccountPayload {
                mobile_nr: p.mobile_nr().to_string(),
            }),
            P::Swift(p) => CountryMessage::SwiftAccountPayload(swift_to_proto(p.details())),
        };
        Self {
            country_code: payload.country_code().unwrap_or_default().to_string(),
            message: Some(message),
        }
    }
}

fn swift_to_proto(d: &SwiftDetails) -> proto::SwiftAccountPayload {
    proto::SwiftAccountPayload {
        selected_currency_code: d.selected_currency_code.clone(),
        beneficiary_name: d.beneficiary_name.clone(),
        beneficiary_account_nr: d.beneficiary_account_nr.clone(),
        beneficiary_phone: d.beneficiary_phone.clone(),
        beneficiary_address: d.beneficiary_address.clone(),
        bank_swift_code: d.bank_swift_code.clone(),
        bank_name: d.bank_name.clone(),
        bank_branch: d.bank_branch.clone(),
        bank_address: d.bank_address.clone(),
        intermediary_bank_country_code: d.intermediary_bank_country_code.clone(),
        intermediary_bank_swift_code: d.intermediary_bank_swift_code.clone(),
        intermediary_bank_name: d.intermediary_bank_name.clone(),
        intermediary_bank_branch: d.intermediary_bank_branch.clone(),
        intermediary_bank_address: d.intermediary_bank_address.clone(),
        additional_instructions: d.additional_instructions.clone(),
    }
}

fn swift_from_proto(m: proto::SwiftAccountPayload) -> SwiftDetails {
    SwiftDetails {
        selected_currency_code: m.selected_currency_code,
        beneficiary_name: m.beneficiary_name,
        beneficiary_account_nr: m.beneficiary_account_nr,
        beneficiary_phone: m.beneficiary_phone,
        beneficiary_address: m.beneficiary_address,
        bank_swift_code: m.bank_swift_code,
        bank_name: m.bank_name,
        bank_branch: m.bank_branch,
        bank_address: m.bank_address,
        intermediary_bank_country_code: m.intermediary_bank_country_code,
        intermediary_bank_swift_code: m.intermediary_bank_swift_code,
        intermediary_bank_name: m.intermediary_bank_name,
        intermediary_bank_branch: m.intermediary_bank_branch,
        intermediary_bank_address: m.intermediary_bank_address,
        additional_instructions: m.additional_instructions,
    }
}

impl From<&BankAccountPayload> for proto::BankAccountPayload {
    fn from(payload: &BankAccountPayload) -> Self {
        let bank = payload.bank_details();
        let message = match payload {
            BankAccountPayload::AchTransfer(p) => {
                BankMessage::AchTransferAccountPayload(proto::AchTransferAccountPayload {
                    holder_address: p.holder_address().map(str::to_string),
                })
            }
            BankAccountPayload::NationalBank(_) => {
                BankMessage::NationalBankAccountPayload(proto::NationalBankAccountPayload {})
            }
            BankAccountPayload::CashDeposit(p) => {
                BankMessage::CashDepositAccountPayload(proto::CashDepositAccountPayload {
                    requirements: p.requirements().map(str::to_string),
                })
            }
            BankAccountPayload::SameBank(_) => {
                BankMessage::SameBankAccountPayload(proto::SameBankAccountPayload {})
            }
            BankAccountPayload::DomesticWireTransfer(p) => {
                BankMessage::DomesticWireTransferAccountPayload(proto::DomesticWireTransferAccountPayload {
                    holder_address: p.holder_address().map(str::to_string),
                })
            }
        };
        Self {
            holder_name: bank.holder_name.clone(),
            holder_id: bank.holder_id.clone(),
            bank_name: bank.bank_name.clone(),
            bank_id: bank.bank_id.clone(),
            branch_id: bank.branch_id.clone(),
            account_nr: bank.account_nr.clone(),
            bank_account_type: bank.bank_account_type.map(|t| t.as_str().to_string()),
            national_account_id: bank.national_account_id.clone(),
            selected_currency_code: bank.selected_currency_code.clone(),
            message: Some(message),
        }
    }
}

impl TryFrom<proto::AccountPayload> for AccountPayload {
    type Error = AccountError;

    fn try_from(message: proto::AccountPayload) -> Result<Self> {
        let proto::AccountPayload { id, salt, message } = message;
        let message = message.ok_or_else(|| AccountError::unresolvable("payload", "no variant set"))?;
        Ok(match message {
            FlatMessage::ZelleAccountPayload(m) => {
                ZelleAccountPayload::with_salt(id, salt, m.holder_name, m.email_or_mobile_nr)?.into()
            }
            FlatMessage::UsPostalMoneyOrderAccountPayload(m) => {
                UsPostalMoneyOrderAccountPayload::with_salt(id, salt, m.holder_name, m.postal_address)?.into()
            }
            FlatMessage::PayIdAccountPayload(m) => {
                PayIdAccountPayload::with_salt(id, salt, m.holder_name, m.pay_id)?.into()
            }
            FlatMessage::InteracETransferAccountPayload(m) => InteracETransferAccountPayload::with_salt(
                id,
                salt,
                m.holder_name,
                m.email,
                m.question,
                m.answer,
            )?
            .into(),
            FlatMessage::HalCashAccountPayload(m) => HalCashAccountPayload::with_salt(id, salt, m.mobile_nr)?.into(),
            FlatMessage::FasterPaymentsAccountPayload(m) => {
                FasterPaymentsAccountPayload::with_salt(id, salt, m.holder_name, m.sort_code, m.account_nr)?.into()
            }
            FlatMessage::SbpAccountPayload(m) => {
                SbpAccountPayload::with_salt(id, salt, m.holder_name, m.mobile_number, m.bank_name)?.into()
            }
            FlatMessage::CashByMailAccountPayload(m) => {
                CashByMailAccountPayload::with_salt(id, salt, m.postal_address, m.contact, m.extra_info)?.into()
            }
            FlatMessage::RevolutAccountPayload(m) => {
                RevolutAccountPayload::with_salt(id, salt, m.user_name, m.selected_currency_codes)?.into()
            }
            FlatMessage::UpholdAccountPayload(m) => {
                UpholdAccountPayload::with_salt(id, salt, m.selected_currency_codes, m.holder_name, m.account_id)?
                    .into()
            }
            FlatMessage::UserDefinedFiatAccountPayload(m) => {
                UserDefinedFiatAccountPayload::with_salt(id, salt, m.account_data)?.into()
            }
            FlatMessage::CountryBasedAccountPayload(m) => {
                AccountPayload::CountryBased(country_based_from_proto(id, salt, m)?)
            }
        })
    }
}

// The wire country must be the one the rebuilt payload reports. Catches a
// fixed-country rail arriving under another country.
fn check_country<P: PayloadVariant>(wire_country: &str, payload: P) -> Result<P> {
    validate_equals("country_code", wire_country, payload.country_code().unwrap_or_default())?;
    Ok(payload)
}

fn country_based_from_proto(
    id: String,
    salt: Vec<u8>,
    message: proto::CountryBasedAccountPayload,
) -> Result<CountryBasedAccountPayload> {
    use CountryBasedAccountPayload as P;
    let proto::CountryBasedAccountPayload { country_code, message } = message;
    let message = message.ok_or_else(|| AccountError::unresolvable("country_based_payload", "no variant set"))?;
    let cc = country_code.as_str();
    Ok(match message {
        CountryMessage::BankAccountPayload(m) => P::Bank(bank_from_proto(id, salt, country_code.clone(), m)?),
        CountryMessage::AmazonGiftCardAccountPayload(m) => P::AmazonGiftCard(check_country(
            cc,
            AmazonGiftCardAccountPayload::with_salt(id, salt, cc, m.email_or_mobile_nr)?,
        )?),
        CountryMessage::SwishAccountPayload(m) => P::Swish(check_country(
            cc,
            SwishAccountPayload::with_salt(id, salt, m.holder_name, m.mobile_nr)?,
        )?),
        CountryMessage::SepaAccountPayload(m) => P::Sepa(check_country(
            cc,
            SepaAccountPayload::with_salt(id, salt, m.holder_name, m.iban, m.bic, cc, m.accepted_country_codes)?,
        )?),
        CountryMessage::SepaInstantAccountPayload(m) => P::SepaInstant(check_country(
            cc,
            SepaInstantAccountPayload::with_salt(
                id,
                salt,
                m.holder_name,
                m.iban,
                m.bic,
                cc,
                m.accepted_country_codes,
            )?,
        )?),
        CountryMessage::BizumAccountPayload(m) => {
            P::Bizum(check_country(cc, BizumAccountPayload::with_salt(id, salt, m.mobile_nr)?)?)
        }
        CountryMessage::F2fAccountPayload(m) => P::F2f(check_country(
            cc,
            F2fAccountPayload::with_salt(id, salt, cc, m.selected_currency_code, m.city, m.contact, m.extra_info)?,
        )?),
        CountryMessage::PixAccountPayload(m) => P::Pix(check_country(
            cc,
            PixAccountPayload::with_salt(id, salt, m.holder_name, m.pix_key)?,
        )?),
        CountryMessage::PromptPayAccountPayload(m) => P::PromptPay(check_country(
            cc,
            PromptPayAccountPayload::with_salt(id, salt, m.prompt_pay_id)?,
        )?),
        CountryMessage::StrikeAccountPayload(m) => {
            P::Strike(check_country(cc, StrikeAccountPayload::with_salt(id, salt, m.holder_name)?)?)
        }
        CountryMessage::UpiAccountPayload(m) => P::Upi(check_country(
            cc,
            UpiAccountPayload::with_salt(id, salt, m.virtual_payment_address)?,
        )?),
        CountryMessage::WiseAccountPayload(m) => P::Wise(check_country(
            cc,
            WiseAccountPayload::with_salt(id, salt, cc, m.selected_currency_codes, m.holder_name, m.email)?,
        )?),
        CountryMessage::WiseUsdAccountPayload(m) => P::WiseUsd(check_country(
            cc,
            WiseUsdAccountPayload::with_salt(id, salt, m.holder_name, m.email, m.beneficiary_address)?,
        )?),
        CountryMessage::MoneyGramAccountPayload(m) => P::MoneyGram(check_country(
            cc,
            MoneyGramAccountPayload::with_salt(
                id,
                salt,
                cc,
                m.selected_currency_codes,
                m.holder_name,
                m.email,
                m.state,
            )?,
        )?),
        CountryMessage::MoneyBeamAccountPayload(m) => P::MoneyBeam(check_country(
            cc,
            MoneyBeamAccountPayload::with_salt(id, salt, cc, m.selected_currency_code, m.holder_name, m.account_id)?,
        )?),
        CountryMessage::Pin4AccountPayload(m) => {
            P::Pin4(check_country(cc, Pin4AccountPayload::with_salt(id, salt, m.mobile_nr)?)?)
        }
        CountryMessage::SwiftAccountPayload(m) => P::Swift(check_country(
            cc,
            SwiftAccountPayload::with_salt(id, salt, cc, swift_from_proto(m))?,
        )?),
    })
}

fn bank_from_proto(
    id: String,
    salt: Vec<u8>,
    country_code: String,
    message: proto::BankAccountPayload,
) -> Result<BankAccountPayload> {
    let variant = message
        .message
        .ok_or_else(|| AccountError::unresolvable("bank_payload", "no variant set"))?;
    let bank_account_type = message
        .bank_account_type
        .map(|name| {
            BankAccountType::from_name(&name)
                .ok_or_else(|| AccountError::Decode(format!("unknown bank account type {:?}", name)))
        })
        .transpose()?;
    let bank = BankDetails {
        country_code,
        selected_currency_code: message.selected_currency_code,
        holder_name: message.holder_name,
        holder_id: message.holder_id,
        bank_name: message.bank_name,
        bank_id: message.bank_id,
        branch_id: message.branch_id,
        account_nr: message.account_nr,
        bank_account_type,
        national_account_id: message.national_account_id,
    };
    Ok(match variant {
        BankMessage::AchTransferAccountPayload(m) => BankAccountPayload::AchTransfer(
            AchTransferAccountPayload::from_parts(PayloadCore::new(id, salt), bank, m.holder_address)?,
        ),
        BankMessage::NationalBankAccountPayload(_) => {
            BankAccountPayload::NationalBank(NationalBankAccountPayload::with_salt(id, salt, bank)?)
        }
        BankMessage::CashDepositAccountPayload(m) => {
            BankAccountPayload::CashDeposit(CashDepositAccountPayload::with_salt(id, salt, bank, m.requirements)?)
        }
        BankMessage::SameBankAccountPayload(_) => {
            BankAccountPayload::SameBank(SameBankAccountPayload::with_salt(id, salt, bank)?)
        }
        BankMessage::DomesticWireTransferAccountPayload(m) => BankAccountPayload::DomesticWireTransfer(
            DomesticWireTransferAccountPayload::from_parts(PayloadCore::new(id, salt), bank, m.holder_address)?,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Constraint;
    use crate::test_utils::TestFixtures;

    fn to_proto(payload: impl Into<AccountPayload>) -> proto::AccountPayload {
        proto::AccountPayload::from(&payload.into())
    }

    fn country_based(message: &mut proto::AccountPayload) -> &mut proto::CountryBasedAccountPayload {
        match message.message.as_mut() {
            Some(FlatMessage::CountryBasedAccountPayload(m)) => m,
            _ => panic!("not country based"),
        }
    }

    fn bank(message: &mut proto::AccountPayload) -> &mut proto::BankAccountPayload {
        match country_based(message).message.as_mut() {
            Some(CountryMessage::BankAccountPayload(m)) => m,
            _ => panic!("not a bank payload"),
        }
    }

    #[test]
    fn test_every_fixture_converts_back() {
        for payload in TestFixtures::all_payloads() {
            let message = proto::AccountPayload::from(&payload);
            assert_eq!(AccountPayload::try_from(message).unwrap(), payload);
        }
    }

    #[test]
    fn test_fixed_country_rail_under_other_country() {
        let mut message = to_proto(TestFixtures::pix());
        country_based(&mut message).country_code = "AR".into();
        let err = AccountPayload::try_from(message).unwrap_err();
        let validation = err.validation().unwrap();
        assert_eq!(validation.field, "country_code");
        assert!(matches!(validation.constraint, Constraint::Mismatch { .. }));
    }

    #[test]
    fn test_missing_country_level_variant() {
        let mut message = to_proto(TestFixtures::sepa());
        country_based(&mut message).message = None;
        assert!(matches!(
            AccountPayload::try_from(message),
            Err(AccountError::UnresolvableVariant { level: "country_based_payload", .. })
        ));
    }

    #[test]
    fn test_missing_bank_level_variant() {
        let mut message = to_proto(TestFixtures::national_bank_ar());
        bank(&mut message).message = None;
        assert!(matches!(
            AccountPayload::try_from(message),
            Err(AccountError::UnresolvableVariant { level: "bank_payload", .. })
        ));
    }

    #[test]
    fn test_unknown_bank_account_type() {
        let mut message = to_proto(TestFixtures::ach_transfer());
        bank(&mut message).bank_account_type = Some("MONEY_MARKET".into());
        assert!(matches!(AccountPayload::try_from(message), Err(AccountError::Decode(_))));
    }

    #[test]
    fn test_ach_without_account_type() {
        let mut message = to_proto(TestFixtures::ach_transfer());
        bank(&mut message).bank_account_type = None;
        assert!(matches!(
            AccountPayload::try_from(message),
            Err(AccountError::MissingRequiredField {
                variant: "AchTransfer",
                field: "bank_account_type"
            })
        ));
    }

    #[test]
    fn test_wire_transfer_without_routing_nr() {
        let mut message = to_proto(TestFixtures::domestic_wire());
        bank(&mut message).bank_id = None;
        assert!(matches!(
            AccountPayload::try_from(message),
            Err(AccountError::MissingRequiredField {
                variant: "DomesticWireTransfer",
                field: "routing_nr"
            })
        ));
    }

    #[test]
    fn test_optional_fields_survive_absent() {
        let payload = CashByMailAccountPayload::with_salt(
            "p1",
            TestFixtures::ZERO_SALT.to_vec(),
            "123 Main St",
            "Alice",
            None,
        )
        .unwrap();
        let message = to_proto(payload.clone());
        match &message.message {
            Some(FlatMessage::CashByMailAccountPayload(m)) => assert_eq!(m.extra_info, None),
            _ => panic!("wrong variant"),
        }
        assert_eq!(AccountPayload::try_from(message).unwrap(), payload.into());
    }
}
