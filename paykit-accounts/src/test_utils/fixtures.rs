//! Deterministic payloads and accounts.
//!
//! Every payload uses the id `"id"` and [`TestFixtures::ZERO_SALT`], so
//! fingerprints and encodings are stable across runs.

use crate::account::{AccountOrigin, KeyAlgorithm, KeyPair, PaymentAccount, SigningIdentity};
use crate::payload::*;

/// Collection of commonly used test fixtures.
pub struct TestFixtures;

macro_rules! fixture {
    ($expr:expr) => {
        $expr.expect(concat!("invalid fixture: ", stringify!($expr)))
    };
}

impl TestFixtures {
    pub const ZERO_SALT: [u8; 32] = [0; 32];

    /// Creation date shared by fixture accounts, 2023-11-14 in ms.
    pub const CREATION_DATE: i64 = 1_700_000_000_000;

    pub const PUBLIC_KEY: [u8; 32] = [1; 32];
    pub const PRIVATE_KEY: [u8; 32] = [2; 32];

    fn salt() -> Vec<u8> {
        Self::ZERO_SALT.to_vec()
    }

    // Flat payloads

    pub fn zelle() -> ZelleAccountPayload {
        fixture!(ZelleAccountPayload::with_salt("id", Self::salt(), "Alice", "alice@example.com"))
    }

    pub fn us_postal_money_order() -> UsPostalMoneyOrderAccountPayload {
        fixture!(UsPostalMoneyOrderAccountPayload::with_salt(
            "id",
            Self::salt(),
            "Alice",
            "123 Main St"
        ))
    }

    pub fn pay_id() -> PayIdAccountPayload {
        fixture!(PayIdAccountPayload::with_salt("id", Self::salt(), "Alice", "alice$bank"))
    }

    pub fn interac() -> InteracETransferAccountPayload {
        fixture!(InteracETransferAccountPayload::with_salt(
            "id",
            Self::salt(),
            "Alice",
            "alice@example.com",
            "Question",
            "Answer"
        ))
    }

    pub fn hal_cash() -> HalCashAccountPayload {
        fixture!(HalCashAccountPayload::with_salt("id", Self::salt(), "+34612345678"))
    }

    pub fn faster_payments() -> FasterPaymentsAccountPayload {
        fixture!(FasterPaymentsAccountPayload::with_salt(
            "id",
            Self::salt(),
            "Alice",
            "123456",
            "12345678"
        ))
    }

    pub fn sbp() -> SbpAccountPayload {
        fixture!(SbpAccountPayload::with_salt(
            "id",
            Self::salt(),
            "Alice",
            "+79161234567",
            "Sberbank"
        ))
    }

    pub fn cash_by_mail() -> CashByMailAccountPayload {
        fixture!(CashByMailAccountPayload::with_salt(
            "id",
            Self::salt(),
            "123 Main St",
            "Alice",
            Some("Extra".into())
        ))
    }

    pub fn revolut() -> RevolutAccountPayload {
        fixture!(RevolutAccountPayload::with_salt("id", Self::salt(), "alice", vec!["EUR".into()]))
    }

    pub fn uphold() -> UpholdAccountPayload {
        fixture!(UpholdAccountPayload::with_salt(
            "id",
            Self::salt(),
            vec!["USD".into()],
            "Alice",
            "acct-1"
        ))
    }

    pub fn user_defined_fiat() -> UserDefinedFiatAccountPayload {
        fixture!(UserDefinedFiatAccountPayload::with_salt("id", Self::salt(), "custom data"))
    }

    // Country based payloads

    pub fn amazon_gift_card() -> AmazonGiftCardAccountPayload {
        fixture!(AmazonGiftCardAccountPayload::with_salt(
            "id",
            Self::salt(),
            "US",
            "alice@example.com"
        ))
    }

    pub fn swish() -> SwishAccountPayload {
        fixture!(SwishAccountPayload::with_salt("id", Self::salt(), "Alice", "+46701234567"))
    }

    pub fn sepa() -> SepaAccountPayload {
        fixture!(SepaAccountPayload::with_salt(
            "id",
            Self::salt(),
            "Alice",
            "DE89370400440532013000",
            "DEUTDEFF",
            "DE",
            vec!["DE".into()]
        ))
    }

    /// Same data as [`TestFixtures::sepa`].
    pub fn sepa_instant() -> SepaInstantAccountPayload {
        fixture!(SepaInstantAccountPayload::with_salt(
            "id",
            Self::salt(),
            "Alice",
            "DE89370400440532013000",
            "DEUTDEFF",
            "DE",
            vec!["DE".into()]
        ))
    }

    pub fn bizum() -> BizumAccountPayload {
        fixture!(BizumAccountPayload::with_salt("id", Self::salt(), "+34612345678"))
    }

    pub fn f2f() -> F2fAccountPayload {
        fixture!(F2fAccountPayload::with_salt(
            "id",
            Self::salt(),
            "US",
            "USD",
            "New York",
            "Alice",
            Some("Extra".into())
        ))
    }

    pub fn pix() -> PixAccountPayload {
        fixture!(PixAccountPayload::with_salt("id", Self::salt(), "Alice", "pix-key"))
    }

    pub fn prompt_pay() -> PromptPayAccountPayload {
        fixture!(PromptPayAccountPayload::with_salt("id", Self::salt(), "1234567890"))
    }

    pub fn strike() -> StrikeAccountPayload {
        fixture!(StrikeAccountPayload::with_salt("id", Self::salt(), "Alice"))
    }

    pub fn upi() -> UpiAccountPayload {
        fixture!(UpiAccountPayload::with_salt("id", Self::salt(), "alice@upi"))
    }

    pub fn wise() -> WiseAccountPayload {
        fixture!(WiseAccountPayload::with_salt(
            "id",
            Self::salt(),
            "DE",
            vec!["EUR".into()],
            "Alice",
            "alice@example.com"
        ))
    }

    pub fn wise_usd() -> WiseUsdAccountPayload {
        fixture!(WiseUsdAccountPayload::with_salt(
            "id",
            Self::salt(),
            "Alice",
            "alice@example.com",
            "123 Main St"
        ))
    }

    pub fn money_gram() -> MoneyGramAccountPayload {
        fixture!(MoneyGramAccountPayload::with_salt(
            "id",
            Self::salt(),
            "US",
            vec!["USD".into()],
            "Alice",
            "alice@example.com",
            Some("CA".into())
        ))
    }

    pub fn money_beam() -> MoneyBeamAccountPayload {
        fixture!(MoneyBeamAccountPayload::with_salt(
            "id",
            Self::salt(),
            "DE",
            "EUR",
            "Alice",
            "alice@example.com"
        ))
    }

    pub fn pin4() -> Pin4AccountPayload {
        fixture!(Pin4AccountPayload::with_salt("id", Self::salt(), "+48123456789"))
    }

    /// Valid US details without any optional field.
    pub fn swift_details() -> SwiftDetails {
        SwiftDetails {
            selected_currency_code: "USD".into(),
            beneficiary_name: "Alice".into(),
            beneficiary_account_nr: "123456789".into(),
            beneficiary_address: "123 Main St".into(),
            bank_swift_code: "CHASUS33".into(),
            bank_name: "Chase".into(),
            bank_address: "270 Park Ave".into(),
            ..Default::default()
        }
    }

    pub fn swift() -> SwiftAccountPayload {
        fixture!(SwiftAccountPayload::with_salt("id", Self::salt(), "US", Self::swift_details()))
    }

    // Bank payloads

    pub fn ach_transfer() -> AchTransferAccountPayload {
        fixture!(AchTransferAccountPayload::with_salt(
            "id",
            Self::salt(),
            "Alice",
            Some("123 Main St".into()),
            "Bank",
            "111000025",
            "123456789",
            BankAccountType::Checking
        ))
    }

    pub fn domestic_wire() -> DomesticWireTransferAccountPayload {
        fixture!(DomesticWireTransferAccountPayload::with_salt(
            "id",
            Self::salt(),
            "Alice",
            Some("123 Main St".into()),
            "Bank",
            "111000025",
            "123456789"
        ))
    }

    /// Swedish details: only the account number is required there.
    pub fn se_bank_details() -> BankDetails {
        BankDetails::new("SE", "SEK", "1234567")
    }

    pub fn us_bank_details() -> BankDetails {
        BankDetails::new("US", "USD", "123456789")
            .with_holder_name("Alice")
            .with_bank_name("Bank")
            .with_bank_id("111000025")
            .with_bank_account_type(BankAccountType::Checking)
    }

    pub fn ar_bank_details() -> BankDetails {
        BankDetails::new("AR", "ARS", "1234567")
            .with_holder_name("Alice")
            .with_holder_id("CUIT123")
            .with_bank_name("Bank")
            .with_bank_id("BANKID")
            .with_branch_id("BRANCH")
            .with_national_account_id("CBU123")
    }

    pub fn national_bank_se() -> NationalBankAccountPayload {
        fixture!(NationalBankAccountPayload::with_salt("id", Self::salt(), Self::se_bank_details()))
    }

    /// US details with every field set, including ones the country ignores.
    pub fn national_bank_us() -> NationalBankAccountPayload {
        let bank = Self::us_bank_details()
            .with_holder_id("ID123")
            .with_branch_id("001")
            .with_national_account_id("NAT");
        fixture!(NationalBankAccountPayload::with_salt("id", Self::salt(), bank))
    }

    pub fn national_bank_ar() -> NationalBankAccountPayload {
        fixture!(NationalBankAccountPayload::with_salt("id", Self::salt(), Self::ar_bank_details()))
    }

    pub fn same_bank() -> SameBankAccountPayload {
        fixture!(SameBankAccountPayload::with_salt("id", Self::salt(), Self::se_bank_details()))
    }

    pub fn cash_deposit() -> CashDepositAccountPayload {
        fixture!(CashDepositAccountPayload::with_salt(
            "id",
            Self::salt(),
            Self::us_bank_details(),
            Some("Deposit at any branch".into())
        ))
    }

    /// One payload per concrete variant, plus extra bank countries.
    pub fn all_payloads() -> Vec<AccountPayload> {
        vec![
            Self::zelle().into(),
            Self::us_postal_money_order().into(),
            Self::pay_id().into(),
            Self::interac().into(),
            Self::hal_cash().into(),
            Self::faster_payments().into(),
            Self::sbp().into(),
            Self::cash_by_mail().into(),
            Self::revolut().into(),
            Self::uphold().into(),
            Self::user_defined_fiat().into(),
            Self::amazon_gift_card().into(),
            Self::swish().into(),
            Self::sepa().into(),
            Self::sepa_instant().into(),
            Self::bizum().into(),
            Self::f2f().into(),
            Self::pix().into(),
            Self::prompt_pay().into(),
            Self::strike().into(),
            Self::upi().into(),
            Self::wise().into(),
            Self::wise_usd().into(),
            Self::money_gram().into(),
            Self::money_beam().into(),
            Self::pin4().into(),
            Self::swift().into(),
            Self::ach_transfer().into(),
            Self::domestic_wire().into(),
            Self::national_bank_se().into(),
            Self::national_bank_us().into(),
            Self::national_bank_ar().into(),
            Self::same_bank().into(),
            Self::cash_deposit().into(),
        ]
    }

    /// Fixed Ed25519-tagged identity. The key bytes are placeholders.
    pub fn signing_identity() -> SigningIdentity {
        SigningIdentity::new(
            KeyPair::new(Self::PUBLIC_KEY.to_vec(), Self::PRIVATE_KEY.to_vec()),
            KeyAlgorithm::Ed25519,
            AccountOrigin::Created,
        )
    }

    /// Account holding `payload`, signed by [`TestFixtures::signing_identity`].
    pub fn signed_account(payload: AccountPayload) -> PaymentAccount {
        let name = payload.default_account_name();
        PaymentAccount::from_payload(
            "acc-1",
            Self::CREATION_DATE,
            name,
            payload,
            Some(Self::signing_identity()),
        )
    }

    /// Every payload wrapped in an account; every other one is signed.
    pub fn all_accounts() -> Vec<PaymentAccount> {
        Self::all_payloads()
            .into_iter()
            .enumerate()
            .map(|(i, payload)| {
                if i % 2 == 0 {
                    Self::signed_account(payload)
                } else {
                    let name = payload.default_account_name();
                    PaymentAccount::from_payload(
                        format!("acc-{i}"),
                        Self::CREATION_DATE + i as i64,
                        name,
                        payload,
                        None,
                    )
                }
            })
            .collect()
    }
}
