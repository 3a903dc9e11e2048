//! Protobuf messages of `proto/account.proto`.
//!
//! Written out by hand in the shape `prost-build` produces, so the crate
//! builds without `protoc`. Keep field numbers in sync with the schema file.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccountPayload {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "2")]
    pub salt: ::prost::alloc::vec::Vec<u8>,
    #[prost(oneof = "account_payload::Message", tags = "10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 30")]
    pub message: ::core::option::Option<account_payload::Message>,
}
/// Nested message and enum types in `AccountPayload`.
pub mod account_payload {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Message {
        #[prost(message, tag = "10")]
        ZelleAccountPayload(super::ZelleAccountPayload),
        #[prost(message, tag = "11")]
        UsPostalMoneyOrderAccountPayload(super::UsPostalMoneyOrderAccountPayload),
        #[prost(message, tag = "12")]
        PayIdAccountPayload(super::PayIdAccountPayload),
        #[prost(message, tag = "13")]
        InteracETransferAccountPayload(super::InteracETransferAccountPayload),
        #[prost(message, tag = "14")]
        HalCashAccountPayload(super::HalCashAccountPayload),
        #[prost(message, tag = "15")]
        FasterPaymentsAccountPayload(super::FasterPaymentsAccountPayload),
        #[prost(message, tag = "16")]
        SbpAccountPayload(super::SbpAccountPayload),
        #[prost(message, tag = "17")]
        CashByMailAccountPayload(super::CashByMailAccountPayload),
        #[prost(message, tag = "18")]
        RevolutAccountPayload(super::RevolutAccountPayload),
        #[prost(message, tag = "19")]
        UpholdAccountPayload(super::UpholdAccountPayload),
        #[prost(message, tag = "20")]
        UserDefinedFiatAccountPayload(super::UserDefinedFiatAccountPayload),
        #[prost(message, tag = "30")]
        CountryBasedAccountPayload(super::CountryBasedAccountPayload),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ZelleAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub email_or_mobile_nr: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UsPostalMoneyOrderAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub postal_address: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PayIdAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub pay_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InteracETransferAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub question: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub answer: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HalCashAccountPayload {
    #[prost(string, tag = "1")]
    pub mobile_nr: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FasterPaymentsAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub sort_code: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub account_nr: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SbpAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub mobile_number: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub bank_name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CashByMailAccountPayload {
    #[prost(string, tag = "1")]
    pub postal_address: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub contact: ::prost::alloc::string::String,
    #[prost(string, optional, tag = "3")]
    pub extra_info: ::core::option::Option<String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RevolutAccountPayload {
    #[prost(string, tag = "1")]
    pub user_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub selected_currency_codes: ::prost::alloc::vec::Vec<String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpholdAccountPayload {
    #[prost(string, repeated, tag = "1")]
    pub selected_currency_codes: ::prost::alloc::vec::Vec<String>,
    #[prost(string, tag = "2")]
    pub holder_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub account_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UserDefinedFiatAccountPayload {
    #[prost(string, tag = "1")]
    pub account_data: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CountryBasedAccountPayload {
    #[prost(string, tag = "1")]
    pub country_code: ::prost::alloc::string::String,
    #[prost(oneof = "country_based_account_payload::Message", tags = "10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26")]
    pub message: ::core::option::Option<country_based_account_payload::Message>,
}
/// Nested message and enum types in `CountryBasedAccountPayload`.
pub mod country_based_account_payload {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Message {
        #[prost(message, tag = "10")]
        BankAccountPayload(super::BankAccountPayload),
        #[prost(message, tag = "11")]
        AmazonGiftCardAccountPayload(super::AmazonGiftCardAccountPayload),
        #[prost(message, tag = "12")]
        SwishAccountPayload(super::SwishAccountPayload),
        #[prost(message, tag = "13")]
        SepaAccountPayload(super::SepaAccountPayload),
        #[prost(message, tag = "14")]
        SepaInstantAccountPayload(super::SepaInstantAccountPayload),
        #[prost(message, tag = "15")]
        BizumAccountPayload(super::BizumAccountPayload),
        #[prost(message, tag = "16")]
        F2fAccountPayload(super::F2fAccountPayload),
        #[prost(message, tag = "17")]
        PixAccountPayload(super::PixAccountPayload),
        #[prost(message, tag = "18")]
        PromptPayAccountPayload(super::PromptPayAccountPayload),
        #[prost(message, tag = "19")]
        StrikeAccountPayload(super::StrikeAccountPayload),
        #[prost(message, tag = "20")]
        UpiAccountPayload(super::UpiAccountPayload),
        #[prost(message, tag = "21")]
        WiseAccountPayload(super::WiseAccountPayload),
        #[prost(message, tag = "22")]
        WiseUsdAccountPayload(super::WiseUsdAccountPayload),
        #[prost(message, tag = "23")]
        MoneyGramAccountPayload(super::MoneyGramAccountPayload),
        #[prost(message, tag = "24")]
        MoneyBeamAccountPayload(super::MoneyBeamAccountPayload),
        #[prost(message, tag = "25")]
        Pin4AccountPayload(super::Pin4AccountPayload),
        #[prost(message, tag = "26")]
        SwiftAccountPayload(super::SwiftAccountPayload),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AmazonGiftCardAccountPayload {
    #[prost(string, tag = "1")]
    pub email_or_mobile_nr: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SwishAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub mobile_nr: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SepaAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub iban: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub bic: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "4")]
    pub accepted_country_codes: ::prost::alloc::vec::Vec<String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SepaInstantAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub iban: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub bic: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "4")]
    pub accepted_country_codes: ::prost::alloc::vec::Vec<String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BizumAccountPayload {
    #[prost(string, tag = "1")]
    pub mobile_nr: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct F2fAccountPayload {
    #[prost(string, tag = "1")]
    pub selected_currency_code: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub city: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub contact: ::prost::alloc::string::String,
    #[prost(string, optional, tag = "4")]
    pub extra_info: ::core::option::Option<String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PixAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub pix_key: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PromptPayAccountPayload {
    #[prost(string, tag = "1")]
    pub prompt_pay_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StrikeAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpiAccountPayload {
    #[prost(string, tag = "1")]
    pub virtual_payment_address: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WiseAccountPayload {
    #[prost(string, repeated, tag = "1")]
    pub selected_currency_codes: ::prost::alloc::vec::Vec<String>,
    #[prost(string, tag = "2")]
    pub holder_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub email: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WiseUsdAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub beneficiary_address: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MoneyGramAccountPayload {
    #[prost(string, repeated, tag = "1")]
    pub selected_currency_codes: ::prost::alloc::vec::Vec<String>,
    #[prost(string, tag = "2")]
    pub holder_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, optional, tag = "4")]
    pub state: ::core::option::Option<String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MoneyBeamAccountPayload {
    #[prost(string, tag = "1")]
    pub selected_currency_code: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub holder_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub account_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Pin4AccountPayload {
    #[prost(string, tag = "1")]
    pub mobile_nr: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SwiftAccountPayload {
    #[prost(string, tag = "1")]
    pub selected_currency_code: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub beneficiary_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub beneficiary_account_nr: ::prost::alloc::string::String,
    #[prost(string, optional, tag = "4")]
    pub beneficiary_phone: ::core::option::Option<String>,
    #[prost(string, tag = "5")]
    pub beneficiary_address: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub bank_swift_code: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub bank_name: ::prost::alloc::string::String,
    #[prost(string, optional, tag = "8")]
    pub bank_branch: ::core::option::Option<String>,
    #[prost(string, tag = "9")]
    pub bank_address: ::prost::alloc::string::String,
    #[prost(string, optional, tag = "10")]
    pub intermediary_bank_country_code: ::core::option::Option<String>,
    #[prost(string, optional, tag = "11")]
    pub intermediary_bank_swift_code: ::core::option::Option<String>,
    #[prost(string, optional, tag = "12")]
    pub intermediary_bank_name: ::core::option::Option<String>,
    #[prost(string, optional, tag = "13")]
    pub intermediary_bank_branch: ::core::option::Option<String>,
    #[prost(string, optional, tag = "14")]
    pub intermediary_bank_address: ::core::option::Option<String>,
    #[prost(string, optional, tag = "15")]
    pub additional_instructions: ::core::option::Option<String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BankAccountPayload {
    #[prost(string, optional, tag = "1")]
    pub holder_name: ::core::option::Option<String>,
    #[prost(string, optional, tag = "2")]
    pub holder_id: ::core::option::Option<String>,
    #[prost(string, optional, tag = "3")]
    pub bank_name: ::core::option::Option<String>,
    #[prost(string, optional, tag = "4")]
    pub bank_id: ::core::option::Option<String>,
    #[prost(string, optional, tag = "5")]
    pub branch_id: ::core::option::Option<String>,
    #[prost(string, tag = "6")]
    pub account_nr: ::prost::alloc::string::String,
    #[prost(string, optional, tag = "7")]
    pub bank_account_type: ::core::option::Option<String>,
    #[prost(string, optional, tag = "8")]
    pub national_account_id: ::core::option::Option<String>,
    #[prost(string, tag = "9")]
    pub selected_currency_code: ::prost::alloc::string::String,
    #[prost(oneof = "bank_account_payload::Message", tags = "20, 21, 22, 23, 24")]
    pub message: ::core::option::Option<bank_account_payload::Message>,
}
/// Nested message and enum types in `BankAccountPayload`.
pub mod bank_account_payload {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Message {
        #[prost(message, tag = "20")]
        AchTransferAccountPayload(super::AchTransferAccountPayload),
        #[prost(message, tag = "21")]
        NationalBankAccountPayload(super::NationalBankAccountPayload),
        #[prost(message, tag = "22")]
        CashDepositAccountPayload(super::CashDepositAccountPayload),
        #[prost(message, tag = "23")]
        SameBankAccountPayload(super::SameBankAccountPayload),
        #[prost(message, tag = "24")]
        DomesticWireTransferAccountPayload(super::DomesticWireTransferAccountPayload),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AchTransferAccountPayload {
    #[prost(string, optional, tag = "1")]
    pub holder_address: ::core::option::Option<String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NationalBankAccountPayload {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CashDepositAccountPayload {
    #[prost(string, optional, tag = "1")]
    pub requirements: ::core::option::Option<String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SameBankAccountPayload {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DomesticWireTransferAccountPayload {
    #[prost(string, optional, tag = "1")]
    pub holder_address: ::core::option::Option<String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccountMarker {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SigningIdentity {
    #[prost(bytes = "vec", tag = "1")]
    pub public_key: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub private_key: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "3")]
    pub key_algorithm: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_origin: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Account {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub creation_date: i64,
    #[prost(string, tag = "3")]
    pub account_name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub account_payload: ::core::option::Option<AccountPayload>,
    #[prost(message, optional, tag = "5")]
    pub signing: ::core::option::Option<SigningIdentity>,
    #[prost(oneof = "account::Message", tags = "10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 30")]
    pub message: ::core::option::Option<account::Message>,
}
/// Nested message and enum types in `Account`.
pub mod account {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Message {
        #[prost(message, tag = "10")]
        ZelleAccount(super::AccountMarker),
        #[prost(message, tag = "11")]
        UsPostalMoneyOrderAccount(super::AccountMarker),
        #[prost(message, tag = "12")]
        PayIdAccount(super::AccountMarker),
        #[prost(message, tag = "13")]
        InteracETransferAccount(super::AccountMarker),
        #[prost(message, tag = "14")]
        HalCashAccount(super::AccountMarker),
        #[prost(message, tag = "15")]
        FasterPaymentsAccount(super::AccountMarker),
        #[prost(message, tag = "16")]
        SbpAccount(super::AccountMarker),
        #[prost(message, tag = "17")]
        CashByMailAccount(super::AccountMarker),
        #[prost(message, tag = "18")]
        RevolutAccount(super::AccountMarker),
        #[prost(message, tag = "19")]
        UpholdAccount(super::AccountMarker),
        #[prost(message, tag = "20")]
        UserDefinedFiatAccount(super::AccountMarker),
        #[prost(message, tag = "30")]
        CountryBasedAccount(super::CountryBasedAccount),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CountryBasedAccount {
    #[prost(oneof = "country_based_account::Message", tags = "10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26")]
    pub message: ::core::option::Option<country_based_account::Message>,
}
/// Nested message and enum types in `CountryBasedAccount`.
pub mod country_based_account {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Message {
        #[prost(message, tag = "10")]
        BankAccount(super::BankAccount),
        #[prost(message, tag = "11")]
        AmazonGiftCardAccount(super::AccountMarker),
        #[prost(message, tag = "12")]
        SwishAccount(super::AccountMarker),
        #[prost(message, tag = "13")]
        SepaAccount(super::AccountMarker),
        #[prost(message, tag = "14")]
        SepaInstantAccount(super::AccountMarker),
        #[prost(message, tag = "15")]
        BizumAccount(super::AccountMarker),
        #[prost(message, tag = "16")]
        F2fAccount(super::AccountMarker),
        #[prost(message, tag = "17")]
        PixAccount(super::AccountMarker),
        #[prost(message, tag = "18")]
        PromptPayAccount(super::AccountMarker),
        #[prost(message, tag = "19")]
        StrikeAccount(super::AccountMarker),
        #[prost(message, tag = "20")]
        UpiAccount(super::AccountMarker),
        #[prost(message, tag = "21")]
        WiseAccount(super::AccountMarker),
        #[prost(message, tag = "22")]
        WiseUsdAccount(super::AccountMarker),
        #[prost(message, tag = "23")]
        MoneyGramAccount(super::AccountMarker),
        #[prost(message, tag = "24")]
        MoneyBeamAccount(super::AccountMarker),
        #[prost(message, tag = "25")]
        Pin4Account(super::AccountMarker),
        #[prost(message, tag = "26")]
        SwiftAccount(super::AccountMarker),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BankAccount {
    #[prost(oneof = "bank_account::Message", tags = "20, 21, 22, 23, 24")]
    pub message: ::core::option::Option<bank_account::Message>,
}
/// Nested message and enum types in `BankAccount`.
pub mod bank_account {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Message {
        #[prost(message, tag = "20")]
        AchTransferAccount(super::AccountMarker),
        #[prost(message, tag = "21")]
        NationalBankAccount(super::AccountMarker),
        #[prost(message, tag = "22")]
        CashDepositAccount(super::AccountMarker),
        #[prost(message, tag = "23")]
        SameBankAccount(super::AccountMarker),
        #[prost(message, tag = "24")]
        DomesticWireTransferAccount(super::AccountMarker),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccountAgeWitness {
    #[prost(bytes = "vec", tag = "1")]
    pub hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(int64, tag = "2")]
    pub date: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccountTimestamp {
    #[prost(bytes = "vec", tag = "1")]
    pub hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(int64, tag = "2")]
    pub date: i64,
}
