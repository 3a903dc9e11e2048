//! Per-country requirements and labels of bank account fields.

use serde::{Deserialize, Serialize};

/// A bank account field whose presence or label depends on the country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankField {
    HolderName,
    HolderId,
    BankName,
    BankId,
    BranchId,
    AccountNr,
    AccountType,
    NationalAccountId,
}

impl BankField {
    pub const ALL: [Self; 8] = [
        Self::HolderName,
        Self::HolderId,
        Self::BankName,
        Self::BankId,
        Self::BranchId,
        Self::AccountNr,
        Self::AccountType,
        Self::NationalAccountId,
    ];

    /// Field name as used in validation errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::HolderName => "holder_name",
            Self::HolderId => "holder_id",
            Self::BankName => "bank_name",
            Self::BankId => "bank_id",
            Self::BranchId => "branch_id",
            Self::AccountNr => "account_nr",
            Self::AccountType => "bank_account_type",
            Self::NationalAccountId => "national_account_id",
        }
    }
}

/// Returns true if a bank account in `country_code` must carry `field`.
///
/// The holder name is checked by each variant on its own and is never
/// required here.
pub fn is_field_required(field: BankField, country_code: &str) -> bool {
    match field {
        BankField::HolderName => false,
        BankField::HolderId => matches!(country_code, "BR" | "CL" | "AR"),
        BankField::BankName => !matches!(country_code, "GB" | "AU" | "NZ" | "SE" | "NO"),
        BankField::BankId => !matches!(
            country_code,
            "GB" | "BR" | "NZ" | "AU" | "SE" | "CL" | "NO"
        ),
        BankField::BranchId => !matches!(country_code, "US" | "NZ" | "MX" | "HK" | "SE" | "NO"),
        BankField::AccountNr => true,
        BankField::AccountType => matches!(country_code, "US" | "BR" | "CA"),
        BankField::NationalAccountId => country_code == "AR",
    }
}

/// Localised label for a field.
pub fn field_label(field: BankField, country_code: &str) -> &'static str {
    match (field, country_code) {
        (BankField::HolderName, _) => "Account owner full name",
        (BankField::HolderId, "BR") => "CPF",
        (BankField::HolderId, "CL") => "RUT",
        (BankField::HolderId, "AR") => "CUIT/CUIL",
        (BankField::HolderId, _) => "Personal ID",
        (BankField::BankName, _) => "Bank name",
        (BankField::BankId, "US") => "Routing number",
        (BankField::BankId, "CA") => "Institution number",
        (BankField::BankId, _) => "Bank ID (BIC/SWIFT)",
        (BankField::BranchId, "GB") => "Sort code",
        (BankField::BranchId, "AU") => "BSB code",
        (BankField::BranchId, "CA") => "Transit number",
        (BankField::BranchId, _) => "Branch number",
        (BankField::AccountNr, "MX") => "CLABE",
        (BankField::AccountNr, _) => "Account number",
        (BankField::AccountType, _) => "Account type",
        (BankField::NationalAccountId, "AR") => "CBU",
        (BankField::NationalAccountId, _) => "National account ID",
    }
}

/// Compact label used in account summaries.
pub fn field_short_label(field: BankField, country_code: &str) -> &'static str {
    match (field, country_code) {
        (BankField::HolderName, _) => "Name",
        (BankField::HolderId, "AR") => "CUIT",
        (BankField::HolderId, "BR" | "CL") => field_label(field, country_code),
        (BankField::HolderId, _) => "ID",
        (BankField::BankName, _) => "Bank",
        (BankField::BankId, "US") => "Routing",
        (BankField::BankId, "CA") => "Inst. nr.",
        (BankField::BankId, _) => "Bank ID",
        (BankField::BranchId, "GB" | "AU") => field_label(field, country_code),
        (BankField::BranchId, "CA") => "Transit",
        (BankField::BranchId, _) => "Branch",
        (BankField::AccountNr, "MX") => "CLABE",
        (BankField::AccountNr, _) => "Account",
        (BankField::AccountType, _) => "Type",
        (BankField::NationalAccountId, "AR") => "CBU",
        (BankField::NationalAccountId, _) => "National ID",
    }
}

/// Fields required in a country, in declaration order.
pub fn required_fields(country_code: &str) -> Vec<BankField> {
    BankField::ALL
        .iter()
        .copied()
        .filter(|field| is_field_required(*field, country_code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_is_country_conditional() {
        assert!(is_field_required(BankField::AccountType, "US"));
        assert!(!is_field_required(BankField::AccountType, "DE"));
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            required_fields("US"),
            vec![
                BankField::BankName,
                BankField::BankId,
                BankField::AccountNr,
                BankField::AccountType
            ]
        );
        assert_eq!(required_fields("SE"), vec![BankField::AccountNr]);
        assert_eq!(
            required_fields("AR"),
            vec![
                BankField::HolderId,
                BankField::BankName,
                BankField::BankId,
                BankField::BranchId,
                BankField::AccountNr,
                BankField::NationalAccountId
            ]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(field_label(BankField::BankId, "US"), "Routing number");
        assert_eq!(field_label(BankField::HolderId, "BR"), "CPF");
        assert_eq!(field_label(BankField::BranchId, "GB"), "Sort code");
        assert_eq!(field_short_label(BankField::NationalAccountId, "AR"), "CBU");
        assert_eq!(field_short_label(BankField::HolderId, "DE"), "ID");
    }
}
