//! IBAN and BIC checks for bank transfer rails.

use super::ValidationResult;
use crate::errors::{Constraint, ValidationError};

const IBAN_MIN_LEN: usize = 15;
const IBAN_MAX_LEN: usize = 34;

/// Checks the shape of an IBAN and its ISO 13616 MOD-97 checksum.
///
/// The IBAN must be upper case without spaces: two letters, two check digits
/// and 1 to 30 alphanumeric BBAN characters.
pub fn validate_iban_format(iban: &str) -> ValidationResult {
    if iban.is_empty() {
        return Err(ValidationError::new("iban", Constraint::Empty));
    }
    if !is_iban_shape(iban) {
        return Err(ValidationError::new(
            "iban",
            Constraint::Pattern("country code, check digits and BBAN"),
        ));
    }
    let len = iban.len();
    if len < IBAN_MIN_LEN {
        return Err(ValidationError::new(
            "iban",
            Constraint::TooShort {
                min: IBAN_MIN_LEN,
                actual: len,
            },
        ));
    }
    if len > IBAN_MAX_LEN {
        return Err(ValidationError::new(
            "iban",
            Constraint::TooLong {
                max: IBAN_MAX_LEN,
                actual: len,
            },
        ));
    }
    if iban_mod97(iban) != 1 {
        return Err(ValidationError::new("iban", Constraint::Checksum));
    }
    Ok(())
}

fn is_iban_shape(iban: &str) -> bool {
    let bytes = iban.as_bytes();
    bytes.len() >= 5
        && bytes.len() <= 34
        && bytes[..2].iter().all(u8::is_ascii_uppercase)
        && bytes[2..4].iter().all(u8::is_ascii_digit)
        && bytes[4..]
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

// Remainder of the rearranged IBAN, letters expanded to 10..=35, computed
// digit by digit so no big integer is needed.
fn iban_mod97(iban: &str) -> u32 {
    let (head, tail) = iban.split_at(4);
    tail.bytes().chain(head.bytes()).fold(0u32, |acc, b| {
        if b.is_ascii_digit() {
            (acc * 10 + u32::from(b - b'0')) % 97
        } else {
            let value = u32::from(b - b'A') + 10;
            (acc * 100 + value) % 97
        }
    })
}

/// Checks an IBAN issued in one of the `allowed` SEPA countries.
pub fn validate_sepa_iban(iban: &str, allowed: &[&str]) -> ValidationResult {
    validate_iban_format(iban)?;
    let country = &iban[..2];
    if !allowed.contains(&country) {
        return Err(ValidationError::new(
            "iban",
            Constraint::NotAllowed(country.to_string()),
        ));
    }
    Ok(())
}

/// Checks that the IBAN was issued in the declared country.
pub fn validate_iban_country_consistency(iban: &str, country_code: &str) -> ValidationResult {
    if country_code.is_empty() {
        return Err(ValidationError::new("country_code", Constraint::Empty));
    }
    let cleaned: String = iban
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if cleaned.chars().count() < 2 {
        return Err(ValidationError::new(
            "iban",
            Constraint::TooShort {
                min: 2,
                actual: cleaned.chars().count(),
            },
        ));
    }
    if cleaned != country_code {
        return Err(ValidationError::new(
            "iban",
            Constraint::Mismatch {
                expected: country_code.to_string(),
                actual: cleaned,
            },
        ));
    }
    Ok(())
}

/// Checks a BIC (SWIFT code).
///
/// Rules: 8 or 11 characters; institution and country code are letters;
/// the location code neither starts with `0`/`1` (test BICs) nor ends with
/// `O`; a branch code starting with `X` must be `XXX`; Revolut BICs are
/// rejected since they do not work for regular SEPA transfers.
pub fn validate_bic_format(bic: &str) -> ValidationResult {
    if bic.is_empty() {
        return Err(ValidationError::new("bic", Constraint::Empty));
    }
    let b = bic.as_bytes();
    if b.len() != 8 && b.len() != 11 {
        return Err(ValidationError::new("bic", Constraint::Pattern("8 or 11 characters")));
    }
    let alnum = |c: &u8| c.is_ascii_uppercase() || c.is_ascii_digit();
    if !b[..6].iter().all(u8::is_ascii_uppercase) || !b[6..].iter().all(alnum) {
        return Err(ValidationError::new(
            "bic",
            Constraint::Pattern("institution, country, location and optional branch code"),
        ));
    }
    if b[6] == b'0' || b[6] == b'1' {
        return Err(ValidationError::new(
            "bic",
            Constraint::Pattern("location code not starting with 0 or 1"),
        ));
    }
    if b[7] == b'O' {
        return Err(ValidationError::new(
            "bic",
            Constraint::Pattern("location code not ending with O"),
        ));
    }
    if b.len() == 11 && b[8] == b'X' && &b[8..] != b"XXX" {
        return Err(ValidationError::new(
            "bic",
            Constraint::Pattern("branch code starting with X to be XXX"),
        ));
    }
    if bic.starts_with("REVO") {
        return Err(ValidationError::new(
            "bic",
            Constraint::NotAllowed(bic.to_string()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::all_sepa_country_codes;

    #[test]
    fn test_valid_ibans() {
        assert!(validate_iban_format("DE89370400440532013000").is_ok());
        assert!(validate_iban_format("GB29NWBK60161331926819").is_ok());
        assert!(validate_iban_format("FR1420041010050500013M02606").is_ok());
        assert!(validate_iban_format("CH9300762011623852957").is_ok());
    }

    #[test]
    fn test_iban_checksum() {
        let err = validate_iban_format("DE89370400440532013001").unwrap_err();
        assert_eq!(err.constraint, Constraint::Checksum);
    }

    #[test]
    fn test_iban_shape_and_length() {
        assert!(matches!(
            validate_iban_format("de89370400440532013000").unwrap_err().constraint,
            Constraint::Pattern(_)
        ));
        assert!(matches!(
            validate_iban_format("DE89 3704 0044 0532 0130 00").unwrap_err().constraint,
            Constraint::Pattern(_)
        ));
        assert!(matches!(
            validate_iban_format("DE8937040044").unwrap_err().constraint,
            Constraint::TooShort { .. }
        ));
        assert_eq!(validate_iban_format("").unwrap_err().constraint, Constraint::Empty);
    }

    #[test]
    fn test_sepa_iban() {
        let sepa = all_sepa_country_codes();
        assert!(validate_sepa_iban("DE89370400440532013000", &sepa).is_ok());
        // Valid Brazilian IBAN, but Brazil is not in SEPA
        let err = validate_sepa_iban("BR1800360305000010009795493C1", &sepa).unwrap_err();
        assert_eq!(err.constraint, Constraint::NotAllowed("BR".into()));
    }

    #[test]
    fn test_iban_country_consistency() {
        assert!(validate_iban_country_consistency("DE89370400440532013000", "DE").is_ok());
        assert!(validate_iban_country_consistency("de89 3704", "DE").is_ok());
        let err = validate_iban_country_consistency("DE89370400440532013000", "FR").unwrap_err();
        assert_eq!(
            err.constraint,
            Constraint::Mismatch {
                expected: "FR".into(),
                actual: "DE".into()
            }
        );
    }

    #[test]
    fn test_bic() {
        assert!(validate_bic_format("DEUTDEFF").is_ok());
        assert!(validate_bic_format("DEUTDEFF500").is_ok());
        assert!(validate_bic_format("NWBKGB2LXXX").is_ok());
        assert!(validate_bic_format("DEUTDEF").is_err());
        assert!(validate_bic_format("DEU1DEFF").is_err());
        assert!(validate_bic_format("DEUTDE0F").is_err());
        assert!(validate_bic_format("DEUTDEFO").is_err());
        assert!(validate_bic_format("DEUTDEFFXAB").is_err());
        assert!(validate_bic_format("deutdeff").is_err());
        assert_eq!(
            validate_bic_format("REVOLT21").unwrap_err().constraint,
            Constraint::NotAllowed("REVOLT21".into())
        );
    }
}
