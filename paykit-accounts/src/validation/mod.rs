//! Field validation rules.
//!
//! Every rule is a pure function over already extracted values. A violation
//! is reported as a [`ValidationError`] naming the field and the constraint;
//! nothing is logged or mutated here.

mod iban;

pub use iban::{
    validate_bic_format, validate_iban_country_consistency, validate_iban_format,
    validate_sepa_iban,
};

use crate::catalog::{countries, currencies};
use crate::errors::{Constraint, ValidationError};

/// Result type for validation rules.
pub type ValidationResult = std::result::Result<(), ValidationError>;

/// Longest account or payload id accepted.
pub const MAX_ID_LEN: usize = 50;
/// Longest e-mail address accepted.
pub const MAX_EMAIL_LEN: usize = 100;

const TWO_HOURS_MS: i64 = 2 * 60 * 60 * 1000;
/// 2016-04-27T00:00:00Z, nothing predates the first release of the network.
pub const NETWORK_LAUNCH_DATE_MS: i64 = 1_461_715_200_000;

/// Checks that `value` is non-empty and its character count lies in `min..=max`.
pub fn validate_required_text(field: &str, value: &str, min: usize, max: usize) -> ValidationResult {
    if value.is_empty() {
        return Err(ValidationError::new(field, Constraint::Empty));
    }
    validate_length(field, value, min, max)
}

/// Like [`validate_required_text`], but an absent value passes.
pub fn validate_optional_text(
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> ValidationResult {
    match value {
        Some(value) => validate_required_text(field, value, min, max),
        None => Ok(()),
    }
}

fn validate_length(field: &str, value: &str, min: usize, max: usize) -> ValidationResult {
    let actual = value.chars().count();
    if actual < min {
        return Err(ValidationError::new(field, Constraint::TooShort { min, actual }));
    }
    if actual > max {
        return Err(ValidationError::new(field, Constraint::TooLong { max, actual }));
    }
    Ok(())
}

/// Ids are generated as UUIDs but custom ids up to [`MAX_ID_LEN`] are accepted.
pub fn validate_id(field: &str, id: &str) -> ValidationResult {
    validate_required_text(field, id, 1, MAX_ID_LEN)
}

/// Checks an ISO-3166 alpha-2 code known to the country repository.
pub fn validate_country_code(field: &str, code: &str) -> ValidationResult {
    if code.is_empty() {
        return Err(ValidationError::new(field, Constraint::Empty));
    }
    if !countries::is_known_country(code) {
        return Err(ValidationError::new(
            field,
            Constraint::NotAllowed(code.to_string()),
        ));
    }
    Ok(())
}

/// Checks an ISO-4217 code known to the currency repository.
pub fn validate_currency_code(field: &str, code: &str) -> ValidationResult {
    if code.is_empty() {
        return Err(ValidationError::new(field, Constraint::Empty));
    }
    if !currencies::is_known_currency(code) {
        return Err(ValidationError::new(
            field,
            Constraint::NotAllowed(code.to_string()),
        ));
    }
    Ok(())
}

/// Checks that `codes` is non-empty and every entry is in `allowed`.
pub fn validate_country_codes<S: AsRef<str>>(
    field: &str,
    codes: &[S],
    allowed: &[&str],
) -> ValidationResult {
    if codes.is_empty() {
        return Err(ValidationError::new(field, Constraint::Empty));
    }
    for code in codes {
        let code = code.as_ref();
        if !allowed.contains(&code) {
            return Err(ValidationError::new(
                field,
                Constraint::NotAllowed(code.to_string()),
            ));
        }
    }
    Ok(())
}

/// Checks `local@domain.tld` with an alphabetic TLD of two or more letters.
pub fn validate_email(field: &str, email: &str) -> ValidationResult {
    validate_required_text(field, email, 1, MAX_EMAIL_LEN)?;
    if !is_email(email) {
        return Err(ValidationError::new(field, Constraint::Pattern("e-mail address")));
    }
    Ok(())
}

fn is_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'));
    // The TLD is whatever follows the last dot, the host part needs at least one char.
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    local_ok && host_ok && tld_ok
}

/// Checks a phone number: optional leading `+`, then digits with optional
/// spaces or dashes, 6 to 15 digits in total.
pub fn validate_phone_number(field: &str, phone: &str) -> ValidationResult {
    if phone.is_empty() {
        return Err(ValidationError::new(field, Constraint::Empty));
    }
    if !is_phone_number(phone) {
        return Err(ValidationError::new(field, Constraint::Pattern("phone number")));
    }
    Ok(())
}

fn is_phone_number(phone: &str) -> bool {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    if !rest.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-') {
        return false;
    }
    let digits = rest.chars().filter(char::is_ascii_digit).count();
    (6..=15).contains(&digits)
}

/// Accepts either an e-mail address or a phone number.
pub fn validate_email_or_phone(field: &str, value: &str) -> ValidationResult {
    if value.is_empty() {
        return Err(ValidationError::new(field, Constraint::Empty));
    }
    if value.contains('@') {
        validate_email(field, value)
    } else if is_phone_number(value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            Constraint::Pattern("e-mail address or phone number"),
        ))
    }
}

/// Checks that `value` consists of ASCII digits only, `min..=max` of them.
pub fn validate_digits(field: &str, value: &str, min: usize, max: usize) -> ValidationResult {
    validate_required_text(field, value, min, max)?;
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(field, Constraint::Pattern("digits only")));
    }
    Ok(())
}

/// Checks that `value` equals the value implied by another field.
pub fn validate_equals(field: &str, value: &str, expected: &str) -> ValidationResult {
    if value != expected {
        return Err(ValidationError::new(
            field,
            Constraint::Mismatch {
                expected: expected.to_string(),
                actual: value.to_string(),
            },
        ));
    }
    Ok(())
}

/// Dates may be at most two hours ahead of `now_ms` and must not predate
/// [`NETWORK_LAUNCH_DATE_MS`].
pub fn validate_date(field: &str, date_ms: i64, now_ms: i64) -> ValidationResult {
    if date_ms <= NETWORK_LAUNCH_DATE_MS || date_ms >= now_ms.saturating_add(TWO_HOURS_MS) {
        return Err(ValidationError::new(
            field,
            Constraint::NotAllowed(date_ms.to_string()),
        ));
    }
    Ok(())
}
