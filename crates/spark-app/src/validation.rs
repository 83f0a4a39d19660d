//! Field validators shared by the form presenters.
//!
//! Validators are pure and synchronous. They never fail; an invalid value
//! yields a [`ValidationResult`] carrying the message the form shows.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// Letters, digits, spaces and dashes, at least five of them.
static PLATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9 -]{5,}$").expect("Invalid plate regex"));

/// `+` then the country code and subscriber number.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[0-9]{6,15}$").expect("Invalid phone regex"));

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

// =============================================================================
// RESULT TYPES
// =============================================================================

/// Outcome of a single validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Replace the message of an invalid result.
    #[must_use]
    pub fn with_message(self, message: &str) -> Self {
        if self.valid {
            self
        } else {
            Self::invalid(message)
        }
    }

    pub fn into_result(self, field: Field) -> Result<(), ValidationError> {
        if self.valid {
            return Ok(());
        }
        Err(ValidationError {
            field,
            message: self.message.unwrap_or_default(),
        })
    }
}

/// Form field a validator checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    LicensePlate,
    Phone,
    BirthDate,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm password",
            Self::LicensePlate => "license plate",
            Self::Phone => "phone",
            Self::BirthDate => "birth date",
        };
        f.write_str(name)
    }
}

/// A field rejected by its validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

/// Message of the first invalid result, in order.
pub fn first_error(results: impl IntoIterator<Item = ValidationResult>) -> Option<String> {
    results
        .into_iter()
        .find(|result| !result.valid)
        .map(|result| result.message.unwrap_or_default())
}

// =============================================================================
// VALIDATORS
// =============================================================================

pub fn validate_email(email: &str) -> ValidationResult {
    if EMAIL_REGEX.is_match(email.trim()) {
        ValidationResult::ok()
    } else {
        ValidationResult::invalid("Email tidak valid")
    }
}

pub fn validate_password(password: &str) -> ValidationResult {
    if password.chars().count() >= MIN_PASSWORD_LEN {
        ValidationResult::ok()
    } else {
        ValidationResult::invalid("Password minimal 6 karakter")
    }
}

pub fn validate_name(name: &str) -> ValidationResult {
    if name.trim().is_empty() {
        ValidationResult::invalid("Nama wajib diisi")
    } else {
        ValidationResult::ok()
    }
}

/// Plates are checked trimmed and uppercased.
pub fn validate_plate(plate: &str) -> ValidationResult {
    if PLATE_REGEX.is_match(&plate.trim().to_uppercase()) {
        ValidationResult::ok()
    } else {
        ValidationResult::invalid("Plat mobil tidak valid")
    }
}

/// Checks a phone number in E.164 form.
pub fn validate_phone(phone_e164: &str) -> ValidationResult {
    let phone = phone_e164.trim();
    if !phone.starts_with('+') {
        return ValidationResult::invalid("Kode negara wajib, contoh +62");
    }
    if PHONE_REGEX.is_match(phone) {
        ValidationResult::ok()
    } else {
        ValidationResult::invalid("Nomor telepon tidak valid")
    }
}

pub fn validate_confirmation(password: &str, confirmation: &str) -> ValidationResult {
    if password == confirmation {
        ValidationResult::ok()
    } else {
        ValidationResult::invalid("Konfirmasi password tidak sama")
    }
}

/// The birth date is optional; when given it must be `YYYY-MM-DD`.
pub fn validate_birth_date(birth_date: &str) -> ValidationResult {
    let birth_date = birth_date.trim();
    if birth_date.is_empty() || NaiveDate::parse_from_str(birth_date, "%Y-%m-%d").is_ok() {
        ValidationResult::ok()
    } else {
        ValidationResult::invalid("Tanggal lahir tidak valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_domain_and_tld() {
        assert!(validate_email("a@b.com").is_valid());
        assert!(validate_email("  first.last+tag@mail.ugm.ac.id ").is_valid());
        assert!(!validate_email("a@b").is_valid());
        assert!(!validate_email("a.b.com").is_valid());
        assert!(!validate_email("a@b.c").is_valid());
        assert_eq!(validate_email("").message(), Some("Email tidak valid"));
    }

    #[test]
    fn password_counts_characters() {
        assert!(validate_password("abcdef").is_valid());
        assert!(!validate_password("abcde").is_valid());
        assert!(validate_password("éééééé").is_valid());
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(!validate_name("   ").is_valid());
        assert!(validate_name("Barbara").is_valid());
    }

    #[test]
    fn plate_is_uppercased_before_matching() {
        assert!(validate_plate("ab 1234 cd").is_valid());
        assert!(validate_plate("  B-1234 ").is_valid());
        assert!(!validate_plate("AB1").is_valid());
        assert!(!validate_plate("AB#1234").is_valid());
    }

    #[test]
    fn phone_needs_country_code() {
        assert!(validate_phone("+628123456789").is_valid());
        assert_eq!(
            validate_phone("08123456789").message(),
            Some("Kode negara wajib, contoh +62")
        );
        assert_eq!(
            validate_phone("+62").message(),
            Some("Nomor telepon tidak valid")
        );
    }

    #[test]
    fn confirmation_must_match_exactly() {
        assert!(validate_confirmation("abcdef", "abcdef").is_valid());
        assert!(!validate_confirmation("abcdef", "abcdeF").is_valid());
    }

    #[test]
    fn birth_date_is_optional_iso() {
        assert!(validate_birth_date("").is_valid());
        assert!(validate_birth_date("2005-04-23").is_valid());
        assert!(!validate_birth_date("2005-02-30").is_valid());
        assert!(!validate_birth_date("23-04-2005").is_valid());
    }

    #[test]
    fn into_result_carries_field() {
        let err = validate_name("")
            .into_result(Field::Name)
            .unwrap_err();
        assert_eq!(err.field, Field::Name);
        assert_eq!(err.to_string(), "Nama wajib diisi");
        assert!(validate_name("x").into_result(Field::Name).is_ok());
    }

    #[test]
    fn first_error_follows_order() {
        let message = first_error([
            validate_name("Barbara"),
            validate_email("nope"),
            validate_password("x"),
        ]);
        assert_eq!(message.as_deref(), Some("Email tidak valid"));
        assert_eq!(first_error([validate_name("Barbara")]), None);
    }

    #[test]
    fn with_message_only_touches_invalid_results() {
        let invalid = validate_email("x").with_message("Email tidak valid.");
        assert_eq!(invalid.message(), Some("Email tidak valid."));
        assert_eq!(validate_email("a@b.com").with_message("x"), ValidationResult::ok());
    }
}
