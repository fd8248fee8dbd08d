//! Client-side input validation
//!
//! Only email shape and password length are checked here. Uniqueness is the
//! endpoint's job.

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

use super::error::{RegistrationError, RegistrationResult};
use super::input::RegistrationInput;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 8;

const EMAIL_PATTERN: &str = r"^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        // ASCII only: Unicode case folding would let `[A-Z]` match K (U+212A)
        RegexBuilder::new(EMAIL_PATTERN)
            .case_insensitive(true)
            .unicode(false)
            .build()
            .unwrap_or_else(|e| panic!("email pattern must compile: {e}"))
    })
}

/// `local@domain.tld`, final label at least two letters, any case
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Check the input before anything is sent. The first failing rule wins.
pub fn validate(input: &RegistrationInput) -> RegistrationResult<()> {
    if !is_valid_email(&input.email) {
        return Err(RegistrationError::InvalidEmail);
    }

    if !is_valid_password(&input.password) {
        return Err(RegistrationError::InvalidPassword);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        for email in [
            "ada@example.com",
            "ADA.LOVELACE@EXAMPLE.ORG",
            "first+tag@mail.example.co.uk",
            "a_b%c-d@sub-domain.io",
            "x@y.museum",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "ada@",
            "ada@example",
            "ada@example.c",
            "ada@example.c0m",
            "ada example@test.com",
            "ada@exa mple.com",
            "ada@@example.com",
            " ada@example.com",
            "ada@example.com ",
            "ada@example.\u{212A}\u{212A}",
            "\u{17F}@example.com",
            "ada@\u{212A}.io",
            "ada@exämple.com",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be invalid");
        }
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(!is_valid_password(""));
        assert!(!is_valid_password("1234567"));
        assert!(is_valid_password("12345678"));
        // Counted in characters, not bytes
        assert!(!is_valid_password("ééééééé"));
        assert!(is_valid_password("éééééééé"));
    }

    #[test]
    fn test_email_checked_first() {
        let input = RegistrationInput::new("not-an-email", "short");
        assert!(matches!(validate(&input), Err(RegistrationError::InvalidEmail)));
    }

    #[test]
    fn test_short_password() {
        let input = RegistrationInput::new("ada@example.com", "short");
        assert!(matches!(validate(&input), Err(RegistrationError::InvalidPassword)));
    }

    #[test]
    fn test_profile_fields_not_validated() {
        let input = RegistrationInput::new("ada@example.com", "longenough");
        assert!(validate(&input).is_ok());
    }
}
