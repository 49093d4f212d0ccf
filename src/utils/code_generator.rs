//! Shortcode generation and validation utilities.

use crate::config::MAX_VALIDITY_MINUTES;
use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of auto-generated shortcodes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Compiled regex for shortcode validation: 3-20 alphanumeric characters,
/// case-sensitive, no normalization.
static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{3,20}$").unwrap());

/// Generates a random 6-character alphanumeric shortcode.
///
/// Uniqueness is not guaranteed here; callers claim the code through the
/// registry's atomic create and retry on collision.
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a shortcode against the accepted format.
///
/// # Errors
///
/// Returns [`AppError::Validation`] unless the code is 3-20 alphanumeric
/// characters.
pub fn validate_shortcode(code: &str) -> Result<(), AppError> {
    if !SHORTCODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Shortcode must be 3-20 alphanumeric characters",
            json!({ "shortcode": code }),
        ));
    }

    Ok(())
}

/// Validates a validity period in minutes: at least one minute, at most
/// one calendar year.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when out of bounds.
pub fn validate_validity_minutes(minutes: i64) -> Result<(), AppError> {
    if minutes < 1 || minutes > MAX_VALIDITY_MINUTES {
        return Err(AppError::bad_request(
            "Validity must be between 1 and 525600 minutes",
            json!({ "validity": minutes }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), GENERATED_CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_is_alphanumeric() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generated_codes_pass_validation() {
        for _ in 0..100 {
            assert!(validate_shortcode(&generate_code()).is_ok());
        }
    }

    #[test]
    fn test_generate_code_rarely_collides() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        // 62^6 candidates; 1000 draws colliding would point at a broken RNG.
        assert!(codes.len() > 990);
    }

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(validate_shortcode("abc").is_ok());
        assert!(validate_shortcode("a".repeat(20).as_str()).is_ok());
        assert!(validate_shortcode("AbC123").is_ok());
        assert!(validate_shortcode("999").is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_lengths() {
        assert!(validate_shortcode("").is_err());
        assert!(validate_shortcode("ab").is_err());
        assert!(validate_shortcode("a".repeat(21).as_str()).is_err());
    }

    #[test]
    fn test_validate_rejects_non_alphanumeric() {
        assert!(validate_shortcode("abc-123").is_err());
        assert!(validate_shortcode("abc_123").is_err());
        assert!(validate_shortcode("abc 123").is_err());
        assert!(validate_shortcode("héllo").is_err());
        assert!(validate_shortcode("ab/12").is_err());
    }

    #[test]
    fn test_validate_is_case_sensitive_but_accepts_both_cases() {
        assert!(validate_shortcode("ABC").is_ok());
        assert!(validate_shortcode("abc").is_ok());
        assert!(validate_shortcode("aBc").is_ok());
    }

    #[test]
    fn test_validity_bounds() {
        assert!(validate_validity_minutes(0).is_err());
        assert!(validate_validity_minutes(-1).is_err());
        assert!(validate_validity_minutes(1).is_ok());
        assert!(validate_validity_minutes(30).is_ok());
        assert!(validate_validity_minutes(525_600).is_ok());
        assert!(validate_validity_minutes(525_601).is_err());
    }
}
