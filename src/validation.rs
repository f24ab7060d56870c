//! Form Validation
//!
//! Dialog submissions run through these before any success toast.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::FormError;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

/// Reject blank input. Returns the trimmed value.
pub fn require_non_empty<'a>(label: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::EmptyField(label));
    }
    Ok(trimmed)
}

/// Blank check, then a loose `something@something.something` check
pub fn validate_email(value: &str) -> Result<&str, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::EmptyEmail);
    }
    if !email_regex().is_match(trimmed) {
        return Err(FormError::InvalidEmail);
    }
    Ok(trimmed)
}

/// Number input parse, falling back to `default` for blank or junk input
pub fn parse_quantity(value: &str, default: u32) -> u32 {
    value.trim().parse::<u32>().ok().filter(|q| *q >= 1).unwrap_or(default)
}

/// Fractional quantity for inventory dialogs; negatives are rejected
pub fn parse_amount(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|q| q.is_finite() && *q >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        for input in ["", "   ", "\t\n"] {
            let err = require_non_empty("Category name", input).unwrap_err();
            assert_eq!(err, FormError::EmptyField("Category name"));
            assert_eq!(err.to_string(), "Category name cannot be empty");
        }
        assert_eq!(require_non_empty("Item name", "  Milk ").unwrap(), "Milk");
    }

    #[test]
    fn email_checks() {
        assert_eq!(validate_email(" ").unwrap_err(), FormError::EmptyEmail);
        for bad in ["jane", "jane@example", "@.", "jane@.com"] {
            assert_eq!(validate_email(bad).unwrap_err(), FormError::InvalidEmail, "{bad}");
        }
        for good in ["jane@example.com", "a@b.co", " tom@mail.example.org "] {
            assert!(validate_email(good).is_ok(), "{good}");
        }
    }

    #[test]
    fn quantity_parsing_falls_back() {
        assert_eq!(parse_quantity("3", 1), 3);
        assert_eq!(parse_quantity("", 1), 1);
        assert_eq!(parse_quantity("abc", 1), 1);
        assert_eq!(parse_quantity("0", 1), 1);
        assert_eq!(parse_amount("0.5"), Some(0.5));
        assert_eq!(parse_amount("-1"), None);
    }
}
