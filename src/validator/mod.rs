mod domain;
mod local;
mod types;

pub use types::ValidationReport;

pub(crate) use domain::domain_ok;

use crate::address::split_email;
use domain::check_domain;
use local::{check_username, username_ok};

/// RFC 5321 path limit, separator included.
pub const MAX_EMAIL_LEN: usize = 254;

/// Full report: every rule the raw input violates, in order.
///
/// The input is *not* trimmed. Surrounding whitespace is fixable but
/// still invalid.
pub fn validate_email(email: &str) -> ValidationReport {
    let mut reasons = Vec::new();

    if email.len() > MAX_EMAIL_LEN {
        reasons.push(format!("total length {} > {MAX_EMAIL_LEN}", email.len()));
    }

    let trimmed = email.trim();
    if trimmed.len() != email.len() {
        reasons.push("leading/trailing whitespace".to_string());
    }
    if trimmed.chars().any(char::is_whitespace) {
        reasons.push("embedded whitespace".to_string());
    }

    let parts = match split_email(email) {
        Ok(parts) => parts,
        Err(err) => {
            reasons.push(err.to_string());
            return ValidationReport { ok: false, reasons };
        }
    };

    check_username(parts.username, &mut reasons);
    check_domain(parts.domain, &mut reasons);

    let ok = reasons.is_empty();
    ValidationReport { ok, reasons }
}

pub fn is_valid_email<'a>(email: impl Into<Option<&'a str>>) -> Option<bool> {
    let email = email.into()?;
    Some(validate_email(email).ok)
}

/// Validity of the username half only. An unsplittable input is `false`.
pub fn is_valid_username<'a>(email: impl Into<Option<&'a str>>) -> Option<bool> {
    let email = email.into()?;
    Some(split_email(email).is_ok_and(|parts| username_ok(parts.username)))
}

/// Validity of the domain half only. An unsplittable input is `false`.
pub fn is_valid_domain<'a>(email: impl Into<Option<&'a str>>) -> Option<bool> {
    let email = email.into()?;
    Some(split_email(email).is_ok_and(|parts| domain_ok(parts.domain)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_basic() {
        let r = validate_email("alice@example.com");
        assert!(r.ok, "{:?}", r.reasons);
        assert_eq!(is_valid_email("john.doe@gmail.com"), Some(true));
    }

    #[test]
    fn rejects_double_at() {
        let r = validate_email("a@@b.com");
        assert!(!r.ok);
        assert!(r.reasons.iter().any(|r| r.contains("exactly one '@'")));
        assert_eq!(is_valid_email("user@domain@extra.com"), Some(false));
        assert_eq!(is_valid_username("user@domain@extra.com"), Some(false));
        assert_eq!(is_valid_domain("user@domain@extra.com"), Some(false));
    }

    #[test]
    fn untrimmed_input_is_invalid() {
        let r = validate_email("  a@b.com  ");
        assert!(!r.ok);
        assert_eq!(r.reasons[0], "leading/trailing whitespace");
        assert!(!r.reasons.iter().any(|r| r.contains("embedded")));
        assert_eq!(is_valid_email("a@b.com"), Some(true));
    }

    #[test]
    fn embedded_whitespace() {
        let r = validate_email("   spaces in email@example.com   ");
        assert!(!r.ok);
        assert!(r.reasons.iter().any(|r| r == "embedded whitespace"));
        assert_eq!(is_valid_username("spaces in email@example.com"), Some(false));
        assert_eq!(is_valid_domain("spaces in email@example.com"), Some(true));
    }

    #[test]
    fn halves_are_judged_independently() {
        assert_eq!(is_valid_username("@no_username.com"), Some(false));
        assert_eq!(is_valid_domain("@no_username.com"), Some(false));
        assert_eq!(is_valid_username("john@example.cmo"), Some(true));
        assert_eq!(is_valid_domain("john..doe@example.com"), Some(true));
        assert_eq!(is_valid_username("john..doe@example.com"), Some(false));
    }

    #[test]
    fn length_limit() {
        let domain = format!("{}.{}.{}.com", "a".repeat(63), "b".repeat(63), "c".repeat(63));
        let email = format!("{}@{domain}", "u".repeat(60));
        assert!(email.len() > MAX_EMAIL_LEN);
        assert_eq!(is_valid_email(email.as_str()), Some(false));
    }

    #[test]
    fn empty_and_absent() {
        assert_eq!(is_valid_email(""), Some(false));
        assert_eq!(is_valid_email(None::<&str>), None);
        assert_eq!(is_valid_username(None::<&str>), None);
        assert_eq!(is_valid_domain(None::<&str>), None);
    }
}
