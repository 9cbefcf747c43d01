//! Lexical split of a raw address into username and domain.
//!
//! Nothing here trims or lowercases: [`split_email`] sees the input exactly as
//! given so the validator can tell "needs trimming" apart from "broken". The
//! `extract_*` helpers are the lenient variants and work on the trimmed input.

mod error;

pub use error::SplitError;

pub const SEPARATOR: char = '@';

/// Borrowed view over the two halves of a structurally parseable address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailParts<'a> {
    pub username: &'a str,
    pub domain: &'a str,
}

impl<'a> EmailParts<'a> {
    /// Domain minus its last label (`mail.example.com` -> `mail.example`).
    pub fn domain_name(&self) -> &'a str {
        self.domain
            .rsplit_once('.')
            .map(|(name, _)| name)
            .unwrap_or_default()
    }

    /// Last label of the domain, without the dot.
    pub fn tld(&self) -> &'a str {
        self.domain
            .rsplit_once('.')
            .map(|(_, tld)| tld)
            .unwrap_or_default()
    }

    pub fn to_address(&self) -> String {
        format!("{}{SEPARATOR}{}", self.username, self.domain)
    }
}

/// Split `raw` around its single `@`.
///
/// Zero or several separators, or an empty side, is a [`SplitError`].
/// Whitespace is left untouched.
pub fn split_email(raw: &str) -> Result<EmailParts<'_>, SplitError> {
    if raw.is_empty() {
        return Err(SplitError::Empty);
    }

    match raw.matches(SEPARATOR).count() {
        0 => return Err(SplitError::MissingSeparator),
        1 => {}
        n => return Err(SplitError::MultipleSeparators(n)),
    }

    let (username, domain) = raw
        .split_once(SEPARATOR)
        .ok_or(SplitError::MissingSeparator)?;
    if username.is_empty() {
        return Err(SplitError::EmptyUsername);
    }
    if domain.is_empty() {
        return Err(SplitError::EmptyDomain);
    }

    Ok(EmailParts { username, domain })
}

fn extract_with<'a>(
    email: impl Into<Option<&'a str>>,
    pick: impl FnOnce(EmailParts<'a>) -> &'a str,
) -> Option<&'a str> {
    let email = email.into()?;
    Some(split_email(email.trim()).map(pick).unwrap_or_default())
}

/// Username of the trimmed input, `""` when the input cannot be split.
pub fn extract_username<'a>(email: impl Into<Option<&'a str>>) -> Option<&'a str> {
    extract_with(email, |parts| parts.username)
}

/// Domain of the trimmed input, `""` when the input cannot be split.
pub fn extract_domain<'a>(email: impl Into<Option<&'a str>>) -> Option<&'a str> {
    extract_with(email, |parts| parts.domain)
}

pub fn extract_domain_name<'a>(email: impl Into<Option<&'a str>>) -> Option<&'a str> {
    extract_with(email, |parts| parts.domain_name())
}

pub fn extract_tld<'a>(email: impl Into<Option<&'a str>>) -> Option<&'a str> {
    extract_with(email, |parts| parts.tld())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_single_separator() {
        let parts = split_email("john.doe@example.com").unwrap();
        assert_eq!(parts.username, "john.doe");
        assert_eq!(parts.domain, "example.com");
        assert_eq!(parts.to_address(), "john.doe@example.com");
    }

    #[test]
    fn structural_failures() {
        assert_eq!(split_email(""), Err(SplitError::Empty));
        assert_eq!(
            split_email("missing_at_symbol.com"),
            Err(SplitError::MissingSeparator)
        );
        assert_eq!(
            split_email("double@@symbol.com"),
            Err(SplitError::MultipleSeparators(2))
        );
        assert_eq!(
            split_email("user@domain@extra.com"),
            Err(SplitError::MultipleSeparators(2))
        );
        assert_eq!(
            split_email("@no_username.com"),
            Err(SplitError::EmptyUsername)
        );
        assert_eq!(split_email("no_domain@"), Err(SplitError::EmptyDomain));
    }

    #[test]
    fn whitespace_is_kept_by_split() {
        let parts = split_email("  a b@example.com ").unwrap();
        assert_eq!(parts.username, "  a b");
        assert_eq!(parts.domain, "example.com ");
    }

    #[test]
    fn extractors_trim_and_preserve_case() {
        assert_eq!(extract_username("  John@Example.COM "), Some("John"));
        assert_eq!(extract_domain("  John@Example.COM "), Some("Example.COM"));
        assert_eq!(extract_domain_name("a@mail.example.co.uk"), Some("mail.example.co"));
        assert_eq!(extract_tld("a@mail.example.co.uk"), Some("uk"));
    }

    #[test]
    fn extractors_on_broken_input() {
        assert_eq!(extract_username("missing_at_symbol.com"), Some(""));
        assert_eq!(extract_domain("a@@b.com"), Some(""));
        assert_eq!(extract_tld("user@localhost"), Some(""));
        assert_eq!(extract_domain_name("user@localhost"), Some(""));
    }

    #[test]
    fn absent_in_absent_out() {
        assert_eq!(extract_username(None::<&str>), None);
        assert_eq!(extract_domain(None::<&str>), None);
        assert_eq!(extract_domain_name(None::<&str>), None);
        assert_eq!(extract_tld(None::<&str>), None);
    }
}
