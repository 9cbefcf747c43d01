use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::rules::{self, RuleTables};

use super::gmail::normalize_gmail;

/// Strip every whitespace character, surrounding or embedded.
///
/// Embedded whitespace is a defect, not formatting, so it is removed rather
/// than collapsed to a single space.
pub fn remove_whitespace<'a>(email: impl Into<Option<&'a str>>) -> Option<Cow<'a, str>> {
    let email = email.into()?;
    if !email.chars().any(char::is_whitespace) {
        return Some(Cow::Borrowed(email));
    }
    Some(Cow::Owned(
        email.chars().filter(|c| !c.is_whitespace()).collect(),
    ))
}

/// Lowercase the whole address, username included.
pub fn lowercase_email<'a>(email: impl Into<Option<&'a str>>) -> Option<Cow<'a, str>> {
    let email = email.into()?;
    let lowered = email.to_lowercase();
    if lowered == email {
        Some(Cow::Borrowed(email))
    } else {
        Some(Cow::Owned(lowered))
    }
}

impl RuleTables {
    /// NFKC fold (full-width `＠` and friends), strip whitespace, lowercase,
    /// then fix typos.
    pub fn standardize_email(&self, email: &str) -> String {
        let compact: String = email.nfkc().filter(|c| !c.is_whitespace()).collect();
        let lowered = compact.to_lowercase();
        self.fix_common_typos(&lowered).into_owned()
    }

    /// [`standardize_email`](Self::standardize_email) followed by the Gmail
    /// canonical form. Two inputs with the same result reach the same mailbox.
    pub fn canonical_email(&self, email: &str) -> String {
        let standardized = self.standardize_email(email);
        let canonical = normalize_gmail(standardized.as_str()).map(Cow::into_owned);
        canonical.unwrap_or(standardized)
    }
}

pub fn standardize_email<'a>(email: impl Into<Option<&'a str>>) -> Option<String> {
    let email = email.into()?;
    Some(rules::global().standardize_email(email))
}

pub fn get_canonical_email<'a>(email: impl Into<Option<&'a str>>) -> Option<String> {
    let email = email.into()?;
    Some(rules::global().canonical_email(email))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::is_valid_email;

    #[test]
    fn whitespace_removed_everywhere() {
        assert_eq!(remove_whitespace("  a@b.com  ").as_deref(), Some("a@b.com"));
        assert_eq!(
            remove_whitespace("   spaces in email@example.com   ").as_deref(),
            Some("spacesinemail@example.com")
        );
        assert_eq!(remove_whitespace("a\t@b.com\n").as_deref(), Some("a@b.com"));
        assert!(matches!(remove_whitespace("a@b.com"), Some(Cow::Borrowed(_))));
    }

    #[test]
    fn fixable_after_whitespace_removal() {
        let fixed = remove_whitespace("   spaces in email@example.com   ").unwrap();
        assert_eq!(is_valid_email(&*fixed), Some(true));
    }

    #[test]
    fn lowercases_username_too() {
        assert_eq!(
            lowercase_email("John.Doe@Example.COM").as_deref(),
            Some("john.doe@example.com")
        );
        assert!(matches!(lowercase_email("a@b.com"), Some(Cow::Borrowed(_))));
    }

    #[test]
    fn standardize_pipeline() {
        let tables = RuleTables::default();
        assert_eq!(tables.standardize_email(" John.Doe @GMAI.com "), "john.doe@gmail.com");
        assert_eq!(tables.standardize_email("ｊｏｈｎ＠ｅｘａｍｐｌｅ．ｃｏｍ"), "john@example.com");
        assert_eq!(tables.standardize_email("Person@Company.CMO"), "person@company.com");
    }

    #[test]
    fn canonical_merges_gmail_variants() {
        let tables = RuleTables::default();
        let expected = "johnsmith@gmail.com";
        for email in [
            "John.Smith@gmail.com",
            " johnsmith+newsletter@gmail.com",
            "john.smith+work+urgent@googlemail.com",
            "john.smith@gmai.com",
        ] {
            assert_eq!(tables.canonical_email(email), expected, "{email}");
        }
        assert_eq!(tables.canonical_email("User+Tag@Outlook.com"), "user+tag@outlook.com");
    }

    #[test]
    fn absent() {
        assert_eq!(remove_whitespace(None::<&str>), None);
        assert_eq!(lowercase_email(None::<&str>), None);
        assert_eq!(standardize_email(None::<&str>), None);
        assert_eq!(get_canonical_email(None::<&str>), None);
    }
}
