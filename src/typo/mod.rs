//! Exact-match typo correction on the domain half.
//!
//! The TLD table runs first (`company.cmo` -> `company.com`), then the whole
//! domain table (`gmai.com` -> `gmail.com`). Because corrections are terminal
//! (enforced by the builder), one pass reaches the fixed point.

use std::borrow::Cow;

use crate::address::{SEPARATOR, split_email};
use crate::rules::{self, RuleTables};

impl RuleTables {
    /// Corrected domain, or `None` when no rule matches. Matching ignores
    /// ASCII case. A TLD-only fix keeps the case of the rest of the domain.
    pub fn fix_domain(&self, domain: &str) -> Option<String> {
        let tld_fixed = domain.rsplit_once('.').and_then(|(name, tld)| {
            self.correct_tld(&tld.to_ascii_lowercase())
                .map(|good| format!("{name}.{good}"))
        });

        let current = tld_fixed.as_deref().unwrap_or(domain);
        match self.correct_domain(&current.to_ascii_lowercase()) {
            Some(good) => Some(good.to_string()),
            None => tld_fixed,
        }
    }

    /// Fix the domain half of `email`, leaving the username and any
    /// surrounding whitespace verbatim. Unsplittable input comes back
    /// unchanged.
    pub fn fix_common_typos<'a>(&self, email: &'a str) -> Cow<'a, str> {
        let Ok(parts) = split_email(email) else {
            return Cow::Borrowed(email);
        };

        let domain = parts.domain.trim_end();
        let trailing = &parts.domain[domain.len()..];
        match self.fix_domain(domain) {
            Some(fixed) => Cow::Owned(format!(
                "{}{SEPARATOR}{fixed}{trailing}",
                parts.username
            )),
            None => Cow::Borrowed(email),
        }
    }
}

/// [`RuleTables::fix_common_typos`] against the process-wide tables.
pub fn fix_common_typos<'a>(email: impl Into<Option<&'a str>>) -> Option<Cow<'a, str>> {
    let email = email.into()?;
    Some(rules::global().fix_common_typos(email))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::is_valid_email;

    fn fix(email: &str) -> String {
        RuleTables::default().fix_common_typos(email).into_owned()
    }

    #[test]
    fn fixes_provider_domains() {
        assert_eq!(fix("john.doe@gmai.com"), "john.doe@gmail.com");
        assert_eq!(fix("jane.smith@gmial.com"), "jane.smith@gmail.com");
        assert_eq!(fix("bob@yahooo.com"), "bob@yahoo.com");
        assert_eq!(fix("alice@hotmial.com"), "alice@hotmail.com");
        assert_eq!(fix("user@outlok.com"), "user@outlook.com");
    }

    #[test]
    fn fixes_tlds() {
        assert_eq!(fix("person@company.cmo"), "person@company.com");
        assert_eq!(fix("admin@business.ent"), "admin@business.net");
        assert_eq!(fix("contact@organization.rog"), "contact@organization.org");
    }

    #[test]
    fn tld_then_domain() {
        assert_eq!(fix("x@gmai.cmo"), "x@gmail.com");
    }

    #[test]
    fn case_insensitive_and_username_untouched() {
        assert_eq!(fix("John.Doe@GMAI.com"), "John.Doe@gmail.com");
        assert_eq!(fix("Person@Company.CMO"), "Person@Company.com");
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        assert_eq!(fix("  bob@yahooo.com  "), "  bob@yahoo.com  ");
    }

    #[test]
    fn no_match_borrows_input() {
        let tables = RuleTables::default();
        assert!(matches!(
            tables.fix_common_typos("user@example.com"),
            Cow::Borrowed("user@example.com")
        ));
        assert!(matches!(
            tables.fix_common_typos("double@@gmai.com"),
            Cow::Borrowed(_)
        ));
        assert!(matches!(tables.fix_common_typos(""), Cow::Borrowed("")));
    }

    #[test]
    fn only_exact_domains_match() {
        assert_eq!(fix("a@mail.gmai.com"), "a@mail.gmai.com");
        assert_eq!(fix("a@gmai.community"), "a@gmai.community");
    }

    #[test]
    fn fixed_address_validates() {
        let fixed = fix_common_typos("john.doe@gmai.com").unwrap();
        assert_eq!(fixed, "john.doe@gmail.com");
        assert_eq!(is_valid_email(&*fixed), Some(true));
    }

    #[test]
    fn idempotent_on_samples() {
        for email in ["x@gmai.cmo", "Person@Company.CMO", "bob@yahooo.com", "a b@c"] {
            let once = fix(email);
            assert_eq!(fix(&once), once);
        }
    }

    #[test]
    fn absent() {
        assert_eq!(fix_common_typos(None::<&str>), None);
    }
}
