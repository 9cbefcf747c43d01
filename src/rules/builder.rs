use std::collections::{BTreeMap, BTreeSet};

use super::{RuleTables, RulesError, defaults};

const TYPO_DOMAINS: &str = "typo_domains";
const TYPO_TLDS: &str = "typo_tlds";
const FREE_DOMAINS: &str = "free_domains";
const DISPOSABLE_DOMAINS: &str = "disposable_domains";

/// Accumulates entries, then checks them all at once in [`build`](Self::build).
///
/// Entries are trimmed and lowercased on insertion. A leading dot on a TLD is
/// dropped, so `".cmo"` and `"cmo"` are the same rule.
#[derive(Debug, Clone, Default)]
pub struct RuleTablesBuilder {
    typo_domains: BTreeMap<String, String>,
    typo_tlds: BTreeMap<String, String>,
    free_domains: BTreeSet<String>,
    disposable_domains: BTreeSet<String>,
}

impl RuleTablesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder with the compiled-in tables.
    pub fn with_defaults(mut self) -> Self {
        for (from, to) in defaults::TYPO_DOMAINS.entries() {
            self = self.typo_domain(*from, *to);
        }
        for (from, to) in defaults::TYPO_TLDS.entries() {
            self = self.typo_tld(*from, *to);
        }
        self = self.free_domains(defaults::FREE_DOMAINS.iter().copied());
        self.disposable_domains(defaults::DISPOSABLE_DOMAINS.iter().copied())
    }

    pub fn typo_domain(mut self, from: impl AsRef<str>, to: impl AsRef<str>) -> Self {
        self.typo_domains
            .insert(clean_domain(from.as_ref()), clean_domain(to.as_ref()));
        self
    }

    pub fn typo_tld(mut self, from: impl AsRef<str>, to: impl AsRef<str>) -> Self {
        self.typo_tlds
            .insert(clean_tld(from.as_ref()), clean_tld(to.as_ref()));
        self
    }

    pub fn free_domain(mut self, domain: impl AsRef<str>) -> Self {
        self.free_domains.insert(clean_domain(domain.as_ref()));
        self
    }

    pub fn free_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for domain in domains {
            self = self.free_domain(domain);
        }
        self
    }

    pub fn disposable_domain(mut self, domain: impl AsRef<str>) -> Self {
        self.disposable_domains.insert(clean_domain(domain.as_ref()));
        self
    }

    pub fn disposable_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for domain in domains {
            self = self.disposable_domain(domain);
        }
        self
    }

    /// Validate every entry and freeze the tables.
    ///
    /// Corrections must be terminal: a corrected domain is never itself a
    /// typo key, and its TLD is never a TLD typo key. This is what makes
    /// `fix_common_typos` idempotent.
    pub fn build(self) -> Result<RuleTables, RulesError> {
        for (from, to) in &self.typo_domains {
            check_domain_entry(TYPO_DOMAINS, from)?;
            check_domain_entry(TYPO_DOMAINS, to)?;
            if from == to {
                return Err(RulesError::invalid(TYPO_DOMAINS, from, "maps to itself"));
            }
            if self.typo_domains.contains_key(to) {
                return Err(RulesError::chain(TYPO_DOMAINS, from, to));
            }
            let tld = to.rsplit_once('.').map(|(_, tld)| tld).unwrap_or_default();
            if self.typo_tlds.contains_key(tld) {
                return Err(RulesError::chain(TYPO_DOMAINS, from, to));
            }
        }

        for (from, to) in &self.typo_tlds {
            check_tld_entry(from)?;
            check_tld_entry(to)?;
            if !to.chars().all(|c| c.is_ascii_alphabetic()) || to.len() < 2 {
                return Err(RulesError::invalid(TYPO_TLDS, to, "not an alphabetic TLD"));
            }
            if from == to {
                return Err(RulesError::invalid(TYPO_TLDS, from, "maps to itself"));
            }
            if self.typo_tlds.contains_key(to) {
                return Err(RulesError::chain(TYPO_TLDS, from, to));
            }
        }

        for domain in &self.free_domains {
            check_domain_entry(FREE_DOMAINS, domain)?;
        }
        for domain in &self.disposable_domains {
            check_domain_entry(DISPOSABLE_DOMAINS, domain)?;
        }

        let tables = RuleTables::from_parts(
            self.typo_domains.into_iter().collect(),
            self.typo_tlds.into_iter().collect(),
            self.free_domains.into_iter().collect(),
            self.disposable_domains.into_iter().collect(),
        );

        #[cfg(feature = "with-tracing")]
        tracing::debug!(
            typo_domains = tables.typo_domain_count(),
            typo_tlds = tables.typo_tld_count(),
            free_domains = tables.free_domain_count(),
            disposable_domains = tables.disposable_domain_count(),
            "rule tables built"
        );

        Ok(tables)
    }
}

fn clean_domain(entry: &str) -> String {
    entry.trim().to_ascii_lowercase()
}

fn clean_tld(entry: &str) -> String {
    entry.trim().trim_start_matches('.').to_ascii_lowercase()
}

fn check_common(table: &'static str, entry: &str) -> Result<(), RulesError> {
    if entry.is_empty() {
        return Err(RulesError::EmptyEntry { table });
    }
    if entry.chars().any(char::is_whitespace) {
        return Err(RulesError::invalid(table, entry, "contains whitespace"));
    }
    if entry.contains('@') {
        return Err(RulesError::invalid(table, entry, "contains '@'"));
    }
    Ok(())
}

fn check_domain_entry(table: &'static str, entry: &str) -> Result<(), RulesError> {
    check_common(table, entry)?;
    if !entry.contains('.') || entry.starts_with('.') || entry.ends_with('.') {
        return Err(RulesError::invalid(table, entry, "not a dotted domain"));
    }
    Ok(())
}

fn check_tld_entry(entry: &str) -> Result<(), RulesError> {
    check_common(TYPO_TLDS, entry)?;
    if entry.contains('.') {
        return Err(RulesError::invalid(TYPO_TLDS, entry, "TLD cannot contain '.'"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        let built = RuleTablesBuilder::new().with_defaults().build().expect("defaults are valid");
        assert_eq!(built, RuleTables::default());
    }

    #[test]
    fn entries_are_cleaned() {
        let tables = RuleTablesBuilder::new()
            .typo_domain("  GMAI.com ", "Gmail.COM")
            .typo_tld(".CMO", ".com")
            .build()
            .unwrap();
        assert_eq!(tables.correct_domain("gmai.com"), Some("gmail.com"));
        assert_eq!(tables.correct_tld("cmo"), Some("com"));
    }

    #[test]
    fn rejects_domain_chain() {
        let err = RuleTablesBuilder::new()
            .typo_domain("gmial.com", "gmai.com")
            .typo_domain("gmai.com", "gmail.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, RulesError::CorrectionChain { .. }), "{err}");
    }

    #[test]
    fn rejects_correction_into_tld_typo() {
        let err = RuleTablesBuilder::new()
            .typo_domain("gmai.com", "gmail.cmo")
            .typo_tld("cmo", "com")
            .build()
            .unwrap_err();
        assert!(matches!(err, RulesError::CorrectionChain { .. }));
    }

    #[test]
    fn rejects_tld_chain() {
        let err = RuleTablesBuilder::new()
            .typo_tld("cmo", "con")
            .typo_tld("con", "com")
            .build()
            .unwrap_err();
        assert!(matches!(err, RulesError::CorrectionChain { .. }));
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(matches!(
            RuleTablesBuilder::new().free_domain("   ").build(),
            Err(RulesError::EmptyEntry { table: "free_domains" })
        ));
        assert!(matches!(
            RuleTablesBuilder::new().disposable_domain("temp@mail.com").build(),
            Err(RulesError::InvalidEntry { .. })
        ));
        assert!(matches!(
            RuleTablesBuilder::new().disposable_domain("localhost").build(),
            Err(RulesError::InvalidEntry { .. })
        ));
        assert!(matches!(
            RuleTablesBuilder::new().typo_tld("c.om", "com").build(),
            Err(RulesError::InvalidEntry { .. })
        ));
        assert!(matches!(
            RuleTablesBuilder::new().typo_tld("cmo", "c0m").build(),
            Err(RulesError::InvalidEntry { .. })
        ));
    }
}
