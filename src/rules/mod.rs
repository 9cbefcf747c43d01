//! Immutable rule tables: typo corrections plus free and disposable domains.
//!
//! Tables are built once, validated, then shared read-only. Rule-dependent
//! operations are methods on [`RuleTables`]. The crate-level free functions
//! use the process-wide tables from [`global`], which is either what
//! [`install`] received or the compiled-in defaults.

mod builder;
#[cfg(feature = "with-serde")]
mod config;
mod defaults;
mod error;

pub use builder::RuleTablesBuilder;
#[cfg(feature = "with-serde")]
pub use config::RuleConfig;
pub use error::RulesError;

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

static GLOBAL: OnceLock<RuleTables> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTables {
    typo_domains: HashMap<String, String>,
    typo_tlds: HashMap<String, String>,
    free_domains: HashSet<String>,
    disposable_domains: HashSet<String>,
}

impl Default for RuleTables {
    /// Compiled-in tables (checked by the builder tests).
    fn default() -> Self {
        Self::from_parts(
            owned_map(&defaults::TYPO_DOMAINS),
            owned_map(&defaults::TYPO_TLDS),
            owned_set(&defaults::FREE_DOMAINS),
            owned_set(&defaults::DISPOSABLE_DOMAINS),
        )
    }
}

impl RuleTables {
    pub fn builder() -> RuleTablesBuilder {
        RuleTablesBuilder::new()
    }

    pub(crate) fn from_parts(
        typo_domains: HashMap<String, String>,
        typo_tlds: HashMap<String, String>,
        free_domains: HashSet<String>,
        disposable_domains: HashSet<String>,
    ) -> Self {
        Self {
            typo_domains,
            typo_tlds,
            free_domains,
            disposable_domains,
        }
    }

    /// Corrected form of a whole (lowercase) domain, if it is a known typo.
    pub fn correct_domain(&self, domain: &str) -> Option<&str> {
        self.typo_domains.get(domain).map(String::as_str)
    }

    /// Corrected form of a (lowercase, dotless) TLD, if it is a known typo.
    pub fn correct_tld(&self, tld: &str) -> Option<&str> {
        self.typo_tlds.get(tld).map(String::as_str)
    }

    /// Exact match against the free-provider set.
    pub fn free_entry(&self, domain: &str) -> Option<&str> {
        self.free_domains.get(domain).map(String::as_str)
    }

    /// Exact or label-boundary suffix match against the disposable set:
    /// `inbox.yopmail.com` matches `yopmail.com`, `notyopmail.com` does not.
    pub fn disposable_entry(&self, domain: &str) -> Option<&str> {
        let mut candidate = domain;
        loop {
            if let Some(entry) = self.disposable_domains.get(candidate) {
                return Some(entry.as_str());
            }
            match candidate.split_once('.') {
                Some((_, rest)) if rest.contains('.') => candidate = rest,
                _ => return None,
            }
        }
    }

    pub fn typo_domain_count(&self) -> usize {
        self.typo_domains.len()
    }

    pub fn typo_tld_count(&self) -> usize {
        self.typo_tlds.len()
    }

    pub fn free_domain_count(&self) -> usize {
        self.free_domains.len()
    }

    pub fn disposable_domain_count(&self) -> usize {
        self.disposable_domains.len()
    }
}

/// Process-wide tables. The first call freezes the defaults if nothing was
/// installed before.
pub fn global() -> &'static RuleTables {
    GLOBAL.get_or_init(|| {
        #[cfg(feature = "with-tracing")]
        tracing::debug!("no rule tables installed, using compiled-in defaults");
        RuleTables::default()
    })
}

/// Install `tables` as the process-wide tables.
///
/// Must run before any global read. A second call, or a call after the
/// defaults were frozen by [`global`], fails with
/// [`RulesError::AlreadyInstalled`].
pub fn install(tables: RuleTables) -> Result<&'static RuleTables, RulesError> {
    GLOBAL
        .set(tables)
        .map_err(|_| RulesError::AlreadyInstalled)?;

    let installed = global();
    #[cfg(feature = "with-tracing")]
    tracing::debug!(
        typo_domains = installed.typo_domain_count(),
        free_domains = installed.free_domain_count(),
        disposable_domains = installed.disposable_domain_count(),
        "rule tables installed"
    );
    Ok(installed)
}

fn owned_map(map: &phf::Map<&'static str, &'static str>) -> HashMap<String, String> {
    map.entries()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn owned_set(set: &phf::Set<&'static str>) -> HashSet<String> {
    set.iter().map(|d| (*d).to_string()).collect()
}
