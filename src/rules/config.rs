use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{RuleTables, RuleTablesBuilder, RulesError};

/// JSON shape of a rules file.
///
/// ```json
/// {
///   "extend_defaults": true,
///   "typo_domains": { "gmaiil.com": "gmail.com" },
///   "typo_tlds": { ".cpm": ".com" },
///   "free_domains": ["example-mail.com"],
///   "disposable_domains": ["burner.example"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    /// Merge on top of the compiled-in tables instead of replacing them.
    pub extend_defaults: bool,
    pub typo_domains: BTreeMap<String, String>,
    pub typo_tlds: BTreeMap<String, String>,
    pub free_domains: Vec<String>,
    pub disposable_domains: Vec<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            extend_defaults: true,
            typo_domains: BTreeMap::new(),
            typo_tlds: BTreeMap::new(),
            free_domains: Vec::new(),
            disposable_domains: Vec::new(),
        }
    }
}

impl RuleConfig {
    pub fn into_builder(self) -> RuleTablesBuilder {
        let mut builder = if self.extend_defaults {
            RuleTablesBuilder::new().with_defaults()
        } else {
            RuleTablesBuilder::new()
        };
        for (from, to) in &self.typo_domains {
            builder = builder.typo_domain(from, to);
        }
        for (from, to) in &self.typo_tlds {
            builder = builder.typo_tld(from, to);
        }
        builder
            .free_domains(&self.free_domains)
            .disposable_domains(&self.disposable_domains)
    }
}

impl RuleTables {
    pub fn from_config(config: RuleConfig) -> Result<Self, RulesError> {
        config.into_builder().build()
    }

    pub fn from_json_str(json: &str) -> Result<Self, RulesError> {
        let config: RuleConfig = serde_json::from_str(json).map_err(RulesError::json)?;
        Self::from_config(config)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| RulesError::io(path.display().to_string(), source))?;
        Self::from_json_str(&json)
    }
}
