use std::fmt;

use crate::provider::ProviderClass;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailQuality {
    Valid,
    /// Invalid as given, valid once standardized.
    Fixable,
    Invalid,
}

impl EmailQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Fixable => "fixable",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for EmailQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every derivation of one input, computed against one set of tables.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailProfile {
    pub original: String,
    pub valid: bool,
    pub reasons: Vec<String>,
    pub quality: EmailQuality,
    pub valid_username: bool,
    pub valid_domain: bool,
    pub username: String,
    pub domain: String,
    pub domain_name: String,
    pub tld: String,
    pub fixed: String,
    pub standardized: String,
    pub canonical: String,
    pub has_plus: bool,
    pub class: ProviderClass,
    pub provider: String,
    pub name: String,
    pub masked: String,
}

/// Valid / fixable / invalid counts over a batch.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualitySummary {
    pub total: usize,
    pub valid: usize,
    pub fixable: usize,
    pub invalid: usize,
}

impl QualitySummary {
    pub fn record(&mut self, quality: EmailQuality) {
        self.total += 1;
        match quality {
            EmailQuality::Valid => self.valid += 1,
            EmailQuality::Fixable => self.fixable += 1,
            EmailQuality::Invalid => self.invalid += 1,
        }
    }
}

impl FromIterator<EmailQuality> for QualitySummary {
    fn from_iter<I: IntoIterator<Item = EmailQuality>>(iter: I) -> Self {
        let mut summary = Self::default();
        for quality in iter {
            summary.record(quality);
        }
        summary
    }
}
