//! Provider classification: free, disposable, corporate or unknown.

mod types;

pub use types::{ProviderClass, ProviderClassification};

use crate::address::split_email;
use crate::rules::{self, RuleTables};
use crate::validator::domain_ok;

impl RuleTables {
    /// Classify the (trimmed) address by its domain.
    ///
    /// Disposable wins over free when a domain sits in both sets.
    pub fn classify(&self, email: &str) -> ProviderClassification {
        let Ok(parts) = split_email(email.trim()) else {
            return ProviderClassification::unknown();
        };
        if !domain_ok(parts.domain) {
            return ProviderClassification::unknown();
        }

        let domain = parts.domain.to_ascii_lowercase();
        if let Some(entry) = self.disposable_entry(&domain) {
            ProviderClassification::new(ProviderClass::Disposable, first_label(entry))
        } else if let Some(entry) = self.free_entry(&domain) {
            ProviderClassification::new(ProviderClass::Free, first_label(entry))
        } else {
            ProviderClassification::new(ProviderClass::Corporate, domain)
        }
    }

    pub fn get_email_provider(&self, email: &str) -> String {
        self.classify(email).provider.unwrap_or_default()
    }

    pub fn is_corporate_email(&self, email: &str) -> bool {
        self.classify(email).class == ProviderClass::Corporate
    }

    pub fn is_free_email(&self, email: &str) -> bool {
        self.classify(email).class == ProviderClass::Free
    }

    pub fn is_disposable_email(&self, email: &str) -> bool {
        self.classify(email).class == ProviderClass::Disposable
    }
}

fn first_label(domain: &str) -> &str {
    domain.split('.').next().unwrap_or(domain)
}

pub fn classify_email<'a>(email: impl Into<Option<&'a str>>) -> Option<ProviderClassification> {
    let email = email.into()?;
    Some(rules::global().classify(email))
}

/// Provider name, `""` for an unclassifiable address.
pub fn get_email_provider<'a>(email: impl Into<Option<&'a str>>) -> Option<String> {
    let email = email.into()?;
    Some(rules::global().get_email_provider(email))
}

pub fn is_corporate_email<'a>(email: impl Into<Option<&'a str>>) -> Option<bool> {
    let email = email.into()?;
    Some(rules::global().is_corporate_email(email))
}

pub fn is_free_email<'a>(email: impl Into<Option<&'a str>>) -> Option<bool> {
    let email = email.into()?;
    Some(rules::global().is_free_email(email))
}

pub fn is_disposable_email<'a>(email: impl Into<Option<&'a str>>) -> Option<bool> {
    let email = email.into()?;
    Some(rules::global().is_disposable_email(email))
}
