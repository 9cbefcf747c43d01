//! One-pass profile of an address, and the valid/fixable/invalid split.

mod types;

pub use types::{EmailProfile, EmailQuality, QualitySummary};

use crate::address::split_email;
use crate::identity::{extract_name_from_email, mask_email};
use crate::normalize::{has_plus_addressing, normalize_gmail};
use crate::rules::{self, RuleTables};
use crate::validator::{is_valid_domain, is_valid_username, validate_email};

impl RuleTables {
    pub fn quality(&self, email: &str) -> EmailQuality {
        if validate_email(email).ok {
            return EmailQuality::Valid;
        }
        quality_of(false, &self.standardize_email(email))
    }

    pub fn profile(&self, email: &str) -> EmailProfile {
        let report = validate_email(email);
        let standardized = self.standardize_email(email);
        let quality = quality_of(report.ok, &standardized);

        let (username, domain, domain_name, tld) = match split_email(email.trim()) {
            Ok(parts) => (
                parts.username.to_string(),
                parts.domain.to_string(),
                parts.domain_name().to_string(),
                parts.tld().to_string(),
            ),
            Err(_) => Default::default(),
        };

        let canonical = normalize_gmail(standardized.as_str())
            .map(|c| c.into_owned())
            .unwrap_or_default();
        let classification = self.classify(email);

        EmailProfile {
            original: email.to_string(),
            valid: report.ok,
            reasons: report.reasons,
            quality,
            valid_username: is_valid_username(email).unwrap_or_default(),
            valid_domain: is_valid_domain(email).unwrap_or_default(),
            username,
            domain,
            domain_name,
            tld,
            fixed: self.fix_common_typos(email).into_owned(),
            standardized,
            canonical,
            has_plus: has_plus_addressing(email).unwrap_or_default(),
            class: classification.class,
            provider: classification.provider.unwrap_or_default(),
            name: extract_name_from_email(email).unwrap_or_default(),
            masked: mask_email(email).unwrap_or_default(),
        }
    }

    pub fn summarize<'a, I>(&self, emails: I) -> QualitySummary
    where
        I: IntoIterator<Item = &'a str>,
    {
        emails.into_iter().map(|email| self.quality(email)).collect()
    }
}

/// `standardized` is only validated when the raw input failed.
fn quality_of(raw_ok: bool, standardized: &str) -> EmailQuality {
    if raw_ok {
        EmailQuality::Valid
    } else if validate_email(standardized).ok {
        EmailQuality::Fixable
    } else {
        EmailQuality::Invalid
    }
}

pub fn profile_email<'a>(email: impl Into<Option<&'a str>>) -> Option<EmailProfile> {
    let email = email.into()?;
    Some(rules::global().profile(email))
}

pub fn email_quality<'a>(email: impl Into<Option<&'a str>>) -> Option<EmailQuality> {
    let email = email.into()?;
    Some(rules::global().quality(email))
}
