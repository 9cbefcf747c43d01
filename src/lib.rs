#![forbid(unsafe_code)]
//! email_primitives — nettoyage, validation et canonicalisation d'adresses e-mail.
//!
//! Every scalar operation takes `impl Into<Option<&str>>` and propagates
//! absence: `None` in, `None` out. Rule-dependent operations read the
//! process-wide [`RuleTables`] (see [`rules::install`]) and also exist as
//! methods on `RuleTables` for callers that inject their own tables.

pub mod address;
pub mod identity;
pub mod normalize;
pub mod profile;
pub mod provider;
pub mod rules;
pub mod typo;
pub mod validator;

pub use address::{
    EmailParts, SplitError, extract_domain, extract_domain_name, extract_tld, extract_username,
    split_email,
};
pub use identity::{extract_name_from_email, mask_email};
pub use normalize::{
    get_canonical_email, has_plus_addressing, lowercase_email, normalize_gmail,
    remove_dots_from_gmail, remove_plus_addressing, remove_whitespace, standardize_email,
};
pub use profile::{EmailProfile, EmailQuality, QualitySummary, email_quality, profile_email};
pub use provider::{
    ProviderClass, ProviderClassification, classify_email, get_email_provider,
    is_corporate_email, is_disposable_email, is_free_email,
};
#[cfg(feature = "with-serde")]
pub use rules::RuleConfig;
pub use rules::{RuleTables, RuleTablesBuilder, RulesError};
pub use typo::fix_common_typos;
pub use validator::{
    ValidationReport, is_valid_domain, is_valid_email, is_valid_username, validate_email,
};
