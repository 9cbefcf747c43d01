//! Canonicalization: provider-agnostic cleanup plus the Gmail-family rules.

mod general;
mod gmail;

pub use general::{get_canonical_email, lowercase_email, remove_whitespace, standardize_email};
pub(crate) use gmail::strip_tag;
pub use gmail::{
    GMAIL_CANONICAL_DOMAIN, GMAIL_FAMILY, has_plus_addressing, is_gmail_domain,
    normalize_gmail, remove_dots_from_gmail, remove_plus_addressing,
};
