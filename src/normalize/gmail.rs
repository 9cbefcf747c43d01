use std::borrow::Cow;

use crate::address::{SEPARATOR, split_email};

/// Domains routed to the same Gmail mailboxes.
pub const GMAIL_FAMILY: [&str; 2] = ["gmail.com", "googlemail.com"];

/// Domain used in canonical Gmail addresses.
pub const GMAIL_CANONICAL_DOMAIN: &str = "gmail.com";

pub fn is_gmail_domain(domain: &str) -> bool {
    let domain = domain.trim();
    GMAIL_FAMILY.iter().any(|g| domain.eq_ignore_ascii_case(g))
}

/// Byte offset of the first `+` not preceded by a backslash.
fn first_unescaped_plus(username: &str) -> Option<usize> {
    let mut escaped = false;
    for (idx, c) in username.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '+' if !escaped => return Some(idx),
            _ => escaped = false,
        }
    }
    None
}

/// Username cut at its plus tag. A leading `+` is not a tag: cutting there
/// would leave an empty username.
pub(crate) fn strip_tag(username: &str) -> &str {
    match first_unescaped_plus(username) {
        Some(idx) if idx > 0 => &username[..idx],
        _ => username,
    }
}

pub fn has_plus_addressing<'a>(email: impl Into<Option<&'a str>>) -> Option<bool> {
    let email = email.into()?;
    Some(
        split_email(email.trim())
            .is_ok_and(|parts| first_unescaped_plus(parts.username).is_some()),
    )
}

/// Drop the `+tag` of the username, for any provider.
pub fn remove_plus_addressing<'a>(email: impl Into<Option<&'a str>>) -> Option<Cow<'a, str>> {
    let email = email.into()?;
    let Ok(parts) = split_email(email) else {
        return Some(Cow::Borrowed(email));
    };
    let username = strip_tag(parts.username);
    if username.len() == parts.username.len() {
        return Some(Cow::Borrowed(email));
    }
    Some(Cow::Owned(format!("{username}{SEPARATOR}{}", parts.domain)))
}

/// Remove every `.` from the username of a Gmail-family address. Other
/// domains are left alone.
pub fn remove_dots_from_gmail<'a>(email: impl Into<Option<&'a str>>) -> Option<Cow<'a, str>> {
    let email = email.into()?;
    let Ok(parts) = split_email(email) else {
        return Some(Cow::Borrowed(email));
    };
    if !is_gmail_domain(parts.domain) || !parts.username.contains('.') {
        return Some(Cow::Borrowed(email));
    }
    let username = parts.username.replace('.', "");
    if username.is_empty() {
        return Some(Cow::Borrowed(email));
    }
    Some(Cow::Owned(format!("{username}{SEPARATOR}{}", parts.domain)))
}

/// Canonical Gmail identity: dots removed, plus tag dropped, lowercased,
/// and `googlemail.com` folded into `gmail.com`.
///
/// `a.b.c@gmail.com`, `abc@gmail.com` and `ABC+x@googlemail.com` all map to
/// `abc@gmail.com`. Non-Gmail input comes back unchanged.
pub fn normalize_gmail<'a>(email: impl Into<Option<&'a str>>) -> Option<Cow<'a, str>> {
    let email = email.into()?;
    let Ok(parts) = split_email(email.trim()) else {
        return Some(Cow::Borrowed(email));
    };
    if !is_gmail_domain(parts.domain) {
        return Some(Cow::Borrowed(email));
    }

    // les points tombent avant la recherche du tag: `a\.+b` garde `a\+b`.
    // ". a" devient " a" : on retrim après chaque coupe
    let undotted: String = parts.username.chars().filter(|c| *c != '.').collect();
    let username = strip_tag(undotted.trim()).trim().to_lowercase();
    if username.is_empty() {
        return Some(Cow::Borrowed(email));
    }

    let canonical = format!("{username}{SEPARATOR}{GMAIL_CANONICAL_DOMAIN}");
    if canonical == email {
        Some(Cow::Borrowed(email))
    } else {
        Some(Cow::Owned(canonical))
    }
}
