use crate::address::{SEPARATOR, split_email};

/// Fixed width, whatever the username length.
pub const MASK: &str = "***";

/// First username character, a fixed mask, then the domain verbatim:
/// `john@example.com` gives `j***@example.com`. A one-character username is
/// masked entirely. Unsplittable input gives `""`.
pub fn mask_email<'a>(email: impl Into<Option<&'a str>>) -> Option<String> {
    let email = email.into()?;
    let Ok(parts) = split_email(email.trim()) else {
        return Some(String::new());
    };

    let mut chars = parts.username.chars();
    let masked = match (chars.next(), chars.next()) {
        (Some(first), Some(_)) => format!("{first}{MASK}{SEPARATOR}{}", parts.domain),
        _ => format!("{MASK}{SEPARATOR}{}", parts.domain),
    };
    Some(masked)
}
