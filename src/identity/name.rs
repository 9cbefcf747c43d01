use crate::address::split_email;
use crate::normalize::strip_tag;

fn is_name_separator(c: char) -> bool {
    matches!(c, '.' | '_' | '-') || c.is_whitespace()
}

/// Un token de nom plausible: au moins 2 caractères, pas uniquement des chiffres.
fn is_name_token(token: &str) -> bool {
    token.chars().nth(1).is_some() && !token.chars().all(|c| c.is_ascii_digit())
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Best-effort display name from the username: `john.doe+news` gives
/// `John Doe`. Handles that carry no name-like token give `""`.
pub fn extract_name_from_email<'a>(email: impl Into<Option<&'a str>>) -> Option<String> {
    let email = email.into()?;
    let Ok(parts) = split_email(email.trim()) else {
        return Some(String::new());
    };

    let tokens: Vec<String> = strip_tag(parts.username)
        .split(is_name_separator)
        .filter(|token| is_name_token(token))
        .map(title_case)
        .collect();
    Some(tokens.join(" "))
}
