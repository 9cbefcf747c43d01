/// RFC 5321 local-part limit.
pub(crate) const MAX_USERNAME_LEN: usize = 64;

/// Letters, digits and `. _ + -`.
fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-')
}

/// Pousse dans `reasons` chaque règle violée par le username.
pub(crate) fn check_username(local: &str, reasons: &mut Vec<String>) {
    if local.is_empty() {
        reasons.push("username is empty".to_string());
        return;
    }
    if local.len() > MAX_USERNAME_LEN {
        reasons.push(format!(
            "username length {} invalid (1..={MAX_USERNAME_LEN})",
            local.len()
        ));
    }
    if local.chars().any(char::is_whitespace) {
        reasons.push("username contains whitespace".to_string());
    }
    if local.starts_with('.') || local.ends_with('.') {
        reasons.push("username cannot start/end with '.'".to_string());
    }
    if local.contains("..") {
        reasons.push("username contains consecutive dots".to_string());
    }
    if let Some(bad) = local
        .chars()
        .filter(|c| !c.is_whitespace())
        .find(|c| !is_username_char(*c))
    {
        reasons.push(format!("username has invalid char '{bad}'"));
    }
}

pub(crate) fn username_ok(local: &str) -> bool {
    let mut reasons = Vec::new();
    check_username(local, &mut reasons);
    reasons.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots() {
        assert!(!username_ok(".abc"));
        assert!(!username_ok("abc."));
        assert!(!username_ok("a..b"));
        assert!(username_ok("a.b"));
    }

    #[test]
    fn allowed_charset() {
        assert!(username_ok("john_doe+news-2024"));
        assert!(!username_ok("john!doe"));
        assert!(!username_ok("\"quoted\""));
        assert!(!username_ok("jöhn"));
    }

    #[test]
    fn whitespace_reported_once() {
        let mut reasons = vec![];
        check_username("spaces in email", &mut reasons);
        assert_eq!(reasons, vec!["username contains whitespace".to_string()]);
    }

    #[test]
    fn too_long() {
        assert!(username_ok(&"a".repeat(64)));
        assert!(!username_ok(&"a".repeat(65)));
    }
}
