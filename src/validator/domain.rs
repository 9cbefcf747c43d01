pub(crate) const MAX_LABEL_LEN: usize = 63;

/// Valide le domaine: labels ASCII + TLD alphabétique (>= 2).
/// Push des raisons invalidantes dans `reasons`.
pub(crate) fn check_domain(domain: &str, reasons: &mut Vec<String>) {
    if domain.is_empty() {
        reasons.push("domain is empty".to_string());
        return;
    }

    if domain.chars().any(char::is_whitespace) {
        reasons.push("domain contains whitespace".to_string());
    }

    // au moins un point
    let Some((_, tld)) = domain.rsplit_once('.') else {
        reasons.push("domain must contain at least one dot".to_string());
        return;
    };

    for label in domain.split('.') {
        if label.is_empty() {
            reasons.push("empty domain label".to_string());
            continue;
        }
        if label.len() > MAX_LABEL_LEN {
            reasons.push(format!(
                "domain label '{}' length {} > {MAX_LABEL_LEN}",
                label,
                label.len()
            ));
        }
        if label.starts_with('-') || label.ends_with('-') {
            reasons.push(format!(
                "domain label '{}' cannot start/end with '-'",
                label
            ));
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            reasons.push(format!("domain label '{}' has invalid chars", label));
        }
    }

    if !tld.is_empty() && (tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic())) {
        reasons.push(format!(
            "top-level domain '{tld}' must be alphabetic with at least 2 chars"
        ));
    }
}

pub(crate) fn domain_ok(domain: &str) -> bool {
    let mut reasons = Vec::new();
    check_domain(domain, &mut reasons);
    reasons.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_domain_ok() {
        let mut reasons = vec![];
        check_domain("example.com", &mut reasons);
        assert!(reasons.is_empty(), "{:?}", reasons);
        assert!(domain_ok("mail.example.co.uk"));
        assert!(domain_ok("my-company.io"));
    }

    #[test]
    fn label_too_long() {
        let long = "a".repeat(64);
        let mut reasons = vec![];
        check_domain(&format!("{}.com", long), &mut reasons);
        assert!(!reasons.is_empty());
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(!domain_ok("localhost"));
        assert!(!domain_ok("example..com"));
        assert!(!domain_ok(".example.com"));
        assert!(!domain_ok("example.com."));
        assert!(!domain_ok("-example.com"));
        assert!(!domain_ok("no_domain.com"));
        assert!(!domain_ok("example.c"));
        assert!(!domain_ok("example.c0m"));
        assert!(!domain_ok("example.com   "));
    }
}
