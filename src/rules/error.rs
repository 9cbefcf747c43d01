use thiserror::Error;

/// Configuration errors. Raised once while building or installing the
/// tables, never per address.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("{table}: empty entry")]
    EmptyEntry { table: &'static str },
    #[error("{table}: invalid entry '{entry}' ({reason})")]
    InvalidEntry {
        table: &'static str,
        entry: String,
        reason: &'static str,
    },
    #[error("{table}: correction '{from}' -> '{to}' feeds another rule ('{to}' is itself corrected)")]
    CorrectionChain {
        table: &'static str,
        from: String,
        to: String,
    },
    #[error("rule tables already installed or already in use")]
    AlreadyInstalled,
    #[error("cannot read rules file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[cfg(feature = "with-serde")]
    #[error("malformed rules JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

impl RulesError {
    pub(crate) fn invalid(table: &'static str, entry: &str, reason: &'static str) -> Self {
        Self::InvalidEntry {
            table,
            entry: entry.to_string(),
            reason,
        }
    }

    pub(crate) fn chain(table: &'static str, from: &str, to: &str) -> Self {
        Self::CorrectionChain {
            table,
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[cfg(feature = "with-serde")]
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    #[cfg(feature = "with-serde")]
    pub(crate) fn json(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}
