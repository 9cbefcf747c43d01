use thiserror::Error;

/// Structural failure of the lexical split. This is a value, not a fault:
/// every caller routes it to an "invalid"/empty result.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    #[error("input is empty")]
    Empty,
    #[error("must contain exactly one '@' (none found)")]
    MissingSeparator,
    #[error("must contain exactly one '@' ({0} found)")]
    MultipleSeparators(usize),
    #[error("username before '@' is empty")]
    EmptyUsername,
    #[error("domain after '@' is empty")]
    EmptyDomain,
}
