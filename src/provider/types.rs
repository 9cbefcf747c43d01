use std::fmt;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderClass {
    /// Independently operated domain.
    Corporate,
    Free,
    Disposable,
    /// Structurally invalid address or domain.
    Unknown,
}

impl ProviderClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Corporate => "corporate",
            Self::Free => "free",
            Self::Disposable => "disposable",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ProviderClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderClassification {
    pub class: ProviderClass,
    /// `gmail`, `10minutemail`, or the full domain for corporate addresses.
    pub provider: Option<String>,
}

impl ProviderClassification {
    pub(crate) fn unknown() -> Self {
        Self {
            class: ProviderClass::Unknown,
            provider: None,
        }
    }

    pub(crate) fn new(class: ProviderClass, provider: impl Into<String>) -> Self {
        Self {
            class,
            provider: Some(provider.into()),
        }
    }
}
