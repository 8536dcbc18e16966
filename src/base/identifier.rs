use std::sync::Arc;

use super::constants::GENERATED_ID_PREFIX;

/// Globally unique identifier of an Identifiable.
///
/// Unique only within the root collection the Identifiable lives in
/// (shells, submodels or concept descriptions).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(pub Arc<str>);

impl Identifier {
    /// Create a new identifier.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh `urn:uuid:` identifier.
    pub fn generate() -> Self {
        Self(format!("{GENERATED_ID_PREFIX}{}", uuid::Uuid::new_v4()).into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
