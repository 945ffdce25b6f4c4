use serde::{Deserialize, Serialize};

/// Opaque rotating identity token exposed by a client.
///
/// The fingerprint is the node identity in the lineage graph. The engine
/// treats it as an uninterpreted unique string; nothing is derived from its
/// contents.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(pub String);

/// Stable identity assigned to a lineage or sub-lineage.
///
/// A canonical id is always the fingerprint value of the node that started
/// the lineage, so it shares the fingerprint representation.
pub type CanonicalId = Fingerprint;

impl Fingerprint {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Fingerprint {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Fingerprint {
    fn from(value: String) -> Self {
        Self(value)
    }
}
