use lineage_types::Fingerprint;
use serde::{Deserialize, Serialize};

/// The two lineage-bearing claims plus the auxiliary fields carried by the
/// assertion format. Engine logic only consumes `subject` and `previous`;
/// the rest is screened (expiry) or ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationClaims {
    /// Fingerprint the client is asserting now.
    pub subject: Fingerprint,
    /// Fingerprint it rotated away from, absent for a fresh identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Fingerprint>,
    /// Rotation counter; no engine logic is based on this yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_no: Option<i64>,
    /// UTC epoch seconds the assertion was issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<i64>,
    /// UTC epoch seconds after which the assertion is rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl RotationClaims {
    /// Claims for a fingerprint that has not rolled over yet.
    pub fn genesis(subject: Fingerprint) -> Self {
        Self {
            subject,
            previous: None,
            sequence_no: None,
            issued_at: None,
            expires_at: None,
        }
    }

    /// Claims linking a new fingerprint to the one it replaces.
    pub fn rotation(previous: Fingerprint, subject: Fingerprint) -> Self {
        Self {
            subject,
            previous: Some(previous),
            sequence_no: None,
            issued_at: None,
            expires_at: None,
        }
    }

    pub fn with_sequence_no(mut self, sequence_no: i64) -> Self {
        self.sequence_no = Some(sequence_no);
        self
    }

    pub fn with_issued_at(mut self, issued_at: i64) -> Self {
        self.issued_at = Some(issued_at);
        self
    }

    pub fn with_expires_at(mut self, expires_at: i64) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// BLAKE3 digest of the canonical claims form. This is the value that
    /// gets signed, so the claims cannot be swapped under an old signature.
    pub fn digest(&self) -> [u8; 32] {
        let encoded = serde_json::to_vec(self).expect("claims serializable");
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"lineage-rotation-claims-v1:");
        hasher.update(&encoded);
        *hasher.finalize().as_bytes()
    }
}
