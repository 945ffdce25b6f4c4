use thiserror::Error;

/// Reasons a rotation assertion is rejected before anything is stored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed assertion: {0}")]
    Malformed(String),

    #[error("assertion is missing a subject fingerprint")]
    MissingSubject,

    #[error("claims digest does not match the signed payload")]
    DigestMismatch,

    #[error("assertion signature is invalid")]
    SignatureInvalid,

    #[error("assertion expired at epoch second {0}")]
    Expired(i64),
}
