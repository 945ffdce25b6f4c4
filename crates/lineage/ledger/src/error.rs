use lineage_token::TokenError;
use thiserror::Error;

/// Errors returned by the activity ledger interfaces.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The rotation assertion was rejected; nothing was stored and the
    /// caller owns retry policy.
    #[error("invalid rotation assertion: {0}")]
    InvalidToken(#[from] TokenError),

    /// A writer panicked while holding the record-log lock.
    #[error("record log lock poisoned")]
    LockPoisoned,
}
