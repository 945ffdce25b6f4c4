use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fingerprint::Fingerprint;

/// One client operation captured by the activity ledger.
///
/// Records are immutable once created and live in an ordered, never-mutated,
/// never-deleted log owned exclusively by the ledger. `previous` is the
/// fingerprint this subject rotated away from, or `None` for a fingerprint
/// that has not rolled over yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    /// The fingerprint in use at the time of the operation.
    pub subject: Fingerprint,
    /// The fingerprint it replaced, if any.
    pub previous: Option<Fingerprint>,
    /// Description of the operation the client performed.
    pub operation: String,
    /// UTC epoch seconds at which the ledger observed the operation.
    pub observed_at: i64,
}

impl OperationRecord {
    pub fn new(
        subject: Fingerprint,
        previous: Option<Fingerprint>,
        operation: impl Into<String>,
        observed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            subject,
            previous,
            operation: operation.into(),
            observed_at: observed_at.timestamp(),
        }
    }

    /// True for the first record of a lineage, before any rotation.
    pub fn is_genesis(&self) -> bool {
        self.previous.is_none()
    }

    pub fn observed_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.observed_at, 0)
    }
}
