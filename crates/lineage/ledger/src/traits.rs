use std::collections::HashMap;

use chrono::{DateTime, Utc};
use lineage_types::CanonicalId;

use crate::error::LedgerError;

/// Write boundary for the activity ledger.
pub trait LedgerWriter {
    /// Validate a signed rotation assertion and append one operation record.
    ///
    /// On rejection the record log is left untouched and the underlying
    /// cause is surfaced as `LedgerError::InvalidToken`.
    fn append(
        &self,
        assertion: &[u8],
        operation: &str,
        observed_at: DateTime<Utc>,
    ) -> Result<(), LedgerError>;
}

/// Read boundary for the activity ledger.
///
/// Every query recomputes its view from the current record log, so results
/// are always consistent with the latest append. Queries are total over the
/// domain: an empty ledger yields zero counts and empty mappings.
pub trait LedgerReader {
    /// Number of distinct clients across the whole recorded history.
    fn total_clients(&self) -> Result<usize, LedgerError>;

    /// Number of clients with activity at or after `since`.
    fn recent_clients(&self, since: DateTime<Utc>) -> Result<usize, LedgerError>;

    /// Per-client operation tallies over the whole history, keyed by
    /// canonical identity and operation name.
    fn operations_by_client(
        &self,
    ) -> Result<HashMap<CanonicalId, HashMap<String, u64>>, LedgerError>;
}
