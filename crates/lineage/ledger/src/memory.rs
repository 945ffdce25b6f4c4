use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use lineage_graph::{resolve_canonical_ids, LineageGraph};
use lineage_token::{ClaimsExtractor, RotationVerifier};
use lineage_types::{CanonicalId, OperationRecord};
use tracing::{debug, warn};

use crate::error::LedgerError;
use crate::projection::ProjectionBuilder;
use crate::traits::{LedgerReader, LedgerWriter};

/// In-memory activity ledger: a flat append-only record log behind one
/// exclusive lock.
///
/// The flat `Vec` stands in for a future durable or tamper-evident backend;
/// swapping one in would not change the append/scan contract. There is no
/// reader/writer lock distinction and no cached derived state: every query
/// rebuilds the lineage graph from the records it can currently see, so
/// results are always consistent with the latest append at O(records) per
/// call. No blocking I/O happens under the lock.
pub struct InMemoryLedger {
    extractor: Arc<dyn ClaimsExtractor + Send + Sync>,
    records: Mutex<Vec<OperationRecord>>,
}

impl InMemoryLedger {
    /// Ledger accepting envelopes minted by `lineage_token::RotationSigner`.
    pub fn new() -> Self {
        Self::with_extractor(Arc::new(RotationVerifier::new()))
    }

    /// Ledger with an explicit claims-extraction collaborator.
    pub fn with_extractor(extractor: Arc<dyn ClaimsExtractor + Send + Sync>) -> Self {
        Self {
            extractor,
            records: Mutex::new(Vec::new()),
        }
    }

    /// Number of records stored so far.
    pub fn record_count(&self) -> Result<usize, LedgerError> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<OperationRecord>>, LedgerError> {
        self.records.lock().map_err(|_| LedgerError::LockPoisoned)
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerWriter for InMemoryLedger {
    fn append(
        &self,
        assertion: &[u8],
        operation: &str,
        observed_at: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        let mut records = self.lock()?;

        // Reject before anything is stored.
        let claims = match self.extractor.extract_claims(assertion) {
            Ok(claims) => claims,
            Err(error) => {
                warn!(%error, operation, "rejected rotation assertion");
                return Err(LedgerError::InvalidToken(error));
            }
        };

        debug!(
            subject = %claims.subject,
            rotation = claims.previous.is_some(),
            operation,
            "appending operation record"
        );
        records.push(OperationRecord::new(
            claims.subject,
            claims.previous,
            operation,
            observed_at,
        ));
        Ok(())
    }
}

impl LedgerReader for InMemoryLedger {
    fn total_clients(&self) -> Result<usize, LedgerError> {
        let records = self.lock()?;
        Ok(LineageGraph::from_records(records.iter(), None).sink_count())
    }

    fn recent_clients(&self, since: DateTime<Utc>) -> Result<usize, LedgerError> {
        let records = self.lock()?;
        let graph = LineageGraph::from_records(records.iter(), Some(since.timestamp()));
        Ok(graph.sink_count())
    }

    fn operations_by_client(
        &self,
    ) -> Result<HashMap<CanonicalId, HashMap<String, u64>>, LedgerError> {
        let records = self.lock()?;
        // Canonical identity is always resolved over the full history, never
        // a time window.
        let graph = LineageGraph::from_records(records.iter(), None);
        let canonical = resolve_canonical_ids(&graph);
        Ok(ProjectionBuilder::operations_by_client(&records, &canonical))
    }
}
