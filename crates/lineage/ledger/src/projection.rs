use std::collections::HashMap;

use lineage_types::{CanonicalId, Fingerprint, OperationRecord};

/// Deterministic read-model builders over the record log.
pub struct ProjectionBuilder;

impl ProjectionBuilder {
    /// Fold the record log through the canonical-id mapping into per-client
    /// operation tallies.
    ///
    /// No time filter is applied by design: an operation performed under an
    /// earlier fingerprint still belongs to the client's persistent
    /// canonical identity. A subject missing from the mapping (degenerate
    /// cyclic input) falls back to its own fingerprint, so every record is
    /// tallied exactly once.
    pub fn operations_by_client(
        records: &[OperationRecord],
        canonical: &HashMap<Fingerprint, CanonicalId>,
    ) -> HashMap<CanonicalId, HashMap<String, u64>> {
        let mut result: HashMap<CanonicalId, HashMap<String, u64>> = HashMap::new();

        for record in records {
            let client = canonical
                .get(&record.subject)
                .cloned()
                .unwrap_or_else(|| record.subject.clone());

            *result
                .entry(client)
                .or_default()
                .entry(record.operation.clone())
                .or_insert(0) += 1;
        }

        result
    }
}
