use std::collections::HashMap;

use lineage_types::{Fingerprint, OperationRecord};

use crate::ordered_set::OrderedSet;

/// Edge view for one fingerprint in one direction.
///
/// `Unlinked` means the node is known but has no edges in this direction; a
/// fingerprint absent from the map entirely is not part of the graph at all.
/// On the incoming side `Unlinked` marks a root (no observed predecessor);
/// on the outgoing side it marks a sink (a currently active identity).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Adjacency {
    Unlinked,
    Linked(OrderedSet),
}

impl Adjacency {
    pub fn is_unlinked(&self) -> bool {
        matches!(self, Adjacency::Unlinked)
    }

    /// Neighbors in first-insertion order; empty for `Unlinked`.
    pub fn neighbors(&self) -> &[Fingerprint] {
        match self {
            Adjacency::Unlinked => &[],
            Adjacency::Linked(set) => set.as_slice(),
        }
    }

    fn link(&mut self, value: Fingerprint) {
        if let Adjacency::Unlinked = self {
            *self = Adjacency::Linked(OrderedSet::new());
        }
        if let Adjacency::Linked(set) = self {
            set.insert(value);
        }
    }
}

/// Ephemeral rotation-link graph over the record log.
///
/// Rebuilt from scratch for every query so it is always consistent with the
/// latest append; identical input sequences produce identical graphs, which
/// canonical-identity resolution relies on.
#[derive(Clone, Debug, Default)]
pub struct LineageGraph {
    incoming: HashMap<Fingerprint, Adjacency>,
    outgoing: HashMap<Fingerprint, Adjacency>,
}

impl LineageGraph {
    /// Build the graph from records admitted by the optional time window.
    ///
    /// `since` is an inclusive lower bound in UTC epoch seconds. Filtering
    /// removes edges, not already-admitted subjects: a fingerprint whose only
    /// successor falls outside the window still registers as a sink.
    pub fn from_records<'a, I>(records: I, since: Option<i64>) -> Self
    where
        I: IntoIterator<Item = &'a OperationRecord>,
    {
        let mut graph = Self::default();
        for record in records {
            if let Some(cutoff) = since {
                if record.observed_at < cutoff {
                    continue;
                }
            }
            graph.admit(record);
        }
        graph
    }

    fn admit(&mut self, record: &OperationRecord) {
        // A subject with no edges must still appear in both maps, otherwise
        // orphan fingerprints would be missed by sink and root detection.
        self.incoming
            .entry(record.subject.clone())
            .or_insert(Adjacency::Unlinked);
        self.outgoing
            .entry(record.subject.clone())
            .or_insert(Adjacency::Unlinked);

        if let Some(previous) = &record.previous {
            self.outgoing
                .entry(previous.clone())
                .or_insert(Adjacency::Unlinked)
                .link(record.subject.clone());
            self.incoming
                .entry(record.subject.clone())
                .or_insert(Adjacency::Unlinked)
                .link(previous.clone());

            // A predecessor we never saw as a subject still needs an
            // incoming entry, so it is recognized as a root later.
            self.incoming
                .entry(previous.clone())
                .or_insert(Adjacency::Unlinked);
        }
    }

    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.outgoing.contains_key(fingerprint) || self.incoming.contains_key(fingerprint)
    }

    pub fn node_count(&self) -> usize {
        self.incoming.len()
    }

    /// Fingerprints with no observed predecessor.
    pub fn roots(&self) -> impl Iterator<Item = &Fingerprint> {
        self.incoming
            .iter()
            .filter(|(_, adjacency)| adjacency.is_unlinked())
            .map(|(fingerprint, _)| fingerprint)
    }

    /// Successors of a node in first-insertion order.
    pub fn successors(&self, node: &Fingerprint) -> &[Fingerprint] {
        self.outgoing
            .get(node)
            .map(Adjacency::neighbors)
            .unwrap_or(&[])
    }

    pub fn is_sink(&self, node: &Fingerprint) -> bool {
        self.outgoing
            .get(node)
            .is_some_and(Adjacency::is_unlinked)
    }

    /// Number of sinks. Each sink is one distinct, currently active client.
    pub fn sink_count(&self) -> usize {
        self.outgoing
            .values()
            .filter(|adjacency| adjacency.is_unlinked())
            .count()
    }
}
