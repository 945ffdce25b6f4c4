use std::collections::HashMap;

use lineage_types::{CanonicalId, Fingerprint};

use crate::graph::LineageGraph;

/// Partition the lineage forest into canonical client identities.
///
/// Every root seeds a depth-first walk carried on an explicit stack of
/// `(node, inherited id)` frames, so arbitrarily long rotation chains cannot
/// overflow the call stack. Each visited node maps to the id it inherited.
/// Of a node's successors, taken in first-insertion order, the first one
/// continues the same lineage (a routine rotation); every subsequent one is
/// a branch and starts a fresh lineage keyed by its own fingerprint.
///
/// Run this over the full, unfiltered graph: canonical identity is a
/// property of the whole recorded history, not of a time window.
///
/// A node already resolved is never revisited. In a forest every node has
/// one parent and the guard changes nothing; it is what makes the walk
/// terminate when a rotation cycle is reachable from a root, which a
/// correctly signed assertion sequence can produce.
pub fn resolve_canonical_ids(graph: &LineageGraph) -> HashMap<Fingerprint, CanonicalId> {
    let mut result = HashMap::new();

    for root in graph.roots() {
        let mut stack: Vec<(Fingerprint, CanonicalId)> = vec![(root.clone(), root.clone())];

        while let Some((node, id)) = stack.pop() {
            if result.contains_key(&node) {
                continue;
            }
            result.insert(node.clone(), id.clone());

            for (index, child) in graph.successors(&node).iter().enumerate() {
                let child_id = if index == 0 { id.clone() } else { child.clone() };
                stack.push((child.clone(), child_id));
            }
        }
    }

    result
}
