//! Lineage graph reconstruction and canonical identity resolution.
//!
//! This crate provides:
//! - `OrderedSet`, an insertion-order-preserving set of fingerprints
//! - `LineageGraph`, incoming/outgoing adjacency views rebuilt from the
//!   record log per query, with an optional time window
//! - `resolve_canonical_ids`, the traversal assigning every fingerprint a
//!   canonical client identity
//!
//! The graph is a pure derived view: it holds no state of its own and costs
//! O(records) to build, which keeps every query consistent with the latest
//! append at the price of linear recomputation.

pub mod canonical;
pub mod graph;
pub mod ordered_set;

pub use canonical::resolve_canonical_ids;
pub use graph::{Adjacency, LineageGraph};
pub use ordered_set::OrderedSet;
