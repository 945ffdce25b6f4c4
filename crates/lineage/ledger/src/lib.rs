//! Activity ledger over rotating client fingerprints.
//!
//! This crate provides:
//! - reader/writer trait boundaries for appending signed rotation assertions
//!   and querying client counts
//! - an in-memory ledger implementation (flat append-only record log behind
//!   one exclusive lock)
//! - the per-client operation projection built through canonical-identity
//!   resolution
//!
//! Everything is synchronous: each call runs to completion under the lock
//! with no background tasks and no I/O, and every query is recomputed from
//! the current record log rather than served from a cache. That is a
//! deliberate scalability ceiling suitable for moderate record volumes.

pub mod error;
pub mod memory;
pub mod projection;
pub mod traits;

pub use error::LedgerError;
pub use memory::InMemoryLedger;
pub use projection::ProjectionBuilder;
pub use traits::{LedgerReader, LedgerWriter};
