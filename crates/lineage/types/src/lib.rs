//! Core type definitions for the lineage engine.
//!
//! This crate provides the shared identifiers (`Fingerprint`, `CanonicalId`)
//! and the immutable `OperationRecord` appended to the activity ledger.

pub mod fingerprint;
pub mod record;

// Re-export primary types at crate root for ergonomic use.
pub use fingerprint::{CanonicalId, Fingerprint};
pub use record::OperationRecord;

#[cfg(test)]
mod tests {
    use super::Fingerprint;

    #[test]
    fn fingerprint_is_available() {
        let _ = Fingerprint::new("erf-0");
    }
}
