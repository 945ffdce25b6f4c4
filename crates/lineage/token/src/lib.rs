//! Signed rotation assertions.
//!
//! A client asserts each fingerprint rotation by minting a `SignedRotation`
//! envelope: the lineage claims, a BLAKE3 digest of their canonical form, and
//! an Ed25519 signature over that digest with the signer's public key
//! embedded. This crate provides:
//! - the `RotationClaims` payload (subject, optional previous, auxiliary
//!   fields)
//! - `RotationSigner` for minting envelopes
//! - `RotationVerifier`, the `ClaimsExtractor` capability the activity
//!   ledger consumes

pub mod claims;
pub mod envelope;
pub mod error;

pub use claims::RotationClaims;
pub use envelope::{ClaimsExtractor, RotationSigner, RotationVerifier, SignedRotation};
pub use error::TokenError;

#[cfg(test)]
mod tests {
    use super::{ClaimsExtractor, RotationClaims, RotationSigner, RotationVerifier};
    use lineage_types::Fingerprint;

    #[test]
    fn crate_api_mints_and_extracts() {
        let signer = RotationSigner::generate();
        let raw = signer.mint(&RotationClaims::rotation(
            Fingerprint::new("old"),
            Fingerprint::new("new"),
        ));
        let claims = RotationVerifier::new().extract_claims(&raw).unwrap();
        assert_eq!(claims.subject.as_str(), "new");
        assert_eq!(claims.previous.unwrap().as_str(), "old");
    }
}
