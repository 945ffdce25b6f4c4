use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::claims::RotationClaims;
use crate::error::TokenError;

/// Wire form of a signed rotation assertion.
///
/// Self-certifying: the signer's public key travels with the envelope and the
/// signature covers the BLAKE3 claims digest. The engine trusts the extracted
/// subject/previous pair once the structure and signature check out; deciding
/// whether the signer is *authorized* to link those fingerprints is outside
/// this crate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignedRotation {
    pub claims: RotationClaims,
    /// Hex-encoded BLAKE3 digest of the claims.
    pub digest: String,
    /// Hex-encoded Ed25519 signature over the digest.
    pub signature: String,
    /// Hex-encoded public key of the signer.
    pub public_key: String,
}

/// Claims-extraction capability consumed by the activity ledger.
pub trait ClaimsExtractor {
    /// Validate a raw assertion and surface its lineage claims.
    fn extract_claims(&self, raw: &[u8]) -> Result<RotationClaims, TokenError>;
}

/// Mints signed rotation envelopes. Used by clients and test fixtures.
pub struct RotationSigner {
    signing_key: SigningKey,
}

impl RotationSigner {
    pub fn generate() -> Self {
        let mut seed = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut seed);
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    pub fn public_key_hex(&self) -> String {
        hex_encode(self.signing_key.verifying_key().as_bytes())
    }

    /// Produce the raw envelope bytes for the given claims.
    pub fn mint(&self, claims: &RotationClaims) -> Vec<u8> {
        let digest = claims.digest();
        let signature = self.signing_key.sign(&digest);
        let envelope = SignedRotation {
            claims: claims.clone(),
            digest: hex_encode(&digest),
            signature: hex_encode(signature.to_bytes().as_slice()),
            public_key: self.public_key_hex(),
        };
        serde_json::to_vec(&envelope).expect("envelope serializable")
    }
}

/// Validates envelopes and extracts their claims.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotationVerifier;

impl RotationVerifier {
    pub fn new() -> Self {
        Self
    }

    fn verify_signature(envelope: &SignedRotation, digest: &[u8; 32]) -> Result<(), TokenError> {
        let sig_bytes =
            hex_decode(&envelope.signature).map_err(|_| TokenError::SignatureInvalid)?;
        let pk_bytes =
            hex_decode(&envelope.public_key).map_err(|_| TokenError::SignatureInvalid)?;

        let signature = Signature::from_bytes(
            sig_bytes
                .as_slice()
                .try_into()
                .map_err(|_| TokenError::SignatureInvalid)?,
        );
        let verifying_key = VerifyingKey::from_bytes(
            pk_bytes
                .as_slice()
                .try_into()
                .map_err(|_| TokenError::SignatureInvalid)?,
        )
        .map_err(|_| TokenError::SignatureInvalid)?;

        verifying_key
            .verify(digest, &signature)
            .map_err(|_| TokenError::SignatureInvalid)
    }
}

impl ClaimsExtractor for RotationVerifier {
    fn extract_claims(&self, raw: &[u8]) -> Result<RotationClaims, TokenError> {
        let envelope: SignedRotation =
            serde_json::from_slice(raw).map_err(|error| TokenError::Malformed(error.to_string()))?;

        if envelope.claims.subject.is_empty() {
            return Err(TokenError::MissingSubject);
        }

        let computed = envelope.claims.digest();
        let stated = hex_decode(&envelope.digest)
            .ok()
            .and_then(|bytes| <[u8; 32]>::try_from(bytes.as_slice()).ok())
            .ok_or_else(|| TokenError::Malformed("digest is not a 32-byte hex string".into()))?;
        if stated != computed {
            return Err(TokenError::DigestMismatch);
        }

        Self::verify_signature(&envelope, &computed)?;

        if let Some(expires_at) = envelope.claims.expires_at {
            if chrono::Utc::now().timestamp() > expires_at {
                return Err(TokenError::Expired(expires_at));
            }
        }

        let mut claims = envelope.claims;
        // Legacy assertions encode "no predecessor" as an empty string.
        if claims.previous.as_ref().is_some_and(|fp| fp.is_empty()) {
            claims.previous = None;
        }
        Ok(claims)
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn hex_decode(hex: &str) -> Result<Vec<u8>, ()> {
    if hex.len() % 2 != 0 {
        return Err(());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_types::Fingerprint;

    fn signer() -> RotationSigner {
        RotationSigner::from_seed([42u8; 32])
    }

    #[test]
    fn mint_then_extract_roundtrip() {
        let claims = RotationClaims::rotation(Fingerprint::new("A"), Fingerprint::new("B"))
            .with_sequence_no(1);
        let raw = signer().mint(&claims);

        let extracted = RotationVerifier::new().extract_claims(&raw).unwrap();
        assert_eq!(extracted, claims);
    }

    #[test]
    fn genesis_assertion_has_no_previous() {
        let raw = signer().mint(&RotationClaims::genesis(Fingerprint::new("A")));
        let extracted = RotationVerifier::new().extract_claims(&raw).unwrap();
        assert_eq!(extracted.subject.as_str(), "A");
        assert!(extracted.previous.is_none());
    }

    #[test]
    fn empty_previous_is_normalized_to_none() {
        let raw = signer().mint(&RotationClaims::rotation(
            Fingerprint::new(""),
            Fingerprint::new("A"),
        ));
        let extracted = RotationVerifier::new().extract_claims(&raw).unwrap();
        assert!(extracted.previous.is_none());
    }

    #[test]
    fn garbage_bytes_are_malformed() {
        let error = RotationVerifier::new()
            .extract_claims(b"not an envelope")
            .unwrap_err();
        assert!(matches!(error, TokenError::Malformed(_)));
    }

    #[test]
    fn empty_subject_is_rejected() {
        let raw = signer().mint(&RotationClaims::genesis(Fingerprint::new("")));
        let error = RotationVerifier::new().extract_claims(&raw).unwrap_err();
        assert_eq!(error, TokenError::MissingSubject);
    }

    #[test]
    fn tampered_claims_fail_the_digest_check() {
        let raw = signer().mint(&RotationClaims::genesis(Fingerprint::new("A")));
        let mut envelope: SignedRotation = serde_json::from_slice(&raw).unwrap();
        envelope.claims.subject = Fingerprint::new("Z");

        let tampered = serde_json::to_vec(&envelope).unwrap();
        let error = RotationVerifier::new().extract_claims(&tampered).unwrap_err();
        assert_eq!(error, TokenError::DigestMismatch);
    }

    #[test]
    fn restated_digest_without_resigning_fails_signature() {
        let raw = signer().mint(&RotationClaims::genesis(Fingerprint::new("A")));
        let mut envelope: SignedRotation = serde_json::from_slice(&raw).unwrap();
        envelope.claims.subject = Fingerprint::new("Z");
        envelope.digest = hex_encode(&envelope.claims.digest());

        let tampered = serde_json::to_vec(&envelope).unwrap();
        let error = RotationVerifier::new().extract_claims(&tampered).unwrap_err();
        assert_eq!(error, TokenError::SignatureInvalid);
    }

    #[test]
    fn expired_assertion_is_rejected() {
        let claims = RotationClaims::genesis(Fingerprint::new("A")).with_expires_at(1_000);
        let raw = signer().mint(&claims);
        let error = RotationVerifier::new().extract_claims(&raw).unwrap_err();
        assert_eq!(error, TokenError::Expired(1_000));
    }

    #[test]
    fn unexpired_assertion_is_accepted() {
        let future = chrono::Utc::now().timestamp() + 3_600;
        let claims = RotationClaims::genesis(Fingerprint::new("A")).with_expires_at(future);
        let raw = signer().mint(&claims);
        assert!(RotationVerifier::new().extract_claims(&raw).is_ok());
    }

    #[test]
    fn distinct_signers_both_verify() {
        // Trust in the signer is out of scope; any structurally valid
        // envelope with a correct signature is accepted.
        let claims = RotationClaims::genesis(Fingerprint::new("A"));
        let raw_a = RotationSigner::from_seed([1u8; 32]).mint(&claims);
        let raw_b = RotationSigner::from_seed([2u8; 32]).mint(&claims);
        let verifier = RotationVerifier::new();
        assert!(verifier.extract_claims(&raw_a).is_ok());
        assert!(verifier.extract_claims(&raw_b).is_ok());
    }
}
