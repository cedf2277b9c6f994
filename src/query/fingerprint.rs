//! Content fingerprints for compiled specifications.

use sha2::{Digest, Sha256};

use super::spec::QuerySpecification;

impl QuerySpecification {
    /// SHA-256 of the compact JSON serialization, as 64 lowercase hex chars.
    ///
    /// Two specifications compiled from the same diagram and configs have
    /// the same fingerprint.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }
}
