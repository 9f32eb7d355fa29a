use serde::{Deserialize, Serialize};
use std::fmt;

use crate::algorithm::Algorithm;
use crate::error::{JsonHashError, Result};

/// Lowercase hex rendering of a canonical digest
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexDigest(String);

impl HexDigest {
    /// Wrap raw digest bytes
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        HexDigest(hex::encode(bytes))
    }

    /// Parse from hex string
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        if Algorithm::from_hex_len(hex.len()).is_none() {
            return Err(JsonHashError::InvalidDigest(format!(
                "digest must be 40, 64 or 128 hex characters, got {}",
                hex.len()
            )));
        }
        hex::decode(hex)
            .map_err(|_| JsonHashError::InvalidDigest("invalid hex encoding".to_string()))?;
        Ok(HexDigest(hex.to_lowercase()))
    }

    /// Algorithm that produces digests of this length
    pub fn algorithm(&self) -> Option<Algorithm> {
        Algorithm::from_hex_len(self.0.len())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
