use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::JsonHashError;

/// Digest function used at every level of the canonical hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// SHA-1, 160-bit
    Sha1,
    /// SHA-256, 256-bit
    #[default]
    Sha256,
    /// SHA-512, 512-bit
    Sha512,
}

impl Algorithm {
    /// All supported algorithms, weakest first
    pub fn all() -> &'static [Algorithm] {
        &[Algorithm::Sha1, Algorithm::Sha256, Algorithm::Sha512]
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Digest size in bits
    pub const fn bits(&self) -> usize {
        match self {
            Algorithm::Sha1 => 160,
            Algorithm::Sha256 => 256,
            Algorithm::Sha512 => 512,
        }
    }

    /// Length of the lowercase hex rendering of a digest
    pub const fn hex_len(&self) -> usize {
        self.bits() / 4
    }

    /// Inverse of `hex_len`
    pub fn from_hex_len(len: usize) -> Option<Self> {
        Self::all().iter().copied().find(|a| a.hex_len() == len)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = JsonHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(Algorithm::Sha1),
            "sha256" | "sha-256" => Ok(Algorithm::Sha256),
            "sha512" | "sha-512" => Ok(Algorithm::Sha512),
            other => Err(JsonHashError::UnknownAlgorithm(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sha256() {
        assert_eq!(Algorithm::default(), Algorithm::Sha256);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("sha1".parse::<Algorithm>().unwrap(), Algorithm::Sha1);
        assert_eq!("SHA-256".parse::<Algorithm>().unwrap(), Algorithm::Sha256);
        assert_eq!(" sha512 ".parse::<Algorithm>().unwrap(), Algorithm::Sha512);
        assert!("md5".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_hex_lengths() {
        assert_eq!(Algorithm::Sha1.hex_len(), 40);
        assert_eq!(Algorithm::Sha256.hex_len(), 64);
        assert_eq!(Algorithm::Sha512.hex_len(), 128);

        for alg in Algorithm::all() {
            assert_eq!(Algorithm::from_hex_len(alg.hex_len()), Some(*alg));
        }
        assert_eq!(Algorithm::from_hex_len(32), None);
    }

    #[test]
    fn test_serde_uses_lowercase_name() {
        let json = serde_json::to_string(&Algorithm::Sha512).unwrap();
        assert_eq!(json, "\"sha512\"");
        let back: Algorithm = serde_json::from_str("\"sha1\"").unwrap();
        assert_eq!(back, Algorithm::Sha1);
    }
}
