use jsonhash_types::{Algorithm, HexDigest, JsonValue, Result};

use crate::hasher::CanonicalHasher;

/// Hash an in-memory value. Cannot fail.
pub fn hash_value(value: &JsonValue, algorithm: Algorithm) -> HexDigest {
    CanonicalHasher::new(algorithm).hash(value)
}

/// Parse JSON text and hash it
pub fn hash_from_text(text: &str, algorithm: Algorithm) -> Result<HexDigest> {
    CanonicalHasher::new(algorithm).hash_text(text)
}

/// Hash JSON text with the default algorithm (SHA-256)
pub fn hash_json_string(text: &str) -> Result<HexDigest> {
    hash_from_text(text, Algorithm::default())
}

pub fn hash_json_string_sha1(text: &str) -> Result<HexDigest> {
    hash_from_text(text, Algorithm::Sha1)
}

pub fn hash_json_string_sha256(text: &str) -> Result<HexDigest> {
    hash_from_text(text, Algorithm::Sha256)
}

pub fn hash_json_string_sha512(text: &str) -> Result<HexDigest> {
    hash_from_text(text, Algorithm::Sha512)
}

/// Whether two JSON texts are structurally equal
pub fn documents_equal(lhs: &str, rhs: &str, algorithm: Algorithm) -> Result<bool> {
    let hasher = CanonicalHasher::new(algorithm);
    let equal = hasher.hash_text(lhs)? == hasher.hash_text(rhs)?;
    tracing::debug!("Documents compared with {}: equal={}", algorithm, equal);
    Ok(equal)
}
