use jsonhash_types::{Algorithm, HexDigest};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

/// Compute the digest of raw bytes with the selected algorithm
pub fn compute_hash(algorithm: Algorithm, data: &[u8]) -> HexDigest {
    match algorithm {
        Algorithm::Sha1 => digest_with::<Sha1>(data),
        Algorithm::Sha256 => digest_with::<Sha256>(data),
        Algorithm::Sha512 => digest_with::<Sha512>(data),
    }
}

fn digest_with<D: Digest>(data: &[u8]) -> HexDigest {
    let mut hasher = D::new();
    hasher.update(data);
    HexDigest::from_bytes(hasher.finalize())
}
