use anyhow::{Context, Result};
use jsonhash_core::CanonicalHasher;
use jsonhash_types::{Algorithm, HexDigest};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Read a document from a file, or from stdin for `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn hash_file(path: &Path, algorithm: Algorithm) -> Result<HexDigest> {
    let text = read_input(path)?;
    let digest = CanonicalHasher::new(algorithm)
        .hash_text(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    tracing::info!("{} {}: {}", algorithm, path.display(), digest);
    Ok(digest)
}

/// Hash every input; no inputs means stdin
pub fn hash_files(paths: &[PathBuf], algorithm: Algorithm) -> Result<Vec<(PathBuf, HexDigest)>> {
    if paths.is_empty() {
        let stdin = PathBuf::from("-");
        let digest = hash_file(&stdin, algorithm)?;
        return Ok(vec![(stdin, digest)]);
    }
    paths
        .iter()
        .map(|path| Ok((path.clone(), hash_file(path, algorithm)?)))
        .collect()
}

/// Whether two documents are structurally equal
pub fn compare_files(lhs: &Path, rhs: &Path, algorithm: Algorithm) -> Result<bool> {
    let lhs_digest = hash_file(lhs, algorithm)?;
    let rhs_digest = hash_file(rhs, algorithm)?;
    let equal = lhs_digest == rhs_digest;
    if !equal {
        tracing::warn!("{} and {} differ", lhs.display(), rhs.display());
    }
    Ok(equal)
}

/// Check a document against an expected digest; the algorithm follows from
/// the digest length
pub fn verify_file(path: &Path, expected: &str) -> Result<bool> {
    let expected = HexDigest::from_hex(expected).context("expected digest is malformed")?;
    let algorithm = expected
        .algorithm()
        .context("expected digest has no matching algorithm")?;
    let actual = hash_file(path, algorithm)?;
    if actual != expected {
        tracing::warn!("{} hashes to {}, expected {}", path.display(), actual, expected);
    }
    Ok(actual == expected)
}
