use jsonhash_types::{Algorithm, HexDigest, JsonValue, Result};

use crate::digest::compute_hash;
use crate::normalize::{normalize_bool, normalize_number, ELEMENT_SEPARATOR, ENTRY_SEPARATOR, NULL_MARKER};

/// Order-independent hasher for JSON values.
///
/// Leaves are normalized and digested directly. Arrays digest the `|||`-joined
/// digests of their elements in index order. Objects digest each entry as
/// `H(H(key) ":::" H(value))`, sort the entries by key, and digest the
/// `|||`-joined entry digests. Empty containers digest the empty string.
///
/// The walk keeps its own work stack, so nesting depth is bounded by heap
/// rather than by the call stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanonicalHasher {
    algorithm: Algorithm,
}

/// Pending step of the depth-first walk
enum Step<'a> {
    Visit(&'a JsonValue),
    /// Fold the last `n` digests into an array digest
    CloseArray(usize),
    /// Fold the last `entries.len()` value digests into an object digest
    CloseObject(&'a [(String, JsonValue)]),
}

impl CanonicalHasher {
    pub const fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// Hash an already parsed value
    pub fn hash(&self, value: &JsonValue) -> HexDigest {
        let digest = self.digest_value(value);
        tracing::debug!("Hashed {} value with {}: {}", value.kind(), self.algorithm, digest);
        digest
    }

    /// Parse JSON text and hash the result
    pub fn hash_text(&self, text: &str) -> Result<HexDigest> {
        tracing::debug!("Parsing {} bytes of JSON text", text.len());
        let value = JsonValue::parse(text)?;
        Ok(self.hash(&value))
    }

    /// Digest of a single object entry, before sorting and aggregation
    pub fn entry_digest(&self, key: &str, value: &JsonValue) -> HexDigest {
        let value_digest = self.digest_value(value);
        self.combine_entry(key, &value_digest)
    }

    fn digest_value(&self, root: &JsonValue) -> HexDigest {
        let mut steps = vec![Step::Visit(root)];
        let mut digests: Vec<HexDigest> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(value) => match value {
                    JsonValue::Object(entries) => {
                        steps.push(Step::CloseObject(entries));
                        steps.extend(entries.iter().rev().map(|(_, v)| Step::Visit(v)));
                    }
                    JsonValue::Array(items) => {
                        steps.push(Step::CloseArray(items.len()));
                        steps.extend(items.iter().rev().map(Step::Visit));
                    }
                    JsonValue::String(s) => digests.push(self.digest_str(s)),
                    JsonValue::Number(n) => digests.push(self.digest_str(&normalize_number(*n))),
                    JsonValue::Bool(b) => digests.push(self.digest_str(normalize_bool(*b))),
                    JsonValue::Null => digests.push(self.digest_str(NULL_MARKER)),
                },
                Step::CloseArray(len) => {
                    let children = digests.split_off(digests.len() - len);
                    digests.push(self.digest_joined(&children));
                }
                Step::CloseObject(entries) => {
                    let values = digests.split_off(digests.len() - entries.len());
                    digests.push(self.digest_object(entries, &values));
                }
            }
        }

        digests.pop().expect("walk leaves exactly one digest for the root")
    }

    fn digest_object(&self, entries: &[(String, JsonValue)], values: &[HexDigest]) -> HexDigest {
        let mut digested: Vec<(&str, HexDigest)> = entries
            .iter()
            .zip(values)
            .map(|((key, _), value)| (key.as_str(), self.combine_entry(key, value)))
            .collect();

        // Byte order on keys; duplicate keys fall back to the entry digest so
        // the result never depends on the order entries were supplied in.
        digested.sort_by(|(ka, da), (kb, db)| ka.cmp(kb).then_with(|| da.cmp(db)));

        let sorted: Vec<HexDigest> = digested.into_iter().map(|(_, digest)| digest).collect();
        self.digest_joined(&sorted)
    }

    fn combine_entry(&self, key: &str, value_digest: &HexDigest) -> HexDigest {
        let key_digest = self.digest_str(key);
        self.digest_str(&format!("{}{}{}", key_digest, ENTRY_SEPARATOR, value_digest))
    }

    fn digest_joined(&self, digests: &[HexDigest]) -> HexDigest {
        let joined = digests
            .iter()
            .map(HexDigest::as_str)
            .collect::<Vec<_>>()
            .join(ELEMENT_SEPARATOR);
        self.digest_str(&joined)
    }

    fn digest_str(&self, s: &str) -> HexDigest {
        compute_hash(self.algorithm, s.as_bytes())
    }
}
