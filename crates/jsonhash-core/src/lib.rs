//! Canonical, order-independent hashing of JSON values.
//!
//! Two documents that are structurally equal hash to the same digest no
//! matter how their object keys are ordered or how their numbers are spelled.

mod api;
mod digest;
mod hasher;
mod normalize;

pub use api::{
    documents_equal, hash_from_text, hash_json_string, hash_json_string_sha1,
    hash_json_string_sha256, hash_json_string_sha512, hash_value,
};
pub use digest::compute_hash;
pub use hasher::CanonicalHasher;
pub use normalize::{
    normalize_bool, normalize_number, ELEMENT_SEPARATOR, ENTRY_SEPARATOR, FALSE_MARKER,
    NULL_MARKER, TRUE_MARKER,
};

pub use jsonhash_types::{Algorithm, HexDigest, JsonHashError, JsonValue, Result, ValueKind};
