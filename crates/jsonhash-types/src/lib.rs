//! Value model, algorithm selector, digest and error types shared by every
//! jsonhash crate.

mod algorithm;
mod digest;
mod error;
mod value;

pub use algorithm::Algorithm;
pub use digest::HexDigest;
pub use error::{JsonHashError, Result};
pub use value::{kind_of_text, JsonValue, ValueKind};
