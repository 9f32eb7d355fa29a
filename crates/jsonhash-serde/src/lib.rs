//! Hash native Rust values as JSON.
//!
//! Values go through their `serde::Serialize` impl, so only what serde would
//! write out participates in the digest. Fields marked `#[serde(skip)]` never
//! reach the hasher, and `#[serde(rename)]` changes the key that is hashed.
//! Floats that JSON cannot hold (NaN, infinities) are rejected rather than
//! written as `null`.

mod finite;

use jsonhash_core::CanonicalHasher;
use jsonhash_types::{Algorithm, HexDigest, JsonHashError, JsonValue, Result};
use serde::Serialize;

use crate::finite::{ensure_finite, CheckError};

/// Conversion into the hasher's value model
pub trait ToJsonValue {
    fn to_json_value(&self) -> Result<JsonValue>;
}

impl<T: Serialize + ?Sized> ToJsonValue for T {
    fn to_json_value(&self) -> Result<JsonValue> {
        let raw = serde_json::to_value(self).map_err(|e| {
            JsonHashError::Serialization(format!("failed to serialize value: {}", e))
        })?;
        ensure_finite(self).map_err(|e| match e {
            e @ CheckError::NonFinite(_) => JsonHashError::UnrepresentableNumber(e.to_string()),
            CheckError::Custom(msg) => JsonHashError::Serialization(msg),
        })?;
        JsonValue::try_from(raw)
    }
}

/// Hash any serializable value
pub fn hash_serializable<T: ToJsonValue + ?Sized>(value: &T, algorithm: Algorithm) -> Result<HexDigest> {
    let json = value.to_json_value()?;
    tracing::debug!("Converted native value to {} with {} nodes", json.kind(), json.node_count());
    Ok(CanonicalHasher::new(algorithm).hash(&json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[derive(Serialize)]
    struct Order {
        id: String,
        amount: f64,
        tags: Vec<String>,
        #[serde(skip)]
        #[allow(dead_code)]
        cache_key: u64,
    }

    #[derive(Serialize)]
    struct OrderReversed {
        tags: Vec<String>,
        amount: f64,
        id: String,
    }

    fn order(cache_key: u64) -> Order {
        Order {
            id: "o-1".to_string(),
            amount: 11.0,
            tags: vec!["fx".to_string(), "spot".to_string()],
            cache_key,
        }
    }

    #[test]
    fn test_skipped_fields_do_not_participate() {
        let a = hash_serializable(&order(1), Algorithm::Sha256).unwrap();
        let b = hash_serializable(&order(2), Algorithm::Sha256).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_field_order_is_irrelevant() {
        let reversed = OrderReversed {
            tags: vec!["fx".to_string(), "spot".to_string()],
            amount: 11.0,
            id: "o-1".to_string(),
        };
        assert_eq!(
            hash_serializable(&order(0), Algorithm::Sha512).unwrap(),
            hash_serializable(&reversed, Algorithm::Sha512).unwrap()
        );
    }

    #[test]
    fn test_matches_text_entry_point() {
        let from_struct = hash_serializable(&order(0), Algorithm::Sha1).unwrap();
        let from_text = jsonhash_core::hash_from_text(
            r#"{"tags":["fx","spot"],"id":"o-1","amount":1.1e1}"#,
            Algorithm::Sha1,
        )
        .unwrap();
        assert_eq!(from_struct, from_text);
    }

    #[test]
    fn test_map_iteration_order_is_irrelevant() {
        let mut hashed: HashMap<String, i32> = HashMap::new();
        let mut ordered: BTreeMap<String, i32> = BTreeMap::new();
        for (i, key) in ["delta", "alpha", "charlie", "bravo"].iter().enumerate() {
            hashed.insert(key.to_string(), i as i32);
            ordered.insert(key.to_string(), i as i32);
        }
        assert_eq!(
            hash_serializable(&hashed, Algorithm::Sha256).unwrap(),
            hash_serializable(&ordered, Algorithm::Sha256).unwrap()
        );
    }

    #[test]
    fn test_non_string_keys_are_rejected() {
        let mut map: HashMap<(i32, i32), bool> = HashMap::new();
        map.insert((1, 2), true);
        let err = hash_serializable(&map, Algorithm::Sha256).unwrap_err();
        assert!(matches!(err, JsonHashError::Serialization(_)));
    }

    #[derive(Serialize)]
    struct Reading {
        sensor: &'static str,
        value: Option<f64>,
    }

    #[test]
    fn test_non_finite_floats_are_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let reading = Reading { sensor: "t1", value: Some(value) };
            let err = hash_serializable(&reading, Algorithm::Sha256).unwrap_err();
            assert!(matches!(err, JsonHashError::UnrepresentableNumber(_)), "{:?}", err);
        }
        let err = hash_serializable(&vec![1.0f32, f32::NAN], Algorithm::Sha1).unwrap_err();
        assert!(matches!(err, JsonHashError::UnrepresentableNumber(_)));
    }

    #[test]
    fn test_missing_reading_is_not_confused_with_nan() {
        let missing = Reading { sensor: "t1", value: None };
        let present = Reading { sensor: "t1", value: Some(21.5) };
        assert_eq!(
            hash_serializable(&missing, Algorithm::Sha256).unwrap(),
            jsonhash_core::hash_json_string(r#"{"sensor":"t1","value":null}"#).unwrap()
        );
        assert_ne!(
            hash_serializable(&missing, Algorithm::Sha256).unwrap(),
            hash_serializable(&present, Algorithm::Sha256).unwrap()
        );
    }

    #[test]
    fn test_unsized_values() {
        let text: &str = "plain";
        let slice: &[i32] = &[1, 2];
        assert_eq!(
            hash_serializable(text, Algorithm::Sha256).unwrap(),
            jsonhash_core::hash_json_string(r#""plain""#).unwrap()
        );
        assert_eq!(
            hash_serializable(slice, Algorithm::Sha256).unwrap(),
            jsonhash_core::hash_json_string("[1.0, 2]").unwrap()
        );
    }
}
