use serde::Serialize;
use std::hash::Hasher;
use twox_hash::XxHash64;

use crate::error::{DbError, DbResult};

/// Hashes serializable data into an i64 using CBOR serialization and XxHash64.
///
/// This provides a stable hash across different runs and systems by:
/// - Serializing the data to CBOR format (deterministic binary representation)
/// - Using XxHash64 with a fixed seed (0) for consistent hashing
///
/// The result is used as the optimistic concurrency token of versioned models.
pub fn hash_as_i64<T: Serialize>(data: &T) -> DbResult<i64> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| DbError::Serialization(e.to_string()))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample<'a> {
        id: i32,
        name: &'a str,
    }

    #[test]
    fn test_hash_is_stable() {
        let a = hash_as_i64(&Sample { id: 1, name: "Chai" }).unwrap();
        let b = hash_as_i64(&Sample { id: 1, name: "Chai" }).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_changes_with_content() {
        let a = hash_as_i64(&Sample { id: 1, name: "Chai" }).unwrap();
        let b = hash_as_i64(&Sample { id: 1, name: "Chang" }).unwrap();
        assert_ne!(a, b);
    }
}
