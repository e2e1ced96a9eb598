use heapless::String as HeaplessString;
use serde::Serialize;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Hashes serializable data into an i64 using CBOR serialization and XxHash64.
///
/// CBOR gives a deterministic byte form and the seed is fixed, so the value is
/// stable across runs. Repositories compare these to skip unchanged updates.
pub fn hash_as_i64<T: Serialize>(data: &T) -> Result<i64, String> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to serialize data for hashing: {e}"))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}

/// Copies `value` into a bounded string, failing if it does not fit.
pub fn heapless_string<const N: usize>(value: &str) -> Result<HeaplessString<N>, String> {
    HeaplessString::try_from(value)
        .map_err(|_| format!("Value '{value}' is too long (max {N} bytes)"))
}

/// Copies as much of `value` as fits, cutting on a char boundary.
pub fn truncated_heapless_string<const N: usize>(value: &str) -> HeaplessString<N> {
    let mut out = HeaplessString::new();
    for ch in value.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
