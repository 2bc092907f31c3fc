//! Identifier derivation for slides and pages.

use chrono::Utc;

/// Domain-separation prefix so slide ids never collide with other BLAKE3
/// uses of the same seed material.
const ID_DOMAIN: &[u8] = b"slides-id-v1:";

/// Derive a fresh identifier from a seed string.
///
/// The id is the BLAKE3 hash of the seed plus the current clock reading at
/// nanosecond precision, rendered as 64 lowercase hex characters. The seed
/// alone does not determine the id: two calls at different instants produce
/// different ids for identical seeds. Collisions are not checked.
pub fn derive_id(seed: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(ID_DOMAIN);
    hasher.update(seed.as_bytes());
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    hasher.update(&nanos.to_be_bytes());
    hex::encode(hasher.finalize().as_bytes())
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use super::*;

    #[test]
    fn id_is_64_hex_chars() {
        let id = derive_id("my title");
        assert_eq!(id.len(), 64);
        assert!(id.bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(derive_id("a"), derive_id("b"));
    }

    #[test]
    fn same_seed_at_different_instants_differs() {
        let first = derive_id("same title");
        thread::sleep(Duration::from_millis(2));
        let second = derive_id("same title");
        assert_ne!(first, second);
    }

    #[test]
    fn empty_seed_is_accepted() {
        assert_eq!(derive_id("").len(), 64);
    }
}
