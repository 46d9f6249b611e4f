// src/common/id_generator.rs
//! Crockford Base32 name generator
//!
//! Produces short random names for staging files and store-assigned blob
//! keys. Crockford Base32 excludes the ambiguous characters I, L, O and U,
//! so the names stay readable in logs and object-store consoles.

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Generate a random Crockford Base32 string of the given length
pub fn generate_raw_id(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_length() {
        assert_eq!(generate_raw_id(8).len(), 8);
        assert_eq!(generate_raw_id(12).len(), 12);
    }

    #[test]
    fn test_crockford_alphabet_only() {
        let id = generate_raw_id(64);

        for c in id.chars() {
            assert!(
                CROCKFORD_ALPHABET.contains(&(c as u8)),
                "Character '{}' not in Crockford alphabet",
                c
            );
        }

        // Verify no ambiguous characters
        assert!(!id.contains('I'));
        assert!(!id.contains('L'));
        assert!(!id.contains('O'));
        assert!(!id.contains('U'));
    }

    #[test]
    fn test_uniqueness() {
        let mut ids = HashSet::new();
        for _ in 0..1000 {
            let id = generate_raw_id(12);
            assert!(ids.insert(id), "Duplicate ID generated");
        }
    }
}
