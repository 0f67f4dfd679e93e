//! Short code generation.
//!
//! Codes are drawn uniformly from the 62-character alphanumeric alphabet.
//! Uniqueness is not guaranteed here; the caller enforces it by retrying
//! against the store's unique constraint.

use rand::Rng;

/// The 62-character alphabet used for short codes. Case-sensitive.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default length for generated short codes.
///
/// 62^6 is roughly 5.6e10 combinations, which keeps the collision-retry loop
/// effectively unreachable at normal load.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Shortest code length the resolver accepts before touching the store.
pub const MIN_CODE_LENGTH: usize = 4;

/// Longest code length the resolver accepts.
pub const MAX_CODE_LENGTH: usize = 8;

/// Generates a random alphanumeric code of exactly `length` characters.
///
/// Uses the thread-local RNG, which is seeded from OS entropy per thread, so
/// restarts never replay a code sequence.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
