//! Random alphanumeric strings.
//!
//! Not suitable for secrets: the thread-local RNG is fast, not hardened.

use rand::Rng;

/// Length used when the caller does not ask for one
pub const DEFAULT_RANDOM_LENGTH: usize = 32;

const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Generate `len` characters sampled uniformly from `[a-zA-Z0-9]`.
pub fn random_string(len: usize) -> String {
    random_string_with(&mut rand::rng(), len)
}

/// Same as [`random_string`] but drawing from a caller-supplied RNG.
pub fn random_string_with<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
