//! Random short code generation.
//!
//! Codes are not cryptographically secure. Uniqueness is the caller's concern:
//! the link service checks the store and calls [`generate_code`] again on a
//! collision.

use rand::Rng;

/// Characters a generated code is drawn from.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Shortest generated code.
pub const MIN_CODE_LENGTH: usize = 6;

/// Longest generated code.
pub const MAX_CODE_LENGTH: usize = 8;

/// Generates a random short code using the thread-local RNG.
///
/// The length is chosen uniformly from 6 to 8 and every character uniformly
/// from [`ALPHABET`].
pub fn generate_code() -> String {
    generate_code_with(&mut rand::rng())
}

/// Generates a random short code from the given RNG.
pub fn generate_code_with<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(MIN_CODE_LENGTH..=MAX_CODE_LENGTH);

    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
