//! Key Derivation Module
//!
//! Turns an alias + URL seed into a short, letters-only lookup key.

use rand::Rng;
use sha1::{Digest, Sha1};

use crate::error::{Result, ShortenerError};

/// Length of generated keys unless asked otherwise.
pub const DEFAULT_KEY_LENGTH: usize = 10;

/// Length of a SHA-1 digest rendered as lowercase hex.
pub const HEX_DIGEST_LENGTH: usize = 40;

// == Derive Key ==
/// Derives a `length`-letter key from `seed` using the current thread's RNG.
///
/// See [`derive_key_with`].
pub fn derive_key(seed: &str, length: usize) -> Result<String> {
    derive_key_with(&mut rand::thread_rng(), seed, length)
}

/// Derives a `length`-letter key from `seed`.
///
/// The SHA-1 hex digest of `seed` is sliced at a random offset, each hex
/// digit `0..=f` is mapped to the letter `a..=p`, and every letter gets a
/// random case. The same seed does not reliably produce the same key.
///
/// # Errors
/// `InvalidArgument` when `length` is not below [`HEX_DIGEST_LENGTH`].
pub fn derive_key_with<R: Rng>(rng: &mut R, seed: &str, length: usize) -> Result<String> {
    if length >= HEX_DIGEST_LENGTH {
        return Err(ShortenerError::InvalidArgument(format!(
            "key length must be below {}, got {}",
            HEX_DIGEST_LENGTH, length
        )));
    }

    let mut hasher = Sha1::new();
    hasher.update(seed.as_bytes());
    let hex = format!("{:x}", hasher.finalize());

    let start = rng.gen_range(0..HEX_DIGEST_LENGTH - length);

    let key = hex[start..start + length]
        .chars()
        .map(|digit| {
            let letter = hex_to_letter(digit);
            if rng.gen_bool(0.5) {
                letter.to_ascii_uppercase()
            } else {
                letter
            }
        })
        .collect();

    Ok(key)
}

/// Maps a lowercase hex digit to the letter at its value: `0` -> `a`, `f` -> `p`.
fn hex_to_letter(digit: char) -> char {
    // digest output is always lowercase hex
    let value = digit.to_digit(16).unwrap_or(0) as u8;
    (b'a' + value) as char
}
