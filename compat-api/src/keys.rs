/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Random key generation for end-to-end encryption.
//!
//! [`generate_secure_key`] draws from OS entropy and can fail;
//! [`generate_key`] is the thread-RNG fallback used when it does. The
//! defaulting layer prefers the secure path and only degrades on error.

use rand::{rngs::OsRng, Rng, RngCore};

const KEY_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated end-to-end encryption keys.
pub const ENCRYPTION_KEY_LENGTH: usize = 32;

/// Generate an alphanumeric key from OS entropy.
pub fn generate_secure_key(length: usize) -> Result<String, rand::Error> {
    let mut bytes = vec![0u8; length];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(bytes
        .iter()
        .map(|b| KEY_CHARSET[*b as usize % KEY_CHARSET.len()] as char)
        .collect())
}

/// Generate an alphanumeric key from the thread RNG.
pub fn generate_key(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..KEY_CHARSET.len());
            KEY_CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_key_has_requested_length_and_charset() {
        let key = generate_secure_key(ENCRYPTION_KEY_LENGTH).expect("os entropy");
        assert_eq!(key.len(), ENCRYPTION_KEY_LENGTH);
        assert!(key.bytes().all(|b| KEY_CHARSET.contains(&b)));
    }

    #[test]
    fn fallback_key_has_requested_length_and_charset() {
        let key = generate_key(ENCRYPTION_KEY_LENGTH);
        assert_eq!(key.len(), ENCRYPTION_KEY_LENGTH);
        assert!(key.bytes().all(|b| KEY_CHARSET.contains(&b)));
    }

    #[test]
    fn consecutive_keys_differ() {
        assert_ne!(generate_key(32), generate_key(32));
    }
}
