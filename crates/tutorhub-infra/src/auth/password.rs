//! PBKDF2 password hashing.
//!
//! The parameterization is a stored-credential compatibility contract:
//! PBKDF2-HMAC-SHA512 at 262 144 rounds, salted with the 64-character
//! hex encoding of 32 random bytes (the hex string itself is the salt
//! input, not the decoded bytes), producing a 128-character hex digest.
//! Changing any of these would invalidate every stored credential.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha512;
use subtle::ConstantTimeEq;

pub const PBKDF2_ROUNDS: u32 = 262_144;

/// Generate a fresh salt: 32 random bytes, hex-encoded to 64 chars.
pub fn generate_salt() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Generate an account activation token: 16 random bytes, hex-encoded
/// to 32 chars.
pub fn generate_activation_token() -> String {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Derive the stored digest for a password and hex salt.
pub fn hash_password(password: &str, salt_hex: &str) -> String {
    let mut digest = [0u8; 64];
    pbkdf2_hmac::<Sha512>(
        password.as_bytes(),
        salt_hex.as_bytes(),
        PBKDF2_ROUNDS,
        &mut digest,
    );
    hex::encode(digest)
}

/// Check a candidate password against a stored salt and digest. The
/// comparison is constant time.
pub fn verify_password(password: &str, salt_hex: &str, expected_hash: &str) -> bool {
    hash_password(password, salt_hex)
        .as_bytes()
        .ct_eq(expected_hash.as_bytes())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_and_128_hex_chars() {
        let salt = generate_salt();
        assert_eq!(salt.len(), 64);

        let first = hash_password("abc123", &salt);
        let second = hash_password("abc123", &salt);
        assert_eq!(first, second);
        assert_eq!(first.len(), 128);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn verify_accepts_the_right_password_only() {
        let salt = generate_salt();
        let hash = hash_password("secure_password_123", &salt);

        assert!(verify_password("secure_password_123", &salt, &hash));
        assert!(!verify_password("wrong_password", &salt, &hash));
    }

    #[test]
    fn verify_rejects_a_digest_of_different_length() {
        let salt = generate_salt();
        let hash = hash_password("secure_password_123", &salt);

        assert!(!verify_password("secure_password_123", &salt, &hash[..127]));
        assert!(!verify_password("secure_password_123", &salt, ""));
    }

    #[test]
    fn activation_token_is_32_hex_chars() {
        let token = generate_activation_token();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
