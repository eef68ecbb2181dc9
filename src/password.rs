use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{PasswordHash, SaltString},
};
use password_hash::rand_core::OsRng;

/// Hash a plaintext password with argon2id and a fresh random salt,
/// returning the PHC string form.
pub fn hash_password(plaintext: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC string. An unparseable
/// hash counts as a mismatch rather than an error.
pub fn verify_password(stored: &str, plaintext: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("user123").expect("hash");
        assert!(verify_password(&hash, "user123"));
        assert!(!verify_password(&hash, "user124"));
    }

    #[test]
    fn distinct_salts_produce_distinct_hashes() {
        let a = hash_password("admin123").expect("hash");
        let b = hash_password("admin123").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify_password("not-a-phc-string", "anything"));
    }
}
