use argon2::{
    password_hash::{
        self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2,
};

use crate::error::{AppError, AppResult};

/// Well-formed hash with the default Argon2 cost that no password matches
///
/// Login verifies against it when the username is unknown so both failure
/// paths do the same work.
pub const UNKNOWN_USER_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$VCo4YyctocmFrra63nop4Q$MV/UhAT0/+kaboGFVvnJ9TBJ1VW9EPr+GWspBg/wMaM";

/// Hashes a password into an Argon2id PHC string
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Checks a password against a stored PHC string
///
/// A mismatch is `Ok(false)`; only a corrupt stored hash is an error.
pub fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::Internal(format!("Stored password hash is invalid: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::Internal(format!("Failed to verify password: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("hunter22").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("hunter22", &hash).unwrap());
        assert!(!verify_password("hunter23", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_unknown_user_hash_matches_default_cost() {
        assert!(!verify_password("", UNKNOWN_USER_HASH).unwrap());
        assert!(!verify_password("hunter22", UNKNOWN_USER_HASH).unwrap());

        let real = hash_password("hunter22").unwrap();
        let params = |phc: &str| phc.split('$').nth(3).map(str::to_string);
        assert_eq!(params(&real), params(UNKNOWN_USER_HASH));
    }

    #[test]
    fn test_corrupt_hash_is_error() {
        assert!(matches!(
            verify_password("pw", "not-a-phc-string"),
            Err(AppError::Internal(_))
        ));
    }
}
