use bcrypt::{DEFAULT_COST, hash, verify};

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(bcrypt::BcryptError),
    #[error("Password verification failed: {0}")]
    VerificationFailed(bcrypt::BcryptError),
}

pub struct PasswordManager;

impl PasswordManager {
    pub fn hash(password: &str) -> Result<String, PasswordError> {
        hash(password, DEFAULT_COST).map_err(PasswordError::HashingFailed)
    }

    pub fn verify(password: &str, hash: &str) -> Result<bool, PasswordError> {
        verify(password, hash).map_err(PasswordError::VerificationFailed)
    }

    /// Au moins 8 caractères avec majuscule, minuscule et chiffre
    pub fn is_strong(password: &str) -> bool {
        if password.len() < 8 {
            return false;
        }
        let (mut upper, mut lower, mut digit) = (false, false, false);
        for c in password.chars() {
            upper |= c.is_uppercase();
            lower |= c.is_lowercase();
            digit |= c.is_ascii_digit();
            if upper && lower && digit {
                return true;
            }
        }
        upper && lower && digit
    }
}
