use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use rand::{TryRngCore, rngs::OsRng};

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token generation failed: {0}")]
    RandomSource(String),
}

// 256 bits of entropy, encoded to 43 URL-safe characters
const TOKEN_BYTES: usize = 32;

/// Génère un token de session opaque depuis la source aléatoire de l'OS
pub fn generate_session_token() -> Result<String, TokenError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| TokenError::RandomSource(e.to_string()))?;

    Ok(BASE64_URL_SAFE_NO_PAD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tokens_have_the_expected_encoded_length() {
        let token = generate_session_token().expect("generation should succeed");
        // 32 bytes → ceil(32 * 4 / 3) = 43 chars without padding
        assert_eq!(token.len(), 43);
    }

    #[test]
    fn tokens_are_url_safe() {
        let token = generate_session_token().expect("generation should succeed");
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            "Unexpected character in token: {token}"
        );
    }

    #[test]
    fn tokens_do_not_repeat() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let token = generate_session_token().expect("generation should succeed");
            assert!(seen.insert(token), "Duplicate token generated");
        }
    }
}
