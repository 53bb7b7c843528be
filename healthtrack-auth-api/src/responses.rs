use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub preferred_language: String,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserResponse,
    pub token: String,
    pub token_type: String, // always "Bearer"
}

/// Réponse du refresh: le nouveau token seul, sans le profil
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginHistoryEntry {
    pub id: Uuid,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub device_type: String, // "mobile" | "desktop"
    pub logged_in_at: DateTime<Utc>,
    pub logged_out_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_serializes_bearer_token_type() {
        let resp = LoginResponse {
            message: "Login successful".to_string(),
            user: UserResponse {
                id: Uuid::new_v4(),
                name: "Aiko".to_string(),
                email: "aiko@example.com".to_string(),
                phone: None,
                preferred_language: "en".to_string(),
                is_active: true,
                last_login_at: None,
                created_at: Utc::now(),
            },
            token: "abc".to_string(),
            token_type: "Bearer".to_string(),
        };

        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"token_type\":\"Bearer\""));
        assert!(json.contains("\"message\":\"Login successful\""));
    }

    #[test]
    fn user_response_omits_absent_phone() {
        let resp = UserResponse {
            id: Uuid::new_v4(),
            name: "Aiko".to_string(),
            email: "aiko@example.com".to_string(),
            phone: None,
            preferred_language: "en".to_string(),
            is_active: true,
            last_login_at: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("phone"));
    }
}
