use serde::{Deserialize, Serialize};

// -------- REQUEST DTOs --------
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String, // Plain text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// en / ja / zh — defaults to "en" server-side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String, // Plain text
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    /// Revokes every session except the one making the request
    #[serde(default)]
    pub logout_other_devices: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_deserializes_without_optional_fields() {
        let json = r#"{"name":"Aiko","email":"aiko@example.com","password":"Secret123"}"#;
        let req: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.email, "aiko@example.com");
        assert!(req.phone.is_none());
        assert!(req.preferred_language.is_none());
    }

    #[test]
    fn change_password_request_defaults_logout_other_devices_to_false() {
        let json = r#"{"current_password":"old","new_password":"new"}"#;
        let req: ChangePasswordRequest = serde_json::from_str(json).unwrap();
        assert!(!req.logout_other_devices);
    }
}
