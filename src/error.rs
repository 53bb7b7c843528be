// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use healthtrack_auth_api::ErrorResponse;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    // === Erreurs Repository ===
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Already exists: {0}")]
    Duplicate(String),
    #[error("Database error: {0}")]
    DatabaseError(String),

    // === Erreurs d'Authentification ===
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Account locked, retry in {retry_after_minutes} minutes")]
    AccountLocked { retry_after_minutes: i64 },
    #[error("Email already registered")]
    AccountAlreadyExists,
    #[error("Current password is incorrect")]
    CurrentPasswordIncorrect,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // === Erreurs de Hashing/Cryptographie ===
    #[error("Password hashing failed: {0}")]
    PasswordHashingFailed(String),
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
    #[error("Invalid token format")]
    InvalidTokenFormat,

    // === Erreurs de Validation ===
    #[error("Validation error: {0}")]
    ValidationError(String),

    // === Erreurs métier ===
    #[error("Unauthorized: {0}")]
    UnauthorizedAction(String),

    // === Erreurs internes ===
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, message, internal_detail) = self.get_error_info();

        if let Some(ref detail) = internal_detail {
            tracing::error!(error_code, %status, detail = %detail, "Internal server error");
        }

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
            details: None,
        });

        (status, body).into_response()
    }
}

impl AppError {
    /// Statut HTTP, code machine opaque, message public et détail interne.
    /// Le détail interne part dans les logs, jamais vers le client.
    fn get_error_info(&self) -> (StatusCode, &'static str, String, Option<String>) {
        match self {
            // 404 Not Found
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),

            // 409 Conflict
            AppError::Duplicate(msg) => {
                (StatusCode::CONFLICT, "DUPLICATE_ENTRY", msg.clone(), None)
            }
            AppError::AccountAlreadyExists => (
                StatusCode::CONFLICT,
                "ACCOUNT_EXISTS",
                "Email already registered".to_string(),
                None,
            ),

            // 401 Unauthorized
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid credentials".to_string(),
                None,
            ),
            AppError::UnauthorizedAction(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone(), None)
            }

            // 423 Locked
            AppError::AccountLocked {
                retry_after_minutes,
            } => (
                StatusCode::LOCKED,
                "ACCOUNT_LOCKED",
                format!(
                    "Account is locked. Please try again in {retry_after_minutes} minutes."
                ),
                None,
            ),

            // 400 Bad Request
            AppError::CurrentPasswordIncorrect => (
                StatusCode::BAD_REQUEST,
                "CURRENT_PASSWORD_INCORRECT",
                "Current password is incorrect".to_string(),
                None,
            ),
            AppError::InvalidEmail => (
                StatusCode::BAD_REQUEST,
                "INVALID_EMAIL",
                "Invalid email format".to_string(),
                None,
            ),
            AppError::WeakPassword(msg) => {
                (StatusCode::BAD_REQUEST, "WEAK_PASSWORD", msg.clone(), None)
            }
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                None,
            ),
            AppError::InvalidTokenFormat => (
                StatusCode::BAD_REQUEST,
                "INVALID_TOKEN_FORMAT",
                "Token format is invalid".to_string(),
                None,
            ),

            // 500 Internal Server Error
            AppError::PasswordHashingFailed(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "HASHING_ERROR",
                "An error occurred while processing your request".to_string(),
                Some(msg.clone()),
            ),
            AppError::TokenGenerationFailed(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TOKEN_ERROR",
                "An error occurred while generating token".to_string(),
                Some(msg.clone()),
            ),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "An error occurred with the database".to_string(),
                Some(msg.clone()),
            ),
            AppError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal server error occurred".to_string(),
                Some(msg.clone()),
            ),
        }
    }

    // === Constructeurs helpers ===
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        AppError::Duplicate(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        AppError::DatabaseError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::InternalServerError(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::UnauthorizedAction(msg.into())
    }

    /// Retourne le code de statut HTTP
    #[expect(dead_code, reason = "Used in unit tests")]
    pub fn status_code(&self) -> StatusCode {
        self.get_error_info().0
    }
}

// === Conversions automatiques depuis d'autres types d'erreurs ===

// Depuis RepositoryError
impl From<crate::db::error::RepositoryError> for AppError {
    fn from(err: crate::db::error::RepositoryError) -> Self {
        match err {
            crate::db::error::RepositoryError::NotFound(msg) => AppError::not_found(&msg),
            crate::db::error::RepositoryError::UniqueViolation(msg) => AppError::duplicate(&msg),
            crate::db::error::RepositoryError::PoolError(msg) => AppError::database(&msg),
            crate::db::error::RepositoryError::ForeignKeyViolation(msg) => AppError::database(&msg),
            crate::db::error::RepositoryError::DatabaseError(msg) => AppError::database(&msg),
        }
    }
}

// Depuis PasswordError
impl From<crate::auth::password::PasswordError> for AppError {
    fn from(err: crate::auth::password::PasswordError) -> Self {
        AppError::PasswordHashingFailed(err.to_string())
    }
}

// Depuis TokenError
impl From<crate::auth::token::TokenError> for AppError {
    fn from(err: crate::auth::token::TokenError) -> Self {
        AppError::TokenGenerationFailed(err.to_string())
    }
}

// Depuis axum::extract::rejection::JsonRejection
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::validation(format!("Invalid JSON: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_correct_message() {
        let err = AppError::not_found("Account");
        assert_eq!(err.to_string(), "Not found: Account");
    }

    #[test]
    fn invalid_credentials_maps_to_401_status() {
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn account_locked_maps_to_423_status() {
        let err = AppError::AccountLocked {
            retry_after_minutes: 12,
        };
        assert_eq!(err.status_code(), StatusCode::LOCKED);
    }

    #[test]
    fn account_locked_message_carries_retry_after() {
        let err = AppError::AccountLocked {
            retry_after_minutes: 12,
        };
        let (_, code, message, _) = err.get_error_info();
        assert_eq!(code, "ACCOUNT_LOCKED");
        assert!(message.contains("12 minutes"));
    }

    #[test]
    fn current_password_incorrect_maps_to_400_status() {
        assert_eq!(
            AppError::CurrentPasswordIncorrect.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn database_error_maps_to_500_and_hides_detail() {
        let err = AppError::database("connection refused on 10.0.0.3");
        let (status, _, message, detail) = err.get_error_info();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!message.contains("10.0.0.3"), "Detail must not leak");
        assert_eq!(detail.as_deref(), Some("connection refused on 10.0.0.3"));
    }

    #[test]
    fn invalid_credentials_into_response_sets_401_status() {
        let response = AppError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn account_locked_into_response_sets_423_status() {
        let response = AppError::AccountLocked {
            retry_after_minutes: 30,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::LOCKED);
    }
}
