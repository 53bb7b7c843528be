use serde::{Deserialize, Serialize};

/// HTTP status codes represented as an enum
/// This is WASM-compatible and doesn't depend on axum::http::StatusCode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    Ok = 200,
    Created = 201,
    NoContent = 204,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    Conflict = 409,
    UnprocessableEntity = 422,
    Locked = 423,
    InternalServerError = 500,
}

/// Generic API response wrapper
///
/// This type is WASM-compatible and can be used in both backend and frontend.
/// The backend wraps this in a type that implements Axum's IntoResponse trait.
///
/// # Examples
///
/// ```rust
/// use healthtrack_auth_api::{AppResponse, StatusCode};
///
/// // Success response
/// let response = AppResponse::ok("data");
///
/// // Created response
/// let response = AppResponse::created("new_resource");
///
/// // No content response
/// let response: AppResponse<()> = AppResponse::no_content();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub status: StatusCode,
}

impl<T> AppResponse<T> {
    /// Creates a new response with a status code and data
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            status,
            data: Some(data),
        }
    }

    /// Creates an empty response with a status code
    pub fn empty(status: StatusCode) -> Self {
        Self { status, data: None }
    }

    // === Common status code constructors ===

    /// 200 OK with data
    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::Ok, data)
    }

    /// 201 Created with data
    pub fn created(data: T) -> Self {
        Self::new(StatusCode::Created, data)
    }
}

impl AppResponse<()> {
    /// 204 No Content
    pub fn no_content() -> Self {
        Self::empty(StatusCode::NoContent)
    }
}
