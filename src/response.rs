use axum::{
    Json,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use healthtrack_auth_api::{AppResponse as ApiResponse, StatusCode as ApiStatusCode};
use serde::Serialize;

/// Backend wrapper for healthtrack-auth-api's AppResponse that adds Axum
/// integration: IntoResponse, HTTP header support and status conversion.
pub struct AppResponse<T> {
    inner: ApiResponse<T>,
    headers: Option<HeaderMap>,
}

impl<T> AppResponse<T>
where
    T: Serialize,
{
    /// Creates a new response wrapping the API response
    pub fn new(inner: ApiResponse<T>) -> Self {
        Self {
            inner,
            headers: None,
        }
    }

    /// Adds HTTP headers to the response
    #[allow(dead_code)]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    // === Convenience constructors ===

    /// 200 OK with data
    pub fn ok(data: T) -> Self {
        Self::new(ApiResponse::ok(data))
    }

    /// 201 Created with data
    pub fn created(data: T) -> Self {
        Self::new(ApiResponse::created(data))
    }
}

impl AppResponse<()> {
    /// 204 No Content
    pub fn no_content() -> Self {
        Self::new(ApiResponse::no_content())
    }
}

/// Converts API StatusCode to Axum's StatusCode
fn convert_status(api_status: ApiStatusCode) -> StatusCode {
    match api_status {
        ApiStatusCode::Ok => StatusCode::OK,
        ApiStatusCode::Created => StatusCode::CREATED,
        ApiStatusCode::NoContent => StatusCode::NO_CONTENT,
        ApiStatusCode::BadRequest => StatusCode::BAD_REQUEST,
        ApiStatusCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ApiStatusCode::Forbidden => StatusCode::FORBIDDEN,
        ApiStatusCode::NotFound => StatusCode::NOT_FOUND,
        ApiStatusCode::Conflict => StatusCode::CONFLICT,
        ApiStatusCode::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
        ApiStatusCode::Locked => StatusCode::LOCKED,
        ApiStatusCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl<T> IntoResponse for AppResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let status = convert_status(self.inner.status);

        let mut response = match self.inner.data {
            Some(data) => (status, Json(data)).into_response(),
            None => status.into_response(),
        };

        if let Some(headers) = self.headers {
            response.headers_mut().extend(headers);
        }

        response
    }
}
