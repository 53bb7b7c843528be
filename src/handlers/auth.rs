// src/handlers/auth.rs

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use std::sync::Arc;

use crate::auth::extractors::AuthSession;
use crate::auth::services::AuthService;
use crate::error::AppError;
use crate::response::AppResponse;
use healthtrack_auth_api::{
    ChangePasswordRequest, LoginHistoryEntry, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, RegisterResponse, TokenResponse,
};

/// POST /auth/register
/// Inscription d'un nouveau compte
pub async fn register(
    State(service): State<Arc<AuthService>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<AppResponse<RegisterResponse>, AppError> {
    let response = service.register(payload)?;
    Ok(AppResponse::created(response))
}

/// POST /auth/login
/// Connexion: identifiants → token de session + entrée d'historique
pub async fn login(
    State(service): State<Arc<AuthService>>,
    headers: HeaderMap,
    Json(payload): Json<LoginRequest>,
) -> Result<AppResponse<LoginResponse>, AppError> {
    // Récupère le User-Agent s'il existe
    let user_agent = headers
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let ip_address = client_ip(&headers);

    let response = service.login(&payload, &ip_address, user_agent)?;
    Ok(AppResponse::ok(response))
}

/// POST /auth/logout
/// Déconnexion de la session courante uniquement
pub async fn logout(
    session: AuthSession,
    State(service): State<Arc<AuthService>>,
) -> Result<AppResponse<MessageResponse>, AppError> {
    service.logout(&session)?;
    Ok(AppResponse::ok(MessageResponse::new(
        "Successfully logged out",
    )))
}

/// POST /auth/logout-all
/// Déconnexion de tous les appareils
pub async fn logout_all(
    session: AuthSession,
    State(service): State<Arc<AuthService>>,
) -> Result<AppResponse<MessageResponse>, AppError> {
    service.logout_all(session.account_id)?;
    Ok(AppResponse::ok(MessageResponse::new(
        "Successfully logged out from all devices",
    )))
}

/// GET /auth/refresh
/// Révoque toutes les sessions (y compris celle-ci) et en émet une nouvelle
pub async fn refresh(
    session: AuthSession,
    State(service): State<Arc<AuthService>>,
) -> Result<AppResponse<TokenResponse>, AppError> {
    let response = service.refresh(session.account_id)?;
    Ok(AppResponse::ok(response))
}

/// POST /auth/password/change
pub async fn change_password(
    session: AuthSession,
    State(service): State<Arc<AuthService>>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<AppResponse<MessageResponse>, AppError> {
    service.change_password(&session, &payload)?;
    Ok(AppResponse::ok(MessageResponse::new(
        "Password changed successfully",
    )))
}

/// GET /auth/login-history
/// Dernières sessions du compte courant
pub async fn login_history(
    session: AuthSession,
    State(service): State<Arc<AuthService>>,
) -> Result<AppResponse<Vec<LoginHistoryEntry>>, AppError> {
    let entries = service.login_history(session.account_id)?;
    Ok(AppResponse::ok(entries))
}

/// Adresse source du client. Derrière un proxy, le premier élément de
/// X-Forwarded-For; sinon X-Real-Ip; sinon "unknown".
fn client_ip(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|h| h.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    headers
        .get("x-real-ip")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn client_ip_takes_first_forwarded_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.2"),
        );
        assert_eq!(client_ip(&headers), "203.0.113.7");
    }

    #[test]
    fn client_ip_falls_back_to_real_ip_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.4"));
        assert_eq!(client_ip(&headers), "198.51.100.4");
    }

    #[test]
    fn client_ip_defaults_to_unknown() {
        let headers = HeaderMap::new();
        assert_eq!(client_ip(&headers), "unknown");
    }
}
