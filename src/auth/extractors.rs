use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use uuid::Uuid;

use crate::db::repositories::account_repository::AccountRepository;
use crate::db::repositories::session_token_repository::SessionTokenRepository;
use crate::error::AppError;

/// Contexte d'authentification des routes protégées.
/// Valide `Authorization: Bearer <token>`, résout le token opaque en base,
/// vérifie que le compte est actif, puis transporte les identités utiles.
/// Passé explicitement aux handlers — pas d'état ambiant.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub account_id: Uuid,
    pub token_id: Uuid,
}

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Récupère le header Authorization
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AppError::InvalidTokenFormat)?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::InvalidTokenFormat)?;

        // Doit être de type Bearer
        const BEARER: &str = "Bearer ";
        if !auth_str.starts_with(BEARER) {
            return Err(AppError::InvalidTokenFormat);
        }

        let token = &auth_str[BEARER.len()..];
        if token.is_empty() {
            return Err(AppError::InvalidTokenFormat);
        }

        // Résout le token opaque — valable jusqu'à révocation, pas d'expiration
        let session_token = SessionTokenRepository::find_by_token(token)?
            .ok_or_else(|| AppError::unauthorized("Invalid or revoked token"))?;

        // Le compte doit exister et être actif
        let account = AccountRepository::find_by_id(session_token.account_id)?
            .ok_or_else(|| AppError::unauthorized("Invalid or revoked token"))?;
        if !account.is_active {
            return Err(AppError::unauthorized("Account is deactivated"));
        }

        Ok(AuthSession {
            account_id: session_token.account_id,
            token_id: session_token.id,
        })
    }
}
