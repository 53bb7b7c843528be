use axum::extract::State;
use std::sync::Arc;

use crate::auth::extractors::AuthSession;
use crate::auth::services::AuthService;
use crate::error::AppError;
use crate::response::AppResponse;
use healthtrack_auth_api::UserResponse;

/// GET /users/me
/// Récupère le profil du compte courant
pub async fn get_current_user(
    session: AuthSession,
    State(service): State<Arc<AuthService>>,
) -> Result<AppResponse<UserResponse>, AppError> {
    let user = service.current_user(session.account_id)?;
    Ok(AppResponse::ok(user))
}

/// DELETE /users/me
/// Désactivation logique du compte courant; révoque toutes les sessions
pub async fn deactivate_account(
    session: AuthSession,
    State(service): State<Arc<AuthService>>,
) -> Result<AppResponse<()>, AppError> {
    service.deactivate(session.account_id)?;
    Ok(AppResponse::no_content())
}
