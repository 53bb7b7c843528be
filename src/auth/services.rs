// src/auth/services.rs

use crate::error::AppError;
use healthtrack_auth_api::{
    ChangePasswordRequest, LoginHistoryEntry, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse, TokenResponse, UserResponse,
};

use crate::auth::device;
use crate::auth::extractors::AuthSession;
use crate::auth::lockout::{LockoutPolicy, LockoutStatus};
use crate::auth::password::PasswordManager;
use crate::auth::token::generate_session_token;

use crate::db::models::account::NewAccount;
use crate::db::models::login_history::NewLoginHistoryRecord;
use crate::db::models::session_token::NewSessionToken;

use crate::db::repositories::account_repository::AccountRepository;
use crate::db::repositories::login_history_repository::LoginHistoryRepository;
use crate::db::repositories::session_token_repository::SessionTokenRepository;

use chrono::Utc;
use uuid::Uuid;

const SUPPORTED_LANGUAGES: [&str; 3] = ["en", "ja", "zh"];
const DEFAULT_LANGUAGE: &str = "en";
const HISTORY_PAGE_SIZE: i64 = 20;

pub struct AuthService {
    lockout: LockoutPolicy,
}

impl AuthService {
    pub fn new(lockout: LockoutPolicy) -> Self {
        Self { lockout }
    }

    /// Inscription d'un nouveau compte.
    /// Retourne le profil et un premier token de session (comportement
    /// d'onboarding: pas d'entrée d'historique, celles-ci ne naissent
    /// qu'au login).
    pub fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, AppError> {
        // Validation email
        if !Self::is_valid_email(&request.email) {
            return Err(AppError::InvalidEmail);
        }

        // Validation password
        if !PasswordManager::is_strong(&request.password) {
            return Err(AppError::WeakPassword(
                "Password must be at least 8 characters with uppercase, lowercase and numbers"
                    .to_string(),
            ));
        }

        // Validation langue préférée
        let preferred_language = match request.preferred_language.as_deref() {
            None => DEFAULT_LANGUAGE.to_string(),
            Some(lang) if SUPPORTED_LANGUAGES.contains(&lang) => lang.to_string(),
            Some(other) => {
                return Err(AppError::validation(format!(
                    "Unsupported language: {other}"
                )));
            }
        };

        // Vérifier que l'email n'existe pas
        if AccountRepository::find_by_email(&request.email)?.is_some() {
            return Err(AppError::AccountAlreadyExists);
        }

        // Hash le password
        let password_hash = PasswordManager::hash(&request.password)?;

        let new_account = NewAccount {
            email: request.email,
            name: request.name,
            phone: request.phone,
            preferred_language,
            password_hash,
        };

        let account = AccountRepository::create(&new_account)?;
        let token = self.issue_token(account.id)?;

        Ok(RegisterResponse {
            message: "User registered successfully".to_string(),
            user: account.into(),
            token,
        })
    }

    /// Connexion: vérifie les identifiants, applique le verrouillage,
    /// émet un token et consigne l'entrée d'historique.
    ///
    /// Le mot de passe est vérifié AVANT le verrou: un mauvais mot de passe
    /// répond toujours `InvalidCredentials`, même pendant un verrouillage.
    pub fn login(
        &self,
        request: &LoginRequest,
        ip_address: &str,
        user_agent: Option<String>,
    ) -> Result<LoginResponse, AppError> {
        let now = Utc::now();

        // Correspondance exacte sur l'email, telle qu'enregistrée
        let Some(mut account) = AccountRepository::find_by_email(&request.email)? else {
            // Compte absent: rien à incrémenter
            return Err(AppError::InvalidCredentials);
        };

        // Compte désactivé: indiscernable d'un mauvais mot de passe,
        // et son compteur ne bouge pas
        if !account.is_active {
            return Err(AppError::InvalidCredentials);
        }

        if !PasswordManager::verify(&request.password, &account.password_hash)? {
            // Échec comptabilisé quel que soit l'état du verrou
            AccountRepository::record_failed_attempt(account.id, now)?;
            return Err(AppError::InvalidCredentials);
        }

        if let LockoutStatus::Locked { retry_after } = self.lockout.check(
            account.failed_login_attempts,
            account.last_login_attempt,
            now,
        ) {
            tracing::warn!(account_id = %account.id, "Login rejected: account locked");
            return Err(AppError::AccountLocked {
                retry_after_minutes: retry_after.num_minutes().max(1),
            });
        }

        // Succès: remise à zéro du compteur et horodatage
        AccountRepository::record_successful_login(account.id, now)?;
        account.failed_login_attempts = 0;
        account.last_login_at = Some(now);

        let token = self.issue_token(account.id)?;

        // Entrée d'audit de la session
        let device_type = device::classify(user_agent.as_deref());
        let history_record = NewLoginHistoryRecord {
            account_id: account.id,
            ip_address,
            user_agent: &user_agent,
            device_type: device_type.as_str(),
            logged_in_at: now,
        };
        LoginHistoryRepository::create(&history_record)?;

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            user: account.into(),
            token,
            token_type: "Bearer".to_string(),
        })
    }

    /// Déconnexion: clôt l'entrée d'historique ouverte la plus récente
    /// puis révoque le token de l'appelant uniquement
    pub fn logout(&self, session: &AuthSession) -> Result<(), AppError> {
        LoginHistoryRepository::close_latest_open(session.account_id, Utc::now())?;
        SessionTokenRepository::delete(session.token_id)?;
        Ok(())
    }

    /// Déconnexion de tous les appareils: révoque tous les tokens du compte
    pub fn logout_all(&self, account_id: Uuid) -> Result<(), AppError> {
        let revoked = SessionTokenRepository::delete_by_account(account_id)?;
        tracing::debug!(%account_id, revoked, "Revoked all sessions");
        Ok(())
    }

    /// Rotation: révoque TOUS les tokens existants (y compris celui qui
    /// porte la requête) puis en émet un seul nouveau
    pub fn refresh(&self, account_id: Uuid) -> Result<TokenResponse, AppError> {
        SessionTokenRepository::delete_by_account(account_id)?;
        let token = self.issue_token(account_id)?;

        Ok(TokenResponse {
            token,
            token_type: "Bearer".to_string(),
        })
    }

    /// Changement de mot de passe; peut révoquer les autres sessions
    /// en épargnant le token de l'appelant
    pub fn change_password(
        &self,
        session: &AuthSession,
        request: &ChangePasswordRequest,
    ) -> Result<(), AppError> {
        let account = AccountRepository::find_by_id(session.account_id)?
            .ok_or_else(|| AppError::not_found("Account"))?;

        if !PasswordManager::verify(&request.current_password, &account.password_hash)? {
            return Err(AppError::CurrentPasswordIncorrect);
        }

        if !PasswordManager::is_strong(&request.new_password) {
            return Err(AppError::WeakPassword(
                "Password must be at least 8 characters with uppercase, lowercase and numbers"
                    .to_string(),
            ));
        }

        let new_hash = PasswordManager::hash(&request.new_password)?;
        AccountRepository::update_password(account.id, &new_hash)?;

        if request.logout_other_devices {
            SessionTokenRepository::delete_by_account_except(account.id, session.token_id)?;
        }

        Ok(())
    }

    /// Dernières sessions du compte, les plus récentes d'abord
    pub fn login_history(&self, account_id: Uuid) -> Result<Vec<LoginHistoryEntry>, AppError> {
        let records = LoginHistoryRepository::recent(account_id, HISTORY_PAGE_SIZE)?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Récupère le profil du compte courant
    pub fn current_user(&self, account_id: Uuid) -> Result<UserResponse, AppError> {
        AccountRepository::find_by_id(account_id)?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::not_found("Account"))
    }

    /// Désactivation logique du compte + révocation de toutes les sessions.
    /// Le compte n'est jamais supprimé physiquement.
    pub fn deactivate(&self, account_id: Uuid) -> Result<(), AppError> {
        AccountRepository::deactivate(account_id)?;
        SessionTokenRepository::delete_by_account(account_id)?;
        Ok(())
    }

    fn issue_token(&self, account_id: Uuid) -> Result<String, AppError> {
        let token = generate_session_token()?;
        SessionTokenRepository::create(&NewSessionToken {
            account_id,
            token: token.clone(),
        })?;
        Ok(token)
    }

    // === Helpers de validation ===

    fn is_valid_email(email: &str) -> bool {
        email.contains('@') && email.contains('.') && email.len() > 5
    }
}
