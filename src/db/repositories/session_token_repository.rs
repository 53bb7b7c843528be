use crate::db::connection::get_connection;
use crate::db::error::RepositoryError;
use crate::db::models::session_token::{NewSessionToken, SessionToken};
use crate::db::schema::session_tokens;
use diesel::prelude::*;
use uuid::Uuid;
pub struct SessionTokenRepository;

impl SessionTokenRepository {
    pub fn create(new_token: &NewSessionToken) -> Result<SessionToken, RepositoryError> {
        let mut conn = get_connection()?;

        diesel::insert_into(session_tokens::table)
            .values(new_token)
            .get_result::<SessionToken>(&mut conn)
            .map_err(Into::into)
    }

    /// Résolution d'un token présenté par un client — correspondance exacte
    pub fn find_by_token(token: &str) -> Result<Option<SessionToken>, RepositoryError> {
        let mut conn = get_connection()?;

        session_tokens::table
            .filter(session_tokens::token.eq(token))
            .first::<SessionToken>(&mut conn)
            .optional()
            .map_err(Into::into)
    }

    /// Révoque exactement un token
    pub fn delete(id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = get_connection()?;

        diesel::delete(session_tokens::table.filter(session_tokens::id.eq(id)))
            .execute(&mut conn)?;

        Ok(())
    }

    /// Révoque tous les tokens d'un compte (logout de tous les appareils)
    pub fn delete_by_account(account_id: Uuid) -> Result<usize, RepositoryError> {
        let mut conn = get_connection()?;

        diesel::delete(session_tokens::table.filter(session_tokens::account_id.eq(account_id)))
            .execute(&mut conn)
            .map_err(Into::into)
    }

    /// Révoque tous les tokens d'un compte sauf celui de l'appelant
    /// (changement de mot de passe avec `logout_other_devices`)
    pub fn delete_by_account_except(
        account_id: Uuid,
        keep_token_id: Uuid,
    ) -> Result<usize, RepositoryError> {
        let mut conn = get_connection()?;

        diesel::delete(
            session_tokens::table
                .filter(session_tokens::account_id.eq(account_id))
                .filter(session_tokens::id.ne(keep_token_id)),
        )
        .execute(&mut conn)
        .map_err(Into::into)
    }

    #[cfg(test)]
    pub fn count_by_account(account_id: Uuid) -> Result<i64, RepositoryError> {
        let mut conn = get_connection()?;

        session_tokens::table
            .filter(session_tokens::account_id.eq(account_id))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(Into::into)
    }
}
