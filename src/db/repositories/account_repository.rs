use crate::db::connection::get_connection;
use crate::db::error::RepositoryError;
use crate::db::models::account::{Account, NewAccount};
use crate::db::schema::accounts;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;
pub struct AccountRepository;

impl AccountRepository {
    pub fn create(new_account: &NewAccount) -> Result<Account, RepositoryError> {
        let mut conn = get_connection()?;

        diesel::insert_into(accounts::table)
            .values(new_account)
            .get_result::<Account>(&mut conn)
            .map_err(Into::into)
    }

    /// Recherche par email — correspondance exacte, sensible à la casse
    pub fn find_by_email(email: &str) -> Result<Option<Account>, RepositoryError> {
        let mut conn = get_connection()?;

        accounts::table
            .filter(accounts::email.eq(email))
            .first::<Account>(&mut conn)
            .optional()
            .map_err(Into::into)
    }

    pub fn find_by_id(id: Uuid) -> Result<Option<Account>, RepositoryError> {
        let mut conn = get_connection()?;

        accounts::table
            .filter(accounts::id.eq(id))
            .first::<Account>(&mut conn)
            .optional()
            .map_err(Into::into)
    }

    /// Incrémente le compteur d'échecs et horodate la tentative.
    // Single UPDATE with an in-database increment: concurrent failed logins
    // must not lose counter updates.
    pub fn record_failed_attempt(id: Uuid, now: DateTime<Utc>) -> Result<(), RepositoryError> {
        let mut conn = get_connection()?;

        diesel::update(accounts::table.filter(accounts::id.eq(id)))
            .set((
                accounts::failed_login_attempts.eq(accounts::failed_login_attempts + 1),
                accounts::last_login_attempt.eq(now),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    /// Remet le compteur à zéro et horodate la connexion réussie.
    /// Le compteur ne revient à zéro par aucun autre chemin.
    pub fn record_successful_login(id: Uuid, now: DateTime<Utc>) -> Result<(), RepositoryError> {
        let mut conn = get_connection()?;

        diesel::update(accounts::table.filter(accounts::id.eq(id)))
            .set((
                accounts::failed_login_attempts.eq(0),
                accounts::last_login_at.eq(now),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    pub fn update_password(id: Uuid, password_hash: &str) -> Result<(), RepositoryError> {
        let mut conn = get_connection()?;

        diesel::update(accounts::table.filter(accounts::id.eq(id)))
            .set(accounts::password_hash.eq(password_hash))
            .execute(&mut conn)?;

        Ok(())
    }

    /// Désactivation logique — les comptes ne sont jamais supprimés physiquement
    pub fn deactivate(id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = get_connection()?;

        diesel::update(accounts::table.filter(accounts::id.eq(id)))
            .set(accounts::is_active.eq(false))
            .execute(&mut conn)?;

        Ok(())
    }

    #[cfg(test)]
    pub fn delete(id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = get_connection()?;

        diesel::delete(accounts::table.filter(accounts::id.eq(id))).execute(&mut conn)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::init_test_pool;

    fn test_account() -> NewAccount {
        init_test_pool();

        let unique = Uuid::new_v4();
        NewAccount {
            email: format!("account_{unique}@example.com"),
            name: "Test Account".to_string(),
            phone: None,
            preferred_language: "en".to_string(),
            password_hash: "not_a_real_hash".to_string(),
        }
    }

    #[test]
    #[ignore = "requires a running Postgres"]
    fn create_and_find_by_email() {
        let new_account = test_account();
        let created = AccountRepository::create(&new_account).expect("create account");

        let found = AccountRepository::find_by_email(&new_account.email)
            .expect("query")
            .expect("account should exist");
        assert_eq!(found.id, created.id);
        assert_eq!(found.failed_login_attempts, 0);
        assert!(found.is_active);

        let _ = AccountRepository::delete(created.id);
    }

    #[test]
    #[ignore = "requires a running Postgres"]
    fn email_lookup_is_case_sensitive() {
        let new_account = test_account();
        let created = AccountRepository::create(&new_account).expect("create account");

        let found = AccountRepository::find_by_email(&new_account.email.to_uppercase())
            .expect("query");
        assert!(found.is_none(), "Lookup must not fold case");

        let _ = AccountRepository::delete(created.id);
    }

    #[test]
    #[ignore = "requires a running Postgres"]
    fn failed_attempts_accumulate_and_reset_on_success() {
        let new_account = test_account();
        let created = AccountRepository::create(&new_account).expect("create account");

        for _ in 0..3 {
            AccountRepository::record_failed_attempt(created.id, Utc::now())
                .expect("record failure");
        }
        let after_failures = AccountRepository::find_by_id(created.id)
            .expect("query")
            .expect("exists");
        assert_eq!(after_failures.failed_login_attempts, 3);
        assert!(after_failures.last_login_attempt.is_some());

        AccountRepository::record_successful_login(created.id, Utc::now())
            .expect("record success");
        let after_success = AccountRepository::find_by_id(created.id)
            .expect("query")
            .expect("exists");
        assert_eq!(after_success.failed_login_attempts, 0);
        assert!(after_success.last_login_at.is_some());

        let _ = AccountRepository::delete(created.id);
    }

    #[test]
    #[ignore = "requires a running Postgres"]
    fn deactivate_flips_is_active_without_deleting() {
        let new_account = test_account();
        let created = AccountRepository::create(&new_account).expect("create account");

        AccountRepository::deactivate(created.id).expect("deactivate");

        let found = AccountRepository::find_by_id(created.id)
            .expect("query")
            .expect("row must still exist");
        assert!(!found.is_active);

        let _ = AccountRepository::delete(created.id);
    }
}
