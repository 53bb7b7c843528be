use crate::db::connection::get_connection;
use crate::db::error::RepositoryError;
use crate::db::models::login_history::{LoginHistoryRecord, NewLoginHistoryRecord};
use crate::db::schema::login_history;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;
pub struct LoginHistoryRepository;

impl LoginHistoryRepository {
    /// Ajoute une entrée d'audit pour une connexion réussie
    pub fn create(record: &NewLoginHistoryRecord<'_>) -> Result<LoginHistoryRecord, RepositoryError> {
        let mut conn = get_connection()?;

        diesel::insert_into(login_history::table)
            .values(record.clone())
            .get_result::<LoginHistoryRecord>(&mut conn)
            .map_err(Into::into)
    }

    /// Clôture l'entrée ouverte la plus récente du compte (logged_out_at null).
    /// No-op silencieux s'il n'y en a aucune.
    pub fn close_latest_open(
        account_id: Uuid,
        logged_out_at: DateTime<Utc>,
    ) -> Result<Option<Uuid>, RepositoryError> {
        let mut conn = get_connection()?;

        let open_entry = login_history::table
            .filter(login_history::account_id.eq(account_id))
            .filter(login_history::logged_out_at.is_null())
            .order_by(login_history::logged_in_at.desc())
            .select(login_history::id)
            .first::<Uuid>(&mut conn)
            .optional()?;

        let Some(entry_id) = open_entry else {
            return Ok(None);
        };

        diesel::update(
            login_history::table
                .filter(login_history::id.eq(entry_id))
                .filter(login_history::logged_out_at.is_null()),
        )
        .set(login_history::logged_out_at.eq(logged_out_at))
        .execute(&mut conn)?;

        Ok(Some(entry_id))
    }

    /// Dernières entrées d'un compte, les plus récentes d'abord
    pub fn recent(account_id: Uuid, limit: i64) -> Result<Vec<LoginHistoryRecord>, RepositoryError> {
        let mut conn = get_connection()?;

        login_history::table
            .filter(login_history::account_id.eq(account_id))
            .order_by(login_history::logged_in_at.desc())
            .limit(limit)
            .load::<LoginHistoryRecord>(&mut conn)
            .map_err(Into::into)
    }

    #[cfg(test)]
    pub fn delete_by_account(account_id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = get_connection()?;

        diesel::delete(login_history::table.filter(login_history::account_id.eq(account_id)))
            .execute(&mut conn)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::init_test_pool;
    use crate::db::models::account::NewAccount;
    use crate::db::repositories::account_repository::AccountRepository;

    fn create_test_account() -> Uuid {
        init_test_pool();

        let new_account = NewAccount {
            email: format!("history_test_{}@example.com", Uuid::new_v4()),
            name: "History Tester".to_string(),
            phone: None,
            preferred_language: "en".to_string(),
            password_hash: "not_a_real_hash".to_string(),
        };

        AccountRepository::create(&new_account)
            .expect("Failed to create test account")
            .id
    }

    fn record_login(account_id: Uuid, user_agent: &Option<String>) -> LoginHistoryRecord {
        let record = NewLoginHistoryRecord {
            account_id,
            ip_address: "203.0.113.7",
            user_agent,
            device_type: "desktop",
            logged_in_at: Utc::now(),
        };
        LoginHistoryRepository::create(&record).expect("Failed to create history entry")
    }

    fn cleanup(account_id: Uuid) {
        let _ = LoginHistoryRepository::delete_by_account(account_id);
        let _ = AccountRepository::delete(account_id);
    }

    #[test]
    #[ignore = "requires a running Postgres"]
    fn create_appends_an_open_entry() {
        let account_id = create_test_account();
        let ua = Some("Mozilla/5.0 (Windows NT 10.0)".to_string());

        let entry = record_login(account_id, &ua);

        assert_eq!(entry.account_id, account_id);
        assert_eq!(entry.device_type, "desktop");
        assert!(entry.logged_out_at.is_none(), "New entries start open");

        cleanup(account_id);
    }

    #[test]
    #[ignore = "requires a running Postgres"]
    fn close_latest_open_targets_the_newest_open_entry() {
        let account_id = create_test_account();
        let ua = None;
        record_login(account_id, &ua);
        let newest = record_login(account_id, &ua);

        let closed = LoginHistoryRepository::close_latest_open(account_id, Utc::now())
            .expect("close");
        assert_eq!(closed, Some(newest.id));

        let entries = LoginHistoryRepository::recent(account_id, 10).expect("list");
        let closed_entry = entries.iter().find(|e| e.id == newest.id).expect("entry");
        assert!(closed_entry.logged_out_at.is_some());

        cleanup(account_id);
    }

    #[test]
    #[ignore = "requires a running Postgres"]
    fn close_latest_open_is_a_noop_without_open_entries() {
        let account_id = create_test_account();

        let closed = LoginHistoryRepository::close_latest_open(account_id, Utc::now())
            .expect("close should not error");
        assert_eq!(closed, None);

        cleanup(account_id);
    }

    #[test]
    #[ignore = "requires a running Postgres"]
    fn recent_lists_newest_first_with_limit() {
        let account_id = create_test_account();
        let ua = None;
        for _ in 0..3 {
            record_login(account_id, &ua);
        }

        let entries = LoginHistoryRepository::recent(account_id, 2).expect("list");
        assert_eq!(entries.len(), 2);
        assert!(entries[0].logged_in_at >= entries[1].logged_in_at);

        cleanup(account_id);
    }
}
