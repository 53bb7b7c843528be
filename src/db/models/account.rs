use crate::db::schema::accounts;
use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable, Selectable};
use healthtrack_auth_api::UserResponse;
use uuid::Uuid;

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = accounts)]
pub struct NewAccount {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub preferred_language: String,
    pub password_hash: String,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub preferred_language: String,
    pub password_hash: String,
    pub failed_login_attempts: i32,
    pub last_login_attempt: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[allow(dead_code)]
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for UserResponse {
    fn from(account: Account) -> Self {
        UserResponse {
            id: account.id,
            name: account.name,
            email: account.email,
            phone: account.phone,
            preferred_language: account.preferred_language,
            is_active: account.is_active,
            last_login_at: account.last_login_at,
            created_at: account.created_at,
        }
    }
}
