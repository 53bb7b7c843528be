use crate::db::schema::login_history;
use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable, Selectable};
use healthtrack_auth_api::LoginHistoryEntry;
use uuid::Uuid;

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = login_history)]
pub struct NewLoginHistoryRecord<'a> {
    pub account_id: Uuid,
    pub ip_address: &'a str,
    pub user_agent: &'a Option<String>,
    pub device_type: &'a str,
    pub logged_in_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = login_history)]
pub struct LoginHistoryRecord {
    pub id: Uuid,
    pub account_id: Uuid,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub device_type: String,
    pub logged_in_at: DateTime<Utc>,
    pub logged_out_at: Option<DateTime<Utc>>,
}

impl From<LoginHistoryRecord> for LoginHistoryEntry {
    fn from(record: LoginHistoryRecord) -> Self {
        LoginHistoryEntry {
            id: record.id,
            ip_address: record.ip_address,
            user_agent: record.user_agent,
            device_type: record.device_type,
            logged_in_at: record.logged_in_at,
            logged_out_at: record.logged_out_at,
        }
    }
}
