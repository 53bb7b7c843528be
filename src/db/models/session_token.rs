use crate::db::schema::session_tokens;
use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable, Selectable};
use uuid::Uuid;

/// Jeton de session opaque — valable jusqu'à révocation explicite
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = session_tokens)]
pub struct NewSessionToken {
    pub account_id: Uuid,
    pub token: String,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = session_tokens)]
pub struct SessionToken {
    pub id: Uuid,
    pub account_id: Uuid,
    pub token: String,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
}
