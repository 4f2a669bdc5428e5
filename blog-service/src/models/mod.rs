/// Persisted entity structs
///
/// One struct per table, mapped with `sqlx::FromRow`. Request/response DTOs
/// live next to their handlers.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub text: Option<String>,
    pub publish_date: DateTime<Utc>,
    pub user_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i32,
    pub name: String,
    pub text: String,
    pub date: DateTime<Utc>,
    pub post_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tag {
    pub id: i32,
    pub title: String,
}

/// Tag joined with its post-association count, as produced by the
/// top-tags ranking query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TagWithCount {
    pub id: i32,
    pub title: String,
    pub total: i64,
}

/// Dormant entity: no write path exists in the application layer, the
/// admin listing is the only reader.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reminder {
    pub id: i32,
    pub date: Option<DateTime<Utc>>,
    pub email: Option<String>,
    pub text: Option<String>,
}
