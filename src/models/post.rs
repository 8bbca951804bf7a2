use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `posts` table. Every non-id column is nullable, so a
/// record created from a partial payload reads back with `null` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "dateCreation")]
    #[sqlx(rename = "dateCreation")]
    pub date_creation: Option<DateTime<Utc>>,
}
