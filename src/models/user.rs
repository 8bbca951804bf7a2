use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `users` table.
///
/// `password` is stored and serialized back in plaintext, matching the
/// system this replaces. Flagged as a known weakness in DESIGN.md.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub password: Option<String>,
}
