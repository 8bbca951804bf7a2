use chrono::{DateTime, Utc};
use serde::Deserialize;

// No field is required and nothing is validated: an omitted field is
// bound as NULL and the schema decides what happens.

#[derive(Debug, Deserialize)]
pub struct PostPayload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "dateCreation")]
    pub date_creation: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub password: Option<String>,
}
