use crate::models::{Post, User};
use serde::Serialize;

/// `{msg, post}` envelope returned by post mutations.
///
/// `post` is optional because deleting a post that does not exist still
/// answers 200 with the key left out entirely (legacy behavior the
/// previous implementation exhibited; locked down in tests/api.rs).
#[derive(Debug, Serialize)]
pub struct PostEnvelope {
    pub msg: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Post>,
}

/// `{msg, user}` envelope returned by user mutations.
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub msg: &'static str,
    pub user: User,
}
