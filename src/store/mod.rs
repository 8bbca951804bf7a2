mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::dto::{PostPayload, UserPayload};
use crate::errors::StoreError;
use crate::models::{Post, User};
use async_trait::async_trait;

/// Storage seam between the HTTP handlers and the database.
///
/// Every method is exactly one statement against storage. Id-targeted
/// methods return `Ok(None)` when no row matched, so the HTTP layer can
/// decide what a miss means for each endpoint.
#[async_trait]
pub trait Store: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;
    async fn create_post(&self, fields: PostPayload) -> Result<Post, StoreError>;
    /// Overwrites every non-id column unconditionally (no merge).
    async fn update_post(&self, id: i32, fields: PostPayload) -> Result<Option<Post>, StoreError>;
    async fn delete_post(&self, id: i32) -> Result<Option<Post>, StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
    async fn create_user(&self, fields: UserPayload) -> Result<User, StoreError>;
    async fn update_user(&self, id: i32, fields: UserPayload) -> Result<Option<User>, StoreError>;
    async fn delete_user(&self, id: i32) -> Result<Option<User>, StoreError>;
}
