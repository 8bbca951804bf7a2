use crate::dto::{PostPayload, UserPayload};
use crate::errors::StoreError;
use crate::models::{Post, User};
use crate::store::Store;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// PostgreSQL-backed [`Store`] over a bounded connection pool.
///
/// Each method acquires a connection from the pool for the duration of
/// its single statement; release is handled by the pool on completion
/// or failure.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .min_connections(5)
            .acquire_timeout(Duration::from_secs(8))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        // No ORDER BY: listing order is whatever storage yields.
        let posts = sqlx::query_as::<_, Post>("SELECT * FROM posts")
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    async fn create_post(&self, fields: PostPayload) -> Result<Post, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            r#"INSERT INTO posts (title, content, description, "dateCreation")
               VALUES ($1, $2, $3, $4)
               RETURNING *"#,
        )
        .bind(fields.title)
        .bind(fields.content)
        .bind(fields.description)
        .bind(fields.date_creation)
        .fetch_one(&self.pool)
        .await?;
        Ok(post)
    }

    async fn update_post(&self, id: i32, fields: PostPayload) -> Result<Option<Post>, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            r#"UPDATE posts
               SET title = $1, content = $2, description = $3, "dateCreation" = $4
               WHERE id = $5
               RETURNING *"#,
        )
        .bind(fields.title)
        .bind(fields.content)
        .bind(fields.description)
        .bind(fields.date_creation)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    async fn delete_post(&self, id: i32) -> Result<Option<Post>, StoreError> {
        let post = sqlx::query_as::<_, Post>("DELETE FROM posts WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn create_user(&self, fields: UserPayload) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (nom, prenom, email, address, password)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(fields.nom)
        .bind(fields.prenom)
        .bind(fields.email)
        .bind(fields.address)
        .bind(fields.password)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn update_user(&self, id: i32, fields: UserPayload) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users
             SET nom = $1, prenom = $2, email = $3, address = $4, password = $5
             WHERE id = $6
             RETURNING *",
        )
        .bind(fields.nom)
        .bind(fields.prenom)
        .bind(fields.email)
        .bind(fields.address)
        .bind(fields.password)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("DELETE FROM users WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}
