use crate::dto::{PostPayload, UserPayload};
use crate::errors::StoreError;
use crate::models::{Post, User};
use crate::store::Store;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI32, Ordering};

/// In-memory [`Store`] used by the integration tests.
///
/// Mirrors the Postgres semantics: ids count up from 1, updates
/// overwrite every non-id field, and listing order is unspecified.
#[derive(Default)]
pub struct MemoryStore {
    posts: DashMap<i32, Post>,
    users: DashMap<i32, User>,
    next_post_id: AtomicI32,
    next_user_id: AtomicI32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn create_post(&self, fields: PostPayload) -> Result<Post, StoreError> {
        let id = self.next_post_id.fetch_add(1, Ordering::SeqCst) + 1;
        let post = Post {
            id,
            title: fields.title,
            content: fields.content,
            description: fields.description,
            date_creation: fields.date_creation,
        };
        self.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: i32, fields: PostPayload) -> Result<Option<Post>, StoreError> {
        match self.posts.get_mut(&id) {
            Some(mut entry) => {
                let post = Post {
                    id,
                    title: fields.title,
                    content: fields.content,
                    description: fields.description,
                    date_creation: fields.date_creation,
                };
                *entry = post.clone();
                Ok(Some(post))
            }
            None => Ok(None),
        }
    }

    async fn delete_post(&self, id: i32) -> Result<Option<Post>, StoreError> {
        Ok(self.posts.remove(&id).map(|(_, post)| post))
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn create_user(&self, fields: UserPayload) -> Result<User, StoreError> {
        let id = self.next_user_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id,
            nom: fields.nom,
            prenom: fields.prenom,
            email: fields.email,
            address: fields.address,
            password: fields.password,
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: i32, fields: UserPayload) -> Result<Option<User>, StoreError> {
        match self.users.get_mut(&id) {
            Some(mut entry) => {
                let user = User {
                    id,
                    nom: fields.nom,
                    prenom: fields.prenom,
                    email: fields.email,
                    address: fields.address,
                    password: fields.password,
                };
                *entry = user.clone();
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    async fn delete_user(&self, id: i32) -> Result<Option<User>, StoreError> {
        Ok(self.users.remove(&id).map(|(_, user)| user))
    }
}
