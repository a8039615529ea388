use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, Post, PostFilter, PostWithCategory};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Replace an existing entity. Fails with `RepoError::NotFound` if it is absent.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` if it is absent.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository with category-aware reads.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts matching `filter`, newest-created first, categories resolved.
    async fn list(&self, filter: &PostFilter) -> Result<Vec<PostWithCategory>, RepoError>;

    /// A single post with its category resolved.
    async fn find_with_category(&self, id: Uuid) -> Result<Option<PostWithCategory>, RepoError>;
}

/// Category repository. Categories are read-only over the API.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every known category, in store order.
    async fn list(&self) -> Result<Vec<Category>, RepoError>;

    /// Return the category with this name, creating it if it does not exist.
    async fn ensure(&self, name: &str) -> Result<Category, RepoError>;
}
