//! In-memory repositories - used when no database is configured.
//!
//! Data is lost on process restart.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use inkpost_core::domain::{Category, Post, PostFilter, PostWithCategory};
use inkpost_core::error::RepoError;
use inkpost_core::ports::{BaseRepository, CategoryRepository, PostRepository};

type CategoryStore = Arc<RwLock<Vec<Category>>>;

/// In-memory category repository. Keeps insertion order.
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: CategoryStore,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, RepoError> {
        Ok(self.categories.read().await.clone())
    }

    async fn ensure(&self, name: &str) -> Result<Category, RepoError> {
        let mut categories = self.categories.write().await;

        if let Some(existing) = categories.iter().find(|c| c.name == name) {
            return Ok(existing.clone());
        }

        let category = Category::new(name);
        categories.push(category.clone());
        Ok(category)
    }
}

/// In-memory post repository.
///
/// Resolves category references against the category repository it was
/// built from.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
    categories: CategoryStore,
}

impl InMemoryPostRepository {
    pub fn new(categories: &InMemoryCategoryRepository) -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
            categories: categories.categories.clone(),
        }
    }

    fn resolve(post: Post, categories: &[Category]) -> PostWithCategory {
        let category = post
            .category_id
            .and_then(|id| categories.iter().find(|c| c.id == id).cloned());
        PostWithCategory::new(post, category)
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| p.id == post.id) {
            return Err(RepoError::Constraint(format!("post {} already exists", post.id)));
        }

        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let slot = posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(RepoError::NotFound)?;

        *slot = post.clone();
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, filter: &PostFilter) -> Result<Vec<PostWithCategory>, RepoError> {
        let posts = self.posts.read().await;
        let categories = self.categories.read().await;

        // Later insertions win ties on created_at.
        let mut matching: Vec<Post> = posts
            .iter()
            .rev()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matching
            .into_iter()
            .map(|p| Self::resolve(p, &categories))
            .collect())
    }

    async fn find_with_category(&self, id: Uuid) -> Result<Option<PostWithCategory>, RepoError> {
        let post = self.find_by_id(id).await?;
        let categories = self.categories.read().await;

        Ok(post.map(|p| Self::resolve(p, &categories)))
    }
}
