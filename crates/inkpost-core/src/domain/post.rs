use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::validation::PostDraft;

/// Post entity - represents a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Reference to a category; not checked against the category store.
    pub category_id: Option<Uuid>,
    pub featured_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post from validated input.
    pub fn new(draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            category_id: draft.category_id,
            featured_image: draft.featured_image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every editable field, keeping identity and creation time.
    ///
    /// `updated_at` never moves backwards, even if the clock does.
    pub fn replace(mut self, draft: PostDraft) -> Self {
        self.title = draft.title;
        self.content = draft.content;
        self.category_id = draft.category_id;
        self.featured_image = draft.featured_image;
        self.updated_at = Utc::now().max(self.updated_at);
        self
    }
}

/// A post with its category reference resolved.
///
/// `category` is `None` both when the post has no category and when the
/// referenced category does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWithCategory {
    pub post: Post,
    pub category: Option<Category>,
}

impl PostWithCategory {
    pub fn new(post: Post, category: Option<Category>) -> Self {
        Self { post, category }
    }
}
