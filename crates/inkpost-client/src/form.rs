//! Create/edit form model.

use inkpost_core::DomainError;
use inkpost_core::domain::PostInput;
use inkpost_shared::FieldErrorBody;
use inkpost_shared::dto::{CategoryResponse, PostRequest, PostResponse};
use uuid::Uuid;

use crate::error::ClientError;

/// Form state for creating or editing a post. Empty strings mean "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    /// Category id, or empty for none.
    pub category: String,
    pub featured_image: String,
}

impl PostForm {
    /// Pre-fill the form from an existing post (edit mode).
    pub fn from_post(post: &PostResponse) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            category: post
                .category
                .as_ref()
                .map(|c| c.id.to_string())
                .unwrap_or_default(),
            featured_image: post.featured_image.clone().unwrap_or_default(),
        }
    }

    /// Pick a category by id or by name. An empty value clears it.
    pub fn select_category(
        &mut self,
        value: &str,
        categories: &[CategoryResponse],
    ) -> Result<(), ClientError> {
        self.category = resolve_category(value, categories)?
            .map(|id| id.to_string())
            .unwrap_or_default();
        Ok(())
    }

    /// Validate with the same rules as the server and build the request body.
    pub fn submit(&self) -> Result<PostRequest, ClientError> {
        let input = PostInput {
            title: self.title.clone(),
            content: self.content.clone(),
            category: Some(self.category.clone()),
            featured_image: Some(self.featured_image.clone()),
        };

        let draft = input.validate().map_err(|e| match e {
            DomainError::Validation(errors) => ClientError::Validation(
                errors
                    .into_iter()
                    .map(|e| FieldErrorBody {
                        field: e.field.to_string(),
                        message: e.message,
                    })
                    .collect(),
            ),
            other => ClientError::InvalidInput(other.to_string()),
        })?;

        Ok(PostRequest {
            title: draft.title,
            content: draft.content,
            category: draft.category_id.map(|id| id.to_string()),
            featured_image: draft.featured_image,
        })
    }
}

/// Resolve a category given as an id or a case-insensitive name.
///
/// Well-formed ids pass through unchecked; empty input means no category.
pub fn resolve_category(
    value: &str,
    categories: &[CategoryResponse],
) -> Result<Option<Uuid>, ClientError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(id) = Uuid::parse_str(value) {
        return Ok(Some(id));
    }

    categories
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(value))
        .map(|c| Some(c.id))
        .ok_or_else(|| ClientError::InvalidInput(format!("unknown category '{value}'")))
}
