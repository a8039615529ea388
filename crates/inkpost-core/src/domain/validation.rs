//! Write-side validation for posts.

use uuid::Uuid;

use crate::error::{DomainError, FieldError};

/// Raw, unvalidated post fields as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub featured_image: Option<String>,
}

/// Post fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category_id: Option<Uuid>,
    pub featured_image: Option<String>,
}

impl PostInput {
    /// Check every field and collect all failures.
    ///
    /// Title and content must be non-empty; whitespace counts as content.
    /// Blank `category` and `featured_image` values mean "none". The category
    /// id only has to be well-formed; it is not looked up.
    pub fn validate(self) -> Result<PostDraft, DomainError> {
        let mut errors = Vec::new();

        if self.title.is_empty() {
            errors.push(FieldError::new("title", "Title is required"));
        }
        if self.content.is_empty() {
            errors.push(FieldError::new("content", "Content is required"));
        }

        let category_id = match non_blank(self.category) {
            Some(raw) => match Uuid::parse_str(&raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push(FieldError::new("category", "Category must be a valid id"));
                    None
                }
            },
            None => None,
        };

        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        Ok(PostDraft {
            title: self.title,
            content: self.content,
            category_id,
            featured_image: non_blank(self.featured_image),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, content: &str) -> PostInput {
        PostInput {
            title: title.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    fn fields(err: DomainError) -> Vec<&'static str> {
        match err {
            DomainError::Validation(errors) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_input_without_category() {
        let draft = input("Hello", "World").validate().unwrap();
        assert_eq!(draft.title, "Hello");
        assert_eq!(draft.content, "World");
        assert_eq!(draft.category_id, None);
        assert_eq!(draft.featured_image, None);
    }

    #[test]
    fn test_missing_title_and_content_are_both_reported() {
        let err = input("", "").validate().unwrap_err();
        assert_eq!(fields(err), vec!["title", "content"]);
    }

    #[test]
    fn test_whitespace_only_title_and_content_are_kept() {
        let draft = input("   ", "\n").validate().unwrap();
        assert_eq!(draft.title, "   ");
        assert_eq!(draft.content, "\n");
    }

    #[test]
    fn test_empty_category_means_none() {
        let draft = PostInput {
            category: Some(String::new()),
            featured_image: Some("  ".to_string()),
            ..input("a", "b")
        }
        .validate()
        .unwrap();

        assert_eq!(draft.category_id, None);
        assert_eq!(draft.featured_image, None);
    }

    #[test]
    fn test_malformed_category_is_a_field_error() {
        let err = PostInput {
            category: Some("tech".to_string()),
            ..input("a", "b")
        }
        .validate()
        .unwrap_err();

        assert_eq!(fields(err), vec!["category"]);
    }

    #[test]
    fn test_unknown_but_well_formed_category_is_accepted() {
        let id = Uuid::new_v4();
        let draft = PostInput {
            category: Some(id.to_string()),
            featured_image: Some("https://img.example/cover.png".to_string()),
            ..input("a", "b")
        }
        .validate()
        .unwrap();

        assert_eq!(draft.category_id, Some(id));
        assert_eq!(
            draft.featured_image.as_deref(),
            Some("https://img.example/cover.png")
        );
    }
}
