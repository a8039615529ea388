//! Listing filter for posts.

use uuid::Uuid;

use super::post::Post;

/// Constraints applied when listing posts.
///
/// Each dimension is optional; an absent constraint matches every post.
/// Search is a case-insensitive substring match against title or content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    search: Option<String>,
    category_id: Option<Uuid>,
}

impl PostFilter {
    /// Build a filter. Blank search text is treated as no constraint.
    pub fn new(search: Option<&str>, category_id: Option<Uuid>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            search,
            category_id,
        }
    }

    /// Build a filter from raw query-string values.
    ///
    /// Returns `None` when `category` is present but not a well-formed id:
    /// such a filter cannot match any post.
    pub fn from_query(search: Option<&str>, category: Option<&str>) -> Option<Self> {
        let category_id = match category.map(str::trim).filter(|c| !c.is_empty()) {
            Some(raw) => Some(Uuid::parse_str(raw).ok()?),
            None => None,
        };

        Some(Self::new(search, category_id))
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn category_id(&self) -> Option<Uuid> {
        self.category_id
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search.is_none() && self.category_id.is_none()
    }

    /// `LIKE` pattern for the search text with `%`, `_` and `\` escaped.
    pub fn like_pattern(&self) -> Option<String> {
        self.search.as_deref().map(|search| {
            let mut pattern = String::with_capacity(search.len() + 2);
            pattern.push('%');
            for c in search.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }

    /// Whether a post satisfies every constraint of this filter.
    pub fn matches(&self, post: &Post) -> bool {
        if let Some(category_id) = self.category_id
            && post.category_id != Some(category_id)
        {
            return false;
        }

        match &self.search {
            Some(search) => {
                let needle = search.to_lowercase();
                post.title.to_lowercase().contains(&needle)
                    || post.content.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}
