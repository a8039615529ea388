//! Domain entities - the core business objects.

mod category;
mod filter;
mod post;
mod validation;

pub use category::Category;
pub use filter::PostFilter;
pub use post::{Post, PostWithCategory};
pub use validation::{PostDraft, PostInput};
