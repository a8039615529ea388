//! # Inkpost Client
//!
//! Everything a front end needs to talk to the Inkpost API: a typed HTTP
//! client, the create/edit form model with client-side validation, plain-text
//! views of posts, and a debouncer for search-as-you-type.

pub mod api;
pub mod debounce;
pub mod error;
pub mod form;
pub mod views;

pub use api::ApiClient;
pub use error::ClientError;
pub use form::PostForm;
