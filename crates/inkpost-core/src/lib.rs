//! # Inkpost Core
//!
//! The domain layer of Inkpost.
//! Posts, categories, the listing filter and the write validation rules live here,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
