//! Folio core library — project records, data loading, organizing.
//!
//! - [`types`] — [`ProjectRecord`] and friends
//! - [`error`] — [`LoadError`]
//! - [`loader`] — read `projects.json`
//! - [`organizer`] — category grouping and featured selection

pub mod error;
pub mod loader;
pub mod organizer;
pub mod types;

pub use error::LoadError;
pub use organizer::{
    featured_project, group_by_category, organize, CategoryGroups, Portfolio, FEATURED_PROJECT_ID,
};
pub use types::{ProjectId, ProjectRecord, DEFAULT_CATEGORY};
