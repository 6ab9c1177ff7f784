//! # folio-renderer
//!
//! Tera-based page rendering for the portfolio generator.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use folio_core::ProjectRecord;
//! use folio_renderer::{RenderContext, TemplateEngine, TemplateRenderer, INDEX_TEMPLATE};
//!
//! fn render_page(projects: &[ProjectRecord]) -> Option<String> {
//!     let engine = TemplateEngine::from_dir(Path::new("templates")).ok()?;
//!     engine.render(INDEX_TEMPLATE, &RenderContext::new(projects)).ok()
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::RenderContext;
pub use engine::{TemplateEngine, TemplateRenderer, INDEX_TEMPLATE};
pub use error::RenderError;
