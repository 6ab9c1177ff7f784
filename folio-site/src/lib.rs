//! # folio-site
//!
//! Site layout, page writer and the generation pipeline.
//!
//! Call [`generate`] with a [`SitePaths`] to turn `data/projects.json` and
//! `templates/index.html` into the site's `index.html`, or [`generate_with`] to
//! supply a different [`folio_renderer::TemplateRenderer`].

pub mod error;
pub mod paths;
pub mod pipeline;
pub mod writer;

pub use error::GenerateError;
pub use paths::SitePaths;
pub use pipeline::{generate, generate_with, GenerateReport};
pub use writer::{write_document, WriteResult};
