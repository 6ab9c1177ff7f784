//! Tera rendering engine — [`TemplateRenderer`] seam and [`TemplateEngine`].
//!
//! # Template naming
//!
//! Every file under the template directory is registered under its path
//! relative to that directory, `/`-separated:
//!
//! | File on disk                       | Template name          |
//! |------------------------------------|------------------------|
//! | `templates/index.html`             | `index.html`           |
//! | `templates/partials/card.html`     | `partials/card.html`   |

use std::path::{Path, PathBuf};

use tera::Tera;

use crate::context::RenderContext;
use crate::error::RenderError;

/// Name of the page template rendered by the generator.
pub const INDEX_TEMPLATE: &str = "index.html";

// ---------------------------------------------------------------------------
// TemplateRenderer
// ---------------------------------------------------------------------------

/// Anything that turns a named template plus a [`RenderContext`] into a
/// document.
pub trait TemplateRenderer {
    /// Render template `name` against `ctx`.
    ///
    /// Fails with [`RenderError::TemplateNotFound`] when `name` is unknown
    /// and [`RenderError::Render`] when the template cannot be rendered with
    /// this context.
    fn render(&self, name: &str, ctx: &RenderContext<'_>) -> Result<String, RenderError>;
}

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.is_dir() {
        tracing::debug!("template directory {} not found", dir.display());
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    files.sort();

    let mut templates = Vec::with_capacity(files.len());
    for path in files {
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-backed [`TemplateRenderer`].
///
/// Tera autoescapes templates whose names end in `.html`, so record fields
/// are inserted into HTML pages escaped unless a template opts out with
/// `| safe`.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Load every template under `template_dir`.
    ///
    /// A missing directory yields an engine with no templates; rendering then
    /// reports [`RenderError::TemplateNotFound`].
    pub fn from_dir(template_dir: &Path) -> Result<Self, RenderError> {
        let templates = load_templates(template_dir)?;
        tracing::debug!(
            "registering {} template(s) from {}",
            templates.len(),
            template_dir.display()
        );
        Self::from_raw(templates)
    }

    /// Build an engine from in-memory `(name, source)` pairs.
    pub fn from_raw<I, N, S>(templates: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = (N, S)>,
        N: AsRef<str>,
        S: AsRef<str>,
    {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates)?;
        Ok(TemplateEngine { tera })
    }

    /// `true` if a template is registered under `name`.
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Registered template names, sorted.
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }
}

impl TemplateRenderer for TemplateEngine {
    fn render(&self, name: &str, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        if !self.has_template(name) {
            return Err(RenderError::TemplateNotFound {
                name: name.to_string(),
            });
        }
        let tera_ctx = ctx.to_tera_context()?;
        self.tera
            .render(name, &tera_ctx)
            .map_err(|source| RenderError::Render {
                name: name.to_string(),
                source,
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
