//! Template context — serializable rendering payload built from the loaded
//! project records.

use serde::Serialize;

use folio_core::{organize, CategoryGroups, Portfolio, ProjectRecord};

use crate::error::RenderError;

/// Everything a page template can see.
///
/// Exposed to templates as three variables:
///
/// | Variable           | Value                                            |
/// |--------------------|--------------------------------------------------|
/// | `projects`         | every record, in data-file order                 |
/// | `categories`       | label → records, labels in first-seen order      |
/// | `featured_project` | the highlighted record, or `null` when empty     |
///
/// Built once per run; fields are read-only after construction.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext<'a> {
    projects: &'a [ProjectRecord],
    categories: CategoryGroups,
    featured_project: Option<&'a ProjectRecord>,
}

impl<'a> RenderContext<'a> {
    /// Organize `projects` and build the context from the result.
    pub fn new(projects: &'a [ProjectRecord]) -> Self {
        Self::from_portfolio(projects, organize(projects))
    }

    /// Build a context from an already organized portfolio.
    pub fn from_portfolio(projects: &'a [ProjectRecord], portfolio: Portfolio<'a>) -> Self {
        RenderContext {
            projects,
            categories: portfolio.categories,
            featured_project: portfolio.featured,
        }
    }

    pub fn projects(&self) -> &'a [ProjectRecord] {
        self.projects
    }

    pub fn categories(&self) -> &CategoryGroups {
        &self.categories
    }

    pub fn featured_project(&self) -> Option<&'a ProjectRecord> {
        self.featured_project
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        let value = serde_json::to_value(self)?;
        tera::Context::from_value(value).map_err(RenderError::from)
    }
}
