//! Generation pipeline: load → organize → render → write.

use std::path::PathBuf;

use folio_core::{loader, organize, ProjectId, ProjectRecord};
use folio_renderer::{RenderContext, TemplateEngine, TemplateRenderer};

use crate::error::GenerateError;
use crate::paths::SitePaths;
use crate::writer::write_document;

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub project_count: usize,
    pub category_count: usize,
    pub featured_id: Option<ProjectId>,
}

/// Run the pipeline for `paths` with the Tera engine loaded from
/// `paths.template_dir`.
pub fn generate(paths: &SitePaths) -> Result<GenerateReport, GenerateError> {
    // Load before building the engine so a missing data file wins.
    let projects = loader::load_projects_at(&paths.data_file)?;
    let engine = TemplateEngine::from_dir(&paths.template_dir)?;
    render_and_write(paths, &projects, &engine)
}

/// Run the pipeline for `paths` with a caller-provided renderer.
pub fn generate_with<R>(paths: &SitePaths, renderer: &R) -> Result<GenerateReport, GenerateError>
where
    R: TemplateRenderer + ?Sized,
{
    let projects = loader::load_projects_at(&paths.data_file)?;
    render_and_write(paths, &projects, renderer)
}

fn render_and_write<R>(
    paths: &SitePaths,
    projects: &[ProjectRecord],
    renderer: &R,
) -> Result<GenerateReport, GenerateError>
where
    R: TemplateRenderer + ?Sized,
{
    let portfolio = organize(projects);
    let category_count = portfolio.categories.len();
    let featured_id = portfolio
        .featured
        .and_then(ProjectRecord::id)
        .map(ProjectId::from);

    let ctx = RenderContext::from_portfolio(projects, portfolio);
    let html = renderer.render(&paths.template_name, &ctx)?;
    let written = write_document(&paths.output_file, &html)?;

    let report = GenerateReport {
        output_path: written.path,
        bytes_written: written.bytes,
        project_count: projects.len(),
        category_count,
        featured_id,
    };
    tracing::info!(
        projects = report.project_count,
        categories = report.category_count,
        featured = ?report.featured_id.as_ref().map(ToString::to_string),
        "generated {}",
        report.output_path.display()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;

    use folio_renderer::RenderError;
    use tempfile::TempDir;

    use super::*;

    /// Records what it was asked to render and returns a fixed page.
    struct FakeRenderer {
        seen: RefCell<Vec<(String, serde_json::Value)>>,
    }

    impl FakeRenderer {
        fn new() -> Self {
            FakeRenderer {
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl TemplateRenderer for FakeRenderer {
        fn render(&self, name: &str, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
            let value = serde_json::to_value(ctx)?;
            self.seen.borrow_mut().push((name.to_string(), value));
            Ok("<p>fake</p>".to_string())
        }
    }

    fn site(data: Option<&str>) -> (TempDir, SitePaths) {
        let root = TempDir::new().unwrap();
        let paths = SitePaths::at(root.path());
        if let Some(data) = data {
            fs::create_dir_all(paths.data_file.parent().unwrap()).unwrap();
            fs::write(&paths.data_file, data).unwrap();
        }
        (root, paths)
    }

    #[test]
    fn renderer_receives_context_and_template_name() {
        let (_root, paths) = site(Some(
            r#"[{"id":"a","category":"Web"},{"id":"crm-orchestrator","category":"Infra"}]"#,
        ));
        let renderer = FakeRenderer::new();

        let report = generate_with(&paths, &renderer).expect("generate");

        let seen = renderer.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "index.html");
        assert_eq!(seen[0].1["featured_project"]["id"], "crm-orchestrator");
        assert_eq!(report.project_count, 2);
        assert_eq!(report.category_count, 2);
        assert_eq!(report.featured_id, Some(ProjectId::from("crm-orchestrator")));
        assert_eq!(fs::read_to_string(&paths.output_file).unwrap(), "<p>fake</p>");
    }

    #[test]
    fn missing_data_never_reaches_renderer() {
        let (_root, paths) = site(None);
        let renderer = FakeRenderer::new();

        let err = generate_with(&paths, &renderer).unwrap_err();
        assert!(err.is_missing_data_source(), "got: {err}");
        assert!(renderer.seen.borrow().is_empty());
        assert!(!paths.output_file.exists());
    }

    #[test]
    fn empty_portfolio_has_no_featured_id() {
        let (_root, paths) = site(Some("[]"));
        let report = generate_with(&paths, &FakeRenderer::new()).expect("generate");
        assert_eq!(report.project_count, 0);
        assert!(report.featured_id.is_none());
    }

    #[test]
    fn non_string_ids_still_generate() {
        let (_root, paths) = site(Some(r#"[{"id":42,"category":2024},{"id":null,"category":null}]"#));
        let renderer = FakeRenderer::new();

        let report = generate_with(&paths, &renderer).expect("generate");

        assert_eq!(report.category_count, 2);
        assert!(report.featured_id.is_none());
        let seen = renderer.seen.borrow();
        assert_eq!(seen[0].1["featured_project"]["id"], 42);
        let second = seen[0].1["projects"][1].as_object().unwrap();
        assert!(second["category"].is_null(), "null category must survive: {second:?}");
    }
}
