//! Fixed site layout, relative to the site root.
//!
//! ```text
//! <root>/
//!   bin/folio              (the generator)
//!   data/projects.json     (input)
//!   templates/index.html   (page template, plus any partials)
//!   index.html             (output)
//! ```

use std::path::{Path, PathBuf};

use folio_renderer::INDEX_TEMPLATE;

pub const DATA_DIR: &str = "data";
pub const DATA_FILE: &str = "projects.json";
pub const TEMPLATE_DIR: &str = "templates";
pub const OUTPUT_FILE: &str = "index.html";

/// Resolved input and output locations for one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub data_file: PathBuf,
    pub template_dir: PathBuf,
    pub template_name: String,
    pub output_file: PathBuf,
}

impl SitePaths {
    /// Layout rooted at `root`.
    pub fn at(root: &Path) -> Self {
        SitePaths {
            data_file: root.join(DATA_DIR).join(DATA_FILE),
            template_dir: root.join(TEMPLATE_DIR),
            template_name: INDEX_TEMPLATE.to_string(),
            output_file: root.join(OUTPUT_FILE),
        }
    }

    /// Layout rooted one directory above the running executable.
    pub fn discover() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        Ok(Self::at(&site_root_for(&exe)))
    }
}

/// Parent of the directory holding `exe`, or that directory itself when
/// `exe` sits at the filesystem root.
pub fn site_root_for(exe: &Path) -> PathBuf {
    let bin_dir = exe.parent().unwrap_or(exe);
    bin_dir.parent().unwrap_or(bin_dir).to_path_buf()
}
