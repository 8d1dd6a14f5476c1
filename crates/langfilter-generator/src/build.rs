//! Build orchestration.
//!
//! Walks the content tree, collects each section's language catalog, and
//! writes the catalog JSON plus the sidebar partial next to the section's
//! output.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use langfilter_core::{Config, CoreError};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{collector::SectionCollector, sidebar::SidebarRenderer, template::TemplateError};

/// File name of the per-section catalog.
pub const CATALOG_FILE: &str = "languages.json";

/// File name of the per-section sidebar partial.
pub const SIDEBAR_FILE: &str = "languages.html";

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Catalog or configuration error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Template rendering error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Sections with at least one language page.
    pub sections: usize,

    /// Language entries across all sections.
    pub entries: usize,

    /// Files skipped because they could not be read or parsed.
    pub skipped: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Writes language catalogs and sidebar partials for a content tree.
#[derive(Debug)]
pub struct Builder {
    collector: SectionCollector,
    renderer: SidebarRenderer,
    content_dir: PathBuf,
    output_dir: PathBuf,
}

impl Builder {
    /// Create a new builder.
    pub fn new(
        config: Config,
        content_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        let content_dir = content_dir.into();
        Self {
            renderer: SidebarRenderer::new(config.widget.clone()),
            collector: SectionCollector::new(config, content_dir.clone()),
            content_dir,
            output_dir: output_dir.into(),
        }
    }

    /// Use a different path for the UI bundle in generated partials.
    #[must_use]
    pub fn with_wasm_module(mut self, module: impl Into<String>) -> Self {
        self.renderer = self.renderer.with_wasm_module(module);
        self
    }

    /// Build all sections.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();
        info!(
            content = %self.content_dir.display(),
            output = %self.output_dir.display(),
            "building language catalogs"
        );

        if !self.content_dir.is_dir() {
            return Err(CoreError::config(format!(
                "content directory not found: {}",
                self.content_dir.display()
            ))
            .into());
        }

        let mut stats = BuildStats::default();

        for dir in self.section_dirs()? {
            let collected = self.collector.collect(&dir)?;
            stats.skipped += collected.skipped;

            if collected.catalog.is_empty() {
                continue;
            }

            let out_dir = self.section_output_dir(&collected.section);
            fs::create_dir_all(&out_dir)?;

            fs::write(out_dir.join(CATALOG_FILE), collected.catalog.to_json()?)?;
            fs::write(
                out_dir.join(SIDEBAR_FILE),
                self.renderer.render(&collected.catalog)?,
            )?;
            debug!(section = %collected.section, dir = %out_dir.display(), "wrote section artefacts");

            stats.sections += 1;
            stats.entries += collected.catalog.len();
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            sections = stats.sections,
            entries = stats.entries,
            skipped = stats.skipped,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Every non-hidden directory of the content tree, root included.
    fn section_dirs(&self) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        let walker = WalkDir::new(&self.content_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                dirs.push(entry.into_path());
            }
        }

        Ok(dirs)
    }

    fn section_output_dir(&self, section: &str) -> PathBuf {
        section
            .split('/')
            .filter(|s| !s.is_empty())
            .fold(self.output_dir.clone(), |acc, part| acc.join(part))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
