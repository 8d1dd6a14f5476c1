//! Check command - validate configuration and language pages

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
};

use color_eyre::eyre::{Result, bail};
use langfilter_core::{Config, frontmatter::parse_frontmatter};
use langfilter_generator::{is_hidden, is_page_file};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration and every language example page.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    let content_dir = config
        .as_ref()
        .map_or_else(|| PathBuf::from("content"), |c| PathBuf::from(&c.content.dir));

    if content_dir.is_dir() {
        println!("\nChecking language pages...");
        validate_language_pages(&content_dir, &mut result);
    } else {
        result.add_error(format!(
            "Content directory does not exist: {}",
            content_dir.display()
        ));
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Validate language pages, grouped by section directory.
fn validate_language_pages(dir: &Path, result: &mut ValidationResult) {
    let mut sections: BTreeMap<PathBuf, Vec<(PathBuf, String)>> = BTreeMap::new();
    let mut checked = 0;

    for entry in walkdir::WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_page_file(e.path()))
    {
        let path = entry.path();

        // Unreadable pages are skipped by the build, so they only warn here.
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                result.add_warning(format!("{}: Failed to read file: {e}", path.display()));
                continue;
            }
        };

        let frontmatter = match parse_frontmatter(&content, path) {
            Ok((fm, _)) => fm,
            Err(e) => {
                result.add_warning(e.to_string());
                continue;
            }
        };

        if !frontmatter.language_example || frontmatter.draft {
            continue;
        }

        checked += 1;

        if let Err(e) = frontmatter.validate(path) {
            result.add_error(e.to_string());
            continue;
        }

        if frontmatter.link.as_deref() == Some("") {
            result.add_warning(format!(
                "{}: '{}' has no page and is listed as a placeholder",
                path.display(),
                frontmatter.title
            ));
        }

        let section = path.parent().unwrap_or(dir).to_path_buf();
        sections
            .entry(section)
            .or_default()
            .push((path.to_path_buf(), frontmatter.title));
    }

    for (section, pages) in &sections {
        let mut seen = HashSet::new();
        for (path, title) in pages {
            if !seen.insert(title.to_lowercase()) {
                result.add_warning(format!(
                    "{}: duplicate language title '{title}' in {}",
                    path.display(),
                    section.display()
                ));
            }
        }
    }

    println!(
        "  ✓ {checked} language pages in {} sections checked",
        sections.len()
    );
}
