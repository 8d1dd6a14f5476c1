//! Language catalog collection.
//!
//! Reads the direct children of a section directory and turns the pages marked
//! as language examples into the section's [`LanguageCatalog`].

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use langfilter_core::{
    Config, LanguageCatalog, LanguageEntry, Result, frontmatter::parse_frontmatter,
};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// File extensions treated as content pages.
const PAGE_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Catalog of one section.
#[derive(Debug, Clone, Default)]
pub struct CollectedSection {
    /// Section path relative to the content directory, `/`-separated.
    pub section: String,

    /// Language entries in page-listing order.
    pub catalog: LanguageCatalog,

    /// Files that could not be read or parsed.
    pub skipped: usize,
}

/// A language example page before ordering.
#[derive(Debug)]
struct LanguagePage {
    file_name: String,
    weight: i32,
    entry: LanguageEntry,
}

/// What a single file contributed.
#[derive(Debug)]
enum PageOutcome {
    Language(LanguagePage),
    Ignored,
    Skipped,
}

/// Collects language example pages of a section.
#[derive(Debug)]
pub struct SectionCollector {
    config: Config,
    content_dir: PathBuf,
}

impl SectionCollector {
    /// Create a collector for sections under `content_dir`.
    #[must_use]
    pub fn new(config: Config, content_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            content_dir: content_dir.into(),
        }
    }

    /// Collect the catalog of `section_dir`.
    ///
    /// Only direct children are siblings; section index pages are never
    /// entries. Entries are ordered by weight (unweighted last), then file name.
    pub fn collect(&self, section_dir: &Path) -> Result<CollectedSection> {
        let section = self.section_name(section_dir);
        debug!(section = %section, dir = %section_dir.display(), "collecting section");

        let files = page_files(section_dir)?;

        let outcomes: Vec<Result<PageOutcome>> = files
            .par_iter()
            .map(|path| self.read_page(&section, path))
            .collect();

        let mut pages = Vec::new();
        let mut skipped = 0;
        for outcome in outcomes {
            match outcome? {
                PageOutcome::Language(page) => pages.push(page),
                PageOutcome::Ignored => {}
                PageOutcome::Skipped => skipped += 1,
            }
        }

        pages.sort_by(|a, b| {
            (a.weight == 0, a.weight, &a.file_name).cmp(&(b.weight == 0, b.weight, &b.file_name))
        });

        let catalog: LanguageCatalog = pages.into_iter().map(|p| p.entry).collect();

        if !catalog.is_empty() {
            info!(section = %section, entries = catalog.len(), "collected language catalog");
        }

        Ok(CollectedSection {
            section,
            catalog,
            skipped,
        })
    }

    /// Section path relative to the content directory.
    ///
    /// Directories outside the content tree are named after their last
    /// component.
    fn section_name(&self, section_dir: &Path) -> String {
        let relative = match section_dir.strip_prefix(&self.content_dir) {
            Ok(rel) => rel,
            Err(_) => Path::new(section_dir.file_name().unwrap_or_default()),
        };

        relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Read one page; language pages without a title are an error.
    fn read_page(&self, section: &str, path: &Path) -> Result<PageOutcome> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read page");
                return Ok(PageOutcome::Skipped);
            }
        };

        let frontmatter = match parse_frontmatter(&content, path) {
            Ok((fm, _body)) => fm,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse frontmatter");
                return Ok(PageOutcome::Skipped);
            }
        };

        if !frontmatter.language_example {
            return Ok(PageOutcome::Ignored);
        }

        if frontmatter.draft {
            debug!(path = %path.display(), "skipping draft language page");
            return Ok(PageOutcome::Ignored);
        }

        frontmatter.validate(path)?;

        let slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let href = match frontmatter.link {
            Some(link) => link,
            None if section.is_empty() => self.config.url_for(&format!("{slug}/")),
            None => self.config.url_for(&format!("{section}/{slug}/")),
        };

        Ok(PageOutcome::Language(LanguagePage {
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            weight: frontmatter.weight,
            entry: LanguageEntry::new(frontmatter.title, href)?,
        }))
    }
}

/// Content pages directly inside `dir`, sorted by file name.
fn page_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_page_file(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Whether `path` names a page that can become a catalog entry.
///
/// Hidden files and section index pages never do.
pub fn is_page_file(path: &Path) -> bool {
    !is_hidden(path)
        && !is_section_index(path)
        && path
            .extension()
            .is_some_and(|ext| PAGE_EXTENSIONS.contains(&ext.to_string_lossy().to_lowercase().as_str()))
}

/// Whether the final component of `path` starts with a dot.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.to_string_lossy().starts_with('.'))
}

fn is_section_index(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|s| matches!(&*s.to_string_lossy(), "_index" | "index"))
}

#[cfg(test)]
mod tests {
    use langfilter_core::config::{ContentConfig, SiteConfig, WidgetConfig};

    use super::*;

    fn test_config(base_path: &str) -> Config {
        Config {
            site: SiteConfig {
                title: "Test Site".to_string(),
                base_path: base_path.to_string(),
            },
            widget: WidgetConfig::default(),
            content: ContentConfig::default(),
        }
    }

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).expect("write page");
    }

    fn language_page(title: &str, extra: &str) -> String {
        format!("---\ntitle: \"{title}\"\nlanguage_example: true\n{extra}---\n\nBody.\n")
    }

    fn titles(section: &CollectedSection) -> Vec<&str> {
        section.catalog.iter().map(LanguageEntry::title).collect()
    }

    #[test]
    fn test_collects_only_language_pages() {
        let root = tempfile::tempdir().expect("tempdir");
        let section = root.path().join("solid");
        fs::create_dir(&section).unwrap();

        write(&section, "_index.md", &language_page("Index", ""));
        write(&section, "go.md", &language_page("Go", ""));
        write(&section, "intro.md", "---\ntitle: \"Intro\"\n---\n");
        write(&section, "notes.txt", &language_page("Notes", ""));

        let collector = SectionCollector::new(test_config(""), root.path());
        let collected = collector.collect(&section).expect("collect");

        assert_eq!(collected.section, "solid");
        assert_eq!(titles(&collected), vec!["Go"]);
        assert_eq!(collected.catalog.entries()[0].href(), "/solid/go/");
    }

    #[test]
    fn test_orders_by_weight_then_file_name() {
        let root = tempfile::tempdir().expect("tempdir");
        let section = root.path().join("dry");
        fs::create_dir(&section).unwrap();

        write(&section, "a-python.md", &language_page("Python", ""));
        write(&section, "b-go.md", &language_page("Go", "weight: 2\n"));
        write(&section, "c-java.md", &language_page("Java", "weight: 1\n"));
        write(&section, "d-c.md", &language_page("C", ""));

        let collector = SectionCollector::new(test_config(""), root.path());
        let collected = collector.collect(&section).expect("collect");

        assert_eq!(titles(&collected), vec!["Java", "Go", "Python", "C"]);
    }

    #[test]
    fn test_link_override_and_base_path() {
        let root = tempfile::tempdir().expect("tempdir");
        let section = root.path().join("patterns").join("observer");
        fs::create_dir_all(&section).unwrap();

        write(&section, "go.md", &language_page("Go", ""));
        write(&section, "rust.md", &language_page("Rust", "link: \"\"\n"));
        write(
            &section,
            "zig.md",
            &language_page("Zig", "link: \"https://example.com/zig\"\n"),
        );

        let collector = SectionCollector::new(test_config("/docs"), root.path());
        let collected = collector.collect(&section).expect("collect");
        let entries = collected.catalog.entries();

        assert_eq!(collected.section, "patterns/observer");
        assert_eq!(entries[0].href(), "/docs/patterns/observer/go/");
        assert_eq!(entries[1].href(), "");
        assert!(!entries[1].is_navigable());
        assert_eq!(entries[2].href(), "https://example.com/zig");
    }

    #[test]
    fn test_section_outside_content_dir() {
        let root = tempfile::tempdir().expect("tempdir");
        let section = root.path().join("yagni");
        fs::create_dir(&section).unwrap();
        write(&section, "go.md", &language_page("Go", ""));

        let collector = SectionCollector::new(test_config(""), "/elsewhere/content");
        let collected = collector.collect(&section).expect("collect");

        assert_eq!(collected.section, "yagni");
        assert_eq!(collected.catalog.entries()[0].href(), "/yagni/go/");
    }

    #[test]
    fn test_is_page_file() {
        assert!(is_page_file(Path::new("solid/go.md")));
        assert!(is_page_file(Path::new("solid/Go.MARKDOWN")));
        assert!(!is_page_file(Path::new("solid/_index.md")));
        assert!(!is_page_file(Path::new("solid/index.md")));
        assert!(!is_page_file(Path::new("solid/.go.md")));
        assert!(!is_page_file(Path::new("solid/go.txt")));
    }

    #[test]
    fn test_drafts_are_excluded() {
        let root = tempfile::tempdir().expect("tempdir");
        write(root.path(), "go.md", &language_page("Go", "draft: true\n"));

        let collector = SectionCollector::new(test_config(""), root.path());
        let collected = collector.collect(root.path()).expect("collect");

        assert!(collected.catalog.is_empty());
        assert_eq!(collected.section, "");
    }

    #[test]
    fn test_unparsable_pages_are_skipped() {
        let root = tempfile::tempdir().expect("tempdir");
        write(root.path(), "broken.md", "---\ntitle: [oops\n---\n");
        write(root.path(), "go.md", &language_page("Go", ""));

        let collector = SectionCollector::new(test_config(""), root.path());
        let collected = collector.collect(root.path()).expect("collect");

        assert_eq!(collected.skipped, 1);
        assert_eq!(titles(&collected), vec!["Go"]);
        assert_eq!(collected.catalog.entries()[0].href(), "/go/");
    }

    #[test]
    fn test_language_page_without_title_fails() {
        let root = tempfile::tempdir().expect("tempdir");
        write(root.path(), "go.md", "---\nlanguage_example: true\n---\n");

        let collector = SectionCollector::new(test_config(""), root.path());
        let err = collector.collect(root.path()).unwrap_err();
        assert!(err.to_string().contains("title is required"));
    }
}
