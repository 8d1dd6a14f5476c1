//! End-to-end tests for langfilter-generator.
//!
//! Builds a small content tree and checks the written catalogs and partials.

use std::{fs, path::Path};

use langfilter_core::{Config, LanguageCatalog, filter_catalog};
use langfilter_generator::{Builder, build::CATALOG_FILE, build::SIDEBAR_FILE};

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dirs");
    }
    fs::write(path, content).expect("write");
}

fn language_page(title: &str, weight: i32) -> String {
    format!("---\ntitle: \"{title}\"\nlanguage_example: true\nweight: {weight}\n---\n\nExample.\n")
}

fn site(root: &Path) -> Config {
    let config_path = root.join("langfilter.toml");
    write(
        &config_path,
        "[site]\ntitle = \"Coding Principles\"\nbase_path = \"/principles\"\n\n[widget]\nmax_results = 15\n",
    );

    let content = root.join("content");
    write(&content.join("_index.md"), "---\ntitle: \"Home\"\n---\n");
    write(
        &content.join("solid/_index.md"),
        "---\ntitle: \"SOLID\"\n---\n",
    );
    write(&content.join("solid/go.md"), &language_page("Go", 1));
    write(&content.join("solid/java.md"), &language_page("Java", 2));
    write(
        &content.join("solid/rust.md"),
        "+++\ntitle = \"Rust\"\nlanguage_example = true\nweight = 3\nlink = \"\"\n+++\n",
    );
    write(&content.join("solid/overview.md"), "---\ntitle: \"Overview\"\n---\n");

    for i in 0..20 {
        write(
            &content.join(format!("patterns/strategy/lang-{i:02}.md")),
            &language_page(&format!("Lang {i}"), 0),
        );
    }

    Config::load(&config_path).expect("config loads")
}

#[test]
fn test_build_writes_section_catalogs() {
    let root = tempfile::tempdir().expect("tempdir");
    let config = site(root.path());
    let output = root.path().join("public");

    let stats = Builder::new(config, root.path().join("content"), &output)
        .build()
        .expect("build");

    assert_eq!(stats.sections, 2);
    assert_eq!(stats.entries, 23);
    assert_eq!(stats.skipped, 0);

    let json = fs::read_to_string(output.join("solid").join(CATALOG_FILE)).expect("catalog");
    let catalog = LanguageCatalog::from_json(&json).expect("valid catalog");
    let titles: Vec<_> = catalog.iter().map(|e| e.title()).collect();
    assert_eq!(titles, vec!["Go", "Java", "Rust"]);
    assert_eq!(catalog.entries()[0].href(), "/principles/solid/go/");
    assert_eq!(catalog.entries()[2].href(), "");

    let items = filter_catalog(&catalog, "J", 15).items();
    let labels: Vec<_> = items.iter().map(|i| i.label()).collect();
    assert_eq!(labels, vec!["Java"]);

    assert!(!output.join(CATALOG_FILE).exists());
}

#[test]
fn test_build_sidebar_is_prerendered_and_truncated() {
    let root = tempfile::tempdir().expect("tempdir");
    let config = site(root.path());
    let output = root.path().join("public");

    Builder::new(config, root.path().join("content"), &output)
        .with_wasm_module("/static/langfilter_ui.js")
        .build()
        .expect("build");

    let html = fs::read_to_string(output.join("patterns/strategy").join(SIDEBAR_FILE))
        .expect("sidebar");

    let links = html.matches(r#"class="language-filter-link""#).count();
    assert_eq!(links, 15);
    assert_eq!(html.matches("language-filter-truncated").count(), 1);
    assert!(html.contains(">Lang 0</a>"));
    assert!(html.contains(">Lang 14</a>"));
    assert!(!html.contains(">Lang 15</a>"));
    assert!(html.contains(r#""title":"Lang 19""#));
    assert!(html.contains(r#"from "/static/langfilter_ui.js""#));
}

#[test]
fn test_demo_site_builds() {
    let site_dir = Path::new("../../demos/site");
    if !site_dir.exists() {
        // Skip if running from different working directory
        return;
    }

    let config = Config::load(&site_dir.join("langfilter.toml")).expect("Config should load");
    assert_eq!(config.site.title, "Coding Principles");

    let output = tempfile::tempdir().expect("tempdir");
    let stats = Builder::new(config, site_dir.join("content"), output.path())
        .build()
        .expect("demo site builds");

    assert_eq!(stats.sections, 2);
    assert_eq!(stats.entries, 8);

    let json = fs::read_to_string(output.path().join("solid").join(CATALOG_FILE)).expect("catalog");
    let catalog = LanguageCatalog::from_json(&json).expect("valid catalog");
    let titles: Vec<_> = catalog.iter().map(|e| e.title()).collect();
    assert_eq!(titles, vec!["Go", "Java", "Python", "TypeScript", "Rust"]);

    let observer = output
        .path()
        .join("design-patterns/observer")
        .join(CATALOG_FILE);
    let catalog = LanguageCatalog::from_json(&fs::read_to_string(observer).expect("catalog"))
        .expect("valid catalog");
    assert_eq!(catalog.entries()[0].title(), "C#");
    assert_eq!(
        catalog.entries()[0].href(),
        "/design-patterns/observer/csharp/"
    );
}
