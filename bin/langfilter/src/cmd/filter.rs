//! Filter command - runs the widget's filter against a section from the shell

use std::{io::Write, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use langfilter_core::{Config, LanguageFilterWidget, ListItem};
use langfilter_generator::SectionCollector;

/// Run the filter command.
///
/// Collects the catalog of `section_dir` and prints the list the sidebar would
/// show for `query`.
pub fn run(
    config_path: &Path,
    section_dir: &Path,
    query: &str,
    max_results: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    let max_results = max_results.unwrap_or(config.widget.max_results);
    let content_dir = Path::new(&config.content.dir).to_path_buf();

    let collected = SectionCollector::new(config, content_dir)
        .collect(section_dir)
        .wrap_err_with(|| format!("Failed to collect {}", section_dir.display()))?;

    tracing::info!(
        section = %collected.section,
        entries = collected.catalog.len(),
        query,
        max_results,
        "filtering section"
    );

    let mut widget = LanguageFilterWidget::new(collected.catalog, max_results);
    let items = widget.on_filter_text_changed(query).items();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?;
    } else {
        write_plain(&mut out, &items)?;
    }

    Ok(())
}

/// One line per item: `title<TAB>href`, bare title for placeholders, `...` last.
fn write_plain(out: &mut impl Write, items: &[ListItem]) -> std::io::Result<()> {
    for item in items {
        match item {
            ListItem::Link { title, href } => writeln!(out, "{title}\t{href}")?,
            other => writeln!(out, "{}", other.label())?,
        }
    }
    Ok(())
}
