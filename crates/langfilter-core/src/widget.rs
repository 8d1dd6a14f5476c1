//! DOM-free language filter widget instance.

use crate::{
    catalog::LanguageCatalog,
    config::WidgetConfig,
    filter::{FilteredList, filter_catalog},
};

/// One language filter widget on a page.
///
/// Owns its catalog and current filter text, so several independent widgets
/// can live on the same page. Rendering is a full, synchronous re-filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFilterWidget {
    catalog: LanguageCatalog,
    filter_text: String,
    max_results: usize,
}

impl LanguageFilterWidget {
    /// Create a widget with an empty filter.
    pub fn new(catalog: LanguageCatalog, max_results: usize) -> Self {
        Self {
            catalog,
            filter_text: String::new(),
            max_results,
        }
    }

    /// Create a widget using the configured display cap.
    pub fn from_config(catalog: LanguageCatalog, config: &WidgetConfig) -> Self {
        Self::new(catalog, config.max_results)
    }

    /// Render the list for the current filter text.
    pub fn render(&self) -> FilteredList<'_> {
        filter_catalog(&self.catalog, &self.filter_text, self.max_results)
    }

    /// Store new filter text and re-render.
    pub fn on_filter_text_changed(&mut self, new_text: impl Into<String>) -> FilteredList<'_> {
        self.filter_text = new_text.into();
        tracing::trace!(filter = %self.filter_text, "language filter changed");
        self.render()
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }
}
