//! langfilter Core Library
//!
//! Language catalog, live filtering, configuration and error handling shared by
//! the langfilter generator, UI components and CLI.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod frontmatter;
pub mod widget;

pub use catalog::{LanguageCatalog, LanguageEntry};
pub use config::{Config, WidgetConfig};
pub use error::{CoreError, Result};
pub use filter::{DEFAULT_MAX_RESULTS, FilteredList, ListItem, TRUNCATION_MARKER, filter_catalog};
pub use frontmatter::Frontmatter;
pub use widget::LanguageFilterWidget;
