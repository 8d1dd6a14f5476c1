//! langfilter UI Components
//!
//! Leptos components for the documentation sidebar's language filter.
//!
//! # Components
//!
//! - [`LanguageFilter`] - Filter input plus the capped list of matching languages
//!
//! # JavaScript entry points
//!
//! - `mountLanguageFilter(containerId, catalogJson, maxResults)`
//! - `mountEmbeddedLanguageFilter(containerId, dataId, maxResults)`
//!
//! # Example
//!
//! ```ignore
//! use langfilter_core::{LanguageCatalog, LanguageEntry};
//! use langfilter_ui::LanguageFilter;
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Sidebar() -> impl IntoView {
//!     let catalog = LanguageCatalog::new(vec![LanguageEntry::new("Go", "/go/").unwrap()]);
//!
//!     view! { <LanguageFilter catalog=catalog /> }
//! }
//! ```

pub mod language_filter;
pub mod mount;

pub use language_filter::LanguageFilter;
pub use mount::{mount_embedded_language_filter, mount_language_filter};
