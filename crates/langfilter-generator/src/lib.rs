//! langfilter Generator Library
//!
//! Build-time half of the language filter widget.
//!
//! # Modules
//!
//! - [`collector`] - Collects a section's language example pages into a catalog
//! - [`template`] - Minimal `{{ variable }}` interpolation for the sidebar partial
//! - [`sidebar`] - Sidebar HTML with the embedded catalog and pre-rendered list
//! - [`build`] - Build orchestration over a content tree

pub mod build;
pub mod collector;
pub mod sidebar;
pub mod template;

pub use build::{BuildError, BuildStats, Builder};
pub use collector::{CollectedSection, SectionCollector, is_hidden, is_page_file};
pub use sidebar::{SidebarRenderer, escape_html, render_list_html};
pub use template::{Template, TemplateContext, TemplateError};
