//! langfilter CLI Library
//!
//! Command implementations behind the `langfilter` binary, exposed as a
//! library for integration tests.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, filter, check, serve)
//! - [`server`] - Preview server for generated sidebars

pub mod cmd;
pub mod server;

pub use langfilter_core::{Config, LanguageCatalog};
pub use langfilter_generator::{BuildStats, Builder, SectionCollector};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
