//! Build command - writes language catalogs and sidebar partials

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use langfilter_core::Config;
use langfilter_generator::{BuildStats, Builder};

/// Run the build command.
///
/// CLI overrides take precedence over the `[content]` section of the config.
pub fn run(
    config_path: &Path,
    output: Option<&Path>,
    content: Option<&Path>,
) -> Result<BuildStats> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, ?content, "Starting build");

    let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    tracing::debug!(?config, "Loaded configuration");

    let content_dir = content.map_or_else(
        || Path::new(&config.content.dir).to_path_buf(),
        Path::to_path_buf,
    );
    let output_dir = output.map_or_else(
        || Path::new(&config.content.output_dir).to_path_buf(),
        Path::to_path_buf,
    );

    let stats = Builder::new(config, &content_dir, &output_dir)
        .build()
        .wrap_err("Build failed")?;

    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Sections:   {}", stats.sections);
    println!("  Languages:  {}", stats.entries);
    println!("  Skipped:    {}", stats.skipped);
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", output_dir.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(stats)
}
