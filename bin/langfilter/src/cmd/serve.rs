//! Serve command - builds, then serves the output for previewing sidebars

use std::{net::SocketAddr, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use langfilter_core::Config;

use crate::server::create_router;

/// Run the serve command.
pub async fn run(config_path: &Path, output: Option<&Path>, port: u16) -> Result<()> {
    let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    let output_dir = output.map_or_else(
        || Path::new(&config.content.output_dir).to_path_buf(),
        Path::to_path_buf,
    );

    super::build::run(config_path, Some(&output_dir), None)?;

    let app = create_router(&output_dir);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!("  Serving {} at http://{addr}", output_dir.display());
    println!("  Press Ctrl+C to stop");
    tracing::info!(%addr, output = %output_dir.display(), "preview server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down preview server");
        })
        .await
        .wrap_err("Server error")?;

    Ok(())
}
