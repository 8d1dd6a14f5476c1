//! langfilter CLI
//!
//! Builds language filter sidebars for documentation sites and runs the
//! filter from the shell.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for langfilter.
#[derive(Parser)]
#[command(
    name = "langfilter",
    version,
    about = "Language filter sidebars for documentation sites"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "langfilter.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Write language catalogs and sidebar partials for every section
    Build {
        /// Output directory (defaults to content.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Content directory (defaults to content.dir)
        #[arg(long)]
        content: Option<PathBuf>,
    },
    /// Print the list the sidebar shows for a query
    Filter {
        /// Section directory containing language example pages
        section: PathBuf,
        /// Filter text (empty shows everything)
        #[arg(default_value = "")]
        query: String,
        /// Maximum matches before truncation (defaults to widget.max_results)
        #[arg(short, long)]
        max: Option<usize>,
        /// Print items as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate configuration and language pages
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Build, then serve the output for previewing
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Output directory (defaults to content.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    langfilter::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { output, content } => {
            langfilter::cmd::build::run(&cli.config, output.as_deref(), content.as_deref())?;
        }
        Commands::Filter {
            section,
            query,
            max,
            json,
        } => {
            langfilter::cmd::filter::run(&cli.config, &section, &query, max, json)?;
        }
        Commands::Check { strict } => {
            langfilter::cmd::check::run(&cli.config, strict)?;
        }
        Commands::Serve { port, output } => {
            langfilter::cmd::serve::run(&cli.config, output.as_deref(), port).await?;
        }
    }

    Ok(())
}
