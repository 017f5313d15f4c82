//! marble-site
//!
//! Serves a bilingual essay with scroll-revealed sections, its notes page
//! and a documentation viewer, or exports all of it as static files.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────▶ request id ─▶ trace ─▶ timeout ─▶ locale redirect ─┐
//!                                                                       │
//!                              ┌────────────────────────────────────────┘
//!                              ▼
//!                     ┌─────────────────┐      ┌──────────────┐
//!                     │  page handlers  │─────▶│ render::Pages│
//!                     │  / ServeDir     │      └──────┬───────┘
//!                     └─────────────────┘             │
//!                                                     ▼
//!                                   ┌──────────────────────────────────┐
//!                                   │ content: loader → markdown →     │
//!                                   │ marker pass → segments           │
//!                                   └──────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use marble_site::config::load_or_default;
use marble_site::export::{check_site, export_site};
use marble_site::i18n::Bundles;
use marble_site::lifecycle::startup;
use marble_site::observability::logging;
use marble_site::Pages;

#[derive(Parser)]
#[command(name = "marble-site")]
#[command(about = "Bilingual essay site server and static exporter", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the site over HTTP (default)
    Serve,
    /// Render every page into a directory
    Export {
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },
    /// Load config and render every page without writing anything
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            logging::init("info");
            tracing::error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };
    logging::init(&config.observability.log_level);

    tracing::info!("marble-site v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => startup::serve(config).await?,
        Commands::Export { out } => {
            let pages = Pages::new(&config, Arc::new(Bundles::load()?));
            let report = export_site(&pages, &config.content.public_dir, &out).await?;
            println!(
                "Exported {} pages and {} public files to {}",
                report.files.len(),
                report.copied,
                out.display()
            );
        }
        Commands::Check => {
            let pages = Pages::new(&config, Arc::new(Bundles::load()?));
            let rendered = check_site(&pages).await?;
            println!("OK: rendered {rendered} pages");
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
