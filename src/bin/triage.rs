//! CLI binary for guideline-triage.
//!
//! A thin shim over the library crate: loads the environment, picks a
//! deployment shape, and runs it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guideline_triage::{serve, watch, Processor, TriageConfig};
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Watch a folder; each new PDF gets a sibling <stem>_analysis.json
  guideline-triage watch --dir ./incoming

  # Serve POST /process-pdf on port 8000
  guideline-triage serve --bind 0.0.0.0:8000

  # Upload a document to a running server
  curl -F file=@circular_12.pdf http://localhost:8000/process-pdf

ENVIRONMENT VARIABLES:
  API_KEY       Static key sent as the `api-key` request header
  API_ENDPOINT  URL of the completion endpoint

  Both may also live in a local .env file, loaded at startup.
"#;

/// Summarise banking guideline PDFs through a hosted LLM endpoint.
#[derive(Parser, Debug)]
#[command(
    name = "guideline-triage",
    version,
    about = "Summarise banking guideline PDFs through a hosted LLM endpoint",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, global = true, env = "TRIAGE_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true, env = "TRIAGE_QUIET")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Watch a directory for newly created PDFs.
    Watch {
        /// Directory to watch (non-recursive).
        #[arg(long, env = "TRIAGE_WATCH_DIR", default_value = "./incoming")]
        dir: PathBuf,
    },
    /// Serve the upload endpoint.
    Serve {
        /// Address to bind.
        #[arg(long, env = "TRIAGE_BIND", default_value = "0.0.0.0:8000")]
        bind: SocketAddr,

        /// Maximum upload size in megabytes.
        #[arg(long, env = "TRIAGE_MAX_UPLOAD_MB", default_value_t = 50)]
        max_upload_mb: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env is optional; a missing file is not an error.
    dotenvy::dotenv().ok();

    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = TriageConfig::from_env()
        .context("Missing configuration — set API_KEY and API_ENDPOINT")?;

    match cli.command {
        Command::Watch { dir } => {
            let processor = Processor::new(&config);
            watch(&dir, processor)
                .await
                .with_context(|| format!("Watcher failed for {}", dir.display()))?;
        }
        Command::Serve {
            bind,
            max_upload_mb,
        } => {
            let config = config.with_max_upload_bytes(max_upload_mb * 1024 * 1024);
            let processor = Processor::with_dedup(&config);
            serve(bind, processor, &config)
                .await
                .context("Server failed")?;
        }
    }

    Ok(())
}
