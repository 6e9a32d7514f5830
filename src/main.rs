// src/main.rs
// =============================================================================
// This is the entry point of the webindex CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, on stderr)
// 3. Build the client and the visitor for the chosen subcommand
// 4. Walk the tree
// 5. Exit with proper code (0 = success, 1 = error)
//
// This is the only place allowed to end the process. Every error below
// here, including bad HTTP status codes, comes back as a normal Result.
// =============================================================================

mod cli;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, HttpArgs};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use webindex::{normalize_root, DownloadVisitor, PrintVisitor, TraversalOptions, WebIndexClient};

#[tokio::main]
async fn main() {
    // Parse arguments first so --help/--version never touch logging
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Any error from the walk ends up here, printed once, exit code 1
    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole chain: "context: cause: root cause"
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG wins; otherwise "warn", or "debug" for our crate with -v
fn init_tracing(verbose: bool) {
    let default = if verbose { "webindex=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List { url, http, recursive } => {
            handle_list(&url, &http, TraversalOptions::default().recursive(recursive)).await
        }
        Commands::Download {
            url,
            http,
            output_dir,
            recursive,
            ignore_error,
            json,
        } => {
            let options = TraversalOptions::default()
                .recursive(recursive)
                .ignore_error(ignore_error);
            handle_download(&url, &http, &output_dir, options, json).await
        }
    }
}

fn build_client(http: &HttpArgs) -> Result<WebIndexClient> {
    let client = WebIndexClient::new(&http.client_config(), http.credential())?;

    // Log who we are, never the password
    match client.credential() {
        Some(credential) => debug!(user = %credential.username, "using basic authentication"),
        None => debug!("no authentication"),
    }

    Ok(client)
}

// Handles the 'list' subcommand
async fn handle_list(url: &str, http: &HttpArgs, options: TraversalOptions) -> Result<()> {
    // Validate the URL and drop any trailing "/"
    let root = normalize_root(url)?;
    let client = build_client(http)?;

    // The printer writes straight to stdout as entries arrive
    let printer = PrintVisitor::new(&root, options, std::io::stdout());
    client.walk(&root, &printer).await?;

    // Make sure the last lines reach the terminal (or the pipe)
    printer.into_inner().flush().context("failed to flush stdout")?;
    Ok(())
}

// Handles the 'download' subcommand
//
// Progress lines go to stdout, unless --json owns stdout, in which case
// they move to stderr.
async fn handle_download(
    url: &str,
    http: &HttpArgs,
    output_dir: &Path,
    options: TraversalOptions,
    json: bool,
) -> Result<()> {
    let root = normalize_root(url)?;
    let client = build_client(http)?;

    // The output root itself may be missing; everything below it is
    // created one level at a time by the visitor
    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    // Box<dyn Write> lets either stream stand in as the progress writer
    let progress: Box<dyn Write + Send> = if json {
        Box::new(std::io::stderr())
    } else {
        Box::new(std::io::stdout())
    };

    let downloader = DownloadVisitor::new(&root, output_dir, options, progress);
    client.walk(&root, &downloader).await?;

    // Suppressed failures are reported, but never change the exit code
    let report = downloader.into_report();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        eprintln!("{}", report.summary());
        for failure in &report.failures {
            eprintln!("  failed: {} ({})", failure.path, failure.error);
        }
    }

    Ok(())
}
