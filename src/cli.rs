// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
//   webindex list <url> [--auth user:pass] [-r]
//   webindex download <url> [--auth user:pass] [-o dir] [-r] [--ignore-error]
//
// Everything parsed here ends up in plain config structs (ClientConfig,
// TraversalOptions, Credential) that main.rs builds once per run.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use webindex::config::{DEFAULT_MAX_DEPTH, DEFAULT_TIMEOUT_SECS};
use webindex::{ClientConfig, Credential};

#[derive(Parser, Debug)]
#[command(
    name = "webindex",
    version,
    about = "List and download Apache-style autoindex directory listings",
    long_about = "webindex walks the directory tree behind an autoindex HTML page (the \
                  <pre> block of links a web server renders for a directory) and either \
                  prints it or mirrors it to local disk."
)]
pub struct Cli {
    /// Show debug logs on stderr (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the entries of a listing
    ///
    /// Example: webindex list https://example.com/pub/ -r
    List {
        /// URL of the listing page
        url: String,

        #[command(flatten)]
        http: HttpArgs,

        /// Print entries recursively
        #[arg(short, long)]
        recursive: bool,
    },

    /// Download the entries of a listing
    ///
    /// Example: webindex download https://example.com/pub/ -o mirror -r
    #[command(alias = "dl")]
    Download {
        /// URL of the listing page
        url: String,

        #[command(flatten)]
        http: HttpArgs,

        /// Directory to mirror into
        #[arg(short, long = "output-dir", default_value = ".")]
        output_dir: PathBuf,

        /// Download entries recursively
        #[arg(short, long)]
        recursive: bool,

        /// Skip files that fail to download instead of stopping
        #[arg(long)]
        ignore_error: bool,

        /// Print the download report as JSON when done
        #[arg(long)]
        json: bool,
    },
}

/// Options shared by every subcommand that talks to the server
#[derive(Args, Debug)]
pub struct HttpArgs {
    /// Specify user and password of basic authentication (user:pass)
    #[arg(short, long, default_value = "")]
    pub auth: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Maximum directory depth to descend
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

impl HttpArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout),
            max_depth: self.max_depth,
            ..ClientConfig::default()
        }
    }

    pub fn credential(&self) -> Option<Credential> {
        Credential::parse(&self.auth)
    }
}
