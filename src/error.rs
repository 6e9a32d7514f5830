// src/error.rs
// =============================================================================
// Error type shared by the whole library.
//
// Every failure a walk can hit falls into one of these variants:
// - HTTP problems (bad status or transport failure)
// - Listing pages that cannot be parsed
// - Filesystem problems while mirroring
// - Internal consistency problems (a listing URL outside the walked tree)
//
// The binary wraps these in anyhow::Error; the library keeps them typed so
// the download visitor can decide which failures to tolerate.
// =============================================================================

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The server answered with anything other than 200 OK
    #[error("status code error: {status} ({url})")]
    HttpStatus { url: String, status: StatusCode },

    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("failed to parse listing {url}: {message}")]
    Parse { url: String, message: String },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Printing the listing or a progress line failed (closed stdout, ...)
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    /// A listing URL drifted outside the tree rooted at the base URL.
    /// Never expected at runtime; hitting it means a walker bug.
    #[error("entry url must start with \"{base_url}/\", got \"{listing_url}\"")]
    InvariantViolation { listing_url: String, base_url: String },

    /// A relative path that would land outside the output directory
    #[error("refusing to write outside the output directory: {path}")]
    UnsafePath { path: String },

    #[error("maximum walk depth {max_depth} exceeded at {url}")]
    DepthExceeded { url: String, max_depth: usize },

    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
