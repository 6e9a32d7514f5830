// src/lib.rs
// =============================================================================
// webindex: walk Apache-style autoindex listings.
//
// The pieces, leaf first:
// - index: classify hrefs, extract them from pages, rebuild relative paths
// - client: HTTP fetching and the tree walker (walk/descend + Visitor)
// - visit: the print and download visitors
// - config / error: run settings and the shared error type
//
// Typical use:
//
//   let client = WebIndexClient::new(&ClientConfig::default(), None)?;
//   let root = normalize_root("http://example.com/pub/")?;
//   let printer = PrintVisitor::new(&root, TraversalOptions::default(), std::io::stdout());
//   client.walk(&root, &printer).await?;
// =============================================================================

pub mod client;
pub mod config;
pub mod error;
pub mod index;
pub mod visit;

pub use client::{normalize_root, Credential, Visitor, WalkContext, WebIndexClient};
pub use config::{ClientConfig, TraversalOptions};
pub use error::{Error, Result};
pub use index::{classify, Entry, EntryKind};
pub use visit::{DownloadReport, DownloadVisitor, FailedFile, PrintVisitor};
