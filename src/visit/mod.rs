// src/visit/mod.rs
// =============================================================================
// The two visitors the CLI offers.
//
// Submodules:
// - print: writes the tree as relative paths (list command)
// - download: mirrors the tree to a local directory (download command)
// - report: counters and failures collected by a download
// =============================================================================

mod download;
mod print;
mod report;

pub use download::DownloadVisitor;
pub use print::PrintVisitor;
pub use report::{DownloadReport, FailedFile};
