// src/visit/download.rs
// =============================================================================
// Mirrors the remote tree into a local directory.
//
// Per entry:
// - Directory: create it unless something already exists at that path,
//   then (when recursive) descend into it
// - File: fetch it and write it, overwriting whatever is there
//
// Directories are created one level at a time, never with create_dir_all.
// The walk visits a directory before anything inside it, so a missing
// parent means something is wrong and should fail loudly.
//
// Failure policy:
// - ignore_error = false: the first failure of any kind aborts the walk
// - ignore_error = true: a file that fails to fetch or write is recorded in
//   the report and skipped. Directory creation failures and listing errors
//   still abort the walk.
// - a relative path that would leave the output directory is an UnsafePath
//   error, counted as a failed file when errors are ignored
//
// Progress lines ("Creating Directory ...", "Downloading File ...") go to
// the writer passed in, so scripts and tests can read them back.
// =============================================================================

use std::io::Write;
use std::path::{Component, Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::fs;
use tracing::{debug, info, warn};

use super::{DownloadReport, FailedFile};
use crate::client::{Visitor, WalkContext, WebIndexClient};
use crate::config::TraversalOptions;
use crate::error::{Error, Result};
use crate::index::{relative_path, Entry};

pub struct DownloadVisitor<W> {
    base_url: String,
    output_root: PathBuf,
    options: TraversalOptions,
    out: Mutex<W>,
    report: Mutex<DownloadReport>,
}

impl<W: Write + Send> DownloadVisitor<W> {
    pub fn new(base_url: &str, output_root: impl Into<PathBuf>, options: TraversalOptions, out: W) -> Self {
        Self {
            base_url: base_url.to_string(),
            output_root: output_root.into(),
            options,
            out: Mutex::new(out),
            report: Mutex::new(DownloadReport::default()),
        }
    }

    /// Consumes the visitor, returning what the run did and the progress writer
    pub fn into_parts(self) -> (DownloadReport, W) {
        let report = self.report.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());
        let out = self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());
        (report, out)
    }

    pub fn into_report(self) -> DownloadReport {
        self.into_parts().0
    }

    fn report(&self) -> MutexGuard<'_, DownloadReport> {
        self.report.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn progress(&self, line: &str) -> Result<()> {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(out, "{}", line).map_err(Error::Output)
    }

    // Creates one directory level unless the path is already taken
    async fn ensure_directory(&self, relative: &str, target: &Path) -> Result<()> {
        // Anything already at this path counts, which keeps reruns idempotent
        if fs::metadata(target).await.is_ok() {
            debug!(path = %target.display(), "directory already present");
            self.report().directories_existing += 1;
            return Ok(());
        }

        fs::create_dir(target).await.map_err(|source| Error::CreateDirectory {
            path: target.to_path_buf(),
            source,
        })?;

        self.progress(&format!("Creating Directory ... {}/", relative))?;
        info!(path = %target.display(), "created directory");
        self.report().directories_created += 1;
        Ok(())
    }

    async fn download_file(&self, client: &WebIndexClient, url: &str, relative: &str, target: &Path) -> Result<()> {
        self.progress(&format!("Downloading File ...   {}", relative))?;

        // Fetch and write are one unit: either failure is a "failed file"
        match fetch_and_write(client, url, target).await {
            Ok(bytes) => {
                info!(path = %target.display(), bytes, "wrote file");
                let mut report = self.report();
                report.files_written += 1;
                report.bytes_written += bytes;
                Ok(())
            }
            // With --ignore-error, note the failure and move on to the next entry
            Err(e) if self.options.ignore_error => {
                self.record_failure(url, relative, &e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn record_failure(&self, url: &str, relative: &str, error: &Error) {
        warn!(url, error = %error, "skipping file");
        self.report().failures.push(FailedFile {
            path: relative.to_string(),
            url: url.to_string(),
            error: error.to_string(),
        });
    }
}

// Joins a relative path onto the output root, refusing anything that is not
// a plain chain of names ("..", ".", "/abs", drive prefixes)
fn local_target(output_root: &Path, relative: &str) -> Result<PathBuf> {
    let relative_path = Path::new(relative);
    let plain = relative_path
        .components()
        .all(|component| matches!(component, Component::Normal(_)));

    if relative.is_empty() || !plain {
        return Err(Error::UnsafePath {
            path: relative.to_string(),
        });
    }

    Ok(output_root.join(relative_path))
}

// Returns the number of bytes written
async fn fetch_and_write(client: &WebIndexClient, url: &str, target: &Path) -> Result<u64> {
    let body = client.download(url).await?;

    fs::write(target, &body).await.map_err(|source| Error::WriteFile {
        path: target.to_path_buf(),
        source,
    })?;

    Ok(body.len() as u64)
}

impl<W: Write + Send> Visitor for DownloadVisitor<W> {
    fn visit<'a>(
        &'a self,
        client: &'a WebIndexClient,
        ctx: &'a WalkContext,
        entry: Entry,
    ) -> BoxFuture<'a, Result<()>> {
        async move {
            // Same relative path for the progress line and the file on disk
            let relative = relative_path(ctx, &self.base_url, &entry)?;
            let url = ctx.entry_url(&entry);

            // Names come from the server: never let one point outside output_root
            let target = match local_target(&self.output_root, &relative) {
                Ok(target) => target,
                Err(e) if self.options.ignore_error && !entry.is_dir() => {
                    self.record_failure(&url, &relative, &e);
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            if entry.is_dir() {
                // Parents are always visited first, so one level is enough
                self.ensure_directory(&relative, &target).await?;

                // Non-recursive runs stop at the directory itself
                if self.options.recursive {
                    client.descend(ctx, &entry, self).await?;
                }
                Ok(())
            } else {
                self.download_file(client, &url, &relative, &target).await
            }
        }
        .boxed()
    }
}
