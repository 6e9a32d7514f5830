// src/visit/print.rs
// =============================================================================
// Prints the remote tree, one relative path per line:
//
//   a/
//   a/c.txt
//   b.txt
//
// Directories get a trailing "/". Printing never touches the local
// filesystem.
// =============================================================================

use std::io::Write;
use std::sync::Mutex;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::client::{Visitor, WalkContext, WebIndexClient};
use crate::config::TraversalOptions;
use crate::error::{Error, Result};
use crate::index::{relative_path, Entry};

pub struct PrintVisitor<W> {
    base_url: String,
    recursive: bool,
    out: Mutex<W>,
}

impl<W: Write + Send> PrintVisitor<W> {
    pub fn new(base_url: &str, options: TraversalOptions, out: W) -> Self {
        Self {
            base_url: base_url.to_string(),
            recursive: options.recursive,
            out: Mutex::new(out),
        }
    }

    /// Gives back the writer, e.g. to inspect a buffer in tests
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn print_line(&self, line: &str) -> Result<()> {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(out, "{}", line).map_err(Error::Output)
    }
}

impl<W: Write + Send> Visitor for PrintVisitor<W> {
    fn visit<'a>(
        &'a self,
        client: &'a WebIndexClient,
        ctx: &'a WalkContext,
        entry: Entry,
    ) -> BoxFuture<'a, Result<()>> {
        async move {
            // Path relative to where the walk started, e.g. "a/c.txt"
            let path = relative_path(ctx, &self.base_url, &entry)?;

            // Files are just printed, nothing else to do
            if !entry.is_dir() {
                return self.print_line(&path);
            }

            // Directories get a trailing "/" and, if asked, their own listing
            self.print_line(&format!("{}/", path))?;
            if self.recursive {
                client.descend(ctx, &entry, self).await?;
            }
            Ok(())
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn page(hrefs: &[&str]) -> String {
        let anchors: String = hrefs.iter().map(|h| format!("<a href=\"{h}\">{h}</a>\n")).collect();
        format!("<html><body><pre>{anchors}</pre></body></html>")
    }

    async fn tree() -> MockServer {
        let server = MockServer::start().await;
        for (at, hrefs) in [
            ("/x", vec!["../", "a/", "b.txt"]),
            ("/x/a", vec!["../", "c/", "d.txt"]),
            ("/x/a/c", vec!["../", "e.txt"]),
        ] {
            Mock::given(method("GET"))
                .and(path(at))
                .respond_with(ResponseTemplate::new(200).set_body_string(page(&hrefs)))
                .mount(&server)
                .await;
        }
        server
    }

    async fn print(server: &MockServer, recursive: bool) -> String {
        let client = WebIndexClient::new(&ClientConfig::default(), None).unwrap();
        let base = format!("{}/x", server.uri());
        let visitor = PrintVisitor::new(&base, TraversalOptions::default().recursive(recursive), Vec::new());

        client.walk(&base, &visitor).await.unwrap();
        String::from_utf8(visitor.into_inner()).unwrap()
    }

    #[tokio::test]
    async fn test_recursive_print() {
        let server = tree().await;
        assert_eq!(print(&server, true).await, "a/\na/c/\na/c/e.txt\na/d.txt\nb.txt\n");
    }

    #[tokio::test]
    async fn test_non_recursive_print_lists_only_children() {
        let server = tree().await;
        assert_eq!(print(&server, false).await, "a/\nb.txt\n");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
    }

    // Names of everything in the working directory, sorted
    fn snapshot_cwd() -> Vec<std::ffi::OsString> {
        let mut names: Vec<_> = std::fs::read_dir(".")
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_print_is_read_only() {
        let server = tree().await;

        let before = snapshot_cwd();
        let output = print(&server, true).await;
        let after = snapshot_cwd();

        // The walk reached every directory, yet nothing appeared locally
        assert!(output.contains("a/c/"));
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_self_and_parent_links_do_not_loop() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/x"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page(&["./", "../", "../up.txt", "/abs/", "f.txt"])))
            .mount(&server)
            .await;

        assert_eq!(print(&server, true).await, "f.txt\n");
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }
}
