// src/client/walk.rs
// =============================================================================
// The tree walker.
//
// walk() lists one page and hands each entry to a Visitor, in the order the
// page shows them. It never descends on its own: a visitor that wants the
// contents of a subdirectory calls descend(), which walks the child page
// with the same visitor. Walker and visitor therefore recurse into each
// other, depth first, one fetch at a time.
//
// The first error a visitor returns stops the current page and bubbles up
// through every enclosing walk unchanged.
//
// Both walk() and Visitor::visit() return BoxFuture because async functions
// that recurse through each other need a boxed (sized) future.
// =============================================================================

use futures::future::BoxFuture;
use tracing::debug;
use url::Url;

use super::WebIndexClient;
use crate::error::{Error, Result};
use crate::index::{classify, Entry};

/// Where the walker currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkContext {
    /// URL of the page being listed
    pub listing_url: String,
    /// URL the whole walk started from
    pub base_url: String,
    /// 0 for the root listing, +1 per descent
    pub depth: usize,
}

impl WalkContext {
    pub fn root(url: &str) -> Self {
        Self {
            listing_url: url.to_string(),
            base_url: url.to_string(),
            depth: 0,
        }
    }

    /// URL of an entry found on this page
    pub fn entry_url(&self, entry: &Entry) -> String {
        format!("{}/{}", self.listing_url, entry.name)
    }
}

/// Per-entry callback driven by the walker
pub trait Visitor: Send + Sync {
    fn visit<'a>(
        &'a self,
        client: &'a WebIndexClient,
        ctx: &'a WalkContext,
        entry: Entry,
    ) -> BoxFuture<'a, Result<()>>;
}

// Validates a root URL and strips trailing slashes
//
// "http://h/pub/" and "http://h/pub" walk the same tree; without the trim
// child URLs would come out as "http://h/pub//a".
pub fn normalize_root(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(url.trim_end_matches('/').to_string())
}

impl WebIndexClient {
    /// Walks the listing at `url`, treating it as the root of the tree
    pub fn walk<'a>(&'a self, url: &str, visitor: &'a dyn Visitor) -> BoxFuture<'a, Result<()>> {
        self.walk_listing(WalkContext::root(url), visitor)
    }

    /// Walks the subdirectory `entry` found while listing `ctx`
    pub fn descend<'a>(
        &'a self,
        ctx: &WalkContext,
        entry: &Entry,
        visitor: &'a dyn Visitor,
    ) -> BoxFuture<'a, Result<()>> {
        // Same root, one level deeper, URL extended by the entry name
        let child = WalkContext {
            listing_url: ctx.entry_url(entry),
            base_url: ctx.base_url.clone(),
            depth: ctx.depth + 1,
        };
        self.walk_listing(child, visitor)
    }

    fn walk_listing<'a>(&'a self, ctx: WalkContext, visitor: &'a dyn Visitor) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            // Guard against endless trees (or servers that link in circles)
            if ctx.depth > self.max_depth {
                return Err(Error::DepthExceeded {
                    url: ctx.listing_url,
                    max_depth: self.max_depth,
                });
            }

            debug!(url = %ctx.listing_url, depth = ctx.depth, "walking listing");
            // Fetch the page; a bad status here always stops the walk
            let hrefs = self.list(&ctx.listing_url).await?;

            // Visit entries in page order, stopping at the first error
            for href in hrefs {
                // "../", sort links and the like are skipped silently
                let Some(entry) = classify(&href) else {
                    continue;
                };
                visitor.visit(self, &ctx, entry).await?;
            }

            Ok(())
        })
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why BoxFuture instead of `async fn`?
//    - walk() awaits visit(), and visit() may await descend() -> walk()
//    - An async fn's future type contains the futures it awaits, so a cycle
//      would make the type infinitely large
//    - Box::pin(...) puts each level on the heap and breaks the cycle
//
// 2. Why `&dyn Visitor` and not a generic?
//    - The same visitor is passed down through every level of the tree
//    - A trait object keeps walk() a single, non-generic function
//
// 3. What does `let Some(entry) = ... else { continue };` do?
//    - let-else: bind the value if the pattern matches, otherwise run the
//      else block, which must leave the scope (here: skip this href)
// -----------------------------------------------------------------------------
