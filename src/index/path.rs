// src/index/path.rs
// =============================================================================
// Rebuilds an entry's path relative to the root of the walk.
//
// The walker only knows the URL of the page it is listing. Visitors need
// the path of each entry relative to where the walk started, e.g.
//
//   base URL:    http://h/x
//   listing URL: http://h/x/a
//   entry name:  b.txt
//   => relative path "a/b.txt"
//
// The same relative path is used to print the tree and to place files on
// disk, so the local mirror always has the same shape as the URL tree.
// =============================================================================

use crate::client::WalkContext;
use crate::error::{Error, Result};
use crate::index::Entry;

// Returns the directory part of the listing URL below base_url
//
// "" when listing the root itself. Anything outside base_url is an
// InvariantViolation: the walker only ever extends URLs, so this means a bug.
pub fn relative_dir<'a>(listing_url: &'a str, base_url: &str) -> Result<&'a str> {
    if listing_url == base_url {
        return Ok("");
    }

    listing_url
        .strip_prefix(base_url)
        .and_then(|rest| rest.strip_prefix('/'))
        .ok_or_else(|| Error::InvariantViolation {
            listing_url: listing_url.to_string(),
            base_url: base_url.to_string(),
        })
}

pub fn relative_path(ctx: &WalkContext, base_url: &str, entry: &Entry) -> Result<String> {
    let dir = relative_dir(&ctx.listing_url, base_url)?;
    Ok(join(dir, &entry.name))
}

// Joins two path segments with "/", without a leading "/" when dir is empty
pub fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}
