// src/index/entry.rs
// =============================================================================
// Turns one raw href from a listing page into a typed Entry.
//
// Rules:
// - "../" (the parent link every autoindex page carries) is dropped
// - hrefs with no usable name ("", "/", "?C=N;O=D", "#top") are dropped
// - hrefs that do not point below the listing page ("./", "../x", "/abs",
//   "http://other/") are dropped, so an entry can never climb out of the
//   tree it was found in
// - a trailing "/" means Directory, and the slash is stripped from the name
// - anything else is a File, passed through byte for byte
//
// No percent-decoding happens here. Names stay exactly as the server
// wrote them, relative to the listing page they came from.
// =============================================================================

use std::fmt;

const PARENT_REFERENCE: &str = "../";

/// Whether an entry is a subdirectory or a plain file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One item found on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    /// The href with any trailing "/" removed
    pub name: String,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EntryKind::Directory => write!(f, "{}/", self.name),
            EntryKind::File => f.write_str(&self.name),
        }
    }
}

// Classifies a raw href
//
// Returns None for entries the walker should skip silently.
//
// Example:
//   "docs/"  -> Some(Entry { Directory, "docs" })
//   "a.txt"  -> Some(Entry { File, "a.txt" })
//   "../"    -> None
pub fn classify(raw_href: &str) -> Option<Entry> {
    if raw_href == PARENT_REFERENCE || !has_usable_name(raw_href) || !stays_below_listing(raw_href) {
        return None;
    }

    if raw_href.ends_with('/') {
        Some(Entry {
            kind: EntryKind::Directory,
            name: raw_href.trim_end_matches('/').to_string(),
        })
    } else {
        Some(Entry {
            kind: EntryKind::File,
            name: raw_href.to_string(),
        })
    }
}

// Sort-order links and fragments point back at the same page
fn has_usable_name(raw_href: &str) -> bool {
    let name = raw_href.trim_end_matches('/');
    !name.is_empty() && !name.starts_with('?') && !name.starts_with('#')
}

// Rejects absolute paths, absolute URLs and any "." or ".." segment
fn stays_below_listing(raw_href: &str) -> bool {
    if raw_href.starts_with('/') || raw_href.contains("://") {
        return false;
    }

    raw_href
        .trim_end_matches('/')
        .split('/')
        .all(|segment| segment != "." && segment != "..")
}
