// src/index/mod.rs
// =============================================================================
// Everything that understands the shape of an autoindex listing.
//
// Submodules:
// - listing: pulls the raw entry hrefs out of a listing page
// - entry: classifies each href as a directory or a file
// - path: turns (listing URL, entry) into a path relative to the walk root
//
// None of these do any I/O; the client module fetches pages and feeds them in.
// =============================================================================

mod entry;
mod listing;
mod path;

pub use entry::{classify, Entry, EntryKind};
pub use listing::extract_entry_hrefs;
pub use path::{join, relative_dir, relative_path};
