// src/client/mod.rs
// =============================================================================
// The web index client: HTTP fetching plus the tree walker built on it.
//
// Submodules:
// - credential: basic-auth user/password parsed from "user:pass"
// - http: WebIndexClient and its list()/download() requests
// - walk: walk()/descend() and the Visitor trait
// =============================================================================

mod credential;
mod http;
mod walk;

pub use credential::Credential;
pub use http::WebIndexClient;
pub use walk::{normalize_root, Visitor, WalkContext};
