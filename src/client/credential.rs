// src/client/credential.rs
// =============================================================================
// HTTP basic authentication credentials.
//
// The command line takes a single "user:pass" string. We split it on the
// FIRST colon only, so passwords may contain colons. A bare "user" means an
// empty password, and an empty string means no authentication at all.
// =============================================================================

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    // Parses "user:pass" or "user"
    //
    // Returns None for "", meaning requests go out unauthenticated.
    pub fn parse(value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }

        let credential = match value.split_once(':') {
            Some((username, password)) => Credential {
                username: username.to_string(),
                password: password.to_string(),
            },
            None => Credential {
                username: value.to_string(),
                password: String::new(),
            },
        };

        Some(credential)
    }
}

// Keep passwords out of logs and panic messages
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
