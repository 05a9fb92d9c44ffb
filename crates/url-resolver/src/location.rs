//! Current rendering location
//!
//! Shorthand references such as a bare `sample.webm` resolve against the
//! ticket or wiki page being rendered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wiki page shown for `/wiki` without a page name
pub const DEFAULT_WIKI_PAGE: &str = "WikiStart";

/// Kind of resource that owns attachments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Realm {
    /// Ticket attachments
    Ticket,
    /// Wiki page attachments
    Wiki,
}

impl Realm {
    /// Get the realm as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Realm::Ticket => "ticket",
            Realm::Wiki => "wiki",
        }
    }

    /// Parse a realm name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ticket" => Some(Realm::Ticket),
            "wiki" => Some(Realm::Wiki),
            _ => None,
        }
    }
}

impl fmt::Display for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ticket or wiki page currently being rendered
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Owning realm
    pub realm: Realm,
    /// Ticket number or wiki page name
    pub locator: String,
}

impl Location {
    /// Location of a ticket
    pub fn ticket(id: impl Into<String>) -> Self {
        Self {
            realm: Realm::Ticket,
            locator: id.into(),
        }
    }

    /// Location of a wiki page
    pub fn wiki(page: impl Into<String>) -> Self {
        Self {
            realm: Realm::Wiki,
            locator: page.into(),
        }
    }

    /// Derive the location from a request path such as `/ticket/123`
    pub fn from_path_info(path_info: &str) -> Option<Self> {
        let path = path_info.trim_matches('/');
        let (head, rest) = path.split_once('/').unwrap_or((path, ""));

        match head {
            "ticket" if !rest.is_empty() && !rest.contains('/') => Some(Self::ticket(rest)),
            "wiki" if rest.is_empty() => Some(Self::wiki(DEFAULT_WIKI_PAGE)),
            "wiki" => Some(Self::wiki(rest)),
            _ => None,
        }
    }
}
