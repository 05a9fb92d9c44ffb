//! Movie reference resolution
//!
//! This crate turns a user-typed movie reference, either a full URL or a
//! shorthand such as `ticket:123:sample.webm`, into a decomposed absolute
//! URL.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod location;
pub mod resolver;
pub mod shorthand;
pub mod site;

pub use location::{Location, Realm};
pub use resolver::{ResolvedUrl, UrlResolver};
pub use shorthand::Shorthand;
pub use site::{ResourceResolver, SiteLinks};
