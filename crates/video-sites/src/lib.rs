//! Video sharing sites
//!
//! This crate maps video-site host names to their embed builders. A URL on
//! a known host becomes an iframe or object embed; any other URL is left to
//! the caller's local-player fallback.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod generic;
pub mod provider;
mod vimeo;
pub mod youtube;

pub use provider::Provider;

use movie_core::{EmbedDescriptor, Result, StyleMap};
use url_resolver::ResolvedUrl;

/// Find the provider serving `netloc`
pub fn lookup(netloc: &str) -> Option<Provider> {
    Provider::from_host(netloc)
}

/// Build a provider embed for `url`, `None` when no provider serves its host
pub fn embed_video_site(url: &ResolvedUrl, style: &StyleMap) -> Option<Result<EmbedDescriptor>> {
    lookup(&url.netloc()).map(|provider| provider.build(url, style))
}
