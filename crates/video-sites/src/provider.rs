//! Provider dispatch table
//!
//! Each supported video site is a [`Provider`] variant that knows its host
//! names and how to turn one of its page URLs into an embed. Host name sets
//! are disjoint, so lookup order does not matter.

use crate::{generic, vimeo, youtube};
use movie_core::{EmbedDescriptor, Error, Result, StyleMap};
use serde::{Deserialize, Serialize};
use url_resolver::ResolvedUrl;

/// Supported video-hosting providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// YouTube, iframe with forwarded player parameters
    YouTube,
    /// Vimeo, legacy Flash object embed
    Vimeo,
    /// Dailymotion
    Dailymotion,
    /// Brighteon
    Brighteon,
    /// Frankspeech
    Frankspeech,
    /// Rumble, query string forwarded
    Rumble,
    /// Bitchute
    Bitchute,
}

impl Provider {
    /// Every provider, in dispatch order
    pub const ALL: &'static [Provider] = &[
        Provider::YouTube,
        Provider::Vimeo,
        Provider::Dailymotion,
        Provider::Brighteon,
        Provider::Frankspeech,
        Provider::Rumble,
        Provider::Bitchute,
    ];

    /// Host names served by this provider
    pub fn hostnames(&self) -> &'static [&'static str] {
        match self {
            Provider::YouTube => &["www.youtube.com", "www.youtube-nocookie.com"],
            Provider::Vimeo => &["vimeo.com", "www.vimeo.com"],
            Provider::Dailymotion => &["www.dailymotion.com"],
            Provider::Brighteon => &["www.brighteon.com"],
            Provider::Frankspeech => &["frankspeech.com"],
            Provider::Rumble => &["rumble.com"],
            Provider::Bitchute => &["www.bitchute.com"],
        }
    }

    /// Get the provider name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::YouTube => "youtube",
            Provider::Vimeo => "vimeo",
            Provider::Dailymotion => "dailymotion",
            Provider::Brighteon => "brighteon",
            Provider::Frankspeech => "frankspeech",
            Provider::Rumble => "rumble",
            Provider::Bitchute => "bitchute",
        }
    }

    /// Find the provider serving `netloc`, `None` for unknown hosts
    pub fn from_host(netloc: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|provider| provider.hostnames().contains(&netloc))
    }

    /// Build this provider's embed for `url`
    pub fn build(&self, url: &ResolvedUrl, style: &StyleMap) -> Result<EmbedDescriptor> {
        tracing::debug!("Embedding {} with {} player", url, self.as_str());
        match self {
            Provider::YouTube => youtube::embed(url, style),
            Provider::Vimeo => vimeo::embed(url, style),
            Provider::Dailymotion => generic::embed(url, style, 2, |id, _| {
                format!("/embed/video/{}", id)
            }),
            Provider::Brighteon => generic::embed(url, style, 0, |id, _| format!("/embed/{}", id)),
            // The link behind the site's "Embed" button, e.g. /embed/NTgwMzM=
            Provider::Frankspeech => {
                generic::embed(url, style, 1, |id, _| format!("/embed/{}", id))
            }
            // The "Embed IFRAME URL", e.g. /embed/vykxm1/?pub=4
            Provider::Rumble => generic::embed(url, style, 1, |id, query| {
                if query.is_empty() {
                    format!("/embed/{}/", id)
                } else {
                    format!("/embed/{}/?{}", id, query)
                }
            }),
            Provider::Bitchute => generic::embed(url, style, 1, |id, _| format!("/embed/{}", id)),
        }
    }
}

/// Path segment `index` of `url`, or the "non-standard URL" error
pub(crate) fn segment(url: &ResolvedUrl, index: usize) -> Result<&str> {
    url.segments()
        .get(index)
        .copied()
        .ok_or_else(|| Error::UnrecognizedVideoUrl(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_every_configured_host() {
        for provider in Provider::ALL {
            for host in provider.hostnames() {
                assert_eq!(Provider::from_host(host), Some(*provider), "{}", host);
            }
        }
    }

    #[test]
    fn test_lookup_unknown_host() {
        assert_eq!(Provider::from_host("example.com"), None);
        assert_eq!(Provider::from_host("youtube.com"), None);
        assert_eq!(Provider::from_host("www.youtube.com:8080"), None);
        assert_eq!(Provider::from_host(""), None);
    }

    #[test]
    fn test_hostnames_are_disjoint() {
        let mut seen = std::collections::HashSet::new();
        for provider in Provider::ALL {
            for host in provider.hostnames() {
                assert!(seen.insert(*host), "{} listed twice", host);
            }
        }
    }

    #[test]
    fn test_segment_bounds() {
        let url = ResolvedUrl::parse("https://www.bitchute.com/video/abc/").unwrap();
        assert_eq!(segment(&url, 0).unwrap(), "video");
        assert_eq!(segment(&url, 1).unwrap(), "abc");
        assert!(matches!(segment(&url, 2), Err(Error::UnrecognizedVideoUrl(_))));
    }

    #[test]
    fn test_provider_names() {
        assert_eq!(Provider::YouTube.as_str(), "youtube");
        assert_eq!(Provider::Rumble.as_str(), "rumble");
    }
}
