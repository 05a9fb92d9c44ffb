//! The `Movie` macro
//!
//! Embeds online movies from YouTube, Vimeo, Dailymotion, Brighteon,
//! Frankspeech, Rumble and Bitchute, and local movies through Flowplayer.
//!
//! The movie link is the first and only required argument. For most sites
//! the browser URL works. For Frankspeech use the link inside the HTML from
//! the site's "Embed" button; for Rumble use the "Embed IFRAME URL".
//!
//! Local files can be given as:
//!
//! - `sample.webm`: attachment on the current ticket or wiki page
//! - `ticket:123:sample.mp4`: attachment on ticket #123
//! - `wiki:test/sub/sample.mp4`: attachment on wiki page `test/sub`
//! - `htdocs://site/filename.flv`: the project's static files
//! - `ticket://123/filename.flv`, `wiki://WikiWord/filename.flv`
//! - `source://1024/trunk/docs/filename.flv`: repository revision 1024
//!
//! An optional named `style` argument overrides the player style, e.g.
//! `style=width:320px; height:240px;`.

use crate::args::MacroArgs;
use crate::local_player;
use movie_core::{style, EmbedDescriptor, Error, MovieConfig, Result, StyleMap};
use url_resolver::{Location, ResourceResolver, SiteLinks, UrlResolver};

/// Expands movie macro invocations into embed descriptors
#[derive(Debug, Clone)]
pub struct MovieMacro<R = SiteLinks> {
    config: MovieConfig,
    resolver: UrlResolver<R>,
}

impl MovieMacro<SiteLinks> {
    /// Macro for a site using the standard attachment layout
    pub fn new(config: MovieConfig, links: SiteLinks) -> Self {
        Self {
            config,
            resolver: UrlResolver::new(links),
        }
    }
}

impl<R: ResourceResolver> MovieMacro<R> {
    /// Macro using a custom resolver
    pub fn with_resolver(config: MovieConfig, resolver: UrlResolver<R>) -> Self {
        Self { config, resolver }
    }

    /// Active configuration
    pub fn config(&self) -> &MovieConfig {
        &self.config
    }

    /// Expand raw macro content
    pub fn expand_content(
        &self,
        content: &str,
        location: Option<&Location>,
    ) -> Result<EmbedDescriptor> {
        self.expand(&MacroArgs::parse(content), location)
    }

    /// Expand parsed macro arguments
    pub fn expand(&self, args: &MacroArgs, location: Option<&Location>) -> Result<EmbedDescriptor> {
        let reference = args.first().ok_or(Error::MissingReference)?;
        let result = self.expand_reference(reference, args.get("style"), location);
        if let Err(e) = &result {
            tracing::warn!("Movie {} not embedded: {}", reference, e);
        }
        result
    }

    fn expand_reference(
        &self,
        reference: &str,
        style_override: Option<&str>,
        location: Option<&Location>,
    ) -> Result<EmbedDescriptor> {
        let url = self.resolver.resolve(reference, location)?;
        let style = self.resolve_style(style_override.unwrap_or_default())?;

        if let Some(embed) = video_sites::embed_video_site(&url, &style) {
            return embed;
        }
        Ok(local_player::embed(&url, style, &self.config, self.resolver.links()))
    }

    /// Merge a style override with the configured defaults
    ///
    /// Only `width`, `height`, `border` and `margin` are taken from the
    /// override; `display` and `clear` are fixed.
    pub fn resolve_style(&self, style_override: &str) -> Result<StyleMap> {
        let overrides = style::parse(style_override).map_err(|e| match e {
            Error::MalformedStyle(msg) => {
                Error::MalformedStyle(format!("Double check the `style` argument: {}", msg))
            }
            other => other,
        })?;
        tracing::debug!("Movie style override: {:?}", overrides);

        let pick = |key: &str, default: &str| {
            overrides.get(key).cloned().unwrap_or_else(|| default.to_string())
        };

        let mut style = StyleMap::new();
        style.insert("width".to_string(), pick("width", &self.config.width));
        style.insert("height".to_string(), pick("height", &self.config.height));
        style.insert("border".to_string(), pick("border", "none"));
        style.insert("margin".to_string(), pick("margin", "0 auto"));
        style.insert("display".to_string(), "block".to_string());
        style.insert("clear".to_string(), "both".to_string());

        tracing::debug!("Movie style: {:?}", style);
        Ok(style)
    }
}
