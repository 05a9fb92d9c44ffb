//! Iframe embeds identified by a fixed path segment

use crate::provider::segment;
use movie_core::{style, EmbedDescriptor, IframeEmbed, Result, StyleMap};
use url_resolver::ResolvedUrl;

/// Width or height from the resolved style, empty when unset
pub(crate) fn dimension<'a>(style: &'a StyleMap, key: &str) -> &'a str {
    style.get(key).map(String::as_str).unwrap_or_default()
}

/// Embed the video whose id is path segment `index` of `url`
///
/// `template` receives the id and the raw query string and returns the
/// embed path on the provider's host.
pub(crate) fn embed<F>(
    url: &ResolvedUrl,
    style: &StyleMap,
    index: usize,
    template: F,
) -> Result<EmbedDescriptor>
where
    F: Fn(&str, &str) -> String,
{
    let id = segment(url, index)?;
    let src = url.with_path(&template(id, url.query()));

    Ok(EmbedDescriptor::Iframe(IframeEmbed::sized(
        src,
        style::serialize(style),
        dimension(style, "width"),
        dimension(style, "height"),
    )))
}
