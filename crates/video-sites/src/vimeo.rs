//! Vimeo's legacy Flash player

use crate::generic::dimension;
use crate::provider::segment;
use indexmap::IndexMap;
use movie_core::descriptor::SWF_MIME_TYPE;
use movie_core::{style, EmbedDescriptor, EmbedFallback, ObjectEmbed, Result, StyleMap};
use url_resolver::ResolvedUrl;

/// Embed a Vimeo clip; the clip id is the first path segment
pub(crate) fn embed(url: &ResolvedUrl, style: &StyleMap) -> Result<EmbedDescriptor> {
    let clip_id = segment(url, 0)?;
    let movie = url.with_path(&format!(
        "/moogaloop.swf?clip_id={}&server=vimeo.com&show_title=1&show_byline=1\
         &show_portrait=0&color=&fullscreen=1",
        clip_id
    ));

    let params = IndexMap::from([
        ("movie".to_string(), movie.clone()),
        ("allowfullscreen".to_string(), "true".to_string()),
        ("allowscriptaccess".to_string(), "always".to_string()),
    ]);

    Ok(EmbedDescriptor::Object(ObjectEmbed {
        embed: EmbedFallback {
            src: movie.clone(),
            mime_type: SWF_MIME_TYPE.to_string(),
            allow_fullscreen: true,
            allow_script_access: "always".to_string(),
            width: dimension(style, "width").to_string(),
            height: dimension(style, "height").to_string(),
        },
        movie,
        params,
        style: style::serialize(style),
    }))
}
