//! YouTube iframe player
//!
//! The video id comes from the `v` query parameter. Every other parameter
//! is forwarded to the player after defaults are applied. See
//! <https://developers.google.com/youtube/player_parameters>.

use movie_core::defaults::{apply_defaults, DefaultTable, ParamDefault};
use movie_core::{query, style, EmbedDescriptor, Error, IframeEmbed, Result, StyleMap};
use url_resolver::ResolvedUrl;

/// Player parameters applied unless the URL sets them
pub const YOUTUBE_DEFAULT_PARAMETERS: &DefaultTable = &[
    ("autohide", ParamDefault::Number(2.0)),
    ("autoplay", ParamDefault::Number(0.0)),
    ("cc_load_policy", ParamDefault::Omit),
    ("color", ParamDefault::Str("red")),
    ("controls", ParamDefault::Number(1.0)),
    ("disablekb", ParamDefault::Number(0.0)),
    ("enablejsapi", ParamDefault::Number(0.0)),
    ("end", ParamDefault::Omit),
    ("fs", ParamDefault::Number(1.0)),
    ("hl", ParamDefault::Omit),
    ("iv_load_policy", ParamDefault::Number(1.0)),
    ("list", ParamDefault::Omit),
    ("listType", ParamDefault::Omit),
    ("loop", ParamDefault::Number(0.0)),
    ("modestbranding", ParamDefault::Number(1.0)),
    ("origin", ParamDefault::Omit),
    ("playerapiid", ParamDefault::Omit),
    ("playlist", ParamDefault::Omit),
    ("playsinline", ParamDefault::Omit),
    ("rel", ParamDefault::Number(0.0)),
    ("showinfo", ParamDefault::Number(0.0)),
    ("start", ParamDefault::Omit),
    ("theme", ParamDefault::Str("dark")),
];

/// Embed a YouTube video as a responsive iframe
pub(crate) fn embed(url: &ResolvedUrl, style: &StyleMap) -> Result<EmbedDescriptor> {
    let video_id = query::get_raw(url.query(), "v")
        .filter(|id| !id.is_empty())
        .ok_or_else(|| Error::UnrecognizedVideoUrl(url.to_string()))?;

    let mut params = apply_defaults(&query::parse(url.query()), YOUTUBE_DEFAULT_PARAMETERS);
    params.shift_remove("v");

    let src = format!(
        "{}?{}",
        url.with_path(&format!("/embed/{}", video_id)),
        query::serialize(&params)
    );
    Ok(EmbedDescriptor::Iframe(IframeEmbed::responsive(src, style::serialize(style))))
}
