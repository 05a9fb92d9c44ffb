//! Local media player
//!
//! Any URL that no video site claims is played directly by a client-side
//! Flowplayer instance. The player sizes itself from the media
//! (`adaptiveRatio`), so explicit width and height are dropped from the
//! style. Pass `adaptiveRatio=false` in the query and a `style` argument to
//! size it by hand.

use movie_core::defaults::{apply_defaults, DefaultTable, ParamDefault};
use movie_core::{
    player_id, query, style, EmbedDescriptor, LocalPlayer, MediaSource, MovieConfig, ParamValue,
    StyleMap,
};
use url_resolver::{ResolvedUrl, SiteLinks};

/// Flowplayer script, relative to the static-asset root
pub const FLOWPLAYER_JS: &str = "movie/js/flowplayer.min.js";

/// Flowplayer skin, relative to the static-asset root
pub const FLOWPLAYER_CSS: &str = "movie/js/skin/minimalist.css";

/// Flowplayer Flash fallback, relative to the static-asset root
pub const FLOWPLAYER_SWF: &str = "movie/swf/flowplayer.swf";

/// Player parameters applied unless the URL sets them
pub const LOCAL_PLAYER_DEFAULT_PARAMETERS: &DefaultTable = &[
    ("adaptiveRatio", ParamDefault::Flag(true)),
    ("bufferTime", ParamDefault::Str("0.1")),
    ("debug", ParamDefault::Flag(false)),
    ("disabled", ParamDefault::Flag(false)),
    ("engine", ParamDefault::Str("html5")),
    ("flashfit", ParamDefault::Flag(false)),
    ("fullscreen", ParamDefault::Flag(true)),
    ("errors", ParamDefault::Str("array")),
    ("keyboard", ParamDefault::Flag(true)),
    ("live", ParamDefault::Flag(false)),
    ("muted", ParamDefault::Flag(false)),
    ("native_fullscreen", ParamDefault::Flag(false)),
    ("preload", ParamDefault::Omit),
    // adaptiveRatio decides the ratio unless one is given
    ("ratio", ParamDefault::Omit),
    ("rtmp", ParamDefault::Omit),
    ("speeds", ParamDefault::Numbers(&[0.25, 0.5, 1.0, 1.5, 2.0])),
    // the swf path is set server-side
    ("swf", ParamDefault::Omit),
    ("splash", ParamDefault::Flag(false)),
    ("subscribe", ParamDefault::Flag(false)),
    ("tooltip", ParamDefault::Flag(true)),
    ("volume", ParamDefault::Str("1")),
];

/// Request paths whose pages may contain local players
///
/// The host injects [`FLOWPLAYER_JS`] and [`FLOWPLAYER_CSS`] on these.
pub fn needs_player_assets(path_info: &str) -> bool {
    path_info.starts_with("/ticket/")
        || path_info.starts_with("/wiki")
        || path_info.starts_with("/attachment/")
}

/// Guess the media MIME type from the URL path
pub fn guess_mime_type(url: &ResolvedUrl) -> Option<String> {
    mime_guess::from_path(url.path()).first().map(|mime| mime.to_string())
}

/// Build the local-player embed for `url`
pub fn embed(
    url: &ResolvedUrl,
    mut style: StyleMap,
    config: &MovieConfig,
    links: &SiteLinks,
) -> EmbedDescriptor {
    let mut params = query::parse(url.query());

    if let Some(splash) = &config.splash {
        style.insert("background-color".to_string(), "#777".to_string());
        style.insert("background-image".to_string(), format!("url({})", links.chrome(splash)));
        params.insert("splash".to_string(), ParamValue::Bool(true));
    }

    let init = apply_defaults(&params, LOCAL_PLAYER_DEFAULT_PARAMETERS);

    style.shift_remove("width");
    style.shift_remove("height");

    let id = player_id::next_id();
    tracing::debug!("Local player {} for {}", id, url);

    EmbedDescriptor::LocalPlayer(LocalPlayer {
        id,
        swf: links.chrome(FLOWPLAYER_SWF),
        style: style::serialize(&style),
        source: MediaSource {
            src: url.as_str().to_string(),
            mime_type: guess_mime_type(url),
        },
        init,
    })
}
