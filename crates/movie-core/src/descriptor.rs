//! Embed descriptors
//!
//! The output of movie expansion. Descriptors carry attribute values only;
//! turning them into markup is the host's job.

use crate::query::QueryParams;
use indexmap::IndexMap;
use serde::Serialize;

/// MIME type of Flash movies used by legacy object embeds
pub const SWF_MIME_TYPE: &str = "application/x-shockwave-flash";

/// Iframe player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IframeEmbed {
    /// Player URL
    pub src: String,
    /// Serialized style attribute
    pub style: String,
    /// Frame border, when the provider sets one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frameborder: Option<u8>,
    /// Whether fullscreen is allowed
    pub allow_fullscreen: bool,
    /// Explicit width attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Explicit height attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

impl IframeEmbed {
    /// Create a responsive iframe with only `src` and `style`
    pub fn responsive(src: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            style: style.into(),
            frameborder: None,
            allow_fullscreen: false,
            width: None,
            height: None,
        }
    }

    /// Create a fixed-size, borderless, fullscreen-capable iframe
    pub fn sized(
        src: impl Into<String>,
        style: impl Into<String>,
        width: impl Into<String>,
        height: impl Into<String>,
    ) -> Self {
        Self {
            src: src.into(),
            style: style.into(),
            frameborder: Some(0),
            allow_fullscreen: true,
            width: Some(width.into()),
            height: Some(height.into()),
        }
    }
}

/// `<embed>` fallback inside an object embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedFallback {
    /// Movie URL
    pub src: String,
    /// MIME type of the movie
    pub mime_type: String,
    /// `allowfullscreen` attribute
    pub allow_fullscreen: bool,
    /// `allowscriptaccess` attribute
    pub allow_script_access: String,
    /// Width attribute
    pub width: String,
    /// Height attribute
    pub height: String,
}

/// Native object player with an embed fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectEmbed {
    /// Movie URL
    pub movie: String,
    /// `<param>` name/value pairs, in order
    pub params: IndexMap<String, String>,
    /// Embed fallback
    pub embed: EmbedFallback,
    /// Serialized style attribute
    pub style: String,
}

/// Media source of a local player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSource {
    /// Media URL
    pub src: String,
    /// Guessed MIME type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// Client-side player for locally hosted media
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalPlayer {
    /// Unique element id the client-side player binds to
    pub id: String,
    /// URL of the Flash fallback movie
    pub swf: String,
    /// Serialized style attribute
    pub style: String,
    /// Media source
    pub source: MediaSource,
    /// Initialization parameters for the client-side player
    pub init: QueryParams,
}

impl LocalPlayer {
    /// Initialization parameters as JSON
    pub fn init_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.init)
    }

    /// Script binding the player element to its initialization parameters
    pub fn init_script(&self) -> serde_json::Result<String> {
        Ok(format!(
            "$(function() {{ $('#{}').flowplayer({}); }});",
            self.id,
            self.init_json()?
        ))
    }
}

/// Embed descriptor produced for one movie reference
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum EmbedDescriptor {
    /// Iframe player
    #[serde(rename = "iframe")]
    Iframe(IframeEmbed),
    /// Native object player
    #[serde(rename = "object")]
    Object(ObjectEmbed),
    /// Client-side local player
    #[serde(rename = "localPlayer")]
    LocalPlayer(LocalPlayer),
}

impl EmbedDescriptor {
    /// Get as iframe if applicable
    pub fn as_iframe(&self) -> Option<&IframeEmbed> {
        match self {
            EmbedDescriptor::Iframe(embed) => Some(embed),
            _ => None,
        }
    }

    /// Get as object embed if applicable
    pub fn as_object(&self) -> Option<&ObjectEmbed> {
        match self {
            EmbedDescriptor::Object(embed) => Some(embed),
            _ => None,
        }
    }

    /// Get as local player if applicable
    pub fn as_local_player(&self) -> Option<&LocalPlayer> {
        match self {
            EmbedDescriptor::LocalPlayer(player) => Some(player),
            _ => None,
        }
    }
}
