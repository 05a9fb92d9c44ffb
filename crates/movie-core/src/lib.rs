//! Core types for movie embedding
//!
//! This crate contains the building blocks shared by reference resolution,
//! provider builders and the local player: style and query transforms,
//! parameter defaults, embed descriptors, player ids, configuration and
//! the error taxonomy.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod defaults;
pub mod descriptor;
pub mod error;
pub mod player_id;
pub mod query;
pub mod style;

pub use config::MovieConfig;
pub use defaults::{apply_defaults, DefaultTable, ParamDefault};
pub use descriptor::{
    EmbedDescriptor, EmbedFallback, IframeEmbed, LocalPlayer, MediaSource, ObjectEmbed,
};
pub use error::{Error, ResourceError, Result};
pub use query::{ParamValue, QueryParams};
pub use style::StyleMap;
