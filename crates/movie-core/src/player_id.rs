//! Unique player identifiers
//!
//! Ids bind a rendered player element to its client-side initialization.
//! They come from OS randomness, not a shared counter, so concurrent
//! renderers never coordinate.

use uuid::Uuid;

/// Prefix of every generated player id
pub const PLAYER_ID_PREFIX: &str = "player-";

/// Generate a fresh player id: `player-` followed by 32 hex characters
pub fn next_id() -> String {
    format!("{}{}", PLAYER_ID_PREFIX, Uuid::new_v4().simple())
}
