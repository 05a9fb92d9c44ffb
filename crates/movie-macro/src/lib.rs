//! Movie macro
//!
//! Expands `[[Movie(...)]]` wiki macro invocations into embed descriptors.
//! Known video sites get their own iframe or object embed; anything else is
//! handed to a local Flowplayer instance.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod args;
pub mod local_player;
pub mod movie;

pub use args::MacroArgs;
pub use movie::MovieMacro;
