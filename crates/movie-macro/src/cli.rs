use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "movie-embed")]
#[command(author, version, about = "Expand Movie macro arguments into embed descriptors")]
pub struct Cli {
    /// Macro content, e.g. "sample.webm, style=width:320px"
    #[arg(required = true)]
    pub args: String,

    /// Path to a JSON config file (width, height, splash)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the site the macro renders on
    #[arg(short, long, default_value = "http://localhost")]
    pub base: String,

    /// Request path of the page being rendered, e.g. /ticket/123
    #[arg(short, long)]
    pub location: Option<String>,

    /// Also print the player initialisation script for local movies
    #[arg(long)]
    pub script: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
