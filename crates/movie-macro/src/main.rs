mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use movie_core::{EmbedDescriptor, MovieConfig};
use movie_macro::{local_player, MovieMacro};
use serde::Serialize;
use url_resolver::{Location, SiteLinks};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output {
    descriptor: EmbedDescriptor,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    assets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    script: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "movie_macro=trace,movie_core=trace,url_resolver=trace,video_sites=trace".to_string()
        } else {
            "movie_macro=info,url_resolver=warn,video_sites=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => MovieConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => MovieConfig::default(),
    };

    let location = match &cli.location {
        Some(path_info) => Some(
            Location::from_path_info(path_info)
                .with_context(|| format!("Not a ticket or wiki path: {}", path_info))?,
        ),
        None => None,
    };

    let links = SiteLinks::new(&cli.base);
    let movie = MovieMacro::new(config, links.clone());
    let descriptor = movie.expand_content(&cli.args, location.as_ref())?;

    let mut assets = Vec::new();
    let mut script = None;
    if let EmbedDescriptor::LocalPlayer(player) = &descriptor {
        let needs_assets = cli
            .location
            .as_deref()
            .map_or(true, local_player::needs_player_assets);
        if needs_assets {
            assets.push(links.chrome(local_player::FLOWPLAYER_JS));
            assets.push(links.chrome(local_player::FLOWPLAYER_CSS));
        }
        if cli.script {
            script = Some(player.init_script()?);
        }
    }

    let output = Output {
        descriptor,
        assets,
        script,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
