use clap::{Parser, Subcommand};
use plex_playlists::plex::{
    self,
    auth::{Authenticator, ClientHeaders},
    client::Plex,
    config::PlexConfig,
    models::playlist::PlaylistType,
};

#[derive(Parser, Debug)]
#[command(version, about = "List, inspect and edit playlists on a Plex Media Server")]
struct Cli {
    /// Server base URL, e.g. http://192.168.1.10:32400
    #[arg(long, env = "PLEX_BASEURL", global = true)]
    url: Option<String>,

    #[arg(long, env = "PLEX_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in to plex.tv and print the account token
    Token {
        #[arg(long, env = "PLEX_USERNAME")]
        username: String,
        #[arg(long, env = "PLEX_PASSWORD", hide_env_values = true)]
        password: String,
    },
    #[command(flatten)]
    Playlist(PlaylistCommand),
}

#[derive(Subcommand, Debug)]
enum PlaylistCommand {
    /// List playlists grouped by type
    List,
    /// Find a playlist by exact title and print its rating key
    Find { title: String },
    /// Print a playlist's items, grouped by media category
    Items {
        rating_key: String,
        /// Print the flat item list instead of the grouped collection
        #[arg(long)]
        raw: bool,
    },
    /// Create a playlist from library item rating keys
    Create {
        title: String,
        #[arg(long = "type", value_parser = parse_playlist_type)]
        playlist_type: PlaylistType,
        #[arg(required = true)]
        item_ids: Vec<String>,
    },
    /// Delete a playlist
    Delete { rating_key: String },
    /// Remove items from a playlist by playlist item id
    RemoveItems {
        rating_key: String,
        #[arg(required = true)]
        item_ids: Vec<String>,
    },
}

fn parse_playlist_type(value: &str) -> Result<PlaylistType, String> {
    value.parse().map_err(|err: plex::error::PlexError| err.to_string())
}

fn config(cli: &Cli) -> Result<PlexConfig, anyhow::Error> {
    let url = cli
        .url
        .clone()
        .or_else(|| std::env::var("PLEX_URL").ok())
        .unwrap_or_default();
    let token = cli.token.clone().unwrap_or_default();
    Ok(PlexConfig::new(url, token)?)
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Token { username, password } => {
            let headers = match &cli.url {
                Some(url) => ClientHeaders::for_server(url).await,
                None => ClientHeaders::new(None),
            };
            let token = Authenticator::new(headers)?
                .fetch_token(username, password)
                .await?;
            println!("{}", token);
            Ok(())
        }
        Command::Playlist(command) => {
            let plex = Plex::new(config(&cli)?)?;
            run(&plex, command).await
        }
    }
}

async fn run(plex: &Plex, command: &PlaylistCommand) -> Result<(), anyhow::Error> {
    match command {
        PlaylistCommand::List => {
            for (playlist_type, playlists) in plex::get_playlists(plex).await {
                println!("{}:", playlist_type);
                for playlist in playlists {
                    println!("\t{}\t{}", playlist.rating_key, playlist.title);
                }
            }
        }
        PlaylistCommand::Find { title } => match plex::find_playlist(plex, title).await {
            Some(playlist) => println!(
                "{}\t{}\t{}",
                playlist.rating_key, playlist.playlist_type, playlist.title
            ),
            None => match plex::suggest_playlist(plex, title).await {
                Some(near) => anyhow::bail!(
                    "no playlist titled {:?}; did you mean {:?} ({})?",
                    title,
                    near.title,
                    near.rating_key
                ),
                None => anyhow::bail!("no playlist titled {:?}", title),
            },
        },
        PlaylistCommand::Items { rating_key, raw } => {
            let json = if *raw {
                let items = plex::get_playlist_items(plex, rating_key).await;
                serde_json::to_string_pretty(&items)?
            } else {
                let collection = plex::get_playlist_collection(plex, rating_key).await;
                serde_json::to_string_pretty(&collection)?
            };
            println!("{}", json);
        }
        PlaylistCommand::Create {
            title,
            playlist_type,
            item_ids,
        } => {
            let Some(body) = plex::create_playlist(plex, title, *playlist_type, item_ids).await
            else {
                anyhow::bail!("failed to create playlist {:?}", title);
            };
            match plex::created_rating_key(&body) {
                Some(rating_key) => println!("{}", rating_key),
                None => println!("{}", body),
            }
        }
        PlaylistCommand::Delete { rating_key } => {
            if !plex::delete_playlist(plex, rating_key).await {
                anyhow::bail!("failed to delete playlist {}", rating_key);
            }
        }
        PlaylistCommand::RemoveItems {
            rating_key,
            item_ids,
        } => {
            if !plex::remove_playlist_items(plex, rating_key, item_ids).await {
                anyhow::bail!("failed to remove items from playlist {}", rating_key);
            }
        }
    }

    Ok(())
}
