//! CLI for the Inegleit game client.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use inegleit_core::client::GameClient;
use inegleit_core::config::{self, ServerConfig};
use inegleit_core::endpoint::Endpoint;

use commands::{run_request, run_url};

/// Top-level CLI for the Inegleit game client.
#[derive(Debug, Parser)]
#[command(name = "inegleit")]
#[command(about = "Inegleit: talk to an Inegleit game server", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Overrides for the config file's server location.
#[derive(Debug, Args)]
pub struct ServerArgs {
    /// Server hostname or IP (default from config.toml).
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Server port (default from config.toml).
    #[arg(long, global = true)]
    pub port: Option<u16>,
}

impl ServerArgs {
    pub fn apply(&self, mut cfg: ServerConfig) -> ServerConfig {
        if let Some(host) = &self.host {
            cfg.host = host.clone();
        }
        if let Some(port) = self.port {
            cfg.port = port;
        }
        cfg
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Add a player to the game.
    AddPlayer {
        /// Player name (sent as-is, may be empty).
        name: String,
    },

    /// Remove a player from the game.
    RemovePlayer {
        /// Player name.
        name: String,
    },

    /// Send a lobby chat message.
    Say {
        /// Sending player's name.
        player: String,
        /// Message text.
        message: String,
    },

    /// Start the game.
    StartGame,

    /// Show whose turn it is.
    Turn,

    /// Play a card from a player's hand.
    PlayCard {
        /// Player id (seat index).
        player_id: u32,
        /// Card id within the player's hand.
        card_id: u32,
    },

    /// Deal cards to a player.
    DealCards {
        /// Player id (seat index).
        player_id: u32,
        /// Number of cards to deal.
        n_cards: u32,
    },

    /// Print the add-player URL for a name without sending anything.
    Url {
        /// Player name.
        name: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.server.apply(config::load_or_init()?);
        tracing::debug!("loaded config: {:?}", cfg);

        let endpoint = match cli.command {
            CliCommand::AddPlayer { name } => Endpoint::add_player(name),
            CliCommand::RemovePlayer { name } => Endpoint::remove_player(name),
            CliCommand::Say { player, message } => Endpoint::send_message(player, message),
            CliCommand::StartGame => Endpoint::StartGame,
            CliCommand::Turn => Endpoint::Turn,
            CliCommand::PlayCard { player_id, card_id } => {
                Endpoint::PlayCard { player_id, card_id }
            }
            CliCommand::DealCards { player_id, n_cards } => {
                Endpoint::DealCards { player_id, n_cards }
            }
            CliCommand::Url { name } => return run_url(&cfg, &name),
        };

        run_request(&GameClient::new(cfg), &endpoint).await
    }
}

#[cfg(test)]
mod tests;
