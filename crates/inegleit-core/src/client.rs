//! Async client for the game server.
//!
//! Every call builds its URL fresh from the config, runs the blocking curl
//! exchange on tokio's blocking pool and logs the response. Calls share no
//! state; concurrent calls may complete in any order.

use tokio::task::JoinHandle;

use crate::config::ServerConfig;
use crate::endpoint::{self, Endpoint, EndpointError};
use crate::transport::{self, Response, TransportError, TransportOptions};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("request task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone)]
pub struct GameClient {
    config: ServerConfig,
}

impl GameClient {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Sends the request for `endpoint` and returns the server's response,
    /// whatever its status code.
    pub async fn request(&self, endpoint: &Endpoint) -> Result<Response, ClientError> {
        let url = endpoint::build_url(&self.config, endpoint)?;
        let method = endpoint.method();
        let opts = TransportOptions::from(&self.config);
        tracing::debug!(%method, %url, "sending request");

        let response = tokio::task::spawn_blocking({
            let url = url.clone();
            move || transport::send(method, &url, &opts)
        })
        .await??;

        tracing::info!(
            %method,
            %url,
            status = response.status,
            body_len = response.body.len(),
            "response received"
        );
        Ok(response)
    }

    /// Adds `player_name` to the game: `GET /player?player_name=…`.
    pub async fn add_player(&self, player_name: &str) -> Result<Response, ClientError> {
        self.request(&Endpoint::add_player(player_name)).await
    }

    pub async fn remove_player(&self, player_name: &str) -> Result<Response, ClientError> {
        self.request(&Endpoint::remove_player(player_name)).await
    }

    /// Posts a lobby chat message as `player_name`.
    pub async fn send_message(
        &self,
        player_name: &str,
        message: &str,
    ) -> Result<Response, ClientError> {
        self.request(&Endpoint::send_message(player_name, message))
            .await
    }

    pub async fn start_game(&self) -> Result<Response, ClientError> {
        self.request(&Endpoint::StartGame).await
    }

    pub async fn turn(&self) -> Result<Response, ClientError> {
        self.request(&Endpoint::Turn).await
    }

    /// Plays card `card_id` from the hand of player `player_id`.
    pub async fn play_card(&self, player_id: u32, card_id: u32) -> Result<Response, ClientError> {
        self.request(&Endpoint::PlayCard { player_id, card_id })
            .await
    }

    /// Deals `n_cards` cards to player `player_id`.
    pub async fn deal_cards(&self, player_id: u32, n_cards: u32) -> Result<Response, ClientError> {
        self.request(&Endpoint::DealCards { player_id, n_cards })
            .await
    }

    /// Fire-and-forget: spawns the request and only logs its outcome.
    ///
    /// Failures are logged at warn level and yield `None`; nothing panics or
    /// propagates. The handle may be dropped. Must be called inside a tokio runtime.
    pub fn dispatch(&self, endpoint: Endpoint) -> JoinHandle<Option<Response>> {
        let client = self.clone();
        tokio::spawn(async move {
            match client.request(&endpoint).await {
                Ok(response) => Some(response),
                Err(e) => {
                    tracing::warn!(?endpoint, "request failed: {}", e);
                    None
                }
            }
        })
    }
}
