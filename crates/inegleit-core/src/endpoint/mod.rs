//! Request building: origin from config, a route path, and query parameters.
//!
//! Query values are encoded as `application/x-www-form-urlencoded`, so a
//! space becomes `+` and every other reserved byte is percent-encoded. Values
//! are never validated or altered before encoding.

mod origin;
mod player;

use std::borrow::Cow;
use std::fmt;
use url::Url;

use crate::config::ServerConfig;

pub use origin::origin;
pub use player::player_url;

/// Query key carrying the player name.
pub const PLAYER_NAME_PARAM: &str = "player_name";
/// Query key carrying a lobby chat message.
pub const MESSAGE_PARAM: &str = "client_message";
/// Query key carrying the numeric player id on game routes.
pub const PLAYER_ID_PARAM: &str = "player_id";
pub const CARD_ID_PARAM: &str = "card_id";
pub const N_CARDS_PARAM: &str = "n_cards";

#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("server host is empty")]
    EmptyHost,
    #[error("invalid server host {host:?}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A route on the game server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /player?player_name=…`
    AddPlayer { player_name: String },
    /// `POST /player/remove_player?player_name=…`
    RemovePlayer { player_name: String },
    /// `POST /lobby/send_message?player_name=…&client_message=…`
    SendMessage {
        player_name: String,
        message: String,
    },
    /// `GET /game/start_game`
    StartGame,
    /// `GET /game/turn`
    Turn,
    /// `POST /game/play_card?player_id=…&card_id=…`
    PlayCard { player_id: u32, card_id: u32 },
    /// `POST /game/karten_verteilen?player_id=…&n_cards=…`
    DealCards { player_id: u32, n_cards: u32 },
}

impl Endpoint {
    pub fn add_player(player_name: impl Into<String>) -> Self {
        Endpoint::AddPlayer {
            player_name: player_name.into(),
        }
    }

    pub fn remove_player(player_name: impl Into<String>) -> Self {
        Endpoint::RemovePlayer {
            player_name: player_name.into(),
        }
    }

    pub fn send_message(player_name: impl Into<String>, message: impl Into<String>) -> Self {
        Endpoint::SendMessage {
            player_name: player_name.into(),
            message: message.into(),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::AddPlayer { .. } | Endpoint::StartGame | Endpoint::Turn => Method::Get,
            Endpoint::RemovePlayer { .. }
            | Endpoint::SendMessage { .. }
            | Endpoint::PlayCard { .. }
            | Endpoint::DealCards { .. } => Method::Post,
        }
    }

    /// Path segments appended to the origin, in order.
    pub fn path_segments(&self) -> &'static [&'static str] {
        match self {
            Endpoint::AddPlayer { .. } => &["player"],
            Endpoint::RemovePlayer { .. } => &["player", "remove_player"],
            Endpoint::SendMessage { .. } => &["lobby", "send_message"],
            Endpoint::StartGame => &["game", "start_game"],
            Endpoint::Turn => &["game", "turn"],
            Endpoint::PlayCard { .. } => &["game", "play_card"],
            Endpoint::DealCards { .. } => &["game", "karten_verteilen"],
        }
    }

    /// Query pairs in the order they are appended.
    pub fn query(&self) -> Vec<(&'static str, Cow<'_, str>)> {
        match self {
            Endpoint::AddPlayer { player_name } | Endpoint::RemovePlayer { player_name } => {
                vec![(PLAYER_NAME_PARAM, Cow::from(player_name.as_str()))]
            }
            Endpoint::SendMessage {
                player_name,
                message,
            } => vec![
                (PLAYER_NAME_PARAM, Cow::from(player_name.as_str())),
                (MESSAGE_PARAM, Cow::from(message.as_str())),
            ],
            Endpoint::PlayCard { player_id, card_id } => vec![
                (PLAYER_ID_PARAM, Cow::from(player_id.to_string())),
                (CARD_ID_PARAM, Cow::from(card_id.to_string())),
            ],
            Endpoint::DealCards { player_id, n_cards } => vec![
                (PLAYER_ID_PARAM, Cow::from(player_id.to_string())),
                (N_CARDS_PARAM, Cow::from(n_cards.to_string())),
            ],
            Endpoint::StartGame | Endpoint::Turn => Vec::new(),
        }
    }
}

/// Builds the full URL for `endpoint` against the configured server.
pub fn build_url(cfg: &ServerConfig, endpoint: &Endpoint) -> Result<Url, EndpointError> {
    let mut url = origin(cfg)?;
    url.set_path(&endpoint.path_segments().join("/"));

    let query = endpoint.query();
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}
