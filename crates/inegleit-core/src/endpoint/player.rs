//! The add-player URL: `http://<host>:<port>/player?player_name=<name>`.

use url::Url;

use super::{build_url, Endpoint, EndpointError};
use crate::config::ServerConfig;

/// Builds the add-player URL for `player_name`.
///
/// The name is passed through untouched: empty strings, whitespace and
/// special characters are only percent-encoded.
pub fn player_url(cfg: &ServerConfig, player_name: &str) -> Result<Url, EndpointError> {
    let url = build_url(cfg, &Endpoint::add_player(player_name))?;
    tracing::debug!(url = %url, "built player url");
    Ok(url)
}
