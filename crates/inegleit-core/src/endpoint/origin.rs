//! Origin (scheme, host, port) construction from explicit config.

use crate::config::ServerConfig;
use std::net::Ipv6Addr;
use url::{Host, Url};

use super::EndpointError;

/// Builds `http://<host>:<port>/` from the config.
///
/// Bare IPv6 literals (e.g. `::1`) are bracketed before use; anything else
/// must be a valid URL host on its own, so `localhost:9000` is rejected.
pub fn origin(cfg: &ServerConfig) -> Result<Url, EndpointError> {
    let raw = cfg.host.trim();
    if raw.is_empty() {
        return Err(EndpointError::EmptyHost);
    }
    let invalid = |source: url::ParseError| EndpointError::InvalidHost {
        host: raw.to_string(),
        source,
    };

    let host = match raw.parse::<Ipv6Addr>() {
        Ok(addr) => Host::Ipv6(addr),
        Err(_) => Host::parse(raw).map_err(invalid)?,
    };
    Url::parse(&format!("http://{}:{}/", host, cfg.port)).map_err(invalid)
}
