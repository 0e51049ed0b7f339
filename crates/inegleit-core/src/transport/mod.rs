//! One HTTP exchange with the game server.
//!
//! Uses the curl crate (libcurl). Sends no body, no custom headers and no
//! credentials; follows redirects. The status code is reported, never
//! checked: a 404 or 500 is still an `Ok(Response)`.

mod parse;

use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::str;
use std::time::Duration;
use url::Url;

use crate::config::ServerConfig;
use crate::endpoint::Method;

/// Timeouts applied to the exchange. `None` leaves libcurl's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransportOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

impl From<&ServerConfig> for TransportOptions {
    fn from(cfg: &ServerConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.timeout(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// libcurl failed (connection refused, DNS failure, timeout, ...).
    #[error("{method} {url} failed: {source}")]
    Request {
        method: Method,
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("no HTTP response code from {url}")]
    NoResponseCode { url: String },
}

/// Response of the final hop after redirects.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u32,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body as text; invalid UTF-8 is replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Body parsed as JSON. The server's schema is not fixed, so callers pick `T`
    /// (`serde_json::Value` when in doubt).
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }
}

/// Performs one request and returns the final response.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn send(method: Method, url: &Url, opts: &TransportOptions) -> Result<Response, TransportError> {
    let (status, header_lines, body) =
        perform(method, url, opts).map_err(|source| TransportError::Request {
            method,
            url: url.to_string(),
            source,
        })?;

    if status == 0 {
        return Err(TransportError::NoResponseCode {
            url: url.to_string(),
        });
    }

    Ok(Response {
        status,
        headers: parse::parse_headers(&header_lines),
        body,
    })
}

fn perform(
    method: Method,
    url: &Url,
    opts: &TransportOptions,
) -> Result<(u32, Vec<String>, Vec<u8>), curl::Error> {
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    match method {
        Method::Get => easy.get(true)?,
        Method::Post => {
            easy.post(true)?;
            easy.post_fields_copy(b"")?;
        }
    }
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    if let Some(d) = opts.connect_timeout {
        easy.connect_timeout(d)?;
    }
    if let Some(d) = opts.timeout {
        easy.timeout(d)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok((status, header_lines, body))
}
