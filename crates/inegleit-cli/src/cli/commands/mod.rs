//! CLI command handlers.

mod player_url;
mod request;

pub use player_url::run_url;
pub use request::run_request;
