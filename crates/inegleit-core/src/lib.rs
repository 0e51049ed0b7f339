pub mod config;
pub mod logging;

pub mod client;
pub mod endpoint;
pub mod transport;
