//! `inegleit url <name>` – print the add-player URL.

use anyhow::Result;
use inegleit_core::config::ServerConfig;
use inegleit_core::endpoint;

pub fn run_url(cfg: &ServerConfig, name: &str) -> Result<()> {
    let url = endpoint::player_url(cfg, name)?;
    println!("{}", url);
    Ok(())
}
