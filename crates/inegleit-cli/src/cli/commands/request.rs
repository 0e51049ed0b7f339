//! `inegleit add-player|remove-player|say|start-game|turn` – send one request.

use anyhow::Result;
use inegleit_core::client::GameClient;
use inegleit_core::endpoint::Endpoint;

/// Sends the request and prints the status line and body. A non-2xx status
/// is printed, not treated as a failure.
pub async fn run_request(client: &GameClient, endpoint: &Endpoint) -> Result<()> {
    let response = client.request(endpoint).await?;
    println!("HTTP {}", response.status);
    let body = response.text();
    if !body.is_empty() {
        println!("{}", body);
    }
    Ok(())
}
