//! Minimal HTTP/1.1 server standing in for the game server in integration tests.
//!
//! Answers every request with a fixed status and body and records each
//! request line (e.g. `GET /player?player_name=Alice HTTP/1.1`).

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct PlayerServer {
    pub port: u16,
    requests: Arc<Mutex<Vec<String>>>,
}

impl PlayerServer {
    /// Request lines received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server that answers `200 OK` with a JSON body.
pub fn start() -> PlayerServer {
    start_with_response(200, "OK", r#"{"status":"ok"}"#)
}

/// Starts a server in a background thread answering with `status`/`body`.
/// The server runs until the process exits.
pub fn start_with_response(status: u16, reason: &'static str, body: &'static str) -> PlayerServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let recorded = Arc::clone(&recorded);
            thread::spawn(move || handle(stream, &recorded, status, reason, body));
        }
    });
    PlayerServer { port, requests }
}

/// A port with nothing listening on it.
pub fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().unwrap().port()
}

fn handle(
    mut stream: std::net::TcpStream,
    recorded: &Mutex<Vec<String>>,
    status: u16,
    reason: &str,
    body: &str,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    if let Some(line) = request.lines().next() {
        recorded.lock().unwrap().push(line.trim().to_string());
    }
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
