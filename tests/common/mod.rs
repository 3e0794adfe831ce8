//! Minimal HTTP/1.1 server that answers every request with one canned
//! response and records the request lines it saw.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use github_profile_lookup::{AppConfig, GitHubClient};
use reqwest::Url;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub struct CannedServer {
    pub base_url: Url,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CannedServer {
    /// Starts serving `status` (e.g. "200 OK") with `body` on a random port.
    pub async fn start(status: &'static str, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = requests.clone();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut raw = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    let n = match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => n,
                    };
                    raw.extend_from_slice(&chunk[..n]);
                    if raw.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                let request = String::from_utf8_lossy(&raw).to_string();
                seen.lock().unwrap().push(request);

                let head = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                );
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.write_all(&body).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            base_url: Url::parse(&format!("http://{addr}/")).unwrap(),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn client(&self) -> GitHubClient {
        client_for(self.base_url.clone())
    }
}

pub fn client_for(base_url: Url) -> GitHubClient {
    let config = AppConfig {
        api_base_url: base_url,
        ..AppConfig::default()
    };
    GitHubClient::new(&config).unwrap()
}

/// Base URL of a server that accepts connections but never answers.
pub async fn silent_server_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    Url::parse(&format!("http://{addr}/")).unwrap()
}

/// Base URL of a port nobody is listening on.
pub async fn closed_port_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}/")).unwrap()
}

pub const FACEBOOK_JSON: &str = r#"{
    "login": "facebook",
    "id": 69631,
    "node_id": "MDEyOk9yZ2FuaXphdGlvbjY5NjMx",
    "avatar_url": "https://avatars.githubusercontent.com/u/69631?v=4",
    "html_url": "https://github.com/facebook",
    "type": "Organization",
    "name": "Facebook",
    "bio": "...",
    "public_repos": 156
}"#;

pub const NOT_FOUND_JSON: &str = r#"{
    "message": "Not Found",
    "documentation_url": "https://docs.github.com/rest/users/users#get-a-user",
    "status": "404"
}"#;
