//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own library document.

#![allow(dead_code)]

use super::constants::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;
use vibewave_server::library::{seed_if_empty, DocumentStore};
use vibewave_server::server::state::GuardedDocumentStore;
use vibewave_server::{make_app, RequestsLoggingLevel, ServerConfig};

/// Test server instance with an isolated library document
///
/// When dropped, the server gracefully shuts down and the temp dir is removed.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Path of the library document on disk
    pub data_file: PathBuf,

    /// Store for direct state access in tests
    pub store: GuardedDocumentStore,

    // Private fields - keep resources alive until drop
    _temp_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a server over a freshly seeded library.
    pub async fn spawn() -> Self {
        Self::spawn_with(true).await
    }

    /// Spawns a server over a library that was created but never seeded.
    pub async fn spawn_empty() -> Self {
        Self::spawn_with(false).await
    }

    async fn spawn_with(seed: bool) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_file = temp_dir.path().join("music-data.json");

        let store = DocumentStore::load(&data_file).expect("Failed to load library");
        if seed {
            seed_if_empty(&store).expect("Failed to seed library");
        }
        let store: GuardedDocumentStore = Arc::new(store);

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            ..Default::default()
        };
        let app = make_app(config, store.clone());

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            data_file,
            store,
            _temp_dir: temp_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Parses the library document currently on disk.
    pub fn read_data_file(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(&self.data_file).expect("Failed to read data file");
        serde_json::from_str(&content).expect("Data file is not valid JSON")
    }

    /// Waits for the server to become ready by polling the dashboard
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/api/stats", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
