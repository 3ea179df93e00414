use axum::extract::FromRef;

use crate::library::DocumentStore;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedDocumentStore = Arc<DocumentStore>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub document_store: GuardedDocumentStore,
}

impl ServerState {
    pub fn new(config: ServerConfig, document_store: GuardedDocumentStore) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            document_store,
        }
    }
}

impl FromRef<ServerState> for GuardedDocumentStore {
    fn from_ref(input: &ServerState) -> Self {
        input.document_store.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
