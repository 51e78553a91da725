pub mod auth;
pub mod collections;
pub mod dashboard;
pub mod master;

use std::sync::Arc;

use crate::auth::SessionStore;
use crate::client::BackendClient;
use crate::engine::CrudEngine;

/// Shared dependencies handed to every handler.
pub struct AppState {
    pub client: BackendClient,
    pub engine: CrudEngine,
    pub store: SessionStore,
}

impl AppState {
    pub fn new(client: BackendClient) -> Arc<Self> {
        Arc::new(Self {
            engine: CrudEngine::new(client.clone()),
            store: SessionStore::new(client.clone()),
            client,
        })
    }
}
