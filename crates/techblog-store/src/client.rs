//! Lazily initialized, shared store client.

use std::sync::Arc;

use mongodb::bson::doc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::StoreError;

/// Pooled driver handle. Cloning it is cheap and clones share the pool.
pub type ClientHandle = mongodb::Client;

/// Owns the connection settings and the lazily opened driver handle.
///
/// The connection is opened on the first call to [`StoreClient::get_client`]
/// and the same handle is returned for the rest of the process lifetime.
/// Clones of a `StoreClient` share the handle. A failed initialization is not
/// remembered, so a later call attempts it again.
#[derive(Clone)]
pub struct StoreClient {
    config: Arc<StoreConfig>,
    handle: Arc<OnceCell<ClientHandle>>,
}

impl StoreClient {
    /// Creates a client that connects on first use.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config: Arc::new(config),
            handle: Arc::new(OnceCell::new()),
        }
    }

    /// Returns the shared driver handle, connecting first if needed.
    ///
    /// # Errors
    ///
    /// - `StoreError::Configuration` if the URI is missing or invalid
    /// - `StoreError::Connectivity` if the store does not answer a ping
    pub async fn get_client(&self) -> Result<&ClientHandle, StoreError> {
        self.handle.get_or_try_init(|| connect(&self.config)).await
    }

    /// Returns true once a connection has been established.
    pub fn is_connected(&self) -> bool {
        self.handle.initialized()
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl std::fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreClient")
            .field("config", &self.config)
            .field("connected", &self.is_connected())
            .finish()
    }
}

async fn connect(config: &StoreConfig) -> Result<ClientHandle, StoreError> {
    let uri = config
        .uri()
        .ok_or_else(|| StoreError::configuration("connection URI is not set (MONGO_URI)"))?;

    let client = ClientHandle::with_uri_str(uri)
        .await
        .map_err(|e| StoreError::configuration(format!("invalid connection URI: {}", e)))?;

    debug!("Pinging document store");
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| StoreError::connectivity(e.to_string()))?;

    info!(
        database = config.database(),
        collection = config.collection(),
        "Document store client initialized"
    );

    Ok(client)
}
