//! Document store configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration for the MongoDB-backed post store.
///
/// The connection URI is a secret supplied by the environment; it is never
/// printed by the `Debug` impl.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Connection URI. `None` when the environment did not provide one.
    #[serde(default, skip_serializing)]
    uri: Option<String>,

    /// Database holding the posts collection.
    #[serde(default = "default_database")]
    database: String,

    /// Collection holding the post documents.
    #[serde(default = "default_collection")]
    collection: String,
}

fn default_database() -> String {
    "markdown-db".to_string()
}

fn default_collection() -> String {
    "markdown-collection".to_string()
}

impl StoreConfig {
    /// Creates a new builder for StoreConfig.
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    /// Returns the connection URI, if configured.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Returns the database name.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Returns the collection name.
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("uri", &self.uri.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .field("collection", &self.collection)
            .finish()
    }
}

/// Builder for StoreConfig.
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    uri: Option<String>,
    database: Option<String>,
    collection: Option<String>,
}

impl StoreConfigBuilder {
    /// Sets the connection URI.
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Sets the connection URI from an optional value.
    pub fn uri_opt(mut self, uri: Option<String>) -> Self {
        self.uri = uri;
        self
    }

    /// Sets the database name.
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Sets the collection name.
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Builds the configuration.
    ///
    /// A missing URI is accepted here; it is reported as a configuration
    /// error when the client is first requested.
    ///
    /// # Errors
    ///
    /// Returns an error if the database or collection name is empty.
    pub fn build(self) -> Result<StoreConfig, &'static str> {
        let database = self.database.unwrap_or_else(default_database);
        let collection = self.collection.unwrap_or_else(default_collection);

        if database.trim().is_empty() {
            return Err("database cannot be empty");
        }
        if collection.trim().is_empty() {
            return Err("collection cannot be empty");
        }

        Ok(StoreConfig {
            uri: self.uri.filter(|uri| !uri.trim().is_empty()),
            database,
            collection,
        })
    }
}
