//! Configuracion del servidor.
//!
//! Capas, de menor a mayor prioridad:
//!
//! 1. Defaults
//! 2. Archivo `techblog.toml` opcional (ruta via `TECHBLOG_CONFIG`)
//! 3. Variables de entorno `BLOG_*`, con `__` como separador
//!    (ej: `BLOG_SERVER__PORT=8080`, `BLOG_STORE__URI=mongodb://...`)
//!
//! `MONGO_URI` se acepta como URI del store cuando `BLOG_STORE__URI` no esta.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use techblog_store::{
    InMemoryPostStore, MongoPostStore, PostStore, StoreClient, StoreConfig, StoreError,
};

use crate::cache::CacheConfig;
use crate::render::Credits;

/// Env var con la ruta del archivo de configuracion.
pub const CONFIG_PATH_ENV: &str = "TECHBLOG_CONFIG";

/// Archivo de configuracion por defecto (la extension es opcional).
pub const DEFAULT_CONFIG_FILE: &str = "techblog";

/// Env var aceptada como URI del store.
pub const MONGO_URI_ENV: &str = "MONGO_URI";

const ENV_PREFIX: &str = "BLOG";

/// Top-level settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub store: StoreSettings,
    pub cache: CacheSettings,
    /// Creditos del footer.
    pub credits: Credits,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8501,
        }
    }
}

/// Which [`PostStore`] implementation backs the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Mongo,
    Memory,
}

/// Post store settings.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub backend: StoreBackend,
    pub uri: Option<String>,
    pub database: String,
    pub collection: String,
    /// JSON array of posts loaded by the memory backend.
    pub seed_file: Option<PathBuf>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Mongo,
            uri: None,
            database: "markdown-db".to_string(),
            collection: "markdown-collection".to_string(),
            seed_file: None,
        }
    }
}

impl fmt::Debug for StoreSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreSettings")
            .field("backend", &self.backend)
            .field("uri", &self.uri.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .field("collection", &self.collection)
            .field("seed_file", &self.seed_file)
            .finish()
    }
}

/// Query cache settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub ttl_seconds: u64,
    pub max_capacity: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_seconds: 300,
            max_capacity: 10_000,
        }
    }
}

impl CacheSettings {
    pub fn to_cache_config(&self) -> CacheConfig {
        CacheConfig {
            ttl: Duration::from_secs(self.ttl_seconds),
            max_capacity: self.max_capacity,
        }
    }
}

impl Settings {
    /// Carga settings desde el archivo de configuracion y el entorno del proceso.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::from_sources(&path, None)
    }

    /// Carga settings desde `path` y un set explicito de variables.
    ///
    /// Con `vars = None` se leen las variables del proceso.
    pub fn from_sources(
        path: &str,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let fallback_uri = match &vars {
            Some(vars) => vars.get(MONGO_URI_ENV).cloned(),
            None => std::env::var(MONGO_URI_ENV).ok(),
        };

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(vars);

        let mut settings: Settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        if settings.store.uri.is_none() {
            settings.store.uri = fallback_uri.filter(|uri| !uri.trim().is_empty());
        }

        Ok(settings)
    }

    /// Direccion en la que escucha el servidor.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.server.host.parse().map_err(|_| {
            ConfigError::Message(format!("invalid server.host: {}", self.server.host))
        })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// Construye el store configurado.
    ///
    /// El backend Mongo no abre conexiones aqui; el cliente se crea en la
    /// primera query.
    pub fn build_store(&self) -> Result<Arc<dyn PostStore>, StoreError> {
        match self.store.backend {
            StoreBackend::Mongo => {
                let config = StoreConfig::builder()
                    .uri_opt(self.store.uri.clone())
                    .database(&self.store.database)
                    .collection(&self.store.collection)
                    .build()
                    .map_err(StoreError::configuration)?;
                Ok(Arc::new(MongoPostStore::new(StoreClient::new(config))))
            },
            StoreBackend::Memory => {
                let store = match &self.store.seed_file {
                    Some(path) => InMemoryPostStore::from_json_file(path)?,
                    None => InMemoryPostStore::new(),
                };
                Ok(Arc::new(store))
            },
        }
    }
}
