use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderName;
use serde::Deserialize;
use ribbon_core::error::{Result, RibbonError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub auth: AuthSection,

    #[serde(default)]
    pub origin: OriginSection,

    #[serde(default)]
    pub storage: StorageSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            auth: AuthSection::default(),
            origin: OriginSection::default(),
            storage: StorageSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RibbonError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.auth.validate()?;
        self.origin.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            RibbonError::Config(format!(
                "server.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthSection {
    /// Shared server secret. `None` (or empty) makes every gated route fail closed.
    #[serde(default)]
    pub secret: Option<String>,

    #[serde(default = "default_header")]
    pub header: String,

    #[serde(default = "default_query_param")]
    pub query_param: String,
}

impl Default for AuthSection {
    fn default() -> Self {
        Self {
            secret: None,
            header: default_header(),
            query_param: default_query_param(),
        }
    }
}

impl AuthSection {
    pub fn validate(&self) -> Result<()> {
        HeaderName::from_bytes(self.header.as_bytes()).map_err(|_| {
            RibbonError::Config(format!("auth.header is not a valid header name: {}", self.header))
        })?;
        if self.query_param.is_empty() {
            return Err(RibbonError::Config("auth.query_param must not be empty".into()));
        }
        Ok(())
    }

    /// Configured secret, treating the empty string as unset.
    pub fn effective_secret(&self) -> Option<&str> {
        self.secret.as_deref().filter(|s| !s.is_empty())
    }
}

fn default_header() -> String {
    "x-tsumugi-token".into()
}
fn default_query_param() -> String {
    "token".into()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OriginSection {
    /// Exact addresses admitted by the origin filter. Empty disables filtering.
    #[serde(default)]
    pub allowed: Vec<String>,
}

impl OriginSection {
    pub fn validate(&self) -> Result<()> {
        if self.allowed.iter().any(|a| a.trim().is_empty()) {
            return Err(RibbonError::Config("origin.allowed entries must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageSection {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Application data directory; documents live in `<data_dir>/memory`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

impl StorageSection {
    pub fn root(&self) -> PathBuf {
        self.data_dir.join(STORAGE_SUBDIR)
    }
}

const STORAGE_SUBDIR: &str = "memory";

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
