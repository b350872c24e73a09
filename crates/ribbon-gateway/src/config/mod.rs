//! Gateway config loader (strict parsing + env overrides).

pub mod env;
pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use ribbon_core::error::{Result, RibbonError};

pub use schema::{
    AuthSection, GatewayConfig, OriginSection, ServerSection, StorageBackend, StorageSection,
};

/// Config file picked up from the working directory when `RIBBON_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "ribbon.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<GatewayConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| RibbonError::Config(format!("read {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| RibbonError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the startup config: file (if any), then env overrides, then validate.
pub fn load<F>(lookup: F) -> Result<GatewayConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let file = lookup(env::ENV_CONFIG_PATH)
        .map(PathBuf::from)
        .or_else(|| {
            let p = PathBuf::from(DEFAULT_CONFIG_FILE);
            p.exists().then_some(p)
        });

    let mut cfg = match file {
        Some(path) => load_from_file(path)?,
        None => GatewayConfig::default(),
    };

    cfg.apply_env(lookup)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Process-environment lookup for [`load`].
pub fn from_process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
