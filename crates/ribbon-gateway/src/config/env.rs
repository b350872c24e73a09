//! Environment overrides, applied on top of file (or default) config.
//!
//! Lookups go through a closure so tests can feed a fixed map instead of the
//! process environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use ribbon_core::error::{Result, RibbonError};

use super::schema::GatewayConfig;

pub const ENV_CONFIG_PATH: &str = "RIBBON_CONFIG";
pub const ENV_PORT: &str = "PORT";
pub const ENV_SECRET: &str = "TSUMUGI_TOKEN";
pub const ENV_ALLOWED_IPS: &str = "ALLOWED_IPS";
pub const ENV_DATA_DIR: &str = "RIBBON_DATA_DIR";

impl GatewayConfig {
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT) {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| RibbonError::Config(format!("{ENV_PORT} must be a port number: {port}")))?;
            let mut addr: SocketAddr = self.server.listen_addr()?;
            addr.set_port(port);
            self.server.listen = addr.to_string();
        }

        if let Some(secret) = lookup(ENV_SECRET) {
            self.auth.secret = Some(secret);
        }

        if let Some(raw) = lookup(ENV_ALLOWED_IPS) {
            self.origin.allowed = parse_allowed(&raw);
        }

        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.storage.data_dir = PathBuf::from(dir);
        }

        Ok(())
    }
}

/// `"1.2.3.4, 5.6.7.8,,"` -> `["1.2.3.4", "5.6.7.8"]`
pub fn parse_allowed(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
