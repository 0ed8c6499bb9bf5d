//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use fleetlock_core::error::{FleetLockError, Result};

pub use schema::{GatewayConfig, ServerSection};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "FLEETLOCK_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "fleetlock.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| FleetLockError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

/// Like `load_from_file`, but a missing file yields the defaults.
pub fn load_from_file_or_default(path: &str) -> Result<GatewayConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(%path, "config file not found, using defaults");
            Ok(GatewayConfig::default())
        }
        Err(e) => Err(FleetLockError::Config(format!("read config failed ({path}): {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| FleetLockError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
