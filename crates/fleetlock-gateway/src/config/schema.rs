use std::net::SocketAddr;

use serde::Deserialize;

use fleetlock_core::error::{FleetLockError, Result};
use fleetlock_core::protocol::{PRE_REBOOT_PATH, STEADY_STATE_PATH};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FleetLockError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        self.server.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            metrics_path: default_metrics_path(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.metrics_path.starts_with('/') {
            return Err(FleetLockError::Config(
                "server.metrics_path must start with '/'".into(),
            ));
        }
        // Plain literal paths only; ':' and '*' are route parameter syntax.
        if let Some(c) = self
            .metrics_path
            .chars()
            .find(|&c| !(c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_' | '.' | '~')))
        {
            return Err(FleetLockError::Config(format!(
                "server.metrics_path contains unsupported character {c:?}"
            )));
        }
        if self.metrics_path == PRE_REBOOT_PATH || self.metrics_path == STEADY_STATE_PATH {
            return Err(FleetLockError::Config(format!(
                "server.metrics_path must not shadow {}",
                self.metrics_path
            )));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            FleetLockError::Config(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_metrics_path() -> String {
    "/metrics".into()
}
