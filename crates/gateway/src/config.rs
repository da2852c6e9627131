use std::env;
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:80";

/// Process configuration, read once at startup from the environment
/// (`.env` files are loaded by the binary before this runs).
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the slot file the terminal polls. Deployment-specific: it
    /// points into the terminal's shared data directory.
    pub signal_path: PathBuf,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let signal_path = env::var("SIGNAL_PATH")
            .context("SIGNAL_PATH must be set")?
            .into();
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            signal_path,
            bind_addr,
        })
    }
}
