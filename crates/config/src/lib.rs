// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod error;
mod log;
mod node;

pub use args::Args;
pub use error::ConfigError;
pub use log::{LogConfig, VALID_LOG_LEVELS};
pub use node::NodeConfig;

use serde::Deserialize;
use std::path::Path;

/// Prefix shared by every environment variable this crate reads.
pub const ENV_PREFIX: &str = "BITFLOW_";

/// Flat view of the `BITFLOW_*` variables; envy cannot fill nested structs.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default = "node::default_url")]
    node_url: String,
    #[serde(default)]
    node_rpc_user: String,
    #[serde(default)]
    node_rpc_password: String,
    #[serde(default = "node::default_timeout_secs")]
    node_timeout_secs: u64,
    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
}

impl From<EnvConfig> for BitflowConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            node: NodeConfig {
                url: env.node_url,
                rpc_user: env.node_rpc_user,
                rpc_password: env.node_rpc_password,
                timeout_secs: env.node_timeout_secs,
            },
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BitflowConfig {
    pub node: NodeConfig,
    pub log: LogConfig,
}

impl BitflowConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Load variables from `path` into the process environment, then read them.
    ///
    /// A missing file is not an error; variables already set in the
    /// environment take precedence over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match dotenv::from_path(path) {
            Ok(()) => {}
            Err(err) if err.not_found() => {}
            Err(source) => {
                return Err(ConfigError::EnvFileError {
                    path: path.display().to_string(),
                    source,
                });
            }
        }
        Self::from_env()
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env: EnvConfig = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.node.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
