// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use std::time::Duration;

pub(crate) fn default_url() -> String {
    "http://127.0.0.1:8332".to_string()
}

pub(crate) fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeConfig {
    /// Bitcoin node JSON-RPC endpoint
    ///
    /// Env: BITFLOW_NODE_URL
    /// Valid schemes: http://, https://
    /// Default: http://127.0.0.1:8332
    pub url: String,

    /// RPC user for HTTP basic auth. Empty disables auth.
    ///
    /// Env: BITFLOW_NODE_RPC_USER
    /// Default: ""
    pub rpc_user: String,

    /// RPC password for HTTP basic auth
    ///
    /// Env: BITFLOW_NODE_RPC_PASSWORD
    /// Default: ""
    pub rpc_password: String,

    /// Per-request timeout in seconds
    ///
    /// Env: BITFLOW_NODE_TIMEOUT_SECS
    /// Default: 30
    pub timeout_secs: u64,
}

impl NodeConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::ValidateError(
                "Node URL cannot be empty".to_string(),
            ));
        }

        let parsed = url::Url::parse(&self.url).map_err(|e| {
            ConfigError::ValidateError(format!("Invalid node URL '{}': {}", self.url, e))
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::ValidateError(format!(
                    "Invalid node URL scheme '{}'. Must be http:// or https://",
                    scheme
                )));
            }
        }

        if self.rpc_user.is_empty() && !self.rpc_password.is_empty() {
            return Err(ConfigError::ValidateError(
                "Node RPC password is set but RPC user is empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidateError(
                "Node timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Credentials for HTTP basic auth, if a user is configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        if self.rpc_user.is_empty() {
            None
        } else {
            Some((self.rpc_user.as_str(), self.rpc_password.as_str()))
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            rpc_user: String::new(),
            rpc_password: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
