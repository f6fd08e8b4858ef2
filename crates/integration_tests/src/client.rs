// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::constants::NODE_URL_VAR;
use anyhow::{Context, Result};
use bitflow_bitcoin_node::{HttpTransport, NodeClient, NodeClientError};
use bitflow_config::BitflowConfig;
use colored::Colorize;
use std::time::Duration;

/// A [`NodeClient`] pointed at the node named by `BITFLOW_NODE_URL`.
pub struct TestNode {
    url: String,
    client: NodeClient<HttpTransport>,
}

impl TestNode {
    /// Build a client from the `BITFLOW_*` environment.
    ///
    /// Returns `Ok(None)` when no node URL is set so live tests can skip
    /// instead of failing on machines without a node.
    pub fn from_env() -> Result<Option<Self>> {
        if std::env::var_os(NODE_URL_VAR).is_none() {
            println!(
                "{} {} is not set, skipping live node test",
                "skip:".yellow().bold(),
                NODE_URL_VAR
            );
            return Ok(None);
        }

        let config = BitflowConfig::from_env().context("Failed to load node configuration")?;
        let transport =
            HttpTransport::from_config(&config.node).context("Failed to create HTTP transport")?;

        Ok(Some(Self {
            url: config.node.url.clone(),
            client: NodeClient::new(transport),
        }))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn client(&self) -> &NodeClient<HttpTransport> {
        &self.client
    }

    /// Poll `getinfo` until the node answers.
    ///
    /// A node that answers with an error envelope (e.g. still warming up) is
    /// retried; transport failures are retried as well.
    pub async fn wait_for_ready(&self, max_retries: u32) -> Result<()> {
        println!("Waiting for node at {} ...", self.url.cyan());

        for i in 0..max_retries {
            match self.client.get_blockchain_info().await {
                Ok(info) => {
                    println!(
                        "{} node is ready on chain '{}' at height {} (took {} seconds)",
                        "ok:".green().bold(),
                        info.chain(),
                        info.num_blocks(),
                        i + 1
                    );
                    return Ok(());
                }
                Err(NodeClientError::Transport { source, .. }) => {
                    println!("  Attempt {}/{}: {}", i + 1, max_retries, source);
                }
                Err(err) => {
                    println!(
                        "  Attempt {}/{}: {}",
                        i + 1,
                        max_retries,
                        err.to_string().bright_black()
                    );
                }
            }

            if i + 1 < max_retries {
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }

        println!(
            "\n{} node did not become ready after {} attempts",
            "error:".red().bold(),
            max_retries
        );

        anyhow::bail!(
            "Node at {} did not become ready after {} attempts",
            self.url,
            max_retries
        )
    }
}
