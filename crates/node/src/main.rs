// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use bitflow_bitcoin_node::{
    HttpTransport, NodeClient,
    logging::{self, LoggingConfig},
};
use bitflow_config::{Args, BitflowConfig};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let config = BitflowConfig::from_env_file(&args.env_file)?;
    logging::init_with_config(LoggingConfig::from(&config.log))?;

    tracing::info!("Node URL: {}", config.node.url);
    tracing::info!("Log level: {}", config.log.level);

    let client = NodeClient::new(HttpTransport::from_config(&config.node)?);

    let info = client.get_blockchain_info().await?;
    tracing::info!(
        chain = info.chain(),
        blocks = info.num_blocks(),
        best = %info.best_block_hash(),
        "Fetched chain info"
    );

    let header = client.get_block_header(info.best_block_hash()).await?;
    tracing::info!(
        height = header.height(),
        transactions = header.transaction_ids().len(),
        "Fetched best block header"
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "blockchainInfo": info,
            "bestBlockHeader": header,
        }))?
    );

    Ok(())
}
