// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Parser;

/// Command line flags for the node probe.
///
/// Everything else is configured through `BITFLOW_*` environment variables
/// (`BITFLOW_NODE_URL`, `BITFLOW_NODE_RPC_USER`, `BITFLOW_LOG_LEVEL`, ...),
/// which the file named by `--env-file` may supply.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a .env file with `BITFLOW_*` settings (e.g., .env.regtest).
    /// A missing file is ignored.
    #[arg(short, long, default_value = ".env")]
    pub env_file: String,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
