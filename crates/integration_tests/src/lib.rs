// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod client;

pub use client::TestNode;

/// Test configuration constants
pub mod constants {
    /// Attempts (one per second) to wait for the node to answer `getinfo`
    pub const NODE_READY_TIMEOUT_SECONDS: u32 = 30;

    /// Variable that opts a run into the live-node tests
    pub const NODE_URL_VAR: &str = "BITFLOW_NODE_URL";
}
