// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

/// RPC method returning chain state (network, tip, chainwork).
pub const BLOCKCHAIN_INFO_RPC_METHOD: &str = "getinfo";

/// Newer node name for the same chain-state call.
pub const BLOCKCHAIN_INFO_RPC_METHOD_ALIAS: &str = "getblockchaininfo";

/// RPC method returning a block header and its transaction ids by hash.
pub const BLOCK_HEADER_RPC_METHOD: &str = "getblock";
