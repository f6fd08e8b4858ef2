// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::consts::{BLOCK_HEADER_RPC_METHOD, BLOCKCHAIN_INFO_RPC_METHOD};
use crate::types::Hash256;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single JSON-RPC call: `{"method": ..., "params": [...]}`.
///
/// Params are positional; their order is the order on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    pub params: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            params,
            id: None,
        }
    }

    /// Attach an id for the node to echo back.
    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn blockchain_info() -> Self {
        Self::new(BLOCKCHAIN_INFO_RPC_METHOD, Vec::new())
    }

    pub fn block_header(header_hash: &Hash256) -> Self {
        Self::new(
            BLOCK_HEADER_RPC_METHOD,
            vec![Value::String(header_hash.to_hex())],
        )
    }
}
