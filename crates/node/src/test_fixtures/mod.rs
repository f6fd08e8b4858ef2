// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Canned node responses and an in-memory transport for unit tests.

use crate::objects::{BlockHeader, BlockchainInfo};
use crate::rpc::{RawRpcResponse, RpcRequest, RpcResponseError, decode_result};
use crate::transport::{RpcTransport, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Chain info envelope for mainnet block 227252.
pub const BLOCKCHAIN_INFO_RESPONSE_JSON: &str = r#"{"result":{"chain":"main","blocks":227252,"headers":227252,"bestblockhash":"000000000fe549a89848c76070d4132872cfb6efe5315d01d7ef77e4900f2d39","difficulty":1.0,"verificationprogress":1.0,"chainwork":"083ada4a4009841a"},"error":null,"id":"foo"}"#;

/// `getblock` envelope for mainnet block 227252.
pub const BLOCK_HEADER_RESPONSE_JSON: &str = r#"{
    "result": {
        "hash": "000000000fe549a89848c76070d4132872cfb6efe5315d01d7ef77e4900f2d39",
        "confirmations": 88029,
        "size": 189,
        "height": 227252,
        "version": 2,
        "merkleroot": "c738fb8e22750b6d3511ed0049a96558b0bc57046f3f77771ec825b22d6a6f4a",
        "tx": [
            "c738fb8e22750b6d3511ed0049a96558b0bc57046f3f77771ec825b22d6a6f4a"
        ],
        "time": 1398824312,
        "nonce": 1883462912,
        "bits": "1d00ffff",
        "difficulty": 1.00000000,
        "chainwork": "000000000000000000000000000000000000000000000000083ada4a4009841a",
        "previousblockhash": "00000000c7f4990e6ebf71ad7e21a47131dfeb22c759505b3998d7a814c011df",
        "nextblockhash": "00000000afe1928529ac766f1237657819a11cfcc8ca6d67f119e868ed5b6188"
    },
    "error": null,
    "id": "foo"
}"#;

/// Error-only envelope.
pub const ERROR_RESPONSE_JSON: &str =
    r#"{"result":null,"error":{"code":1,"message":"test error message"},"id":"foo"}"#;

fn envelope(json: &str) -> Value {
    serde_json::from_str(json).expect("fixture JSON is valid")
}

/// The `result` object of [`BLOCK_HEADER_RESPONSE_JSON`], for tweaking.
pub fn block_header_result_json() -> Value {
    envelope(BLOCK_HEADER_RESPONSE_JSON)["result"].clone()
}

pub fn blockchain_info() -> BlockchainInfo {
    decode_result("getinfo", &envelope(BLOCKCHAIN_INFO_RESPONSE_JSON)["result"])
        .expect("fixture decodes")
        .into_blockchain_info()
        .expect("fixture is chain info")
}

pub fn block_header() -> BlockHeader {
    decode_result("getblock", &block_header_result_json())
        .expect("fixture decodes")
        .into_block_header()
        .expect("fixture is a block header")
}

pub fn test_error() -> RpcResponseError {
    RpcResponseError {
        code: 1,
        message: "test error message".to_string(),
    }
}

/// Transport that answers each method with a canned envelope and records
/// every request it receives. Methods without one get an HTTP 404 status error.
#[derive(Default)]
pub struct MockTransport {
    responses: HashMap<String, String>,
    requests: Mutex<Vec<RpcRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method` with the envelope `json`.
    pub fn respond(mut self, method: &str, json: &str) -> Self {
        self.responses.insert(method.to_string(), json.to_string());
        self
    }

    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn send(&self, request: &RpcRequest) -> Result<RawRpcResponse, TransportError> {
        self.requests
            .lock()
            .expect("lock poisoned")
            .push(request.clone());

        let body = self
            .responses
            .get(&request.method)
            .ok_or_else(|| TransportError::Status {
                status: 404,
                body: format!("no canned response for '{}'", request.method),
            })?;

        serde_json::from_str(body).map_err(TransportError::InvalidBody)
    }
}
