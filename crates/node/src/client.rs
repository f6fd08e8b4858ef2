// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Node client: one request, one transport call, one validated record.

use crate::objects::{BlockHeader, BlockchainInfo};
use crate::rpc::{
    DecodeError, EnvelopeError, ResultType, RpcRequest, RpcResponse, RpcResponseError, RpcResult,
    decode_response,
};
use crate::transport::{RpcTransport, TransportError};
use crate::types::Hash256;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeClientError {
    #[error("RPC '{method}' transport failure: {source}")]
    Transport {
        method: String,
        #[source]
        source: TransportError,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("RPC '{method}' returned an invalid response: {source}")]
    Envelope {
        method: String,
        #[source]
        source: EnvelopeError,
    },
}

impl NodeClientError {
    /// The node-reported error, if that is why the call failed.
    pub fn node_error(&self) -> Option<&RpcResponseError> {
        match self {
            NodeClientError::Envelope {
                source: EnvelopeError::UnexpectedError(error),
                ..
            } => Some(error),
            _ => None,
        }
    }
}

/// Stateless orchestrator over an [`RpcTransport`].
///
/// Holds no cache and no per-call state; it is as safe to share across tasks
/// as the transport it wraps. Retries are left to the caller.
#[derive(Debug, Clone)]
pub struct NodeClient<T> {
    transport: T,
}

impl<T: RpcTransport> NodeClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request` and decode the envelope without validating it.
    ///
    /// Use this when an error envelope is the expected outcome and check it
    /// with [`RpcResponse::validate_error`].
    pub async fn call(&self, request: &RpcRequest) -> Result<RpcResponse, NodeClientError> {
        tracing::debug!(
            method = %request.method,
            params = request.params.len(),
            "Sending RPC request"
        );

        let raw = self.transport.send(request).await.map_err(|source| {
            tracing::warn!(method = %request.method, error = %source, "RPC transport failed");
            NodeClientError::Transport {
                method: request.method.clone(),
                source,
            }
        })?;

        if let Some(error) = &raw.error {
            tracing::warn!(
                method = %request.method,
                code = error.code,
                message = %error.message,
                "Node returned an error envelope"
            );
        }

        Ok(decode_response(&request.method, raw)?)
    }

    async fn fetch(
        &self,
        request: RpcRequest,
        expected: ResultType,
    ) -> Result<RpcResult, NodeClientError> {
        let response = self.call(&request).await?;
        let result = response
            .into_validated_result(expected)
            .map_err(|source| NodeClientError::Envelope {
                method: request.method.clone(),
                source,
            })?;

        tracing::debug!(method = %request.method, result = %expected, "Decoded RPC result");
        Ok(result)
    }

    pub async fn get_blockchain_info(&self) -> Result<BlockchainInfo, NodeClientError> {
        let request = RpcRequest::blockchain_info();
        let method = request.method.clone();
        self.fetch(request, ResultType::BlockchainInfo)
            .await?
            .into_blockchain_info()
            .map_err(|source| NodeClientError::Envelope { method, source })
    }

    pub async fn get_block_header(
        &self,
        header_hash: &Hash256,
    ) -> Result<BlockHeader, NodeClientError> {
        let request = RpcRequest::block_header(header_hash);
        let method = request.method.clone();
        self.fetch(request, ResultType::BlockHeader)
            .await?
            .into_block_header()
            .map_err(|source| NodeClientError::Envelope { method, source })
    }
}
