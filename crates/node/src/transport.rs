// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Delivery of JSON-RPC requests to a node.
//!
//! [`RpcTransport`] is the seam the client calls through; [`HttpTransport`]
//! is the production implementation speaking HTTP POST with basic auth.
//! Timeouts and cancellation belong to the transport, not the client.

use crate::rpc::{RawRpcResponse, RpcRequest};
use async_trait::async_trait;
use bitflow_config::NodeConfig;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request to node timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("Failed to send request to node: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Node answered HTTP {status} without a JSON-RPC envelope: {body}")]
    Status { status: u16, body: String },

    #[error("Node response is not a JSON-RPC envelope: {0}")]
    InvalidBody(#[source] serde_json::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err)
        } else {
            TransportError::Request(err)
        }
    }
}

/// Sends one request and returns the node's envelope.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn send(&self, request: &RpcRequest) -> Result<RawRpcResponse, TransportError>;
}

#[async_trait]
impl<T: RpcTransport + ?Sized> RpcTransport for Arc<T> {
    async fn send(&self, request: &RpcRequest) -> Result<RawRpcResponse, TransportError> {
        (**self).send(request).await
    }
}

/// JSON-RPC over HTTP POST.
///
/// Bitcoin nodes report RPC errors with a non-2xx status and an envelope in
/// the body; such bodies are returned as envelopes so the error reaches the
/// caller's validation step. Other non-2xx answers become
/// [`TransportError::Status`].
#[derive(Clone)]
pub struct HttpTransport {
    url: String,
    client: Client,
    credentials: Option<(String, String)>,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
            credentials: None,
        })
    }

    pub fn from_config(config: &NodeConfig) -> Result<Self, TransportError> {
        let transport = Self::new(config.url.clone(), config.timeout())?;
        Ok(match config.credentials() {
            Some((user, password)) => transport.with_basic_auth(user, password),
            None => transport,
        })
    }

    pub fn with_basic_auth(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((user.into(), password.into()));
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn send(&self, request: &RpcRequest) -> Result<RawRpcResponse, TransportError> {
        let mut builder = self.client.post(&self.url).json(request);
        if let Some((user, password)) = &self.credentials {
            builder = builder.basic_auth(user, Some(password));
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<RawRpcResponse>(&body) {
            Ok(envelope) if status.is_success() || envelope.error.is_some() => Ok(envelope),
            Ok(_) => Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }),
            Err(_) if !status.is_success() => Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }),
            Err(source) => Err(TransportError::InvalidBody(source)),
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("url", &self.url)
            .field("user", &self.credentials.as_ref().map(|(user, _)| user))
            .finish_non_exhaustive()
    }
}
