// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod client;
pub mod consts;
pub mod logging;
pub mod objects;
pub mod rpc;
pub mod transport;
pub mod types;

pub use client::{NodeClient, NodeClientError};
pub use objects::{BlockHeader, BlockchainInfo};
pub use rpc::{RpcRequest, RpcResponse, RpcResponseError, RpcResult, ResultType};
pub use transport::{HttpTransport, RpcTransport, TransportError};
pub use types::{BigHex, Hash256};

#[cfg(test)]
pub mod test_fixtures;
