// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! JSON-RPC envelope types and the typed result decoder.
//!
//! The wire format lets `result` and `error` both be populated, so
//! [`RpcResponse`] keeps them as independent options and exposes
//! [`RpcResponse::validate_result`] / [`RpcResponse::validate_error`] for the
//! caller to assert which branch it expects.

pub mod decoder;
pub mod request;
pub mod response;

pub use decoder::{DecodeError, decode_response, decode_result, result_type_for};
pub use request::RpcRequest;
pub use response::{
    EnvelopeError, RawRpcResponse, ResultType, RpcResponse, RpcResponseError, RpcResult,
};
