// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed decoding of the generic `result` payload.
//!
//! Each RPC method maps to one decode function through a static registry;
//! [`result_type_for`] exposes which record a method produces.
//! Decoders walk the result object field by field: hashes and hex integers
//! go through the codecs in [`crate::types`], plain numbers and strings are
//! passed through after a type check.

use super::response::{RawRpcResponse, ResultType, RpcResponse, RpcResult};
use crate::consts::{
    BLOCK_HEADER_RPC_METHOD, BLOCKCHAIN_INFO_RPC_METHOD, BLOCKCHAIN_INFO_RPC_METHOD_ALIAS,
};
use crate::objects::{
    BlockHeader, BlockHeaderFields, BlockchainInfo, BlockchainInfoFields, RecordError,
};
use crate::types::{BigHex, CodecError, Hash256};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("No result decoder registered for RPC method '{0}'")]
    UnknownMethod(String),

    #[error("Incomplete '{method}' result: missing required field '{field}'")]
    IncompleteResult { method: String, field: String },

    #[error("Field '{field}' of '{method}' result: expected {expected}, got {actual}")]
    FieldTypeMismatch {
        method: String,
        field: String,
        expected: &'static str,
        actual: String,
    },

    #[error("Field '{field}' of '{method}' result: {source}")]
    MalformedField {
        method: String,
        field: String,
        #[source]
        source: CodecError,
    },

    #[error("Invalid '{method}' result: {source}")]
    InvalidRecord {
        method: String,
        #[source]
        source: RecordError,
    },
}

type DecodeFn = fn(&ResultObject<'_>) -> Result<RpcResult, DecodeError>;

/// Method name, declared result type, decoder.
static RESULT_DECODERS: &[(&str, ResultType, DecodeFn)] = &[
    (
        BLOCKCHAIN_INFO_RPC_METHOD,
        ResultType::BlockchainInfo,
        decode_blockchain_info,
    ),
    (
        BLOCKCHAIN_INFO_RPC_METHOD_ALIAS,
        ResultType::BlockchainInfo,
        decode_blockchain_info,
    ),
    (
        BLOCK_HEADER_RPC_METHOD,
        ResultType::BlockHeader,
        decode_block_header,
    ),
];

fn lookup(method: &str) -> Option<(ResultType, DecodeFn)> {
    RESULT_DECODERS
        .iter()
        .find(|(name, _, _)| *name == method)
        .map(|(_, result_type, decode)| (*result_type, *decode))
}

/// Result type a successful call to `method` produces.
pub fn result_type_for(method: &str) -> Option<ResultType> {
    lookup(method).map(|(result_type, _)| result_type)
}

/// Decode the `result` payload of a `method` call.
pub fn decode_result(method: &str, payload: &Value) -> Result<RpcResult, DecodeError> {
    let (_, decode) = lookup(method).ok_or_else(|| DecodeError::UnknownMethod(method.to_string()))?;

    let object = payload
        .as_object()
        .ok_or_else(|| DecodeError::FieldTypeMismatch {
            method: method.to_string(),
            field: "result".to_string(),
            expected: "object",
            actual: json_type(payload).to_string(),
        })?;

    decode(&ResultObject { method, object })
}

/// Turn a raw envelope into an [`RpcResponse`], decoding `result` if present.
///
/// Both `result` and `error` may be populated; that is left for the
/// response validators to report. When the node also sent an error, a
/// result that fails to decode is kept as [`RpcResult::Undecoded`] so the
/// node error is not lost behind a decode failure.
pub fn decode_response(method: &str, raw: RawRpcResponse) -> Result<RpcResponse, DecodeError> {
    let result = match (raw.result, &raw.error) {
        (None, _) => None,
        (Some(payload), None) => Some(decode_result(method, &payload)?),
        (Some(payload), Some(_)) => match decode_result(method, &payload) {
            Ok(result) => Some(result),
            Err(_) => Some(RpcResult::Undecoded(payload)),
        },
    };

    Ok(RpcResponse::of(result, raw.error, raw.id))
}

fn decode_blockchain_info(obj: &ResultObject<'_>) -> Result<RpcResult, DecodeError> {
    let fields = BlockchainInfoFields {
        chain: obj.string("chain")?,
        num_blocks: obj.i64("blocks")?,
        num_headers: obj.i64("headers")?,
        best_block_hash: obj.hash("bestblockhash")?,
        difficulty: obj.f64("difficulty")?,
        verification_progress: obj.f64("verificationprogress")?,
        chainwork: obj.big_hex("chainwork")?,
    };

    BlockchainInfo::new(fields)
        .map(RpcResult::BlockchainInfo)
        .map_err(|source| obj.invalid(source))
}

fn decode_block_header(obj: &ResultObject<'_>) -> Result<RpcResult, DecodeError> {
    let fields = BlockHeaderFields {
        header_hash: obj.hash("hash")?,
        num_confirmations: obj.i64("confirmations")?,
        size_bytes: obj.i64("size")?,
        height: obj.i64("height")?,
        version: obj.i32("version")?,
        merkle_root: obj.hash("merkleroot")?,
        transaction_ids: obj.hash_list("tx")?,
        created_time: obj.i64("time")?,
        nonce: obj.u32("nonce")?,
        difficulty_target: obj.big_hex("bits")?,
        difficulty: obj.f64("difficulty")?,
        chainwork: obj.big_hex("chainwork")?,
        previous_block_hash: obj.optional_hash("previousblockhash")?,
        next_block_hash: obj.optional_hash("nextblockhash")?,
    };

    BlockHeader::new(fields)
        .map(RpcResult::BlockHeader)
        .map_err(|source| obj.invalid(source))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Field reader over a result object that tags every error with the method.
struct ResultObject<'a> {
    method: &'a str,
    object: &'a Map<String, Value>,
}

impl ResultObject<'_> {
    fn optional(&self, field: &str) -> Option<&Value> {
        self.object.get(field).filter(|value| !value.is_null())
    }

    fn required(&self, field: &str) -> Result<&Value, DecodeError> {
        self.optional(field)
            .ok_or_else(|| DecodeError::IncompleteResult {
                method: self.method.to_string(),
                field: field.to_string(),
            })
    }

    fn mismatch(&self, field: &str, expected: &'static str, actual: String) -> DecodeError {
        DecodeError::FieldTypeMismatch {
            method: self.method.to_string(),
            field: field.to_string(),
            expected,
            actual,
        }
    }

    fn malformed(&self, field: &str, source: CodecError) -> DecodeError {
        DecodeError::MalformedField {
            method: self.method.to_string(),
            field: field.to_string(),
            source,
        }
    }

    fn invalid(&self, source: RecordError) -> DecodeError {
        DecodeError::InvalidRecord {
            method: self.method.to_string(),
            source,
        }
    }

    fn str(&self, field: &str) -> Result<&str, DecodeError> {
        let value = self.required(field)?;
        value
            .as_str()
            .ok_or_else(|| self.mismatch(field, "string", json_type(value).to_string()))
    }

    fn string(&self, field: &str) -> Result<String, DecodeError> {
        self.str(field).map(str::to_string)
    }

    fn i64(&self, field: &str) -> Result<i64, DecodeError> {
        let value = self.required(field)?;
        value
            .as_i64()
            .ok_or_else(|| self.mismatch(field, "integer", describe_number(value)))
    }

    fn i32(&self, field: &str) -> Result<i32, DecodeError> {
        let value = self.i64(field)?;
        i32::try_from(value)
            .map_err(|_| self.mismatch(field, "32-bit signed integer", value.to_string()))
    }

    fn u32(&self, field: &str) -> Result<u32, DecodeError> {
        let value = self.i64(field)?;
        u32::try_from(value)
            .map_err(|_| self.mismatch(field, "32-bit unsigned integer", value.to_string()))
    }

    fn f64(&self, field: &str) -> Result<f64, DecodeError> {
        let value = self.required(field)?;
        value
            .as_f64()
            .ok_or_else(|| self.mismatch(field, "number", json_type(value).to_string()))
    }

    fn hash(&self, field: &str) -> Result<Hash256, DecodeError> {
        let hex_str = self.str(field)?;
        Hash256::from_hex(hex_str).map_err(|e| self.malformed(field, e))
    }

    fn optional_hash(&self, field: &str) -> Result<Option<Hash256>, DecodeError> {
        match self.optional(field) {
            None => Ok(None),
            Some(_) => self.hash(field).map(Some),
        }
    }

    fn big_hex(&self, field: &str) -> Result<BigHex, DecodeError> {
        let hex_str = self.str(field)?;
        BigHex::from_hex(hex_str).map_err(|e| self.malformed(field, e))
    }

    fn hash_list(&self, field: &str) -> Result<Vec<Hash256>, DecodeError> {
        let value = self.required(field)?;
        let items = value
            .as_array()
            .ok_or_else(|| self.mismatch(field, "array", json_type(value).to_string()))?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let item_field = format!("{}[{}]", field, index);
                let hex_str = item.as_str().ok_or_else(|| {
                    self.mismatch(&item_field, "string", json_type(item).to_string())
                })?;
                Hash256::from_hex(hex_str).map_err(|e| self.malformed(&item_field, e))
            })
            .collect()
    }
}

/// Type name, or the value itself for numbers that don't fit an i64.
fn describe_number(value: &Value) -> String {
    match value {
        Value::Number(n) => format!("number {}", n),
        other => json_type(other).to_string(),
    }
}
