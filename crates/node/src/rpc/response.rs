// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::objects::{BlockHeader, BlockchainInfo};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Envelope exactly as it arrives, before the result is decoded.
///
/// JSON `null` and a missing key both deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcResponseError>,
    #[serde(default)]
    pub id: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcResponseError {
    pub code: i64,
    pub message: String,
}

impl fmt::Display for RpcResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

/// Record kinds a result payload can decode into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultType {
    BlockchainInfo,
    BlockHeader,
    /// Payload kept as raw JSON because it could not be decoded.
    Undecoded,
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultType::BlockchainInfo => f.write_str("BlockchainInfo"),
            ResultType::BlockHeader => f.write_str("BlockHeader"),
            ResultType::Undecoded => f.write_str("undecoded"),
        }
    }
}

/// A decoded `result` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RpcResult {
    BlockchainInfo(BlockchainInfo),
    BlockHeader(BlockHeader),
    /// A payload that arrived next to a node error and did not decode.
    Undecoded(Value),
}

impl RpcResult {
    pub fn result_type(&self) -> ResultType {
        match self {
            RpcResult::BlockchainInfo(_) => ResultType::BlockchainInfo,
            RpcResult::BlockHeader(_) => ResultType::BlockHeader,
            RpcResult::Undecoded(_) => ResultType::Undecoded,
        }
    }

    pub fn as_blockchain_info(&self) -> Option<&BlockchainInfo> {
        match self {
            RpcResult::BlockchainInfo(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_block_header(&self) -> Option<&BlockHeader> {
        match self {
            RpcResult::BlockHeader(header) => Some(header),
            _ => None,
        }
    }

    pub fn into_blockchain_info(self) -> Result<BlockchainInfo, EnvelopeError> {
        match self {
            RpcResult::BlockchainInfo(info) => Ok(info),
            other => Err(EnvelopeError::ResultTypeMismatch {
                expected: ResultType::BlockchainInfo,
                actual: other.result_type(),
            }),
        }
    }

    pub fn into_block_header(self) -> Result<BlockHeader, EnvelopeError> {
        match self {
            RpcResult::BlockHeader(header) => Ok(header),
            other => Err(EnvelopeError::ResultTypeMismatch {
                expected: ResultType::BlockHeader,
                actual: other.result_type(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvelopeError {
    #[error("Response has no result")]
    MissingResult,

    #[error("Response carries an error alongside its result: {0}")]
    UnexpectedError(RpcResponseError),

    #[error("Expected a {expected} result, got {actual}")]
    ResultTypeMismatch {
        expected: ResultType,
        actual: ResultType,
    },

    #[error("Response has no error")]
    MissingError,

    #[error("Response carries a {actual} result alongside its error")]
    UnexpectedResult { actual: ResultType },
}

/// A decoded JSON-RPC response.
///
/// Construction does not enforce that only one of `result` and `error` is
/// present; call [`validate_result`](Self::validate_result) or
/// [`validate_error`](Self::validate_error) before trusting either.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcResponse {
    result: Option<RpcResult>,
    error: Option<RpcResponseError>,
    id: Option<Value>,
}

impl RpcResponse {
    pub fn of(
        result: Option<RpcResult>,
        error: Option<RpcResponseError>,
        id: Option<Value>,
    ) -> Self {
        Self { result, error, id }
    }

    pub fn result(&self) -> Option<&RpcResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&RpcResponseError> {
        self.error.as_ref()
    }

    pub fn id(&self) -> Option<&Value> {
        self.id.as_ref()
    }

    /// Assert this is a successful response holding an `expected` result.
    ///
    /// A missing result is reported before a present error.
    pub fn validate_result(&self, expected: ResultType) -> Result<(), EnvelopeError> {
        let result = self.result.as_ref().ok_or(EnvelopeError::MissingResult)?;

        if let Some(error) = &self.error {
            return Err(EnvelopeError::UnexpectedError(error.clone()));
        }

        let actual = result.result_type();
        if actual != expected {
            return Err(EnvelopeError::ResultTypeMismatch { expected, actual });
        }

        Ok(())
    }

    /// Assert this is an error response with no result.
    pub fn validate_error(&self) -> Result<(), EnvelopeError> {
        if self.error.is_none() {
            return Err(EnvelopeError::MissingError);
        }

        if let Some(result) = &self.result {
            return Err(EnvelopeError::UnexpectedResult {
                actual: result.result_type(),
            });
        }

        Ok(())
    }

    /// Validate against `expected` and hand back the result.
    pub fn into_validated_result(self, expected: ResultType) -> Result<RpcResult, EnvelopeError> {
        self.validate_result(expected)?;
        self.result.ok_or(EnvelopeError::MissingResult)
    }

    /// Validate as an error response and hand back the error.
    pub fn into_validated_error(self) -> Result<RpcResponseError, EnvelopeError> {
        self.validate_error()?;
        self.error.ok_or(EnvelopeError::MissingError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{block_header, blockchain_info, test_error};
    use serde_json::json;

    fn info_response() -> RpcResponse {
        RpcResponse::of(
            Some(RpcResult::BlockchainInfo(blockchain_info())),
            None,
            Some(json!("foo")),
        )
    }

    #[test]
    fn test_validate_result_success() {
        assert!(info_response().validate_result(ResultType::BlockchainInfo).is_ok());
    }

    #[test]
    fn test_validate_result_wrong_type() {
        let err = info_response()
            .validate_result(ResultType::BlockHeader)
            .unwrap_err();
        assert_eq!(
            err,
            EnvelopeError::ResultTypeMismatch {
                expected: ResultType::BlockHeader,
                actual: ResultType::BlockchainInfo,
            }
        );
    }

    #[test]
    fn test_validate_result_absent_result() {
        let empty = RpcResponse::of(None, None, Some(json!("foo")));
        assert_eq!(
            empty.validate_result(ResultType::BlockchainInfo),
            Err(EnvelopeError::MissingResult)
        );

        // still MissingResult when an error is present
        let error_only = RpcResponse::of(None, Some(test_error()), None);
        assert_eq!(
            error_only.validate_result(ResultType::BlockchainInfo),
            Err(EnvelopeError::MissingResult)
        );
    }

    #[test]
    fn test_validate_result_present_error() {
        let both = RpcResponse::of(
            Some(RpcResult::BlockchainInfo(blockchain_info())),
            Some(test_error()),
            None,
        );
        assert!(matches!(
            both.validate_result(ResultType::BlockchainInfo),
            Err(EnvelopeError::UnexpectedError(RpcResponseError { code: 1, .. }))
        ));
    }

    #[test]
    fn test_validate_error_success() {
        let response = RpcResponse::of(None, Some(test_error()), Some(json!("foo")));
        assert!(response.validate_error().is_ok());
        assert_eq!(response.error().unwrap().code, 1);
        assert_eq!(response.error().unwrap().message, "test error message");
    }

    #[test]
    fn test_validate_error_absent_error() {
        let empty = RpcResponse::of(None, None, None);
        assert_eq!(empty.validate_error(), Err(EnvelopeError::MissingError));
    }

    #[test]
    fn test_validate_error_present_result() {
        let both = RpcResponse::of(
            Some(RpcResult::BlockHeader(block_header())),
            Some(test_error()),
            None,
        );
        assert_eq!(
            both.validate_error(),
            Err(EnvelopeError::UnexpectedResult {
                actual: ResultType::BlockHeader
            })
        );
    }

    #[test]
    fn test_into_validated_result() {
        let info = info_response()
            .into_validated_result(ResultType::BlockchainInfo)
            .unwrap()
            .into_blockchain_info()
            .unwrap();
        assert_eq!(info.chain(), "main");
    }

    #[test]
    fn test_result_accessors() {
        let result = RpcResult::BlockHeader(block_header());
        assert!(result.as_block_header().is_some());
        assert!(result.as_blockchain_info().is_none());
        assert!(matches!(
            result.into_blockchain_info(),
            Err(EnvelopeError::ResultTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_undecoded_result_never_validates() {
        let response = RpcResponse::of(
            Some(RpcResult::Undecoded(json!({"chain": "main"}))),
            None,
            None,
        );
        assert_eq!(
            response.validate_result(ResultType::BlockchainInfo),
            Err(EnvelopeError::ResultTypeMismatch {
                expected: ResultType::BlockchainInfo,
                actual: ResultType::Undecoded,
            })
        );
    }

    #[test]
    fn test_raw_response_null_fields_are_absent() {
        let raw: RawRpcResponse =
            serde_json::from_value(json!({"result": null, "error": null, "id": "foo"})).unwrap();
        assert!(raw.result.is_none());
        assert!(raw.error.is_none());
        assert_eq!(raw.id, Some(json!("foo")));

        let raw: RawRpcResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(raw, RawRpcResponse::default());
    }

    #[test]
    fn test_id_is_echoed() {
        assert_eq!(info_response().id(), Some(&json!("foo")));
    }
}
