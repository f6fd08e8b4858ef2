// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Immutable domain records built from decoded RPC results.

pub mod block_header;
pub mod blockchain_info;

pub use block_header::{BlockHeader, BlockHeaderFields};
pub use blockchain_info::{BlockchainInfo, BlockchainInfoFields};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },
}

pub(crate) fn non_negative(field: &'static str, value: i64) -> Result<(), RecordError> {
    if value < 0 {
        return Err(RecordError::InvalidField {
            field,
            reason: format!("must be non-negative, got {}", value),
        });
    }
    Ok(())
}

pub(crate) fn finite_non_negative(field: &'static str, value: f64) -> Result<(), RecordError> {
    if !value.is_finite() || value < 0.0 {
        return Err(RecordError::InvalidField {
            field,
            reason: format!("must be a finite non-negative number, got {}", value),
        });
    }
    Ok(())
}
