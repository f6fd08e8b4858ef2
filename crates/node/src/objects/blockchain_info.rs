// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{RecordError, finite_non_negative, non_negative};
use crate::types::{BigHex, Hash256};
use serde::Serialize;

/// Unvalidated field set for [`BlockchainInfo::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct BlockchainInfoFields {
    pub chain: String,
    pub num_blocks: i64,
    pub num_headers: i64,
    pub best_block_hash: Hash256,
    pub difficulty: f64,
    pub verification_progress: f64,
    pub chainwork: BigHex,
}

/// Chain state summary: network name, tip, and sync progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainInfo {
    chain: String,
    num_blocks: i64,
    num_headers: i64,
    best_block_hash: Hash256,
    difficulty: f64,
    verification_progress: f64,
    chainwork: BigHex,
}

impl BlockchainInfo {
    pub fn new(fields: BlockchainInfoFields) -> Result<Self, RecordError> {
        if fields.chain.is_empty() {
            return Err(RecordError::InvalidField {
                field: "chain",
                reason: "network name cannot be empty".to_string(),
            });
        }
        non_negative("numBlocks", fields.num_blocks)?;
        non_negative("numHeaders", fields.num_headers)?;
        finite_non_negative("difficulty", fields.difficulty)?;

        if !(0.0..=1.0).contains(&fields.verification_progress) {
            return Err(RecordError::InvalidField {
                field: "verificationProgress",
                reason: format!(
                    "must be within [0.0, 1.0], got {}",
                    fields.verification_progress
                ),
            });
        }

        Ok(Self {
            chain: fields.chain,
            num_blocks: fields.num_blocks,
            num_headers: fields.num_headers,
            best_block_hash: fields.best_block_hash,
            difficulty: fields.difficulty,
            verification_progress: fields.verification_progress,
            chainwork: fields.chainwork,
        })
    }

    /// Network name, e.g. `main`, `test`, `regtest`.
    pub fn chain(&self) -> &str {
        &self.chain
    }

    pub fn num_blocks(&self) -> i64 {
        self.num_blocks
    }

    pub fn num_headers(&self) -> i64 {
        self.num_headers
    }

    pub fn best_block_hash(&self) -> &Hash256 {
        &self.best_block_hash
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn verification_progress(&self) -> f64 {
        self.verification_progress
    }

    pub fn chainwork(&self) -> &BigHex {
        &self.chainwork
    }
}
