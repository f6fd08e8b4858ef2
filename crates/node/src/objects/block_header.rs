// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{RecordError, finite_non_negative, non_negative};
use crate::types::{BigHex, Hash256};
use serde::Serialize;

/// Confirmation count reported for blocks outside the main chain.
pub const NOT_IN_MAIN_CHAIN: i64 = -1;

/// Unvalidated field set for [`BlockHeader::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct BlockHeaderFields {
    pub header_hash: Hash256,
    pub num_confirmations: i64,
    pub size_bytes: i64,
    pub height: i64,
    pub version: i32,
    pub merkle_root: Hash256,
    pub transaction_ids: Vec<Hash256>,
    pub created_time: i64,
    pub nonce: u32,
    pub difficulty_target: BigHex,
    pub difficulty: f64,
    pub chainwork: BigHex,
    pub previous_block_hash: Option<Hash256>,
    pub next_block_hash: Option<Hash256>,
}

/// A block header as reported by `getblock`, including its transaction ids.
///
/// `previous_block_hash` is absent only for the genesis block and
/// `next_block_hash` only for the current chain tip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
    header_hash: Hash256,
    num_confirmations: i64,
    size_bytes: i64,
    height: i64,
    version: i32,
    merkle_root: Hash256,
    transaction_ids: Vec<Hash256>,
    created_time: i64,
    nonce: u32,
    difficulty_target: BigHex,
    difficulty: f64,
    chainwork: BigHex,
    previous_block_hash: Option<Hash256>,
    next_block_hash: Option<Hash256>,
}

impl BlockHeader {
    pub fn new(fields: BlockHeaderFields) -> Result<Self, RecordError> {
        if fields.num_confirmations < NOT_IN_MAIN_CHAIN {
            return Err(RecordError::InvalidField {
                field: "numConfirmations",
                reason: format!(
                    "must be >= 0, or -1 outside the main chain, got {}",
                    fields.num_confirmations
                ),
            });
        }
        non_negative("sizeBytes", fields.size_bytes)?;
        non_negative("height", fields.height)?;
        non_negative("createdTime", fields.created_time)?;
        finite_non_negative("difficulty", fields.difficulty)?;

        if fields.transaction_ids.is_empty() {
            return Err(RecordError::InvalidField {
                field: "transactionIds",
                reason: "a block carries at least the coinbase transaction".to_string(),
            });
        }

        Ok(Self {
            header_hash: fields.header_hash,
            num_confirmations: fields.num_confirmations,
            size_bytes: fields.size_bytes,
            height: fields.height,
            version: fields.version,
            merkle_root: fields.merkle_root,
            transaction_ids: fields.transaction_ids,
            created_time: fields.created_time,
            nonce: fields.nonce,
            difficulty_target: fields.difficulty_target,
            difficulty: fields.difficulty,
            chainwork: fields.chainwork,
            previous_block_hash: fields.previous_block_hash,
            next_block_hash: fields.next_block_hash,
        })
    }

    pub fn header_hash(&self) -> &Hash256 {
        &self.header_hash
    }

    pub fn num_confirmations(&self) -> i64 {
        self.num_confirmations
    }

    pub fn is_in_main_chain(&self) -> bool {
        self.num_confirmations != NOT_IN_MAIN_CHAIN
    }

    pub fn size_bytes(&self) -> i64 {
        self.size_bytes
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn merkle_root(&self) -> &Hash256 {
        &self.merkle_root
    }

    pub fn transaction_ids(&self) -> &[Hash256] {
        &self.transaction_ids
    }

    /// Unix seconds.
    pub fn created_time(&self) -> i64 {
        self.created_time
    }

    pub fn nonce(&self) -> u32 {
        self.nonce
    }

    /// Compact target from the `bits` field.
    pub fn difficulty_target(&self) -> &BigHex {
        &self.difficulty_target
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn chainwork(&self) -> &BigHex {
        &self.chainwork
    }

    pub fn previous_block_hash(&self) -> Option<&Hash256> {
        self.previous_block_hash.as_ref()
    }

    pub fn next_block_hash(&self) -> Option<&Hash256> {
        self.next_block_hash.as_ref()
    }
}
