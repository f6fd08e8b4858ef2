// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::CodecError;
use primitive_types::H256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of hex characters in a textual hash.
pub const HASH_HEX_LEN: usize = 64;

/// 32-byte block, merkle root or transaction identifier.
///
/// Bytes are kept in the order they appear in the node's textual form, so
/// decoding and re-encoding a hash is lossless. The canonical string is 64
/// lowercase hex characters with no prefix and no zero stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash256(H256);

impl Hash256 {
    /// Decode a 64-character hex string (either case, no `0x`).
    pub fn from_hex(hex_str: &str) -> Result<Self, CodecError> {
        if hex_str.len() != HASH_HEX_LEN {
            return Err(CodecError::MalformedHash {
                input: hex_str.to_string(),
                reason: format!(
                    "expected {} hex characters, got {}",
                    HASH_HEX_LEN,
                    hex_str.len()
                ),
            });
        }

        let mut bytes = [0u8; 32];
        hex::decode_to_slice(hex_str, &mut bytes).map_err(|e| CodecError::MalformedHash {
            input: hex_str.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self(H256::from(bytes)))
    }

    /// Canonical lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0.as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_fixed_bytes()
    }

    pub fn inner(&self) -> &H256 {
        &self.0
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(H256::from(bytes))
    }
}

impl From<H256> for Hash256 {
    fn from(hash: H256) -> Self {
        Self(hash)
    }
}

impl TryFrom<&[u8]> for Hash256 {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 32 {
            return Err(CodecError::MalformedHash {
                input: hex::encode(bytes),
                reason: format!("expected 32 bytes, got {}", bytes.len()),
            });
        }
        Ok(Self(H256::from_slice(bytes)))
    }
}

impl FromStr for Hash256 {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Hash256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
