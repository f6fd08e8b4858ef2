// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::CodecError;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arbitrary-precision non-negative integer carried as hex on the wire.
///
/// Nodes send fields like `bits` and `chainwork` zero-padded
/// (`"0000...083ada4a4009841a"`); the canonical form drops the padding and
/// is lowercase, so `0` is the only value whose encoding starts with `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BigHex(BigUint);

impl BigHex {
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    /// Decode hex digits, with or without leading zeros.
    pub fn from_hex(hex_str: &str) -> Result<Self, CodecError> {
        if hex_str.is_empty() {
            return Err(CodecError::MalformedInteger {
                input: String::new(),
                reason: "empty string".to_string(),
            });
        }

        // BigUint's own parser tolerates '+' and '_', node hex never has them
        if let Some(bad) = hex_str.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(CodecError::MalformedInteger {
                input: hex_str.to_string(),
                reason: format!("invalid hex character '{}'", bad),
            });
        }

        BigUint::parse_bytes(hex_str.as_bytes(), 16)
            .map(Self)
            .ok_or_else(|| CodecError::MalformedInteger {
                input: hex_str.to_string(),
                reason: "not a base-16 integer".to_string(),
            })
    }

    /// Canonical lowercase hex without zero padding.
    pub fn to_hex(&self) -> String {
        format!("{:x}", self.0)
    }

    pub fn inner(&self) -> &BigUint {
        &self.0
    }

    pub fn into_inner(self) -> BigUint {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<u64> for BigHex {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for BigHex {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl FromStr for BigHex {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for BigHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl Serialize for BigHex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for BigHex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
