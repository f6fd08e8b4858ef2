// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Node-specific value encodings
//!
//! Bitcoin nodes report block and transaction identifiers as fixed-width hex
//! strings and large integers (difficulty target, chainwork) as variable-width
//! hex. These newtypes own the textual forms so every record formats them the
//! same way.

pub mod big_hex;
pub mod hash;

pub use big_hex::BigHex;
pub use hash::Hash256;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Malformed hash '{input}': {reason}")]
    MalformedHash { input: String, reason: String },

    #[error("Malformed hex integer '{input}': {reason}")]
    MalformedInteger { input: String, reason: String },
}
