// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Error taxonomy for wallet operations.
//!
//! RPC and SDK failures are mapped to [`WalletError`] at the call site and
//! propagate to the caller without retries. The one exception is message
//! decoding inside the normalizer, which degrades to an empty message
//! instead of erroring (see `msg`). An unparsable-but-indexed transaction
//! is signaled by `Ok(None)` from `get_transaction`, never by an error.

/// Errors that can occur during wallet operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Transaction {0} not found")]
    TransactionNotFound(String),

    #[error("Broadcast rejected: {0}")]
    BroadcastError(String),

    #[error("RPC error: {0}")]
    RpcError(String),
}
