// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Receipt types assembled from chain responses.
//!
//! Execution status is modeled once as [`TxStatus`] and expanded into the
//! five documented booleans only at the serialization boundary;
//! `isFailed` and `isInvalid` are both the negation of `isSuccessful`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use cosmrs::rpc::endpoint::broadcast::tx_commit;
use cosmrs::rpc::endpoint::tx;

/// Execution status of an indexed transaction, derived from its numeric
/// result code (zero = success).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Pending,
    Executed { success: bool },
}

impl TxStatus {
    /// Status of an already-indexed transaction.
    pub fn from_code(code: u32) -> Self {
        TxStatus::Executed { success: code == 0 }
    }
}

/// The five mutually-describing status booleans of the documented receipt
/// shape. Derived from [`TxStatus`], never stored independently.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusFlags {
    pub is_pending: bool,
    pub is_executed: bool,
    pub is_successful: bool,
    pub is_failed: bool,
    pub is_invalid: bool,
}

impl From<TxStatus> for StatusFlags {
    fn from(status: TxStatus) -> Self {
        match status {
            TxStatus::Pending => StatusFlags {
                is_pending: true,
                is_executed: false,
                is_successful: false,
                is_failed: false,
                is_invalid: false,
            },
            TxStatus::Executed { success } => StatusFlags {
                is_pending: false,
                is_executed: true,
                is_successful: success,
                is_failed: !success,
                is_invalid: !success,
            },
        }
    }
}

/// Receipt for a transaction read back from chain state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Transferred amount in display units
    pub amount: f64,
    /// Block timestamp of the including block
    pub date: DateTime<Utc>,
    /// Sender address (empty when the message could not be normalized)
    pub from: String,
    /// Currency the gas cost is denominated in
    pub gas_cost_crypto_currency: String,
    /// Gas cost in display units
    pub gas_cost_in_crypto: f64,
    /// Gas limit requested by the transaction
    pub gas_limit: u64,
    /// Gas cost divided by gas limit
    pub gas_price: f64,
    #[serde(flatten)]
    pub status: StatusFlags,
    /// Network key the caller used
    pub network: String,
    /// Signer sequence number
    pub nonce: u64,
    /// Recipient address (empty when the message could not be normalized)
    pub to: String,
    /// Transaction hash, uppercase hex
    pub transaction_hash: String,
    /// Block explorer URL
    pub transaction_link: String,
}

/// Receipt for a freshly broadcast transaction. A just-broadcast
/// transaction is assumed executed, so the status booleans are absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferReceipt {
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub from: String,
    pub gas_cost_crypto_currency: String,
    pub gas_cost_in_crypto: f64,
    pub gas_limit: u64,
    pub gas_price: f64,
    pub network: String,
    pub nonce: u64,
    pub to: String,
    pub transaction_hash: String,
    pub transaction_link: String,
}

/// Result of a transaction read: the raw indexed transaction alongside
/// the assembled receipt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionResult {
    pub transaction_data: tx::Response,
    pub receipt: TransactionReceipt,
}

/// Result of a broadcast: the raw commit response alongside the
/// assembled receipt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionResult {
    pub transaction_data: tx_commit::Response,
    pub receipt: TransferReceipt,
}
