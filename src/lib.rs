// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relational Wallet - Osmosis Wallet Library
//!
//! Thin convenience wrapper around the Cosmos SDK stack for the Osmosis
//! chain: balance queries, token transfers, and transaction receipts over
//! Tendermint RPC. All signing, broadcasting, and chain indexing is
//! delegated to the SDK; this crate maps friendly parameters to SDK calls
//! and reshapes the responses into fixed receipt objects.
//!
//! ## Modules
//!
//! - `address` - Structural wallet address validation
//! - `amount` - Fixed-point decimal/base-unit conversion
//! - `client` - Tendermint RPC client wrapper
//! - `config` - Network registry
//! - `msg` - Send-message normalization (protobuf and legacy amino)
//! - `receipt` - Receipt types and execution status
//! - `signing` - Mnemonic-based signer derivation
//! - `transactions` - The public wallet operations

pub mod address;
pub mod amount;
pub mod client;
pub mod config;
pub mod error;
pub mod msg;
pub mod receipt;
pub mod signing;
pub mod transactions;

pub use address::is_valid_wallet_address;
pub use client::OsmosisClient;
pub use config::{lookup, Network, MAINNET, TESTNET};
pub use error::WalletError;
pub use msg::{normalize_send, RawMessage};
pub use receipt::{
    GetTransactionResult, SendTransactionResult, StatusFlags, TransactionReceipt, TransferReceipt,
    TxStatus,
};
pub use signing::signer_from_mnemonic;
pub use transactions::{
    get_balance, get_default_gas_price, get_default_std_fee, get_transaction,
    get_transaction_link, get_wallet_link, send_transaction, SendTransactionParams, StdFee,
    DEFAULT_DECIMALS,
};
