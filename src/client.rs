// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Osmosis chain client over Tendermint RPC.
//!
//! One client per call; no connection is shared across operations. Every
//! method is a single round trip with no internal retry, so a failed call
//! propagates immediately.

use chrono::{DateTime, Utc};

use cosmrs::proto::cosmos::auth::v1beta1::{BaseAccount, QueryAccountRequest, QueryAccountResponse};
use cosmrs::proto::cosmos::bank::v1beta1::{QueryBalanceRequest, QueryBalanceResponse};
use cosmrs::proto::cosmos::base::v1beta1::Coin;
use cosmrs::proto::traits::Message;
use cosmrs::rpc::endpoint::broadcast::tx_commit;
use cosmrs::rpc::endpoint::tx;
use cosmrs::rpc::{Client, HttpClient};
use cosmrs::tendermint::block::Height;
use cosmrs::tendermint::hash::{Algorithm, Hash};

use crate::config::{self, Network};
use crate::error::WalletError;

const BALANCE_QUERY_PATH: &str = "/cosmos.bank.v1beta1.Query/Balance";
const ACCOUNT_QUERY_PATH: &str = "/cosmos.auth.v1beta1.Query/Account";

/// Osmosis RPC client bound to one network entry.
pub struct OsmosisClient {
    network: &'static Network,
    rpc: HttpClient,
}

impl OsmosisClient {
    /// Open a client for the network identified by `network_key`.
    pub async fn connect(network_key: &str) -> Result<Self, WalletError> {
        let network = config::lookup(network_key);
        let provider = network.provider_url();
        let url: url::Url = provider
            .parse()
            .map_err(|e: url::ParseError| WalletError::InvalidRpcUrl(e.to_string()))?;

        let rpc = HttpClient::new(url.as_str())
            .map_err(|e| WalletError::InvalidRpcUrl(e.to_string()))?;

        Ok(Self { network, rpc })
    }

    /// The network configuration this client is bound to.
    pub fn network(&self) -> &'static Network {
        self.network
    }

    /// Fetch an indexed transaction by its hex hash.
    ///
    /// Fails with [`WalletError::TransactionNotFound`] when the hash is
    /// absent from chain state.
    pub async fn get_tx(&self, tx_hash: &str) -> Result<tx::Response, WalletError> {
        let hash = Hash::from_hex_upper(Algorithm::Sha256, &tx_hash.to_uppercase())
            .map_err(|e| WalletError::InvalidAddress(format!("invalid tx hash: {e}")))?;

        self.rpc.tx(hash, false).await.map_err(|e| {
            let message = e.to_string();
            if message.contains("not found") {
                WalletError::TransactionNotFound(tx_hash.to_string())
            } else {
                WalletError::RpcError(message)
            }
        })
    }

    /// Query the bank balance of `address` for one denomination.
    pub async fn get_balance(&self, address: &str, denom: &str) -> Result<Coin, WalletError> {
        let request = QueryBalanceRequest {
            address: address.to_string(),
            denom: denom.to_string(),
        };
        let value = self
            .abci_query(BALANCE_QUERY_PATH, request.encode_to_vec())
            .await?;
        let response = QueryBalanceResponse::decode(value.as_slice())
            .map_err(|e| WalletError::RpcError(e.to_string()))?;

        Ok(response.balance.unwrap_or(Coin {
            denom: denom.to_string(),
            amount: "0".to_string(),
        }))
    }

    /// Timestamp of the block at `height`.
    pub async fn get_block_time(&self, height: Height) -> Result<DateTime<Utc>, WalletError> {
        let response = self
            .rpc
            .block(height)
            .await
            .map_err(|e| WalletError::RpcError(e.to_string()))?;

        let time = response.block.header.time.to_rfc3339();
        DateTime::parse_from_rfc3339(&time)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| WalletError::RpcError(e.to_string()))
    }

    /// Fetch the auth account record for `address`.
    pub async fn get_account(&self, address: &str) -> Result<BaseAccount, WalletError> {
        let request = QueryAccountRequest {
            address: address.to_string(),
        };
        let value = self
            .abci_query(ACCOUNT_QUERY_PATH, request.encode_to_vec())
            .await?;
        let response = QueryAccountResponse::decode(value.as_slice())
            .map_err(|e| WalletError::RpcError(e.to_string()))?;

        let any = response
            .account
            .ok_or_else(|| WalletError::RpcError(format!("account {address} not found")))?;
        BaseAccount::decode(any.value.as_slice()).map_err(|e| WalletError::RpcError(e.to_string()))
    }

    /// Current sequence number of `address`.
    pub async fn get_sequence(&self, address: &str) -> Result<u64, WalletError> {
        Ok(self.get_account(address).await?.sequence)
    }

    /// Broadcast a signed transaction and wait for it to be committed.
    ///
    /// Fails with [`WalletError::BroadcastError`] when the chain rejects
    /// the transaction at check or delivery.
    pub async fn broadcast_commit(
        &self,
        tx_bytes: Vec<u8>,
    ) -> Result<tx_commit::Response, WalletError> {
        let response = self
            .rpc
            .broadcast_tx_commit(tx_bytes)
            .await
            .map_err(|e| WalletError::RpcError(e.to_string()))?;

        if response.check_tx.code.is_err() {
            return Err(WalletError::BroadcastError(format!(
                "check failed (code {}): {}",
                response.check_tx.code.value(),
                response.check_tx.log
            )));
        }
        if response.tx_result.code.is_err() {
            return Err(WalletError::BroadcastError(format!(
                "delivery failed (code {}): {}",
                response.tx_result.code.value(),
                response.tx_result.log
            )));
        }

        Ok(response)
    }

    /// ABCI query helper: encode request, check the response code, return
    /// the raw response value.
    async fn abci_query(&self, path: &str, data: Vec<u8>) -> Result<Vec<u8>, WalletError> {
        let response = self
            .rpc
            .abci_query(Some(path.to_string()), data, None, false)
            .await
            .map_err(|e| WalletError::RpcError(e.to_string()))?;

        if response.code.is_err() {
            return Err(WalletError::RpcError(format!(
                "query {path} failed (code {}): {}",
                response.code.value(),
                response.log
            )));
        }

        Ok(response.value)
    }
}
