// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The public wallet operations: explorer links, balance queries,
//! transaction reads, and token transfers.
//!
//! Each operation opens its own connection and issues sequential round
//! trips; nothing is shared or cached across calls.

use serde::Deserialize;

use cosmrs::bank::MsgSend;
use cosmrs::proto::cosmos::bank::v1beta1::MsgSend as ProtoMsgSend;
use cosmrs::proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use cosmrs::tendermint::chain::Id as ChainId;
use cosmrs::tx::{Body, Fee, Msg, SignDoc, SignerInfo, Tx};
use cosmrs::{AccountId, Coin};

use crate::amount::{to_base_units, to_decimal};
use crate::client::OsmosisClient;
use crate::config;
use crate::error::WalletError;
use crate::msg::{normalize_send, RawMessage};
use crate::receipt::{
    GetTransactionResult, SendTransactionResult, TransactionReceipt, TransferReceipt, TxStatus,
};
use crate::signing::signer_from_mnemonic;

/// Decimals used when the caller does not pass any (OSMO has 6).
pub const DEFAULT_DECIMALS: u32 = 6;

/// Display currency of gas costs on receipts.
const GAS_COST_CRYPTO_CURRENCY: &str = "OSMO";

/// Block explorer URL for a transaction hash on the given network.
pub fn get_transaction_link(tx_hash: &str, network: &str) -> String {
    config::lookup(network).transaction_link(tx_hash)
}

/// Block explorer URL for a wallet address on the given network.
pub fn get_wallet_link(address: &str, network: &str) -> String {
    config::lookup(network).wallet_link(address)
}

/// Default gas price of a network: default fee divided by default gas.
pub fn get_default_gas_price(network: &str) -> f64 {
    let net = config::lookup(network);
    net.default_tx_fee as f64 / net.default_gas as f64
}

/// Amino-shaped standard fee: a coin list plus the gas limit as a string.
// `ProtoCoin` (cosmos-sdk-proto 0.20, pinned by cosmrs 0.15) does not
// implement `Serialize` and that crate exposes no serde feature to add it,
// so `Serialize` cannot be derived here. StdFee is never serialized in this
// crate, so dropping the derive leaves behavior unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct StdFee {
    pub amount: Vec<ProtoCoin>,
    pub gas: String,
}

impl StdFee {
    /// Convert into the SDK fee used for signing.
    fn to_fee(&self) -> Result<Fee, WalletError> {
        let coin = self
            .amount
            .first()
            .ok_or_else(|| WalletError::InvalidAmount("fee amount missing".to_string()))?;
        let amount = Coin {
            denom: coin
                .denom
                .parse()
                .map_err(|e| WalletError::InvalidAmount(format!("fee denom: {e}")))?,
            amount: coin
                .amount
                .parse()
                .map_err(|e| WalletError::InvalidAmount(format!("fee amount: {e}")))?,
        };
        let gas: u64 = self
            .gas
            .parse()
            .map_err(|e| WalletError::InvalidAmount(format!("fee gas: {e}")))?;
        Ok(Fee::from_amount_and_gas(amount, gas))
    }
}

/// Default fee of a network in the amino standard-fee shape.
pub fn get_default_std_fee(network: &str) -> StdFee {
    let net = config::lookup(network);
    StdFee {
        amount: vec![ProtoCoin {
            denom: net.native_denom.to_string(),
            amount: net.default_tx_fee.to_string(),
        }],
        gas: net.default_gas.to_string(),
    }
}

/// Scale a base-unit amount string down by `decimals` and parse it as a
/// display-unit number.
fn parse_decimal(raw: &str, decimals: u32) -> Result<f64, WalletError> {
    to_decimal(raw, decimals)?
        .parse::<f64>()
        .map_err(|e| WalletError::InvalidAmount(e.to_string()))
}

/// Balance of `address` in display units.
pub async fn get_balance(
    address: &str,
    network: &str,
    denom: &str,
    decimals: u32,
) -> Result<f64, WalletError> {
    let client = OsmosisClient::connect(network).await?;
    let balance = client.get_balance(address, denom).await?;
    parse_decimal(&balance.amount, decimals)
}

/// Read a transaction from chain state and assemble its receipt.
///
/// Fails with [`WalletError::TransactionNotFound`] when the hash is not
/// indexed. Returns `Ok(None)` when the hash is indexed but its raw byte
/// envelope cannot be decoded; callers must distinguish the two. When the
/// first body message is not a recognizable send message, the receipt
/// carries empty `from`/`to` and a zero amount.
pub async fn get_transaction(
    tx_hash: &str,
    network: &str,
    decimals: Option<u32>,
) -> Result<Option<GetTransactionResult>, WalletError> {
    let decimals = decimals.unwrap_or(DEFAULT_DECIMALS);
    let client = OsmosisClient::connect(network).await?;

    let indexed = client.get_tx(tx_hash).await?;
    let raw_tx = match Tx::from_bytes(&indexed.tx) {
        Ok(tx) => tx,
        Err(err) => {
            tracing::warn!(%err, hash = %indexed.hash, "indexed transaction body is unparsable");
            return Ok(None);
        }
    };

    // Only the first message is inspected; a zero-message body degrades to
    // the empty normalized message before the probe chain runs.
    let msg_send = match raw_tx.body.messages.first() {
        Some(message) => normalize_send(&RawMessage::Proto(message.clone()), client.network()),
        None => ProtoMsgSend::default(),
    };

    let amount = match msg_send.amount.first() {
        Some(coin) => parse_decimal(&coin.amount, decimals)?,
        None => 0.0,
    };

    let gas_cost_in_crypto = match raw_tx.auth_info.fee.amount.first() {
        Some(coin) => parse_decimal(&coin.amount.to_string(), decimals)?,
        None => 0.0,
    };
    let gas_limit = u64::try_from(indexed.tx_result.gas_wanted).unwrap_or(0);
    let gas_price = if gas_limit == 0 {
        0.0
    } else {
        gas_cost_in_crypto / gas_limit as f64
    };

    let date = client.get_block_time(indexed.height).await?;
    let nonce = raw_tx
        .auth_info
        .signer_infos
        .first()
        .map(|signer| signer.sequence)
        .unwrap_or(0);
    let status = TxStatus::from_code(indexed.tx_result.code.value());
    let transaction_hash = indexed.hash.to_string();

    let receipt = TransactionReceipt {
        amount,
        date,
        from: msg_send.from_address.clone(),
        gas_cost_crypto_currency: GAS_COST_CRYPTO_CURRENCY.to_string(),
        gas_cost_in_crypto,
        gas_limit,
        gas_price,
        status: status.into(),
        network: network.to_string(),
        nonce,
        to: msg_send.to_address.clone(),
        transaction_link: get_transaction_link(&transaction_hash, network),
        transaction_hash,
    };

    Ok(Some(GetTransactionResult {
        transaction_data: indexed,
        receipt,
    }))
}

/// Parameters for [`send_transaction`].
#[derive(Debug, Clone, Deserialize)]
pub struct SendTransactionParams {
    /// Recipient address (bech32, `osmo1...`)
    pub to: String,
    /// Amount to send in display units
    pub amount: f64,
    /// Network key (`"main"` or `"testnet"`)
    pub network: String,
    /// BIP-39 mnemonic of the sending wallet
    pub mnemonic: String,
    /// Denomination to transfer (e.g., `"uosmo"`)
    pub denom: String,
    /// Decimals of the denomination
    pub decimals: u32,
}

/// Sign and broadcast a single-coin transfer, then assemble its receipt.
///
/// Fails with [`WalletError::InvalidMnemonic`] when signer derivation
/// fails and [`WalletError::BroadcastError`] when the chain rejects the
/// transaction.
pub async fn send_transaction(
    params: SendTransactionParams,
) -> Result<SendTransactionResult, WalletError> {
    let net = config::lookup(&params.network);
    let (signing_key, sender) = signer_from_mnemonic(&params.mnemonic, net.bech32_prefix)?;
    let client = OsmosisClient::connect(&params.network).await?;

    let base_units: u128 = to_base_units(&params.amount.to_string(), params.decimals)?
        .parse()
        .map_err(|e| WalletError::InvalidAmount(format!("{e}")))?;
    let to: AccountId = params
        .to
        .parse()
        .map_err(|e| WalletError::InvalidAddress(format!("{e}")))?;

    let send = MsgSend {
        from_address: sender.clone(),
        to_address: to,
        amount: vec![Coin {
            denom: params
                .denom
                .parse()
                .map_err(|e| WalletError::InvalidAmount(format!("denom: {e}")))?,
            amount: base_units,
        }],
    };

    let account = client.get_account(sender.as_ref()).await?;
    let std_fee = get_default_std_fee(&params.network);
    let fee = std_fee.to_fee()?;
    let chain_id: ChainId = net
        .chain_id
        .parse()
        .map_err(|e| WalletError::RpcError(format!("chain id: {e}")))?;

    let body = Body::new(
        vec![send
            .to_any()
            .map_err(|e| WalletError::BroadcastError(e.to_string()))?],
        "",
        0u32,
    );
    let signer_info = SignerInfo::single_direct(Some(signing_key.public_key()), account.sequence);
    let auth_info = signer_info.auth_info(fee);
    let tx_bytes = SignDoc::new(&body, &auth_info, &chain_id, account.account_number)
        .and_then(|doc| doc.sign(&signing_key))
        .and_then(|raw| raw.to_bytes())
        .map_err(|e| WalletError::BroadcastError(e.to_string()))?;

    let response = client.broadcast_commit(tx_bytes).await?;

    let date = client.get_block_time(response.height).await?;
    // the sequence has already advanced by the time it is queried
    let nonce = client.get_sequence(sender.as_ref()).await?.saturating_sub(1);
    let gas_cost_in_crypto = parse_decimal(&std_fee.amount[0].amount, params.decimals)?;
    let transaction_hash = response.hash.to_string();

    let receipt = TransferReceipt {
        amount: params.amount,
        date,
        from: sender.to_string(),
        gas_cost_crypto_currency: GAS_COST_CRYPTO_CURRENCY.to_string(),
        gas_cost_in_crypto,
        gas_limit: net.default_gas,
        gas_price: get_default_gas_price(&params.network),
        network: params.network.clone(),
        nonce,
        to: params.to.clone(),
        transaction_link: get_transaction_link(&transaction_hash, &params.network),
        transaction_hash,
    };

    Ok(SendTransactionResult {
        transaction_data: response,
        receipt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_std_fee_matches_network_entry() {
        let fee = get_default_std_fee("testnet");
        assert_eq!(fee.amount[0].denom, "uosmo");
        assert_eq!(fee.amount[0].amount, "0");
        assert_eq!(fee.gas, "200000");
    }

    #[test]
    fn std_fee_converts_to_sdk_fee() {
        let fee = get_default_std_fee("testnet").to_fee().unwrap();
        assert_eq!(fee.gas_limit, 200_000);
        assert_eq!(fee.amount.len(), 1);
        assert_eq!(fee.amount[0].amount, 0);
    }

    #[test]
    fn std_fee_without_amount_is_rejected() {
        let fee = StdFee {
            amount: vec![],
            gas: "200000".to_string(),
        };
        assert!(matches!(
            fee.to_fee(),
            Err(WalletError::InvalidAmount(_))
        ));
    }

    #[test]
    fn default_gas_price_is_fee_over_gas() {
        assert_eq!(get_default_gas_price("testnet"), 0.0);
        assert_eq!(get_default_gas_price("main"), 0.0);
    }

    #[test]
    fn link_helpers_use_the_registry_templates() {
        assert_eq!(
            get_transaction_link("AB12", "testnet"),
            "https://www.mintscan.io/osmosis/txs/AB12"
        );
        assert_eq!(
            get_wallet_link("osmo1xyz", "main"),
            "https://www.mintscan.io/osmosis/account/osmo1xyz"
        );
    }
}
