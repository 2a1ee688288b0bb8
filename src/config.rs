// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Network Registry
//!
//! Static connection parameters for the supported Osmosis environments,
//! constructed at compile time and read-only thereafter.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATAHUB_API_KEY` | DataHub API key for the authenticated mainnet RPC endpoint | Unset (public endpoint) |

use std::env;

/// Environment variable name for the DataHub RPC API key.
///
/// When set, mainnet connections go through the authenticated DataHub
/// endpoint instead of the public RPC node. Testnet always uses the
/// public endpoint.
pub const DATAHUB_API_KEY_ENV: &str = "DATAHUB_API_KEY";

/// Authenticated mainnet RPC endpoint; the API key is appended as a path
/// segment, DataHub style.
const MAINNET_DATAHUB_PROVIDER: &str = "https://osmosis-1--rpc--full.datahub.figment.io/apikey";

/// Osmosis network configuration.
#[derive(Debug, Clone)]
pub struct Network {
    /// Default RPC endpoint URL
    pub provider: &'static str,
    /// Network name for display
    pub network_name: &'static str,
    /// Chain ID
    pub chain_id: &'static str,
    /// Bech32 address prefix
    pub bech32_prefix: &'static str,
    /// Native token denomination (base units)
    pub native_denom: &'static str,
    /// Default transaction fee in base units
    pub default_tx_fee: u128,
    /// Default gas limit
    pub default_gas: u64,
}

impl Network {
    /// Block explorer URL for a transaction hash.
    pub fn transaction_link(&self, tx_hash: &str) -> String {
        format!("https://www.mintscan.io/osmosis/txs/{tx_hash}")
    }

    /// Block explorer URL for a wallet address.
    pub fn wallet_link(&self, address: &str) -> String {
        format!("https://www.mintscan.io/osmosis/account/{address}")
    }

    /// Effective RPC endpoint for this network.
    ///
    /// Mainnet resolves to the authenticated DataHub endpoint when
    /// `DATAHUB_API_KEY` is set; otherwise the public endpoint is used.
    pub fn provider_url(&self) -> String {
        if self.chain_id == MAINNET.chain_id {
            if let Ok(key) = env::var(DATAHUB_API_KEY_ENV) {
                return format!("{MAINNET_DATAHUB_PROVIDER}/{key}");
            }
        }
        self.provider.to_string()
    }
}

/// Osmosis mainnet configuration.
pub const MAINNET: Network = Network {
    provider: "https://rpc.osmosis.zone",
    network_name: "osmosis",
    chain_id: "osmosis-1",
    bech32_prefix: "osmo",
    native_denom: "uosmo",
    default_tx_fee: 0,
    default_gas: 200_000,
};

/// Osmosis testnet configuration.
pub const TESTNET: Network = Network {
    provider: "https://rpc-test.osmosis.zone",
    network_name: "osmosis",
    chain_id: "osmo-test-4",
    bech32_prefix: "osmo",
    native_denom: "uosmo",
    default_tx_fee: 0,
    default_gas: 200_000,
};

/// Look up a network by its string key.
///
/// `"main"` resolves to mainnet; every other key, recognized or not,
/// resolves to testnet. This never fails, so an unknown key silently
/// aliases to testnet. Callers relying on stricter routing should check
/// the key before calling.
pub fn lookup(key: &str) -> &'static Network {
    if key == "main" {
        &MAINNET
    } else {
        &TESTNET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_key_resolves_to_mainnet() {
        assert_eq!(lookup("main").chain_id, "osmosis-1");
    }

    #[test]
    fn unknown_keys_alias_to_testnet() {
        for key in ["testnet", "", "mainnet", "osmosis", "MAIN"] {
            assert_eq!(lookup(key).chain_id, "osmo-test-4");
        }
    }

    #[test]
    fn link_templates() {
        let net = lookup("testnet");
        assert_eq!(
            net.transaction_link("ABC123"),
            "https://www.mintscan.io/osmosis/txs/ABC123"
        );
        assert_eq!(
            net.wallet_link("osmo1xyz"),
            "https://www.mintscan.io/osmosis/account/osmo1xyz"
        );
    }

    #[test]
    fn testnet_provider_ignores_api_key() {
        assert_eq!(TESTNET.provider_url(), "https://rpc-test.osmosis.zone");
    }
}
