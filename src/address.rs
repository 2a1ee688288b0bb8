// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Structural validation of Osmosis wallet addresses.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shape of a bech32 Osmosis account address: the `osmo1` prefix followed
/// by exactly 38 lowercase alphanumeric characters. The checksum is not
/// verified.
static WALLET_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^osmo1[a-z0-9]{38}$").expect("wallet address pattern"));

/// Check whether `address` has the shape of an Osmosis wallet address.
///
/// Purely structural; returns `false` for any malformed input, including
/// the empty string.
pub fn is_valid_wallet_address(address: &str) -> bool {
    WALLET_ADDRESS.is_match(address)
}
