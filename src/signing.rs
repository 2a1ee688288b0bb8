// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signer derivation from BIP-39 mnemonics.
//!
//! Derivation is deterministic: the same mnemonic always yields the same
//! key and bech32 account address for a given prefix.

use cosmrs::bip32;
use cosmrs::crypto::secp256k1::SigningKey;
use cosmrs::AccountId;

use crate::error::WalletError;

/// BIP-44 derivation path for Cosmos-family accounts (coin type 118).
pub const HD_PATH: &str = "m/44'/118'/0'/0/0";

/// Derive a signing key and its bech32 account id from a mnemonic phrase.
///
/// # Arguments
/// * `mnemonic` - BIP-39 phrase (12 or 24 words)
/// * `prefix` - bech32 prefix of the target network (e.g., "osmo")
pub fn signer_from_mnemonic(
    mnemonic: &str,
    prefix: &str,
) -> Result<(SigningKey, AccountId), WalletError> {
    let mnemonic = bip32::Mnemonic::new(mnemonic.trim(), bip32::Language::English)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;
    let seed = mnemonic.to_seed("");

    let path: bip32::DerivationPath = HD_PATH
        .parse()
        .map_err(|e: bip32::Error| WalletError::InvalidMnemonic(e.to_string()))?;
    let key = SigningKey::derive_from_path(seed, &path)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;

    let account_id = key
        .public_key()
        .account_id(prefix)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;

    Ok((key, account_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::is_valid_wallet_address;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon abandon art";

    #[test]
    fn derives_a_valid_osmo_address() {
        let (_, account_id) = signer_from_mnemonic(TEST_MNEMONIC, "osmo").unwrap();
        assert!(is_valid_wallet_address(account_id.as_ref()));
    }

    #[test]
    fn derivation_is_deterministic() {
        let (_, first) = signer_from_mnemonic(TEST_MNEMONIC, "osmo").unwrap();
        let (_, second) = signer_from_mnemonic(TEST_MNEMONIC, "osmo").unwrap();
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn prefix_scopes_the_address() {
        let (_, account_id) = signer_from_mnemonic(TEST_MNEMONIC, "cosmos").unwrap();
        assert!(account_id.as_ref().starts_with("cosmos1"));
    }

    #[test]
    fn rejects_garbage_phrases() {
        for bad in ["", "not a mnemonic", "abandon abandon abandon"] {
            assert!(matches!(
                signer_from_mnemonic(bad, "osmo"),
                Err(WalletError::InvalidMnemonic(_))
            ));
        }
    }
}
