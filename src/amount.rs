// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Conversion between human-readable decimal amounts and integer base-unit
//! amounts.
//!
//! All arithmetic is `u128` fixed-point; floating point is never used in
//! the conversions.

use crate::error::WalletError;

/// Upper bound on `decimals` keeping `10^decimals` inside `u128`.
const MAX_DECIMALS: u32 = 38;

fn scale_factor(decimals: u32) -> Result<u128, WalletError> {
    if decimals > MAX_DECIMALS {
        return Err(WalletError::InvalidAmount(format!(
            "decimals out of range (max {MAX_DECIMALS})"
        )));
    }
    Ok(10u128.pow(decimals))
}

/// Scale an integer base-unit string down by `10^decimals` into a decimal
/// string, trimming trailing fractional zeros.
///
/// # Arguments
/// * `raw` - Amount in base units (e.g., "1500000")
/// * `decimals` - Number of decimals (6 for OSMO)
pub fn to_decimal(raw: &str, decimals: u32) -> Result<String, WalletError> {
    let value = raw
        .parse::<u128>()
        .map_err(|_| WalletError::InvalidAmount(format!("not a base-unit amount: {raw:?}")))?;
    let divisor = scale_factor(decimals)?;

    let whole = value / divisor;
    let remainder = value % divisor;

    if remainder == 0 {
        return Ok(whole.to_string());
    }

    let decimal_str = format!("{:0>width$}", remainder, width = decimals as usize);
    let trimmed = decimal_str.trim_end_matches('0');
    Ok(format!("{whole}.{trimmed}"))
}

/// Scale a decimal string up by `10^decimals` into an integer base-unit
/// string.
///
/// Rejects input with more fractional digits than `decimals` rather than
/// rounding.
pub fn to_base_units(amount: &str, decimals: u32) -> Result<String, WalletError> {
    let parts: Vec<&str> = amount.split('.').collect();

    if parts.len() > 2 {
        return Err(WalletError::InvalidAmount(format!(
            "invalid amount format: {amount:?}"
        )));
    }

    let whole = parts[0]
        .parse::<u128>()
        .map_err(|_| WalletError::InvalidAmount(format!("invalid whole number: {amount:?}")))?;

    let decimal_part = if parts.len() == 2 {
        let dec_str = parts[1];
        if dec_str.len() > decimals as usize {
            return Err(WalletError::InvalidAmount(format!(
                "too many decimal places (max {decimals})"
            )));
        }
        // Pad with zeros to match decimals
        let padded = format!("{:0<width$}", dec_str, width = decimals as usize);
        padded
            .parse::<u128>()
            .map_err(|_| WalletError::InvalidAmount(format!("invalid decimal: {amount:?}")))?
    } else {
        0u128
    };

    let multiplier = scale_factor(decimals)?;
    let total = whole
        .checked_mul(multiplier)
        .and_then(|w| w.checked_add(decimal_part))
        .ok_or_else(|| WalletError::InvalidAmount("amount overflow".to_string()))?;

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_base_units_whole() {
        assert_eq!(to_base_units("1", 6).unwrap(), "1000000");
    }

    #[test]
    fn to_base_units_decimal() {
        assert_eq!(to_base_units("1.5", 6).unwrap(), "1500000");
        assert_eq!(to_base_units("0.000005", 6).unwrap(), "5");
    }

    #[test]
    fn to_base_units_rejects_malformed() {
        for bad in ["", "1.2.3", "abc", "-1", "1.x", "0.1234567"] {
            assert!(
                matches!(to_base_units(bad, 6), Err(WalletError::InvalidAmount(_))),
                "expected InvalidAmount for {bad:?}"
            );
        }
    }

    #[test]
    fn to_decimal_scales_down() {
        assert_eq!(to_decimal("1000000", 6).unwrap(), "1");
        assert_eq!(to_decimal("1500000", 6).unwrap(), "1.5");
        assert_eq!(to_decimal("5", 6).unwrap(), "0.000005");
        assert_eq!(to_decimal("0", 6).unwrap(), "0");
    }

    #[test]
    fn to_decimal_rejects_malformed() {
        for bad in ["", "1.5", "abc", "-1"] {
            assert!(
                matches!(to_decimal(bad, 6), Err(WalletError::InvalidAmount(_))),
                "expected InvalidAmount for {bad:?}"
            );
        }
    }

    #[test]
    fn decimals_out_of_range() {
        assert!(to_decimal("1", 39).is_err());
        assert!(to_base_units("1", 39).is_err());
    }

    #[test]
    fn round_trip_law() {
        let samples: [u128; 6] = [0, 1, 5, 1_000_000, 1_234_567_890, u64::MAX as u128];
        for decimals in 0..=18u32 {
            for raw in samples {
                let raw = raw.to_string();
                let decimal = to_decimal(&raw, decimals).unwrap();
                assert_eq!(
                    to_base_units(&decimal, decimals).unwrap(),
                    raw,
                    "round trip failed for {raw} at {decimals} decimals"
                );
            }
        }
    }
}
