//! Mathematical utility functions for Bitcoin calculations
//!
//! This module provides the per-input spend-cost table and effective-value
//! computation used by UTXO selection, plus fee-from-size conversion.
//!
//! Sizes are virtual bytes and may be fractional because witness bytes count
//! at a quarter weight. Fee amounts are whole satoshis, rounded up.

use bitcoin::Amount;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{AddressType, DUST_THRESHOLD};

/// Determines if an amount is considered "dust" (too small to be economically viable)
///
/// # Arguments
/// * `amount_sats` - The amount in satoshis to check
///
/// # Returns
/// `true` if the amount is considered dust, `false` otherwise
pub fn is_dust_amount(amount_sats: u64) -> bool {
    amount_sats < DUST_THRESHOLD
}

/// Marginal cost in vBytes of spending an input of the given type
///
/// Witness bytes are counted at a quarter weight, which is where the
/// fractional sizes come from:
///
/// - P2TR: 40 byte outpoint/sequence skeleton + 1 byte witness count
///   + 66 witness bytes at quarter weight
/// - P2WPKH: same skeleton + 108 witness bytes at quarter weight
/// - P2SH-P2WPKH: adds the 24-byte redeem script push to the skeleton
/// - P2PKH: fully legacy, 108 script-sig bytes at full weight
///
/// Plain `P2SH` (unknown redeem script) and `Unknown` cannot be priced for
/// annotation and yield `None`; the caller must handle unannotated UTXOs.
pub fn input_spend_vbytes(address_type: AddressType) -> Option<f32> {
    match address_type {
        AddressType::P2tr => Some(40.0 + 1.0 + 66.0 / 4.0),
        AddressType::P2wpkh => Some(40.0 + 1.0 + 108.0 / 4.0),
        AddressType::P2shP2wpkh => Some(40.0 + 24.0 + 108.0 / 4.0),
        AddressType::P2pkh => Some(40.0 + 108.0),
        AddressType::P2sh | AddressType::Unknown => None,
    }
}

/// Computes the effective value of a UTXO after accounting for the fee to spend it
///
/// The fee cost of the input is rounded up to a whole satoshi before
/// subtraction. The result is not clamped: a UTXO whose spend cost exceeds
/// its value has a negative effective value and remains eligible for
/// selection.
///
/// # Arguments
/// * `amount` - The amount of the UTXO
/// * `fee_rate` - Fee rate in satoshis per vByte
/// * `spend_vbytes` - Marginal size of the input in vBytes
///
/// # Returns
/// The effective value of the UTXO in satoshis (may be negative)
pub fn effective_value(amount: Amount, fee_rate: f32, spend_vbytes: f32) -> i64 {
    let input_fee = (spend_vbytes * fee_rate).ceil() as i64;
    amount.to_sat() as i64 - input_fee
}

/// Calculates the fee for a transaction based on virtual size and fee rate
///
/// Decimal math avoids float drift when converting to whole satoshis; the
/// result is rounded up so the paid rate never falls below the requested one.
///
/// # Arguments
/// * `vsize` - The virtual size of the transaction in vBytes
/// * `fee_rate` - The fee rate in satoshis per vByte
///
/// # Returns
/// The calculated fee as a bitcoin Amount
pub fn fee_for_vsize(vsize: f32, fee_rate: f32) -> Amount {
    let size = Decimal::from_f32(vsize).unwrap_or(dec!(0));
    let rate = Decimal::from_f32(fee_rate).unwrap_or(dec!(0));
    let fee_sats = (size * rate).ceil().to_u64().unwrap_or(0);
    Amount::from_sat(fee_sats)
}
