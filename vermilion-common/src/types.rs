//! Core domain types for the Vermilion coin-selection kernel
//!
//! This module defines the spending-script classification used throughout the
//! kernel, together with the central error type and shared constants.
//!
//! # Key Types
//!
//! - [`AddressType`]: Closed enumeration of the spending-script types the
//!   kernel understands
//! - [`WalletError`]: Error type shared by classification, size estimation
//!   and selection
//!
//! # Classification
//!
//! [`AddressType::from_script`] inspects a Bitcoin output script and decides
//! how an input spending it will be constructed. Script templates are checked
//! in a fixed priority order because nested segwit is structurally a special
//! case of P2SH: a P2SH script can only be recognised as P2SH-P2WPKH when the
//! caller also supplies the public key that would sit inside the witness
//! program.

use std::fmt;
use std::str::FromStr;

use bitcoin::hashes::Hash;
use bitcoin::{OutPoint, PublicKey, Script, ScriptBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dust threshold in satoshis (Bitcoin Core default for standard outputs)
pub const DUST_THRESHOLD: u64 = 546;

/// Spending-script type of a Bitcoin output
///
/// The enumeration is closed on purpose: every component of the kernel
/// matches on it exhaustively, so adding a new address type is a
/// compile-time-checked change everywhere it matters.
///
/// `Unknown` is an explicit variant rather than a fallthrough default. It is
/// never produced by classification; callers use it when the script type of
/// a foreign input or output cannot be determined, and size estimation then
/// prices it conservatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressType {
    /// Taproot key-path output
    #[serde(rename = "P2TR")]
    P2tr,
    /// Native segwit v0 key-hash output
    #[serde(rename = "P2WPKH")]
    P2wpkh,
    /// Legacy script-hash output wrapping a P2WPKH witness program
    #[serde(rename = "P2SH-P2WPKH")]
    P2shP2wpkh,
    /// Legacy script-hash output with an unknown redeem script
    #[serde(rename = "P2SH")]
    P2sh,
    /// Legacy pay-to-pubkey-hash output
    #[serde(rename = "P2PKH")]
    P2pkh,
    /// Script type could not be determined by the caller
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl AddressType {
    /// Classify an output script, optionally disambiguating nested segwit
    ///
    /// Templates are checked in priority order: P2TR, P2WPKH, P2SH, P2PKH.
    /// For a P2SH script the public key (compressed, hex) is used to derive
    /// the would-be P2WPKH redeem script; if its HASH160 equals the hash
    /// embedded in the script the output is classified as `P2SH-P2WPKH`,
    /// otherwise as plain `P2SH`. Without a key the ambiguity cannot be
    /// resolved and plain `P2SH` is returned.
    ///
    /// # Arguments
    /// * `script` - The output script to classify
    /// * `public_key_hex` - Optional compressed public key in hex
    ///
    /// # Returns
    /// * The detected address type, or `WalletError::UnsupportedAddressType`
    ///   if no template matches
    pub fn from_script(
        script: &Script,
        public_key_hex: Option<&str>,
    ) -> Result<Self, WalletError> {
        if script.is_v1_p2tr() {
            return Ok(AddressType::P2tr);
        }

        if script.is_v0_p2wpkh() {
            return Ok(AddressType::P2wpkh);
        }

        if script.is_p2sh() {
            let key_hex = match public_key_hex {
                Some(key_hex) => key_hex,
                // No key, no way to tell whether the hash wraps segwit
                None => return Ok(AddressType::P2sh),
            };

            let public_key =
                PublicKey::from_str(key_hex).map_err(|e| WalletError::InvalidPublicKey {
                    key_hex: key_hex.to_string(),
                    reason: e.to_string(),
                })?;

            // An uncompressed key cannot appear in a P2WPKH witness program
            let wpubkey_hash = match public_key.wpubkey_hash() {
                Some(hash) => hash,
                None => return Ok(AddressType::P2sh),
            };

            let redeem_script = ScriptBuf::new_v0_p2wpkh(&wpubkey_hash);
            // P2SH template is OP_HASH160 <20 bytes> OP_EQUAL
            let embedded_hash = &script.as_bytes()[2..22];

            return if embedded_hash == redeem_script.script_hash().to_byte_array().as_slice() {
                Ok(AddressType::P2shP2wpkh)
            } else {
                Ok(AddressType::P2sh)
            };
        }

        if script.is_p2pkh() {
            return Ok(AddressType::P2pkh);
        }

        Err(WalletError::UnsupportedAddressType {
            script_hex: hex::encode(script.as_bytes()),
        })
    }

    /// Whether an input of this type carries witness data when spent
    ///
    /// `Unknown` is treated as witness-capable so that header estimation
    /// errs on the larger size.
    pub fn spends_with_witness(self) -> bool {
        match self {
            AddressType::P2tr
            | AddressType::P2wpkh
            | AddressType::P2shP2wpkh
            | AddressType::Unknown => true,
            AddressType::P2sh | AddressType::P2pkh => false,
        }
    }

    /// Wire name of this address type as used by the surrounding API layer
    pub fn as_str(self) -> &'static str {
        match self {
            AddressType::P2tr => "P2TR",
            AddressType::P2wpkh => "P2WPKH",
            AddressType::P2shP2wpkh => "P2SH-P2WPKH",
            AddressType::P2sh => "P2SH",
            AddressType::P2pkh => "P2PKH",
            AddressType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the coin-selection kernel
///
/// All failures are immediate and terminal for the call; the kernel never
/// retries and never returns partial results on error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Script matched none of the recognized templates
    #[error("Unsupported address type for script {script_hex}")]
    UnsupportedAddressType { script_hex: String },

    /// Public key supplied for P2SH disambiguation could not be parsed
    #[error("Invalid public key {key_hex}: {reason}")]
    InvalidPublicKey { key_hex: String, reason: String },

    /// Transaction id in wire data is not a valid 32-byte hash
    #[error("Invalid transaction id: {0}")]
    InvalidTxid(String),

    /// Size estimation cannot price an input of this type
    #[error("Unsupported input type for size estimation: {0}")]
    UnsupportedInputType(AddressType),

    /// Size estimation cannot resolve a header contribution for this type
    #[error("Unsupported header type for size estimation: {0}")]
    UnsupportedHeaderType(AddressType),

    /// A UTXO reached the selector without an effective-value annotation
    #[error("UTXO {outpoint} has no effective value annotation")]
    MissingEffectiveValue { outpoint: OutPoint },

    /// No UTXO combination covers the target, even using the full set
    #[error("Insufficient funds: available {available} sats, required {required} sats")]
    InsufficientFunds { available: i64, required: i64 },
}
