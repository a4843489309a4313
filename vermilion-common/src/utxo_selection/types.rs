//! Core types for UTXO selection
//!
//! This module defines the fundamental types used for UTXO selection: the
//! [`Utxo`] structure, the [`IndexedUtxo`] wire shape delivered by
//! blockchain-indexing APIs, and the [`SelectionResult`] type.
//!
//! # Effective values
//!
//! A [`Utxo`] optionally carries an *effective value*: its amount minus the
//! estimated fee cost of spending it at a given fee rate. The annotation is
//! transient - it is recomputed whenever the fee rate or address type
//! changes and is never persisted. See
//! [`crate::utxo_selection::annotation`].

use std::str::FromStr;

use bitcoin::{Amount, OutPoint, Txid};
use serde::{Deserialize, Serialize};

use crate::types::WalletError;

/// Unspent transaction output (UTXO) representation
///
/// # Fields
///
/// * `outpoint` - Reference to the transaction output (txid and vout)
/// * `amount` - On-chain amount of bitcoin in this UTXO
/// * `confirmed` - Whether the creating transaction is confirmed
/// * `effective_value` - Transient spendable-after-fees value in satoshis;
///   `None` until annotated, may be negative once annotated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utxo {
    /// Reference to the transaction output (txid and vout)
    pub outpoint: OutPoint,

    /// On-chain amount in this UTXO
    pub amount: Amount,

    /// Whether the creating transaction is confirmed
    pub confirmed: bool,

    /// Effective value in satoshis at the most recent annotation, if any
    pub effective_value: Option<i64>,
}

impl Utxo {
    /// Create a new UTXO
    ///
    /// # Arguments
    /// * `outpoint` - The transaction outpoint (txid and vout)
    /// * `amount` - The amount in this UTXO
    /// * `confirmed` - Whether the creating transaction is confirmed
    ///
    /// # Returns
    /// * A new UTXO with no effective-value annotation
    pub fn new(outpoint: OutPoint, amount: Amount, confirmed: bool) -> Self {
        Self {
            outpoint,
            amount,
            confirmed,
            effective_value: None,
        }
    }

    /// Set the effective value on this UTXO
    ///
    /// # Arguments
    /// * `effective_value` - Effective value in satoshis (may be negative)
    ///
    /// # Returns
    /// * Self with the annotation set
    pub fn with_effective_value(mut self, effective_value: i64) -> Self {
        self.effective_value = Some(effective_value);
        self
    }

    /// Get a unique identifier for this UTXO
    pub fn id(&self) -> String {
        format!("{}:{}", self.outpoint.txid, self.outpoint.vout)
    }
}

#[derive(Serialize, Deserialize)]
struct UtxoWire {
    outpoint_txid: String,
    outpoint_vout: u32,
    amount_sats: u64,
    confirmed: bool,
    #[serde(default)]
    effective_value: Option<i64>,
}

impl Serialize for Utxo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let wire = UtxoWire {
            outpoint_txid: self.outpoint.txid.to_string(),
            outpoint_vout: self.outpoint.vout,
            amount_sats: self.amount.to_sat(),
            confirmed: self.confirmed,
            effective_value: self.effective_value,
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Utxo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = UtxoWire::deserialize(deserializer)?;
        let txid = Txid::from_str(&wire.outpoint_txid)
            .map_err(|_| serde::de::Error::custom("invalid txid"))?;

        Ok(Utxo {
            outpoint: OutPoint::new(txid, wire.outpoint_vout),
            amount: Amount::from_sat(wire.amount_sats),
            confirmed: wire.confirmed,
            effective_value: wire.effective_value,
        })
    }
}

/// UTXO as delivered by a blockchain-indexing HTTP API
///
/// Shape: `{txid, vout, value, status: {confirmed}}`. Convert into a
/// kernel [`Utxo`] with `TryFrom`, which validates the transaction id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedUtxo {
    /// Transaction id, hex
    pub txid: String,
    /// Output index
    pub vout: u32,
    /// Amount in satoshis
    pub value: u64,
    /// Confirmation status
    pub status: IndexedUtxoStatus,
}

/// Confirmation status of an indexed UTXO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedUtxoStatus {
    /// Whether the creating transaction is confirmed
    pub confirmed: bool,
}

impl TryFrom<IndexedUtxo> for Utxo {
    type Error = WalletError;

    fn try_from(indexed: IndexedUtxo) -> Result<Self, Self::Error> {
        let txid = Txid::from_str(&indexed.txid)
            .map_err(|_| WalletError::InvalidTxid(indexed.txid.clone()))?;

        Ok(Utxo::new(
            OutPoint::new(txid, indexed.vout),
            Amount::from_sat(indexed.value),
            indexed.status.confirmed,
        ))
    }
}

/// Result of UTXO selection
///
/// Either success with the chosen UTXOs (ordered by the winning stage's
/// insertion order), or insufficient funds with both sides of the shortfall
/// reported in effective satoshis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    /// Selection successful
    Success {
        /// Selected UTXOs
        selected: Vec<Utxo>,
        /// Sum of the selected effective values in satoshis
        total_effective_value: i64,
        /// Effective value in excess of the target (zero for exact matches)
        waste: i64,
    },

    /// Even the full UTXO set does not reach the target
    InsufficientFunds {
        /// Total available effective value in satoshis
        available: i64,
        /// Required amount in satoshis
        required: i64,
    },
}

impl SelectionResult {
    /// Convert into a `Result`, mapping insufficient funds to `WalletError`
    ///
    /// Convenient for callers that propagate kernel failures with `?`.
    pub fn into_result(self) -> Result<Vec<Utxo>, WalletError> {
        match self {
            SelectionResult::Success { selected, .. } => Ok(selected),
            SelectionResult::InsufficientFunds {
                available,
                required,
            } => Err(WalletError::InsufficientFunds {
                available,
                required,
            }),
        }
    }
}
