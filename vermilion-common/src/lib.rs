//! Vermilion Common Library
//!
//! This crate provides the shared Bitcoin functionality for the Vermilion
//! wallet flows: spending-script classification, effective-value
//! computation, UTXO selection, and transaction virtual-size estimation.
//!
//! # Modules
//!
//! - `types`: Address-type classification and the central error type
//! - `math`: Effective-value and fee calculations
//! - `size_estimation`: Transaction virtual-size estimation
//! - `utxo_selection`: UTXO selection algorithms and utilities
//! - `logging`: Logging infrastructure
//!
//! # Typical Flow
//!
//! The caller fetches candidate UTXOs and a fee rate from external
//! services, classifies the wallet's output script, annotates the UTXOs
//! with effective values, selects a covering set for the target amount,
//! and finally sizes the resulting transaction skeleton to derive its fee:
//!
//! ```no_run
//! use bitcoin::Amount;
//! use vermilion_common::{
//!     annotate_effective_values, estimate_tx_vsize, fee_for_vsize, AddressType, HeaderMode,
//!     UtxoSelector,
//! };
//!
//! # let mut utxos = Vec::new();
//! let fee_rate = 2.5;
//! annotate_effective_values(&mut utxos, AddressType::P2wpkh, fee_rate);
//!
//! let selector = UtxoSelector::new();
//! let selected = selector
//!     .select_utxos(&utxos, Amount::from_sat(75_000))
//!     .unwrap()
//!     .into_result()
//!     .unwrap();
//!
//! let vsize = estimate_tx_vsize(
//!     &vec![AddressType::P2wpkh; selected.len()],
//!     &[AddressType::P2tr, AddressType::P2wpkh],
//!     HeaderMode::FromInputs,
//! )
//! .unwrap();
//! let fee = fee_for_vsize(vsize, fee_rate);
//! ```

/// Core domain types: address classification and errors
pub mod types;

/// Bitcoin-related calculations and math utilities
pub mod math;

/// Logging functionality
pub mod logging;

/// Transaction virtual-size estimation
pub mod size_estimation;

/// UTXO selection algorithms and utilities
pub mod utxo_selection;

/// Re-export UTXO selection types
pub use utxo_selection::{
    annotate_effective_values, clear_effective_values, filter_spendable, filter_spendable_default,
    IndexedUtxo, IndexedUtxoStatus, SelectionResult, Utxo, UtxoSelector,
};

/// Re-export size estimation entry points
pub use size_estimation::{estimate_tx_vsize, HeaderMode};

/// Re-export common types for convenience
pub use types::{AddressType, WalletError, DUST_THRESHOLD};

/// Re-export math utilities for convenience
pub use math::{effective_value, fee_for_vsize, input_spend_vbytes, is_dust_amount};

// Re-export important Bitcoin types
pub use bitcoin::{Amount, OutPoint, Txid};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
