//! Main UTXO selector implementation
//!
//! The selector validates that every candidate carries an effective-value
//! annotation, sorts the set ascending by effective value once, and then
//! escalates through the three selection stages in a fixed order, returning
//! on the first success:
//!
//! 1. Exact match - avoids a change output when a single UTXO fits exactly
//! 2. Branch and bound - minimizes wasted value when no exact match exists
//! 3. Accumulator - guarantees a result whenever one is mathematically
//!    possible
//!
//! The selector never filters its input: UTXOs with negative effective
//! values participate like any other. Dust and confirmation filtering
//! belong to the caller, before annotation.
//!
//! # Usage
//!
//! ```no_run
//! use vermilion_common::utxo_selection::selector::UtxoSelector;
//! use vermilion_common::utxo_selection::types::{SelectionResult, Utxo};
//! use vermilion_common::utxo_selection::annotation::annotate_effective_values;
//! use vermilion_common::types::AddressType;
//! use bitcoin::{Amount, OutPoint, Txid};
//! use std::str::FromStr;
//!
//! let mut utxos = vec![Utxo::new(
//!     OutPoint::new(
//!         Txid::from_str("7967a5185e907a25225574544c31f7b059c1a191d65b53dcc1554d339c4f9efc")
//!             .unwrap(),
//!         0,
//!     ),
//!     Amount::from_sat(50_000),
//!     true,
//! )];
//!
//! annotate_effective_values(&mut utxos, AddressType::P2wpkh, 2.0);
//!
//! let selector = UtxoSelector::new();
//! match selector.select_utxos(&utxos, Amount::from_sat(20_000)).unwrap() {
//!     SelectionResult::Success { selected, .. } => {
//!         // Build the transaction from the selected UTXOs
//!     }
//!     SelectionResult::InsufficientFunds { available, required } => {
//!         // Surface the shortfall to the user
//!     }
//! }
//! ```

use bitcoin::Amount;

use crate::logging::sanitize_for_logging;
use crate::types::WalletError;
use crate::utxo_selection::stages::{
    utils, Accumulate, BranchAndBound, Candidate, ExactMatch, SelectionStage, BNB_NODE_BUDGET,
};
use crate::utxo_selection::types::{SelectionResult, Utxo};

/// UTXO selector escalating through exact match, branch and bound, and
/// greedy accumulation
pub struct UtxoSelector {
    /// Node budget for the branch-and-bound stage
    bnb_node_budget: usize,
}

impl UtxoSelector {
    /// Create a new selector with the default branch-and-bound node budget
    pub fn new() -> Self {
        Self {
            bnb_node_budget: BNB_NODE_BUDGET,
        }
    }

    /// Create a new selector with a custom branch-and-bound node budget
    ///
    /// A budget of zero disables the branch-and-bound stage entirely, which
    /// is mainly useful for exercising the accumulator fallback.
    pub fn with_node_budget(bnb_node_budget: usize) -> Self {
        Self { bnb_node_budget }
    }

    /// Get the configured branch-and-bound node budget
    pub fn node_budget(&self) -> usize {
        self.bnb_node_budget
    }

    /// Select UTXOs whose effective values cover the target amount
    ///
    /// # Arguments
    /// * `utxos` - Annotated candidate UTXOs (see
    ///   [`crate::utxo_selection::annotation::annotate_effective_values`])
    /// * `target_amount` - Amount the selection must cover
    ///
    /// # Returns
    /// * `Ok(SelectionResult)` with either the covering selection or an
    ///   insufficient-funds report; `Err(WalletError::MissingEffectiveValue)`
    ///   if any candidate lacks an annotation
    pub fn select_utxos(
        &self,
        utxos: &[Utxo],
        target_amount: Amount,
    ) -> Result<SelectionResult, WalletError> {
        let target = target_amount.to_sat() as i64;
        log::debug!(
            "selecting UTXOs: target {} sats, {} candidate(s)",
            target,
            utxos.len()
        );

        let mut candidates = Vec::with_capacity(utxos.len());
        for utxo in utxos {
            match utxo.effective_value {
                Some(effective_value) => candidates.push(Candidate {
                    effective_value,
                    utxo: utxo.clone(),
                }),
                None => {
                    return Err(WalletError::MissingEffectiveValue {
                        outpoint: utxo.outpoint,
                    })
                }
            }
        }

        // This ordering persists into every stage
        utils::sort_by_effective_value_ascending(&mut candidates);
        let available = utils::total_effective_value(&candidates);

        let stages: [Box<dyn SelectionStage>; 3] = [
            Box::new(ExactMatch),
            Box::new(BranchAndBound::new(self.bnb_node_budget)),
            Box::new(Accumulate),
        ];

        for stage in stages.iter() {
            if let Some(selected) = stage.run(&candidates, target) {
                let total_effective_value: i64 =
                    selected.iter().filter_map(|utxo| utxo.effective_value).sum();
                let waste = total_effective_value - target;

                log::debug!(
                    "stage {} selected {} UTXO(s), waste {} sats",
                    stage.name(),
                    selected.len(),
                    waste
                );
                log::trace!(
                    "selected outpoints: {:?}",
                    selected
                        .iter()
                        .map(|utxo| sanitize_for_logging(&utxo.id()))
                        .collect::<Vec<_>>()
                );

                return Ok(SelectionResult::Success {
                    selected,
                    total_effective_value,
                    waste,
                });
            }
        }

        log::debug!(
            "selection infeasible: available {} sats, required {} sats",
            available,
            target
        );
        Ok(SelectionResult::InsufficientFunds {
            available,
            required: target,
        })
    }
}

impl Default for UtxoSelector {
    fn default() -> Self {
        Self::new()
    }
}
