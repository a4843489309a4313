//! Accumulator fallback stage
//!
//! Walks the sorted candidates from smallest to largest effective value,
//! greedily accumulating until the running total covers the target. This
//! trades optimality for certainty: it succeeds if and only if the full
//! set's effective value reaches the target, so selection can never starve
//! when a covering set mathematically exists.

use crate::utxo_selection::stages::{Candidate, SelectionStage};
use crate::utxo_selection::types::Utxo;

/// Greedy ascending accumulation stage
pub struct Accumulate;

impl SelectionStage for Accumulate {
    fn name(&self) -> &'static str {
        "Accumulate"
    }

    fn run(&self, candidates: &[Candidate], target: i64) -> Option<Vec<Utxo>> {
        let mut selected = Vec::new();
        let mut total = 0i64;

        for candidate in candidates {
            selected.push(candidate.utxo.clone());
            total += candidate.effective_value;

            if total >= target {
                return Some(selected);
            }
        }

        None
    }
}
