//! Exact-match selection stage
//!
//! A single pass over the sorted candidates looking for one UTXO whose
//! effective value equals the target exactly. Such a selection needs no
//! change output at all, so it always beats any multi-UTXO combination.
//! Because candidates arrive sorted ascending, the first hit is the
//! smallest qualifying UTXO.

use crate::utxo_selection::stages::{Candidate, SelectionStage};
use crate::utxo_selection::types::Utxo;

/// Stage scanning for a single UTXO that matches the target exactly
pub struct ExactMatch;

impl SelectionStage for ExactMatch {
    fn name(&self) -> &'static str {
        "ExactMatch"
    }

    fn run(&self, candidates: &[Candidate], target: i64) -> Option<Vec<Utxo>> {
        candidates
            .iter()
            .find(|candidate| candidate.effective_value == target)
            .map(|candidate| vec![candidate.utxo.clone()])
    }
}
