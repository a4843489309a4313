//! Utility functions shared by the selection stages

use crate::utxo_selection::stages::Candidate;

/// Sort candidates ascending by effective value
///
/// The sort is stable, so candidates with equal effective values keep their
/// input order and ties resolve deterministically.
pub fn sort_by_effective_value_ascending(candidates: &mut [Candidate]) {
    candidates.sort_by_key(|candidate| candidate.effective_value);
}

/// Total effective value of a candidate set in satoshis
pub fn total_effective_value(candidates: &[Candidate]) -> i64 {
    candidates
        .iter()
        .map(|candidate| candidate.effective_value)
        .sum()
}
