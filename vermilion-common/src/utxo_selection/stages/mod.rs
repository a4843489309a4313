//! UTXO selection stages
//!
//! The selector escalates through three stages in a fixed order, each
//! implementing the [`SelectionStage`] trait:
//!
//! - [`ExactMatch`] - a single scan for one UTXO whose effective value
//!   equals the target, avoiding a change output entirely
//! - [`BranchAndBound`] - bounded subset search minimizing waste
//! - [`Accumulate`] - greedy ascending accumulation, guaranteed to succeed
//!   whenever the full set covers the target
//!
//! All stages operate on candidates sorted ascending by effective value;
//! the ordering is established once by the selector and is load-bearing for
//! both the exact-match scan and the branch-and-bound exploration order.

use crate::utxo_selection::types::Utxo;

pub mod accumulate;
pub mod branch_and_bound;
pub mod exact_match;
pub mod utils;

// Re-export implementations
pub use accumulate::Accumulate;
pub use branch_and_bound::{BranchAndBound, BNB_NODE_BUDGET};
pub use exact_match::ExactMatch;

/// A selection candidate: a UTXO paired with its effective value
///
/// Built by the selector after validating that every input UTXO carries an
/// annotation, so stages never deal with missing effective values.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Effective value in satoshis (may be negative)
    pub effective_value: i64,
    /// The underlying UTXO
    pub utxo: Utxo,
}

/// Trait defining one stage of the selection cascade
///
/// A stage either produces a covering selection or yields to the next
/// stage by returning `None`.
pub trait SelectionStage {
    /// Name of this stage, for logging
    fn name(&self) -> &'static str;

    /// Attempt a selection over candidates sorted ascending by effective value
    ///
    /// # Arguments
    /// * `candidates` - Annotated candidates in ascending effective-value order
    /// * `target` - Target amount in satoshis
    ///
    /// # Returns
    /// * The selected UTXOs in this stage's insertion order, or `None` when
    ///   the stage found no covering selection
    fn run(&self, candidates: &[Candidate], target: i64) -> Option<Vec<Utxo>>;
}
