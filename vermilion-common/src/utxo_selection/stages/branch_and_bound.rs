//! Branch-and-bound selection stage
//!
//! Explores subsets of the sorted candidate list as a search tree: each
//! node either records a feasible selection or branches on which candidate
//! from the remaining suffix to include next. Relative order is preserved,
//! so every subset is visited at most once and exploration order is fully
//! determined by the ascending effective-value sort.
//!
//! Among all feasible subsets found, the one with the smallest waste
//! (`sum - target`) wins; ties keep the first subset found. A branch is
//! abandoned when its partial sum plus the sum of all remaining candidates
//! cannot reach the target.
//!
//! The search is capped by an explicit node budget. When the budget runs
//! out the stage discards any partial result and returns `None`, so the
//! selector falls through to the accumulator deterministically - a
//! suboptimal-but-correct outcome, never a silently wrong one. Note that
//! the infeasibility bound is not exact in the presence of negative
//! effective values, which is a second (documented) source of suboptimal
//! results; the accumulator preserves feasibility regardless.

use crate::utxo_selection::stages::{Candidate, SelectionStage};
use crate::utxo_selection::types::Utxo;

/// Default number of search-tree nodes explored before giving up
pub const BNB_NODE_BUDGET: usize = 100_000;

/// Stage searching for the minimum-waste covering subset
pub struct BranchAndBound {
    node_budget: usize,
}

impl BranchAndBound {
    /// Create a branch-and-bound stage with the given node budget
    pub fn new(node_budget: usize) -> Self {
        Self { node_budget }
    }
}

impl Default for BranchAndBound {
    fn default() -> Self {
        Self::new(BNB_NODE_BUDGET)
    }
}

impl SelectionStage for BranchAndBound {
    fn name(&self) -> &'static str {
        "BranchAndBound"
    }

    fn run(&self, candidates: &[Candidate], target: i64) -> Option<Vec<Utxo>> {
        let mut search = Search::new(candidates, target, self.node_budget);
        search.explore(0, 0);

        if search.exhausted {
            log::debug!(
                "branch and bound node budget ({}) exhausted, yielding to accumulator",
                self.node_budget
            );
            return None;
        }

        search.best_waste?;
        Some(
            search
                .best
                .iter()
                .map(|&index| candidates[index].utxo.clone())
                .collect(),
        )
    }
}

/// Mutable state of one branch-and-bound search
struct Search<'a> {
    candidates: &'a [Candidate],
    target: i64,
    /// suffix_sums[i] = sum of effective values of candidates[i..]
    suffix_sums: Vec<i64>,
    node_budget: usize,
    nodes: usize,
    exhausted: bool,
    best_waste: Option<i64>,
    best: Vec<usize>,
    current: Vec<usize>,
}

impl<'a> Search<'a> {
    fn new(candidates: &'a [Candidate], target: i64, node_budget: usize) -> Self {
        let mut suffix_sums = vec![0i64; candidates.len() + 1];
        for index in (0..candidates.len()).rev() {
            suffix_sums[index] = suffix_sums[index + 1] + candidates[index].effective_value;
        }

        Self {
            candidates,
            target,
            suffix_sums,
            node_budget,
            nodes: 0,
            exhausted: false,
            best_waste: None,
            best: Vec::new(),
            current: Vec::new(),
        }
    }

    /// Explore all subsets of candidates[start..] extending `current`
    ///
    /// `sum` is the effective-value sum of `current`. Recursion depth is
    /// bounded by the suffix length by construction, since every branch
    /// consumes at least one candidate.
    fn explore(&mut self, start: usize, sum: i64) {
        if self.exhausted {
            return;
        }

        self.nodes += 1;
        if self.nodes > self.node_budget {
            self.exhausted = true;
            return;
        }

        if sum >= self.target {
            let waste = sum - self.target;
            // Strict comparison: ties keep the first subset found
            if self.best_waste.map_or(true, |best| waste < best) {
                self.best_waste = Some(waste);
                self.best = self.current.clone();
            }
            return;
        }

        // Even taking every remaining candidate cannot reach the target
        if sum + self.suffix_sums[start] < self.target {
            return;
        }

        for index in start..self.candidates.len() {
            self.current.push(index);
            self.explore(index + 1, sum + self.candidates[index].effective_value);
            self.current.pop();

            if self.exhausted {
                return;
            }
        }
    }
}
