//! UTXO selection module
//!
//! This module chooses which unspent transaction outputs to spend when the
//! Vermilion wallet flows build a transaction. Selection works on *effective
//! values* - amounts net of each input's own fee cost - and escalates
//! through three strategies until one produces a covering set.
//!
//! # Module Structure
//!
//! - `types.rs` - Core data structures: `Utxo`, the indexer wire shape, and
//!   `SelectionResult`
//! - `annotation.rs` - Effective-value annotation and caller-side filters
//! - `selector.rs` - The `UtxoSelector` driving the stage cascade
//! - `stages/` - The three selection stages behind a common trait
//!
//! # Design
//!
//! The whole module is pure, synchronous computation over caller-owned
//! data: no I/O, no shared state, no persistence. Concurrent selections
//! over independent UTXO lists are safe by construction. The only
//! potentially expensive operation is the branch-and-bound stage, which is
//! held to an explicit node budget and falls back to greedy accumulation
//! when the budget runs out.

pub mod annotation;
pub mod selector;
pub mod stages;
pub mod types;

pub use annotation::{
    annotate_effective_values, clear_effective_values, filter_spendable, filter_spendable_default,
};
pub use selector::UtxoSelector;
pub use types::{IndexedUtxo, IndexedUtxoStatus, SelectionResult, Utxo};
