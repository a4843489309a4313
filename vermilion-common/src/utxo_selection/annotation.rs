//! Effective-value annotation for UTXO sets
//!
//! Before selection, every candidate UTXO is annotated with its effective
//! value: the on-chain amount minus the estimated marginal fee cost of
//! spending that input at the current fee rate. The annotation is transient
//! and recomputed whenever the fee rate or address type changes.
//!
//! Annotation never filters: a negative effective value is stored as-is and
//! the UTXO stays eligible for selection. Filtering by dust or confirmation
//! status is the caller's job (see [`filter_spendable`]) and happens before
//! annotation, mirroring how the wallet flows prepare their candidate sets.

use crate::math;
use crate::types::{AddressType, DUST_THRESHOLD};
use crate::utxo_selection::types::Utxo;

/// Annotate each UTXO with its effective value at the given fee rate
///
/// All UTXOs in the slice are assumed to share one address type, which is
/// how wallet-connect flows hand them over. For address types without a
/// defined spend cost (plain `P2SH`, `Unknown`) the UTXOs are left
/// unannotated and a warning is logged; the selector will reject them.
///
/// Idempotent: annotating twice with the same inputs yields the same
/// values.
///
/// # Arguments
/// * `utxos` - UTXOs to annotate, mutated in place
/// * `address_type` - Spending-script type shared by all UTXOs
/// * `fee_rate` - Fee rate in satoshis per vByte
pub fn annotate_effective_values(
    utxos: &mut [Utxo],
    address_type: AddressType,
    fee_rate: f32,
) {
    let spend_vbytes = match math::input_spend_vbytes(address_type) {
        Some(spend_vbytes) => spend_vbytes,
        None => {
            log::warn!(
                "no spend cost defined for {}, leaving {} UTXO(s) unannotated",
                address_type,
                utxos.len()
            );
            return;
        }
    };

    for utxo in utxos.iter_mut() {
        utxo.effective_value = Some(math::effective_value(utxo.amount, fee_rate, spend_vbytes));
    }
}

/// Remove effective-value annotations from a UTXO set
///
/// Used when a candidate set is re-priced at a different fee rate or
/// reclassified under a different address type.
pub fn clear_effective_values(utxos: &mut [Utxo]) {
    for utxo in utxos.iter_mut() {
        utxo.effective_value = None;
    }
}

/// Caller-side filter for spendable candidates
///
/// Keeps confirmed UTXOs above the dust threshold. This expresses the
/// filtering the wallet flows apply before annotation; the selector itself
/// never filters.
///
/// # Arguments
/// * `utxos` - Candidate UTXOs
/// * `dust_threshold` - Minimum amount in satoshis (typically [`DUST_THRESHOLD`])
///
/// # Returns
/// * The UTXOs that pass the filter, in input order
pub fn filter_spendable(utxos: &[Utxo], dust_threshold: u64) -> Vec<Utxo> {
    utxos
        .iter()
        .filter(|utxo| utxo.confirmed && utxo.amount.to_sat() > dust_threshold)
        .cloned()
        .collect()
}

/// Caller-side filter using the default dust threshold
pub fn filter_spendable_default(utxos: &[Utxo]) -> Vec<Utxo> {
    filter_spendable(utxos, DUST_THRESHOLD)
}
