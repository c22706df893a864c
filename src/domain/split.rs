use serde::{Deserialize, Serialize};

use super::{Amount, Participant};

/// Compute what one participant owes.
///
/// owed = subtotal * (1 + tax_rate_percent / 100)
///      + shared_fees_and_tips / participant_count
///
/// Tax applies only to the participant's own subtotal; the fee/tip pool is
/// divided evenly across all current participants no matter who charged
/// what. The result is unrounded; display rounding is the renderer's job.
///
/// `participant_count` must be at least one. Callers only compute owed
/// amounts for participants that exist, so an empty ledger never reaches
/// this function.
pub fn compute_owed(
    participant: &Participant,
    tax_rate_percent: Amount,
    shared_fees_and_tips: Amount,
    participant_count: usize,
) -> Amount {
    assert!(
        participant_count > 0,
        "owed amount requires at least one participant"
    );
    let tax_multiplier = Amount::ONE + tax_rate_percent / Amount::ONE_HUNDRED;
    participant.subtotal() * tax_multiplier
        + shared_fees_and_tips / Amount::from(participant_count as u64)
}

/// One row of the split: a participant's name, their itemized charges, and
/// the final amount they owe. Computed on demand from ledger state; never
/// stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantShare {
    pub name: String,
    pub charges: Vec<Amount>,
    pub owed: Amount,
}

impl ParticipantShare {
    /// Sum of the itemized charges, before tax and fees.
    pub fn subtotal(&self) -> Amount {
        self.charges.iter().copied().sum()
    }
}

/// Everything the presentation layer needs to render the current split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub tax_rate_percent: Amount,
    pub shared_fees_and_tips: Amount,
    /// Sum of every participant's owed amount: the whole bill with tax and
    /// fees folded in. Display aggregate only.
    pub grand_total: Amount,
    pub participants: Vec<ParticipantShare>,
}
