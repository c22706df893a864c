use std::collections::HashSet;

use super::{
    Amount, LedgerSnapshot, Participant, ParticipantShare, compute_owed, parse_amount,
    parse_amount_or_zero,
};

/// A single bill being split. Holds the participant roster in insertion
/// order, each participant's itemized charges, and the two bill-wide
/// adjustments: the tax rate and the shared fee/tip pool.
///
/// Mutating methods validate their input and silently ignore anything
/// invalid, so the ledger is always in a consistent state and callers
/// never need to unwind a half-applied change.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    participants: Vec<Participant>,
    /// Lowercased copy of every participant name, kept in lockstep with
    /// `participants` for case-insensitive duplicate checks.
    normalized_names: HashSet<String>,
    tax_rate_percent: Amount,
    shared_fees_and_tips: Amount,
}

impl Ledger {
    /// Create an empty ledger: no participants, zero tax, zero fees.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant. The name is trimmed before storing; blank names
    /// and names already on the roster (compared case-insensitively) are
    /// ignored.
    pub fn add_participant(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let normalized = name.to_lowercase();
        if self.normalized_names.contains(&normalized) {
            return;
        }
        self.normalized_names.insert(normalized);
        self.participants.push(Participant::new(name.to_string()));
    }

    /// Remove the participant at `index`, dropping their charges and
    /// freeing their name for reuse. Later participants shift down one
    /// position. Out-of-range indices are ignored.
    pub fn remove_participant(&mut self, index: usize) {
        if index >= self.participants.len() {
            return;
        }
        let removed = self.participants.remove(index);
        self.normalized_names.remove(&removed.name.to_lowercase());
    }

    /// Record a charge for the participant at `participant_index`. The raw
    /// amount must parse as a decimal number in full; anything else,
    /// including an empty string, leaves the ledger untouched.
    /// Out-of-range indices are ignored.
    pub fn add_charge(&mut self, participant_index: usize, raw_amount: &str) {
        if let Some(participant) = self.participants.get_mut(participant_index) {
            if let Ok(amount) = parse_amount(raw_amount) {
                participant.charges.push(amount);
            }
        }
    }

    /// Remove one charge from the participant at `participant_index`.
    /// Indices past the end of the current charge list are ignored, so
    /// repeating a removal never deletes more than intended.
    pub fn remove_charge(&mut self, participant_index: usize, charge_index: usize) {
        if let Some(participant) = self.participants.get_mut(participant_index) {
            if charge_index < participant.charges.len() {
                participant.charges.remove(charge_index);
            }
        }
    }

    /// Set the tax rate (a percentage) from raw input. Input that does not
    /// parse resets the rate to zero rather than keeping the old value.
    pub fn set_tax_rate(&mut self, raw: &str) {
        self.tax_rate_percent = parse_amount_or_zero(raw);
    }

    /// Set the shared fee/tip pool from raw input. Input that does not
    /// parse resets the pool to zero rather than keeping the old value.
    pub fn set_shared_fees_and_tips(&mut self, raw: &str) {
        self.shared_fees_and_tips = parse_amount_or_zero(raw);
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Name of the participant at `index` in its original casing.
    pub fn participant_name(&self, index: usize) -> Option<&str> {
        self.participants.get(index).map(|p| p.name.as_str())
    }

    /// Number of charges recorded for the participant at `index`, or zero
    /// for an out-of-range index.
    pub fn charge_count(&self, index: usize) -> usize {
        self.participants
            .get(index)
            .map(|p| p.charges.len())
            .unwrap_or(0)
    }

    pub fn tax_rate_percent(&self) -> Amount {
        self.tax_rate_percent
    }

    pub fn shared_fees_and_tips(&self) -> Amount {
        self.shared_fees_and_tips
    }

    /// Project every participant into their share of the bill. Owed
    /// amounts are computed on the fly from current state, never stored.
    /// An empty roster yields an empty list.
    pub fn participants(&self) -> Vec<ParticipantShare> {
        let count = self.participants.len();
        self.participants
            .iter()
            .map(|participant| ParticipantShare {
                name: participant.name.clone(),
                charges: participant.charges.clone(),
                owed: compute_owed(
                    participant,
                    self.tax_rate_percent,
                    self.shared_fees_and_tips,
                    count,
                ),
            })
            .collect()
    }

    /// Full view of the split, with the grand total across participants.
    pub fn snapshot(&self) -> LedgerSnapshot {
        let participants = self.participants();
        let grand_total = participants.iter().map(|share| share.owed).sum();
        LedgerSnapshot {
            tax_rate_percent: self.tax_rate_percent,
            shared_fees_and_tips: self.shared_fees_and_tips,
            grand_total,
            participants,
        }
    }
}
