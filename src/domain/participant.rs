use serde::{Deserialize, Serialize};

use super::Amount;

/// One person splitting the bill: a display name plus the charges rung up
/// against them, in the order they were entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub charges: Vec<Amount>,
}

impl Participant {
    /// Create a participant with no charges yet.
    pub fn new(name: String) -> Self {
        Self {
            name,
            charges: Vec::new(),
        }
    }

    /// Sum of this participant's own charges, before tax and before any
    /// share of pooled fees/tips.
    pub fn subtotal(&self) -> Amount {
        self.charges.iter().copied().sum()
    }
}
