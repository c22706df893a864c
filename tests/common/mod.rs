// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use divvy::Ledger;

/// Helper to build a ledger with the given participants
pub fn ledger_with(names: &[&str]) -> Ledger {
    let mut ledger = Ledger::new();
    for name in names {
        ledger.add_participant(name);
    }
    ledger
}

/// Test fixture: a two-person dinner bill
pub struct DinnerForTwo;

impl DinnerForTwo {
    /// Alice with a 10.00 charge, Bob with 20.00, 10% tax, 6.00 in fees.
    /// Works out to 14.00 owed for Alice and 25.00 for Bob.
    pub fn create() -> Ledger {
        let mut ledger = ledger_with(&["Alice", "Bob"]);
        ledger.add_charge(0, "10.00");
        ledger.add_charge(1, "20.00");
        ledger.set_tax_rate("10");
        ledger.set_shared_fees_and_tips("6.00");
        ledger
    }
}
