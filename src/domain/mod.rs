mod ledger;
mod money;
mod participant;
mod split;

pub use ledger::*;
pub use money::*;
pub use participant::*;
pub use split::*;
