pub mod ledger;
pub mod outcome;
pub mod payment;
pub mod processor;
pub mod queue;
pub mod router;
