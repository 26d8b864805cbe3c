pub mod claim_ledger;
pub mod query;
pub mod registry;

pub use claim_ledger::*;
pub use query::*;
pub use registry::*;
