pub mod create_packet;
pub mod claim;
pub mod query;

pub use create_packet::*;
pub use claim::*;
pub use query::*;
