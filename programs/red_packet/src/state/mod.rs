pub mod red_packet_state;
pub mod claim_state;
pub mod registry_state;

pub use red_packet_state::*;
pub use claim_state::*;
pub use registry_state::*;
