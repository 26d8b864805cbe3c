pub mod account;
pub mod conservation;
pub mod entropy;
pub mod pagination;
pub mod settlement;
pub mod split;
pub mod token;

pub use account::*;
pub use entropy::*;
pub use pagination::page;
pub use settlement::*;
pub use split::compute_grant;
pub use token::*;
