//! Plain data passed between customers, bakers and the shared resources.

pub mod bread;
pub mod order;
pub mod records;

pub use bread::*;
pub use order::*;
pub use records::*;
