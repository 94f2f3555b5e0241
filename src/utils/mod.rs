// Shared utilities

pub mod constants;
pub mod listing;
pub mod storage;

pub use constants::*;
pub use storage::*;
