//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod luck;
mod odds;
mod roll;
mod shop;

pub use luck::Luck;
pub use odds::Odds;
pub use roll::Roll;
pub use shop::Shop;
