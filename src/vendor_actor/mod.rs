//! Vendor directory entity: the storefront list and the open/closed toggle.

pub mod entity;
mod queries;

pub use queries::*;
