//! Menu entity: each vendor's dishes.

pub mod entity;
mod queries;

pub use queries::*;
