//! Order entity: checkout, lifecycle transitions, and role-scoped listings.

mod actions;
pub mod entity;
mod queries;

pub use actions::*;
pub use queries::*;
