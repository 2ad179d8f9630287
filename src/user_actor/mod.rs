//! User directory entity: login lookups and profile updates.

pub mod entity;
mod queries;

pub use queries::*;
