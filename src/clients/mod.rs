//! Typed clients for each resource actor.
//!
//! A client owns the sending half of its actor's mailbox and translates
//! channel failures into the entity's own error type.

pub mod menu_client;
pub mod order_client;
pub mod user_client;
pub mod vendor_client;

pub use menu_client::MenuClient;
pub use order_client::OrderClient;
pub use user_client::UserClient;
pub use vendor_client::VendorClient;
