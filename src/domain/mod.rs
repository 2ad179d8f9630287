pub mod cart;
pub mod menu;
pub mod order;
pub mod user;
pub mod vendor;

pub use cart::*;
pub use menu::*;
pub use order::*;
pub use user::*;
pub use vendor::*;
