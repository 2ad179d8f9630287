use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use super::seed;
use crate::actor_framework::ResourceActor;
use crate::clients::{MenuClient, OrderClient, UserClient, VendorClient};
use crate::domain::{MenuItem, Order, User, Vendor};

const MAILBOX: usize = 32;

fn id_generator(prefix: &'static str, start: u64) -> impl Fn() -> String + Send + Sync {
    let counter = Arc::new(AtomicU64::new(start));
    move || {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        format!("{prefix}{n}")
    }
}

/// The main application system that owns all four resource actors.
///
/// Each actor is seeded from the fixed campus dataset and serves one shared
/// collection, so every role sees the same orders. Id generators continue
/// past the highest seeded id in each collection.
pub struct OrderSystem {
    pub user_client: UserClient,
    pub vendor_client: VendorClient,
    pub menu_client: MenuClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    pub fn new() -> Self {
        // 1. User directory
        let seed_users = seed::users();
        let (user_actor, user_resource_client) = ResourceActor::<User>::with_seed(
            MAILBOX,
            id_generator("u", seed_users.len() as u64 + 1),
            seed_users,
        );
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        // 2. Vendor directory
        let seed_vendors = seed::vendors();
        let (vendor_actor, vendor_resource_client) = ResourceActor::<Vendor>::with_seed(
            MAILBOX,
            id_generator("v", seed_vendors.len() as u64 + 1),
            seed_vendors,
        );
        let vendor_client = VendorClient::new(vendor_resource_client);
        let vendor_handle = tokio::spawn(vendor_actor.run());

        // 3. Menus
        let seed_menu = seed::menu_items();
        let (menu_actor, menu_resource_client) = ResourceActor::<MenuItem>::with_seed(
            MAILBOX,
            id_generator("m", seed_menu.len() as u64 + 1),
            seed_menu,
        );
        let menu_client = MenuClient::new(menu_resource_client);
        let menu_handle = tokio::spawn(menu_actor.run());

        // 4. Orders
        let seed_orders = seed::orders();
        let (order_actor, order_resource_client) = ResourceActor::<Order>::with_seed(
            MAILBOX,
            id_generator("o", seed_orders.len() as u64 + 1),
            seed_orders,
        );
        let order_client = OrderClient::new(
            order_resource_client,
            user_client.clone(),
            vendor_client.clone(),
        );
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            user_client,
            vendor_client,
            menu_client,
            order_client,
            handles: vec![user_handle, vendor_handle, menu_handle, order_handle],
        }
    }

    /// Closes every mailbox and waits for the actors to drain and exit.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Dropping the clients closes the channels; each actor stops once
        // its mailbox is empty.
        drop(self.order_client);
        drop(self.menu_client);
        drop(self.vendor_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
