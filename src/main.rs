mod actor_framework;
mod app_system;
mod clients;
mod domain;
mod error;
mod menu_actor;
mod order_actor;
mod user_actor;
mod vendor_actor;

#[cfg(test)]
mod mock_framework;

use tracing::{info, Instrument};

use crate::app_system::{setup_tracing, OrderSystem};
use crate::domain::{Cart, OrderStatus, UserRole};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting BellaChow with the seeded campus dataset");

    let system = OrderSystem::new();

    // --- Student: browse, fill a cart, check out ---
    let span = tracing::info_span!("student_session");
    let order_id = async {
        let student = system
            .user_client
            .login("student@bellachow.com", UserRole::Student)
            .await
            .map_err(|e| e.to_string())?;
        info!(student = %student.name, wallet = ?student.wallet_balance, "Logged in");

        let vendors = system
            .vendor_client
            .list_open()
            .await
            .map_err(|e| e.to_string())?;
        let vendor = vendors.first().ok_or("no open vendors")?.clone();
        info!(vendor = %vendor.name, cuisine = %vendor.cuisine, rating = %vendor.rating, "Browsing menu");

        let menu = system
            .menu_client
            .list_menu(vendor.id.clone())
            .await
            .map_err(|e| e.to_string())?;

        let mut cart = Cart::new();
        for item in menu.iter().take(2) {
            info!(dish = %item.name, price = item.price, "Adding to cart");
            cart.add_item(item.clone());
        }
        info!(subtotal = cart.subtotal(), "Cart ready");

        let order_id = system
            .order_client
            .place_order(&mut cart, &student.id, &vendor.id, "Akindeko Hall, Room 201")
            .await
            .map_err(|e| e.to_string())?;
        info!(order_id = %order_id, "Checkout complete");
        Ok::<String, String>(order_id)
    }
    .instrument(span)
    .await?;

    // --- Vendor: accept the order and get it ready ---
    let span = tracing::info_span!("vendor_session");
    async {
        let vendor = system
            .user_client
            .login("vendor@bellachow.com", UserRole::Vendor)
            .await
            .map_err(|e| e.to_string())?;
        info!(vendor = %vendor.name, "Logged in");

        let order = system
            .order_client
            .update_status(
                order_id.clone(),
                OrderStatus::Preparing,
                vendor.role,
                vendor.id.clone(),
            )
            .await
            .map_err(|e| e.to_string())?;
        info!(order_id = %order.id, status = %order.status, "Order accepted");

        let order = system
            .order_client
            .update_status(
                order_id.clone(),
                OrderStatus::ReadyForPickup,
                vendor.role,
                vendor.id.clone(),
            )
            .await
            .map_err(|e| e.to_string())?;
        info!(order_id = %order.id, status = %order.status, "Order ready");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // --- Rider: pick up and deliver ---
    let span = tracing::info_span!("rider_session");
    async {
        let rider = system
            .user_client
            .login("rider@bellachow.com", UserRole::Rider)
            .await
            .map_err(|e| e.to_string())?;
        info!(rider = %rider.name, "Logged in");

        let available = system
            .order_client
            .orders_in_status(OrderStatus::ReadyForPickup)
            .await
            .map_err(|e| e.to_string())?;
        info!(count = available.len(), "Deliveries available");

        let order = system
            .order_client
            .update_status(
                order_id.clone(),
                OrderStatus::OutForDelivery,
                rider.role,
                rider.id.clone(),
            )
            .await
            .map_err(|e| e.to_string())?;
        info!(order_id = %order.id, status = %order.status, "Delivery accepted");

        let order = system
            .order_client
            .update_status(
                order_id.clone(),
                OrderStatus::Delivered,
                rider.role,
                rider.id.clone(),
            )
            .await
            .map_err(|e| e.to_string())?;
        info!(order_id = %order.id, status = %order.status, total = order.total, "Delivered");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
