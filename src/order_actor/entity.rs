use chrono::Utc;

use super::actions::{OrderAction, OrderActionResult};
use super::queries::OrderQuery;
use crate::actor_framework::Entity;
use crate::domain::{cart::DELIVERY_FEE, Order, OrderCreate, OrderStatus};
use crate::error::OrderError;

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Patch = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Query = OrderQuery;
    type Error = OrderError;

    fn id(&self) -> &String {
        &self.id
    }

    /// Builds the order placed at checkout: status Pending, stamped now,
    /// total = line subtotal + flat delivery fee.
    ///
    /// An empty item list is rejected here as well as at the client, so a
    /// caller that skips the client-side check still cannot create a hollow
    /// order.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        let subtotal = params.items.iter().fold(0u32, |acc, ci| {
            acc.saturating_add(ci.menu_item.price.saturating_mul(ci.quantity))
        });
        Ok(Self {
            id,
            student_id: params.student_id,
            vendor_id: params.vendor_id,
            rider_id: None,
            items: params.items,
            total: subtotal.saturating_add(DELIVERY_FEE),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            delivery_address: params.delivery_address,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), OrderError> {
        Ok(())
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Transition {
                target,
                actor_role,
                actor_id,
            } => {
                self.apply_transition(target, actor_role, &actor_id)?;
                Ok(OrderActionResult::Transitioned(self.clone()))
            }
        }
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        match query {
            OrderQuery::ForStudent(id) => self.student_id == *id,
            OrderQuery::ForVendor(id) => self.vendor_id == *id,
            OrderQuery::InStatus(status) => self.status == *status,
            OrderQuery::InTransitWith(rider_id) => {
                self.status == OrderStatus::OutForDelivery
                    && self.rider_id.as_deref() == Some(rider_id)
            }
        }
    }

    fn not_found(id: &String) -> OrderError {
        OrderError::NotFound(id.clone())
    }

    fn channel_closed() -> OrderError {
        OrderError::ActorClosed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CartItem, MenuItem};

    fn line(id: &str, price: u32, quantity: u32) -> CartItem {
        CartItem {
            menu_item: MenuItem::new(id, "v1", "Dish", "", price, ""),
            quantity,
        }
    }

    #[test]
    fn checkout_totals_include_the_delivery_fee() {
        let order = Order::from_create_params(
            "o9".into(),
            OrderCreate {
                student_id: "u1".into(),
                vendor_id: "v1".into(),
                items: vec![line("m1", 1500, 1), line("m2", 1800, 1)],
                delivery_address: "Fajuyi Hall, Block 4".into(),
            },
        )
        .unwrap();

        assert_eq!(order.total, 3600);
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.rider_id.is_none());
    }

    #[test]
    fn checkout_totals_saturate_on_absurd_quantities() {
        let order = Order::from_create_params(
            "o9".into(),
            OrderCreate {
                student_id: "u1".into(),
                vendor_id: "v1".into(),
                items: vec![line("m1", 5000, u32::MAX)],
                delivery_address: "Fajuyi Hall, Block 4".into(),
            },
        )
        .unwrap();

        assert_eq!(order.total, u32::MAX);
    }

    #[test]
    fn an_order_with_no_items_is_rejected() {
        let err = Order::from_create_params(
            "o9".into(),
            OrderCreate {
                student_id: "u1".into(),
                vendor_id: "v1".into(),
                items: Vec::new(),
                delivery_address: "Fajuyi Hall, Block 4".into(),
            },
        )
        .unwrap_err();
        assert_eq!(err, OrderError::EmptyCart);
    }

    #[test]
    fn in_transit_query_needs_both_the_rider_and_the_status() {
        let mut order = Order::from_create_params(
            "o9".into(),
            OrderCreate {
                student_id: "u1".into(),
                vendor_id: "v1".into(),
                items: vec![line("m1", 1500, 1)],
                delivery_address: "Fajuyi Hall, Block 4".into(),
            },
        )
        .unwrap();
        order.rider_id = Some("r1".into());

        assert!(!order.matches(&OrderQuery::InTransitWith("r1".into())));
        order.status = OrderStatus::OutForDelivery;
        assert!(order.matches(&OrderQuery::InTransitWith("r1".into())));
        assert!(!order.matches(&OrderQuery::InTransitWith("r2".into())));
    }
}
