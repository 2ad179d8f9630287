use std::fmt;

use chrono::{DateTime, Utc};

use super::cart::CartItem;
use super::user::UserRole;
use crate::error::OrderError;

/// Where an order is in its life.
///
/// The walk is linear: Pending, Preparing, Ready for Pickup, Out for
/// Delivery, Delivered. Cancelled is the one side exit, taken only from
/// Pending. Delivered and Cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Preparing,
    ReadyForPickup,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::ReadyForPickup => "Ready for Pickup",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        write!(f, "{label}")
    }
}

/// A placed order, from checkout through delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub student_id: String,
    pub vendor_id: String,
    /// Set when a rider accepts the delivery, never before.
    pub rider_id: Option<String>,
    pub items: Vec<CartItem>,
    /// Subtotal plus delivery fee, in whole currency units.
    pub total: u32,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub delivery_address: String,
}

/// Payload for creating a new order at checkout.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub student_id: String,
    pub vendor_id: String,
    pub items: Vec<CartItem>,
    pub delivery_address: String,
}

impl Order {
    /// Moves the order to `target`, checking the current status, the actor's
    /// role, and the edge's identity rules before touching anything.
    ///
    /// The edge table:
    /// - Pending -> Preparing, vendor accepts
    /// - Preparing -> Ready for Pickup, vendor finishes
    /// - Ready for Pickup -> Out for Delivery, rider accepts and is recorded
    ///   as the order's rider
    /// - Out for Delivery -> Delivered, only by the recorded rider
    /// - Pending -> Cancelled, only by the ordering student
    ///
    /// Every other pair is [`OrderError::InvalidTransition`]. Because the
    /// current status is re-read on each call, replaying a transition that
    /// already succeeded fails rather than silently advancing twice.
    pub fn apply_transition(
        &mut self,
        target: OrderStatus,
        actor_role: UserRole,
        actor_id: &str,
    ) -> Result<(), OrderError> {
        use OrderStatus::*;

        let required_role = match (self.status, target) {
            (Pending, Preparing) => UserRole::Vendor,
            (Preparing, ReadyForPickup) => UserRole::Vendor,
            (ReadyForPickup, OutForDelivery) => UserRole::Rider,
            (OutForDelivery, Delivered) => UserRole::Rider,
            (Pending, Cancelled) => UserRole::Student,
            (from, to) => return Err(OrderError::InvalidTransition { from, to }),
        };

        if actor_role != required_role {
            return Err(OrderError::UnauthorizedTransition(format!(
                "moving {} to {} takes a {}, not a {}",
                self.status, target, required_role, actor_role
            )));
        }

        match target {
            OutForDelivery => {
                self.rider_id = Some(actor_id.to_owned());
            }
            Delivered => {
                if self.rider_id.as_deref() != Some(actor_id) {
                    return Err(OrderError::UnauthorizedTransition(format!(
                        "order {} is carried by a different rider",
                        self.id
                    )));
                }
            }
            Cancelled => {
                if self.student_id != actor_id {
                    return Err(OrderError::UnauthorizedTransition(format!(
                        "order {} belongs to a different student",
                        self.id
                    )));
                }
            }
            _ => {}
        }

        self.status = target;
        Ok(())
    }
}
