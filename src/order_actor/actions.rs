use crate::domain::{OrderStatus, UserRole};

/// Custom actions on an order beyond plain CRUD.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Advance the order along its lifecycle.
    ///
    /// The actor's role and id are checked against the requested edge; the
    /// pickup edge records the rider, the delivery edge demands the same
    /// rider, and cancellation demands the ordering student.
    Transition {
        target: OrderStatus,
        actor_role: UserRole,
        actor_id: String,
    },
}

/// Results from OrderActions - variants match 1:1 with OrderAction.
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// The order as it stands after the transition.
    Transitioned(crate::domain::Order),
}
