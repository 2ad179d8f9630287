use crate::domain::OrderStatus;

/// Role-appropriate listing filters for orders.
#[derive(Debug, Clone)]
pub enum OrderQuery {
    /// Everything a student has ordered.
    ForStudent(String),
    /// Everything placed with a vendor, across all statuses.
    ForVendor(String),
    /// Every order currently in one status. Riders use
    /// `InStatus(ReadyForPickup)` as their available-deliveries feed.
    InStatus(OrderStatus),
    /// The deliveries a rider has accepted and not yet dropped off.
    InTransitWith(String),
}
