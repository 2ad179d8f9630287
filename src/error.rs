use thiserror::Error;

use crate::domain::{OrderStatus, UserRole};

/// Login failures. The original mock swallowed these in a console log; here
/// they surface to the caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("no {role} account registered for {email}")]
    NotFound { email: String, role: UserRole },
    #[error("user service unavailable")]
    ActorClosed,
}

/// Errors from user directory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("user not found: {0}")]
    NotFound(String),
    #[error("user service unavailable")]
    ActorClosed,
}

/// Errors from vendor directory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VendorError {
    #[error("vendor not found: {0}")]
    NotFound(String),
    #[error("vendor service unavailable")]
    ActorClosed,
}

/// Errors from menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("menu item not found: {0}")]
    NotFound(String),
    #[error("menu service unavailable")]
    ActorClosed,
}

/// Errors from order placement and lifecycle operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("order not found: {0}")]
    NotFound(String),
    #[error("cannot place an order with an empty cart")]
    EmptyCart,
    #[error("no student account with id {0}")]
    InvalidStudent(String),
    #[error("unknown vendor: {0}")]
    UnknownVendor(String),
    #[error("vendor {0} is currently closed")]
    VendorClosed(String),
    #[error("no transition from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
    #[error("transition not permitted: {0}")]
    UnauthorizedTransition(String),
    #[error("order service unavailable")]
    ActorClosed,
}
