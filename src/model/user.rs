use crate::model::OrderId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// A registered customer.
///
/// `order_history` holds ids only; the orders themselves stay in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub order_history: Vec<OrderId>,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl User {
    /// Creates a new User with an empty order history.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            address: address.into(),
            order_history: Vec::new(),
        }
    }

    /// Appends `order` to the history unless it is already there.
    pub fn record_order(&mut self, order: OrderId) -> bool {
        if self.order_history.contains(&order) {
            return false;
        }
        self.order_history.push(order);
        true
    }

    pub fn has_ordered(&self, order: OrderId) -> bool {
        self.order_history.contains(&order)
    }
}
