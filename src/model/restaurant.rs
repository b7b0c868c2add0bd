use crate::model::OrderId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Restaurants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub u32);

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant_{}", self.0)
    }
}

/// A restaurant that receives orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    /// Orders this restaurant has been notified of, oldest first.
    pub orders: Vec<OrderId>,
}

/// Payload for updating an existing restaurant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
}

impl Restaurant {
    pub fn new(id: RestaurantId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            orders: Vec::new(),
        }
    }

    /// Records an incoming order. Repeated notifications for the same order are ignored.
    pub fn receive_order(&mut self, order: OrderId) -> bool {
        if self.orders.contains(&order) {
            return false;
        }
        self.orders.push(order);
        true
    }

    /// Withdraws a notification for an order the registry ended up rejecting.
    pub fn forget_order(&mut self, order: OrderId) -> bool {
        let before = self.orders.len();
        self.orders.retain(|received| *received != order);
        self.orders.len() != before
    }
}
