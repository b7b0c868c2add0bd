use crate::model::OrderId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Riders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiderId(pub u32);

impl Display for RiderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rider_{}", self.0)
    }
}

/// A delivery rider.
///
/// An order id sits in `assigned_orders` while the rider is responsible for it and moves
/// to `completed_deliveries` once delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rider {
    pub id: RiderId,
    pub name: String,
    pub vehicle_type: String,
    pub assigned_orders: Vec<OrderId>,
    pub completed_deliveries: Vec<OrderId>,
}

/// Payload for updating an existing rider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiderUpdate {
    pub name: Option<String>,
    pub vehicle_type: Option<String>,
}

impl Rider {
    pub fn new(id: RiderId, name: impl Into<String>, vehicle_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            vehicle_type: vehicle_type.into(),
            assigned_orders: Vec::new(),
            completed_deliveries: Vec::new(),
        }
    }

    pub fn is_assigned(&self, order: OrderId) -> bool {
        self.assigned_orders.contains(&order)
    }

    /// Takes on `order`. Repeated assignment of the same order is a no-op.
    pub fn assign(&mut self, order: OrderId) -> bool {
        if self.is_assigned(order) {
            return false;
        }
        self.assigned_orders.push(order);
        true
    }

    /// Drops `order` from the active list. Returns whether it was there.
    pub fn release(&mut self, order: OrderId) -> bool {
        let before = self.assigned_orders.len();
        self.assigned_orders.retain(|assigned| *assigned != order);
        self.assigned_orders.len() != before
    }

    /// Moves `order` from the active list to the completed list.
    /// Returns `false` (and changes nothing) if the order was not assigned.
    pub fn complete(&mut self, order: OrderId) -> bool {
        if !self.release(order) {
            return false;
        }
        self.completed_deliveries.push(order);
        true
    }

    /// Takes `order` back out of the completed list. Returns whether it was there.
    pub fn withdraw_delivery(&mut self, order: OrderId) -> bool {
        let before = self.completed_deliveries.len();
        self.completed_deliveries.retain(|done| *done != order);
        self.completed_deliveries.len() != before
    }
}
