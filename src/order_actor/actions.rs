//! Custom actions for the Order actor.
//!
//! These are the registry's mutations by id. Each one runs inside the order actor, so two
//! callers touching the same order are applied one after the other.
//! They are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! in [`entity`](super::entity).

use crate::model::{ItemId, Order, OrderItem, OrderStatus, RiderId};

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Appends an item and recomputes the total.
    AddItem(OrderItem),
    /// Removes the first item with the given id.
    ///
    /// # Errors
    /// Fails with `ItemNotFound` if the order has no such item.
    RemoveItem(ItemId),
    /// Assigns a rider, replacing any previous one.
    ///
    /// The new rider is notified before the order changes; the previous rider is released.
    AssignRider(RiderId),
    /// Sets the status without checking the transition.
    UpdateStatus(OrderStatus),
    /// Like `UpdateStatus`, but only while `rider` is the order's rider.
    ///
    /// # Errors
    /// Fails with `RiderNotAssigned` otherwise; the status is left as it was.
    UpdateStatusAsRider { rider: RiderId, status: OrderStatus },
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// Snapshot of the order after the item was added.
    ItemAdded(Order),
    /// The item that was taken out.
    ItemRemoved(OrderItem),
    RiderAssigned { previous: Option<RiderId> },
    StatusUpdated { previous: OrderStatus },
}
