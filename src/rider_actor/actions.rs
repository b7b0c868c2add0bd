//! Custom actions for the Rider actor.

use crate::model::OrderId;

/// Custom actions for Rider entities.
///
/// Every variant answers whether the rider's lists actually changed.
#[derive(Debug, Clone)]
pub enum RiderAction {
    /// The registry assigned an order to this rider.
    AssignOrder(OrderId),
    /// The order was reassigned to someone else.
    ReleaseOrder(OrderId),
    /// Moves an assigned order to the completed list.
    ///
    /// # Errors
    /// `NotAssigned` if the rider does not hold the order.
    CompleteDelivery(OrderId),
    /// Takes a completed delivery back when the order could not be marked delivered.
    WithdrawDelivery(OrderId),
}
