//! Custom actions for the Restaurant actor.

use crate::model::OrderId;

/// Custom actions for Restaurant entities.
#[derive(Debug, Clone)]
pub enum RestaurantAction {
    /// An order naming this restaurant entered the registry.
    /// Answers `false` for a repeated notification.
    ReceiveOrder(OrderId),
    /// The order was rejected after the notification went out.
    /// Answers `false` if the order was not in the list.
    ForgetOrder(OrderId),
}
