//! Custom actions for the User actor.

use crate::model::OrderId;

/// Custom actions for User entities.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Appends an order to the user's history. Sent by the order registry when the
    /// user's order is accepted. Answers `false` if the order was already recorded.
    RecordOrder(OrderId),
}
