//! Error types for the Order actor.

use crate::framework::FrameworkError;
use crate::restaurant_actor::RestaurantError;
use crate::rider_actor::RiderError;
use crate::user_actor::UserError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A value was out of range (negative price, unknown status text).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested order is not in the registry.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order has no item with the given id.
    #[error("Item {item} not found in {order}")]
    ItemNotFound { order: String, item: String },

    /// The customer, restaurant or rider an order refers to is not registered.
    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),

    /// A rider tried to act on an order that is not assigned to them.
    #[error("{order} is not assigned to {rider}")]
    RiderNotAssigned { order: String, rider: String },

    /// An order with the same id is already in the registry.
    #[error("Duplicate order id: {0}")]
    DuplicateId(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => OrderError::DuplicateId(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<UserError> for OrderError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(id) => OrderError::ParticipantNotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<RestaurantError> for OrderError {
    fn from(e: RestaurantError) -> Self {
        match e {
            RestaurantError::NotFound(id) => OrderError::ParticipantNotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<RiderError> for OrderError {
    fn from(e: RiderError) -> Self {
        match e {
            RiderError::NotFound(id) => OrderError::ParticipantNotFound(id),
            RiderError::NotAssigned { rider, order } => OrderError::RiderNotAssigned { order, rider },
            RiderError::Order(inner) => inner,
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
