//! Error types for the Rider actor.

use crate::framework::FrameworkError;
use crate::order_actor::OrderError;
use thiserror::Error;

/// Errors that can occur during rider operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RiderError {
    /// The requested rider was not found.
    #[error("Rider not found: {0}")]
    NotFound(String),

    /// A rider with the same id is already registered.
    #[error("Rider already exists: {0}")]
    AlreadyExists(String),

    /// The rider data provided is invalid.
    #[error("Rider validation error: {0}")]
    ValidationError(String),

    /// The rider tried to act on an order that is not assigned to them.
    #[error("{order} is not assigned to {rider}")]
    NotAssigned { rider: String, order: String },

    /// A call into the order registry on the rider's behalf failed.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RiderError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<RiderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => RiderError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => RiderError::AlreadyExists(id),
            Err(other) => RiderError::ActorCommunicationError(other.to_string()),
        }
    }
}
