//! Error types for the Restaurant actor.

use crate::framework::FrameworkError;
use crate::order_actor::OrderError;
use thiserror::Error;

/// Errors that can occur during restaurant operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// The requested restaurant was not found.
    #[error("Restaurant not found: {0}")]
    NotFound(String),

    /// A restaurant with the same id is already registered.
    #[error("Restaurant already exists: {0}")]
    AlreadyExists(String),

    /// The restaurant data provided is invalid.
    #[error("Restaurant validation error: {0}")]
    ValidationError(String),

    /// The order was placed with a different restaurant.
    #[error("{order} does not belong to {restaurant}")]
    NotOwner { restaurant: String, order: String },

    /// A call into the order registry on the restaurant's behalf failed.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RestaurantError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<RestaurantError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => RestaurantError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => RestaurantError::AlreadyExists(id),
            Err(other) => RestaurantError::ActorCommunicationError(other.to_string()),
        }
    }
}
