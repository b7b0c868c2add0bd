//! # Restaurant Actor
//!
//! Holds the restaurants and the ids of the orders each one has been notified of.
//! Status changes a restaurant makes go through the order registry from the caller's side,
//! see [`RestaurantClient::confirm_order`](crate::clients::RestaurantClient::confirm_order).

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::RestaurantClient;
use crate::framework::ResourceActor;
use crate::model::Restaurant;

/// Creates a new Restaurant actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, RestaurantClient::new(generic_client))
}
