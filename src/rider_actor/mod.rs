//! # Rider Actor
//!
//! Tracks which orders each rider is carrying and which they have delivered.
//! The order registry drives `AssignOrder` / `ReleaseOrder`; the rider drives
//! `CompleteDelivery` through [`RiderClient::complete_delivery`](crate::clients::RiderClient::complete_delivery).

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::RiderClient;
use crate::framework::ResourceActor;
use crate::model::Rider;

/// Creates a new Rider actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Rider>, RiderClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, RiderClient::new(generic_client))
}
