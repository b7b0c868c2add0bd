//! # Food Delivery Order Core
//!
//! Orders, their items, and the customers, restaurants and riders around them, each kept in
//! its own Tokio actor.
//!
//! ## Architecture Notes
//!
//! ### 1. One store, one task
//! Every store is a [`ResourceActor`](framework::ResourceActor) that owns a `HashMap` and
//! processes requests sequentially, so no store needs a lock. The order registry is one such
//! actor; there is exactly one per [`OrderSystem`](lifecycle::OrderSystem).
//!
//! ### 2. Ids, not references
//! An [`Order`](model::Order) owns its items and names its customer, restaurant and rider by
//! id. Participants keep order ids. Lookups return snapshots.
//!
//! ### 3. Context injection
//! The order actor is started with the participant clients (`run(context)`) and calls them
//! from its hooks: on insertion it validates the customer and restaurant and notifies both,
//! on rider assignment it notifies the rider. Participant actors never call back.
//!
//! ### 4. Type-safe errors
//! Each actor has its own `thiserror` enum. Clients map
//! [`FrameworkError`](framework::FrameworkError) into it and recover entity errors by downcast.
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic actor, client and [`MockClient`](framework::mock::MockClient)
//! - [`model`]: plain data ([`Money`](model::Money), [`OrderItem`](model::OrderItem), [`Order`](model::Order), participants)
//! - [`clients`]: typed handles; the public API
//! - [`order_actor`], [`user_actor`], [`restaurant_actor`], [`rider_actor`]: entity impls, actions, errors
//! - [`lifecycle`]: [`OrderSystem`](lifecycle::OrderSystem), configuration and tracing setup
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod restaurant_actor;
pub mod rider_actor;
pub mod user_actor;
