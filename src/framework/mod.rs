//! Generic actor framework for resource management.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a map of entities
//! - [`ResourceClient`] - Typed, cloneable handle to an actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test an actor against scripted dependencies.

pub mod core;
pub mod mock;

pub use self::core::*;
