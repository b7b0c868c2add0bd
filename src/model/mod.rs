//! Pure data structures managed by the actors.
//!
//! Nothing in here talks to a channel: an [`Order`] can be built, mutated and tested
//! synchronously. The `*_actor` modules wrap these types in
//! [`ActorEntity`](crate::framework::ActorEntity) implementations.

pub mod item;
pub mod money;
pub mod order;
pub mod restaurant;
pub mod rider;
pub mod user;

pub use item::*;
pub use money::*;
pub use order::*;
pub use restaurant::*;
pub use rider::*;
pub use user::*;
