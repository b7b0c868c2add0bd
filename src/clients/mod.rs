//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Participant clients never hold an [`OrderClient`]. Operations a participant starts on an
//! order (placing it, confirming it, delivering it) take the registry's client as an
//! argument and run in the caller's task.

pub mod actor_client;
pub mod order_client;
pub mod restaurant_client;
pub mod rider_client;
pub mod user_client;

pub use actor_client::*;
pub use order_client::*;
pub use restaurant_client::*;
pub use rider_client::*;
pub use user_client::*;
