//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the actors of one system.
//!
//! 1. **Actor Creation**: every actor is built with the mailbox bound from [`SystemConfig`].
//! 2. **Dependency Injection**: the order actor receives the participant clients via `run(context)`.
//! 3. **Graceful Shutdown**: [`OrderSystem::shutdown`] drops the clients and awaits each task.
//!
//! [`setup_tracing`] installs the log subscriber; call it once per process.

pub mod config;
pub mod order_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use config::*;
pub use order_system::*;
