//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! The format is compact and hides the module prefix (`with_target(false)`); actor events
//! carry an `entity_type` field instead. Levels come from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and the final store size
//! - **Entity Operations**: Insert, Get, Update, Delete and custom Actions
//! - **Client Calls**: one span per client method, with its ids as fields
//! - **Anomalies**: duplicate ids, total mismatches, leaving a terminal status
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Full payloads: orders, items and updates are logged with `?value` at debug level
//! RUST_LOG=debug cargo run
//!
//! # Only the actor loop
//! RUST_LOG=food_delivery::framework=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! Placing an order with `RUST_LOG=info`:
//!
//! ```text
//! INFO place_order: Placing order total=$12.50 items=2 order_id=order_1
//! INFO place_order:add_order: Sending add_order to actor order_id=order_1
//! INFO New order received restaurant_id=restaurant_1 order_id=order_1 pending=1
//! INFO Action ok entity_type="Restaurant" id=restaurant_1
//! INFO Action ok entity_type="User" id=user_1
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```
//!
//! The user and restaurant events are emitted while the order actor runs `on_create`,
//! before the order itself is stored.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// # Panics
/// If a global subscriber is already set. Tests should not call this.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type replaces module paths
        .compact()
        .init();
}
