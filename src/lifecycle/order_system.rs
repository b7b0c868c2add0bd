use super::SystemConfig;
use crate::clients::{OrderClient, RestaurantClient, RiderClient, UserClient};
use crate::order_actor::OrderContext;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Failure while tearing the system down.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] JoinError),
}

/// One running food-delivery system: an order registry plus the participant stores.
///
/// # Architecture
///
/// - **User / Restaurant / Rider actors**: no dependencies (`Context = ()`)
/// - **Order actor**: the registry; its [`OrderContext`] holds the three participant clients
///
/// Calls only flow from the order actor to the participants, so the wiring has no cycles.
///
/// # Example
///
/// ```rust
/// use food_delivery::lifecycle::OrderSystem;
/// use food_delivery::model::{User, UserId};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderSystem::new();
///     system
///         .user_client
///         .register_user(User::new(UserId(1), "Alice", "alice@example.com", "1 Main St"))
///         .await?;
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderSystem {
    pub order_client: OrderClient,
    pub user_client: UserClient,
    pub restaurant_client: RestaurantClient,
    pub rider_client: RiderClient,

    /// Order actor first: the participants only stop once it has dropped its context.
    handles: Vec<JoinHandle<()>>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    /// Starts a system configured from the environment. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::from_env())
    }

    pub fn with_config(config: SystemConfig) -> Self {
        let capacity = config.channel_capacity;
        info!(capacity, "Starting order system");

        // 1. Create actors
        let (user_actor, user_client) = crate::user_actor::new(capacity);
        let (restaurant_actor, restaurant_client) = crate::restaurant_actor::new(capacity);
        let (rider_actor, rider_client) = crate::rider_actor::new(capacity);
        let (order_actor, order_client) = crate::order_actor::new(capacity);

        // 2. Start actors with injected context
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            users: user_client.clone(),
            restaurants: restaurant_client.clone(),
            riders: rider_client.clone(),
        }));
        let user_handle = tokio::spawn(user_actor.run(()));
        let restaurant_handle = tokio::spawn(restaurant_actor.run(()));
        let rider_handle = tokio::spawn(rider_actor.run(()));

        Self {
            order_client,
            user_client,
            restaurant_client,
            rider_client,
            handles: vec![order_handle, user_handle, restaurant_handle, rider_handle],
        }
    }

    /// Drops this system's clients and waits for every actor to finish.
    ///
    /// Clones of the clients held elsewhere keep their actors alive, so drop them first
    /// or this waits for them.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.user_client);
        drop(self.restaurant_client);
        drop(self.rider_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
