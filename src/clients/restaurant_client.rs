use crate::clients::actor_client::ActorClient;
use crate::clients::OrderClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{OrderId, OrderStatus, Restaurant, RestaurantId, RestaurantUpdate};
use crate::restaurant_actor::{RestaurantAction, RestaurantError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, restaurant), fields(restaurant_id = %restaurant.id))]
    pub async fn register_restaurant(&self, restaurant: Restaurant) -> Result<RestaurantId, RestaurantError> {
        debug!(?restaurant, "register_restaurant called");
        self.inner.insert(restaurant).await.map_err(RestaurantError::from)
    }

    #[instrument(skip(self))]
    pub async fn get_restaurant(&self, id: RestaurantId) -> Result<Restaurant, RestaurantError> {
        self.get(id)
            .await?
            .ok_or_else(|| RestaurantError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_restaurant(
        &self,
        id: RestaurantId,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, RestaurantError> {
        self.inner.update(id, update).await.map_err(RestaurantError::from)
    }

    /// Called by the order registry when an order naming this restaurant is accepted.
    #[instrument(skip(self))]
    pub async fn receive_order_notification(
        &self,
        id: RestaurantId,
        order: OrderId,
    ) -> Result<bool, RestaurantError> {
        self.inner
            .perform_action(id, RestaurantAction::ReceiveOrder(order))
            .await
            .map_err(RestaurantError::from)
    }

    /// Called by the order registry when it rejects an order it already announced.
    #[instrument(skip(self))]
    pub async fn forget_order(&self, id: RestaurantId, order: OrderId) -> Result<bool, RestaurantError> {
        self.inner
            .perform_action(id, RestaurantAction::ForgetOrder(order))
            .await
            .map_err(RestaurantError::from)
    }

    #[instrument(skip(self))]
    pub async fn received_orders(&self, id: RestaurantId) -> Result<Vec<OrderId>, RestaurantError> {
        Ok(self.get_restaurant(id).await?.orders)
    }

    /// Placed -> Confirmed.
    pub async fn confirm_order(
        &self,
        orders: &OrderClient,
        id: RestaurantId,
        order: OrderId,
    ) -> Result<OrderStatus, RestaurantError> {
        self.set_status(orders, id, order, OrderStatus::Confirmed).await
    }

    pub async fn start_preparing(
        &self,
        orders: &OrderClient,
        id: RestaurantId,
        order: OrderId,
    ) -> Result<OrderStatus, RestaurantError> {
        self.set_status(orders, id, order, OrderStatus::Preparing).await
    }

    /// Gives the food to the rider.
    pub async fn hand_over(
        &self,
        orders: &OrderClient,
        id: RestaurantId,
        order: OrderId,
    ) -> Result<OrderStatus, RestaurantError> {
        self.set_status(orders, id, order, OrderStatus::OutForDelivery).await
    }

    pub async fn cancel(
        &self,
        orders: &OrderClient,
        id: RestaurantId,
        order: OrderId,
    ) -> Result<OrderStatus, RestaurantError> {
        self.set_status(orders, id, order, OrderStatus::Cancelled).await
    }

    /// Updates an order this restaurant owns and returns its previous status.
    #[instrument(skip(self, orders))]
    async fn set_status(
        &self,
        orders: &OrderClient,
        id: RestaurantId,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<OrderStatus, RestaurantError> {
        let snapshot = orders.get_order(order).await?;
        if snapshot.restaurant() != id {
            return Err(RestaurantError::NotOwner {
                restaurant: id.to_string(),
                order: order.to_string(),
            });
        }
        let previous = orders.update_status(order, status).await?;
        info!(from = %previous, to = %status, "Order status changed by restaurant");
        Ok(previous)
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RestaurantError::from(e)
    }
}
