use crate::clients::actor_client::ActorClient;
use crate::clients::OrderClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{OrderId, OrderStatus, Rider, RiderId, RiderUpdate};
use crate::order_actor::OrderError;
use crate::rider_actor::{RiderAction, RiderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Rider actor.
#[derive(Clone)]
pub struct RiderClient {
    inner: ResourceClient<Rider>,
}

impl RiderClient {
    pub fn new(inner: ResourceClient<Rider>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, rider), fields(rider_id = %rider.id))]
    pub async fn register_rider(&self, rider: Rider) -> Result<RiderId, RiderError> {
        debug!(?rider, "register_rider called");
        self.inner.insert(rider).await.map_err(RiderError::from)
    }

    #[instrument(skip(self))]
    pub async fn get_rider(&self, id: RiderId) -> Result<Rider, RiderError> {
        self.get(id)
            .await?
            .ok_or_else(|| RiderError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_rider(&self, id: RiderId, update: RiderUpdate) -> Result<Rider, RiderError> {
        self.inner.update(id, update).await.map_err(RiderError::from)
    }

    /// Called by the order registry when `order` is assigned to this rider.
    #[instrument(skip(self))]
    pub async fn receive_order_notification(&self, id: RiderId, order: OrderId) -> Result<bool, RiderError> {
        self.act(id, RiderAction::AssignOrder(order)).await
    }

    /// Called by the order registry when `order` is reassigned away from this rider.
    #[instrument(skip(self))]
    pub async fn release_order(&self, id: RiderId, order: OrderId) -> Result<bool, RiderError> {
        self.act(id, RiderAction::ReleaseOrder(order)).await
    }

    #[instrument(skip(self))]
    pub async fn assigned_orders(&self, id: RiderId) -> Result<Vec<OrderId>, RiderError> {
        Ok(self.get_rider(id).await?.assigned_orders)
    }

    #[instrument(skip(self))]
    pub async fn completed_deliveries(&self, id: RiderId) -> Result<Vec<OrderId>, RiderError> {
        Ok(self.get_rider(id).await?.completed_deliveries)
    }

    /// Sets the status of an order the rider is carrying. Returns the previous status.
    ///
    /// The registry checks the assignment while it applies the update.
    ///
    /// # Errors
    /// [`RiderError::NotAssigned`] unless `order` is assigned to this rider.
    #[instrument(skip(self, orders))]
    pub async fn update_order_status(
        &self,
        orders: &OrderClient,
        id: RiderId,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<OrderStatus, RiderError> {
        let previous = orders
            .update_status_as_rider(order, id, status)
            .await
            .map_err(from_order_error)?;
        info!(from = %previous, to = %status, "Order status changed by rider");
        Ok(previous)
    }

    /// Moves `order` to the rider's completed deliveries and marks it delivered.
    ///
    /// The rider's own lists change first; the order is only touched if that succeeds.
    /// If the order then refuses the update (it was reassigned meanwhile), the delivery is
    /// withdrawn again.
    #[instrument(skip(self, orders))]
    pub async fn complete_delivery(
        &self,
        orders: &OrderClient,
        id: RiderId,
        order: OrderId,
    ) -> Result<(), RiderError> {
        self.act(id, RiderAction::CompleteDelivery(order)).await?;
        if let Err(e) = self.update_order_status(orders, id, order, OrderStatus::Delivered).await {
            if let Err(undo) = self.act(id, RiderAction::WithdrawDelivery(order)).await {
                warn!(error = %undo, "Could not withdraw delivery");
            }
            return Err(e);
        }
        info!("Delivery completed");
        Ok(())
    }

    async fn act(&self, id: RiderId, action: RiderAction) -> Result<bool, RiderError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(RiderError::from)
    }
}

fn from_order_error(e: OrderError) -> RiderError {
    match e {
        OrderError::RiderNotAssigned { order, rider } => RiderError::NotAssigned { rider, order },
        other => RiderError::Order(other),
    }
}

#[async_trait]
impl ActorClient<Rider> for RiderClient {
    type Error = RiderError;

    fn inner(&self) -> &ResourceClient<Rider> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RiderError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::Order;
    use crate::order_actor::OrderActionResult;

    fn not_assigned(rider: u32, order: u32) -> FrameworkError {
        FrameworkError::EntityError(Box::new(OrderError::RiderNotAssigned {
            order: OrderId(order).to_string(),
            rider: RiderId(rider).to_string(),
        }))
    }

    #[tokio::test]
    async fn test_unassigned_rider_cannot_update_status() {
        let riders_mock = MockClient::<Rider>::new();
        let mut orders_mock = MockClient::<Order>::new();
        orders_mock.expect_action(OrderId(2)).return_err(not_assigned(1, 2));

        let riders = RiderClient::new(riders_mock.client());
        let orders = OrderClient::new(orders_mock.client());

        let err = riders
            .update_order_status(&orders, RiderId(1), OrderId(2), OrderStatus::OutForDelivery)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RiderError::NotAssigned {
                rider: "rider_1".to_string(),
                order: "order_2".to_string()
            }
        );
        riders_mock.verify();
        orders_mock.verify();
    }

    #[tokio::test]
    async fn test_complete_delivery_updates_rider_then_order() {
        let mut riders_mock = MockClient::<Rider>::new();
        let mut orders_mock = MockClient::<Order>::new();
        riders_mock.expect_action(RiderId(1)).return_ok(true);
        orders_mock
            .expect_action(OrderId(2))
            .return_ok(OrderActionResult::StatusUpdated {
                previous: OrderStatus::OutForDelivery,
            });

        let riders = RiderClient::new(riders_mock.client());
        let orders = OrderClient::new(orders_mock.client());

        riders
            .complete_delivery(&orders, RiderId(1), OrderId(2))
            .await
            .unwrap();
        riders_mock.verify();
        orders_mock.verify();
    }

    #[tokio::test]
    async fn test_refused_delivery_leaves_order_untouched() {
        let mut riders_mock = MockClient::<Rider>::new();
        let orders_mock = MockClient::<Order>::new();
        riders_mock
            .expect_action(RiderId(1))
            .return_err(FrameworkError::EntityError(Box::new(RiderError::NotAssigned {
                rider: "rider_1".to_string(),
                order: "order_2".to_string(),
            })));

        let riders = RiderClient::new(riders_mock.client());
        let orders = OrderClient::new(orders_mock.client());

        let err = riders
            .complete_delivery(&orders, RiderId(1), OrderId(2))
            .await
            .unwrap_err();
        assert!(matches!(err, RiderError::NotAssigned { .. }));
        // No status update reached the registry.
        riders_mock.verify();
        orders_mock.verify();
    }

    #[tokio::test]
    async fn test_delivery_is_withdrawn_when_order_was_reassigned() {
        let mut riders_mock = MockClient::<Rider>::new();
        let mut orders_mock = MockClient::<Order>::new();
        // CompleteDelivery, then WithdrawDelivery
        riders_mock.expect_action(RiderId(1)).return_ok(true);
        riders_mock.expect_action(RiderId(1)).return_ok(true);
        orders_mock.expect_action(OrderId(2)).return_err(not_assigned(1, 2));

        let riders = RiderClient::new(riders_mock.client());
        let orders = OrderClient::new(orders_mock.client());

        let err = riders
            .complete_delivery(&orders, RiderId(1), OrderId(2))
            .await
            .unwrap_err();
        assert!(matches!(err, RiderError::NotAssigned { .. }));
        riders_mock.verify();
        orders_mock.verify();
    }
}
