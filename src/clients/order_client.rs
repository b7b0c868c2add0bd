//! # Order Client
//!
//! The public face of the order registry. Lookups hand back snapshots; the registry stays
//! the only owner of each [`Order`].

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{ItemId, Order, OrderId, OrderItem, OrderStatus, RiderId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Participant validation and notifications happen in the Order actor's `on_create` hook.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Submits `order` to the registry, which takes ownership of it.
    ///
    /// # Errors
    /// - [`OrderError::DuplicateId`] if the id is taken. Nobody is notified in that case.
    /// - [`OrderError::ParticipantNotFound`] if the customer or restaurant is unknown.
    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    pub async fn add_order(&self, order: Order) -> Result<OrderId, OrderError> {
        debug!(?order, "add_order called");
        info!("Sending add_order to actor");
        self.inner.insert(order).await.map_err(OrderError::from)
    }

    /// Returns a snapshot of the order.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Adds an item and returns the updated snapshot.
    ///
    /// # Errors
    /// [`OrderError::InvalidArgument`] if the total would overflow; the order is unchanged.
    #[instrument(skip(self, item))]
    pub async fn add_item(&self, id: OrderId, item: OrderItem) -> Result<Order, OrderError> {
        match self.act(id, OrderAction::AddItem(item)).await? {
            OrderActionResult::ItemAdded(order) => Ok(order),
            other => Err(unexpected(other)),
        }
    }

    /// Removes the first item with `item_id` and returns it.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: OrderId, item_id: ItemId) -> Result<OrderItem, OrderError> {
        match self.act(id, OrderAction::RemoveItem(item_id)).await? {
            OrderActionResult::ItemRemoved(item) => Ok(item),
            other => Err(unexpected(other)),
        }
    }

    /// Assigns `rider` to the order and returns the rider it replaced, if any.
    #[instrument(skip(self))]
    pub async fn assign_rider(&self, id: OrderId, rider: RiderId) -> Result<Option<RiderId>, OrderError> {
        match self.act(id, OrderAction::AssignRider(rider)).await? {
            OrderActionResult::RiderAssigned { previous } => Ok(previous),
            other => Err(unexpected(other)),
        }
    }

    /// Sets the status and returns the previous one. Any transition is accepted.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<OrderStatus, OrderError> {
        match self.act(id, OrderAction::UpdateStatus(status)).await? {
            OrderActionResult::StatusUpdated { previous } => Ok(previous),
            other => Err(unexpected(other)),
        }
    }

    /// Sets the status on behalf of `rider` and returns the previous one.
    ///
    /// # Errors
    /// [`OrderError::RiderNotAssigned`] unless `rider` is the order's rider when the update runs.
    #[instrument(skip(self))]
    pub async fn update_status_as_rider(
        &self,
        id: OrderId,
        rider: RiderId,
        status: OrderStatus,
    ) -> Result<OrderStatus, OrderError> {
        match self.act(id, OrderAction::UpdateStatusAsRider { rider, status }).await? {
            OrderActionResult::StatusUpdated { previous } => Ok(previous),
            other => Err(unexpected(other)),
        }
    }

    /// Discards the order and returns it. Participants keep their ids of it.
    #[instrument(skip(self))]
    pub async fn remove_order(&self, id: OrderId) -> Result<Order, OrderError> {
        info!("Sending remove_order to actor");
        self.delete(id).await
    }

    async fn act(&self, id: OrderId, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(OrderError::from)
    }
}

fn unexpected(result: OrderActionResult) -> OrderError {
    OrderError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
