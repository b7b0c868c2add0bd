//! [`ActorEntity`] implementation for [`Order`].
//!
//! The hooks here are where the registry talks to the participant actors:
//! - `on_create` checks that the customer and restaurant exist, then notifies both. If the
//!   customer cannot be notified the restaurant's notification is withdrawn.
//! - `AssignRider` notifies the new rider and releases the previous one.
//! - `UpdateStatusAsRider` checks the rider inside the actor, so a reassignment cannot slip
//!   between the check and the update.
//!
//! Calls only go outwards (order actor to participant actors), never back.

use super::actions::{OrderAction, OrderActionResult};
use super::OrderError;
use crate::clients::{RestaurantClient, RiderClient, UserClient};
use crate::framework::ActorEntity;
use crate::model::{Order, OrderId};
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::{debug, warn};

/// Dependencies injected into the order actor.
#[derive(Clone)]
pub struct OrderContext {
    pub users: UserClient,
    pub restaurants: RestaurantClient,
    pub riders: RiderClient,
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    // Orders change through actions only.
    type Update = Infallible;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Validates the participants and delivers the placement notifications.
    ///
    /// Runs after the duplicate-id check, so a rejected duplicate notifies nobody.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let order_id = self.id();
        ctx.users.get_user(self.customer()).await?;
        ctx.restaurants.get_restaurant(self.restaurant()).await?;
        debug!(%order_id, customer = %self.customer(), restaurant = %self.restaurant(), "Participants validated");

        ctx.restaurants
            .receive_order_notification(self.restaurant(), order_id)
            .await?;
        if let Err(e) = ctx.users.record_order(self.customer(), order_id).await {
            if let Err(undo) = ctx.restaurants.forget_order(self.restaurant(), order_id).await {
                warn!(%order_id, restaurant = %self.restaurant(), error = %undo, "Could not withdraw restaurant notification");
            }
            return Err(e.into());
        }
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &OrderContext) -> Result<(), OrderError> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::AddItem(item) => {
                self.add_item(item)?;
                Ok(OrderActionResult::ItemAdded(self.clone()))
            }
            OrderAction::RemoveItem(item_id) => {
                let removed = self.remove_item(item_id)?;
                Ok(OrderActionResult::ItemRemoved(removed))
            }
            OrderAction::AssignRider(rider) => {
                let order_id = self.id();
                // An unknown rider fails here and the order keeps its old rider.
                ctx.riders.receive_order_notification(rider, order_id).await?;
                let previous = self.assign_rider(rider);

                if let Some(old) = previous.filter(|old| *old != rider) {
                    if let Err(e) = ctx.riders.release_order(old, order_id).await {
                        warn!(%order_id, rider = %old, error = %e, "Could not release previous rider");
                    }
                }
                Ok(OrderActionResult::RiderAssigned { previous })
            }
            OrderAction::UpdateStatus(status) => {
                let previous = self.update_status(status);
                Ok(OrderActionResult::StatusUpdated { previous })
            }
            OrderAction::UpdateStatusAsRider { rider, status } => {
                if self.rider() != Some(rider) {
                    return Err(OrderError::RiderNotAssigned {
                        order: self.id().to_string(),
                        rider: rider.to_string(),
                    });
                }
                let previous = self.update_status(status);
                Ok(OrderActionResult::StatusUpdated { previous })
            }
        }
    }
}
