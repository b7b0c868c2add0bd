//! [`ActorEntity`] implementation for [`Rider`].

use super::actions::RiderAction;
use super::RiderError;
use crate::framework::ActorEntity;
use crate::model::{Rider, RiderId, RiderUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Rider {
    type Id = RiderId;
    type Update = RiderUpdate;
    type Action = RiderAction;
    type ActionResult = bool;
    type Context = ();
    type Error = RiderError;

    fn id(&self) -> &RiderId {
        &self.id
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), RiderError> {
        if self.name.trim().is_empty() {
            return Err(RiderError::ValidationError("name must not be empty".to_string()));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: RiderUpdate, _ctx: &()) -> Result<(), RiderError> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(RiderError::ValidationError("name must not be empty".to_string()));
            }
            self.name = name;
        }
        if let Some(vehicle_type) = update.vehicle_type {
            self.vehicle_type = vehicle_type;
        }
        Ok(())
    }

    /// # Actions
    /// - `AssignOrder`: idempotent, `false` if already assigned
    /// - `ReleaseOrder`: `false` if the order was not assigned
    /// - `CompleteDelivery`: fails unless the order is assigned
    /// - `WithdrawDelivery`: `false` if the order was not completed
    async fn handle_action(&mut self, action: RiderAction, _ctx: &()) -> Result<bool, RiderError> {
        match action {
            RiderAction::AssignOrder(order_id) => Ok(self.assign(order_id)),
            RiderAction::ReleaseOrder(order_id) => Ok(self.release(order_id)),
            RiderAction::CompleteDelivery(order_id) => {
                if !self.complete(order_id) {
                    return Err(RiderError::NotAssigned {
                        rider: self.id.to_string(),
                        order: order_id.to_string(),
                    });
                }
                Ok(true)
            }
            RiderAction::WithdrawDelivery(order_id) => Ok(self.withdraw_delivery(order_id)),
        }
    }
}
