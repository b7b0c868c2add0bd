//! [`ActorEntity`] implementation for [`Restaurant`].

use super::actions::RestaurantAction;
use super::RestaurantError;
use crate::framework::ActorEntity;
use crate::model::{Restaurant, RestaurantId, RestaurantUpdate};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Update = RestaurantUpdate;
    type Action = RestaurantAction;
    type ActionResult = bool;
    type Context = ();
    type Error = RestaurantError;

    fn id(&self) -> &RestaurantId {
        &self.id
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), RestaurantError> {
        validate_name(&self.name)
    }

    async fn on_update(&mut self, update: RestaurantUpdate, _ctx: &()) -> Result<(), RestaurantError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: RestaurantAction, _ctx: &()) -> Result<bool, RestaurantError> {
        match action {
            RestaurantAction::ReceiveOrder(order_id) => {
                let fresh = self.receive_order(order_id);
                if fresh {
                    info!(restaurant_id = %self.id, %order_id, pending = self.orders.len(), "New order received");
                }
                Ok(fresh)
            }
            RestaurantAction::ForgetOrder(order_id) => Ok(self.forget_order(order_id)),
        }
    }
}

fn validate_name(name: &str) -> Result<(), RestaurantError> {
    if name.trim().is_empty() {
        return Err(RestaurantError::ValidationError("name must not be empty".to_string()));
    }
    Ok(())
}
