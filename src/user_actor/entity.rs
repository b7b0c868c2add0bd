//! [`ActorEntity`] implementation for [`User`].
//!
//! See the trait implementation on [`User`] for method documentation.

use super::actions::UserAction;
use super::UserError;
use crate::framework::ActorEntity;
use crate::model::{User, UserId, UserUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = bool;
    type Context = ();
    type Error = UserError;

    fn id(&self) -> &UserId {
        &self.id
    }

    /// Rejects users without a name or with an email that has no `@`.
    async fn on_create(&mut self, _ctx: &()) -> Result<(), UserError> {
        validate_name(&self.name)?;
        validate_email(&self.email)
    }

    /// Handles updates to the User entity.
    ///
    /// # Fields Updated
    /// - `name`: User's display name
    /// - `email`: User's email address
    /// - `address`: Delivery address
    ///
    /// All fields are validated before any of them is applied.
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(email) = &update.email {
            validate_email(email)?;
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: UserAction, _ctx: &()) -> Result<bool, UserError> {
        match action {
            UserAction::RecordOrder(order_id) => Ok(self.record_order(order_id)),
        }
    }
}

fn validate_name(name: &str) -> Result<(), UserError> {
    if name.trim().is_empty() {
        return Err(UserError::ValidationError("name must not be empty".to_string()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), UserError> {
    if !email.contains('@') {
        return Err(UserError::ValidationError(format!("invalid email '{email}'")));
    }
    Ok(())
}
