use crate::clients::actor_client::ActorClient;
use crate::clients::OrderClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderId, OrderStatus, User, UserId, UserUpdate};
use crate::order_actor::OrderError;
use crate::user_actor::{UserAction, UserError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn register_user(&self, user: User) -> Result<UserId, UserError> {
        debug!(?user, "register_user called");
        self.inner.insert(user).await.map_err(UserError::from)
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        self.inner.update(id, update).await.map_err(UserError::from)
    }

    /// Appends `order` to the user's history. Returns `false` if it was already there.
    #[instrument(skip(self))]
    pub async fn record_order(&self, id: UserId, order: OrderId) -> Result<bool, UserError> {
        self.inner
            .perform_action(id, UserAction::RecordOrder(order))
            .await
            .map_err(UserError::from)
    }

    #[instrument(skip(self))]
    pub async fn order_history(&self, id: UserId) -> Result<Vec<OrderId>, UserError> {
        Ok(self.get_user(id).await?.order_history)
    }

    /// Submits an order on behalf of user `id`.
    ///
    /// The registry records the order in this user's history once it accepts it.
    ///
    /// # Errors
    /// [`UserError::ValidationError`] if the order names a different customer; otherwise
    /// whatever [`OrderClient::add_order`] reports.
    #[instrument(skip(self, orders, order), fields(order_id = %order.id()))]
    pub async fn place_order(
        &self,
        orders: &OrderClient,
        id: UserId,
        order: Order,
    ) -> Result<OrderId, UserError> {
        if order.customer() != id {
            return Err(UserError::ValidationError(format!(
                "{} belongs to {}, not {id}",
                order.id(),
                order.customer()
            )));
        }
        info!(total = %order.total(), items = order.items().len(), "Placing order");
        Ok(orders.add_order(order).await?)
    }

    /// Current status of one of the user's own orders.
    ///
    /// # Errors
    /// `NotFound` for an order that is not in the user's history, even if it exists.
    #[instrument(skip(self, orders))]
    pub async fn track_order_status(
        &self,
        orders: &OrderClient,
        id: UserId,
        order: OrderId,
    ) -> Result<OrderStatus, UserError> {
        let user = self.get_user(id).await?;
        if !user.has_ordered(order) {
            return Err(OrderError::NotFound(order.to_string()).into());
        }
        Ok(orders.get_order(order).await?.status())
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::{Money, RestaurantId};

    fn alice() -> User {
        User::new(UserId(1), "Alice", "alice@example.com", "1 Main St")
    }

    #[tokio::test]
    async fn test_place_order_for_someone_else_is_rejected() {
        let orders_mock = MockClient::<Order>::new();
        let users_mock = MockClient::<User>::new();
        let orders = OrderClient::new(orders_mock.client());
        let users = UserClient::new(users_mock.client());

        let order = Order::new(OrderId(1), UserId(2), RestaurantId(1), Vec::new(), Money::ZERO).unwrap();
        let err = users.place_order(&orders, UserId(1), order).await.unwrap_err();

        assert!(matches!(err, UserError::ValidationError(_)));
        // Nothing reached the registry.
        orders_mock.verify();
        users_mock.verify();
    }

    #[tokio::test]
    async fn test_tracking_is_limited_to_own_history() {
        let mut users_mock = MockClient::<User>::new();
        let orders_mock = MockClient::<Order>::new();
        users_mock.expect_get(UserId(1)).return_ok(Some(alice()));

        let users = UserClient::new(users_mock.client());
        let orders = OrderClient::new(orders_mock.client());

        let err = users
            .track_order_status(&orders, UserId(1), OrderId(7))
            .await
            .unwrap_err();
        assert_eq!(err, UserError::Order(OrderError::NotFound("order_7".to_string())));
        users_mock.verify();
        orders_mock.verify();
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let mut users_mock = MockClient::<User>::new();
        users_mock.expect_get(UserId(5)).return_ok(None);

        let users = UserClient::new(users_mock.client());
        assert_eq!(
            users.order_history(UserId(5)).await.unwrap_err(),
            UserError::NotFound("user_5".to_string())
        );
    }
}
