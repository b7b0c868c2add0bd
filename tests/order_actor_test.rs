use food_delivery::clients::{
    actor_client::ActorClient, OrderClient, RestaurantClient, RiderClient, UserClient,
};
use food_delivery::framework::{mock::MockClient, FrameworkError};
use food_delivery::model::{
    ItemId, Money, Order, OrderId, OrderItem, OrderStatus, Restaurant, RestaurantId, Rider, RiderId, User,
    UserId,
};
use food_delivery::order_actor::{self, OrderContext, OrderError};
use tokio::task::JoinHandle;

/// Mocked participants around a real order actor.
struct Harness {
    users: MockClient<User>,
    restaurants: MockClient<Restaurant>,
    riders: MockClient<Rider>,
}

impl Harness {
    fn new() -> Self {
        Self {
            users: MockClient::new(),
            restaurants: MockClient::new(),
            riders: MockClient::new(),
        }
    }

    fn start(&self) -> (OrderClient, JoinHandle<()>) {
        let (actor, client) = order_actor::new(8);
        let context = OrderContext {
            users: UserClient::new(self.users.client()),
            restaurants: RestaurantClient::new(self.restaurants.client()),
            riders: RiderClient::new(self.riders.client()),
        };
        (client, tokio::spawn(actor.run(context)))
    }

    /// Scripts the calls `on_create` makes for a valid order by user 1 at restaurant 1.
    fn expect_placement(&mut self) {
        self.users
            .expect_get(UserId(1))
            .return_ok(Some(User::new(UserId(1), "Alice", "alice@example.com", "1 Main St")));
        self.restaurants
            .expect_get(RestaurantId(1))
            .return_ok(Some(Restaurant::new(RestaurantId(1), "Luigi's", "9 Harbour Rd")));
        self.restaurants.expect_action(RestaurantId(1)).return_ok(true);
        self.users.expect_action(UserId(1)).return_ok(true);
    }

    fn verify(&self) {
        self.users.verify();
        self.restaurants.verify();
        self.riders.verify();
    }
}

fn order(id: u32) -> Order {
    let items = vec![
        OrderItem::new("A", Money::from_cents(500), ItemId(1)).unwrap(),
        OrderItem::new("B", Money::from_cents(750), ItemId(2)).unwrap(),
    ];
    Order::new(OrderId(id), UserId(1), RestaurantId(1), items, Money::from_cents(1250)).unwrap()
}

/// Real Order actor with mocked User, Restaurant and Rider dependencies.
/// on_create validates both participants and notifies them.
#[tokio::test]
async fn test_order_actor_notifies_participants_on_create() {
    let mut harness = Harness::new();
    harness.expect_placement();
    let (orders, actor_handle) = harness.start();

    let id = orders.add_order(order(1)).await.expect("Order creation failed");
    assert_eq!(id, OrderId(1));

    let stored = orders.get(id).await.unwrap().expect("Order not found");
    assert_eq!(stored.total(), Money::from_cents(1250));
    harness.verify();

    drop(orders);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_duplicate_is_rejected_before_any_notification() {
    let mut harness = Harness::new();
    harness.expect_placement();
    let (orders, actor_handle) = harness.start();

    orders.add_order(order(1)).await.unwrap();
    // No further expectations: a second notification would show up in verify().
    assert_eq!(
        orders.add_order(order(1)).await.unwrap_err(),
        OrderError::DuplicateId("order_1".to_string())
    );
    harness.verify();

    drop(orders);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_customer_aborts_create() {
    let mut harness = Harness::new();
    harness.users.expect_get(UserId(1)).return_ok(None);
    let (orders, actor_handle) = harness.start();

    assert_eq!(
        orders.add_order(order(1)).await.unwrap_err(),
        OrderError::ParticipantNotFound("user_1".to_string())
    );
    assert!(orders.get(OrderId(1)).await.unwrap().is_none());
    harness.verify();

    drop(orders);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_customer_notification_rolls_back_restaurant() {
    let mut harness = Harness::new();
    harness
        .users
        .expect_get(UserId(1))
        .return_ok(Some(User::new(UserId(1), "Alice", "alice@example.com", "1 Main St")));
    harness
        .restaurants
        .expect_get(RestaurantId(1))
        .return_ok(Some(Restaurant::new(RestaurantId(1), "Luigi's", "9 Harbour Rd")));
    harness.restaurants.expect_action(RestaurantId(1)).return_ok(true);
    harness
        .users
        .expect_action(UserId(1))
        .return_err(FrameworkError::NotFound("user_1".to_string()));
    // The restaurant is told to forget the order again.
    harness.restaurants.expect_action(RestaurantId(1)).return_ok(true);
    let (orders, actor_handle) = harness.start();

    assert_eq!(
        orders.add_order(order(1)).await.unwrap_err(),
        OrderError::ParticipantNotFound("user_1".to_string())
    );
    assert!(matches!(
        orders.get_order(OrderId(1)).await,
        Err(OrderError::NotFound(_))
    ));
    harness.verify();

    drop(orders);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_only_assigned_rider_can_update_status() {
    let mut harness = Harness::new();
    harness.expect_placement();
    harness.riders.expect_action(RiderId(1)).return_ok(true);
    let (orders, actor_handle) = harness.start();

    orders.add_order(order(1)).await.unwrap();
    orders.assign_rider(OrderId(1), RiderId(1)).await.unwrap();

    assert_eq!(
        orders
            .update_status_as_rider(OrderId(1), RiderId(2), OrderStatus::Delivered)
            .await
            .unwrap_err(),
        OrderError::RiderNotAssigned {
            order: "order_1".to_string(),
            rider: "rider_2".to_string(),
        }
    );
    assert_eq!(orders.get_order(OrderId(1)).await.unwrap().status(), OrderStatus::Placed);

    assert_eq!(
        orders
            .update_status_as_rider(OrderId(1), RiderId(1), OrderStatus::OutForDelivery)
            .await
            .unwrap(),
        OrderStatus::Placed
    );
    harness.verify();

    drop(orders);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_reassignment_notifies_new_rider_then_releases_old() {
    let mut harness = Harness::new();
    harness.expect_placement();
    harness.riders.expect_action(RiderId(1)).return_ok(true);
    harness.riders.expect_action(RiderId(2)).return_ok(true);
    harness.riders.expect_action(RiderId(1)).return_ok(true);
    let (orders, actor_handle) = harness.start();

    orders.add_order(order(1)).await.unwrap();
    assert_eq!(orders.assign_rider(OrderId(1), RiderId(1)).await.unwrap(), None);
    assert_eq!(
        orders.assign_rider(OrderId(1), RiderId(2)).await.unwrap(),
        Some(RiderId(1))
    );
    assert_eq!(orders.get_order(OrderId(1)).await.unwrap().rider(), Some(RiderId(2)));
    harness.verify();

    drop(orders);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_release_does_not_undo_reassignment() {
    let mut harness = Harness::new();
    harness.expect_placement();
    harness.riders.expect_action(RiderId(1)).return_ok(true);
    harness.riders.expect_action(RiderId(2)).return_ok(true);
    harness
        .riders
        .expect_action(RiderId(1))
        .return_err(FrameworkError::NotFound("rider_1".to_string()));
    let (orders, actor_handle) = harness.start();

    orders.add_order(order(1)).await.unwrap();
    orders.assign_rider(OrderId(1), RiderId(1)).await.unwrap();
    orders.assign_rider(OrderId(1), RiderId(2)).await.unwrap();
    assert_eq!(orders.get_order(OrderId(1)).await.unwrap().rider(), Some(RiderId(2)));
    harness.verify();

    drop(orders);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_removed_order_is_gone() {
    let mut harness = Harness::new();
    harness.expect_placement();
    let (orders, actor_handle) = harness.start();

    orders.add_order(order(1)).await.unwrap();
    let removed = orders.remove_order(OrderId(1)).await.unwrap();
    assert_eq!(removed.items().len(), 2);
    assert!(matches!(
        orders.get_order(OrderId(1)).await,
        Err(OrderError::NotFound(_))
    ));
    harness.verify();

    drop(orders);
    actor_handle.await.unwrap();
}
