//! Walks one order from placement to delivery.

use food_delivery::lifecycle::{setup_tracing, OrderSystem};
use food_delivery::model::{
    ItemId, Money, Order, OrderId, OrderItem, Restaurant, RestaurantId, Rider, RiderId, User,
    UserId,
};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    info!("Starting food delivery demo");
    let system = OrderSystem::new();
    let orders = &system.order_client;

    let span = tracing::info_span!("registration");
    let (alice, pizzeria, sam) = async {
        let alice = system
            .user_client
            .register_user(User::new(UserId(1), "Alice", "alice@example.com", "1 Main St"))
            .await?;
        let pizzeria = system
            .restaurant_client
            .register_restaurant(Restaurant::new(RestaurantId(1), "Luigi's", "9 Harbour Rd"))
            .await?;
        let sam = system
            .rider_client
            .register_rider(Rider::new(RiderId(1), "Sam", "bicycle"))
            .await?;
        Ok::<_, Box<dyn std::error::Error>>((alice, pizzeria, sam))
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_processing");
    let order_id = async {
        let items = vec![
            OrderItem::pizza("Margherita", Money::from_cents(900), ItemId(1))?,
            OrderItem::new("Garlic bread", Money::from_cents(350), ItemId(2))?,
        ];
        let order = Order::new(OrderId(1), alice, pizzeria, items, Money::from_cents(1250))?;
        let order_id = system.user_client.place_order(orders, alice, order).await?;

        let updated = orders
            .add_item(order_id, OrderItem::new("Lemonade", Money::from_cents(250), ItemId(3))?)
            .await?;
        info!(total = %updated.total(), "Item added");

        system.restaurant_client.confirm_order(orders, pizzeria, order_id).await?;
        system.restaurant_client.start_preparing(orders, pizzeria, order_id).await?;
        orders.assign_rider(order_id, sam).await?;
        system.restaurant_client.hand_over(orders, pizzeria, order_id).await?;
        Ok::<_, Box<dyn std::error::Error>>(order_id)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("delivery");
    async {
        system.rider_client.complete_delivery(orders, sam, order_id).await?;
        let status = system
            .user_client
            .track_order_status(orders, alice, order_id)
            .await?;
        let order = orders.get_order(order_id).await?;
        info!(%order_id, %status, total = %order.total(), "Order finished");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
