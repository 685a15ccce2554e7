//! Demo run of the ordering core: seed staff, build a menu, check out a cart, and walk
//! the order through assignment and delivery.
//!
//! ```bash
//! RUST_LOG=info cargo run -p restaurant-orders
//! ```

use restaurant_orders::lifecycle::{setup_tracing, RestaurantSystem, SystemConfig};
use restaurant_orders::model::{
    CategoryCreate, MenuItemCreate, OrderPatch, OrderStatus, Role, UserCreate,
};
use restaurant_orders::RestaurantError;
use rust_decimal::Decimal;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), RestaurantError> {
    setup_tracing();

    let system = RestaurantSystem::with_config(SystemConfig::from_env());

    // Staff accounts are seeded at registration; everyone else starts as a customer.
    let admin = system
        .users
        .register(UserCreate::customer("admin").with_roles([Role::Admin]))
        .await?;
    let manager = system
        .users
        .register(UserCreate::customer("mia").with_roles([Role::Manager]))
        .await?;
    let rider = system.users.register(UserCreate::customer("dana")).await?;
    let customer = system.users.register(UserCreate::customer("ana")).await?;

    let admin = system.users.resolve(admin.id).await?;
    let manager = system.users.resolve(manager.id).await?;

    let span = tracing::info_span!("staffing");
    async {
        system
            .staff
            .grant_role(&manager, &rider.username, Role::DeliveryCrew)
            .await?;
        let crew = system.staff.list_members(&manager, Role::DeliveryCrew).await?;
        info!(crew = crew.len(), "Delivery crew ready");
        Ok::<_, RestaurantError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("menu");
    let soup = async {
        let mains = system
            .categories
            .create_category(
                &admin,
                CategoryCreate {
                    slug: "mains".into(),
                    title: "Mains".into(),
                },
            )
            .await?;
        system
            .menu
            .create_menu_item(
                &manager,
                MenuItemCreate {
                    title: "Lentil soup".into(),
                    price: Decimal::new(900, 2),
                    featured: true,
                    category_id: mains.id,
                },
            )
            .await
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("checkout");
    let order = async {
        let me = system.users.resolve(customer.id).await?;
        let line = system.carts.add_line(&me, soup.id, 2).await?;
        info!(price = %line.price(), "Line added");
        system.orders.checkout(&me).await
    }
    .instrument(span)
    .await?;
    info!(order_id = %order.id, total = %order.total(), "Order placed");

    let span = tracing::info_span!("delivery");
    async {
        system
            .orders
            .update_order(
                &manager,
                order.id,
                OrderPatch {
                    delivery_crew: Some(rider.id),
                    ..OrderPatch::default()
                },
            )
            .await?;

        let rider = system.users.resolve(rider.id).await?;
        let assigned = system.orders.list_orders(&rider).await?;
        info!(assigned = assigned.len(), "Rider picked up orders");

        let delivered = system
            .orders
            .update_order(
                &rider,
                order.id,
                OrderPatch {
                    status: Some(OrderStatus::Delivered),
                    ..OrderPatch::default()
                },
            )
            .await?;
        info!(order_id = %delivered.id, status = ?delivered.status, "Order delivered");
        Ok::<_, RestaurantError>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
