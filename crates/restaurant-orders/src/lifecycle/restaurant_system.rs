use super::config::SystemConfig;
use crate::clients::{CartClient, CategoryClient, MenuClient, OrderClient, StaffClient, UserClient};
use crate::error::RestaurantError;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Starts, wires and stops every actor of the ordering core.
///
/// # Wiring
///
/// | Actor | Context |
/// |-------|---------|
/// | User | `()` |
/// | Category | `()` |
/// | MenuItem | `CategoryClient` |
/// | Cart | `MenuClient` |
/// | Order | `(CartClient, UserClient)` |
///
/// The graph is acyclic, so dropping the clients held here stops the actors in
/// dependency order: once the order actor exits it releases its cart and user clients,
/// and so on down.
///
/// ```ignore
/// let system = RestaurantSystem::new();
/// let ana = system.users.register(UserCreate::customer("ana")).await?;
/// let me = system.users.resolve(ana.id).await?;
/// system.carts.add_line(&me, item.id, 2).await?;
/// let order = system.orders.checkout(&me).await?;
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    pub users: UserClient,
    pub staff: StaffClient,
    pub categories: CategoryClient,
    pub menu: MenuClient,
    pub carts: CartClient,
    pub orders: OrderClient,
    handles: Vec<JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Starts the system with [`SystemConfig::default`]. Must run inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    pub fn with_config(config: SystemConfig) -> Self {
        let capacity = config.mailbox_capacity();
        info!(capacity, "Starting restaurant system");

        // 1. Create actors (no dependencies yet)
        let (user_actor, users) = crate::user_actor::new(capacity);
        let (category_actor, categories) = crate::catalog_actor::new_categories(capacity);
        let (menu_actor, menu) = crate::catalog_actor::new_menu(capacity);
        let (cart_actor, carts) = crate::cart_actor::new(capacity);
        let (order_actor, orders) = crate::order_actor::new(capacity);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(category_actor.run(())),
            tokio::spawn(menu_actor.run(categories.clone())),
            tokio::spawn(cart_actor.run(menu.clone())),
            tokio::spawn(order_actor.run((carts.clone(), users.clone()))),
        ];

        Self {
            staff: StaffClient::new(users.clone()),
            users,
            categories,
            menu,
            carts,
            orders,
            handles,
        }
    }

    /// Drops every client and waits for all actors to finish.
    pub async fn shutdown(self) -> Result<(), RestaurantError> {
        info!("Shutting down system...");

        let Self {
            users,
            staff,
            categories,
            menu,
            carts,
            orders,
            handles,
        } = self;
        drop((orders, carts, menu, categories, staff, users));

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(RestaurantError::Unavailable(format!("actor task failed: {e}")));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for RestaurantSystem {
    fn default() -> Self {
        Self::new()
    }
}
