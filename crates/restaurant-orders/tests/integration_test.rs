use restaurant_orders::lifecycle::{RestaurantSystem, SystemConfig};
use restaurant_orders::model::{
    CategoryCreate, Identity, MenuItem, MenuItemCreate, MenuItemUpdate, OrderPatch, OrderStatus,
    Role, UserCreate, UserId,
};
use restaurant_orders::RestaurantError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

struct Fixture {
    system: RestaurantSystem,
    admin: Identity,
    manager: Identity,
    crew: Identity,
    customer: Identity,
    soup: MenuItem,
}

async fn identity(system: &RestaurantSystem, create: UserCreate) -> Identity {
    let user = system.users.register(create).await.unwrap();
    system.users.resolve(user.id).await.unwrap()
}

async fn setup() -> Fixture {
    let system = RestaurantSystem::new();
    let admin = identity(&system, UserCreate::customer("admin").with_roles([Role::Admin])).await;
    let manager = identity(&system, UserCreate::customer("mia").with_roles([Role::Manager])).await;
    let crew = identity(
        &system,
        UserCreate::customer("dana").with_roles([Role::DeliveryCrew]),
    )
    .await;
    let customer = identity(&system, UserCreate::customer("ana")).await;

    let mains = system
        .categories
        .create_category(
            &admin,
            CategoryCreate {
                slug: "mains".into(),
                title: "Mains".into(),
            },
        )
        .await
        .unwrap();
    let soup = system
        .menu
        .create_menu_item(
            &manager,
            MenuItemCreate {
                title: "Lentil soup".into(),
                price: dec!(9.00),
                featured: false,
                category_id: mains.id,
            },
        )
        .await
        .unwrap();

    Fixture {
        system,
        admin,
        manager,
        crew,
        customer,
        soup,
    }
}

async fn menu_item(f: &Fixture, title: &str, price: Decimal) -> MenuItem {
    f.system
        .menu
        .create_menu_item(
            &f.manager,
            MenuItemCreate {
                title: title.into(),
                price,
                featured: false,
                category_id: f.soup.category_id,
            },
        )
        .await
        .unwrap()
}

fn patch_crew(crew: UserId) -> OrderPatch {
    OrderPatch {
        delivery_crew: Some(crew),
        ..OrderPatch::default()
    }
}

fn patch_status(status: OrderStatus) -> OrderPatch {
    OrderPatch {
        status: Some(status),
        ..OrderPatch::default()
    }
}

#[tokio::test]
async fn checkout_freezes_cart_into_order() {
    let f = setup().await;
    let sys = &f.system;

    let line = sys.carts.add_line(&f.customer, f.soup.id, 2).await.unwrap();
    assert_eq!(line.price(), dec!(18.00));

    let order = sys.orders.checkout(&f.customer).await.unwrap();
    assert_eq!(order.user_id, f.customer.user_id());
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.delivery_crew, None);
    assert_eq!(order.total(), dec!(18.00));
    assert_eq!(order.items().len(), 1);
    assert_eq!(order.items()[0].quantity(), 2);
    assert_eq!(order.items()[0].unit_price(), dec!(9.00));

    assert!(sys.carts.list_lines(&f.customer).await.unwrap().is_empty());

    let items = sys
        .orders
        .get_order_items(&f.customer, order.id)
        .await
        .unwrap();
    assert_eq!(items, order.items());

    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn checkout_of_empty_cart_creates_nothing() {
    let f = setup().await;

    let err = f.system.orders.checkout(&f.customer).await.unwrap_err();
    assert_eq!(err, RestaurantError::EmptyCart);
    assert!(f.system.orders.list_orders(&f.manager).await.unwrap().is_empty());
}

#[tokio::test]
async fn adding_an_item_again_replaces_the_line() {
    let f = setup().await;
    let carts = &f.system.carts;

    carts.add_line(&f.customer, f.soup.id, 2).await.unwrap();
    carts.add_line(&f.customer, f.soup.id, 5).await.unwrap();

    let lines = carts.list_lines(&f.customer).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity(), 5);
    assert_eq!(lines[0].price(), dec!(45.00));
}

#[tokio::test]
async fn cart_rejects_zero_quantity_and_unknown_items() {
    let f = setup().await;
    let carts = &f.system.carts;

    let err = carts.add_line(&f.customer, f.soup.id, 0).await.unwrap_err();
    assert!(matches!(err, RestaurantError::Validation(_)));

    let missing = restaurant_orders::model::MenuItemId(404);
    let err = carts.add_line(&f.customer, missing, 1).await.unwrap_err();
    assert!(matches!(err, RestaurantError::NotFound(_)));

    assert!(carts.list_lines(&f.customer).await.unwrap().is_empty());
}

#[tokio::test]
async fn clearing_reports_removed_lines() {
    let f = setup().await;
    let carts = &f.system.carts;

    assert_eq!(carts.clear(&f.customer).await.unwrap(), 0);

    carts.add_line(&f.customer, f.soup.id, 1).await.unwrap();
    assert_eq!(carts.clear(&f.customer).await.unwrap(), 1);
    assert!(carts.list_lines(&f.customer).await.unwrap().is_empty());
}

#[tokio::test]
async fn carts_are_per_user() {
    let f = setup().await;
    let carts = &f.system.carts;

    carts.add_line(&f.customer, f.soup.id, 3).await.unwrap();
    assert!(carts.list_lines(&f.crew).await.unwrap().is_empty());
    assert_eq!(carts.list_lines(&f.customer).await.unwrap().len(), 1);
}

#[tokio::test]
async fn price_change_keeps_snapshotted_price() {
    let f = setup().await;
    let sys = &f.system;

    sys.carts.add_line(&f.customer, f.soup.id, 2).await.unwrap();
    let update = MenuItemUpdate {
        price: Some(dec!(12.50)),
        ..MenuItemUpdate::default()
    };
    let soup = sys
        .menu
        .update_menu_item(&f.manager, f.soup.id, update)
        .await
        .unwrap();
    assert_eq!(soup.price, dec!(12.50));

    let order = sys.orders.checkout(&f.customer).await.unwrap();
    assert_eq!(order.total(), dec!(18.00));
}

#[tokio::test]
async fn manager_assigns_and_crew_delivers() {
    let f = setup().await;
    let sys = &f.system;

    sys.carts.add_line(&f.customer, f.soup.id, 1).await.unwrap();
    let order = sys.orders.checkout(&f.customer).await.unwrap();

    let assigned = sys
        .orders
        .update_order(&f.manager, order.id, patch_crew(f.crew.user_id()))
        .await
        .unwrap();
    assert_eq!(assigned.delivery_crew, Some(f.crew.user_id()));

    let delivered = sys
        .orders
        .update_order(&f.crew, order.id, patch_status(OrderStatus::Delivered))
        .await
        .unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert_eq!(delivered.total(), order.total());
}

#[tokio::test]
async fn manager_cannot_set_status() {
    let f = setup().await;
    let sys = &f.system;

    sys.carts.add_line(&f.customer, f.soup.id, 1).await.unwrap();
    let order = sys.orders.checkout(&f.customer).await.unwrap();

    let err = sys
        .orders
        .update_order(&f.manager, order.id, patch_status(OrderStatus::Delivered))
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Forbidden(_)));

    let stored = sys.orders.get_order(&f.manager, order.id).await.unwrap();
    assert_eq!(stored.status, OrderStatus::Pending);
}

#[tokio::test]
async fn crew_cannot_assign_crew() {
    let f = setup().await;
    let sys = &f.system;

    sys.carts.add_line(&f.customer, f.soup.id, 1).await.unwrap();
    let order = sys.orders.checkout(&f.customer).await.unwrap();

    let err = sys
        .orders
        .update_order(&f.crew, order.id, patch_crew(f.crew.user_id()))
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Forbidden(_)));
}

#[tokio::test]
async fn mixed_patch_is_all_or_nothing() {
    let f = setup().await;
    let sys = &f.system;

    sys.carts.add_line(&f.customer, f.soup.id, 1).await.unwrap();
    let order = sys.orders.checkout(&f.customer).await.unwrap();

    let patch = OrderPatch {
        delivery_crew: Some(f.crew.user_id()),
        status: Some(OrderStatus::Delivered),
        ..OrderPatch::default()
    };
    let err = sys
        .orders
        .update_order(&f.manager, order.id, patch)
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Forbidden(_)));

    let stored = sys.orders.get_order(&f.manager, order.id).await.unwrap();
    assert_eq!(stored.delivery_crew, None);
    assert_eq!(stored.status, OrderStatus::Pending);
}

#[tokio::test]
async fn customers_and_totals_are_never_editable() {
    let f = setup().await;
    let sys = &f.system;

    sys.carts.add_line(&f.customer, f.soup.id, 1).await.unwrap();
    let order = sys.orders.checkout(&f.customer).await.unwrap();

    let err = sys
        .orders
        .update_order(&f.customer, order.id, patch_status(OrderStatus::Delivered))
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Forbidden(_)));

    let total = OrderPatch {
        total: Some(dec!(0.01)),
        ..OrderPatch::default()
    };
    let err = sys
        .orders
        .update_order(&f.admin, order.id, total)
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Forbidden(_)));

    let err = sys
        .orders
        .update_order(&f.manager, order.id, OrderPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Validation(_)));
}

#[tokio::test]
async fn assigning_a_non_crew_user_is_not_found() {
    let f = setup().await;
    let sys = &f.system;

    sys.carts.add_line(&f.customer, f.soup.id, 1).await.unwrap();
    let order = sys.orders.checkout(&f.customer).await.unwrap();

    let err = sys
        .orders
        .update_order(&f.manager, order.id, patch_crew(f.customer.user_id()))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        RestaurantError::NotFound("no such delivery crew".into())
    );

    let err = sys
        .orders
        .update_order(&f.manager, order.id, patch_crew(UserId(999)))
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::NotFound(_)));
}

#[tokio::test]
async fn listing_is_scoped_by_role() {
    let f = setup().await;
    let sys = &f.system;
    let other = identity(sys, UserCreate::customer("bo")).await;

    sys.carts.add_line(&f.customer, f.soup.id, 1).await.unwrap();
    let mine = sys.orders.checkout(&f.customer).await.unwrap();
    sys.carts.add_line(&other, f.soup.id, 2).await.unwrap();
    let theirs = sys.orders.checkout(&other).await.unwrap();
    sys.orders
        .update_order(&f.manager, theirs.id, patch_crew(f.crew.user_id()))
        .await
        .unwrap();

    let ids = |orders: Vec<restaurant_orders::model::Order>| {
        orders.into_iter().map(|o| o.id).collect::<Vec<_>>()
    };
    assert_eq!(
        ids(sys.orders.list_orders(&f.manager).await.unwrap()),
        vec![mine.id, theirs.id]
    );
    assert_eq!(
        ids(sys.orders.list_orders(&f.admin).await.unwrap()),
        vec![mine.id, theirs.id]
    );
    assert_eq!(
        ids(sys.orders.list_orders(&f.customer).await.unwrap()),
        vec![mine.id]
    );
    assert_eq!(
        ids(sys.orders.list_orders(&f.crew).await.unwrap()),
        vec![theirs.id]
    );
}

#[tokio::test]
async fn only_managers_and_admins_delete_orders() {
    let f = setup().await;
    let sys = &f.system;

    sys.carts.add_line(&f.customer, f.soup.id, 1).await.unwrap();
    let order = sys.orders.checkout(&f.customer).await.unwrap();

    let err = sys
        .orders
        .delete_order(&f.customer, order.id)
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Forbidden(_)));

    sys.orders.delete_order(&f.manager, order.id).await.unwrap();
    let err = sys.orders.get_order(&f.manager, order.id).await.unwrap_err();
    assert!(matches!(err, RestaurantError::NotFound(_)));
}

#[tokio::test]
async fn staff_roles_are_granted_and_revoked() {
    let f = setup().await;
    let staff = &f.system.staff;

    assert!(staff
        .grant_role(&f.manager, "ana", Role::DeliveryCrew)
        .await
        .unwrap());
    assert!(!staff
        .grant_role(&f.manager, "ana", Role::DeliveryCrew)
        .await
        .unwrap());

    let crew = staff
        .list_members(&f.manager, Role::DeliveryCrew)
        .await
        .unwrap();
    let names: Vec<_> = crew.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["dana", "ana"]);

    staff
        .revoke_role(&f.manager, f.customer.user_id(), Role::DeliveryCrew)
        .await
        .unwrap();
    let err = staff
        .revoke_role(&f.manager, f.customer.user_id(), Role::DeliveryCrew)
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Conflict(_)));

    let err = staff
        .grant_role(&f.crew, "ana", Role::Manager)
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Forbidden(_)));
}

#[tokio::test]
async fn role_changes_apply_on_next_resolve() {
    let f = setup().await;
    let sys = &f.system;

    sys.staff
        .grant_role(&f.manager, "ana", Role::Manager)
        .await
        .unwrap();
    assert!(!f.customer.has(Role::Manager));

    let fresh = sys.users.resolve(f.customer.user_id()).await.unwrap();
    assert!(fresh.has(Role::Manager));
    assert!(!fresh.is_customer());
}

#[tokio::test]
async fn catalog_writes_are_role_gated() {
    let f = setup().await;
    let sys = &f.system;

    let err = sys
        .categories
        .create_category(
            &f.manager,
            CategoryCreate {
                slug: "sides".into(),
                title: "Sides".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Forbidden(_)));

    let err = sys
        .categories
        .create_category(
            &f.admin,
            CategoryCreate {
                slug: "mains".into(),
                title: "Main courses".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Conflict(_)));

    let err = sys
        .menu
        .delete_menu_item(&f.customer, f.soup.id)
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Forbidden(_)));

    assert_eq!(sys.menu.list_menu_items().await.unwrap(), vec![f.soup.clone()]);
    assert_eq!(sys.categories.list_categories().await.unwrap().len(), 1);
}

#[tokio::test]
async fn concurrent_checkouts_of_one_cart_create_one_order() {
    let f = setup().await;
    let sys = &f.system;

    sys.carts.add_line(&f.customer, f.soup.id, 2).await.unwrap();

    let (a, b) = tokio::join!(
        sys.orders.checkout(&f.customer),
        sys.orders.checkout(&f.customer)
    );
    let results = [a, b];
    let placed: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].total(), dec!(18.00));
    assert!(results
        .iter()
        .any(|r| matches!(r, Err(RestaurantError::EmptyCart))));

    assert_eq!(sys.orders.list_orders(&f.manager).await.unwrap().len(), 1);
}

#[tokio::test]
async fn concurrent_checkouts_of_different_carts_all_succeed() {
    let f = setup().await;
    let sys = &f.system;
    let other = identity(sys, UserCreate::customer("bo")).await;

    sys.carts.add_line(&f.customer, f.soup.id, 1).await.unwrap();
    sys.carts.add_line(&other, f.soup.id, 3).await.unwrap();

    let (a, b) = tokio::join!(sys.orders.checkout(&f.customer), sys.orders.checkout(&other));
    let (a, b) = (a.unwrap(), b.unwrap());
    assert_ne!(a.id, b.id);
    assert_eq!(a.total(), dec!(9.00));
    assert_eq!(b.total(), dec!(27.00));
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let f = setup().await;

    let err = f
        .system
        .users
        .register(UserCreate::customer("ana"))
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Conflict(_)));
}

#[tokio::test]
async fn profile_update_touches_only_names() {
    let f = setup().await;
    let users = &f.system.users;

    let update = restaurant_orders::model::UserUpdate {
        first_name: Some("Ana".into()),
        last_name: None,
    };
    let user = users.update_profile(&f.customer, update).await.unwrap();
    assert_eq!(user.first_name, "Ana");
    assert_eq!(user.username, "ana");
    assert!(user.roles.is_empty());

    let found = users.find_by_username("ana").await.unwrap().unwrap();
    assert_eq!(found.id, f.customer.user_id());
}

#[tokio::test]
async fn oversized_line_is_rejected_and_carts_stay_reachable() {
    let f = setup().await;
    let sys = &f.system;
    let other = identity(sys, UserCreate::customer("bo")).await;
    let caviar = menu_item(&f, "Caviar", Decimal::from_i128_with_scale(10_i128.pow(22), 0)).await;

    let err = sys
        .carts
        .add_line(&f.customer, caviar.id, 4_000_000_000)
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Validation(_)));
    assert!(sys.carts.list_lines(&f.customer).await.unwrap().is_empty());

    let line = sys.carts.add_line(&other, f.soup.id, 1).await.unwrap();
    assert_eq!(line.price(), dec!(9.00));
    assert_eq!(sys.carts.list_lines(&other).await.unwrap().len(), 1);
}

#[tokio::test]
async fn oversized_total_fails_checkout_and_keeps_cart() {
    let f = setup().await;
    let sys = &f.system;
    let first = menu_item(&f, "Gold leaf", Decimal::MAX).await;
    let second = menu_item(&f, "Platinum leaf", Decimal::MAX).await;

    sys.carts.add_line(&f.customer, first.id, 1).await.unwrap();
    sys.carts.add_line(&f.customer, second.id, 1).await.unwrap();

    let err = sys.orders.checkout(&f.customer).await.unwrap_err();
    assert!(matches!(err, RestaurantError::Validation(_)));
    assert_eq!(sys.carts.list_lines(&f.customer).await.unwrap().len(), 2);
    assert!(sys.orders.list_orders(&f.manager).await.unwrap().is_empty());

    sys.carts.clear(&f.customer).await.unwrap();
    sys.carts.add_line(&f.customer, f.soup.id, 1).await.unwrap();
    assert_eq!(sys.orders.checkout(&f.customer).await.unwrap().total(), dec!(9.00));
}

#[tokio::test]
async fn admin_without_manager_cannot_assign_crew() {
    let f = setup().await;
    let sys = &f.system;

    sys.carts.add_line(&f.customer, f.soup.id, 1).await.unwrap();
    let order = sys.orders.checkout(&f.customer).await.unwrap();

    let err = sys
        .orders
        .update_order(&f.admin, order.id, patch_crew(f.crew.user_id()))
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Forbidden(_)));

    let stored = sys.orders.get_order(&f.manager, order.id).await.unwrap();
    assert_eq!(stored.delivery_crew, None);
}

#[tokio::test]
async fn manager_who_is_also_crew_cannot_set_status() {
    let f = setup().await;
    let sys = &f.system;

    sys.staff
        .grant_role(&f.manager, "mia", Role::DeliveryCrew)
        .await
        .unwrap();
    let both = sys.users.resolve(f.manager.user_id()).await.unwrap();
    assert!(both.has(Role::Manager) && both.has(Role::DeliveryCrew));

    sys.carts.add_line(&f.customer, f.soup.id, 1).await.unwrap();
    let order = sys.orders.checkout(&f.customer).await.unwrap();
    sys.orders
        .update_order(&both, order.id, patch_crew(both.user_id()))
        .await
        .unwrap();

    let err = sys
        .orders
        .update_order(&both, order.id, patch_status(OrderStatus::Delivered))
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Forbidden(_)));

    let stored = sys.orders.get_order(&both, order.id).await.unwrap();
    assert_eq!(stored.status, OrderStatus::Pending);
    assert_eq!(stored.delivery_crew, Some(both.user_id()));
}

#[tokio::test]
async fn crew_may_set_status_on_orders_assigned_to_others() {
    let f = setup().await;
    let sys = &f.system;
    let other_crew = identity(
        sys,
        UserCreate::customer("lee").with_roles([Role::DeliveryCrew]),
    )
    .await;

    sys.carts.add_line(&f.customer, f.soup.id, 1).await.unwrap();
    let order = sys.orders.checkout(&f.customer).await.unwrap();
    sys.orders
        .update_order(&f.manager, order.id, patch_crew(f.crew.user_id()))
        .await
        .unwrap();

    let delivered = sys
        .orders
        .update_order(&other_crew, order.id, patch_status(OrderStatus::Delivered))
        .await
        .unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert_eq!(delivered.delivery_crew, Some(f.crew.user_id()));
}

#[tokio::test]
async fn zero_capacity_config_starts_with_default_mailboxes() {
    let config: SystemConfig = serde_json::from_str(r#"{"channel_capacity": 0}"#).unwrap();
    let system = RestaurantSystem::with_config(config);

    let ana = system.users.register(UserCreate::customer("ana")).await.unwrap();
    assert_eq!(system.users.lookup(ana.id).await.unwrap().username, "ana");
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn categories_are_trimmed_and_validated_on_create() {
    let f = setup().await;
    let categories = &f.system.categories;

    let err = categories
        .create_category(
            &f.admin,
            CategoryCreate {
                slug: "   ".into(),
                title: "Blank".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Validation(_)));

    let sides = categories
        .create_category(
            &f.admin,
            CategoryCreate {
                slug: " sides ".into(),
                title: "Sides".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(sides.slug, "sides");
    assert_eq!(categories.list_categories().await.unwrap().len(), 2);
}
