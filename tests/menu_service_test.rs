//! Menu creation scenario suite, run against a real [`MenuSystem`].
//!
//! The fixture is the classic two-chickens setup: one menu group, one
//! product priced 16000, and a candidate menu of two of that product
//! (line total 32000).

use pos_menu::framework::EntityStore;
use pos_menu::lifecycle::MenuSystem;
use pos_menu::menu_actor::MenuError;
use pos_menu::model::{
    MenuCreate, MenuGroupCreate, MenuGroupId, MenuProduct, ProductCreate, ProductId,
};
use rust_decimal::Decimal;

fn two_chickens() -> MenuGroupCreate {
    MenuGroupCreate {
        name: "Two Chickens".to_string(),
    }
}

fn fried_chicken() -> ProductCreate {
    ProductCreate {
        name: "Fried Chicken".to_string(),
        price: Decimal::from(16000),
    }
}

fn two_fried_chickens(group_id: MenuGroupId, product_id: ProductId) -> MenuCreate {
    MenuCreate {
        name: "Two Fried Chickens".to_string(),
        price: Some(Decimal::from(30000)),
        menu_group_id: Some(group_id),
        menu_products: vec![MenuProduct {
            product_id,
            quantity: 2,
        }],
    }
}

/// A fresh system with the fixture group and product registered.
async fn seeded_system() -> (MenuSystem, MenuGroupId, ProductId) {
    let system = MenuSystem::new();
    let group = system
        .menu_groups
        .save(two_chickens())
        .await
        .expect("Failed to save menu group");
    let product = system
        .products
        .save(fried_chicken())
        .await
        .expect("Failed to save product");
    (system, group.id, product.id)
}

fn invalid_field(err: MenuError) -> &'static str {
    match err {
        MenuError::InvalidArgument { field, .. } => field,
        other => panic!("Expected InvalidArgument, got {:?}", other),
    }
}

#[tokio::test]
async fn creates_a_menu_from_registered_products() {
    let (system, group_id, product_id) = seeded_system().await;
    let params = two_fried_chickens(group_id, product_id);

    let menu = system
        .menus
        .create(params.clone())
        .await
        .expect("Menu creation failed");

    assert_eq!(menu.name, params.name);
    assert_eq!(Some(menu.price), params.price);
    assert_eq!(Some(menu.menu_group_id), params.menu_group_id);
    assert_eq!(menu.menu_products, params.menu_products);

    let listed = system.menus.list().await.unwrap();
    assert_eq!(listed, vec![menu]);
}

#[tokio::test]
async fn creation_persists_the_line_items_with_their_menu() {
    let (system, group_id, product_id) = seeded_system().await;

    let menu = system
        .menus
        .create(two_fried_chickens(group_id, product_id))
        .await
        .unwrap();

    let records = system.menu_products.find_all().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].menu_id, menu.id);
    assert_eq!(records[0].product_id, product_id);
    assert_eq!(records[0].quantity, 2);
}

#[tokio::test]
async fn line_item_order_is_preserved() {
    let (system, group_id, first_product) = seeded_system().await;
    let second_product = system
        .products
        .save(ProductCreate {
            name: "Spicy Chicken".to_string(),
            price: Decimal::from(17000),
        })
        .await
        .unwrap()
        .id;

    let lines = vec![
        MenuProduct {
            product_id: second_product,
            quantity: 1,
        },
        MenuProduct {
            product_id: first_product,
            quantity: 2,
        },
    ];
    let menu = system
        .menus
        .create(MenuCreate {
            name: "Chicken Duo".to_string(),
            price: Some(Decimal::from(49000)),
            menu_group_id: Some(group_id),
            menu_products: lines.clone(),
        })
        .await
        .unwrap();

    assert_eq!(menu.menu_products, lines);
}

#[tokio::test]
async fn accepts_a_price_equal_to_the_sum_of_its_products() {
    let (system, group_id, product_id) = seeded_system().await;
    let mut params = two_fried_chickens(group_id, product_id);
    params.price = Some(Decimal::from(32000));

    assert!(system.menus.create(params).await.is_ok());
}

#[tokio::test]
async fn rejects_a_price_above_the_sum_of_its_products() {
    let (system, group_id, product_id) = seeded_system().await;
    let mut params = two_fried_chickens(group_id, product_id);
    params.price = Some(Decimal::from(33000));

    let err = system.menus.create(params).await.unwrap_err();
    assert_eq!(invalid_field(err), "price");
}

#[tokio::test]
async fn rejects_a_missing_price() {
    let (system, group_id, product_id) = seeded_system().await;
    let mut params = two_fried_chickens(group_id, product_id);
    params.price = None;

    let err = system.menus.create(params).await.unwrap_err();
    assert_eq!(invalid_field(err), "price");
}

#[tokio::test]
async fn rejects_a_negative_price() {
    let (system, group_id, product_id) = seeded_system().await;
    let mut params = two_fried_chickens(group_id, product_id);
    params.price = Some(Decimal::from(-1000));

    let err = system.menus.create(params).await.unwrap_err();
    assert_eq!(invalid_field(err), "price");
}

#[tokio::test]
async fn rejects_a_missing_menu_group() {
    let (system, group_id, product_id) = seeded_system().await;
    let mut params = two_fried_chickens(group_id, product_id);
    params.menu_group_id = None;

    let err = system.menus.create(params).await.unwrap_err();
    assert_eq!(invalid_field(err), "menu_group_id");
}

#[tokio::test]
async fn rejects_an_unknown_menu_group() {
    let (system, group_id, product_id) = seeded_system().await;
    let mut params = two_fried_chickens(group_id, product_id);
    params.menu_group_id = Some(MenuGroupId(99));

    let err = system.menus.create(params).await.unwrap_err();
    assert_eq!(invalid_field(err), "menu_group_id");
}

#[tokio::test]
async fn rejects_an_empty_product_list() {
    let (system, group_id, product_id) = seeded_system().await;
    let mut params = two_fried_chickens(group_id, product_id);
    params.menu_products.clear();

    let err = system.menus.create(params).await.unwrap_err();
    assert_eq!(invalid_field(err), "menu_products");
}

#[tokio::test]
async fn rejects_an_unknown_product() {
    let (system, group_id, _product_id) = seeded_system().await;
    let mut params = two_fried_chickens(group_id, ProductId(99));
    params.price = Some(Decimal::from(100));

    let err = system.menus.create(params).await.unwrap_err();
    assert_eq!(invalid_field(err), "menu_products");
}

#[tokio::test]
async fn the_first_violated_rule_wins() {
    let (system, _group_id, product_id) = seeded_system().await;

    // Both the price and the menu group are missing; the price rule is
    // checked first, so that is the field the caller must see.
    let params = MenuCreate {
        name: "Broken".to_string(),
        price: None,
        menu_group_id: None,
        menu_products: vec![MenuProduct {
            product_id,
            quantity: 1,
        }],
    };

    let err = system.menus.create(params).await.unwrap_err();
    assert_eq!(invalid_field(err), "price");
}

#[tokio::test]
async fn a_rejected_menu_leaves_no_trace() {
    let (system, group_id, product_id) = seeded_system().await;
    let mut params = two_fried_chickens(group_id, product_id);
    params.price = Some(Decimal::from(33000));

    system.menus.create(params).await.unwrap_err();

    assert!(system.menus.list().await.unwrap().is_empty());
    assert!(system.menu_products.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_is_idempotent() {
    let (system, group_id, product_id) = seeded_system().await;
    system
        .menus
        .create(two_fried_chickens(group_id, product_id))
        .await
        .unwrap();
    let mut second = two_fried_chickens(group_id, product_id);
    second.name = "Two More Fried Chickens".to_string();
    system.menus.create(second).await.unwrap();

    let mut first_listing = system.menus.list().await.unwrap();
    let mut second_listing = system.menus.list().await.unwrap();
    first_listing.sort_by_key(|m| m.id.0);
    second_listing.sort_by_key(|m| m.id.0);

    assert_eq!(first_listing.len(), 2);
    assert_eq!(first_listing, second_listing);
}
