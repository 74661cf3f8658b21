mod common;

use bibliotek::domain::DomainError;
use bibliotek::models::shelf::CreateShelf;
use bibliotek::services::{shelf_layout_service, shelf_service};

#[tokio::test]
async fn shelf_placement_round_trip() {
    let db = common::setup().await;
    let shelf = shelf_service::create_shelf(
        &db,
        CreateShelf {
            section: "A".to_owned(),
            row: 1,
            column: 2,
        },
    )
    .await
    .unwrap();
    let book = common::seed_book(&db, "Beyaz Kale").await;

    shelf_service::add_book_to_shelf(&db, shelf.id, book.id)
        .await
        .unwrap();

    let placed = shelf_service::books_in_shelf(&db, shelf.id).await.unwrap();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].id, book.id);
}

#[tokio::test]
async fn duplicate_placement_is_tolerated() {
    let db = common::setup().await;
    let shelf = shelf_service::create_shelf(
        &db,
        CreateShelf {
            section: "A".to_owned(),
            row: 1,
            column: 1,
        },
    )
    .await
    .unwrap();
    let book = common::seed_book(&db, "Beyaz Kale").await;

    shelf_service::add_book_to_shelf(&db, shelf.id, book.id)
        .await
        .unwrap();
    shelf_service::add_book_to_shelf(&db, shelf.id, book.id)
        .await
        .unwrap();

    let placed = shelf_service::books_in_shelf(&db, shelf.id).await.unwrap();
    assert_eq!(placed.len(), 2);
}

#[tokio::test]
async fn removing_an_absent_book_is_a_no_op() {
    let db = common::setup().await;
    let shelf = shelf_service::create_shelf(
        &db,
        CreateShelf {
            section: "B".to_owned(),
            row: 1,
            column: 1,
        },
    )
    .await
    .unwrap();
    let book = common::seed_book(&db, "Beyaz Kale").await;

    shelf_service::add_book_to_shelf(&db, shelf.id, book.id)
        .await
        .unwrap();
    shelf_service::remove_book_from_shelf(&db, shelf.id, book.id)
        .await
        .unwrap();
    // Second removal finds nothing to delete and still succeeds
    shelf_service::remove_book_from_shelf(&db, shelf.id, book.id)
        .await
        .unwrap();

    let placed = shelf_service::books_in_shelf(&db, shelf.id).await.unwrap();
    assert!(placed.is_empty());
}

#[tokio::test]
async fn placement_on_unknown_shelf_is_not_found() {
    let db = common::setup().await;
    let book = common::seed_book(&db, "Beyaz Kale").await;

    let result = shelf_service::add_book_to_shelf(&db, 999, book.id).await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn shelf_rejects_non_positive_coordinates() {
    let db = common::setup().await;

    let result = shelf_service::create_shelf(
        &db,
        CreateShelf {
            section: "A".to_owned(),
            row: 0,
            column: 1,
        },
    )
    .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn layout_preference_upserts_per_admin() {
    let db = common::setup().await;

    shelf_layout_service::set_preference(&db, 1, true)
        .await
        .unwrap();
    shelf_layout_service::set_preference(&db, 1, false)
        .await
        .unwrap();

    let all = shelf_layout_service::list_preferences(&db).await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(!all[0].is_block_layout);

    let stored = shelf_layout_service::get_preference(&db, 1)
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.is_block_layout);
}

#[tokio::test]
async fn missing_layout_preference_is_none() {
    let db = common::setup().await;

    let stored = shelf_layout_service::get_preference(&db, 7).await.unwrap();
    assert!(stored.is_none());
}
