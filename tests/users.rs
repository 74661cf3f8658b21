mod common;

use std::collections::HashSet;

use bibliotek::domain::DomainError;
use bibliotek::models::user::{CreateUser, UpdateUser};
use bibliotek::services::user_service;

#[tokio::test]
async fn first_card_number_is_one() {
    let db = common::setup().await;

    let user = common::seed_user(&db, "Ada Reader", "ada@example.com").await;
    assert_eq!(user.card_number, "000000001");

    let second = common::seed_user(&db, "Ben Reader", "ben@example.com").await;
    assert_eq!(second.card_number, "000000002");
}

#[tokio::test]
async fn card_numbers_stay_unique() {
    let db = common::setup().await;

    let mut cards = HashSet::new();
    for i in 0..5 {
        let user = common::seed_user(
            &db,
            &format!("Reader {}", i),
            &format!("reader{}@example.com", i),
        )
        .await;
        assert_eq!(user.card_number.len(), 9);
        cards.insert(user.card_number);
    }
    assert_eq!(cards.len(), 5);
}

#[tokio::test]
async fn duplicate_email_is_rejected_case_insensitively() {
    let db = common::setup().await;
    common::seed_user(&db, "Ada Reader", "ada@example.com").await;

    let result = user_service::create_user(
        &db,
        CreateUser {
            full_name: "Another Ada".to_owned(),
            email: "ADA@Example.com".to_owned(),
            phone_number: "555-0101".to_owned(),
            expire_at: None,
        },
    )
    .await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let db = common::setup().await;

    let result = user_service::create_user(
        &db,
        CreateUser {
            full_name: "   ".to_owned(),
            email: "ok@example.com".to_owned(),
            phone_number: "555-0100".to_owned(),
            expire_at: None,
        },
    )
    .await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let db = common::setup().await;

    let result = user_service::create_user(
        &db,
        CreateUser {
            full_name: "Ada Reader".to_owned(),
            email: "not-an-email".to_owned(),
            phone_number: "555-0100".to_owned(),
            expire_at: None,
        },
    )
    .await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn lookup_by_card_number_round_trips() {
    let db = common::setup().await;
    let user = common::seed_user(&db, "Ada Reader", "ada@example.com").await;

    let found = user_service::get_user_by_card_number(&db, &user.card_number)
        .await
        .unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.full_name, "Ada Reader");
}

#[tokio::test]
async fn listing_with_no_users_is_not_found() {
    let db = common::setup().await;

    let result = user_service::list_users(&db).await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn update_keeps_card_number() {
    let db = common::setup().await;
    let user = common::seed_user(&db, "Ada Reader", "ada@example.com").await;

    user_service::update_user(
        &db,
        user.id,
        UpdateUser {
            full_name: Some("Ada Researcher".to_owned()),
            email: None,
            phone_number: None,
        },
    )
    .await
    .unwrap();

    let updated = user_service::get_user(&db, user.id).await.unwrap();
    assert_eq!(updated.full_name, "Ada Researcher");
    assert_eq!(updated.email, "ada@example.com");
    assert_eq!(updated.card_number, user.card_number);
}

#[tokio::test]
async fn search_with_no_match_is_not_found() {
    let db = common::setup().await;
    common::seed_user(&db, "Ada Reader", "ada@example.com").await;

    let result = user_service::search_users_by_name(&db, "Zyx").await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn wildcard_characters_in_search_are_literal() {
    let db = common::setup().await;
    common::seed_user(&db, "Ada Reader", "ada@example.com").await;
    common::seed_user(&db, "Ada 100% Reader", "ada2@example.com").await;

    // "%" only matches the name that actually contains a percent sign
    let hits = user_service::search_users_by_name(&db, "%").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].full_name, "Ada 100% Reader");

    // "_" matches nothing rather than every single-character position
    let result = user_service::search_users_by_name(&db, "_").await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn get_with_unknown_id_is_not_found() {
    let db = common::setup().await;

    let result = user_service::get_user(&db, 999).await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn card_numbering_recovers_after_deletions() {
    let db = common::setup().await;
    let first = common::seed_user(&db, "Ada Reader", "ada@example.com").await;
    let second = common::seed_user(&db, "Ben Reader", "ben@example.com").await;

    user_service::delete_user(&db, first.id).await.unwrap();

    // The maximum surviving card still drives the next allocation
    let third = common::seed_user(&db, "Cem Reader", "cem@example.com").await;
    assert_eq!(second.card_number, "000000002");
    assert_eq!(third.card_number, "000000003");
}
