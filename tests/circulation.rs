mod common;

use bibliotek::domain::DomainError;
use bibliotek::models::loan::CreateLoan;
use bibliotek::models::penalty::CreatePenalty;
use bibliotek::services::{loan_service, penalty_service, user_service};

#[tokio::test]
async fn loan_round_trip() {
    let db = common::setup().await;
    let user = common::seed_user(&db, "Ada Reader", "ada@example.com").await;
    let book = common::seed_book(&db, "Saatleri Ayarlama Enstitusu").await;

    let loan = loan_service::add_loan(
        &db,
        CreateLoan {
            user_id: user.id,
            book_id: book.id,
            book_title: book.title.clone(),
            due_date: "2026-09-30T00:00:00+00:00".to_owned(),
        },
    )
    .await
    .unwrap();

    assert!(!loan.is_returned);
    assert!(loan.return_date.is_none());
    assert_eq!(loan.due_date, "2026-09-30T00:00:00+00:00");
    assert_eq!(loan.book_title, "Saatleri Ayarlama Enstitusu");

    // The stored record joins back to the real book title
    let fetched = loan_service::get_loan(&db, loan.id).await.unwrap();
    assert_eq!(fetched.book_title, "Saatleri Ayarlama Enstitusu");
    assert_eq!(fetched.user_id, user.id);
}

#[tokio::test]
async fn loan_for_unknown_user_is_rejected() {
    let db = common::setup().await;
    let book = common::seed_book(&db, "Ince Memed").await;

    let result = loan_service::add_loan(
        &db,
        CreateLoan {
            user_id: 999,
            book_id: book.id,
            book_title: book.title,
            due_date: "2026-09-30T00:00:00+00:00".to_owned(),
        },
    )
    .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn borrowed_books_reflect_open_loans() {
    let db = common::setup().await;
    let user = common::seed_user(&db, "Ada Reader", "ada@example.com").await;
    let book = common::seed_book(&db, "Huzur").await;

    loan_service::add_loan(
        &db,
        CreateLoan {
            user_id: user.id,
            book_id: book.id,
            book_title: book.title.clone(),
            due_date: "2026-09-30T00:00:00+00:00".to_owned(),
        },
    )
    .await
    .unwrap();

    let borrowed = user_service::user_borrowed_books(&db, user.id).await.unwrap();
    assert_eq!(borrowed.len(), 1);
    assert_eq!(borrowed[0].title, "Huzur");
}

#[tokio::test]
async fn deleting_a_loan_clears_the_record() {
    let db = common::setup().await;
    let user = common::seed_user(&db, "Ada Reader", "ada@example.com").await;
    let book = common::seed_book(&db, "Huzur").await;

    let loan = loan_service::add_loan(
        &db,
        CreateLoan {
            user_id: user.id,
            book_id: book.id,
            book_title: book.title,
            due_date: "2026-09-30T00:00:00+00:00".to_owned(),
        },
    )
    .await
    .unwrap();

    loan_service::delete_loan(&db, loan.id).await.unwrap();

    let result = loan_service::get_loan(&db, loan.id).await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));
    let again = loan_service::delete_loan(&db, loan.id).await;
    assert!(matches!(again, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn penalty_starts_unpaid() {
    let db = common::setup().await;
    let user = common::seed_user(&db, "Ada Reader", "ada@example.com").await;

    let penalty = penalty_service::add_penalty(
        &db,
        CreatePenalty {
            user_id: user.id,
            reason: "Late return".to_owned(),
            amount: 12.5,
        },
    )
    .await
    .unwrap();

    assert!(!penalty.is_paid);
    assert_eq!(penalty.amount, 12.5);
}

#[tokio::test]
async fn pay_and_remove_is_terminal() {
    let db = common::setup().await;
    let user = common::seed_user(&db, "Ada Reader", "ada@example.com").await;

    let penalty = penalty_service::add_penalty(
        &db,
        CreatePenalty {
            user_id: user.id,
            reason: "Late return".to_owned(),
            amount: 12.5,
        },
    )
    .await
    .unwrap();

    penalty_service::pay_and_remove_penalty(&db, penalty.id)
        .await
        .unwrap();

    // No paid-penalty history survives
    let listing = penalty_service::list_penalties(&db).await.unwrap();
    assert!(listing.is_empty());

    let again = penalty_service::pay_and_remove_penalty(&db, penalty.id).await;
    assert!(matches!(again, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn penalty_amount_must_be_positive() {
    let db = common::setup().await;
    let user = common::seed_user(&db, "Ada Reader", "ada@example.com").await;

    let result = penalty_service::add_penalty(
        &db,
        CreatePenalty {
            user_id: user.id,
            reason: "Late return".to_owned(),
            amount: 0.0,
        },
    )
    .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn overlong_penalty_reason_is_rejected() {
    let db = common::setup().await;
    let user = common::seed_user(&db, "Ada Reader", "ada@example.com").await;

    let result = penalty_service::add_penalty(
        &db,
        CreatePenalty {
            user_id: user.id,
            reason: "x".repeat(301),
            amount: 5.0,
        },
    )
    .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn user_with_no_penalties_reads_as_not_found() {
    let db = common::setup().await;
    let user = common::seed_user(&db, "Ada Reader", "ada@example.com").await;

    let result = user_service::user_penalties(&db, user.id).await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));
}
