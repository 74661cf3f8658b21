#![allow(dead_code)]

use sea_orm::DatabaseConnection;

use bibliotek::db;
use bibliotek::models::author::CreateAuthor;
use bibliotek::models::book::{BookDto, CreateBook};
use bibliotek::models::category::CreateCategory;
use bibliotek::models::publisher::CreatePublisher;
use bibliotek::models::user::{CreateUser, UserDto};
use bibliotek::services::{author_service, book_service, category_service, publisher_service, user_service};

pub async fn setup() -> DatabaseConnection {
    db::init_db("sqlite::memory:").await.expect("in-memory db")
}

pub async fn seed_user(db: &DatabaseConnection, name: &str, email: &str) -> UserDto {
    user_service::create_user(
        db,
        CreateUser {
            full_name: name.to_owned(),
            email: email.to_owned(),
            phone_number: "555-0100".to_owned(),
            expire_at: None,
        },
    )
    .await
    .expect("seed user")
}

/// Creates an author, category and publisher, then a book referencing them.
pub async fn seed_book(db: &DatabaseConnection, title: &str) -> BookDto {
    let author = author_service::create_author(
        db,
        CreateAuthor {
            name: format!("{} author", title),
        },
    )
    .await
    .expect("seed author");
    let category = category_service::create_category(
        db,
        CreateCategory {
            name: format!("{} category", title),
        },
    )
    .await
    .expect("seed category");
    let publisher = publisher_service::create_publisher(
        db,
        CreatePublisher {
            name: format!("{} press", title),
            address: "1 Library Way".to_owned(),
            phone: "555-0199".to_owned(),
            email: "press@example.com".to_owned(),
        },
    )
    .await
    .expect("seed publisher");

    book_service::create_book(
        db,
        CreateBook {
            title: title.to_owned(),
            author_id: author.id,
            category_id: category.id,
            publisher_id: publisher.id,
            publication_year: 2001,
            isbn: "978-0000000000".to_owned(),
            quantity: 3,
        },
    )
    .await
    .expect("seed book")
}
