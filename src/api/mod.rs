pub mod admins;
pub mod auth;
pub mod authors;
pub mod books;
pub mod categories;
pub mod health;
pub mod loans;
pub mod penalties;
pub mod publishers;
pub mod shelf_layout;
pub mod shelves;
pub mod users;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{
    routing::{get, post, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::domain::DomainError;

/// Boundary wrapper mapping the domain error taxonomy onto HTTP.
///
/// Messages are propagated verbatim for client display, except database and
/// internal failures, which are logged and replaced with a generic body.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError(e)
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(e: sea_orm::DbErr) -> Self {
        ApiError(DomainError::from(e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            DomainError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            DomainError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            DomainError::AllocationExhausted => {
                tracing::error!("card number allocation ran out of retries");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DomainError::AllocationExhausted.to_string(),
                )
            }
            DomainError::Database(msg) | DomainError::Internal(msg) => {
                tracing::error!("internal failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred.".to_string(),
                )
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}

pub fn api_router(db: DatabaseConnection) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth
        .route("/auth/login", post(auth::login))
        // Admins
        .route("/admins", get(admins::list_admins).post(admins::create_admin))
        .route("/admins/username/:username", get(admins::get_admin_by_username))
        .route("/admins/:id", get(admins::get_admin).delete(admins::delete_admin))
        // Users
        .route("/users/all", get(users::list_users))
        .route("/users/search", get(users::search_users))
        .route("/users/card/:card_number", get(users::get_user_by_card_number))
        .route("/users", post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/:id/loans", get(users::get_user_loans))
        .route("/users/:id/penalties", get(users::get_user_penalties))
        .route("/users/:id/borrowed-books", get(users::get_user_borrowed_books))
        // Books
        .route("/books/all", get(books::list_books))
        .route("/books/search", get(books::search_books))
        .route("/books", post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route("/books/:id/author/:author_id", put(books::change_book_author))
        // Authors
        .route("/authors/all", get(authors::list_authors))
        .route("/authors/search", get(authors::search_authors))
        .route("/authors", post(authors::create_author))
        .route(
            "/authors/:id",
            get(authors::get_author)
                .put(authors::update_author)
                .delete(authors::delete_author),
        )
        .route("/authors/:id/books", get(authors::get_author_books))
        // Categories
        .route("/categories/all", get(categories::list_categories))
        .route("/categories/search", get(categories::search_categories))
        .route("/categories", post(categories::create_category))
        .route(
            "/categories/:id",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route("/categories/:id/books", get(categories::get_category_books))
        // Publishers
        .route("/publishers/all", get(publishers::list_publishers))
        .route("/publishers/search", get(publishers::search_publishers))
        .route("/publishers", post(publishers::create_publisher))
        .route(
            "/publishers/:id",
            get(publishers::get_publisher)
                .put(publishers::update_publisher)
                .delete(publishers::delete_publisher),
        )
        .route("/publishers/:id/books", get(publishers::get_publisher_books))
        // Loans
        .route("/loans", get(loans::list_loans).post(loans::create_loan))
        .route("/loans/:id", get(loans::get_loan).delete(loans::delete_loan))
        // Penalties (DELETE is pay-and-remove)
        .route(
            "/penalties",
            get(penalties::list_penalties).post(penalties::create_penalty),
        )
        .route(
            "/penalties/:id",
            get(penalties::get_penalty).delete(penalties::pay_and_remove_penalty),
        )
        // Shelves
        .route("/shelves", get(shelves::list_shelves).post(shelves::create_shelf))
        .route(
            "/shelves/:id",
            get(shelves::get_shelf).delete(shelves::delete_shelf),
        )
        .route("/shelves/:shelf_id/books", get(shelves::get_shelf_books))
        .route(
            "/shelves/:shelf_id/books/:book_id",
            post(shelves::add_book_to_shelf).delete(shelves::remove_book_from_shelf),
        )
        // Shelf layout preference
        .route("/shelf-layout", get(shelf_layout::list_layouts))
        .route(
            "/shelf-layout/:admin_id",
            get(shelf_layout::get_layout).post(shelf_layout::set_layout),
        )
        .with_state(db)
}
