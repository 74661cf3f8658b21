use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::api::ApiError;
use crate::auth::AdminClaims;
use crate::models::book::BookDto;
use crate::models::shelf::{CreateShelf, ShelfDto};
use crate::services::shelf_service;

pub async fn list_shelves(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<ShelfDto>>, ApiError> {
    Ok(Json(shelf_service::list_shelves(&db).await?))
}

pub async fn get_shelf(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<ShelfDto>, ApiError> {
    Ok(Json(shelf_service::get_shelf(&db, id).await?))
}

pub async fn create_shelf(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CreateShelf>,
) -> Result<(StatusCode, Json<ShelfDto>), ApiError> {
    let txn = db.begin().await?;
    let shelf = shelf_service::create_shelf(&txn, payload).await?;
    txn.commit().await?;
    Ok((StatusCode::CREATED, Json(shelf)))
}

pub async fn delete_shelf(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    shelf_service::delete_shelf(&txn, id).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_book_to_shelf(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path((shelf_id, book_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    shelf_service::add_book_to_shelf(&txn, shelf_id, book_id).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove_book_from_shelf(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path((shelf_id, book_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    shelf_service::remove_book_from_shelf(&txn, shelf_id, book_id).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_shelf_books(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(shelf_id): Path<i32>,
) -> Result<Json<Vec<BookDto>>, ApiError> {
    Ok(Json(shelf_service::books_in_shelf(&db, shelf_id).await?))
}
