use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;

use crate::api::ApiError;
use crate::auth::AdminClaims;
use crate::models::book::{BookDto, CreateBook, UpdateBook};
use crate::services::book_service;

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub title: String,
}

pub async fn list_books(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<BookDto>>, ApiError> {
    Ok(Json(book_service::list_books(&db).await?))
}

pub async fn get_book(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<BookDto>, ApiError> {
    Ok(Json(book_service::get_book(&db, id).await?))
}

pub async fn search_books(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Query(query): Query<TitleQuery>,
) -> Result<Json<Vec<BookDto>>, ApiError> {
    Ok(Json(
        book_service::search_books_by_title(&db, &query.title).await?,
    ))
}

pub async fn create_book(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CreateBook>,
) -> Result<(StatusCode, Json<BookDto>), ApiError> {
    let txn = db.begin().await?;
    let book = book_service::create_book(&txn, payload).await?;
    txn.commit().await?;
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn update_book(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBook>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    book_service::update_book(&txn, id, payload).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_book(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    book_service::delete_book(&txn, id).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn change_book_author(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path((id, author_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    book_service::change_book_author(&txn, id, author_id).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
