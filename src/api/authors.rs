use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;

use crate::api::ApiError;
use crate::auth::AdminClaims;
use crate::models::author::{self, CreateAuthor, UpdateAuthor};
use crate::models::book::BookDto;
use crate::services::author_service;

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

pub async fn list_authors(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<author::Model>>, ApiError> {
    Ok(Json(author_service::list_authors(&db).await?))
}

pub async fn get_author(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<author::Model>, ApiError> {
    Ok(Json(author_service::get_author(&db, id).await?))
}

pub async fn search_authors(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<author::Model>>, ApiError> {
    Ok(Json(
        author_service::search_authors_by_name(&db, &query.name).await?,
    ))
}

pub async fn create_author(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CreateAuthor>,
) -> Result<(StatusCode, Json<author::Model>), ApiError> {
    let txn = db.begin().await?;
    let author = author_service::create_author(&txn, payload).await?;
    txn.commit().await?;
    Ok((StatusCode::CREATED, Json(author)))
}

pub async fn update_author(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAuthor>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    author_service::update_author(&txn, id, payload).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_author(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    author_service::delete_author(&txn, id).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_author_books(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<BookDto>>, ApiError> {
    Ok(Json(author_service::books_by_author(&db, id).await?))
}
