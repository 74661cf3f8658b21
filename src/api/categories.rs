use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;

use crate::api::ApiError;
use crate::auth::AdminClaims;
use crate::models::book::BookDto;
use crate::models::category::{self, CreateCategory, UpdateCategory};
use crate::services::category_service;

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

pub async fn list_categories(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<category::Model>>, ApiError> {
    Ok(Json(category_service::list_categories(&db).await?))
}

pub async fn get_category(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<category::Model>, ApiError> {
    Ok(Json(category_service::get_category(&db, id).await?))
}

pub async fn search_categories(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<category::Model>>, ApiError> {
    Ok(Json(
        category_service::search_categories_by_name(&db, &query.name).await?,
    ))
}

pub async fn create_category(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CreateCategory>,
) -> Result<(StatusCode, Json<category::Model>), ApiError> {
    let txn = db.begin().await?;
    let category = category_service::create_category(&txn, payload).await?;
    txn.commit().await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update_category(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategory>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    category_service::update_category(&txn, id, payload).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_category(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    category_service::delete_category(&txn, id).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_category_books(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<BookDto>>, ApiError> {
    Ok(Json(category_service::books_by_category(&db, id).await?))
}
