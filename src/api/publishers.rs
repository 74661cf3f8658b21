use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;

use crate::api::ApiError;
use crate::auth::AdminClaims;
use crate::models::book::BookDto;
use crate::models::publisher::{self, CreatePublisher, UpdatePublisher};
use crate::services::publisher_service;

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

pub async fn list_publishers(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<publisher::Model>>, ApiError> {
    Ok(Json(publisher_service::list_publishers(&db).await?))
}

pub async fn get_publisher(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<publisher::Model>, ApiError> {
    Ok(Json(publisher_service::get_publisher(&db, id).await?))
}

pub async fn search_publishers(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<publisher::Model>>, ApiError> {
    Ok(Json(
        publisher_service::search_publishers_by_name(&db, &query.name).await?,
    ))
}

pub async fn create_publisher(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CreatePublisher>,
) -> Result<(StatusCode, Json<publisher::Model>), ApiError> {
    let txn = db.begin().await?;
    let publisher = publisher_service::create_publisher(&txn, payload).await?;
    txn.commit().await?;
    Ok((StatusCode::CREATED, Json(publisher)))
}

pub async fn update_publisher(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePublisher>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    publisher_service::update_publisher(&txn, id, payload).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_publisher(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    publisher_service::delete_publisher(&txn, id).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_publisher_books(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<BookDto>>, ApiError> {
    Ok(Json(publisher_service::books_by_publisher(&db, id).await?))
}
