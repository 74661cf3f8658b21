use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::api::ApiError;
use crate::auth::AdminClaims;
use crate::models::admin::{AdminDto, CreateAdmin};
use crate::services::admin_service;

pub async fn list_admins(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<AdminDto>>, ApiError> {
    Ok(Json(admin_service::list_admins(&db).await?))
}

pub async fn get_admin(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<AdminDto>, ApiError> {
    Ok(Json(admin_service::get_admin(&db, id).await?))
}

pub async fn get_admin_by_username(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(username): Path<String>,
) -> Result<Json<AdminDto>, ApiError> {
    Ok(Json(
        admin_service::get_admin_by_username(&db, &username).await?,
    ))
}

pub async fn create_admin(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CreateAdmin>,
) -> Result<(StatusCode, Json<AdminDto>), ApiError> {
    let txn = db.begin().await?;
    let admin = admin_service::create_admin(&txn, payload).await?;
    txn.commit().await?;
    Ok((StatusCode::CREATED, Json(admin)))
}

pub async fn delete_admin(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    admin_service::delete_admin(&txn, id).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
