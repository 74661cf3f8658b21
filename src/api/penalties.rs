use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::api::ApiError;
use crate::auth::AdminClaims;
use crate::models::penalty::{CreatePenalty, PenaltyDto};
use crate::services::penalty_service;

pub async fn list_penalties(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<PenaltyDto>>, ApiError> {
    Ok(Json(penalty_service::list_penalties(&db).await?))
}

pub async fn get_penalty(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<PenaltyDto>, ApiError> {
    Ok(Json(penalty_service::get_penalty(&db, id).await?))
}

pub async fn create_penalty(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CreatePenalty>,
) -> Result<(StatusCode, Json<PenaltyDto>), ApiError> {
    let txn = db.begin().await?;
    let penalty = penalty_service::add_penalty(&txn, payload).await?;
    txn.commit().await?;
    Ok((StatusCode::CREATED, Json(penalty)))
}

/// Settles the penalty: marks it paid and removes the record in one request.
pub async fn pay_and_remove_penalty(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    penalty_service::pay_and_remove_penalty(&txn, id).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
