use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::ApiError;
use crate::auth::AdminClaims;
use crate::models::shelf_layout;
use crate::services::shelf_layout_service;

#[derive(Debug, Deserialize)]
pub struct SetLayoutRequest {
    pub is_block_layout: bool,
}

pub async fn list_layouts(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<shelf_layout::Model>>, ApiError> {
    Ok(Json(shelf_layout_service::list_preferences(&db).await?))
}

/// Admins without a stored preference get the default (non-block) layout.
pub async fn get_layout(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(admin_id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let preference = shelf_layout_service::get_preference(&db, admin_id).await?;
    let is_block_layout = preference.map(|p| p.is_block_layout).unwrap_or(false);
    Ok(Json(
        json!({ "admin_id": admin_id, "is_block_layout": is_block_layout }),
    ))
}

pub async fn set_layout(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(admin_id): Path<i32>,
    Json(payload): Json<SetLayoutRequest>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    shelf_layout_service::set_preference(&txn, admin_id, payload.is_block_layout).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
