use axum::extract::State;
use axum::Json;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::auth::{self, Role};
use crate::services::admin_service;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

pub async fn login(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let admin = admin_service::validate_login(&db, &payload.username, &payload.password).await?;
    let token = auth::create_jwt(&admin.username, Role::Admin)?;
    tracing::info!(username = %admin.username, "admin logged in");
    Ok(Json(TokenResponse { token }))
}
