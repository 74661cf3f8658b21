use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;

use crate::api::ApiError;
use crate::auth::AdminClaims;
use crate::models::book::BookDto;
use crate::models::loan::LoanDto;
use crate::models::penalty::PenaltyDto;
use crate::models::user::{CreateUser, UpdateUser, UserDto};
use crate::services::user_service;

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

pub async fn list_users(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    Ok(Json(user_service::list_users(&db).await?))
}

pub async fn get_user(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<UserDto>, ApiError> {
    Ok(Json(user_service::get_user(&db, id).await?))
}

pub async fn get_user_by_card_number(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(card_number): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    Ok(Json(
        user_service::get_user_by_card_number(&db, &card_number).await?,
    ))
}

pub async fn search_users(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    Ok(Json(
        user_service::search_users_by_name(&db, &query.name).await?,
    ))
}

pub async fn create_user(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CreateUser>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let txn = db.begin().await?;
    let user = user_service::create_user(&txn, payload).await?;
    txn.commit().await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUser>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    user_service::update_user(&txn, id, payload).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_user(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    user_service::delete_user(&txn, id).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_user_loans(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<LoanDto>>, ApiError> {
    Ok(Json(user_service::user_loans(&db, id).await?))
}

pub async fn get_user_penalties(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<PenaltyDto>>, ApiError> {
    Ok(Json(user_service::user_penalties(&db, id).await?))
}

pub async fn get_user_borrowed_books(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<BookDto>>, ApiError> {
    Ok(Json(user_service::user_borrowed_books(&db, id).await?))
}
