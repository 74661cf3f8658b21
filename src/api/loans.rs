use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::api::ApiError;
use crate::auth::AdminClaims;
use crate::models::loan::{CreateLoan, LoanDto};
use crate::services::loan_service;

pub async fn list_loans(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<LoanDto>>, ApiError> {
    Ok(Json(loan_service::list_loans(&db).await?))
}

pub async fn get_loan(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<LoanDto>, ApiError> {
    Ok(Json(loan_service::get_loan(&db, id).await?))
}

pub async fn create_loan(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CreateLoan>,
) -> Result<(StatusCode, Json<LoanDto>), ApiError> {
    let txn = db.begin().await?;
    let loan = loan_service::add_loan(&txn, payload).await?;
    txn.commit().await?;
    Ok((StatusCode::CREATED, Json(loan)))
}

pub async fn delete_loan(
    _admin: AdminClaims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let txn = db.begin().await?;
    loan_service::delete_loan(&txn, id).await?;
    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
