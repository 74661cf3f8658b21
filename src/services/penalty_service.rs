//! Penalty lifecycle: created unpaid, then paid-and-removed in one step.

use chrono::Utc;
use sea_orm::*;

use crate::domain::DomainError;
use crate::models::penalty::{self, CreatePenalty, Entity as Penalty, PenaltyDto};
use crate::models::user::Entity as User;

const MAX_REASON_LEN: usize = 300;

pub async fn add_penalty<C: ConnectionTrait>(
    conn: &C,
    input: CreatePenalty,
) -> Result<PenaltyDto, DomainError> {
    if input.user_id <= 0 || input.amount <= 0.0 {
        return Err(DomainError::Validation(
            "Invalid user or penalty amount.".into(),
        ));
    }
    if input.reason.chars().count() > MAX_REASON_LEN {
        return Err(DomainError::Validation(format!(
            "Reason must be at most {} characters.",
            MAX_REASON_LEN
        )));
    }

    let user = User::find_by_id(input.user_id).one(conn).await?;
    if user.is_none() {
        return Err(DomainError::Validation(format!(
            "User not found. user_id={}",
            input.user_id
        )));
    }

    let new_penalty = penalty::ActiveModel {
        user_id: Set(input.user_id),
        reason: Set(input.reason),
        amount: Set(input.amount),
        issued_at: Set(Utc::now().to_rfc3339()),
        is_paid: Set(false),
        ..Default::default()
    };

    let saved = new_penalty.insert(conn).await?;
    Ok(saved.into())
}

/// Mark the penalty paid and delete it, as one irreversible action.
/// No paid-penalty history is retained; a second call for the same id fails.
pub async fn pay_and_remove_penalty<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<(), DomainError> {
    let penalty = Penalty::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("No penalty record to delete. id={}", id)))?;

    let mut active: penalty::ActiveModel = penalty.into();
    active.is_paid = Set(true);
    let paid = active.update(conn).await?;
    paid.delete(conn).await?;
    Ok(())
}

pub async fn get_penalty<C: ConnectionTrait>(conn: &C, id: i32) -> Result<PenaltyDto, DomainError> {
    let penalty = Penalty::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Penalty not found. id={}", id)))?;
    Ok(penalty.into())
}

pub async fn list_penalties<C: ConnectionTrait>(conn: &C) -> Result<Vec<PenaltyDto>, DomainError> {
    let penalties = Penalty::find().all(conn).await?;
    Ok(penalties.into_iter().map(PenaltyDto::from).collect())
}
