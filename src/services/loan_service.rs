//! Loan lifecycle: create, read, delete.
//!
//! A loan is `Active` while `return_date` is absent and `Closed` once it is
//! present; no exposed operation sets the return date, so `is_returned` is a
//! read-side derived flag and deletion is the only terminal action.

use chrono::Utc;
use sea_orm::*;

use crate::domain::DomainError;
use crate::models::book::Entity as Book;
use crate::models::loan::{self, CreateLoan, Entity as Loan, LoanDto};
use crate::models::user::Entity as User;

pub async fn add_loan<C: ConnectionTrait>(
    conn: &C,
    input: CreateLoan,
) -> Result<LoanDto, DomainError> {
    if input.user_id <= 0 || input.book_id <= 0 {
        return Err(DomainError::Validation("Invalid user or book id.".into()));
    }

    // The user must exist before the loan is persisted. The book stays an
    // id + caller-supplied title: the title is display denormalization.
    let user = User::find_by_id(input.user_id).one(conn).await?;
    if user.is_none() {
        return Err(DomainError::Validation(format!(
            "User not found. user_id={}",
            input.user_id
        )));
    }

    let new_loan = loan::ActiveModel {
        user_id: Set(input.user_id),
        book_id: Set(input.book_id),
        loan_date: Set(Utc::now().to_rfc3339()),
        due_date: Set(input.due_date),
        return_date: Set(None),
        ..Default::default()
    };

    let saved = new_loan.insert(conn).await?;
    Ok(LoanDto::from_model(saved, input.book_title))
}

pub async fn delete_loan<C: ConnectionTrait>(conn: &C, id: i32) -> Result<(), DomainError> {
    let loan = Loan::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("No loan record to delete. id={}", id)))?;
    loan.delete(conn).await?;
    Ok(())
}

pub async fn get_loan<C: ConnectionTrait>(conn: &C, id: i32) -> Result<LoanDto, DomainError> {
    let (loan, book) = Loan::find_by_id(id)
        .find_also_related(Book)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Loan not found. id={}", id)))?;

    let title = book.map(|b| b.title).unwrap_or_default();
    Ok(LoanDto::from_model(loan, title))
}

pub async fn list_loans<C: ConnectionTrait>(conn: &C) -> Result<Vec<LoanDto>, DomainError> {
    let loans = Loan::find().find_also_related(Book).all(conn).await?;

    Ok(loans
        .into_iter()
        .map(|(loan, book)| {
            let title = book.map(|b| b.title).unwrap_or_default();
            LoanDto::from_model(loan, title)
        })
        .collect())
}
