//! User service: CRUD, search and the card-number allocation protocol.

use chrono::Utc;
use sea_orm::*;

use crate::domain::card::next_card_number;
use crate::domain::DomainError;
use crate::models::book::BookDto;
use crate::models::loan::{self, Entity as Loan, LoanDto};
use crate::models::penalty::{self, Entity as Penalty, PenaltyDto};
use crate::models::user::{self, CreateUser, Entity as User, UpdateUser, UserDto};

const MAX_CARD_RETRIES: u32 = 5;

/// Allocate a card number unique at the moment of allocation.
///
/// Each attempt reads the lexicographic maximum of the stored card numbers
/// (safe because every card is 9-digit zero-padded), steps it by one and
/// checks for a collision. The unique index on the column catches the race
/// this retry loop cannot close on its own.
pub async fn generate_unique_card_number<C: ConnectionTrait>(
    conn: &C,
) -> Result<String, DomainError> {
    for _ in 0..MAX_CARD_RETRIES {
        let last = User::find()
            .order_by_desc(user::Column::CardNumber)
            .one(conn)
            .await?
            .map(|u| u.card_number);

        let candidate = next_card_number(last.as_deref());

        let exists = User::find()
            .filter(user::Column::CardNumber.eq(&candidate))
            .one(conn)
            .await?
            .is_some();

        if !exists {
            return Ok(candidate);
        }
    }

    Err(DomainError::AllocationExhausted)
}

// Loose format check, in line with the rest of the input validation
fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

pub async fn list_users<C: ConnectionTrait>(conn: &C) -> Result<Vec<UserDto>, DomainError> {
    let users = User::find().all(conn).await?;
    if users.is_empty() {
        return Err(DomainError::NotFound("No registered users found.".into()));
    }
    Ok(users.into_iter().map(UserDto::from).collect())
}

pub async fn get_user<C: ConnectionTrait>(conn: &C, id: i32) -> Result<UserDto, DomainError> {
    if id <= 0 {
        return Err(DomainError::Validation("Invalid user id.".into()));
    }
    let user = User::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("User not found. id={}", id)))?;
    Ok(user.into())
}

pub async fn get_user_by_card_number<C: ConnectionTrait>(
    conn: &C,
    card_number: &str,
) -> Result<UserDto, DomainError> {
    if card_number.trim().is_empty() {
        return Err(DomainError::Validation("Card number must not be empty.".into()));
    }
    let user = User::find()
        .filter(user::Column::CardNumber.eq(card_number))
        .one(conn)
        .await?
        .ok_or_else(|| {
            DomainError::NotFound(format!("No user with card number: {}", card_number))
        })?;
    Ok(user.into())
}

pub async fn search_users_by_name<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> Result<Vec<UserDto>, DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation(
            "A non-empty name is required for search.".into(),
        ));
    }
    let users = User::find()
        .filter(super::contains_term(user::Column::FullName, name))
        .all(conn)
        .await?;
    if users.is_empty() {
        return Err(DomainError::NotFound(format!(
            "No user matching '{}' found.",
            name
        )));
    }
    Ok(users.into_iter().map(UserDto::from).collect())
}

pub async fn create_user<C: ConnectionTrait>(
    conn: &C,
    input: CreateUser,
) -> Result<UserDto, DomainError> {
    if input.full_name.trim().is_empty() {
        return Err(DomainError::Validation("Full name must not be empty.".into()));
    }
    if input.email.trim().is_empty() {
        return Err(DomainError::Validation("Email must not be empty.".into()));
    }
    if !is_valid_email(&input.email) {
        return Err(DomainError::Validation("Invalid email format.".into()));
    }
    if input.phone_number.trim().is_empty() {
        return Err(DomainError::Validation("Phone number must not be empty.".into()));
    }

    let duplicate = User::find()
        .all(conn)
        .await?
        .into_iter()
        .any(|u| u.email.eq_ignore_ascii_case(&input.email));
    if duplicate {
        return Err(DomainError::Validation(format!(
            "This email address is already registered: {}",
            input.email
        )));
    }

    let card_number = generate_unique_card_number(conn).await?;

    let new_user = user::ActiveModel {
        full_name: Set(input.full_name),
        email: Set(input.email),
        phone_number: Set(input.phone_number),
        card_number: Set(card_number),
        created_at: Set(Utc::now().to_rfc3339()),
        expire_at: Set(input.expire_at),
        ..Default::default()
    };

    let saved = new_user.insert(conn).await?;
    Ok(saved.into())
}

/// Partial update of name/email/phone. The card number is immutable.
pub async fn update_user<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    input: UpdateUser,
) -> Result<(), DomainError> {
    if id <= 0 {
        return Err(DomainError::Validation("Invalid user id.".into()));
    }
    let user = User::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("No user to update. id={}", id)))?;

    let mut active: user::ActiveModel = user.into();
    if let Some(full_name) = input.full_name {
        active.full_name = Set(full_name);
    }
    if let Some(email) = input.email {
        active.email = Set(email);
    }
    if let Some(phone_number) = input.phone_number {
        active.phone_number = Set(phone_number);
    }
    active.update(conn).await?;
    Ok(())
}

pub async fn delete_user<C: ConnectionTrait>(conn: &C, id: i32) -> Result<(), DomainError> {
    if id <= 0 {
        return Err(DomainError::Validation("Invalid user id.".into()));
    }
    let user = User::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("No user to delete. id={}", id)))?;
    user.delete(conn).await?;
    Ok(())
}

pub async fn user_loans<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
) -> Result<Vec<LoanDto>, DomainError> {
    if user_id <= 0 {
        return Err(DomainError::Validation("Invalid user id.".into()));
    }
    let loans = Loan::find()
        .filter(loan::Column::UserId.eq(user_id))
        .find_also_related(crate::models::book::Entity)
        .all(conn)
        .await?;
    if loans.is_empty() {
        return Err(DomainError::NotFound(format!(
            "No loan records for user. user_id={}",
            user_id
        )));
    }
    Ok(loans
        .into_iter()
        .map(|(l, book)| {
            let title = book.map(|b| b.title).unwrap_or_default();
            LoanDto::from_model(l, title)
        })
        .collect())
}

pub async fn user_penalties<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
) -> Result<Vec<PenaltyDto>, DomainError> {
    if user_id <= 0 {
        return Err(DomainError::Validation("Invalid user id.".into()));
    }
    let penalties = Penalty::find()
        .filter(penalty::Column::UserId.eq(user_id))
        .all(conn)
        .await?;
    if penalties.is_empty() {
        return Err(DomainError::NotFound(format!(
            "No penalty records for user. user_id={}",
            user_id
        )));
    }
    Ok(penalties.into_iter().map(PenaltyDto::from).collect())
}

/// Books currently out on loan to the user (loans with no return date).
pub async fn user_borrowed_books<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
) -> Result<Vec<BookDto>, DomainError> {
    if user_id <= 0 {
        return Err(DomainError::Validation("Invalid user id.".into()));
    }
    let loans = Loan::find()
        .filter(loan::Column::UserId.eq(user_id))
        .filter(loan::Column::ReturnDate.is_null())
        .find_also_related(crate::models::book::Entity)
        .all(conn)
        .await?;

    let books: Vec<BookDto> = loans
        .into_iter()
        .filter_map(|(_, book)| book.map(BookDto::from))
        .collect();
    if books.is_empty() {
        return Err(DomainError::NotFound(format!(
            "No borrowed books for user. user_id={}",
            user_id
        )));
    }
    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_check_is_loose_but_sane() {
        assert!(is_valid_email("reader@example.com"));
        assert!(!is_valid_email("reader"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("reader@nodot"));
    }
}
