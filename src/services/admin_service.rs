use sea_orm::*;

use crate::auth;
use crate::domain::DomainError;
use crate::models::admin::{self, AdminDto, CreateAdmin, Entity as Admin};

pub async fn list_admins<C: ConnectionTrait>(conn: &C) -> Result<Vec<AdminDto>, DomainError> {
    let admins = Admin::find().all(conn).await?;
    Ok(admins.into_iter().map(AdminDto::from).collect())
}

pub async fn get_admin<C: ConnectionTrait>(conn: &C, id: i32) -> Result<AdminDto, DomainError> {
    let admin = Admin::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Admin not found. id={}", id)))?;
    Ok(admin.into())
}

pub async fn get_admin_by_username<C: ConnectionTrait>(
    conn: &C,
    username: &str,
) -> Result<AdminDto, DomainError> {
    let admin = Admin::find()
        .filter(admin::Column::Username.eq(username))
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Admin not found. username='{}'", username)))?;
    Ok(admin.into())
}

pub async fn create_admin<C: ConnectionTrait>(
    conn: &C,
    input: CreateAdmin,
) -> Result<AdminDto, DomainError> {
    let username_taken = Admin::find()
        .filter(admin::Column::Username.eq(&input.username))
        .one(conn)
        .await?
        .is_some();
    if username_taken {
        return Err(DomainError::Validation(format!(
            "This username is already taken: '{}'",
            input.username
        )));
    }

    let email_taken = Admin::find()
        .filter(admin::Column::Email.eq(&input.email))
        .one(conn)
        .await?
        .is_some();
    if email_taken {
        return Err(DomainError::Validation(format!(
            "This email address is already registered: '{}'",
            input.email
        )));
    }

    let password_hash = auth::hash_password(&input.password)?;
    let new_admin = admin::ActiveModel {
        username: Set(input.username),
        email: Set(input.email),
        password_hash: Set(password_hash),
        ..Default::default()
    };

    let saved = new_admin.insert(conn).await?;
    Ok(saved.into())
}

/// Check credentials; the same message for both failure modes, so login
/// probes cannot distinguish an unknown username from a wrong password.
pub async fn validate_login<C: ConnectionTrait>(
    conn: &C,
    username: &str,
    password: &str,
) -> Result<admin::Model, DomainError> {
    let admin = Admin::find()
        .filter(admin::Column::Username.eq(username))
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::Unauthorized("Invalid username or password.".into()))?;

    if !auth::verify_password(password, &admin.password_hash)? {
        return Err(DomainError::Unauthorized(
            "Invalid username or password.".into(),
        ));
    }
    Ok(admin)
}

pub async fn delete_admin<C: ConnectionTrait>(conn: &C, id: i32) -> Result<(), DomainError> {
    let admin = Admin::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("No admin to delete. id={}", id)))?;
    admin.delete(conn).await?;
    Ok(())
}
