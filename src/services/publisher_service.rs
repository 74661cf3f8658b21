use sea_orm::*;

use crate::domain::DomainError;
use crate::models::book::{self, BookDto, Entity as Book};
use crate::models::publisher::{self, CreatePublisher, Entity as Publisher, UpdatePublisher};

pub async fn list_publishers<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<publisher::Model>, DomainError> {
    Ok(Publisher::find().all(conn).await?)
}

pub async fn get_publisher<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<publisher::Model, DomainError> {
    if id <= 0 {
        return Err(DomainError::Validation("Invalid publisher id.".into()));
    }
    Publisher::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Publisher not found. id={}", id)))
}

pub async fn search_publishers_by_name<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> Result<Vec<publisher::Model>, DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation(
            "Publisher name must not be empty.".into(),
        ));
    }
    Ok(Publisher::find()
        .filter(super::contains_term(publisher::Column::Name, name))
        .all(conn)
        .await?)
}

pub async fn create_publisher<C: ConnectionTrait>(
    conn: &C,
    input: CreatePublisher,
) -> Result<publisher::Model, DomainError> {
    if input.name.trim().is_empty() {
        return Err(DomainError::Validation("Publisher name must not be empty.".into()));
    }
    if input.address.trim().is_empty() {
        return Err(DomainError::Validation("Address must not be empty.".into()));
    }
    if input.phone.trim().is_empty() {
        return Err(DomainError::Validation("Phone must not be empty.".into()));
    }
    if input.email.trim().is_empty() {
        return Err(DomainError::Validation("Email must not be empty.".into()));
    }

    let new_publisher = publisher::ActiveModel {
        name: Set(input.name.trim().to_owned()),
        address: Set(input.address.trim().to_owned()),
        phone: Set(input.phone.trim().to_owned()),
        email: Set(input.email.trim().to_owned()),
        ..Default::default()
    };
    Ok(new_publisher.insert(conn).await?)
}

pub async fn update_publisher<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    input: UpdatePublisher,
) -> Result<(), DomainError> {
    if id <= 0 {
        return Err(DomainError::Validation("Invalid publisher id.".into()));
    }
    let publisher = Publisher::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("No publisher to update. id={}", id)))?;

    let mut active: publisher::ActiveModel = publisher.into();
    active.name = Set(input.name);
    active.address = Set(input.address);
    active.phone = Set(input.phone);
    active.email = Set(input.email);
    active.update(conn).await?;
    Ok(())
}

pub async fn delete_publisher<C: ConnectionTrait>(conn: &C, id: i32) -> Result<(), DomainError> {
    if id <= 0 {
        return Err(DomainError::Validation("Invalid publisher id.".into()));
    }
    let publisher = Publisher::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("No publisher to delete. id={}", id)))?;
    publisher.delete(conn).await?;
    Ok(())
}

pub async fn books_by_publisher<C: ConnectionTrait>(
    conn: &C,
    publisher_id: i32,
) -> Result<Vec<BookDto>, DomainError> {
    if Publisher::find_by_id(publisher_id).one(conn).await?.is_none() {
        return Err(DomainError::NotFound(format!(
            "Publisher not found. id={}",
            publisher_id
        )));
    }
    let books = Book::find()
        .filter(book::Column::PublisherId.eq(publisher_id))
        .all(conn)
        .await?;
    Ok(books.into_iter().map(BookDto::from).collect())
}
