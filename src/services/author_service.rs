use sea_orm::*;

use crate::domain::DomainError;
use crate::models::author::{self, CreateAuthor, Entity as Author, UpdateAuthor};
use crate::models::book::{self, BookDto, Entity as Book};

pub async fn list_authors<C: ConnectionTrait>(conn: &C) -> Result<Vec<author::Model>, DomainError> {
    Ok(Author::find().all(conn).await?)
}

pub async fn get_author<C: ConnectionTrait>(conn: &C, id: i32) -> Result<author::Model, DomainError> {
    Author::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Author not found. id={}", id)))
}

pub async fn search_authors_by_name<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> Result<Vec<author::Model>, DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("Author name must not be empty.".into()));
    }
    let authors = Author::find()
        .filter(super::contains_term(author::Column::Name, name))
        .all(conn)
        .await?;
    if authors.is_empty() {
        return Err(DomainError::NotFound(format!(
            "No author matching '{}' found.",
            name
        )));
    }
    Ok(authors)
}

pub async fn create_author<C: ConnectionTrait>(
    conn: &C,
    input: CreateAuthor,
) -> Result<author::Model, DomainError> {
    if input.name.trim().is_empty() {
        return Err(DomainError::Validation("Author name must not be empty.".into()));
    }
    let duplicate = Author::find()
        .filter(super::contains_term(author::Column::Name, &input.name))
        .all(conn)
        .await?
        .into_iter()
        .any(|a| a.name.eq_ignore_ascii_case(&input.name));
    if duplicate {
        return Err(DomainError::Validation(format!(
            "An author with this name already exists: '{}'",
            input.name
        )));
    }

    let new_author = author::ActiveModel {
        name: Set(input.name),
        ..Default::default()
    };
    Ok(new_author.insert(conn).await?)
}

pub async fn update_author<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    input: UpdateAuthor,
) -> Result<(), DomainError> {
    let author = Author::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("No author to update. id={}", id)))?;

    let mut active: author::ActiveModel = author.into();
    active.name = Set(input.name);
    active.update(conn).await?;
    Ok(())
}

pub async fn delete_author<C: ConnectionTrait>(conn: &C, id: i32) -> Result<(), DomainError> {
    let author = Author::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("No author to delete. id={}", id)))?;
    author.delete(conn).await?;
    Ok(())
}

pub async fn books_by_author<C: ConnectionTrait>(
    conn: &C,
    author_id: i32,
) -> Result<Vec<BookDto>, DomainError> {
    if Author::find_by_id(author_id).one(conn).await?.is_none() {
        return Err(DomainError::NotFound(format!(
            "Author not found. id={}",
            author_id
        )));
    }
    let books = Book::find()
        .filter(book::Column::AuthorId.eq(author_id))
        .all(conn)
        .await?;
    if books.is_empty() {
        return Err(DomainError::NotFound(format!(
            "No books for this author. author_id={}",
            author_id
        )));
    }
    Ok(books.into_iter().map(BookDto::from).collect())
}
