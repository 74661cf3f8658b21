//! Book service.
//!
//! Author, category and publisher are all resolved before any write, so a
//! partially-invalid request never produces a partially-written book.

use chrono::Utc;
use sea_orm::*;

use crate::domain::DomainError;
use crate::models::author::Entity as Author;
use crate::models::book::{self, BookDto, CreateBook, Entity as Book, UpdateBook};
use crate::models::category::Entity as Category;
use crate::models::publisher::Entity as Publisher;

async fn check_references<C: ConnectionTrait>(
    conn: &C,
    author_id: i32,
    category_id: i32,
    publisher_id: i32,
) -> Result<(), DomainError> {
    if Author::find_by_id(author_id).one(conn).await?.is_none() {
        return Err(DomainError::Validation(format!(
            "Author not found. author_id={}",
            author_id
        )));
    }
    if Category::find_by_id(category_id).one(conn).await?.is_none() {
        return Err(DomainError::Validation(format!(
            "Category not found. category_id={}",
            category_id
        )));
    }
    if Publisher::find_by_id(publisher_id).one(conn).await?.is_none() {
        return Err(DomainError::Validation(format!(
            "Publisher not found. publisher_id={}",
            publisher_id
        )));
    }
    Ok(())
}

pub async fn list_books<C: ConnectionTrait>(conn: &C) -> Result<Vec<BookDto>, DomainError> {
    let books = Book::find().all(conn).await?;
    if books.is_empty() {
        return Err(DomainError::NotFound("No books found.".into()));
    }
    Ok(books.into_iter().map(BookDto::from).collect())
}

pub async fn get_book<C: ConnectionTrait>(conn: &C, id: i32) -> Result<BookDto, DomainError> {
    let book = Book::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Book not found. id={}", id)))?;
    Ok(book.into())
}

pub async fn search_books_by_title<C: ConnectionTrait>(
    conn: &C,
    title: &str,
) -> Result<Vec<BookDto>, DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation("Book title must not be empty.".into()));
    }
    let books = Book::find()
        .filter(super::contains_term(book::Column::Title, title))
        .all(conn)
        .await?;
    if books.is_empty() {
        return Err(DomainError::NotFound(format!(
            "No book titled '{}' found.",
            title
        )));
    }
    Ok(books.into_iter().map(BookDto::from).collect())
}

pub async fn create_book<C: ConnectionTrait>(
    conn: &C,
    input: CreateBook,
) -> Result<BookDto, DomainError> {
    if input.title.trim().is_empty() {
        return Err(DomainError::Validation("Invalid book title.".into()));
    }

    check_references(conn, input.author_id, input.category_id, input.publisher_id).await?;

    let new_book = book::ActiveModel {
        title: Set(input.title),
        author_id: Set(input.author_id),
        category_id: Set(input.category_id),
        publisher_id: Set(input.publisher_id),
        publication_year: Set(input.publication_year),
        isbn: Set(input.isbn),
        quantity: Set(input.quantity),
        is_active: Set(true),
        created_at: Set(Utc::now().to_rfc3339()),
        ..Default::default()
    };

    let saved = new_book.insert(conn).await?;
    Ok(saved.into())
}

pub async fn update_book<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    input: UpdateBook,
) -> Result<(), DomainError> {
    let book = Book::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("No book to update. id={}", id)))?;

    check_references(conn, input.author_id, input.category_id, input.publisher_id).await?;

    let mut active: book::ActiveModel = book.into();
    active.title = Set(input.title);
    active.author_id = Set(input.author_id);
    active.category_id = Set(input.category_id);
    active.publisher_id = Set(input.publisher_id);
    active.publication_year = Set(input.publication_year);
    active.isbn = Set(input.isbn);
    active.quantity = Set(input.quantity);
    active.is_active = Set(input.is_active);
    active.update(conn).await?;
    Ok(())
}

pub async fn delete_book<C: ConnectionTrait>(conn: &C, id: i32) -> Result<(), DomainError> {
    let book = Book::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("No book to delete. id={}", id)))?;
    book.delete(conn).await?;
    Ok(())
}

pub async fn change_book_author<C: ConnectionTrait>(
    conn: &C,
    book_id: i32,
    new_author_id: i32,
) -> Result<(), DomainError> {
    let book = Book::find_by_id(book_id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Book not found. id={}", book_id)))?;

    if book.author_id == new_author_id {
        return Err(DomainError::Validation(
            "Book already belongs to this author.".into(),
        ));
    }
    if Author::find_by_id(new_author_id).one(conn).await?.is_none() {
        return Err(DomainError::Validation(format!(
            "Author not found. author_id={}",
            new_author_id
        )));
    }

    let mut active: book::ActiveModel = book.into();
    active.author_id = Set(new_author_id);
    active.update(conn).await?;
    Ok(())
}
