//! Shelf placement: physical section/row/column locations holding books.
//!
//! Membership mutation is deliberately tolerant: the same book can be placed
//! twice, and removing a book that is not on the shelf is a no-op.

use sea_orm::*;

use crate::domain::DomainError;
use crate::models::book::{BookDto, Entity as Book};
use crate::models::shelf::{self, CreateShelf, Entity as Shelf, ShelfDto};
use crate::models::shelf_book::{self, Entity as ShelfBook};

pub async fn list_shelves<C: ConnectionTrait>(conn: &C) -> Result<Vec<ShelfDto>, DomainError> {
    let shelves = Shelf::find().all(conn).await?;
    Ok(shelves.into_iter().map(ShelfDto::from).collect())
}

pub async fn get_shelf<C: ConnectionTrait>(conn: &C, id: i32) -> Result<ShelfDto, DomainError> {
    if id <= 0 {
        return Err(DomainError::Validation("Invalid shelf id.".into()));
    }
    let shelf = Shelf::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Shelf not found. id={}", id)))?;
    Ok(shelf.into())
}

pub async fn create_shelf<C: ConnectionTrait>(
    conn: &C,
    input: CreateShelf,
) -> Result<ShelfDto, DomainError> {
    if input.section.trim().is_empty() {
        return Err(DomainError::Validation("Section must not be empty.".into()));
    }
    if input.row <= 0 || input.column <= 0 {
        return Err(DomainError::Validation(
            "Row and column must be positive.".into(),
        ));
    }

    let new_shelf = shelf::ActiveModel {
        section: Set(input.section.trim().to_owned()),
        row: Set(input.row),
        column: Set(input.column),
        ..Default::default()
    };
    let saved = new_shelf.insert(conn).await?;
    Ok(saved.into())
}

pub async fn delete_shelf<C: ConnectionTrait>(conn: &C, id: i32) -> Result<(), DomainError> {
    if id <= 0 {
        return Err(DomainError::Validation("Invalid shelf id.".into()));
    }
    let shelf = Shelf::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("No shelf to delete. id={}", id)))?;
    shelf.delete(conn).await?;
    Ok(())
}

pub async fn add_book_to_shelf<C: ConnectionTrait>(
    conn: &C,
    shelf_id: i32,
    book_id: i32,
) -> Result<(), DomainError> {
    if shelf_id <= 0 || book_id <= 0 {
        return Err(DomainError::Validation("Invalid shelf or book id.".into()));
    }
    if Shelf::find_by_id(shelf_id).one(conn).await?.is_none() {
        return Err(DomainError::NotFound(format!(
            "Shelf not found. id={}",
            shelf_id
        )));
    }
    if Book::find_by_id(book_id).one(conn).await?.is_none() {
        return Err(DomainError::Validation(format!(
            "Book not found. book_id={}",
            book_id
        )));
    }

    let placement = shelf_book::ActiveModel {
        shelf_id: Set(shelf_id),
        book_id: Set(book_id),
        ..Default::default()
    };
    placement.insert(conn).await?;
    Ok(())
}

pub async fn remove_book_from_shelf<C: ConnectionTrait>(
    conn: &C,
    shelf_id: i32,
    book_id: i32,
) -> Result<(), DomainError> {
    if shelf_id <= 0 || book_id <= 0 {
        return Err(DomainError::Validation("Invalid shelf or book id.".into()));
    }
    if Shelf::find_by_id(shelf_id).one(conn).await?.is_none() {
        return Err(DomainError::NotFound(format!(
            "Shelf not found. id={}",
            shelf_id
        )));
    }

    // Zero rows affected is fine: removing an absent book is a no-op
    ShelfBook::delete_many()
        .filter(shelf_book::Column::ShelfId.eq(shelf_id))
        .filter(shelf_book::Column::BookId.eq(book_id))
        .exec(conn)
        .await?;
    Ok(())
}

pub async fn books_in_shelf<C: ConnectionTrait>(
    conn: &C,
    shelf_id: i32,
) -> Result<Vec<BookDto>, DomainError> {
    if shelf_id <= 0 {
        return Err(DomainError::Validation("Invalid shelf id.".into()));
    }
    if Shelf::find_by_id(shelf_id).one(conn).await?.is_none() {
        return Err(DomainError::NotFound(format!(
            "Shelf not found. id={}",
            shelf_id
        )));
    }

    let placements = ShelfBook::find()
        .filter(shelf_book::Column::ShelfId.eq(shelf_id))
        .find_also_related(Book)
        .all(conn)
        .await?;

    Ok(placements
        .into_iter()
        .filter_map(|(_, book)| book.map(BookDto::from))
        .collect())
}
