use sea_orm::*;

use crate::domain::DomainError;
use crate::models::book::{self, BookDto, Entity as Book};
use crate::models::category::{self, CreateCategory, Entity as Category, UpdateCategory};

pub async fn list_categories<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<category::Model>, DomainError> {
    Ok(Category::find().all(conn).await?)
}

pub async fn get_category<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<category::Model, DomainError> {
    Category::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Category not found. id={}", id)))
}

// Unlike author search, an empty result here is not an error
pub async fn search_categories_by_name<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> Result<Vec<category::Model>, DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation(
            "Category name must not be empty.".into(),
        ));
    }
    Ok(Category::find()
        .filter(super::contains_term(category::Column::Name, name))
        .all(conn)
        .await?)
}

pub async fn create_category<C: ConnectionTrait>(
    conn: &C,
    input: CreateCategory,
) -> Result<category::Model, DomainError> {
    if input.name.trim().is_empty() {
        return Err(DomainError::Validation(
            "Category name must not be empty.".into(),
        ));
    }
    let duplicate = Category::find()
        .filter(super::contains_term(category::Column::Name, &input.name))
        .all(conn)
        .await?
        .into_iter()
        .any(|c| c.name.eq_ignore_ascii_case(&input.name));
    if duplicate {
        return Err(DomainError::Validation(
            "A category with this name already exists.".into(),
        ));
    }

    let new_category = category::ActiveModel {
        name: Set(input.name),
        ..Default::default()
    };
    Ok(new_category.insert(conn).await?)
}

pub async fn update_category<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    input: UpdateCategory,
) -> Result<(), DomainError> {
    let category = Category::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound("Category not found.".into()))?;

    let mut active: category::ActiveModel = category.into();
    active.name = Set(input.name);
    active.update(conn).await?;
    Ok(())
}

pub async fn delete_category<C: ConnectionTrait>(conn: &C, id: i32) -> Result<(), DomainError> {
    let category = Category::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| DomainError::NotFound("Category not found.".into()))?;
    category.delete(conn).await?;
    Ok(())
}

pub async fn books_by_category<C: ConnectionTrait>(
    conn: &C,
    category_id: i32,
) -> Result<Vec<BookDto>, DomainError> {
    if Category::find_by_id(category_id).one(conn).await?.is_none() {
        return Err(DomainError::NotFound(format!(
            "Category not found. id={}",
            category_id
        )));
    }
    let books = Book::find()
        .filter(book::Column::CategoryId.eq(category_id))
        .all(conn)
        .await?;
    Ok(books.into_iter().map(BookDto::from).collect())
}
