use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub category_id: i32,
    pub publisher_id: i32,
    pub publication_year: i32,
    pub isbn: String,
    pub quantity: i32,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id"
    )]
    Author,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::publisher::Entity",
        from = "Column::PublisherId",
        to = "super::publisher::Column::Id"
    )]
    Publisher,
    #[sea_orm(has_many = "super::loan::Entity")]
    Loans,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::publisher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publisher.def()
    }
}

impl Related<super::loan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Loans.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author_id: i32,
    pub category_id: i32,
    pub publisher_id: i32,
    pub publication_year: i32,
    pub isbn: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct UpdateBook {
    pub title: String,
    pub author_id: i32,
    pub category_id: i32,
    pub publisher_id: i32,
    pub publication_year: i32,
    pub isbn: String,
    pub quantity: i32,
    pub is_active: bool,
}

// DTO for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub category_id: i32,
    pub publisher_id: i32,
    pub publication_year: i32,
    pub isbn: String,
    pub quantity: i32,
    pub is_active: bool,
    pub created_at: String,
}

impl From<Model> for BookDto {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author_id: model.author_id,
            category_id: model.category_id,
            publisher_id: model.publisher_id,
            publication_year: model.publication_year,
            isbn: model.isbn,
            quantity: model.quantity,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
