use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shelves")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub section: String,
    pub row: i32,
    pub column: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shelf_book::Entity")]
    ShelfBooks,
}

impl Related<super::shelf_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShelfBooks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Deserialize)]
pub struct CreateShelf {
    pub section: String,
    pub row: i32,
    pub column: i32,
}

// DTO for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ShelfDto {
    pub id: i32,
    pub section: String,
    pub row: i32,
    pub column: i32,
}

impl From<Model> for ShelfDto {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            section: model.section,
            row: model.row,
            column: model.column,
        }
    }
}
