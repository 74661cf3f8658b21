use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "loans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub loan_date: String,
    pub due_date: String,
    pub return_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId",
        to = "super::book::Column::Id"
    )]
    Book,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Deserialize)]
pub struct CreateLoan {
    pub user_id: i32,
    pub book_id: i32,
    /// Carried through verbatim for display; not re-fetched from the book
    pub book_title: String,
    pub due_date: String,
}

// DTO for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct LoanDto {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub book_title: String,
    pub loan_date: String,
    pub due_date: String,
    pub return_date: Option<String>,
    pub is_returned: bool,
}

impl LoanDto {
    pub fn from_model(model: Model, book_title: String) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            book_id: model.book_id,
            book_title,
            is_returned: model.return_date.is_some(),
            loan_date: model.loan_date,
            due_date: model.due_date,
            return_date: model.return_date,
        }
    }
}
