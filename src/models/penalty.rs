use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "penalties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub reason: String,
    /// Currency amount in a REAL column; validated positive on creation and
    /// never summed or otherwise aggregated server-side
    pub amount: f64,
    pub issued_at: String,
    pub is_paid: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Deserialize)]
pub struct CreatePenalty {
    pub user_id: i32,
    pub reason: String,
    pub amount: f64,
}

// DTO for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct PenaltyDto {
    pub id: i32,
    pub user_id: i32,
    pub reason: String,
    pub amount: f64,
    pub issued_at: String,
    pub is_paid: bool,
}

impl From<Model> for PenaltyDto {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            reason: model.reason,
            amount: model.amount,
            issued_at: model.issued_at,
            is_paid: model.is_paid,
        }
    }
}
