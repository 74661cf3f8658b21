use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-admin choice between the two shelf-browsing layouts.
/// true = A-Z blocks, false = A-Z shelves. One row per admin (upsert).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shelf_layout_preferences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub admin_id: i32,
    pub is_block_layout: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
