use sea_orm::*;

use crate::domain::DomainError;
use crate::models::shelf_layout::{self, Entity as ShelfLayoutPreference};

pub async fn get_preference<C: ConnectionTrait>(
    conn: &C,
    admin_id: i32,
) -> Result<Option<shelf_layout::Model>, DomainError> {
    if admin_id <= 0 {
        return Err(DomainError::Validation("Invalid admin id.".into()));
    }
    Ok(ShelfLayoutPreference::find()
        .filter(shelf_layout::Column::AdminId.eq(admin_id))
        .one(conn)
        .await?)
}

/// Upsert: one preference row per admin.
pub async fn set_preference<C: ConnectionTrait>(
    conn: &C,
    admin_id: i32,
    is_block_layout: bool,
) -> Result<(), DomainError> {
    if admin_id <= 0 {
        return Err(DomainError::Validation("Invalid admin id.".into()));
    }
    let existing = ShelfLayoutPreference::find()
        .filter(shelf_layout::Column::AdminId.eq(admin_id))
        .one(conn)
        .await?;

    match existing {
        Some(model) => {
            let mut active: shelf_layout::ActiveModel = model.into();
            active.is_block_layout = Set(is_block_layout);
            active.update(conn).await?;
        }
        None => {
            let pref = shelf_layout::ActiveModel {
                admin_id: Set(admin_id),
                is_block_layout: Set(is_block_layout),
                ..Default::default()
            };
            pref.insert(conn).await?;
        }
    }
    Ok(())
}

pub async fn list_preferences<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<shelf_layout::Model>, DomainError> {
    Ok(ShelfLayoutPreference::find().all(conn).await?)
}
