pub mod admin_service;
pub mod author_service;
pub mod book_service;
pub mod category_service;
pub mod loan_service;
pub mod penalty_service;
pub mod publisher_service;
pub mod shelf_layout_service;
pub mod shelf_service;
pub mod user_service;

use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::ColumnTrait;

/// Substring match where `%`, `_` and `\` in the term are literal characters,
/// not LIKE wildcards. A search for "%" only finds rows containing a percent
/// sign instead of every row.
pub(crate) fn contains_term<C: ColumnTrait>(column: C, term: &str) -> SimpleExpr {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    Expr::col(column).like(LikeExpr::new(format!("%{}%", escaped)).escape('\\'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{self, Entity as User};
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    #[test]
    fn search_term_wildcards_are_escaped() {
        let sql = User::find()
            .filter(contains_term(user::Column::FullName, "50%_off\\"))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains(r"%50\%\_off\\%"), "sql was: {}", sql);
        assert!(sql.contains("ESCAPE"), "sql was: {}", sql);
    }
}
