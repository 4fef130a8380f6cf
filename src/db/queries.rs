//! Statements for the `stocks` table.
//!
//! Every function here is pure: it renders a [`Statement`] and touches neither
//! the pool nor the network.

use crate::db::sql::{BuildError, Delete, Insert, Select, Statement, Update};
use crate::models::{Stock, StockPatch};


/// Table name.
pub const STOCKS_TABLE: &str = "stocks";

/// Identifier column.
pub const ID_COLUMN: &str = "stockid";

/// Column order shared by inserts and single-row selects.
pub const STOCK_COLUMNS: [&str; 4] = [ID_COLUMN, "name", "price", "company"];

/// Selects every row and every column.
///
/// # Errors
/// Returns [`BuildError`] only on an internal builder fault.
pub fn select_all() -> Result<Statement, BuildError> {
    Select::from_table(STOCKS_TABLE).build()
}

/// Selects the stock with the given id.
///
/// # Errors
/// Returns [`BuildError`] only on an internal builder fault.
pub fn select_by_id(id: i64) -> Result<Statement, BuildError> {
    Select::from_table(STOCKS_TABLE)
        .columns(&STOCK_COLUMNS)
        .where_eq(ID_COLUMN, id)
        .build()
}

/// Inserts a full row.
///
/// # Errors
/// Returns [`BuildError`] only on an internal builder fault.
pub fn insert(stock: &Stock) -> Result<Statement, BuildError> {
    Insert::into_table(STOCKS_TABLE)
        .columns(&STOCK_COLUMNS)
        .values(vec![
            stock.id.into(),
            stock.name.as_str().into(),
            stock.price.into(),
            stock.company.as_str().into(),
        ])
        .build()
}

/// Overwrites only the columns the patch sets.
///
/// # Errors
/// Returns [`BuildError::EmptyAssignments`] when the patch sets nothing.
pub fn update_by_id(id: i64, patch: &StockPatch) -> Result<Statement, BuildError> {
    Update::table(STOCKS_TABLE)
        .set_if("name", patch.name())
        .set_if("price", patch.price())
        .set_if("company", patch.company())
        .where_eq(ID_COLUMN, id)
        .build()
}

/// Deletes the stock with the given id.
///
/// # Errors
/// Returns [`BuildError`] only on an internal builder fault.
pub fn delete_by_id(id: i64) -> Result<Statement, BuildError> {
    Delete::from_table(STOCKS_TABLE)
        .where_eq(ID_COLUMN, id)
        .build()
}
