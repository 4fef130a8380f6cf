//! Database module for PostgreSQL connection and statements.

mod pool;
pub mod queries;
pub mod sql;

pub use pool::DatabasePool;
pub use sql::{BuildError, SqlValue, Statement};
