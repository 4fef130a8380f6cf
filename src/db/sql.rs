//! Parameterized SQL statement builder.
//!
//! Builders render PostgreSQL text with numbered placeholders (`$1`, `$2`, ...)
//! and collect the bound values separately, so user input never reaches the
//! statement text. Rendering is pure; execution happens through
//! [`Statement::query`] and [`Statement::query_as`].
//!
//! Safe defaults: `INSERT` needs at least one column and one value per column,
//! `UPDATE` needs at least one assignment, `DELETE` needs a `WHERE` clause.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{FromRow, Postgres};
use std::fmt::Write as _;


/// A value bound to a statement placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// 64-bit integer (`BIGINT`).
    Int(i64),
    /// Double precision float.
    Float(f64),
    /// Text.
    Text(String),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

/// Statement construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// `INSERT` without columns.
    #[error("insert into {table} has no columns")]
    NoColumns {
        /// Target table.
        table: &'static str,
    },

    /// `INSERT` whose value count differs from its column count.
    #[error("insert into {table} has {columns} columns but {values} values")]
    ColumnValueMismatch {
        /// Target table.
        table: &'static str,
        /// Number of columns.
        columns: usize,
        /// Number of values.
        values: usize,
    },

    /// `UPDATE` without any `SET` assignment.
    #[error("update of {table} has no assignments")]
    EmptyAssignments {
        /// Target table.
        table: &'static str,
    },

    /// `DELETE` without a `WHERE` clause.
    #[error("delete from {table} has no filter")]
    MissingFilter {
        /// Target table.
        table: &'static str,
    },
}

/// A rendered SQL command plus its ordered bound values, not yet executed.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<SqlValue>,
}

impl Statement {
    /// Statement text with `$n` placeholders.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound values, in placeholder order.
    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Prepares the statement for execution with every value bound.
    pub fn query(&self) -> Query<'_, Postgres, PgArguments> {
        self.params
            .iter()
            .fold(sqlx::query::<Postgres>(&self.sql), |query, value| match value {
                SqlValue::Int(v) => query.bind(*v),
                SqlValue::Float(v) => query.bind(*v),
                SqlValue::Text(v) => query.bind(v.as_str()),
            })
    }

    /// Prepares the statement for execution, mapping each row to `O`.
    pub fn query_as<O>(&self) -> QueryAs<'_, Postgres, O, PgArguments>
    where
        O: for<'r> FromRow<'r, PgRow>,
    {
        self.params
            .iter()
            .fold(sqlx::query_as::<Postgres, O>(&self.sql), |query, value| match value {
                SqlValue::Int(v) => query.bind(*v),
                SqlValue::Float(v) => query.bind(*v),
                SqlValue::Text(v) => query.bind(v.as_str()),
            })
    }
}

/// Accumulates parameters and hands out their placeholders.
#[derive(Debug, Default)]
struct Params {
    values: Vec<SqlValue>,
}

impl Params {
    fn push(&mut self, value: SqlValue) -> String {
        self.values.push(value);
        format!("${}", self.values.len())
    }
}

/// `column = value` conditions joined with `AND`.
#[derive(Debug, Clone, Default)]
struct Filter {
    conditions: Vec<(&'static str, SqlValue)>,
}

impl Filter {
    fn push(&mut self, column: &'static str, value: SqlValue) {
        self.conditions.push((column, value));
    }

    fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    fn render(self, sql: &mut String, params: &mut Params) {
        for (i, (column, value)) in self.conditions.into_iter().enumerate() {
            let keyword = if i == 0 { " WHERE " } else { " AND " };
            let placeholder = params.push(value);
            let _ = write!(sql, "{keyword}{column} = {placeholder}");
        }
    }
}

/// `SELECT` builder.
#[derive(Debug, Clone)]
pub struct Select {
    table: &'static str,
    columns: Vec<&'static str>,
    filter: Filter,
}

impl Select {
    /// Starts a select over `table`. With no columns it selects `*`.
    #[must_use]
    pub fn from_table(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            filter: Filter::default(),
        }
    }

    /// Sets the projected columns.
    #[must_use]
    pub fn columns(mut self, columns: &[&'static str]) -> Self {
        self.columns = columns.to_vec();
        self
    }

    /// Adds an equality condition.
    #[must_use]
    pub fn where_eq(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.filter.push(column, value.into());
        self
    }

    /// Renders the statement.
    ///
    /// # Errors
    /// Never fails today; the signature matches the other builders.
    pub fn build(self) -> Result<Statement, BuildError> {
        let projection = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };

        let mut sql = format!("SELECT {} FROM {}", projection, self.table);
        let mut params = Params::default();
        self.filter.render(&mut sql, &mut params);

        Ok(Statement {
            sql,
            params: params.values,
        })
    }
}

/// `INSERT` builder for a single row.
#[derive(Debug, Clone)]
pub struct Insert {
    table: &'static str,
    columns: Vec<&'static str>,
    values: Vec<SqlValue>,
}

impl Insert {
    /// Starts an insert into `table`.
    #[must_use]
    pub fn into_table(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Sets the target columns.
    #[must_use]
    pub fn columns(mut self, columns: &[&'static str]) -> Self {
        self.columns = columns.to_vec();
        self
    }

    /// Sets the row values, in column order.
    #[must_use]
    pub fn values(mut self, values: Vec<SqlValue>) -> Self {
        self.values = values;
        self
    }

    /// Renders the statement.
    ///
    /// # Errors
    /// Returns [`BuildError::NoColumns`] or [`BuildError::ColumnValueMismatch`].
    pub fn build(self) -> Result<Statement, BuildError> {
        if self.columns.is_empty() {
            return Err(BuildError::NoColumns { table: self.table });
        }
        if self.columns.len() != self.values.len() {
            return Err(BuildError::ColumnValueMismatch {
                table: self.table,
                columns: self.columns.len(),
                values: self.values.len(),
            });
        }

        let mut params = Params::default();
        let placeholders: Vec<String> = self
            .values
            .into_iter()
            .map(|value| params.push(value))
            .collect();

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.columns.join(", "),
            placeholders.join(", ")
        );

        Ok(Statement {
            sql,
            params: params.values,
        })
    }
}

/// `UPDATE` builder.
#[derive(Debug, Clone)]
pub struct Update {
    table: &'static str,
    assignments: Vec<(&'static str, SqlValue)>,
    filter: Filter,
}

impl Update {
    /// Starts an update of `table`.
    #[must_use]
    pub fn table(table: &'static str) -> Self {
        Self {
            table,
            assignments: Vec::new(),
            filter: Filter::default(),
        }
    }

    /// Adds a `column = value` assignment.
    #[must_use]
    pub fn set(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.assignments.push((column, value.into()));
        self
    }

    /// Adds an assignment when `value` is `Some`.
    #[must_use]
    pub fn set_if<V: Into<SqlValue>>(self, column: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(column, value),
            None => self,
        }
    }

    /// Adds an equality condition.
    #[must_use]
    pub fn where_eq(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.filter.push(column, value.into());
        self
    }

    /// Renders the statement.
    ///
    /// # Errors
    /// Returns [`BuildError::EmptyAssignments`] when nothing would be set.
    pub fn build(self) -> Result<Statement, BuildError> {
        if self.assignments.is_empty() {
            return Err(BuildError::EmptyAssignments { table: self.table });
        }

        let mut params = Params::default();
        let assignments: Vec<String> = self
            .assignments
            .into_iter()
            .map(|(column, value)| format!("{} = {}", column, params.push(value)))
            .collect();

        let mut sql = format!("UPDATE {} SET {}", self.table, assignments.join(", "));
        self.filter.render(&mut sql, &mut params);

        Ok(Statement {
            sql,
            params: params.values,
        })
    }
}

/// `DELETE` builder.
#[derive(Debug, Clone)]
pub struct Delete {
    table: &'static str,
    filter: Filter,
}

impl Delete {
    /// Starts a delete from `table`.
    #[must_use]
    pub fn from_table(table: &'static str) -> Self {
        Self {
            table,
            filter: Filter::default(),
        }
    }

    /// Adds an equality condition.
    #[must_use]
    pub fn where_eq(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.filter.push(column, value.into());
        self
    }

    /// Renders the statement.
    ///
    /// # Errors
    /// Returns [`BuildError::MissingFilter`] for an unconditional delete.
    pub fn build(self) -> Result<Statement, BuildError> {
        if self.filter.is_empty() {
            return Err(BuildError::MissingFilter { table: self.table });
        }

        let mut sql = format!("DELETE FROM {}", self.table);
        let mut params = Params::default();
        self.filter.render(&mut sql, &mut params);

        Ok(Statement {
            sql,
            params: params.values,
        })
    }
}
