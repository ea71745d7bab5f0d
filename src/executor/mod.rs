pub mod insert;
pub mod scan;
pub mod select;
pub mod table_scan;

use crate::{
    statement::Statement,
    storage::table::Table,
    types::{error::DatabaseError, row::Row},
};

/// Outcome of executing one statement.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionResult {
    Inserted,
    Selected(Vec<Row>),
}

pub fn execute_statement(
    statement: &Statement,
    table: &mut Table,
) -> Result<ExecutionResult, DatabaseError> {
    match statement {
        Statement::Insert(row) => insert::execute(table, row),
        Statement::Select => select::execute(table),
    }
}
