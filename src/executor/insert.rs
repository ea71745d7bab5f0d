use log::debug;

use crate::{
    executor::ExecutionResult,
    storage::table::Table,
    types::{error::DatabaseError, row::Row},
};

/// Append one prepared row. Capacity errors propagate to the caller and the
/// table is unchanged when they occur.
pub fn execute(table: &mut Table, row: &Row) -> Result<ExecutionResult, DatabaseError> {
    table.append(row)?;
    debug!(
        "insert: row id={} committed at index {}",
        row.id,
        table.num_rows() - 1
    );
    Ok(ExecutionResult::Inserted)
}
