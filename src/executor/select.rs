use log::debug;

use crate::{
    executor::{ExecutionResult, scan::ScanIterator, table_scan::TableScanner},
    storage::table::Table,
    types::error::DatabaseError,
};

/// Scan every committed row in insertion order. Never mutates the table.
pub fn execute(table: &Table) -> Result<ExecutionResult, DatabaseError> {
    let rows = ScanIterator::new(TableScanner::new(table)).collect::<Result<Vec<_>, _>>()?;
    debug!("select: scanned {} rows", rows.len());
    Ok(ExecutionResult::Selected(rows))
}
