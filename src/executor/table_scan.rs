use crate::{
    executor::scan::Scanner,
    storage::table::Table,
    types::{RowIndex, error::DatabaseError, row::Row},
};

/// Cursor over the committed rows of a table, in insertion order.
pub struct TableScanner<'a> {
    table: &'a Table,
    next_row: RowIndex,
}

impl<'a> TableScanner<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self { table, next_row: 0 }
    }
}

impl Scanner for TableScanner<'_> {
    fn scan(&mut self) -> Result<Option<Row>, DatabaseError> {
        if self.next_row >= self.table.num_rows() {
            return Ok(None);
        }
        let row = self.table.row(self.next_row)?;
        self.next_row += 1;
        Ok(Some(row))
    }

    fn reset(&mut self) {
        self.next_row = 0;
    }
}
