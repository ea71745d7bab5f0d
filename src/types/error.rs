use thiserror::Error;

use crate::types::PageIndex;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Table full (capacity: {capacity} rows)")]
    TableFull { capacity: usize },

    #[error("Row index {index} out of bounds (row count: {num_rows})")]
    RowIndexOutOfBounds { index: usize, num_rows: usize },

    #[error("Invalid page index {index} (max: {max})")]
    InvalidPageIndex { index: usize, max: usize },

    #[error("Invalid slot index {index} (max: {max})")]
    InvalidSlotIndex { index: usize, max: usize },

    #[error("Page {page_index} has not been allocated")]
    PageNotAllocated { page_index: PageIndex },

    #[error("Field '{field}' does not fit its slot ({len} bytes, max: {max})")]
    FieldOverflow {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
