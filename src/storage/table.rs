use log::debug;

use crate::types::{
    PageIndex, ROWS_PER_PAGE, RowIndex, TABLE_MAX_PAGES, TABLE_MAX_ROWS, error::DatabaseError,
    page::Page, row::Row,
};

/// Append-only row store backed by lazily allocated fixed-size pages.
///
/// Every page slot starts out empty; a page is materialized the first time a
/// row index maps into it and stays resident until the table is dropped.
/// Rows are committed at index `num_rows` and never reordered or removed.
pub struct Table {
    pages: Vec<Option<Page>>,
    num_rows: usize,
}

impl Table {
    pub fn new() -> Self {
        let mut pages = Vec::with_capacity(TABLE_MAX_PAGES);
        pages.resize_with(TABLE_MAX_PAGES, || None);
        Self { pages, num_rows: 0 }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn is_full(&self) -> bool {
        self.num_rows >= TABLE_MAX_ROWS
    }

    /// Number of pages materialized so far.
    pub fn allocated_pages(&self) -> usize {
        self.pages.iter().filter(|page| page.is_some()).count()
    }

    /// Map a logical row index to its page and the slot within that page.
    pub fn slot_location(row_index: RowIndex) -> (PageIndex, usize) {
        (row_index / ROWS_PER_PAGE, row_index % ROWS_PER_PAGE)
    }

    /// Append a row at index `num_rows`. When the row does not fit (capacity
    /// reached or a field overflows its slot) the table is left unchanged.
    pub fn append(&mut self, row: &Row) -> Result<(), DatabaseError> {
        if self.is_full() {
            return Err(DatabaseError::TableFull {
                capacity: TABLE_MAX_ROWS,
            });
        }

        let (page_index, slot_index) = Self::slot_location(self.num_rows);
        let slot = self.page_mut(page_index)?.row_slot_mut(slot_index)?;
        row.write_to(slot)?;
        self.num_rows += 1;
        Ok(())
    }

    /// Decode the row committed at `row_index`.
    pub fn row(&self, row_index: RowIndex) -> Result<Row, DatabaseError> {
        if row_index >= self.num_rows {
            return Err(DatabaseError::RowIndexOutOfBounds {
                index: row_index,
                num_rows: self.num_rows,
            });
        }

        let (page_index, slot_index) = Self::slot_location(row_index);
        let slot = self.page(page_index)?.row_slot(slot_index)?;
        Ok(Row::read_from(slot))
    }

    fn page(&self, page_index: PageIndex) -> Result<&Page, DatabaseError> {
        let entry = self
            .pages
            .get(page_index)
            .ok_or(DatabaseError::InvalidPageIndex {
                index: page_index,
                max: TABLE_MAX_PAGES,
            })?;
        entry
            .as_ref()
            .ok_or(DatabaseError::PageNotAllocated { page_index })
    }

    fn page_mut(&mut self, page_index: PageIndex) -> Result<&mut Page, DatabaseError> {
        let entry = self
            .pages
            .get_mut(page_index)
            .ok_or(DatabaseError::InvalidPageIndex {
                index: page_index,
                max: TABLE_MAX_PAGES,
            })?;
        Ok(entry.get_or_insert_with(|| {
            debug!("page_mut: allocating page {} on first use", page_index);
            Page::new()
        }))
    }
}
