use crate::types::{PAGE_SIZE, ROW_SIZE, ROWS_PER_PAGE, error::DatabaseError};

/*
 * Page Layout (in memory)
 * ┌────────────────────────────────────────────────────────────────┐
 * │ slot 0 (ROW_SIZE) │ slot 1 (ROW_SIZE) │ ... │ slot 13          │
 * ├────────────────────────────────────────────────────────────────┤
 * │ tail remainder (PAGE_SIZE - ROWS_PER_PAGE * ROW_SIZE bytes,    │
 * │ never addressed)                                               │
 * └────────────────────────────────────────────────────────────────┘
 */

pub struct Page {
    data: Vec<u8>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            data: vec![0; PAGE_SIZE],
        }
    }

    /// Borrow the bytes backing one row slot.
    pub fn row_slot(&self, slot_index: usize) -> Result<&[u8; ROW_SIZE], DatabaseError> {
        let range = Self::slot_range(slot_index)?;
        self.data
            .get(range)
            .and_then(|bytes| <&[u8; ROW_SIZE]>::try_from(bytes).ok())
            .ok_or(DatabaseError::InvalidSlotIndex {
                index: slot_index,
                max: ROWS_PER_PAGE,
            })
    }

    /// Mutably borrow the bytes backing one row slot.
    pub fn row_slot_mut(
        &mut self,
        slot_index: usize,
    ) -> Result<&mut [u8; ROW_SIZE], DatabaseError> {
        let range = Self::slot_range(slot_index)?;
        self.data
            .get_mut(range)
            .and_then(|bytes| <&mut [u8; ROW_SIZE]>::try_from(bytes).ok())
            .ok_or(DatabaseError::InvalidSlotIndex {
                index: slot_index,
                max: ROWS_PER_PAGE,
            })
    }

    // Validate the slot index and derive its byte range before any access.
    fn slot_range(slot_index: usize) -> Result<std::ops::Range<usize>, DatabaseError> {
        if slot_index >= ROWS_PER_PAGE {
            return Err(DatabaseError::InvalidSlotIndex {
                index: slot_index,
                max: ROWS_PER_PAGE,
            });
        }
        let start = slot_index * ROW_SIZE;
        Ok(start..start + ROW_SIZE)
    }
}
