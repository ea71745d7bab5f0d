pub mod error;
pub mod page;
pub mod row;

// Common type aliases
pub type PageIndex = usize;
pub type RowIndex = usize;

// Fixed row layout: id, then username, then email, no padding between fields
pub const ID_SIZE: usize = size_of::<u32>();
pub const USERNAME_SIZE: usize = 32;
pub const EMAIL_SIZE: usize = 255;

pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

// Page geometry; rows never straddle a page boundary
pub const PAGE_SIZE: usize = 4096;
pub const TABLE_MAX_PAGES: usize = 100;
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;

// The three fields must tile the row exactly, and whole rows must fit a page.
const _: () = assert!(EMAIL_OFFSET + EMAIL_SIZE == ROW_SIZE);
const _: () = assert!(ROWS_PER_PAGE * ROW_SIZE <= PAGE_SIZE);
