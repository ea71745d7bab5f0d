pub mod error;
pub mod parser;

use crate::types::row::Row;

/// A validated, typed representation of one user command.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Insert(Row),
    Select,
}
