//! In-memory tabular store with a fixed row schema, driven by a small
//! line-oriented command shell.

pub mod art;
pub mod executor;
pub mod statement;
pub mod storage;
pub mod types;
pub mod utils;
