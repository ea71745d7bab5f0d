#[derive(Debug, thiserror::Error)]
pub enum StatementError {
    #[error("Unrecognized keyword at start of '{0}'")]
    UnrecognizedStatement(String),
    #[error("Syntax error: missing {0}")]
    SyntaxError(&'static str),
    #[error("ID must be a non-negative integer")]
    NegativeId,
    #[error("String is too long ({field}: {len} bytes, max: {max})")]
    StringTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}
