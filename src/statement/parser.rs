use log::debug;

use crate::{
    statement::{Statement, error::StatementError},
    types::{EMAIL_SIZE, USERNAME_SIZE, row::Row},
};

/// Turns one input line into a typed [`Statement`].
///
/// The grammar is positional: tokens are separated by single spaces, with no
/// quoting or escaping, and tokens past the last expected one are ignored.
pub struct StatementParser;

impl StatementParser {
    pub fn new() -> Self {
        Self
    }

    pub fn prepare(&self, input: &str) -> Result<Statement, StatementError> {
        let mut tokens = input.split(' ');
        match tokens.next().unwrap_or("") {
            "insert" => self.prepare_insert(tokens),
            "select" => Ok(Statement::Select),
            _ => Err(StatementError::UnrecognizedStatement(input.to_string())),
        }
    }

    fn prepare_insert<'a>(
        &self,
        mut tokens: impl Iterator<Item = &'a str>,
    ) -> Result<Statement, StatementError> {
        // All three tokens must be present before any value is validated.
        let id_token = tokens.next().ok_or(StatementError::SyntaxError("id"))?;
        let username = tokens
            .next()
            .ok_or(StatementError::SyntaxError("username"))?;
        let email = tokens.next().ok_or(StatementError::SyntaxError("email"))?;

        let id = id_token
            .parse::<u32>()
            .map_err(|_| StatementError::NegativeId)?;
        if username.len() > USERNAME_SIZE {
            return Err(StatementError::StringTooLong {
                field: "username",
                len: username.len(),
                max: USERNAME_SIZE,
            });
        }
        if email.len() > EMAIL_SIZE {
            return Err(StatementError::StringTooLong {
                field: "email",
                len: email.len(),
                max: EMAIL_SIZE,
            });
        }

        debug!(
            "prepare_insert: id={} username={}B email={}B",
            id,
            username.len(),
            email.len()
        );
        Ok(Statement::Insert(Row::new(id, username, email)))
    }
}
