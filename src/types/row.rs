use std::fmt;

use crate::types::{
    EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ROW_SIZE, USERNAME_OFFSET, USERNAME_SIZE,
    error::DatabaseError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl Row {
    pub fn new(id: u32, username: &str, email: &str) -> Self {
        Self {
            id,
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    /// Serialize the row into one page slot following the fixed layout:
    /// `id` as little-endian at offset 0, then `username` and `email`
    /// NUL-padded to their full field widths. Every byte of the slot is
    /// written, so slots never need to be zeroed beforehand.
    pub fn write_to(&self, slot: &mut [u8; ROW_SIZE]) -> Result<(), DatabaseError> {
        let username = self.username.as_bytes();
        if username.len() > USERNAME_SIZE {
            return Err(DatabaseError::FieldOverflow {
                field: "username",
                len: username.len(),
                max: USERNAME_SIZE,
            });
        }
        let email = self.email.as_bytes();
        if email.len() > EMAIL_SIZE {
            return Err(DatabaseError::FieldOverflow {
                field: "email",
                len: email.len(),
                max: EMAIL_SIZE,
            });
        }

        // Both fields are validated above; nothing is written on failure.
        slot[ID_OFFSET..USERNAME_OFFSET].copy_from_slice(&self.id.to_le_bytes());
        write_padded(
            &mut slot[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE],
            username,
        );
        write_padded(&mut slot[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE], email);
        Ok(())
    }

    /// Deserialize the row stored in one page slot. The fixed-size slot
    /// reference rules out short reads, so decoding cannot fail; text fields
    /// end at their first NUL byte.
    pub fn read_from(slot: &[u8; ROW_SIZE]) -> Self {
        let id = u32::from_le_bytes([
            slot[ID_OFFSET],
            slot[ID_OFFSET + 1],
            slot[ID_OFFSET + 2],
            slot[ID_OFFSET + 3],
        ]);
        let username = read_padded(&slot[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE]);
        let email = read_padded(&slot[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]);

        Self {
            id,
            username,
            email,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}

fn write_padded(field: &mut [u8], bytes: &[u8]) {
    field[..bytes.len()].copy_from_slice(bytes);
    field[bytes.len()..].fill(0);
}

fn read_padded(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}
