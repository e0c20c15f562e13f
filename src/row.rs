//! Fixed-schema row and its on-page encoding.

use std::fmt;

use crate::{
    EMAIL_OFFSET, EMAIL_SIZE, Error, ID_OFFSET, ID_SIZE, ROW_SIZE, Result, USERNAME_OFFSET,
    USERNAME_SIZE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl Row {
    /// Builds a row, rejecting fields that do not fit their column.
    pub fn new(id: u32, username: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let email = email.into();

        // Zero bytes are column padding and cannot round-trip.
        if username.contains('\0') || email.contains('\0') {
            return Err(Error::Syntax);
        }
        if username.len() > USERNAME_SIZE || email.len() > EMAIL_SIZE {
            return Err(Error::StringTooLong);
        }

        Ok(Self {
            id,
            username,
            email,
        })
    }

    /// Writes the row into `destination`, which must be `ROW_SIZE` bytes.
    pub fn serialize(&self, destination: &mut [u8]) {
        debug_assert_eq!(destination.len(), ROW_SIZE);

        destination[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_le_bytes());
        write_column(
            &mut destination[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE],
            &self.username,
        );
        write_column(
            &mut destination[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE],
            &self.email,
        );
    }

    pub fn deserialize(source: &[u8]) -> Self {
        debug_assert_eq!(source.len(), ROW_SIZE);

        let mut id = [0u8; ID_SIZE];
        id.copy_from_slice(&source[ID_OFFSET..ID_OFFSET + ID_SIZE]);

        Self {
            id: u32::from_le_bytes(id),
            username: read_column(&source[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE]),
            email: read_column(&source[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]),
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}

fn write_column(column: &mut [u8], value: &str) {
    let bytes = value.as_bytes();
    column[..bytes.len()].copy_from_slice(bytes);
    column[bytes.len()..].fill(0);
}

fn read_column(column: &[u8]) -> String {
    let end = column.iter().position(|&b| b == 0).unwrap_or(column.len());
    String::from_utf8_lossy(&column[..end]).into_owned()
}
