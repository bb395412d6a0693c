use crate::stack::Keyed;
use std::fmt::{self, Display};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: u32,
    pub name: String,
}

impl Employee {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Keyed for Employee {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

impl Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}", self.id, self.name)
    }
}

/// Rejected input for the New action. Each of these triggers a reprompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmployeeError {
    #[error("ID cannot be negative!")]
    NegativeId,
    #[error("Please enter a valid numeric ID!")]
    InvalidId,
    #[error("This ID already exists! Please enter a unique ID.")]
    DuplicateId(u32),
    #[error("Name must contain only alphabetic characters and spaces!")]
    InvalidName,
}

/// Parse one line of id input. Uniqueness is checked by the caller, which
/// owns the stack.
pub fn parse_id(line: &str) -> Result<u32, EmployeeError> {
    let line = line.trim();

    // Any negative number, however large, is reported as negative.
    if let Some(digits) = line.strip_prefix('-') {
        let numeric = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
        if numeric && digits.bytes().any(|b| b != b'0') {
            return Err(EmployeeError::NegativeId);
        }
    }

    let n: i64 = line.parse().map_err(|_| EmployeeError::InvalidId)?;
    u32::try_from(n).map_err(|_| EmployeeError::InvalidId)
}

/// Letters and spaces only. The empty name has no offending character, so it
/// is accepted.
pub fn validate_name(name: &str) -> Result<(), EmployeeError> {
    if name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        Ok(())
    } else {
        Err(EmployeeError::InvalidName)
    }
}
