//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters decide how a
//! numeric [`ErrorCode`] is surfaced to clients; the domain only guarantees
//! that every failure carries a code and a human-readable message.

use std::fmt;

use serde::Serialize;

/// Failure category of a domain [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller-supplied data failed validation before any store access.
    InvalidInput,
    /// A store operation yielded no result or failed unexpectedly.
    EmptyOutput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => f.write_str("invalid_input"),
            Self::EmptyOutput => f.write_str("empty_output"),
        }
    }
}

/// Numeric business code attached to every domain error.
///
/// Some codes intentionally share a value with another constant; clients
/// already depend on those numbers, so the aliases keep call sites readable
/// without renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// The store holds no employees.
    pub const NO_EMPLOYEES: Self = Self(601);
    /// A lookup was requested without an identifier.
    pub const MISSING_ID: Self = Self(602);
    /// No employee matches the requested identifier.
    pub const EMPLOYEE_NOT_FOUND: Self = Self(603);
    /// The store failed while fetching a single employee.
    pub const FETCH_FAILED: Self = Self(604);
    /// The employee name is absent or empty on save.
    pub const BLANK_NAME: Self = Self(605);
    /// The employee age is absent or not positive.
    pub const INVALID_AGE: Self = Self(606);
    /// The employee name is absent or empty on update.
    ///
    /// Shares its value with [`Self::INVALID_AGE`].
    pub const UPDATE_BLANK_NAME: Self = Self(606);
    /// The store failed while saving or updating an employee.
    pub const SAVE_FAILED: Self = Self(607);
    /// The store failed while deleting an employee.
    pub const DELETE_FAILED: Self = Self(608);
    /// The employee to delete does not exist.
    pub const DELETE_TARGET_MISSING: Self = Self(609);
    /// A deletion was requested without an identifier.
    ///
    /// Shares its value with [`Self::EMPLOYEE_NOT_FOUND`].
    pub const DELETE_MISSING_ID: Self = Self(603);

    /// Wrap an arbitrary numeric code.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Domain error payload.
///
/// # Examples
/// ```
/// use employee_backend::domain::{Error, ErrorCode, ErrorKind};
///
/// let err = Error::empty_output(ErrorCode::NO_EMPLOYEES, "nothing stored");
/// assert_eq!(err.kind(), ErrorKind::EmptyOutput);
/// assert_eq!(err.code().get(), 601);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create a new error.
    pub fn new(kind: ErrorKind, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
        }
    }

    /// Convenience constructor for [`ErrorKind::InvalidInput`].
    pub fn invalid_input(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, code, message)
    }

    /// Convenience constructor for [`ErrorKind::EmptyOutput`].
    pub fn empty_output(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyOutput, code, message)
    }

    /// Failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Numeric business code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
