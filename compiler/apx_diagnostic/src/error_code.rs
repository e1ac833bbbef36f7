//! Error codes for expander diagnostics.
//!
//! All codes are E1xxx: defects in the rule catalog, found either when a
//! rule is built or when one of its templates is used.

use std::fmt;

/// Error codes for all expander diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Function-name expansion template has no function call value
    E1001,
    /// Value-only expansion template has no function call value
    E1002,
    /// Rule has neither a property name nor a property value to match
    E1003,
    /// Expansion template needs a part of the rule's match pattern the rule lacks
    E1004,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
