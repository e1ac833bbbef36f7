//! Rule construction errors.

use apx_diagnostic::{Diagnostic, ErrorCode};

/// A rule that cannot be built from what it was given.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum RuleError {
    /// Neither a property name nor a property value to match on.
    #[error("prefix rule has neither a property name nor a property value to match")]
    NothingToMatch,

    /// `expand_value` needs the matched property name to build its template.
    #[error("expansion value `{value}` needs a property name to match")]
    ExpandValueWithoutName { value: String },

    /// Value-only templates are only reachable through a matched value.
    #[error("value-only expansion `{value}` needs a property value to match")]
    ValueOnlyWithoutValue { value: String },
}

impl RuleError {
    /// Error code reported for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RuleError::NothingToMatch => ErrorCode::E1003,
            RuleError::ExpandValueWithoutName { .. } | RuleError::ValueOnlyWithoutValue { .. } => {
                ErrorCode::E1004
            }
        }
    }

    /// Convert to a structured diagnostic. Rules have no source span.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_note("rule catalogs are built before any style sheet is expanded")
    }
}
