//! Expansion errors.

use std::fmt;

use apx_diagnostic::{Diagnostic, ErrorCode};
use apx_ir::Span;
use apx_rules::RuleId;

/// Which template of a rule an error refers to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TemplateRef {
    /// Index into the rule's full templates.
    Full(usize),
    /// Index into the rule's value-only templates.
    ValueOnly(usize),
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateRef::Full(i) => write!(f, "expansion template #{i}"),
            TemplateRef::ValueOnly(i) => write!(f, "value-only template #{i}"),
        }
    }
}

/// Failure to expand one (declaration, rule) pair.
///
/// The pair contributes nothing to the tree; the pass moves on to the next
/// rule.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ExpandError {
    /// A template's shape does not fit the strategy that matched.
    #[error("{template} of rule {rule} is malformed: {reason}")]
    MalformedTemplate {
        rule: RuleId,
        template: TemplateRef,
        /// Span of the declaration being expanded.
        span: Span,
        reason: &'static str,
    },
}

impl ExpandError {
    /// Error code reported for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ExpandError::MalformedTemplate {
                template: TemplateRef::Full(_),
                ..
            } => ErrorCode::E1001,
            ExpandError::MalformedTemplate {
                template: TemplateRef::ValueOnly(_),
                ..
            } => ErrorCode::E1002,
        }
    }

    /// Span of the declaration that was being expanded.
    pub fn span(&self) -> Span {
        match self {
            ExpandError::MalformedTemplate { span, .. } => *span,
        }
    }

    /// Rule whose template failed.
    pub fn rule(&self) -> RuleId {
        match self {
            ExpandError::MalformedTemplate { rule, .. } => *rule,
        }
    }

    /// Convert to a structured diagnostic.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span(), "while expanding this declaration")
            .with_note("the declaration was left unexpanded for this rule")
    }
}
