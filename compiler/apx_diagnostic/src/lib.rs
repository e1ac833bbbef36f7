//! Diagnostics for the prefix expander.
//!
//! Expansion never prints anything itself. Problems are described as
//! [`Diagnostic`] values carrying:
//! - an error code for searchability
//! - a message (what went wrong)
//! - a primary span (the declaration being expanded)
//! - notes (which rule, which template)
//!
//! The host compiler decides how to render them.
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] is type-level proof that at least one error reached
//! a [`DiagnosticQueue`]:
//!
//! ```text
//! let guarantee = queue.emit_error(diagnostic);
//! fn expand(..) -> Result<PassStats, ErrorGuaranteed> { ... }
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
