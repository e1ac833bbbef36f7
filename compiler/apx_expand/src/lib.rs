//! Vendor-prefix expansion.
//!
//! Four pieces, leaves first:
//! - [`matcher`]: which substitution strategies a rule has for a declaration
//! - [`generate`]: build the prefixed declarations for one strategy
//! - [`suppress`]: skip candidates the author already wrote by hand
//! - [`pass`]: walk a style sheet and strip, isolate or expand declarations
//!
//! # Pipeline
//!
//! ```text
//! strip  ──►  expand  ──►  (host output)
//!   ▲           │
//!   └───────────┘  re-running strip removes exactly what expand added
//! ```
//!
//! Every declaration the expander creates is marked `generated` and carries
//! a trailing `/* @alternate */` comment. Mixin definition bodies are never
//! touched.

mod error;
pub mod generate;
pub mod matcher;
pub mod pass;
pub mod suppress;

#[cfg(test)]
mod test_helpers;

pub use error::{ExpandError, TemplateRef};
pub use generate::{generate, Expansion, ExpansionTarget};
pub use matcher::{classify, match_kinds, MatchKind, MatchKinds};
pub use pass::{PassMode, PassOutcome, PassStats, PrefixPass};
pub use suppress::should_suppress;
