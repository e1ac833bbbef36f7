//! Focused traits for interface segregation.
//!
//! - `Spanned` - just span access
//! - `Named` - just name access

use super::{Name, Span};

/// Trait for types that have a source location span.
pub trait Spanned {
    /// Get the source location span.
    fn span(&self) -> Span;
}

/// Trait for types that have a name.
pub trait Named {
    /// Get the name.
    fn name(&self) -> Name;
}
