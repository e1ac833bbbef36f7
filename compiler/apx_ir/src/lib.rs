//! APX IR - style tree types for the prefix expander.
//!
//! This crate contains the data structures every expansion phase reads and
//! writes:
//! - Spans for provenance of declarations
//! - Names for interned property names, literals and function names
//! - Value nodes (`Literal` / `Function`) and property value lists
//! - Declarations, arena-owned blocks and the style sheet tree
//! - A mutating visitor that walks blocks with an index cursor
//! - A canonical renderer used for textual comparison and output
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: property names, literals and function names are
//!   `Name(u32)` handles, so equality is an integer compare.
//! - **Arena Blocks**: declaration lists live in a `BlockArena` addressed by
//!   `BlockId`; tree nodes only hold the index.
//! - **Actions, not handles**: visitors return a `VisitAction` for the
//!   declaration under the cursor instead of mutating sibling lists directly.

mod comment;
mod decl;
mod interner;
mod name;
pub mod render;
mod span;
mod traits;
mod tree;
mod value;
pub mod visitor;

pub use comment::{Comment, CommentList, ALTERNATE_MARKER};
pub use decl::Declaration;
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use span::{Span, SpanError};
pub use traits::{Named, Spanned};
pub use tree::{Block, BlockArena, BlockId, Node, StyleSheet};
pub use value::{FunctionCall, PropertyValue, ValueNode};
pub use visitor::{walk_sheet, DeclarationSite, MutatingVisitor, VisitAction};
