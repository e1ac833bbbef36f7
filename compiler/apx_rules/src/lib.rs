//! Prefix rules for the expander.
//!
//! A [`PrefixRule`] says which declarations it applies to (a property name,
//! a property value, or both) and which declarations to emit when it does.
//! Rules are collected into an ordered [`RuleCatalog`]; catalog order is the
//! order expansions are generated in.
//!
//! Rules are built once per compilation and only ever read afterwards, so a
//! `&RuleCatalog` can be shared by every pass run.

mod builder;
mod builtin;
mod catalog;
mod error;
mod rule;

pub use builder::PrefixRuleBuilder;
pub use catalog::{Candidates, RuleCatalog, RuleId};
pub use error::RuleError;
pub use rule::PrefixRule;
