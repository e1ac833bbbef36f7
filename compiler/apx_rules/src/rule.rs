//! A single prefix rule.

use apx_ir::{render, Declaration, Name, PropertyValue, StringLookup};

/// One prefixing rule.
///
/// Templates are owned by the rule and never handed out mutably; the
/// expander deep-copies them.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PrefixRule {
    pub(crate) match_name: Option<Name>,
    pub(crate) match_value: Option<Name>,
    pub(crate) is_function: bool,
    pub(crate) expansions: Vec<Declaration>,
    pub(crate) value_only_expansions: Vec<PropertyValue>,
}

impl PrefixRule {
    /// Property name the rule is restricted to, if any.
    #[inline]
    pub fn match_name(&self) -> Option<Name> {
        self.match_name
    }

    /// Literal text or function name the declaration value must match.
    #[inline]
    pub fn match_value(&self) -> Option<Name> {
        self.match_value
    }

    /// Whether `match_value` names a function rather than a literal.
    #[inline]
    pub fn is_function(&self) -> bool {
        self.is_function
    }

    /// Full declaration templates, in emission order.
    #[inline]
    pub fn expansions(&self) -> &[Declaration] {
        &self.expansions
    }

    /// Name-agnostic value templates, in emission order.
    #[inline]
    pub fn value_only_expansions(&self) -> &[PropertyValue] {
        &self.value_only_expansions
    }

    /// Check if the rule is triggered by the property name alone.
    pub fn is_name_only(&self) -> bool {
        self.match_value.is_none() && self.match_name.is_some()
    }

    /// Short human-readable form of the match pattern, e.g. `display: flex`
    /// or `*: calc()`.
    pub fn describe<L: StringLookup + ?Sized>(&self, lookup: &L) -> String {
        let name = self.match_name.map_or("*", |n| lookup.lookup(n));
        match self.match_value {
            Some(value) if self.is_function => format!("{name}: {}()", lookup.lookup(value)),
            Some(value) => format!("{name}: {}", lookup.lookup(value)),
            None => name.to_string(),
        }
    }

    /// Render every template, full ones first. Used in diagnostics and tests.
    pub fn render_templates<L: StringLookup + ?Sized>(&self, lookup: &L) -> Vec<String> {
        self.expansions
            .iter()
            .map(|t| render::render_declaration(t, lookup))
            .chain(
                self.value_only_expansions
                    .iter()
                    .map(|v| render::render_value(v, lookup)),
            )
            .collect()
    }
}
