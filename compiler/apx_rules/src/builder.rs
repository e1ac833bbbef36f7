//! Builder for prefix rules.
//!
//! Mirrors the way rule catalogs are written down: pick what to match, then
//! list the prefixed alternatives.
//!
//! ```text
//! PrefixRuleBuilder::new()
//!     .match_name("display")
//!     .match_value("flex")
//!     .expand_value("-webkit-flex")
//!     .expand_value("-ms-flexbox")
//!     .build(&interner)?;
//! ```
//!
//! String parts are interned at `build` time. Templates built from strings
//! always have the right shape for the rule; `expansion` and
//! `value_only_template` take pre-built templates as-is.

use apx_ir::{Declaration, Name, PropertyValue, Span, StringInterner, ValueNode};

use crate::{PrefixRule, RuleError};

/// A template recorded by the builder, resolved at `build` time.
#[derive(Clone, Debug)]
enum PendingTemplate {
    /// `expand_name(name)`: the rule's value under a new property name.
    Name(String),
    /// `expand_value(value)`: the rule's property name with a new value.
    Value(String),
    /// A pre-built full template.
    Raw(Declaration),
}

#[derive(Clone, Debug)]
enum PendingValueOnly {
    Text(String),
    Raw(PropertyValue),
}

/// Builder for [`PrefixRule`].
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct PrefixRuleBuilder {
    match_name: Option<String>,
    match_value: Option<String>,
    is_function: bool,
    expansions: Vec<PendingTemplate>,
    value_only: Vec<PendingValueOnly>,
}

impl PrefixRuleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the rule to declarations with this property name.
    pub fn match_name(mut self, name: impl Into<String>) -> Self {
        self.match_name = Some(name.into());
        self
    }

    /// Literal text, or function name when `is_function` is set, that the
    /// declaration value must match.
    pub fn match_value(mut self, value: impl Into<String>) -> Self {
        self.match_value = Some(value.into());
        self
    }

    /// Treat `match_value` as a function name.
    pub fn is_function(mut self, is_function: bool) -> Self {
        self.is_function = is_function;
        self
    }

    /// Add a full template: `name` with the matched value.
    pub fn expand_name(mut self, name: impl Into<String>) -> Self {
        self.expansions.push(PendingTemplate::Name(name.into()));
        self
    }

    /// Add a full template: the matched property name with `value`.
    pub fn expand_value(mut self, value: impl Into<String>) -> Self {
        self.expansions.push(PendingTemplate::Value(value.into()));
        self
    }

    /// Add a value-only template. The property name comes from the matched
    /// declaration.
    pub fn value_only(mut self, value: impl Into<String>) -> Self {
        self.value_only.push(PendingValueOnly::Text(value.into()));
        self
    }

    /// Add a pre-built full template.
    pub fn expansion(mut self, template: Declaration) -> Self {
        self.expansions.push(PendingTemplate::Raw(template));
        self
    }

    /// Add a pre-built value-only template.
    pub fn value_only_template(mut self, template: PropertyValue) -> Self {
        self.value_only.push(PendingValueOnly::Raw(template));
        self
    }

    /// Intern every part and produce the rule.
    pub fn build(self, interner: &StringInterner) -> Result<PrefixRule, RuleError> {
        if self.match_name.is_none() && self.match_value.is_none() {
            return Err(RuleError::NothingToMatch);
        }

        let match_name = self.match_name.as_deref().map(|n| interner.intern(n));
        let match_value = self.match_value.as_deref().map(|v| interner.intern(v));
        let is_function = self.is_function;

        let value_node = |text: Name| {
            if is_function {
                ValueNode::function(text, Vec::new())
            } else {
                ValueNode::literal(text)
            }
        };

        let mut expansions = Vec::with_capacity(self.expansions.len());
        for pending in self.expansions {
            let template = match pending {
                PendingTemplate::Name(name) => {
                    let value = match_value.map_or_else(PropertyValue::new, |v| {
                        PropertyValue::single(value_node(v))
                    });
                    Declaration::new(interner.intern(&name), value, Span::DUMMY)
                }
                PendingTemplate::Value(value) => {
                    let Some(name) = match_name else {
                        return Err(RuleError::ExpandValueWithoutName { value });
                    };
                    let value = PropertyValue::single(value_node(interner.intern(&value)));
                    Declaration::new(name, value, Span::DUMMY)
                }
                PendingTemplate::Raw(template) => template,
            };
            expansions.push(template);
        }

        let mut value_only_expansions = Vec::with_capacity(self.value_only.len());
        for pending in self.value_only {
            let template = match pending {
                PendingValueOnly::Text(value) => {
                    if match_value.is_none() {
                        return Err(RuleError::ValueOnlyWithoutValue { value });
                    }
                    PropertyValue::single(value_node(interner.intern(&value)))
                }
                PendingValueOnly::Raw(template) => template,
            };
            value_only_expansions.push(template);
        }

        Ok(PrefixRule {
            match_name,
            match_value,
            is_function,
            expansions,
            value_only_expansions,
        })
    }
}
