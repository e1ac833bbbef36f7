//! Expansion generation.
//!
//! Builds the prefixed declarations for one matched (declaration, rule,
//! strategy) triple. Every declaration produced here:
//! - is a fresh deep copy, never sharing structure with rule templates
//! - takes its span from the original declaration
//! - is marked `generated` and ends with the `/* @alternate */` comment
//!
//! Generation is all-or-nothing: a malformed template returns an error and
//! nothing built so far escapes. The pass extends this to every strategy of
//! the rule.

use apx_ir::{
    Declaration, DeclarationSite, FunctionCall, PropertyValue, StringInterner, ValueNode,
};
use apx_rules::{PrefixRule, RuleId};

use crate::{should_suppress, ExpandError, MatchKind, TemplateRef};

/// The declaration being expanded, seen from inside its block.
#[derive(Copy, Clone, Debug)]
pub struct ExpansionTarget<'a> {
    siblings: &'a [Declaration],
    index: usize,
}

impl<'a> ExpansionTarget<'a> {
    /// Target the declaration at `index` in `siblings`. `None` if `index`
    /// is out of bounds.
    pub fn new(siblings: &'a [Declaration], index: usize) -> Option<Self> {
        (index < siblings.len()).then_some(ExpansionTarget { siblings, index })
    }

    /// Target the declaration under a visitor cursor.
    pub fn from_site(site: &'a DeclarationSite<'_>) -> Self {
        // The walker only hands out in-bounds cursors.
        ExpansionTarget {
            siblings: site.siblings(),
            index: site.index(),
        }
    }

    #[inline]
    pub fn declaration(&self) -> &'a Declaration {
        &self.siblings[self.index]
    }

    #[inline]
    pub fn siblings(&self) -> &'a [Declaration] {
        self.siblings
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Output of one generation.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Expansion {
    /// Generated declarations in emission order.
    pub declarations: Vec<Declaration>,
    /// Candidates dropped as author-written duplicates.
    pub suppressed: usize,
}

impl Expansion {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }
}

/// Collects generated declarations for one pair.
struct Builder<'a> {
    interner: &'a StringInterner,
    target: ExpansionTarget<'a>,
    out: Expansion,
}

impl Builder<'_> {
    fn emit(&mut self, mut decl: Declaration) {
        decl.span = self.target.declaration().span;
        decl.mark_generated(self.interner);
        self.out.declarations.push(decl);
    }

    /// Emit unless an author already wrote the same name and value.
    fn emit_unless_duplicate(&mut self, decl: Declaration) {
        let target = self.target;
        if should_suppress(&decl, target.siblings(), target.index(), self.interner) {
            tracing::trace!(
                name = self.interner.lookup(decl.name),
                "suppressed expansion already written by author",
            );
            self.out.suppressed += 1;
        } else {
            self.emit(decl);
        }
    }
}

/// Generate the declarations for `rule` applied to `target` with strategy
/// `kind`.
///
/// `NoMatch`, and strategies whose shape does not fit the declaration,
/// yield an empty expansion.
pub fn generate(
    interner: &StringInterner,
    target: &ExpansionTarget<'_>,
    rule_id: RuleId,
    rule: &PrefixRule,
    kind: MatchKind,
) -> Result<Expansion, ExpandError> {
    let mut builder = Builder {
        interner,
        target: *target,
        out: Expansion::default(),
    };
    let original = target.declaration();

    match kind {
        MatchKind::NoMatch => {}
        MatchKind::NameOnly => {
            for template in rule.expansions() {
                let mut decl = template.clone();
                decl.value = original.value.clone();
                builder.emit_unless_duplicate(decl);
            }
        }
        MatchKind::ExactValueMatch => {
            // Value-only templates take the original name.
            for template in rule.value_only_expansions() {
                builder.emit(Declaration::new(original.name, template.clone(), original.span));
            }
            for template in rule.expansions() {
                builder.emit_unless_duplicate(template.clone());
            }
        }
        MatchKind::FunctionNameMatch => {
            let Some(call) = original.value.single_node().and_then(ValueNode::as_function) else {
                return Ok(builder.out);
            };
            for (i, template) in rule.expansions().iter().enumerate() {
                let value = substitute_leading_call(&template.value, call).ok_or(
                    ExpandError::MalformedTemplate {
                        rule: rule_id,
                        template: TemplateRef::Full(i),
                        span: original.span,
                        reason: "template value does not start with a function call",
                    },
                )?;
                let mut decl = template.clone();
                decl.value = value;
                builder.emit(decl);
            }
        }
        MatchKind::ValueOnlyFunctionMatch => {
            let Some(function) = rule.match_value() else {
                return Ok(builder.out);
            };
            for (i, template) in rule.value_only_expansions().iter().enumerate() {
                let prefixed = template
                    .first()
                    .and_then(ValueNode::as_function)
                    .ok_or(ExpandError::MalformedTemplate {
                        rule: rule_id,
                        template: TemplateRef::ValueOnly(i),
                        span: original.span,
                        reason: "value-only template does not start with a function call",
                    })?;

                let value: PropertyValue = original
                    .value
                    .iter()
                    .map(|node| match node {
                        ValueNode::Function(call) if call.name == function => {
                            ValueNode::Function(prefixed.with_args(&call.args))
                        }
                        other => other.clone(),
                    })
                    .collect();

                let decl = Declaration::new(original.name, value, original.span)
                    .with_comments(original.comments.clone());
                builder.emit(decl);
            }
        }
    }

    Ok(builder.out)
}

/// Copy of `template` whose first node, a function call, takes `call`'s
/// arguments. `None` if the first node is not a call.
fn substitute_leading_call(template: &PropertyValue, call: &FunctionCall) -> Option<PropertyValue> {
    let (first, rest) = template.nodes().split_first()?;
    let prefixed = first.as_function()?.with_args(&call.args);
    Some(
        std::iter::once(ValueNode::Function(prefixed))
            .chain(rest.iter().cloned())
            .collect(),
    )
}

#[cfg(test)]
mod tests;
