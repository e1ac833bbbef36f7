//! Rule matching.
//!
//! Decides which substitution strategies a rule offers for a declaration.
//! Matching is purely structural; a rule that does not apply yields
//! `NoMatch`, never an error.

use apx_ir::{Declaration, ValueNode};
use apx_rules::PrefixRule;
use smallvec::SmallVec;

/// Substitution strategy for one (declaration, rule) pair.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MatchKind {
    /// The rule does not apply.
    NoMatch,
    /// The rule has no value to match and the property name matches.
    NameOnly,
    /// Single literal value equal to a literal rule's value.
    ExactValueMatch,
    /// Single function call named by a function rule's value.
    FunctionNameMatch,
    /// Some function call anywhere in the value list is named by a function
    /// rule's value, and the rule has value-only templates.
    ValueOnlyFunctionMatch,
}

/// Every strategy that applies to one pair. At most a single-value strategy
/// plus `ValueOnlyFunctionMatch`.
pub type MatchKinds = SmallVec<[MatchKind; 2]>;

/// The property name gate. Absent `match_name` lets every name through.
fn name_matches(decl: &Declaration, rule: &PrefixRule) -> bool {
    rule.match_name().is_none_or(|name| name == decl.name)
}

/// The single-value strategy, ignoring value-only function matching.
///
/// Literal rules only match literals and function rules only match calls.
fn single_value_kind(decl: &Declaration, rule: &PrefixRule) -> MatchKind {
    let Some(value) = rule.match_value() else {
        return if rule.match_name().is_some() {
            MatchKind::NameOnly
        } else {
            MatchKind::NoMatch
        };
    };

    match decl.value.single_node() {
        Some(ValueNode::Literal(text)) if !rule.is_function() && *text == value => {
            MatchKind::ExactValueMatch
        }
        Some(ValueNode::Function(call)) if rule.is_function() && call.name == value => {
            MatchKind::FunctionNameMatch
        }
        _ => MatchKind::NoMatch,
    }
}

/// Check for a matching function call anywhere in the value list.
fn has_value_only_function(decl: &Declaration, rule: &PrefixRule) -> bool {
    if !rule.is_function() || rule.value_only_expansions().is_empty() {
        return false;
    }
    let Some(function) = rule.match_value() else {
        return false;
    };
    decl.value.iter().any(|node| node.is_function_named(function))
}

/// Classify a declaration against a rule.
///
/// Returns the single-value strategy when one applies, otherwise
/// `ValueOnlyFunctionMatch` when that applies. Use [`match_kinds`] to get
/// both when both apply.
pub fn classify(decl: &Declaration, rule: &PrefixRule) -> MatchKind {
    if !name_matches(decl, rule) {
        return MatchKind::NoMatch;
    }
    match single_value_kind(decl, rule) {
        MatchKind::NoMatch if has_value_only_function(decl, rule) => {
            MatchKind::ValueOnlyFunctionMatch
        }
        kind => kind,
    }
}

/// Every applicable strategy, single-value strategy first.
pub fn match_kinds(decl: &Declaration, rule: &PrefixRule) -> MatchKinds {
    let mut kinds = MatchKinds::new();
    if !name_matches(decl, rule) {
        return kinds;
    }

    let single = single_value_kind(decl, rule);
    if single != MatchKind::NoMatch {
        kinds.push(single);
    }
    if single != MatchKind::NameOnly && has_value_only_function(decl, rule) {
        kinds.push(MatchKind::ValueOnlyFunctionMatch);
    }
    kinds
}
