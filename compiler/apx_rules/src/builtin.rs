//! Builtin prefix rules.
//!
//! Covers the properties that still commonly need vendor alternates:
//! flexbox, gradients, `calc()`, transforms and `user-select`.

use apx_ir::StringInterner;

use crate::{PrefixRuleBuilder, RuleCatalog, RuleError};

/// `(property, [prefixed property names])` for name-only rules.
const NAME_ONLY: &[(&str, &[&str])] = &[
    ("flex", &["-webkit-flex", "-ms-flex"]),
    ("flex-grow", &["-webkit-flex-grow", "-ms-flex-positive"]),
    ("flex-shrink", &["-webkit-flex-shrink", "-ms-flex-negative"]),
    ("flex-basis", &["-webkit-flex-basis", "-ms-flex-preferred-size"]),
    ("flex-direction", &["-webkit-flex-direction", "-ms-flex-direction"]),
    ("flex-wrap", &["-webkit-flex-wrap", "-ms-flex-wrap"]),
    ("order", &["-webkit-order", "-ms-flex-order"]),
    ("align-items", &["-webkit-align-items"]),
    ("justify-content", &["-webkit-justify-content"]),
    ("transform", &["-webkit-transform", "-ms-transform"]),
    ("transform-origin", &["-webkit-transform-origin", "-ms-transform-origin"]),
    ("transition", &["-webkit-transition"]),
    ("user-select", &["-webkit-user-select", "-moz-user-select", "-ms-user-select"]),
];

/// `(property, literal value, [prefixed values])` for exact-value rules.
const EXACT_VALUE: &[(&str, &str, &[&str])] = &[
    (
        "display",
        "flex",
        &["-webkit-box", "-moz-box", "-webkit-flex", "-ms-flexbox"],
    ),
    (
        "display",
        "inline-flex",
        &["-webkit-inline-box", "-webkit-inline-flex", "-ms-inline-flexbox"],
    ),
];

/// `(property, function, [prefixed functions])` for function-name rules.
const FUNCTION_NAME: &[(&str, &str, &[&str])] = &[
    (
        "background-image",
        "linear-gradient",
        &["-webkit-linear-gradient", "-moz-linear-gradient", "-o-linear-gradient"],
    ),
    (
        "background",
        "linear-gradient",
        &["-webkit-linear-gradient", "-moz-linear-gradient", "-o-linear-gradient"],
    ),
    (
        "background-image",
        "radial-gradient",
        &["-webkit-radial-gradient", "-moz-radial-gradient"],
    ),
];

/// `(function, [prefixed functions])` for value-only rules on any property.
const VALUE_ONLY_FUNCTION: &[(&str, &[&str])] = &[("calc", &["-webkit-calc", "-moz-calc"])];

fn builtin_rules() -> Vec<PrefixRuleBuilder> {
    let mut rules = Vec::new();

    for &(property, value, prefixed) in EXACT_VALUE {
        let builder = PrefixRuleBuilder::new().match_name(property).match_value(value);
        rules.push(prefixed.iter().fold(builder, |b, v| b.expand_value(*v)));
    }

    for &(property, function, prefixed) in FUNCTION_NAME {
        let builder = PrefixRuleBuilder::new()
            .match_name(property)
            .match_value(function)
            .is_function(true);
        rules.push(prefixed.iter().fold(builder, |b, f| b.expand_value(*f)));
    }

    for &(function, prefixed) in VALUE_ONLY_FUNCTION {
        let builder = PrefixRuleBuilder::new().match_value(function).is_function(true);
        rules.push(prefixed.iter().fold(builder, |b, f| b.value_only(*f)));
    }

    for &(property, prefixed) in NAME_ONLY {
        let builder = PrefixRuleBuilder::new().match_name(property);
        rules.push(prefixed.iter().fold(builder, |b, n| b.expand_name(*n)));
    }

    rules
}

impl RuleCatalog {
    /// Catalog of the builtin rules, interned into `interner`.
    pub fn builtin(interner: &StringInterner) -> Result<Self, RuleError> {
        let mut catalog = RuleCatalog::new();
        for builder in builtin_rules() {
            catalog.push(builder.build(interner)?);
        }
        tracing::debug!(rules = catalog.len(), "built builtin prefix catalog");
        Ok(catalog)
    }
}
