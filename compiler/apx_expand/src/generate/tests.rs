use super::*;
use crate::test_helpers::Fixture;
use crate::match_kinds;
use apx_ir::{Comment, CommentList, Span};
use apx_rules::PrefixRuleBuilder;
use pretty_assertions::assert_eq;

const RULE: RuleId = RuleId::new(0);

fn run(fx: &Fixture, block: &[Declaration], index: usize, rule: &PrefixRule, kind: MatchKind) -> Expansion {
    let target = ExpansionTarget::new(block, index).unwrap();
    generate(&fx.interner, &target, RULE, rule, kind).unwrap()
}

#[test]
fn test_exact_value_single_expansion() {
    let fx = Fixture::new();
    let rule = PrefixRuleBuilder::new()
        .match_value("flex")
        .match_name("display")
        .expand_value("-webkit-flex")
        .build(&fx.interner)
        .unwrap();
    let block = vec![fx.decl_at("display", "flex", Span::new(8, 22))];

    let out = run(&fx, &block, 0, &rule, MatchKind::ExactValueMatch);

    assert_eq!(
        fx.render_all(&out.declarations),
        vec!["display: -webkit-flex; /* @alternate */"]
    );
    assert!(out.declarations[0].generated);
    assert_eq!(out.declarations[0].span, Span::new(8, 22));
    assert_eq!(out.suppressed, 0);
}

#[test]
fn test_exact_value_suppresses_author_override() {
    let fx = Fixture::new();
    let rule = PrefixRuleBuilder::new()
        .match_name("display")
        .match_value("flex")
        .expand_value("-webkit-flex")
        .expand_value("-ms-flexbox")
        .build(&fx.interner)
        .unwrap();
    let block = vec![fx.decl("display", "-webkit-flex"), fx.decl("display", "flex")];

    let out = run(&fx, &block, 1, &rule, MatchKind::ExactValueMatch);

    assert_eq!(
        fx.render_all(&out.declarations),
        vec!["display: -ms-flexbox; /* @alternate */"]
    );
    assert_eq!(out.suppressed, 1);
}

#[test]
fn test_exact_value_value_only_templates_come_first() {
    let fx = Fixture::new();
    let rule = PrefixRuleBuilder::new()
        .match_name("position")
        .match_value("sticky")
        .expand_name("-ms-position")
        .value_only("-webkit-sticky")
        .build(&fx.interner)
        .unwrap();
    let mut original = fx.decl("position", "sticky");
    original.append_comment(Comment::new(fx.name("/* keep */"), Span::DUMMY));
    let block = vec![original];

    let out = run(&fx, &block, 0, &rule, MatchKind::ExactValueMatch);

    // The value-only alternate takes the original name but not its comments.
    assert_eq!(
        fx.render_all(&out.declarations),
        vec![
            "position: -webkit-sticky; /* @alternate */",
            "-ms-position: sticky; /* @alternate */",
        ]
    );
}

#[test]
fn test_value_only_templates_are_never_suppressed() {
    let fx = Fixture::new();
    let rule = PrefixRuleBuilder::new()
        .match_name("position")
        .match_value("sticky")
        .value_only("-webkit-sticky")
        .build(&fx.interner)
        .unwrap();
    let block = vec![fx.decl("position", "-webkit-sticky"), fx.decl("position", "sticky")];

    let out = run(&fx, &block, 1, &rule, MatchKind::ExactValueMatch);
    assert_eq!(out.len(), 1);
    assert_eq!(out.suppressed, 0);
}

#[test]
fn test_function_name_substitutes_arguments() {
    let fx = Fixture::new();
    let rule = PrefixRuleBuilder::new()
        .match_name("background-image")
        .match_value("linear-gradient")
        .is_function(true)
        .expand_value("-webkit-linear-gradient")
        .expand_value("-moz-linear-gradient")
        .build(&fx.interner)
        .unwrap();
    let block = vec![fx.decl("background-image", "linear-gradient(red, blue)")];

    let out = run(&fx, &block, 0, &rule, MatchKind::FunctionNameMatch);

    assert_eq!(
        fx.render_all(&out.declarations),
        vec![
            "background-image: -webkit-linear-gradient(red, blue); /* @alternate */",
            "background-image: -moz-linear-gradient(red, blue); /* @alternate */",
        ]
    );
}

#[test]
fn test_function_name_is_not_suppressed() {
    let fx = Fixture::new();
    let rule = PrefixRuleBuilder::new()
        .match_name("background-image")
        .match_value("linear-gradient")
        .is_function(true)
        .expand_value("-webkit-linear-gradient")
        .build(&fx.interner)
        .unwrap();
    let block = vec![
        fx.decl("background-image", "-webkit-linear-gradient(red, blue)"),
        fx.decl("background-image", "linear-gradient(red, blue)"),
    ];

    let out = run(&fx, &block, 1, &rule, MatchKind::FunctionNameMatch);
    assert_eq!(out.len(), 1);
}

#[test]
fn test_function_name_does_not_alias_template() {
    let fx = Fixture::new();
    let rule = PrefixRuleBuilder::new()
        .match_name("background-image")
        .match_value("linear-gradient")
        .is_function(true)
        .expand_value("-webkit-linear-gradient")
        .build(&fx.interner)
        .unwrap();
    let block = vec![fx.decl("background-image", "linear-gradient(red, blue)")];

    let _ = run(&fx, &block, 0, &rule, MatchKind::FunctionNameMatch);

    // The template keeps its empty argument list.
    assert_eq!(
        rule.render_templates(&fx.interner),
        vec!["background-image: -webkit-linear-gradient();"]
    );
    assert!(!rule.expansions()[0].generated);
}

#[test]
fn test_malformed_function_template() {
    let fx = Fixture::new();
    let rule = PrefixRuleBuilder::new()
        .match_name("background-image")
        .match_value("linear-gradient")
        .is_function(true)
        .expand_value("-webkit-linear-gradient")
        .expansion(fx.decl("background-image", "none"))
        .build(&fx.interner)
        .unwrap();
    let block = vec![fx.decl_at("background-image", "linear-gradient(red, blue)", Span::new(3, 40))];
    let target = ExpansionTarget::new(&block, 0).unwrap();

    let err = generate(&fx.interner, &target, RuleId::new(5), &rule, MatchKind::FunctionNameMatch)
        .unwrap_err();

    assert_eq!(
        err,
        ExpandError::MalformedTemplate {
            rule: RuleId::new(5),
            template: TemplateRef::Full(1),
            span: Span::new(3, 40),
            reason: "template value does not start with a function call",
        }
    );
}

#[test]
fn test_value_only_function_walks_list() {
    let fx = Fixture::new();
    let rule = PrefixRuleBuilder::new()
        .match_value("calc")
        .is_function(true)
        .value_only("-webkit-calc")
        .build(&fx.interner)
        .unwrap();
    let block = vec![fx.decl("margin", "calc(1px) 5px calc(2px)")];

    let out = run(&fx, &block, 0, &rule, MatchKind::ValueOnlyFunctionMatch);

    assert_eq!(
        fx.render_all(&out.declarations),
        vec!["margin: -webkit-calc(1px) 5px -webkit-calc(2px); /* @alternate */"]
    );
}

#[test]
fn test_value_only_function_one_per_template_with_original_comments() {
    let fx = Fixture::new();
    let rule = PrefixRuleBuilder::new()
        .match_value("calc")
        .is_function(true)
        .value_only("-webkit-calc")
        .value_only("-moz-calc")
        .build(&fx.interner)
        .unwrap();
    let original = fx
        .decl("width", "calc(100%) auto")
        .with_comments(CommentList::from_vec(vec![Comment::new(fx.name("/* main */"), Span::DUMMY)]));
    let block = vec![original];

    let out = run(&fx, &block, 0, &rule, MatchKind::ValueOnlyFunctionMatch);

    assert_eq!(
        fx.render_all(&out.declarations),
        vec![
            "width: -webkit-calc(100%) auto; /* main */ /* @alternate */",
            "width: -moz-calc(100%) auto; /* main */ /* @alternate */",
        ]
    );
}

#[test]
fn test_malformed_value_only_template() {
    let fx = Fixture::new();
    let rule = PrefixRuleBuilder::new()
        .match_value("calc")
        .is_function(true)
        .value_only_template(fx.value("-webkit-calc"))
        .build(&fx.interner)
        .unwrap();
    let block = vec![fx.decl("margin", "calc(1px)")];
    let target = ExpansionTarget::new(&block, 0).unwrap();

    let err = generate(&fx.interner, &target, RULE, &rule, MatchKind::ValueOnlyFunctionMatch)
        .unwrap_err();
    assert!(matches!(
        err,
        ExpandError::MalformedTemplate {
            template: TemplateRef::ValueOnly(0),
            ..
        }
    ));
}

#[test]
fn test_name_only_copies_original_value() {
    let fx = Fixture::new();
    let rule = PrefixRuleBuilder::new()
        .match_name("transform")
        .expand_name("-webkit-transform")
        .expand_name("-ms-transform")
        .build(&fx.interner)
        .unwrap();
    let block = vec![fx.decl("transform", "rotate(45deg) scale(2)")];

    let out = run(&fx, &block, 0, &rule, MatchKind::NameOnly);

    assert_eq!(
        fx.render_all(&out.declarations),
        vec![
            "-webkit-transform: rotate(45deg) scale(2); /* @alternate */",
            "-ms-transform: rotate(45deg) scale(2); /* @alternate */",
        ]
    );
}

#[test]
fn test_name_only_suppresses_author_override() {
    let fx = Fixture::new();
    let rule = PrefixRuleBuilder::new()
        .match_name("user-select")
        .expand_name("-webkit-user-select")
        .expand_name("-moz-user-select")
        .build(&fx.interner)
        .unwrap();
    let block = vec![fx.decl("-moz-user-select", "none"), fx.decl("user-select", "none")];

    let out = run(&fx, &block, 1, &rule, MatchKind::NameOnly);
    assert_eq!(
        fx.render_all(&out.declarations),
        vec!["-webkit-user-select: none; /* @alternate */"]
    );
    assert_eq!(out.suppressed, 1);
}

#[test]
fn test_no_match_is_empty() {
    let fx = Fixture::new();
    let rule = PrefixRuleBuilder::new()
        .match_name("display")
        .match_value("flex")
        .expand_value("-webkit-flex")
        .build(&fx.interner)
        .unwrap();
    let block = vec![fx.decl("display", "block")];

    assert!(run(&fx, &block, 0, &rule, MatchKind::NoMatch).is_empty());
}

#[test]
fn test_generation_is_deterministic() {
    let fx = Fixture::new();
    let rule = PrefixRuleBuilder::new()
        .match_value("calc")
        .is_function(true)
        .value_only("-webkit-calc")
        .value_only("-moz-calc")
        .build(&fx.interner)
        .unwrap();
    let block = vec![fx.decl("width", "calc(1px)")];

    let expand = || -> Vec<String> {
        let decl = &block[0];
        match_kinds(decl, &rule)
            .into_iter()
            .flat_map(|kind| run(&fx, &block, 0, &rule, kind).declarations)
            .map(|d| fx.render(&d))
            .collect()
    };
    assert_eq!(expand(), expand());
}

#[test]
fn test_target_out_of_bounds() {
    let fx = Fixture::new();
    let block = vec![fx.decl("display", "flex")];
    assert!(ExpansionTarget::new(&block, 1).is_none());
    assert!(ExpansionTarget::new(&[], 0).is_none());
    assert_eq!(ExpansionTarget::new(&block, 0).unwrap().index(), 0);
}
