//! End-to-end tests: builtin catalog, session modes and diagnostics.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

mod common;

use apx_diagnostic::ErrorCode;
use apx_ir::{render::render_sheet, SharedInterner, Span, StyleSheet};
use apx_rules::{PrefixRuleBuilder, RuleCatalog};
use apxc::{ExpandConfig, Mode, Session};
use common::{decl, generated, name};
use pretty_assertions::assert_eq;

fn builtin_session(config: ExpandConfig) -> Session {
    Session::with_builtin_rules(SharedInterner::new(), config).unwrap()
}

fn sample_sheet(session: &Session) -> StyleSheet {
    let i = session.interner();
    let mut sheet = StyleSheet::new();
    sheet.add_ruleset(
        name(i, ".row"),
        vec![
            decl(i, "display", "flex"),
            decl(i, "user-select", "none"),
            decl(i, "margin", "calc(1px) 5px calc(2px)"),
        ],
    );
    sheet.add_mixin_definition(name(i, "legacy-flex"), vec![decl(i, "display", "flex")]);
    let hero = sheet.ruleset_node(
        name(i, ".hero"),
        vec![decl(i, "background-image", "linear-gradient(red, blue)")],
    );
    sheet.add_media(name(i, "screen"), vec![hero]);
    sheet
}

#[test]
fn expand_with_builtin_catalog() {
    let mut session = builtin_session(ExpandConfig::default());
    let mut sheet = sample_sheet(&session);

    let stats = session.expand(&mut sheet).unwrap();

    let expected = "\
.row {
  display: -webkit-box; /* @alternate */
  display: -moz-box; /* @alternate */
  display: -webkit-flex; /* @alternate */
  display: -ms-flexbox; /* @alternate */
  display: flex;
  -webkit-user-select: none; /* @alternate */
  -moz-user-select: none; /* @alternate */
  -ms-user-select: none; /* @alternate */
  user-select: none;
  margin: -webkit-calc(1px) 5px -webkit-calc(2px); /* @alternate */
  margin: -moz-calc(1px) 5px -moz-calc(2px); /* @alternate */
  margin: calc(1px) 5px calc(2px);
}
@defmixin legacy-flex() {
  display: flex;
}
@media screen {
  .hero {
    background-image: -webkit-linear-gradient(red, blue); /* @alternate */
    background-image: -moz-linear-gradient(red, blue); /* @alternate */
    background-image: -o-linear-gradient(red, blue); /* @alternate */
    background-image: linear-gradient(red, blue);
  }
}
";
    assert_eq!(render_sheet(&sheet, session.interner()), expected);
    assert_eq!(stats.inserted, 12);
    assert_eq!(stats.skipped_in_mixin, 1);
    assert!(session.diagnostics().is_empty());
}

#[test]
fn repeated_expand_is_idempotent() {
    let mut session = builtin_session(ExpandConfig::default());
    let mut sheet = sample_sheet(&session);

    session.expand(&mut sheet).unwrap();
    let first = render_sheet(&sheet, session.interner());
    let stats = session.expand(&mut sheet).unwrap();

    assert_eq!(render_sheet(&sheet, session.interner()), first);
    assert_eq!(stats.removed, stats.inserted);
}

#[test]
fn strip_restores_author_sheet() {
    let mut session = builtin_session(ExpandConfig::default());
    let mut sheet = sample_sheet(&session);
    let before = sheet.clone();

    session.expand(&mut sheet).unwrap();
    session.strip(&mut sheet);

    assert_eq!(sheet, before);
}

#[test]
fn isolate_mode_through_run() {
    let mut session = builtin_session(ExpandConfig::default().with_mode(Mode::Isolate));
    let i = session.interner().clone();
    let mut sheet = StyleSheet::new();
    sheet.add_ruleset(
        name(&i, ".a"),
        vec![
            generated(&i, "display", "-webkit-flex"),
            generated(&i, "display", "-ms-flexbox"),
            decl(&i, "display", "flex"),
        ],
    );

    let stats = session.run(&mut sheet).unwrap();

    assert_eq!(
        render_sheet(&sheet, &i),
        ".a {\n  display: -webkit-flex;\n  display: -ms-flexbox;\n}\n"
    );
    assert_eq!(stats.removed, 1);
    assert_eq!(stats.comments_cleared, 2);
}

#[test]
fn strip_mode_through_run() {
    let mut session = builtin_session(ExpandConfig::default().with_mode(Mode::Strip));
    let i = session.interner().clone();
    let mut sheet = StyleSheet::new();
    sheet.add_ruleset(
        name(&i, ".a"),
        vec![generated(&i, "display", "-webkit-flex"), decl(&i, "display", "flex")],
    );

    let stats = session.run(&mut sheet).unwrap();
    assert_eq!(stats.removed, 1);
    assert_eq!(sheet.generated_count(), 0);
}

#[test]
fn expand_without_strip_keeps_old_output() {
    let mut session = builtin_session(ExpandConfig::default().with_strip_before_expand(false));
    let i = session.interner().clone();
    let mut sheet = StyleSheet::new();
    let body = sheet.add_ruleset(
        name(&i, ".a"),
        vec![generated(&i, "order", "2"), decl(&i, "color", "red")],
    );

    let stats = session.expand(&mut sheet).unwrap();
    assert_eq!(stats.removed, 0);
    assert_eq!(sheet.block(body).len(), 2);
}

#[test]
fn value_shape_mismatch_is_not_an_error() {
    let mut session = builtin_session(ExpandConfig::default());
    let i = session.interner().clone();
    let mut sheet = StyleSheet::new();
    sheet.add_ruleset(
        name(&i, ".a"),
        vec![
            decl(&i, "display", "flex(1)"),
            decl(&i, "width", "calc"),
            decl(&i, "background-image", "linear-gradient"),
        ],
    );
    let before = sheet.clone();

    let stats = session.expand(&mut sheet).unwrap();

    assert_eq!(sheet, before);
    assert_eq!(stats.inserted, 0);
    assert!(session.diagnostics().is_empty());
}

#[test]
fn malformed_rule_reports_diagnostic() {
    let interner = SharedInterner::new();
    let mut catalog = RuleCatalog::new();
    catalog.push(
        PrefixRuleBuilder::new()
            .match_value("calc")
            .is_function(true)
            .value_only_template(common::value(&interner, "-webkit-calc"))
            .build(&interner)
            .unwrap(),
    );
    let mut session = Session::new(interner.clone(), catalog, ExpandConfig::default());

    let mut sheet = StyleSheet::new();
    let original = apx_ir::Declaration::new(
        name(&interner, "width"),
        common::value(&interner, "calc(1px)"),
        Span::new(12, 30),
    );
    sheet.add_ruleset(name(&interner, ".a"), vec![original]);
    let before = sheet.clone();

    assert!(session.expand(&mut sheet).is_err());
    assert_eq!(sheet, before);

    let diagnostics = session.take_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E1002);
    assert_eq!(diagnostics[0].primary_span(), Some(Span::new(12, 30)));
    assert!(diagnostics[0]
        .notes
        .iter()
        .any(|n| n == "rule #0 matches `*: calc()`"));
}

#[test]
fn error_limit_caps_reported_errors() {
    let interner = SharedInterner::new();
    let mut catalog = RuleCatalog::new();
    catalog.push(
        PrefixRuleBuilder::new()
            .match_value("calc")
            .is_function(true)
            .value_only_template(common::value(&interner, "-webkit-calc"))
            .build(&interner)
            .unwrap(),
    );
    let mut session = Session::new(
        interner.clone(),
        catalog,
        ExpandConfig::default().with_error_limit(2),
    );

    let mut sheet = StyleSheet::new();
    let decls = (0..5)
        .map(|n| {
            apx_ir::Declaration::new(
                name(&interner, "width"),
                common::value(&interner, "calc(1px)"),
                Span::new(n * 10, n * 10 + 5),
            )
        })
        .collect();
    sheet.add_ruleset(name(&interner, ".a"), decls);

    assert!(session.expand(&mut sheet).is_err());
    assert_eq!(session.diagnostics().error_count(), 2);
    assert!(session.diagnostics().limit_reached());
}
