//! The prefix tree pass.
//!
//! Walks a style sheet with the mutating visitor. Declarations inside mixin
//! definition bodies are visited but never touched, in every mode.
//!
//! # Modes
//!
//! | mode      | generated declaration | author declaration          |
//! |-----------|-----------------------|-----------------------------|
//! | `Strip`   | removed               | kept                        |
//! | `Isolate` | kept, comments cleared| removed                     |
//! | `Expand`  | kept                  | replaced by alternates + itself |
//!
//! Running `Strip` before `Expand` makes expansion idempotent: run N+1 never
//! accumulates the output of run N.

use apx_ir::{
    walk_sheet, DeclarationSite, MutatingVisitor, Name, StringInterner, StyleSheet, VisitAction,
};
use apx_rules::{PrefixRule, RuleCatalog, RuleId};

use crate::{generate, match_kinds, ExpandError, Expansion, ExpansionTarget};

/// What the pass does to declarations outside mixin definitions.
#[derive(Copy, Clone, Debug)]
pub enum PassMode<'a> {
    /// Remove generated declarations.
    Strip,
    /// Remove author declarations and clear comments on generated ones.
    Isolate,
    /// Insert generated alternates before each matching author declaration.
    Expand(&'a RuleCatalog),
}

impl PassMode<'_> {
    /// Short mode name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            PassMode::Strip => "strip",
            PassMode::Isolate => "isolate",
            PassMode::Expand(_) => "expand",
        }
    }
}

/// Counters for one pass run.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct PassStats {
    /// Declarations handed to the pass, mixin bodies included.
    pub visited: usize,
    /// Declarations removed.
    pub removed: usize,
    /// Generated declarations inserted.
    pub inserted: usize,
    /// Candidates dropped as author-written duplicates.
    pub suppressed: usize,
    /// Generated declarations whose comments were cleared.
    pub comments_cleared: usize,
    /// Declarations left alone because they sit in a mixin definition.
    pub skipped_in_mixin: usize,
}

impl PassStats {
    /// Accumulate another run's counters.
    pub fn merge(&mut self, other: PassStats) {
        self.visited += other.visited;
        self.removed += other.removed;
        self.inserted += other.inserted;
        self.suppressed += other.suppressed;
        self.comments_cleared += other.comments_cleared;
        self.skipped_in_mixin += other.skipped_in_mixin;
    }
}

/// Result of a pass run.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct PassOutcome {
    pub stats: PassStats,
    /// Rule applications that failed, in document then catalog order.
    pub errors: Vec<ExpandError>,
}

/// Strip, isolate or expand prefixed declarations across a style sheet.
pub struct PrefixPass<'a> {
    mode: PassMode<'a>,
    interner: &'a StringInterner,
    in_mixin_definition: bool,
    stats: PassStats,
    errors: Vec<ExpandError>,
}

impl<'a> PrefixPass<'a> {
    pub fn new(mode: PassMode<'a>, interner: &'a StringInterner) -> Self {
        PrefixPass {
            mode,
            interner,
            in_mixin_definition: false,
            stats: PassStats::default(),
            errors: Vec::new(),
        }
    }

    pub fn strip(interner: &'a StringInterner) -> Self {
        Self::new(PassMode::Strip, interner)
    }

    pub fn isolate(interner: &'a StringInterner) -> Self {
        Self::new(PassMode::Isolate, interner)
    }

    pub fn expand(catalog: &'a RuleCatalog, interner: &'a StringInterner) -> Self {
        Self::new(PassMode::Expand(catalog), interner)
    }

    /// Run over the whole sheet, mutating it in place.
    #[tracing::instrument(level = "debug", skip_all, fields(mode = self.mode.name()))]
    pub fn run(mut self, sheet: &mut StyleSheet) -> PassOutcome {
        walk_sheet(&mut self, sheet);

        let stats = self.stats;
        tracing::debug!(
            visited = stats.visited,
            removed = stats.removed,
            inserted = stats.inserted,
            suppressed = stats.suppressed,
            errors = self.errors.len(),
            "prefix pass finished",
        );

        PassOutcome {
            stats,
            errors: self.errors,
        }
    }

    fn strip_declaration(&mut self, site: &DeclarationSite<'_>) -> VisitAction {
        if site.declaration().generated {
            self.stats.removed += 1;
            VisitAction::Remove
        } else {
            VisitAction::Keep
        }
    }

    fn isolate_declaration(&mut self, site: &mut DeclarationSite<'_>) -> VisitAction {
        let decl = site.declaration_mut();
        if decl.generated {
            decl.comments.clear();
            self.stats.comments_cleared += 1;
            VisitAction::Keep
        } else {
            self.stats.removed += 1;
            VisitAction::Remove
        }
    }

    /// Every strategy of one rule. A malformed template discards the output
    /// of all of them.
    fn apply_rule(
        &self,
        target: &ExpansionTarget<'_>,
        id: RuleId,
        rule: &PrefixRule,
    ) -> Result<Expansion, ExpandError> {
        let mut pair = Expansion::default();
        for kind in match_kinds(target.declaration(), rule) {
            let expansion = generate(self.interner, target, id, rule, kind)?;
            pair.suppressed += expansion.suppressed;
            pair.declarations.extend(expansion.declarations);
        }
        Ok(pair)
    }

    fn expand_declaration(
        &mut self,
        catalog: &RuleCatalog,
        site: &DeclarationSite<'_>,
    ) -> VisitAction {
        let original = site.declaration();
        if original.generated {
            return VisitAction::Keep;
        }

        let target = ExpansionTarget::from_site(site);
        let mut alternates = Vec::new();

        for id in catalog.candidates(original.name) {
            let Some(rule) = catalog.get(id) else {
                continue;
            };
            match self.apply_rule(&target, id, rule) {
                Ok(expansion) => {
                    self.stats.suppressed += expansion.suppressed;
                    alternates.extend(expansion.declarations);
                }
                Err(err) => {
                    tracing::debug!(rule = %id, %err, "rule application failed");
                    self.errors.push(err);
                }
            }
        }

        if alternates.is_empty() {
            return VisitAction::Keep;
        }

        tracing::trace!(
            name = self.interner.lookup(original.name),
            alternates = alternates.len(),
            "expanded declaration",
        );
        self.stats.inserted += alternates.len();
        alternates.push(original.clone());
        VisitAction::ReplaceWith(alternates)
    }
}

impl MutatingVisitor for PrefixPass<'_> {
    fn enter_mixin_definition(&mut self, _name: Name) {
        self.in_mixin_definition = true;
    }

    fn leave_mixin_definition(&mut self, _name: Name) {
        self.in_mixin_definition = false;
    }

    fn visit_declaration(&mut self, site: &mut DeclarationSite<'_>) -> VisitAction {
        self.stats.visited += 1;
        if self.in_mixin_definition {
            self.stats.skipped_in_mixin += 1;
            return VisitAction::Keep;
        }

        match self.mode {
            PassMode::Strip => self.strip_declaration(site),
            PassMode::Isolate => self.isolate_declaration(site),
            PassMode::Expand(catalog) => self.expand_declaration(catalog, site),
        }
    }
}
