//! Expansion session.

use apx_diagnostic::{Diagnostic, DiagnosticQueue, ErrorGuaranteed};
use apx_expand::{ExpandError, PassStats, PrefixPass};
use apx_ir::{SharedInterner, StyleSheet};
use apx_rules::{RuleCatalog, RuleError};

use crate::{ExpandConfig, Mode};

/// One compilation's expander state.
///
/// The catalog is read-only for the session's lifetime; the diagnostic
/// queue collects errors across runs until [`Session::take_diagnostics`].
pub struct Session {
    interner: SharedInterner,
    catalog: RuleCatalog,
    config: ExpandConfig,
    diagnostics: DiagnosticQueue,
}

impl Session {
    /// Create a session. `catalog` must have been built with `interner`.
    pub fn new(interner: SharedInterner, catalog: RuleCatalog, config: ExpandConfig) -> Self {
        let diagnostics = DiagnosticQueue::with_config(config.diagnostic_config());
        Session {
            interner,
            catalog,
            config,
            diagnostics,
        }
    }

    /// Create a session using the builtin rule catalog.
    pub fn with_builtin_rules(
        interner: SharedInterner,
        config: ExpandConfig,
    ) -> Result<Self, RuleError> {
        let catalog = RuleCatalog::builtin(&interner)?;
        Ok(Self::new(interner, catalog, config))
    }

    #[inline]
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    #[inline]
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    #[inline]
    pub fn config(&self) -> &ExpandConfig {
        &self.config
    }

    /// Run the configured mode over `sheet`.
    pub fn run(&mut self, sheet: &mut StyleSheet) -> Result<PassStats, ErrorGuaranteed> {
        match self.config.mode {
            Mode::Expand => self.expand(sheet),
            Mode::Strip => Ok(self.strip(sheet)),
            Mode::Isolate => Ok(self.isolate(sheet)),
        }
    }

    /// Expand every author declaration, stripping earlier output first when
    /// configured to.
    ///
    /// Returns `Err` when a rule application failed during this run. The
    /// sheet is still complete: failed pairs simply contributed nothing.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn expand(&mut self, sheet: &mut StyleSheet) -> Result<PassStats, ErrorGuaranteed> {
        let mut stats = PassStats::default();
        if self.config.strip_before_expand {
            stats.merge(self.strip(sheet));
        }

        let outcome = PrefixPass::expand(&self.catalog, &self.interner).run(sheet);
        stats.merge(outcome.stats);

        match self.report(outcome.errors) {
            Some(guarantee) => Err(guarantee),
            None => Ok(stats),
        }
    }

    /// Remove every generated declaration outside mixin definitions.
    pub fn strip(&mut self, sheet: &mut StyleSheet) -> PassStats {
        PrefixPass::strip(&self.interner).run(sheet).stats
    }

    /// Reduce `sheet` to its generated declarations, without comments.
    pub fn isolate(&mut self, sheet: &mut StyleSheet) -> PassStats {
        PrefixPass::isolate(&self.interner).run(sheet).stats
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &DiagnosticQueue {
        &self.diagnostics
    }

    /// Drain collected diagnostics, sorted by position.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.flush()
    }

    /// Queue a diagnostic per error. `Some` if any error was reported.
    fn report(&mut self, errors: Vec<ExpandError>) -> Option<ErrorGuaranteed> {
        let mut guarantee = None;
        for err in errors {
            let mut diagnostic = err.to_diagnostic();
            if let Some(rule) = self.catalog.get(err.rule()) {
                diagnostic = diagnostic.with_note(format!(
                    "rule {} matches `{}`",
                    err.rule(),
                    rule.describe(&self.interner)
                ));
            }
            guarantee = Some(self.diagnostics.emit_error(diagnostic));

            if self.diagnostics.limit_reached() {
                tracing::debug!(
                    limit = self.config.error_limit,
                    "error limit reached, dropping further expansion errors",
                );
                break;
            }
        }
        guarantee
    }
}
