//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Error limits so a broken catalog cannot flood the host
//! - Deduplication of repeated errors at the same declaration
//! - `ErrorGuaranteed` proof that errors were emitted

use std::hash::{Hash, Hasher};

use crate::{Diagnostic, ErrorCode, ErrorGuaranteed};

/// Hash a message for dedup comparison without keeping an owned copy.
#[inline]
fn message_hash(msg: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    msg.hash(&mut hasher);
    hasher.finish()
}

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before stopping (0 = unlimited).
    pub error_limit: usize,
    /// Drop an error identical in code, span and message to an earlier one.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

/// Dedup key: code, primary span start, message hash.
type SeenKey = (ErrorCode, u32, u64);

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// let guarantee = queue.emit_error(diagnostic);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    /// Errors accepted since the last flush.
    error_count: usize,
    seen: Vec<SeenKey>,
    config: DiagnosticConfig,
}

impl Default for DiagnosticQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            seen: Vec::new(),
            config,
        }
    }

    /// Add a diagnostic to the queue.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            return false;
        }

        if self.config.deduplicate {
            let key = Self::seen_key(&diag);
            if self.seen.contains(&key) {
                return false;
            }
            self.seen.push(key);
        }

        self.diagnostics.push(diag);
        self.error_count += 1;
        true
    }

    /// Emit an error diagnostic and get proof it was emitted.
    ///
    /// The guarantee is returned even when the diagnostic itself was
    /// filtered as a duplicate or past the limit: an error of that kind
    /// has already been reported.
    pub fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        self.add(diag);
        ErrorGuaranteed::new()
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Sort diagnostics by primary span and return them.
    ///
    /// Clears the queue. The sort is stable, so diagnostics at the same
    /// position keep emission order. Diagnostics without a span sort last.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| Self::sort_key(&w[0]) <= Self::sort_key(&w[1]));

        if !already_sorted {
            self.diagnostics.sort_by_key(Self::sort_key);
        }

        self.error_count = 0;
        self.seen.clear();
        std::mem::take(&mut self.diagnostics)
    }

    fn sort_key(diag: &Diagnostic) -> u32 {
        diag.primary_span().map_or(u32::MAX, |span| span.start)
    }

    fn seen_key(diag: &Diagnostic) -> SeenKey {
        let start = diag.primary_span().map_or(u32::MAX, |span| span.start);
        (diag.code, start, message_hash(&diag.message))
    }
}
