//! Duplicate suppression.
//!
//! Authors may hand-write one prefixed alternate (`display: -webkit-flex;`)
//! and still want the rest of the set. A candidate is suppressed when
//! another declaration in the same block already has its name and renders
//! to the same value text.

use apx_ir::{render::render_value, Declaration, StringLookup};

/// Check if `candidate` duplicates a declaration in `siblings` other than
/// the one at `original_index`.
///
/// Values compare by canonical rendered text, so structurally different
/// values that print the same are duplicates.
pub fn should_suppress<L: StringLookup + ?Sized>(
    candidate: &Declaration,
    siblings: &[Declaration],
    original_index: usize,
    lookup: &L,
) -> bool {
    let same_name = move || {
        siblings
            .iter()
            .enumerate()
            .filter(move |&(i, d)| i != original_index && d.name == candidate.name)
            .map(|(_, d)| d)
    };

    // Cheap name check first; rendering only happens when the name is taken.
    if same_name().next().is_none() {
        return false;
    }

    let rendered = render_value(&candidate.value, lookup);
    same_name().any(|d| render_value(&d.value, lookup) == rendered)
}
