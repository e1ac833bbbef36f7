//! The ordered rule catalog.
//!
//! Catalog order is generation order. Lookups by property name go through
//! an index so a declaration only meets rules that could match it, but the
//! candidates still come back in catalog order.

use std::fmt;

use apx_ir::Name;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::PrefixRule;

/// Position of a rule in its catalog.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct RuleId(u32);

impl RuleId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        RuleId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleId({})", self.0)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Candidate rule list for one declaration.
pub type Candidates = SmallVec<[RuleId; 4]>;

/// Ordered, read-only collection of prefix rules.
#[derive(Clone, Debug, Default)]
pub struct RuleCatalog {
    rules: Vec<PrefixRule>,
    /// Rules restricted to one property name.
    by_name: FxHashMap<Name, SmallVec<[RuleId; 2]>>,
    /// Rules that match on value alone.
    any_name: Vec<RuleId>,
}

impl RuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule and return its id.
    ///
    /// # Panics
    /// Panics if the catalog exceeds `u32::MAX` rules.
    pub fn push(&mut self, rule: PrefixRule) -> RuleId {
        let index = u32::try_from(self.rules.len())
            .unwrap_or_else(|_| panic!("rule catalog exceeded {} rules", u32::MAX));
        let id = RuleId::new(index);
        match rule.match_name() {
            Some(name) => self.by_name.entry(name).or_default().push(id),
            None => self.any_name.push(id),
        }
        self.rules.push(rule);
        id
    }

    /// Get a rule by id. `None` for ids from another catalog.
    #[inline]
    pub fn get(&self, id: RuleId) -> Option<&PrefixRule> {
        self.rules.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every rule in catalog order.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "push keeps the rule count within u32"
    )]
    pub fn iter(&self) -> impl Iterator<Item = (RuleId, &PrefixRule)> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| (RuleId::new(i as u32), rule))
    }

    /// Rules that may match a declaration named `name`, in catalog order.
    pub fn candidates(&self, name: Name) -> Candidates {
        let named = self.by_name.get(&name).map_or(&[][..], |ids| ids.as_slice());
        let any = self.any_name.as_slice();

        // Both lists are ascending; merge them.
        let mut out = Candidates::with_capacity(named.len() + any.len());
        let (mut i, mut j) = (0, 0);
        while i < named.len() && j < any.len() {
            if named[i] < any[j] {
                out.push(named[i]);
                i += 1;
            } else {
                out.push(any[j]);
                j += 1;
            }
        }
        out.extend_from_slice(&named[i..]);
        out.extend_from_slice(&any[j..]);
        out
    }
}

impl FromIterator<PrefixRule> for RuleCatalog {
    fn from_iter<I: IntoIterator<Item = PrefixRule>>(iter: I) -> Self {
        let mut catalog = RuleCatalog::new();
        for rule in iter {
            catalog.push(rule);
        }
        catalog
    }
}
