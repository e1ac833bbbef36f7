//! Mutating style tree visitor.
//!
//! Walks every node of a `StyleSheet` in document order and hands each
//! declaration to the visitor through a `DeclarationSite`. The site exposes
//! the current declaration (mutable) and its block siblings (read-only).
//! Structural edits are requested by returning a `VisitAction`; the walker
//! applies them at the cursor position and moves on.
//!
//! # Cursor Invariants
//!
//! - Only the declaration under the cursor can be removed or replaced.
//! - After `Remove`, the cursor stays put and the next sibling slides in.
//! - After `ReplaceWith(v)`, the cursor skips all of `v`; replacement
//!   declarations are not visited.
//!
//! # Example
//!
//! ```text
//! struct DropColor { color: Name }
//!
//! impl MutatingVisitor for DropColor {
//!     fn visit_declaration(&mut self, site: &mut DeclarationSite<'_>) -> VisitAction {
//!         if site.declaration().name == self.color {
//!             VisitAction::Remove
//!         } else {
//!             VisitAction::Keep
//!         }
//!     }
//! }
//! ```

use super::{BlockArena, BlockId, Declaration, Name, Node, StyleSheet};

/// Structural edit requested for the declaration under the cursor.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum VisitAction {
    /// Leave the declaration in place.
    Keep,
    /// Remove the declaration from its block.
    Remove,
    /// Replace the declaration with these, in order. Include the original
    /// in the list to keep it.
    ReplaceWith(Vec<Declaration>),
}

/// The declaration under the cursor together with its block.
pub struct DeclarationSite<'a> {
    block: BlockId,
    siblings: &'a mut [Declaration],
    index: usize,
}

impl<'a> DeclarationSite<'a> {
    /// Block holding the declaration.
    #[inline]
    pub fn block(&self) -> BlockId {
        self.block
    }

    /// Cursor position of the declaration within its block.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The declaration under the cursor.
    #[inline]
    pub fn declaration(&self) -> &Declaration {
        &self.siblings[self.index]
    }

    /// The declaration under the cursor, mutably.
    #[inline]
    pub fn declaration_mut(&mut self) -> &mut Declaration {
        &mut self.siblings[self.index]
    }

    /// Every declaration of the block, the current one included.
    #[inline]
    pub fn siblings(&self) -> &[Declaration] {
        self.siblings
    }
}

/// Style tree visitor.
///
/// Scope callbacks (`enter_*`/`leave_*`) bracket every node; the default
/// implementations do nothing.
pub trait MutatingVisitor {
    /// Entering a ruleset.
    fn enter_ruleset(&mut self, selector: Name) {
        let _ = selector;
    }

    /// Leaving a ruleset.
    fn leave_ruleset(&mut self, selector: Name) {
        let _ = selector;
    }

    /// Entering a mixin definition body.
    fn enter_mixin_definition(&mut self, name: Name) {
        let _ = name;
    }

    /// Leaving a mixin definition body.
    fn leave_mixin_definition(&mut self, name: Name) {
        let _ = name;
    }

    /// Entering a media block.
    fn enter_media(&mut self, query: Name) {
        let _ = query;
    }

    /// Leaving a media block.
    fn leave_media(&mut self, query: Name) {
        let _ = query;
    }

    /// Visit one declaration.
    fn visit_declaration(&mut self, site: &mut DeclarationSite<'_>) -> VisitAction {
        let _ = site;
        VisitAction::Keep
    }
}

/// Walk a whole style sheet in document order.
pub fn walk_sheet<V: MutatingVisitor + ?Sized>(visitor: &mut V, sheet: &mut StyleSheet) {
    walk_nodes(visitor, &sheet.nodes, &mut sheet.arena);
}

fn walk_nodes<V: MutatingVisitor + ?Sized>(visitor: &mut V, nodes: &[Node], arena: &mut BlockArena) {
    for node in nodes {
        match node {
            Node::Ruleset { selector, body } => {
                visitor.enter_ruleset(*selector);
                walk_block(visitor, arena, *body);
                visitor.leave_ruleset(*selector);
            }
            Node::MixinDefinition { name, body } => {
                visitor.enter_mixin_definition(*name);
                walk_block(visitor, arena, *body);
                visitor.leave_mixin_definition(*name);
            }
            Node::Media { query, children } => {
                visitor.enter_media(*query);
                walk_nodes(visitor, children, arena);
                visitor.leave_media(*query);
            }
        }
    }
}

/// Walk one block with an index cursor, applying each `VisitAction`.
pub fn walk_block<V: MutatingVisitor + ?Sized>(visitor: &mut V, arena: &mut BlockArena, id: BlockId) {
    let declarations = &mut arena.get_mut(id).declarations;
    let mut cursor = 0;

    while cursor < declarations.len() {
        let action = {
            let mut site = DeclarationSite {
                block: id,
                siblings: declarations.as_mut_slice(),
                index: cursor,
            };
            visitor.visit_declaration(&mut site)
        };

        match action {
            VisitAction::Keep => cursor += 1,
            VisitAction::Remove => {
                declarations.remove(cursor);
            }
            VisitAction::ReplaceWith(replacements) => {
                let count = replacements.len();
                declarations.splice(cursor..=cursor, replacements);
                cursor += count;
            }
        }
        debug_assert!(cursor <= declarations.len(), "cursor ran past block end");
    }
}
