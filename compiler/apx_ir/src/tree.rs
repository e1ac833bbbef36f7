//! Style sheet tree with arena-owned declaration blocks.
//!
//! Tree nodes (rulesets, mixin definitions, media blocks) never own their
//! declarations directly; they hold a `BlockId` into the sheet's
//! `BlockArena`. The visitor walks a block with an index cursor, so a node
//! being removed under the cursor never moves a sibling the walk has not
//! accounted for.

use std::fmt;

use super::{Declaration, Name};

/// Index into the block arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct BlockId(u32);

impl BlockId {
    /// Create a new `BlockId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        BlockId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockId({})", self.0)
    }
}

/// Ordered declarations of one rule body.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Block {
    pub(crate) declarations: Vec<Declaration>,
}

impl Block {
    /// Create a block from declarations in source order.
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Block { declarations }
    }

    /// Declarations in order.
    #[inline]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Number of declarations.
    #[inline]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Check if the block has no declarations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Append a declaration.
    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    /// Iterate over declarations in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }
}

/// Storage for every declaration block of a style sheet.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct BlockArena {
    blocks: Vec<Block>,
}

impl BlockArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        BlockArena { blocks: Vec::new() }
    }

    /// Store a block and return its id.
    ///
    /// # Panics
    /// Panics if the arena holds more than `u32::MAX` blocks.
    pub fn alloc(&mut self, block: Block) -> BlockId {
        let index = u32::try_from(self.blocks.len())
            .unwrap_or_else(|_| panic!("block arena exceeded u32::MAX entries"));
        self.blocks.push(block);
        BlockId::new(index)
    }

    /// Get a block by id.
    #[inline]
    pub fn get(&self, id: BlockId) -> &Block {
        &self.blocks[id.index()]
    }

    /// Get a block mutably by id.
    #[inline]
    pub fn get_mut(&mut self, id: BlockId) -> &mut Block {
        &mut self.blocks[id.index()]
    }

    /// Number of blocks.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the arena is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A construct in the style sheet tree.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Node {
    /// `selector { declarations }`
    Ruleset { selector: Name, body: BlockId },
    /// `@defmixin name() { declarations }`. Its body is never expanded.
    MixinDefinition { name: Name, body: BlockId },
    /// `@media query { nodes }`
    Media { query: Name, children: Vec<Node> },
}

/// A whole style sheet: top-level nodes plus the block arena.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct StyleSheet {
    pub arena: BlockArena,
    pub nodes: Vec<Node>,
}

impl StyleSheet {
    /// Create an empty style sheet.
    pub fn new() -> Self {
        StyleSheet::default()
    }

    /// Append a top-level ruleset and return its body id.
    pub fn add_ruleset(&mut self, selector: Name, declarations: Vec<Declaration>) -> BlockId {
        let body = self.arena.alloc(Block::new(declarations));
        self.nodes.push(Node::Ruleset { selector, body });
        body
    }

    /// Append a top-level mixin definition and return its body id.
    pub fn add_mixin_definition(&mut self, name: Name, declarations: Vec<Declaration>) -> BlockId {
        let body = self.arena.alloc(Block::new(declarations));
        self.nodes.push(Node::MixinDefinition { name, body });
        body
    }

    /// Append a top-level media block holding `children`.
    pub fn add_media(&mut self, query: Name, children: Vec<Node>) {
        self.nodes.push(Node::Media { query, children });
    }

    /// Build a ruleset node whose body lives in this sheet's arena, for use
    /// as a child of a media block.
    pub fn ruleset_node(&mut self, selector: Name, declarations: Vec<Declaration>) -> Node {
        let body = self.arena.alloc(Block::new(declarations));
        Node::Ruleset { selector, body }
    }

    /// Get a block by id.
    #[inline]
    pub fn block(&self, id: BlockId) -> &Block {
        self.arena.get(id)
    }

    /// Every declaration reachable from the tree, in document order.
    pub fn declarations(&self) -> Vec<&Declaration> {
        let mut out = Vec::new();
        collect_declarations(&self.nodes, &self.arena, &mut out);
        out
    }

    /// Number of generated declarations reachable from the tree.
    pub fn generated_count(&self) -> usize {
        self.declarations().iter().filter(|d| d.generated).count()
    }
}

fn collect_declarations<'a>(nodes: &'a [Node], arena: &'a BlockArena, out: &mut Vec<&'a Declaration>) {
    for node in nodes {
        match node {
            Node::Ruleset { body, .. } | Node::MixinDefinition { body, .. } => {
                out.extend(arena.get(*body).iter());
            }
            Node::Media { children, .. } => collect_declarations(children, arena, out),
        }
    }
}
