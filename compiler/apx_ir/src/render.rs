//! Canonical text rendering.
//!
//! The rendered form is the comparison key for duplicate detection: two
//! values are "the same" when they render to the same text, even if their
//! node structure differs (a literal `-webkit-calc(1px)` equals a call node
//! with that name and argument).
//!
//! Layout rules:
//! - value nodes are separated by one space
//! - function arguments are separated by `, `
//! - a declaration is `name: value;` followed by its comments
//! - blocks are indented by two spaces

use super::{
    BlockArena, BlockId, Declaration, Node, PropertyValue, StringLookup, StyleSheet, ValueNode,
};

/// Render a property value to its canonical text.
pub fn render_value<L: StringLookup + ?Sized>(value: &PropertyValue, lookup: &L) -> String {
    let mut out = String::new();
    write_value(&mut out, value.nodes(), " ", lookup);
    out
}

/// Render a single value node.
pub fn render_node<L: StringLookup + ?Sized>(node: &ValueNode, lookup: &L) -> String {
    let mut out = String::new();
    write_node(&mut out, node, lookup);
    out
}

/// Render a declaration as `name: value;` plus comments.
pub fn render_declaration<L: StringLookup + ?Sized>(decl: &Declaration, lookup: &L) -> String {
    let mut out = String::new();
    write_declaration(&mut out, decl, lookup);
    out
}

/// Render a whole style sheet.
pub fn render_sheet<L: StringLookup + ?Sized>(sheet: &StyleSheet, lookup: &L) -> String {
    let mut renderer = SheetRenderer {
        out: String::new(),
        indent: 0,
        arena: &sheet.arena,
        lookup,
    };
    renderer.nodes(&sheet.nodes);
    renderer.out
}

fn write_value<L: StringLookup + ?Sized>(
    out: &mut String,
    nodes: &[ValueNode],
    separator: &str,
    lookup: &L,
) {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write_node(out, node, lookup);
    }
}

fn write_node<L: StringLookup + ?Sized>(out: &mut String, node: &ValueNode, lookup: &L) {
    match node {
        ValueNode::Literal(text) => out.push_str(lookup.lookup(*text)),
        ValueNode::Function(call) => {
            out.push_str(lookup.lookup(call.name));
            out.push('(');
            write_value(out, &call.args, ", ", lookup);
            out.push(')');
        }
    }
}

fn write_declaration<L: StringLookup + ?Sized>(out: &mut String, decl: &Declaration, lookup: &L) {
    out.push_str(lookup.lookup(decl.name));
    out.push_str(": ");
    write_value(out, decl.value.nodes(), " ", lookup);
    out.push(';');
    for comment in &decl.comments {
        out.push(' ');
        out.push_str(lookup.lookup(comment.text));
    }
}

/// Indentation-tracking writer for whole sheets.
struct SheetRenderer<'a, L: StringLookup + ?Sized> {
    out: String,
    indent: usize,
    arena: &'a BlockArena,
    lookup: &'a L,
}

impl<L: StringLookup + ?Sized> SheetRenderer<'_, L> {
    fn nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            match node {
                Node::Ruleset { selector, body } => {
                    let header = self.lookup.lookup(*selector).to_owned();
                    self.block(&header, *body);
                }
                Node::MixinDefinition { name, body } => {
                    let header = format!("@defmixin {}()", self.lookup.lookup(*name));
                    self.block(&header, *body);
                }
                Node::Media { query, children } => {
                    let header = format!("@media {}", self.lookup.lookup(*query));
                    self.open(&header);
                    self.nodes(children);
                    self.close();
                }
            }
        }
    }

    fn block(&mut self, header: &str, body: BlockId) {
        self.open(header);
        let arena = self.arena;
        for decl in arena.get(body).iter() {
            self.line_start();
            write_declaration(&mut self.out, decl, self.lookup);
            self.out.push('\n');
        }
        self.close();
    }

    fn open(&mut self, header: &str) {
        self.line_start();
        self.out.push_str(header);
        self.out.push_str(" {\n");
        self.indent += 1;
    }

    fn close(&mut self) {
        self.indent -= 1;
        self.line_start();
        self.out.push_str("}\n");
    }

    fn line_start(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
    }
}
