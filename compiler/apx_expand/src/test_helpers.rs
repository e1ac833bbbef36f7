//! Shared test utilities for the expansion modules.
//!
//! Values are written in their rendered form (`calc(1px) 5px`) and turned
//! into nodes by a tiny splitter. Only compiled in test builds.

use apx_ir::{
    render, Declaration, Name, PropertyValue, Span, StringInterner, ValueNode,
};

/// Split `text` at `sep` where not nested inside parentheses.
fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0u32;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == sep && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts.into_iter().map(str::trim).filter(|p| !p.is_empty()).collect()
}

fn parse_node(interner: &StringInterner, token: &str) -> ValueNode {
    match token.find('(') {
        Some(open) if token.ends_with(')') => {
            let name = interner.intern(&token[..open]);
            let inner = &token[open + 1..token.len() - 1];
            let args = split_top_level(inner, ',')
                .into_iter()
                .map(|arg| parse_node(interner, arg))
                .collect();
            ValueNode::function(name, args)
        }
        _ => ValueNode::literal(interner.intern(token)),
    }
}

/// Interner plus shorthand constructors.
pub(crate) struct Fixture {
    pub(crate) interner: StringInterner,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Fixture {
            interner: StringInterner::new(),
        }
    }

    pub(crate) fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    /// Parse a rendered value such as `-webkit-calc(1px) 5px`.
    pub(crate) fn value(&self, text: &str) -> PropertyValue {
        split_top_level(text, ' ')
            .into_iter()
            .map(|token| parse_node(&self.interner, token))
            .collect()
    }

    /// Author-written declaration.
    pub(crate) fn decl(&self, name: &str, value: &str) -> Declaration {
        Declaration::new(self.name(name), self.value(value), Span::DUMMY)
    }

    /// Author-written declaration with a span.
    pub(crate) fn decl_at(&self, name: &str, value: &str, span: Span) -> Declaration {
        Declaration::new(self.name(name), self.value(value), span)
    }

    /// Declaration as the expander would have produced it.
    pub(crate) fn generated(&self, name: &str, value: &str) -> Declaration {
        let mut decl = self.decl(name, value);
        decl.mark_generated(&self.interner);
        decl
    }

    pub(crate) fn render(&self, decl: &Declaration) -> String {
        render::render_declaration(decl, &self.interner)
    }

    pub(crate) fn render_all<'a>(
        &self,
        decls: impl IntoIterator<Item = &'a Declaration>,
    ) -> Vec<String> {
        decls.into_iter().map(|d| self.render(d)).collect()
    }
}
