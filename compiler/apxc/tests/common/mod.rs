//! Sheet-building helpers shared by the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use apx_ir::{Declaration, Name, PropertyValue, Span, StringInterner, ValueNode};

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

fn node(interner: &StringInterner, token: &str) -> ValueNode {
    match token.find('(') {
        Some(open) if token.ends_with(')') => {
            let args = split_top_level(&token[open + 1..token.len() - 1], ',')
                .into_iter()
                .map(|arg| node(interner, arg))
                .collect();
            ValueNode::function(interner.intern(&token[..open]), args)
        }
        _ => ValueNode::literal(interner.intern(token)),
    }
}

/// Parse a rendered value such as `calc(1px) 5px`.
pub fn value(interner: &StringInterner, text: &str) -> PropertyValue {
    split_top_level(text, ' ')
        .into_iter()
        .map(|token| node(interner, token))
        .collect()
}

pub fn name(interner: &StringInterner, text: &str) -> Name {
    interner.intern(text)
}

/// Author-written declaration.
pub fn decl(interner: &StringInterner, name: &str, text: &str) -> Declaration {
    Declaration::new(interner.intern(name), value(interner, text), Span::DUMMY)
}

/// Declaration as a previous expansion run would have left it.
pub fn generated(interner: &StringInterner, name: &str, text: &str) -> Declaration {
    let mut d = decl(interner, name, text);
    d.mark_generated(interner);
    d
}
