//! Declarations: one `property: value;` entry in a block.

use super::{Comment, CommentList, Name, Named, PropertyValue, Span, Spanned, StringInterner};

/// A single declaration.
///
/// `generated` is true iff the expander created this declaration. Parsers
/// and rule catalogs always build declarations with `generated == false`;
/// the flag survives `Clone`, so copies of generated declarations stay
/// generated.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Declaration {
    /// Property name.
    pub name: Name,
    /// Property value list.
    pub value: PropertyValue,
    /// Comments attached to the declaration, in order.
    pub comments: CommentList,
    /// Provenance token.
    pub span: Span,
    /// Whether the expander produced this declaration.
    pub generated: bool,
}

impl Declaration {
    /// Create an author-written declaration with no comments.
    pub fn new(name: Name, value: PropertyValue, span: Span) -> Self {
        Declaration {
            name,
            value,
            comments: CommentList::new(),
            span,
            generated: false,
        }
    }

    /// Attach comments.
    #[must_use]
    pub fn with_comments(mut self, comments: CommentList) -> Self {
        self.comments = comments;
        self
    }

    /// Append a comment.
    pub fn append_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Mark as produced by the expander: set `generated` and append the
    /// `/* @alternate */` marker.
    pub fn mark_generated(&mut self, interner: &StringInterner) {
        self.generated = true;
        self.append_comment(Comment::alternate(interner));
    }
}

impl Spanned for Declaration {
    fn span(&self) -> Span {
        self.span
    }
}

impl Named for Declaration {
    fn name(&self) -> Name {
        self.name
    }
}
