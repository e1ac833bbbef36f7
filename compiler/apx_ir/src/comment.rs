//! Comments attached to declarations.
//!
//! Comments ride along with the declaration they were written on. The
//! expander tags every declaration it creates with the `/* @alternate */`
//! marker so output readers can tell generated alternates from author code.

use super::{Name, Span, StringInterner};
use std::fmt;

/// Text of the marker comment appended to generated declarations.
pub const ALTERNATE_MARKER: &str = "/* @alternate */";

/// A comment with its full text (delimiters included) and span.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Comment {
    /// Comment text including `/*` and `*/`. Interned.
    pub text: Name,
    /// Source span, or `Span::DUMMY` for comments the engine created.
    pub span: Span,
}

impl Comment {
    /// Create a new comment.
    #[inline]
    pub fn new(text: Name, span: Span) -> Self {
        Comment { text, span }
    }

    /// The `/* @alternate */` marker comment.
    pub fn alternate(interner: &StringInterner) -> Self {
        Comment::new(interner.intern(ALTERNATE_MARKER), Span::DUMMY)
    }

    /// Check if this is the engine marker comment.
    pub fn is_alternate(&self, interner: &StringInterner) -> bool {
        interner.lookup(self.text) == ALTERNATE_MARKER
    }
}

impl fmt::Debug for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.text, self.span)
    }
}

/// Ordered list of comments attached to one declaration.
#[derive(Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct CommentList {
    comments: Vec<Comment>,
}

impl CommentList {
    /// Create a new empty comment list.
    #[inline]
    pub fn new() -> Self {
        CommentList {
            comments: Vec::new(),
        }
    }

    /// Create from a Vec of comments.
    #[inline]
    pub fn from_vec(comments: Vec<Comment>) -> Self {
        CommentList { comments }
    }

    /// Append a comment.
    #[inline]
    pub fn push(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Drop every comment.
    #[inline]
    pub fn clear(&mut self) {
        self.comments.clear();
    }

    /// Get the number of comments.
    #[inline]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Iterate over comments in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Comment> {
        self.comments.iter()
    }

    /// Check whether the engine marker is present.
    pub fn has_alternate(&self, interner: &StringInterner) -> bool {
        self.comments.iter().any(|c| c.is_alternate(interner))
    }
}

impl<'a> IntoIterator for &'a CommentList {
    type Item = &'a Comment;
    type IntoIter = std::slice::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.comments.iter()
    }
}
