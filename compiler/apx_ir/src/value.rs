//! Property values.
//!
//! A property value is an ordered list of value nodes. Each node is either a
//! literal token (`flex`, `10px`, `red`) or a function call whose arguments
//! are themselves value nodes (`linear-gradient(red, blue)`).
//!
//! Deep copy is `Clone`: nodes own their arguments, so cloning a template
//! never aliases the rule catalog.

use smallvec::SmallVec;

use super::Name;

/// A function call value: `name(arg, arg, ...)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionCall {
    /// Function name, e.g. `linear-gradient` or `-webkit-calc`.
    pub name: Name,
    /// Arguments in source order.
    pub args: Vec<ValueNode>,
}

impl FunctionCall {
    /// Create a new function call.
    pub fn new(name: Name, args: Vec<ValueNode>) -> Self {
        FunctionCall { name, args }
    }

    /// Copy of this call with `args` substituted for its own arguments.
    ///
    /// Used to re-target a call to a prefixed function name while keeping
    /// the author's arguments.
    #[must_use]
    pub fn with_args(&self, args: &[ValueNode]) -> Self {
        FunctionCall {
            name: self.name,
            args: args.to_vec(),
        }
    }
}

/// A single entry in a property value list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueNode {
    /// Literal token text.
    Literal(Name),
    /// Function call with arguments.
    Function(FunctionCall),
}

impl ValueNode {
    /// Create a literal node.
    #[inline]
    pub fn literal(text: Name) -> Self {
        ValueNode::Literal(text)
    }

    /// Create a function call node.
    #[inline]
    pub fn function(name: Name, args: Vec<ValueNode>) -> Self {
        ValueNode::Function(FunctionCall::new(name, args))
    }

    /// The literal text, if this is a literal.
    pub fn as_literal(&self) -> Option<Name> {
        match self {
            ValueNode::Literal(text) => Some(*text),
            ValueNode::Function(_) => None,
        }
    }

    /// The function call, if this is one.
    pub fn as_function(&self) -> Option<&FunctionCall> {
        match self {
            ValueNode::Function(call) => Some(call),
            ValueNode::Literal(_) => None,
        }
    }

    /// Check if this is a function call named `name`.
    pub fn is_function_named(&self, name: Name) -> bool {
        self.as_function().is_some_and(|call| call.name == name)
    }
}

/// Ordered list of value nodes making up a declaration's value.
///
/// Most declarations have one or two entries, so they are stored inline.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct PropertyValue {
    nodes: SmallVec<[ValueNode; 2]>,
}

impl PropertyValue {
    /// Create an empty value.
    pub fn new() -> Self {
        PropertyValue {
            nodes: SmallVec::new(),
        }
    }

    /// Create a value holding exactly one node.
    pub fn single(node: ValueNode) -> Self {
        let mut nodes = SmallVec::new();
        nodes.push(node);
        PropertyValue { nodes }
    }

    /// Create from an ordered list of nodes.
    pub fn from_nodes(nodes: Vec<ValueNode>) -> Self {
        PropertyValue {
            nodes: SmallVec::from_vec(nodes),
        }
    }

    /// Append a node.
    pub fn push(&mut self, node: ValueNode) {
        self.nodes.push(node);
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the value has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in order.
    #[inline]
    pub fn nodes(&self) -> &[ValueNode] {
        &self.nodes
    }

    /// The first node, if any.
    #[inline]
    pub fn first(&self) -> Option<&ValueNode> {
        self.nodes.first()
    }

    /// The node, if the value holds exactly one.
    pub fn single_node(&self) -> Option<&ValueNode> {
        match self.nodes.as_slice() {
            [node] => Some(node),
            _ => None,
        }
    }

    /// Iterate over nodes in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ValueNode> {
        self.nodes.iter()
    }
}

impl FromIterator<ValueNode> for PropertyValue {
    fn from_iter<I: IntoIterator<Item = ValueNode>>(iter: I) -> Self {
        PropertyValue {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PropertyValue {
    type Item = &'a ValueNode;
    type IntoIter = std::slice::Iter<'a, ValueNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
