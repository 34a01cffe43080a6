//! Abstract Syntax Tree definitions for nepl
//!
//! A statement is one expression tree. Trees are strict: every child is exclusively owned by its
//! parent (`Box`/`Vec`), nothing is shared and nothing points back up.

use std::fmt;

use nepl_core::{Float, Integer};

/// Identifier
pub type Ident = String;

/// A program is the sequence of expression statements, in source order.
///
/// Operator directives do not produce statements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Node>,
}

/// Constant value of a literal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Integer(Integer),
    Float(Float),
    String(String),
}

/// Expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `42`, `1.5`, `"text"`
    Literal(Literal),
    /// Free variable reference
    Name(Ident),
    /// `parent.name`
    Member { name: Ident, parent: Box<Node> },
    /// `function(args...)`
    Call { function: Box<Node>, args: Vec<Node> },
    /// `container[index]`
    Index { container: Box<Node>, index: Box<Node> },
}

impl Node {
    pub fn literal(value: Literal) -> Self {
        Node::Literal(value)
    }

    pub fn name(name: impl Into<Ident>) -> Self {
        Node::Name(name.into())
    }

    pub fn member(name: impl Into<Ident>, parent: Node) -> Self {
        Node::Member {
            name: name.into(),
            parent: Box::new(parent),
        }
    }

    pub fn call(function: Node, args: Vec<Node>) -> Self {
        Node::Call {
            function: Box::new(function),
            args,
        }
    }

    pub fn index(container: Node, index: Node) -> Self {
        Node::Index {
            container: Box::new(container),
            index: Box::new(index),
        }
    }

    /// Direct children in evaluation order (callee before arguments, container before index).
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Literal(_) | Node::Name(_) => Vec::new(),
            Node::Member { parent, .. } => vec![parent.as_ref()],
            Node::Call { function, args } => std::iter::once(function.as_ref()).chain(args.iter()).collect(),
            Node::Index { container, index } => vec![container.as_ref(), index.as_ref()],
        }
    }

    /// Height of the tree rooted here; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().into_iter().map(Node::depth).max().unwrap_or(0)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(i) => write!(f, "{i}"),
            Literal::Float(x) => write!(f, "{x}"),
            Literal::String(s) => write!(f, "{s:?}"),
        }
    }
}

/// S-expression rendering: `a.b(c)` is `(call (member b (name a)) (name c))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(value) => write!(f, "{value}"),
            Node::Name(name) => write!(f, "(name {name})"),
            Node::Member { name, parent } => write!(f, "(member {name} {parent})"),
            Node::Call { function, args } => {
                write!(f, "(call {function}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                write!(f, ")")
            }
            Node::Index { container, index } => write!(f, "(index {container} {index})"),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }
        Ok(())
    }
}
