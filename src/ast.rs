// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use serde::Serialize;

/// A 1-based source position pointing at a key or group-name token.
///
/// `0:0` is used when no position is known (e.g. a bare leaf handed to
/// [`crate::apply`] without an enclosing pair).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_known(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)
    }
}

/// Tagged tree produced by the grammar parser. Leaf variants carry the raw
/// lexeme exactly as captured; nothing is coerced yet.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Integer(String),
    Float(String),
    Boolean(String),
    DateTime(String),
    String(String),
    Array(Vec<Node>),
    Pair(Pair),
    Assignments(Assignments),
    Group(Group),
    Document(Vec<Entry>),
}

/// One `key = value` assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub key: String,
    pub value: Box<Node>,
    pub position: Position,
}

/// The assignments belonging to the root or to a single group.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Assignments {
    /// Nothing but comments/whitespace was captured.
    #[default]
    Empty,
    Pairs(Vec<Pair>),
}

/// A `[a.b.c]` header together with the assignments that follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub path: Vec<String>,
    pub body: Assignments,
    pub position: Position,
}

/// A top-level document entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Assignments(Assignments),
    Group(Group),
}

impl Node {
    pub fn integer(lexeme: impl Into<String>) -> Self {
        Node::Integer(lexeme.into())
    }

    pub fn float(lexeme: impl Into<String>) -> Self {
        Node::Float(lexeme.into())
    }

    pub fn boolean(lexeme: impl Into<String>) -> Self {
        Node::Boolean(lexeme.into())
    }

    pub fn datetime(lexeme: impl Into<String>) -> Self {
        Node::DateTime(lexeme.into())
    }

    pub fn string(lexeme: impl Into<String>) -> Self {
        Node::String(lexeme.into())
    }

    pub fn array(items: impl IntoIterator<Item = Node>) -> Self {
        Node::Array(items.into_iter().collect())
    }

    pub fn document(entries: impl IntoIterator<Item = Entry>) -> Self {
        Node::Document(entries.into_iter().collect())
    }

    /// Tag name as the parser reports it.
    pub fn tag(&self) -> &'static str {
        match self {
            Node::Integer(_) => "integer",
            Node::Float(_) => "float",
            Node::Boolean(_) => "boolean",
            Node::DateTime(_) => "datetime",
            Node::String(_) => "string",
            Node::Array(_) => "array",
            Node::Pair(_) => "pair",
            Node::Assignments(_) => "assignments",
            Node::Group(_) => "group",
            Node::Document(_) => "document",
        }
    }
}

impl Pair {
    pub fn new(key: impl Into<String>, value: Node, line: usize, column: usize) -> Self {
        Self {
            key: key.into(),
            value: Box::new(value),
            position: Position::new(line, column),
        }
    }
}

impl Assignments {
    pub fn pairs(pairs: impl IntoIterator<Item = Pair>) -> Self {
        Assignments::Pairs(pairs.into_iter().collect())
    }

    pub fn as_slice(&self) -> &[Pair] {
        match self {
            Assignments::Empty => &[],
            Assignments::Pairs(pairs) => pairs,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl Group {
    pub fn new<S: Into<String>>(
        path: impl IntoIterator<Item = S>,
        body: Assignments,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            body,
            position: Position::new(line, column),
        }
    }

    /// Dotted header name, e.g. `foo.bar`.
    pub fn name(&self) -> String {
        self.path.join(".")
    }
}

impl From<Pair> for Node {
    fn from(pair: Pair) -> Self {
        Node::Pair(pair)
    }
}

impl From<Assignments> for Node {
    fn from(assignments: Assignments) -> Self {
        Node::Assignments(assignments)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

impl From<Assignments> for Entry {
    fn from(assignments: Assignments) -> Self {
        Entry::Assignments(assignments)
    }
}

impl From<Group> for Entry {
    fn from(group: Group) -> Self {
        Entry::Group(group)
    }
}
