// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Entry, Node, Position};
use crate::error::TransformError;
use crate::value::{Table, Value};

mod document;
mod group;
mod scalar;
mod table;
mod unescape;

pub(crate) use document::SourceMap;

/// What to do with a backslash sequence that is not a known escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapePolicy {
    /// Fail the transform with a coercion error.
    #[default]
    Strict,
    /// Keep the backslash and the following character as written.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformOptions {
    pub escapes: EscapePolicy,
}

impl TransformOptions {
    pub fn lenient() -> Self {
        Self { escapes: EscapePolicy::Lenient }
    }
}

/// Rewrites a parsed tree into typed values.
///
/// A `Transform` holds only its options; every call to [`Transform::apply`]
/// builds its own accumulator, so one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transform {
    options: TransformOptions,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TransformOptions) -> Self {
        Self { options }
    }

    /// Transform any node of the tree.
    ///
    /// Leaves coerce to scalars, arrays to sequences, and pairs, assignment
    /// lists, groups and documents to tables. The first failure aborts the
    /// whole call.
    ///
    /// # Examples
    /// ```
    /// use toml_transform::{Node, Transform, Value};
    ///
    /// let value = Transform::new().apply(&Node::integer("42")).unwrap();
    /// assert_eq!(value, Value::Integer(42));
    /// ```
    pub fn apply(&self, node: &Node) -> Result<Value, TransformError> {
        self.transform_node(node, Position::unknown())
    }

    /// Transform the entries of a document into its root table.
    pub fn apply_document(&self, entries: &[Entry]) -> Result<Table, TransformError> {
        document::assemble(self, entries).map(|(root, _)| root)
    }

    /// Like [`Transform::apply_document`], also returning where each key was declared.
    pub(crate) fn apply_document_mapped(
        &self,
        entries: &[Entry],
    ) -> Result<(Table, SourceMap), TransformError> {
        document::assemble(self, entries)
    }

    /// `at` is the position of the nearest enclosing pair; leaves have none of their own.
    pub(crate) fn transform_node(&self, node: &Node, at: Position) -> Result<Value, TransformError> {
        match node {
            Node::Integer(lexeme) => scalar::integer(lexeme, at),
            Node::Float(lexeme) => scalar::float(lexeme, at),
            Node::Boolean(lexeme) => scalar::boolean(lexeme, at),
            Node::DateTime(lexeme) => scalar::datetime(lexeme, at),
            Node::String(lexeme) => scalar::string(lexeme, at, self.options.escapes),
            Node::Array(items) => table::array(self, items, at),
            Node::Pair(pair) => {
                let mut target = Table::new();
                table::assign(self, &mut target, pair)?;
                Ok(Value::Table(target))
            }
            Node::Assignments(assignments) => {
                let mut target = Table::new();
                table::assign_all(self, &mut target, assignments)?;
                Ok(Value::Table(target))
            }
            Node::Group(group) => {
                let mut root = Table::new();
                group::merge(self, &mut root, group)?;
                Ok(Value::Table(root))
            }
            Node::Document(entries) => self.apply_document(entries).map(Value::Table),
        }
    }
}

/// Transform `node` with default options.
pub fn apply(node: &Node) -> Result<Value, TransformError> {
    Transform::new().apply(node)
}
