// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Entry, Position};
use crate::error::{AccessError, TransformError};
use crate::transform::{SourceMap, Transform};
use crate::value::{Table, Value};

mod access;
mod conversion;
mod validation;

/// A transformed document with typed, dotted-path access.
///
/// Remembers where every root key, group key and group header was declared,
/// so conversion errors point back at the source.
#[derive(Debug, Clone, PartialEq)]
pub struct TomlConfig {
    root: Table,
    positions: SourceMap,
}

impl TomlConfig {
    /// Transform the entries of a parsed document with default options.
    ///
    /// # Example
    /// ```
    /// use toml_transform::{Assignments, Entry, Group, Node, Pair, TomlConfig};
    ///
    /// let entries = vec![Entry::Group(Group::new(
    ///     ["server"],
    ///     Assignments::pairs([Pair::new("port", Node::integer("8080"), 2, 1)]),
    ///     1,
    ///     2,
    /// ))];
    /// let config = TomlConfig::from_entries(&entries)?;
    /// let port: u16 = config.get("server.port")?;
    /// assert_eq!(port, 8080);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_entries(entries: &[Entry]) -> Result<Self, TransformError> {
        Self::from_entries_with(&Transform::new(), entries)
    }

    pub fn from_entries_with(xform: &Transform, entries: &[Entry]) -> Result<Self, TransformError> {
        let (root, positions) = xform.apply_document_mapped(entries)?;
        Ok(Self { root, positions })
    }

    pub fn table(&self) -> &Table {
        &self.root
    }

    pub fn into_table(self) -> Table {
        self.root
    }

    /// Where the key or group at `path` was declared, if known.
    pub fn position(&self, path: &str) -> Option<Position> {
        self.positions.get(path).copied()
    }
}

impl From<Table> for TomlConfig {
    fn from(root: Table) -> Self {
        Self { root, positions: SourceMap::new() }
    }
}

#[cfg(test)]
mod tests;
