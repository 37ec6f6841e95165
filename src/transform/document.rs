use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use super::*;
use crate::ast::{Assignments, Group};

/// Dotted key path → where that key or group header was declared.
pub(crate) type SourceMap = IndexMap<String, Position>;

/// Accumulator for one document transform.
struct Builder<'x> {
    xform: &'x Transform,
    root: Table,
    declared: HashSet<Vec<String>>,
    /// Tables that a `key = ...` assignment produced; headers may not reopen them.
    assigned_tables: HashSet<Vec<String>>,
    positions: SourceMap,
}

impl<'x> Builder<'x> {
    fn new(xform: &'x Transform) -> Self {
        Self {
            xform,
            root: Table::new(),
            declared: HashSet::new(),
            assigned_tables: HashSet::new(),
            positions: SourceMap::new(),
        }
    }

    fn root_assignments(&mut self, assignments: &Assignments) -> Result<(), TransformError> {
        table::assign_all(self.xform, &mut self.root, assignments)?;
        self.record(&[], assignments);
        Ok(())
    }

    fn group(&mut self, group: &Group) -> Result<(), TransformError> {
        debug!(
            group = %group.name(),
            position = %group.position,
            empty = group.body.is_empty(),
            "merging group"
        );

        if let Some(depth) = (1..=group.path.len()).find(|&n| self.assigned_tables.contains(&group.path[..n])) {
            let segment = &group.path[depth - 1];
            debug!(group = %group.name(), segment = %segment, "group reopens an assigned table");
            return Err(TransformError::duplicate_key(segment, group.position).with_hint(format!(
                "'{}' was assigned a table value, so [{}] cannot reopen it",
                segment,
                group.name()
            )));
        }

        if !self.declared.insert(group.path.clone()) {
            debug!(group = %group.name(), "group declared twice");
            return Err(TransformError::duplicate_group(&group.name(), group.position));
        }

        group::merge(self.xform, &mut self.root, group)?;

        self.positions.entry(group.name()).or_insert(group.position);
        self.record(&group.path, &group.body);
        Ok(())
    }

    fn record(&mut self, prefix: &[String], assignments: &Assignments) {
        for pair in assignments.as_slice() {
            let mut path = prefix.to_vec();
            path.push(pair.key.clone());
            self.positions.insert(path.join("."), pair.position);

            if lookup(&self.root, &path).is_some_and(Value::is_table) {
                self.assigned_tables.insert(path);
            }
        }
    }
}

fn lookup<'t>(root: &'t Table, path: &[String]) -> Option<&'t Value> {
    let (first, rest) = path.split_first()?;
    root.get(first)?.lookup(rest)
}

pub(super) fn assemble(xform: &Transform, entries: &[Entry]) -> Result<(Table, SourceMap), TransformError> {
    debug!(entries = entries.len(), "transforming document");
    let mut builder = Builder::new(xform);

    for entry in entries {
        match entry {
            Entry::Assignments(assignments) => builder.root_assignments(assignments)?,
            Entry::Group(group) => builder.group(group)?,
        }
    }

    debug!(keys = builder.root.len(), "document transformed");
    Ok((builder.root, builder.positions))
}
