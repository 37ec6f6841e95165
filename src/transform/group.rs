use tracing::debug;

use super::*;
use crate::ast::Group;

/// Walk `group.path` from `root`, creating missing tables on the way, then
/// merge the group's assignments into the table at the end of the path.
pub(super) fn merge(xform: &Transform, root: &mut Table, group: &Group) -> Result<(), TransformError> {
    let target = descend(root, group)?;
    table::assign_all(xform, target, &group.body)
}

fn descend<'t>(root: &'t mut Table, group: &Group) -> Result<&'t mut Table, TransformError> {
    let mut current = root;

    for segment in &group.path {
        let slot = current
            .entry(segment.clone())
            .or_insert_with(|| Value::Table(Table::new()));

        current = match slot {
            Value::Table(inner) => inner,
            other => {
                debug!(
                    group = %group.name(),
                    segment = %segment,
                    found = other.type_name(),
                    "group path runs into a value"
                );
                return Err(TransformError::duplicate_key(segment, group.position).with_hint(
                    format!("'{}' already holds a {}, so [{}] cannot open it as a table",
                        segment, other.type_name(), group.name()),
                ));
            }
        };
    }

    Ok(current)
}
