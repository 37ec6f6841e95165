use tracing::{debug, trace};

use super::*;
use crate::ast::{Assignments, Pair};

pub(super) fn array(xform: &Transform, items: &[Node], at: Position) -> Result<Value, TransformError> {
    let mut values = Vec::with_capacity(items.len());
    for item in items {
        values.push(xform.transform_node(item, at)?);
    }
    Ok(Value::Array(values))
}

/// Coerce `pair.value` and insert it under `pair.key`, refusing to overwrite.
pub(super) fn assign(xform: &Transform, target: &mut Table, pair: &Pair) -> Result<(), TransformError> {
    let value = xform.transform_node(&pair.value, pair.position)?;

    if target.contains_key(&pair.key) {
        let err = TransformError::duplicate_key(&pair.key, pair.position);
        debug!(key = %pair.key, position = %pair.position, "duplicate key");
        return Err(err);
    }

    trace!(key = %pair.key, tag = pair.value.tag(), kind = value.type_name(), "assign");
    target.insert(pair.key.clone(), value);
    Ok(())
}

pub(super) fn assign_all(
    xform: &Transform,
    target: &mut Table,
    assignments: &Assignments,
) -> Result<(), TransformError> {
    for pair in assignments.as_slice() {
        assign(xform, target, pair)?;
    }
    Ok(())
}
