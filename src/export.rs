// Author: Dustin Pilgrim
// License: MIT

use serde::ser::{Error as _, SerializeSeq};
use serde::{Serialize, Serializer};
use time::format_description::well_known::Rfc3339;

use crate::value::{Table, Value};

/// Values serialize as their natural JSON counterparts:
/// - integers, floats, booleans, strings → direct mapping
/// - datetimes → RFC 3339 strings
/// - arrays, tables → nested JSON structures (table order is kept)
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::DateTime(dt) => {
                let text = dt.format(&Rfc3339).map_err(S::Error::custom)?;
                serializer.serialize_str(&text)
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Table(table) => table.serialize(serializer),
        }
    }
}

/// Convert a value into a `serde_json::Value`.
pub fn to_json_value(value: &Value) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(value)
}

/// Render a value as pretty-printed JSON.
pub fn to_json_string(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Export a transformed document to pretty-printed JSON.
///
/// # Examples
/// ```
/// use toml_transform::{export, Table, Value};
///
/// let mut root = Table::new();
/// root.insert("title".into(), Value::from("global title"));
/// let json = export::export_table_to_json(&root).unwrap();
/// assert!(json.contains("\"title\": \"global title\""));
/// ```
pub fn export_table_to_json(table: &Table) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(table)?;
    out.push('\n');
    Ok(out)
}
