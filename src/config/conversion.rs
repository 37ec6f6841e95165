// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;

use time::OffsetDateTime;

use super::*;

fn expected(what: &str, value: &Value, hint: &str, code: u32) -> AccessError {
    AccessError::type_error(
        format!("Expected {}, got {}", what, value.type_name()),
        Some(hint),
        code,
    )
}

fn out_of_range(n: i64, target: &str, hint: &str, code: u32) -> AccessError {
    AccessError::type_error(format!("Number {} out of range for {}", n, target), Some(hint), code)
}

impl TryFrom<Value> for String {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(expected("string", &other, "Use a quoted string value", 401)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n),
            other => Err(expected("integer", &other, "Use an integer value", 402)),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        i32::try_from(n).map_err(|_| out_of_range(n, "i32", "Use a 32-bit integer", 407))
    }
}

impl TryFrom<Value> for u16 {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        u16::try_from(n).map_err(|_| out_of_range(n, "u16", "Use a number between 0 and 65535", 403))
    }
}

impl TryFrom<Value> for u32 {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        u32::try_from(n).map_err(|_| out_of_range(n, "u32", "Use a number between 0 and 4294967295", 408))
    }
}

impl TryFrom<Value> for u64 {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        u64::try_from(n).map_err(|_| out_of_range(n, "u64", "Use a non-negative integer", 406))
    }
}

impl TryFrom<Value> for usize {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        usize::try_from(n).map_err(|_| out_of_range(n, "usize", "Use a non-negative integer", 409))
    }
}

// Largest magnitude an f64 holds without rounding.
const EXACT_F64_INT: u64 = 1 << 53;

/// Integers widen to floats only while the conversion is exact (|n| <= 2^53);
/// floats never narrow to integers.
impl TryFrom<Value> for f64 {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(n),
            Value::Integer(n) if n.unsigned_abs() <= EXACT_F64_INT => Ok(n as f64),
            Value::Integer(n) => Err(AccessError::type_error(
                format!("Integer {} cannot be represented exactly as a float", n),
                Some("Read it as an integer, or write it as a float literal"),
                413,
            )),
            other => Err(expected("number", &other, "Use a float or integer value", 402)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            Value::String(ref s) if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") => {
                Err(AccessError::type_error(
                    format!("Expected boolean, got the string \"{}\"", s),
                    Some("Drop the quotes: booleans are written bare as true or false"),
                    404,
                ))
            }
            other => Err(expected("boolean", &other, "Use true or false", 404)),
        }
    }
}

impl TryFrom<Value> for OffsetDateTime {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::DateTime(dt) => Ok(dt),
            other => Err(expected("datetime", &other, "Use an RFC 3339 timestamp", 412)),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = AccessError>,
{
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items.into_iter().map(T::try_from).collect(),
            other => Err(expected("array", &other, "Use an array [...]", 405)),
        }
    }
}

impl TryFrom<Value> for Table {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Table(table) => Ok(table),
            other => Err(expected("table", &other, "Declare a [group] or an inline table", 410)),
        }
    }
}

impl TryFrom<Value> for HashMap<String, Value> {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(Table::try_from(value)?.into_iter().collect())
    }
}

impl TryFrom<Value> for HashMap<String, String> {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Table::try_from(value)?
            .into_iter()
            .map(|(key, val)| Ok((key, String::try_from(val)?)))
            .collect()
    }
}
