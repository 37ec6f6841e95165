use once_cell::sync::Lazy;
use regex::Regex;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::*;
use super::unescape::{unescape, EscapeError};

// Rust's float parser also takes `inf`, `NaN` and `.5`; the grammar never does.
static FLOAT_LEXEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?$").expect("float lexeme pattern")
});

pub(super) fn integer(lexeme: &str, at: Position) -> Result<Value, TransformError> {
    lexeme.parse::<i64>().map(Value::Integer).map_err(|e| {
        TransformError::coercion(format!("Invalid integer: {}", e), lexeme, at, 511)
            .with_hint("Integers must be base-10 and fit in 64 bits")
    })
}

pub(super) fn float(lexeme: &str, at: Position) -> Result<Value, TransformError> {
    if !FLOAT_LEXEME.is_match(lexeme) {
        return Err(TransformError::coercion("Invalid float", lexeme, at, 512)
            .with_hint("Floats are written as digits, a '.', and more digits"));
    }

    match lexeme.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Value::Float(n)),
        Ok(_) => Err(TransformError::coercion("Float out of range", lexeme, at, 512)),
        Err(e) => Err(TransformError::coercion(format!("Invalid float: {}", e), lexeme, at, 512)),
    }
}

pub(super) fn boolean(lexeme: &str, at: Position) -> Result<Value, TransformError> {
    match lexeme {
        "true" => Ok(Value::Boolean(true)),
        "false" => Ok(Value::Boolean(false)),
        _ => Err(TransformError::coercion("Invalid boolean", lexeme, at, 513)
            .with_hint("Use 'true' or 'false'")),
    }
}

pub(super) fn datetime(lexeme: &str, at: Position) -> Result<Value, TransformError> {
    OffsetDateTime::parse(lexeme, &Rfc3339)
        .map(Value::DateTime)
        .map_err(|e| {
            TransformError::coercion(format!("Invalid datetime: {}", e), lexeme, at, 514)
                .with_hint("Use an RFC 3339 timestamp such as 1979-05-27T07:32:00Z")
        })
}

pub(super) fn string(lexeme: &str, at: Position, policy: EscapePolicy) -> Result<Value, TransformError> {
    match unescape(lexeme, policy) {
        Ok(text) => Ok(Value::String(text.into_owned())),
        Err(e) => Err(escape_failure(lexeme, at, e)),
    }
}

fn escape_failure(lexeme: &str, at: Position, e: EscapeError) -> TransformError {
    let hint = match e {
        EscapeError::Unknown { .. } | EscapeError::Trailing { .. } => {
            "Known escapes are \\b \\t \\n \\f \\r \\\" \\/ \\\\ and \\uXXXX"
        }
        EscapeError::BadUnicode { .. } => "\\u must be followed by exactly 4 hex digits naming a scalar value",
    };
    TransformError::coercion(e.to_string(), lexeme, at, 515).with_hint(hint)
}
