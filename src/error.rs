use std::fmt;

use crate::ast::Position;

/// Which rule a transform failure broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DuplicateKey,
    CoercionFailure,
}

/// The single error a failed transform surfaces.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// A key or group path segment was assigned twice at one nesting level.
    /// The position is the one of the second (conflicting) declaration.
    DuplicateKey {
        key: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A leaf lexeme could not be converted to its tagged type.
    CoercionFailure {
        message: String,
        lexeme: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl TransformError {
    pub(crate) fn duplicate_key(key: &str, at: Position) -> Self {
        TransformError::DuplicateKey {
            key: key.to_string(),
            line: at.line,
            column: at.column,
            hint: Some("Each key may only be assigned once per table".into()),
            code: Some(501),
        }
    }

    pub(crate) fn duplicate_group(name: &str, at: Position) -> Self {
        TransformError::DuplicateKey {
            key: name.to_string(),
            line: at.line,
            column: at.column,
            hint: Some(format!("Group [{}] was already declared", name)),
            code: Some(502),
        }
    }

    pub(crate) fn coercion(
        message: impl Into<String>,
        lexeme: &str,
        at: Position,
        code: u32,
    ) -> Self {
        TransformError::CoercionFailure {
            message: message.into(),
            lexeme: lexeme.to_string(),
            line: at.line,
            column: at.column,
            hint: None,
            code: Some(code),
        }
    }

    pub(crate) fn with_hint(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            TransformError::DuplicateKey { hint, .. }
            | TransformError::CoercionFailure { hint, .. } => *hint = Some(text.into()),
        }
        self
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            TransformError::CoercionFailure { .. } => ErrorKind::CoercionFailure,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            TransformError::DuplicateKey { line, column, .. }
            | TransformError::CoercionFailure { line, column, .. } => Position::new(*line, *column),
        }
    }

    /// The offending key, group name, or lexeme.
    pub fn identifier(&self) -> &str {
        match self {
            TransformError::DuplicateKey { key, .. } => key,
            TransformError::CoercionFailure { lexeme, .. } => lexeme,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::DuplicateKey { key, line, column, hint, code } =>
                write!(f, "[TOML] Cannot reassign key '{}' at line {} column {}{}{}",
                    key, line, column,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            TransformError::CoercionFailure { message, lexeme, line, column, hint, code } =>
                write!(f, "[TOML] Coercion failure for '{}' at line {} column {}: {}{}{}",
                    lexeme, line, column, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for TransformError {}

/// Errors raised while reading values back out of a [`crate::TomlConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum AccessError {
    MissingKey {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    ValidationError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl AccessError {
    pub(crate) fn type_error(message: String, hint: Option<&str>, code: u32) -> Self {
        AccessError::TypeError {
            message,
            line: 0,
            column: 0,
            hint: hint.map(Into::into),
            code: Some(code),
        }
    }

    /// Anchors a type/validation error to where the key was declared.
    pub(crate) fn at(self, position: Position) -> Self {
        if !position.is_known() {
            return self;
        }

        match self {
            AccessError::TypeError { message, hint, code, .. } => AccessError::TypeError {
                message,
                line: position.line,
                column: position.column,
                hint,
                code,
            },
            AccessError::ValidationError { message, hint, code, .. } => {
                AccessError::ValidationError {
                    message,
                    line: position.line,
                    column: position.column,
                    hint,
                    code,
                }
            }
            other => other,
        }
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::MissingKey { path, hint, code } =>
                write!(f, "[TOML] Path '{}' not found{}{}",
                    path,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            AccessError::TypeError { message, line, column, hint, code } =>
                write!(f, "[TOML] Type Error at line {} column {}: {}{}{}",
                    line, column, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            AccessError::ValidationError { message, line, column, hint, code } =>
                write!(f, "[TOML] Validation Error at line {} column {}: {}{}{}",
                    line, column, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for AccessError {}
