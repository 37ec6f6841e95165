use super::*;

impl TomlConfig {
    /// Get a value with validation - returns an error anchored at the key's
    /// declaration if `validator` rejects it.
    pub fn get_validated<T, F>(&self, path: &str, validator: F, valid_values: &str) -> Result<T, AccessError>
    where
        T: TryFrom<Value, Error = AccessError>,
        F: FnOnce(&T) -> bool,
    {
        let typed_value: T = self.get(path)?;

        if !validator(&typed_value) {
            return Err(self.invalid(
                path,
                format!("Invalid value for `{}`\nExpected: {}", path, valid_values),
                format!("Valid values are: {}", valid_values),
                450,
            ));
        }

        Ok(typed_value)
    }

    /// Get a string value and check it's one of the allowed values (case-insensitive).
    pub fn get_string_enum(&self, path: &str, allowed_values: &[&str]) -> Result<String, AccessError> {
        let value: String = self.get(path)?;

        if !allowed_values.iter().any(|v| v.eq_ignore_ascii_case(&value)) {
            return Err(self.invalid(
                path,
                format!("Invalid value '{}' for `{}`", value, path),
                format!("Expected one of: {}", allowed_values.join(", ")),
                451,
            ));
        }

        Ok(value)
    }

    fn invalid(&self, path: &str, message: String, hint: String, code: u32) -> AccessError {
        let position = self
            .get_value_flexible(path)
            .ok()
            .and_then(|(resolved, _)| self.position(&resolved))
            .unwrap_or_default();

        AccessError::ValidationError {
            message,
            line: position.line,
            column: position.column,
            hint: Some(hint),
            code: Some(code),
        }
    }
}
