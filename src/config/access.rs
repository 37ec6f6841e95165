use super::*;

impl TomlConfig {
    /// Get a typed value using dot notation.
    ///
    /// Handles both `snake_case` and `kebab-case` key names.
    ///
    /// # Errors
    /// Returns an error if the path doesn't exist or the value can't be converted to `T`.
    /// Conversion errors carry the line and column where the key was declared.
    pub fn get<T>(&self, path: &str) -> Result<T, AccessError>
    where
        T: TryFrom<Value, Error = AccessError>,
    {
        let (resolved, value) = self.get_value_flexible(path)?;
        T::try_from(value).map_err(|e| match self.position(&resolved) {
            Some(position) => e.at(position),
            None => e,
        })
    }

    /// Get an optional typed value - returns `None` if the key doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, AccessError>
    where
        T: TryFrom<Value, Error = AccessError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(AccessError::MissingKey { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = AccessError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value` by exact dotted path. The empty path returns the root table.
    pub fn get_value(&self, path: &str) -> Result<Value, AccessError> {
        if path.trim().is_empty() {
            return Ok(Value::Table(self.root.clone()));
        }

        let segments: Vec<&str> = path.split('.').collect();
        lookup(&self.root, &segments)
            .cloned()
            .ok_or_else(|| missing(path))
    }

    /// Get all keys of the table at `path`, in declaration order.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, AccessError> {
        let (resolved, value) = self.get_value_flexible(path)?;
        match value {
            Value::Table(table) => Ok(table.keys().cloned().collect()),
            other => {
                let err = AccessError::type_error(
                    format!("Path '{}' is a {}, not a table", path, other.type_name()),
                    Some("Only tables have keys"),
                    306,
                );
                Err(match self.position(&resolved) {
                    Some(position) => err.at(position),
                    None => err,
                })
            }
        }
    }

    /// Check if a configuration path exists.
    pub fn has(&self, path: &str) -> bool {
        self.get_value_flexible(path).is_ok()
    }

    /// Tries the exact path first, then every segment-wise snake/kebab spelling.
    /// Returns the spelling that resolved along with its value.
    pub(super) fn get_value_flexible(&self, path: &str) -> Result<(String, Value), AccessError> {
        if let Ok(v) = self.get_value(path) {
            return Ok((path.to_string(), v));
        }

        if path.trim().is_empty() {
            return Err(missing(path));
        }

        let segs: Vec<&str> = path.split('.').collect();

        fn variants(seg: &str) -> Vec<String> {
            let mut out = vec![seg.to_string(), seg.replace('-', "_"), seg.replace('_', "-")];
            out.sort();
            out.dedup();
            out
        }

        fn dfs(cfg: &TomlConfig, segs: &[&str], i: usize, cur: &mut Vec<String>) -> Option<(String, Value)> {
            if i == segs.len() {
                let candidate = cur.join(".");
                return cfg.get_value(&candidate).ok().map(|v| (candidate, v));
            }

            for v in variants(segs[i]) {
                cur.push(v);
                if let Some(found) = dfs(cfg, segs, i + 1, cur) {
                    return Some(found);
                }
                cur.pop();
            }
            None
        }

        dfs(self, &segs, 0, &mut Vec::new()).ok_or_else(|| missing(path))
    }
}

fn lookup<'t>(root: &'t Table, segments: &[&str]) -> Option<&'t Value> {
    let (first, rest) = segments.split_first()?;
    root.get(*first)?.lookup(rest)
}

fn missing(path: &str) -> AccessError {
    AccessError::MissingKey {
        path: path.to_string(),
        hint: Some("Check that the key or group is declared in the document".into()),
        code: Some(304),
    }
}
