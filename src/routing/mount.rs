//! Engine mount point.

use std::fmt;

use super::error::RouteDefinitionError;

/// Path prefix under which the host application mounts the engine.
///
/// Stored without a trailing slash; mounting at `/` is represented by an
/// empty prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
    prefix: String,
}

impl Mount {
    /// Normalizes and validates a mount path such as `/ib` or `/ib/`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteDefinitionError::InvalidMount`] if the path is not
    /// absolute, contains whitespace, braces, a query, or an empty segment.
    pub fn new(path: &str) -> Result<Self, RouteDefinitionError> {
        let invalid = |reason: &str| RouteDefinitionError::InvalidMount {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if !path.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }
        if path.chars().any(|c| c.is_whitespace() || matches!(c, '{' | '}' | '?' | '#')) {
            return Err(invalid("contains a reserved character"));
        }

        let prefix = path.trim_end_matches('/');
        if prefix.contains("//") {
            return Err(invalid("empty segment"));
        }

        Ok(Self {
            prefix: prefix.to_string(),
        })
    }

    /// Mount at the host application's root.
    pub fn root() -> Self {
        Self {
            prefix: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        if self.prefix.is_empty() {
            "/"
        } else {
            &self.prefix
        }
    }

    /// Returns the engine-relative part of a host path, or `None` if the
    /// path lies outside the mount point.
    ///
    /// `/ib` and `/ib/` both map to `/`; `/ibx` is not under `/ib`.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.prefix.is_empty() {
            return Some(path);
        }

        let rest = path.strip_prefix(self.prefix.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }

    /// Prefixes an engine-relative path with the mount point.
    pub fn join(&self, path: &str) -> String {
        if self.prefix.is_empty() {
            path.to_string()
        } else if path == "/" {
            self.prefix.clone()
        } else {
            format!("{}{}", self.prefix, path)
        }
    }
}

impl fmt::Display for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
