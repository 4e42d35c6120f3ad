//! Path pattern compilation and segment matching.
//!
//! Patterns are written as `/underlyings/{id}/edit`: literal segments match
//! exactly, `{name}` segments match any non-empty segment and bind it.

use std::collections::BTreeMap;

use super::error::RouteDefinitionError;

/// Parameters bound by a matched pattern, keyed by parameter name.
pub type Params = BTreeMap<String, String>;

/// One segment of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Compiles a pattern such as `/underlyings/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteDefinitionError::InvalidPattern`] if the pattern does not
    /// start with `/`, has a trailing slash, contains an empty segment, an empty
    /// parameter name or unbalanced braces.
    /// Returns [`RouteDefinitionError::DuplicateParameter`] if a parameter name
    /// is bound twice.
    pub fn parse(source: &str) -> Result<Self, RouteDefinitionError> {
        let invalid = |reason: &str| RouteDefinitionError::InvalidPattern {
            pattern: source.to_string(),
            reason: reason.to_string(),
        };

        let rest = source
            .strip_prefix('/')
            .ok_or_else(|| invalid("must start with '/'"))?;

        let mut segments = Vec::new();

        if !rest.is_empty() {
            if rest.ends_with('/') {
                return Err(invalid("trailing slash"));
            }

            for raw in rest.split('/') {
                if raw.is_empty() {
                    return Err(invalid("empty segment"));
                }

                let segment = match raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some("") => return Err(invalid("empty parameter name")),
                    Some(name) if name.contains(['{', '}']) => {
                        return Err(invalid("unbalanced braces"));
                    }
                    Some(name) => Segment::Param(name.to_string()),
                    None if raw.contains(['{', '}']) => return Err(invalid("unbalanced braces")),
                    None => Segment::Literal(raw.to_string()),
                };

                if let Segment::Param(name) = &segment
                    && segments.contains(&segment)
                {
                    return Err(RouteDefinitionError::DuplicateParameter {
                        pattern: source.to_string(),
                        param: name.clone(),
                    });
                }

                segments.push(segment);
            }
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the parameters bound by this pattern, in path order.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Sort key placing literal segments before parameters, left to right.
    ///
    /// Two patterns of equal length that can match the same path differ at
    /// their first literal/parameter disagreement, and the literal one sorts
    /// first there.
    pub fn specificity(&self) -> Vec<u8> {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Literal(_) => 0,
                Segment::Param(_) => 1,
            })
            .collect()
    }

    /// Returns true if both patterns match exactly the same set of paths.
    pub fn same_shape(&self, other: &Pattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Literal(a), Segment::Literal(b)) => a == b,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }

    /// Matches already split and decoded path segments against this pattern.
    ///
    /// Returns the bound parameters on success.
    pub fn matches(&self, path: &[String]) -> Option<Params> {
        if path.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, value) in self.segments.iter().zip(path) {
            match segment {
                Segment::Literal(literal) if literal == value => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), value.clone());
                }
            }
        }

        Some(params)
    }

    /// Builds a concrete path by substituting percent-encoded parameter values.
    ///
    /// Returns the name of the first parameter that is missing or empty.
    pub fn interpolate(&self, params: &Params) -> Result<String, String> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(literal) => path.push_str(literal),
                Segment::Param(name) => match params.get(name) {
                    Some(value) if !value.is_empty() => {
                        path.push_str(&urlencoding::encode(value));
                    }
                    _ => return Err(name.clone()),
                },
            }
        }

        Ok(path)
    }
}

/// Splits a request path into percent-decoded segments.
///
/// The query string is dropped and a single trailing slash is ignored, so
/// `/` yields no segments. Returns `None` if the path is not absolute,
/// contains an empty segment (`//`, `/underlyings//`), or a segment does not
/// decode to UTF-8.
pub fn split_path(path: &str) -> Option<Vec<String>> {
    let path = path.split_once('?').map_or(path, |(path, _)| path);
    let rest = path.strip_prefix('/')?;

    if rest.is_empty() {
        return Some(Vec::new());
    }

    let rest = rest.strip_suffix('/').unwrap_or(rest);

    rest.split('/')
        .map(|raw| {
            if raw.is_empty() {
                return None;
            }
            urlencoding::decode(raw).ok().map(|s| s.into_owned())
        })
        .collect()
}
