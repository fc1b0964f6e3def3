//! Route pattern parsing and path matching.
//!
//! # Responsibilities
//! - Parse a pattern such as `/items/{item_id:int}` into segments
//! - Match a request path against the segments
//! - Parse captured placeholder values into their declared type
//!
//! # Design Decisions
//! - Literal segments match byte-for-byte (case-sensitive)
//! - A placeholder matches exactly one non-empty segment
//! - Structural matching and type parsing are separate steps, so a
//!   path that has the right shape but a bad value is reported as a
//!   validation failure rather than a miss
//! - No regex: matching is a single pass over the segments

use std::fmt;
use std::str::FromStr;

use crate::routing::error::RouteError;

/// Smallest accepted `int` placeholder value.
pub const INT_MIN: i128 = i64::MIN as i128;
/// Largest accepted `int` placeholder value.
pub const INT_MAX: i128 = u64::MAX as i128;

/// Declared type of a placeholder segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Integer in `[i64::MIN, u64::MAX]`.
    Int,
    /// Any non-empty segment, kept as-is.
    Str,
}

impl ParamKind {
    /// Parse a raw segment into a value of this kind.
    pub fn parse(self, raw: &str) -> Option<ParamValue> {
        match self {
            ParamKind::Int => raw
                .parse::<i128>()
                .ok()
                .filter(|n| (INT_MIN..=INT_MAX).contains(n))
                .map(ParamValue::Int),
            ParamKind::Str => Some(ParamValue::Str(raw.to_string())),
        }
    }

    /// Keyword used in pattern syntax.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKind::Int => "int",
            ParamKind::Str => "str",
        }
    }
}

impl FromStr for ParamKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(ParamKind::Int),
            "str" | "string" => Ok(ParamKind::Str),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed placeholder value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Int(i128),
    Str(String),
}

/// One segment of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly.
    Literal(String),
    /// Captures one non-empty path segment.
    Placeholder { name: String, kind: ParamKind },
}

/// A compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

/// Outcome of matching a path against a pattern's shape.
///
/// Captures borrow from the request path; nothing is parsed yet.
#[derive(Debug, PartialEq, Eq)]
pub struct PathMatch<'p, 'a> {
    pub captures: Vec<(&'p str, ParamKind, &'a str)>,
}

impl RoutePattern {
    /// Compile a pattern.
    ///
    /// Placeholders are written `{name}` (string) or `{name:kind}` with
    /// `kind` one of `int`, `str`. Placeholder names must be unique.
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        if !pattern.starts_with('/') {
            return Err(RouteError::MissingLeadingSlash(pattern.to_string()));
        }

        let mut segments = Vec::new();
        for raw in split_path(pattern) {
            let segment = if let Some(inner) = raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                let (name, kind) = match inner.split_once(':') {
                    Some((name, kind)) => {
                        let kind = kind.parse::<ParamKind>().map_err(|_| RouteError::UnknownParamKind {
                            pattern: pattern.to_string(),
                            kind: kind.to_string(),
                        })?;
                        (name, kind)
                    }
                    None => (inner, ParamKind::Str),
                };
                if name.is_empty() {
                    return Err(RouteError::EmptyParamName(pattern.to_string()));
                }
                let duplicate = segments.iter().any(|s| {
                    matches!(s, Segment::Placeholder { name: existing, .. } if existing == name)
                });
                if duplicate {
                    return Err(RouteError::DuplicateParam {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    });
                }
                Segment::Placeholder { name: name.to_string(), kind }
            } else if raw.contains('{') || raw.contains('}') {
                return Err(RouteError::MalformedSegment {
                    pattern: pattern.to_string(),
                    segment: raw.to_string(),
                });
            } else {
                Segment::Literal(raw.to_string())
            };
            segments.push(segment);
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Match the shape of `path`. Returns `None` when a literal differs,
    /// the segment count differs, or a placeholder would capture an
    /// empty segment.
    pub fn match_path<'p, 'a>(&'p self, path: &'a str) -> Option<PathMatch<'p, 'a>> {
        let mut parts = split_path(path);
        let mut captures = Vec::new();

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Placeholder { name, kind } => {
                    if part.is_empty() {
                        return None;
                    }
                    captures.push((name.as_str(), *kind, part));
                }
            }
        }

        // Trailing segments mean a longer path than the pattern.
        if parts.next().is_some() {
            return None;
        }

        Some(PathMatch { captures })
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Split a path into segments after the leading slash.
///
/// `/` yields no segments; `/items/` yields `["items", ""]`.
fn split_path(path: &str) -> impl Iterator<Item = &str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let mut parts = trimmed.split('/');
    if trimmed.is_empty() {
        // Consume the single empty element produced by "".split('/').
        parts.next();
    }
    parts
}
