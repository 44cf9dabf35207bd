//! Tracking of the location within an input value at which coercion is
//! currently taking place.
//!
//! A [`Path`] is an immutable, singly-linked chain of nodes, each of which
//! lives on the stack frame of the recursive call that descended into a list
//! item or object field. Extending a path is O(1) and never allocates; the
//! owned, root-to-leaf form ([`Vec<PathSegment>`]) is only materialized when
//! an error is reported.

/// A borrowed key held by a [`Path`] node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PathKey<'a> {
    Field(&'a str),
    Index(usize),
}
impl<'a> std::convert::From<&'a str> for PathKey<'a> {
    fn from(value: &'a str) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<usize> for PathKey<'_> {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

/// An owned segment of a reported path.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Field(String),
}
impl std::convert::From<PathKey<'_>> for PathSegment {
    fn from(value: PathKey<'_>) -> Self {
        match value {
            PathKey::Field(name) => Self::Field(name.to_string()),
            PathKey::Index(idx) => Self::Index(idx),
        }
    }
}
impl std::convert::From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        Self::Field(value.to_string())
    }
}
impl std::convert::From<usize> for PathSegment {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}
impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(name) => write!(f, ".{name}"),
            Self::Index(idx) => write!(f, "[{idx}]"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Path<'a> {
    key: PathKey<'a>,
    prev: Option<&'a Path<'a>>,
}
impl<'a> Path<'a> {
    /// Create a new node whose parent is `prev` (or a root node if `prev` is
    /// `None`).
    pub fn extend(
        prev: Option<&'a Path<'a>>,
        key: impl Into<PathKey<'a>>,
    ) -> Self {
        Self {
            key: key.into(),
            prev,
        }
    }

    pub fn key(&self) -> PathKey<'a> {
        self.key
    }

    pub fn prev(&self) -> Option<&'a Path<'a>> {
        self.prev
    }

    /// The number of nodes in this chain, including `self`.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut node = self.prev;
        while let Some(prev) = node {
            depth += 1;
            node = prev.prev;
        }
        depth
    }

    /// Collect the keys of this chain in root-to-leaf order.
    pub fn to_segments(&self) -> Vec<PathSegment> {
        let mut segments = Vec::with_capacity(self.depth());
        let mut node = Some(self);
        while let Some(current) = node {
            segments.push(current.key.into());
            node = current.prev;
        }
        segments.reverse();
        segments
    }
}

/// [`Path::to_segments`] for an optional path; the empty path is `None`.
pub fn path_to_segments(path: Option<&Path<'_>>) -> Vec<PathSegment> {
    path.map(Path::to_segments).unwrap_or_default()
}

/// Render a path as a locator suffix, e.g. `.filters[1].name`.
pub fn print_path(segments: &[PathSegment]) -> String {
    segments.iter()
        .map(|segment| segment.to_string())
        .collect()
}
