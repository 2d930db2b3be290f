//! Locations inside a JSON document.
//!
//! [`JsonPointer`] is the owned, reportable form (RFC 6901). [`LazyPointer`] is
//! a borrowed stack of segments threaded through recursive evaluation; it is
//! only materialised into a `JsonPointer` when a failure is recorded.

use serde::{Serialize, Serializer};
use std::fmt;

/// One step of a path: an object key or an array index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => {
                for ch in key.chars() {
                    match ch {
                        '~' => f.write_str("~0")?,
                        '/' => f.write_str("~1")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                Ok(())
            }
            Segment::Index(idx) => write!(f, "{}", idx),
        }
    }
}

/// Path from the document root, rendered as an RFC 6901 JSON pointer.
///
/// The root is the empty pointer `""`; [`JsonPointer::describe`] renders it as
/// `$` for human-facing messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct JsonPointer(Vec<Segment>);

impl JsonPointer {
    pub fn root() -> Self {
        JsonPointer(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Returns a new pointer extended by an object key.
    pub fn join_key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Key(key.into()));
        JsonPointer(segments)
    }

    /// Returns a new pointer extended by an array index.
    pub fn join_index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Index(index));
        JsonPointer(segments)
    }

    /// Pointer text, or `$` for the root.
    pub fn describe(&self) -> String {
        if self.is_root() {
            "$".to_string()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl Serialize for JsonPointer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Vec<Segment>> for JsonPointer {
    fn from(segments: Vec<Segment>) -> Self {
        JsonPointer(segments)
    }
}

/// Borrowed segment of a path under construction.
#[derive(Clone, Copy, Debug)]
pub enum LazySegment<'a> {
    Key(&'a str),
    Index(usize),
}

/// A linked stack of path segments living on the call stack.
///
/// Pushing never allocates; conversion to [`JsonPointer`] walks the parents.
#[derive(Debug)]
pub struct LazyPointer<'a, 'b> {
    segment: Option<LazySegment<'a>>,
    parent: Option<&'b LazyPointer<'b, 'a>>,
}

impl Default for LazyPointer<'_, '_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> LazyPointer<'a, '_> {
    /// The document root.
    pub const fn new() -> Self {
        LazyPointer {
            segment: None,
            parent: None,
        }
    }

    #[inline]
    pub fn push_key(&'a self, key: &'a str) -> LazyPointer<'a, 'a> {
        LazyPointer {
            segment: Some(LazySegment::Key(key)),
            parent: Some(self),
        }
    }

    #[inline]
    pub fn push_index(&'a self, index: usize) -> LazyPointer<'a, 'a> {
        LazyPointer {
            segment: Some(LazySegment::Index(index)),
            parent: Some(self),
        }
    }
}

impl From<&LazyPointer<'_, '_>> for JsonPointer {
    fn from(value: &LazyPointer<'_, '_>) -> Self {
        let mut segments = Vec::new();
        let mut current = Some(value);
        while let Some(node) = current {
            match node.segment {
                Some(LazySegment::Key(key)) => segments.push(Segment::Key(key.to_string())),
                Some(LazySegment::Index(idx)) => segments.push(Segment::Index(idx)),
                None => {}
            }
            current = node.parent;
        }
        segments.reverse();
        JsonPointer(segments)
    }
}
