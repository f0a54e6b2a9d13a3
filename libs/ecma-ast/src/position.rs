//! # Source Position
//!
//! Represents a range in the source code for diagnostics and source mapping.
//! Every AST node carries one, and `&source[position]` is always exactly the
//! node's text.
//!
//! ## Usage
//!
//! ```rust
//! use ecma_ast::Position;
//!
//! let position = Position::new(0, 10);
//! assert_eq!(position.start(), 0);
//! assert_eq!(position.end(), 10);
//! assert_eq!(position.len(), 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::context::RuleContext;
use crate::nodes::Node;

/// A range in the source code, represented as byte offsets.
///
/// # Fields
///
/// - `start`: Starting byte offset (inclusive)
/// - `end`: Ending byte offset (exclusive)
///
/// # Example
///
/// ```rust
/// use ecma_ast::Position;
///
/// // For source "const x = 42;" the position of "x" would be:
/// let position = Position::new(6, 7);
/// assert_eq!(position.slice("const x = 42;"), Some("x"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Starting byte offset (inclusive)
    #[serde(rename = "startOffset")]
    start: usize,
    /// Ending byte offset (exclusive)
    #[serde(rename = "endOffset")]
    end: usize,
}

impl Position {
    /// Creates a new position from start and end byte offsets.
    ///
    /// # Arguments
    ///
    /// * `start` - Starting byte offset (inclusive)
    /// * `end` - Ending byte offset (exclusive)
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the starting byte offset.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the ending byte offset.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the length of the position in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the position covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Creates a position that encompasses both this position and another.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ecma_ast::Position;
    ///
    /// let merged = Position::new(0, 5).merge(&Position::new(10, 15));
    /// assert_eq!(merged, Position::new(0, 15));
    /// ```
    pub fn merge(&self, other: &Position) -> Position {
        Position {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Checks if this position contains a byte offset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ecma_ast::Position;
    ///
    /// let position = Position::new(5, 10);
    /// assert!(position.contains(7));
    /// assert!(!position.contains(10)); // end is exclusive
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Checks if this position contains a [`Point`].
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.contains(point.offset())
    }

    /// Returns the covered slice of `source`, or `None` when the range is
    /// inverted, out of bounds, or splits a UTF-8 character.
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }

    /// Span of a child sequence: first child's start to last child's end.
    ///
    /// Returns `None` for an empty sequence.
    pub fn covering(children: &[Node]) -> Option<Position> {
        let first = children.first()?;
        let last = children.last()?;
        Some(Position::new(first.position().start, last.position().end))
    }
}

/// A single byte offset into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    offset: usize,
}

impl Point {
    /// Creates a point at `offset`.
    #[inline]
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }

    /// Returns the byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Derives a rule context's position from its boundary tokens.
///
/// The start is the first token's start offset; the end is the last token's
/// start offset plus its text length. A context with no distinct stop token
/// (a terminal, or an empty production) uses its start token for both ends.
///
/// # Example
///
/// ```rust,ignore
/// let position = get_position(&tree.root_node());
/// ```
pub fn get_position<C: RuleContext>(ctx: &C) -> Position {
    let start_token = ctx.start_token();
    let stop_token = ctx.stop_token().unwrap_or(start_token);
    let start = start_token.byte_range().start;
    let stop = stop_token.byte_range();
    Position::new(start, stop.start + stop.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_new() {
        let position = Position::new(10, 20);
        assert_eq!(position.start(), 10);
        assert_eq!(position.end(), 20);
    }

    #[test]
    fn test_position_len() {
        assert_eq!(Position::new(5, 15).len(), 10);
    }

    #[test]
    fn test_position_is_empty() {
        assert!(Position::new(5, 5).is_empty());
        assert!(Position::new(10, 5).is_empty()); // Invalid range is empty
        assert!(!Position::new(0, 1).is_empty());
    }

    #[test]
    fn test_position_merge() {
        let merged = Position::new(0, 10).merge(&Position::new(5, 20));
        assert_eq!(merged.start(), 0);
        assert_eq!(merged.end(), 20);
    }

    #[test]
    fn test_position_contains() {
        let position = Position::new(5, 10);
        assert!(!position.contains(4));
        assert!(position.contains(5));
        assert!(position.contains(9));
        assert!(!position.contains(10)); // end is exclusive
        assert!(position.contains_point(Point::new(7)));
    }

    #[test]
    fn test_position_slice() {
        let source = "let é = 1;";
        assert_eq!(Position::new(4, 6).slice(source), Some("é"));
        // splits the two-byte 'é'
        assert_eq!(Position::new(4, 5).slice(source), None);
        assert_eq!(Position::new(0, 99).slice(source), None);
        assert_eq!(Position::new(6, 4).slice(source), None);
    }

    #[test]
    fn test_position_covering_empty() {
        assert_eq!(Position::covering(&[]), None);
    }

    #[test]
    fn test_position_serializes_offsets() {
        let json = serde_json::to_string(&Position::new(3, 7)).unwrap();
        assert_eq!(json, r#"{"startOffset":3,"endOffset":7}"#);
    }

    #[test]
    fn test_position_default() {
        let position = Position::default();
        assert_eq!(position.start(), 0);
        assert!(position.is_empty());
    }
}
