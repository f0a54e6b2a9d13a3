//! Structural checks for a tree against the source it claims to cover.
//!
//! Trees built by the parser always pass; the checks exist for trees that
//! arrive from elsewhere (deserialized JSON, hand-built fixtures, rewrites).

use thiserror::Error;

use crate::nodes::Node;
use crate::position::Position;
use crate::traverse::walk;

/// First broken position invariant found by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{node_type} at {start}..{end} lies outside source of length {len}")]
    OutOfBounds {
        node_type: &'static str,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("{node_type} at {start}..{end} does not match its source text")]
    TextMismatch {
        node_type: &'static str,
        start: usize,
        end: usize,
    },

    #[error("{node_type} at {start}..{end} does not span its children ({expected_start}..{expected_end})")]
    SpanMismatch {
        node_type: &'static str,
        start: usize,
        end: usize,
        expected_start: usize,
        expected_end: usize,
    },

    #[error("children of {node_type} overlap or are out of order at byte {offset}")]
    ChildOrder { node_type: &'static str, offset: usize },
}

/// Checks every node of `root` against `source`:
///
/// - the position lies inside `source` and `source[position] == text`
/// - a composite with children spans exactly first child start to last child end
/// - siblings are ordered and do not overlap
///
/// # Example
///
/// ```rust
/// let source = "let a = [1, 2];";
/// let program = ecma_ast::parse(source).unwrap();
/// assert!(ecma_ast::validate::validate(&program, source).is_ok());
/// assert!(ecma_ast::validate::validate(&program, "let b = [1, 2];").is_err());
/// ```
pub fn validate(root: &Node, source: &str) -> Result<(), InvariantViolation> {
    walk(root).try_for_each(|node| check_node(node, source))
}

fn check_node(node: &Node, source: &str) -> Result<(), InvariantViolation> {
    let node_type = node.node_type();
    let position = node.position();
    let (start, end) = (position.start(), position.end());

    let Some(text) = position.slice(source) else {
        return Err(InvariantViolation::OutOfBounds {
            node_type,
            start,
            end,
            len: source.len(),
        });
    };
    if text != node.text() {
        return Err(InvariantViolation::TextMismatch {
            node_type,
            start,
            end,
        });
    }

    let children = node.child_nodes();
    if let Some(expected) = Position::covering(children) {
        if expected != position {
            return Err(InvariantViolation::SpanMismatch {
                node_type,
                start,
                end,
                expected_start: expected.start(),
                expected_end: expected.end(),
            });
        }
    }

    for pair in children.windows(2) {
        if pair[0].position().end() > pair[1].position().start() {
            return Err(InvariantViolation::ChildOrder {
                node_type,
                offset: pair[1].position().start(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{NodeKind, TokenKind};

    fn token(text: &str, start: usize) -> Node {
        Node::token(TokenKind::Punctuator, text, Position::new(start, start + text.len()))
    }

    #[test]
    fn test_valid_tree() {
        let tree = Node::composite(
            NodeKind::EmptyStatement,
            "; ;",
            Position::new(0, 3),
            vec![token(";", 0), token(";", 2)],
        );
        assert_eq!(validate(&tree, "; ;"), Ok(()));
    }

    #[test]
    fn test_out_of_bounds() {
        let tree = token(";", 4);
        assert!(matches!(
            validate(&tree, ";"),
            Err(InvariantViolation::OutOfBounds { len: 1, .. })
        ));
    }

    #[test]
    fn test_text_mismatch() {
        let tree = token(";", 0);
        assert!(matches!(
            validate(&tree, ","),
            Err(InvariantViolation::TextMismatch { .. })
        ));
    }

    #[test]
    fn test_span_mismatch() {
        let tree = Node::composite(
            NodeKind::EmptyStatement,
            " ;",
            Position::new(0, 2),
            vec![token(";", 1)],
        );
        assert!(matches!(
            validate(&tree, " ;"),
            Err(InvariantViolation::SpanMismatch {
                expected_start: 1,
                expected_end: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_overlapping_children() {
        let tree = Node::composite(
            NodeKind::EmptyStatement,
            ";;",
            Position::new(0, 2),
            vec![token(";;", 0), token(";", 1)],
        );
        assert!(matches!(
            validate(&tree, ";;"),
            Err(InvariantViolation::ChildOrder { offset: 1, .. })
        ));
    }

    #[test]
    fn test_empty_composite_is_valid() {
        let tree = Node::composite(NodeKind::Program, "", Position::new(0, 0), vec![]);
        assert_eq!(validate(&tree, ""), Ok(()));
    }
}
