//! # Tree Rewriting
//!
//! Pure rewrites over a [`Node`] tree. Neither function mutates its input;
//! both return a freshly built tree.
//!
//! - [`transform`] maps every node, children before parents.
//! - [`filter`] prunes subtrees whose root fails a predicate.
//!
//! Rebuilt composites keep their original `text` and `position`; callers that
//! change source text are expected to re-parse rather than trust offsets.

use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;

use crate::nodes::Node;

/// Applies `f` to every node of the tree in post-order.
///
/// A composite's children are transformed first; `f` then receives the
/// composite rebuilt around the transformed children. `transform(node, |n| n)`
/// is structurally equal to `node`.
///
/// # Example
///
/// ```rust
/// use ecma_ast::transform::transform;
/// use ecma_ast::{Node, TokenKind};
///
/// let program = ecma_ast::parse("a + b;").unwrap();
/// let renamed = transform(&program, |node| {
///     let is_a = matches!(
///         node.as_token().map(|t| t.kind()),
///         Some(TokenKind::Identifier { name }) if name == "a"
///     );
///     if is_a {
///         let name = "z".to_string();
///         Node::token(TokenKind::Identifier { name }, "z", node.position())
///     } else {
///         node
///     }
/// });
/// assert_eq!(renamed.child_nodes()[0].child_nodes()[0].child_nodes()[0].text(), "z");
/// assert_eq!(program.child_nodes()[0].child_nodes()[0].child_nodes()[0].text(), "a");
/// ```
pub fn transform<F>(node: &Node, mut f: F) -> Node
where
    F: FnMut(Node) -> Node,
{
    transform_node(node, &mut f)
}

fn transform_node<F>(node: &Node, f: &mut F) -> Node
where
    F: FnMut(Node) -> Node,
{
    let rebuilt = match node.children() {
        None => node.clone(),
        Some(children) => {
            let mut transformed = Vec::with_capacity(children.len());
            for child in children {
                transformed.push(maybe_grow(
                    STACKER_RED_ZONE_BYTES,
                    STACKER_STACK_SIZE_BYTES,
                    || transform_node(child, f),
                ));
            }
            node.with_children(transformed)
        }
    };
    f(rebuilt)
}

/// Keeps the nodes satisfying `predicate`, dropping failing subtrees whole.
///
/// The predicate runs in pre-order and is never called for descendants of a
/// rejected node. A rejected root yields `None`; a kept composite may end up
/// with no children.
///
/// # Example
///
/// ```rust
/// use ecma_ast::transform::filter;
///
/// let program = ecma_ast::parse("// note\nlet a = 1;").unwrap();
/// let without_comments = filter(&program, |n| n.node_type() != "Comment").unwrap();
/// assert_eq!(without_comments.child_nodes().len(), 1);
/// assert_eq!(without_comments.text(), program.text());
/// ```
pub fn filter<P>(node: &Node, mut predicate: P) -> Option<Node>
where
    P: FnMut(&Node) -> bool,
{
    filter_node(node, &mut predicate)
}

fn filter_node<P>(node: &Node, predicate: &mut P) -> Option<Node>
where
    P: FnMut(&Node) -> bool,
{
    if !predicate(node) {
        return None;
    }

    match node.children() {
        None => Some(node.clone()),
        Some(children) => {
            let mut kept = Vec::with_capacity(children.len());
            for child in children {
                let filtered = maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
                    filter_node(child, predicate)
                });
                kept.extend(filtered);
            }
            Some(node.with_children(kept))
        }
    }
}
