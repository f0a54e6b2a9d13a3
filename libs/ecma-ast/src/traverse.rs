//! # Tree Traversal
//!
//! Read-only traversal over a [`Node`] tree. Every walk is pre-order: a node
//! is seen before its children and children are seen in source order, which
//! for trees produced by the parser is also ascending `position().start()`.
//!
//! All walks keep an explicit stack, so tree depth is bounded by memory and
//! not by the call stack.
//!
//! ## Example
//!
//! ```rust
//! use ecma_ast::traverse::{find_all, find_first};
//!
//! let program = ecma_ast::parse("const greeting = 'hi'; console.log(greeting);").unwrap();
//! let names: Vec<&str> = find_all(&program, |n| n.node_type() == "Identifier")
//!     .into_iter()
//!     .map(|n| n.text())
//!     .collect();
//! assert_eq!(names, ["greeting", "console", "log", "greeting"]);
//!
//! let call = find_first(&program, |n| n.node_type() == "CallExpression").unwrap();
//! assert_eq!(call.text(), "console.log(greeting)");
//! ```

use crate::ast::AstView;
use crate::nodes::Node;
use crate::position::Point;

// =============================================================================
// PRE-ORDER ITERATION
// =============================================================================

/// Lazy pre-order iterator over a subtree, created by [`walk`].
#[derive(Debug, Clone)]
pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.child_nodes().iter().rev());
        Some(node)
    }
}

/// Iterates `node` and all of its descendants in pre-order.
pub fn walk(node: &Node) -> Preorder<'_> {
    Preorder { stack: vec![node] }
}

/// Calls `f` once for every node of the subtree, in pre-order.
pub fn visit_all<'a>(node: &'a Node, f: impl FnMut(&'a Node)) {
    walk(node).for_each(f);
}

/// First node in pre-order satisfying `predicate`; stops at the first match.
pub fn find_first<'a>(node: &'a Node, mut predicate: impl FnMut(&Node) -> bool) -> Option<&'a Node> {
    walk(node).find(|candidate| predicate(*candidate))
}

/// Every node satisfying `predicate`, in pre-order.
pub fn find_all<'a>(node: &'a Node, mut predicate: impl FnMut(&Node) -> bool) -> Vec<&'a Node> {
    walk(node).filter(|candidate| predicate(*candidate)).collect()
}

/// Every node whose `type` tag is `type_name`, in pre-order.
pub fn find_by_type<'a>(node: &'a Node, type_name: &str) -> Vec<&'a Node> {
    find_all(node, |candidate| candidate.node_type() == type_name)
}

// =============================================================================
// TYPED SEARCH
// =============================================================================

/// First node in pre-order that casts to the view `V`.
///
/// # Example
///
/// ```rust
/// use ecma_ast::ast::{AstView, Identifier};
/// use ecma_ast::traverse::find_first_typed;
///
/// let program = ecma_ast::parse("let answer = 42;").unwrap();
/// let id: Identifier = find_first_typed(&program).unwrap();
/// assert_eq!(id.name(), "answer");
/// ```
pub fn find_first_typed<'a, V: AstView<'a>>(node: &'a Node) -> Option<V> {
    walk(node).find_map(V::cast)
}

/// Every node that casts to the view `V`, in pre-order.
pub fn find_all_typed<'a, V: AstView<'a>>(node: &'a Node) -> Vec<V> {
    walk(node).filter_map(V::cast).collect()
}

// =============================================================================
// VISITOR
// =============================================================================

/// Result of entering a node, controlling the rest of the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitResult {
    /// Descend into children; `leave` runs after them.
    #[default]
    Continue,
    /// Skip the children; `leave` still runs for this node.
    SkipChildren,
    /// End the walk. No further `enter` or `leave` calls are made.
    Stop,
}

/// Callbacks for [`walk_with`].
///
/// `ancestors` lists the enclosing nodes from the root down to the parent of
/// `node`; it is empty for the root.
pub trait Visitor<'a> {
    fn enter(&mut self, _node: &'a Node, _ancestors: &[&'a Node]) -> VisitResult {
        VisitResult::Continue
    }

    fn leave(&mut self, _node: &'a Node, _ancestors: &[&'a Node]) {}
}

enum Frame<'a> {
    Enter(&'a Node),
    Leave(&'a Node),
}

/// Drives `visitor` over the subtree rooted at `root`.
///
/// Returns `false` if the visitor stopped the walk early.
///
/// # Example
///
/// ```rust
/// use ecma_ast::traverse::{walk_with, VisitResult, Visitor};
/// use ecma_ast::Node;
///
/// struct MaxDepth(usize);
///
/// impl<'a> Visitor<'a> for MaxDepth {
///     fn enter(&mut self, _node: &'a Node, ancestors: &[&'a Node]) -> VisitResult {
///         self.0 = self.0.max(ancestors.len());
///         VisitResult::Continue
///     }
/// }
///
/// let program = ecma_ast::parse("x;").unwrap();
/// let mut depth = MaxDepth(0);
/// assert!(walk_with(&program, &mut depth));
/// assert_eq!(depth.0, 2);
/// ```
pub fn walk_with<'a, V: Visitor<'a>>(root: &'a Node, visitor: &mut V) -> bool {
    let mut frames = vec![Frame::Enter(root)];
    let mut ancestors: Vec<&'a Node> = Vec::new();

    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Enter(node) => match visitor.enter(node, &ancestors) {
                VisitResult::Stop => return false,
                VisitResult::SkipChildren => visitor.leave(node, &ancestors),
                VisitResult::Continue => {
                    frames.push(Frame::Leave(node));
                    frames.extend(node.child_nodes().iter().rev().map(Frame::Enter));
                    ancestors.push(node);
                }
            },
            Frame::Leave(node) => {
                ancestors.pop();
                visitor.leave(node, &ancestors);
            }
        }
    }

    true
}

// =============================================================================
// POSITION LOOKUP
// =============================================================================

/// Innermost node whose position contains `point`.
///
/// Positions are half-open, so a point on a boundary belongs to the node
/// that starts there.
pub fn node_at(root: &Node, point: Point) -> Option<&Node> {
    path_to(root, point).pop()
}

/// Nodes from `root` down to the innermost node containing `point`.
///
/// Empty when `point` lies outside `root`.
pub fn path_to(root: &Node, point: Point) -> Vec<&Node> {
    let mut path = Vec::new();
    if !root.position().contains_point(point) {
        return path;
    }

    let mut current = root;
    path.push(current);
    while let Some(child) = current
        .child_nodes()
        .iter()
        .find(|child| child.position().contains_point(point))
    {
        path.push(child);
        current = child;
    }
    path
}
