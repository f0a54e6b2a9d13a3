//! # Parse-Tree Interface
//!
//! The AST layer consumes parse trees only through [`RuleContext`]: a rule or
//! terminal identity, ordered child contexts, a byte range, and error flags.
//! Two sources implement it:
//!
//! ```text
//! Native:  tree_sitter::Node        (feature "native-parser")
//! Browser: &cst::SerializedNode     (web-tree-sitter JSON)
//! ```

use std::ops::Range;

/// One grammar production instance (or terminal) in an external parse tree.
///
/// Implementors are cheap handles (`Copy`) into a tree owned elsewhere.
pub trait RuleContext: Copy {
    /// Grammar rule or token name (e.g. `"lexical_declaration"`, `"="`).
    fn rule_name(&self) -> &str;

    /// Whether the grammar names this node; anonymous nodes are literal tokens.
    fn is_named(&self) -> bool;

    /// Whether the parser marked this subtree as unparseable.
    fn is_error(&self) -> bool;

    /// Whether error recovery inserted this node without consuming input.
    fn is_missing(&self) -> bool;

    /// Ordered children, terminals included. Empty for terminals.
    fn child_contexts(&self) -> Vec<Self>;

    /// Byte range the parser reports for this context.
    fn byte_range(&self) -> Range<usize>;

    /// First terminal under this context, or the context itself when it has
    /// no children.
    fn start_token(&self) -> Self {
        let mut current = *self;
        while let Some(first) = current.child_contexts().first().copied() {
            current = first;
        }
        current
    }

    /// Last terminal under this context. `None` when the context has no
    /// children, in which case the start token doubles as the stop token.
    fn stop_token(&self) -> Option<Self> {
        let mut current = self.child_contexts().last().copied()?;
        while let Some(last) = current.child_contexts().last().copied() {
            current = last;
        }
        Some(current)
    }
}

#[cfg(feature = "native-parser")]
impl<'tree> RuleContext for tree_sitter::Node<'tree> {
    fn rule_name(&self) -> &str {
        self.kind()
    }

    fn is_named(&self) -> bool {
        tree_sitter::Node::is_named(self)
    }

    fn is_error(&self) -> bool {
        tree_sitter::Node::is_error(self)
    }

    fn is_missing(&self) -> bool {
        tree_sitter::Node::is_missing(self)
    }

    fn child_contexts(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        self.children(&mut cursor).collect()
    }

    fn byte_range(&self) -> Range<usize> {
        tree_sitter::Node::byte_range(self)
    }
}
