//! Typed views over [`Node`].
//!
//! A view is a borrowed, `Copy` wrapper that proves a node has a particular
//! shape and exposes its parts by role instead of by child index:
//!
//! ```rust
//! use ecma_ast::ast::{AstView, VariableDeclaration};
//! use ecma_ast::DeclarationKind;
//!
//! let program = ecma_ast::parse("const x = 42;").unwrap();
//! let declaration = VariableDeclaration::cast(&program.child_nodes()[0]).unwrap();
//! assert_eq!(declaration.kind(), DeclarationKind::Const);
//!
//! let declarator = declaration.declarations().next().unwrap();
//! assert_eq!(declarator.id().map(|id| id.text()), Some("x"));
//! assert_eq!(declarator.init().map(|init| init.text()), Some("42"));
//! ```
//!
//! Accessors return `Option` where the grammar allows a part to be absent.

use crate::nodes::{DeclarationKind, LiteralValue, Node, NodeKind, TokenKind};

pub trait AstView<'a>: Sized + Copy {
    /// Narrows `node` to this view, or `None` if it has another shape.
    fn cast(node: &'a Node) -> Option<Self>;

    /// The underlying node.
    fn syntax(self) -> &'a Node;
}

/// Declares a view over composites whose kind matches `$pattern`.
macro_rules! composite_view {
    ($(#[$meta:meta])* $name:ident, $pattern:pat) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name<'a>(&'a Node);

        impl<'a> AstView<'a> for $name<'a> {
            fn cast(node: &'a Node) -> Option<Self> {
                let composite = node.as_composite()?;
                matches!(composite.kind(), $pattern).then_some(Self(node))
            }

            fn syntax(self) -> &'a Node {
                self.0
            }
        }
    };
}

fn kind_of(node: &Node) -> Option<&NodeKind> {
    node.as_composite().map(|composite| composite.kind())
}

// =============================================================================
// PROGRAM & STATEMENTS
// =============================================================================

composite_view!(
    /// Root of a parsed source file.
    Program,
    NodeKind::Program
);

impl<'a> Program<'a> {
    /// Top-level statements in source order, comments excluded.
    pub fn statements(self) -> impl Iterator<Item = &'a Node> {
        self.0.child_nodes().iter().filter(|child| child.is_composite())
    }
}

composite_view!(ExpressionStatement, NodeKind::ExpressionStatement);

impl<'a> ExpressionStatement<'a> {
    pub fn expression(self) -> Option<&'a Node> {
        self.0.significant_children().next()
    }
}

/// `const` / `let` / `var` with one or more declarators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableDeclaration<'a> {
    node: &'a Node,
    kind: DeclarationKind,
}

impl<'a> VariableDeclaration<'a> {
    pub fn kind(self) -> DeclarationKind {
        self.kind
    }

    pub fn declarations(self) -> impl Iterator<Item = VariableDeclarator<'a>> {
        self.node.child_nodes().iter().filter_map(VariableDeclarator::cast)
    }
}

impl<'a> AstView<'a> for VariableDeclaration<'a> {
    fn cast(node: &'a Node) -> Option<Self> {
        match kind_of(node)? {
            NodeKind::VariableDeclaration { kind } => Some(Self { node, kind: *kind }),
            _ => None,
        }
    }

    fn syntax(self) -> &'a Node {
        self.node
    }
}

composite_view!(
    /// `id` or `id = init`.
    VariableDeclarator,
    NodeKind::VariableDeclarator
);

impl<'a> VariableDeclarator<'a> {
    /// Binding target: an identifier or a destructuring pattern.
    pub fn id(self) -> Option<&'a Node> {
        self.0.significant_children().next()
    }

    pub fn init(self) -> Option<&'a Node> {
        self.0.significant_children().nth(1)
    }
}

composite_view!(
    FunctionDeclaration,
    NodeKind::FunctionDeclaration { .. }
);

impl<'a> FunctionDeclaration<'a> {
    pub fn name(self) -> Option<Identifier<'a>> {
        self.0.child_nodes().iter().find_map(Identifier::cast)
    }

    /// Parameter nodes, parentheses and commas excluded.
    pub fn params(self) -> impl Iterator<Item = &'a Node> {
        self.0
            .child_nodes()
            .iter()
            .filter(|child| matches!(kind_of(child), Some(NodeKind::Parameters)))
            .flat_map(|params| params.significant_children())
    }

    pub fn body(self) -> Option<&'a Node> {
        self.0
            .child_nodes()
            .iter()
            .find(|child| matches!(kind_of(child), Some(NodeKind::BlockStatement)))
    }

    pub fn is_async(self) -> bool {
        matches!(
            kind_of(self.0),
            Some(NodeKind::FunctionDeclaration { is_async: true, .. })
        )
    }
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

/// Arithmetic, comparison and bitwise operators; `&&`, `||` and `??` are
/// `LogicalExpression` nodes and do not cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpression<'a> {
    node: &'a Node,
    operator: &'a str,
}

impl<'a> BinaryExpression<'a> {
    pub fn operator(self) -> &'a str {
        self.operator
    }

    pub fn left(self) -> Option<&'a Node> {
        self.node.significant_children().next()
    }

    pub fn right(self) -> Option<&'a Node> {
        self.node.significant_children().nth(1)
    }
}

impl<'a> AstView<'a> for BinaryExpression<'a> {
    fn cast(node: &'a Node) -> Option<Self> {
        match kind_of(node)? {
            NodeKind::BinaryExpression { operator } => Some(Self { node, operator }),
            _ => None,
        }
    }

    fn syntax(self) -> &'a Node {
        self.node
    }
}

composite_view!(CallExpression, NodeKind::CallExpression { .. });

impl<'a> CallExpression<'a> {
    pub fn callee(self) -> Option<&'a Node> {
        self.0.significant_children().next()
    }

    pub fn arguments(self) -> impl Iterator<Item = &'a Node> {
        self.0
            .child_nodes()
            .iter()
            .filter(|child| matches!(kind_of(child), Some(NodeKind::Arguments)))
            .flat_map(|arguments| arguments.significant_children())
    }
}

composite_view!(MemberExpression, NodeKind::MemberExpression { .. });

impl<'a> MemberExpression<'a> {
    pub fn object(self) -> Option<&'a Node> {
        self.0.significant_children().next()
    }

    pub fn property(self) -> Option<&'a Node> {
        self.0.significant_children().last()
    }

    pub fn is_computed(self) -> bool {
        matches!(
            kind_of(self.0),
            Some(NodeKind::MemberExpression { computed: true, .. })
        )
    }
}

// =============================================================================
// LEAVES & LITERALS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Identifier<'a>(&'a Node);

impl<'a> Identifier<'a> {
    pub fn name(self) -> &'a str {
        self.0.text()
    }
}

impl<'a> AstView<'a> for Identifier<'a> {
    fn cast(node: &'a Node) -> Option<Self> {
        let token = node.as_token()?;
        matches!(token.kind(), TokenKind::Identifier { .. }).then_some(Self(node))
    }

    fn syntax(self) -> &'a Node {
        self.0
    }
}

/// Number, BigInt, boolean and `null` tokens, and string and regex composites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Literal<'a> {
    node: &'a Node,
    value: &'a LiteralValue,
}

impl<'a> Literal<'a> {
    pub fn value(self) -> &'a LiteralValue {
        self.value
    }
}

impl<'a> AstView<'a> for Literal<'a> {
    fn cast(node: &'a Node) -> Option<Self> {
        let value = match node {
            Node::Token(token) => match token.kind() {
                TokenKind::Literal { value } => value,
                _ => return None,
            },
            Node::Composite(composite) => match composite.kind() {
                NodeKind::Literal { value } => value,
                _ => return None,
            },
        };
        Some(Self { node, value })
    }

    fn syntax(self) -> &'a Node {
        self.node
    }
}

/// A node emitted where no mapping exists for its grammar rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unknown<'a> {
    node: &'a Node,
    rule: &'a str,
}

impl<'a> Unknown<'a> {
    /// Name of the unmapped grammar rule.
    pub fn rule(self) -> &'a str {
        self.rule
    }
}

impl<'a> AstView<'a> for Unknown<'a> {
    fn cast(node: &'a Node) -> Option<Self> {
        let rule = match node {
            Node::Token(token) => match token.kind() {
                TokenKind::Unknown { rule } => rule,
                _ => return None,
            },
            Node::Composite(composite) => match composite.kind() {
                NodeKind::Unknown { rule } => rule,
                _ => return None,
            },
        };
        Some(Self { node, rule })
    }

    fn syntax(self) -> &'a Node {
        self.node
    }
}
