//! Declarations: variable lists and named functions.

use super::{first_operator, has_token};
use crate::nodes::{DeclarationKind, Node, NodeKind};

/// `lexical_declaration` / `variable_declaration`.
///
/// The declaring keyword is the first keyword child. A keyword outside
/// `const` / `let` / `var` (such as `using`) has no mapping.
pub(super) fn variable_declaration(children: &[Node]) -> Option<NodeKind> {
    let keyword = first_operator(children)?;
    let kind = DeclarationKind::from_keyword(keyword)?;
    Some(NodeKind::VariableDeclaration { kind })
}

/// `function_declaration` / `generator_function_declaration`.
pub(super) fn function_declaration(children: &[Node], generator_rule: bool) -> NodeKind {
    NodeKind::FunctionDeclaration {
        is_async: has_token(children, "async"),
        generator: generator_rule || has_token(children, "*"),
    }
}
