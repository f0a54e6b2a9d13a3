//! Statements.

use super::has_token;
use crate::nodes::{Node, NodeKind};
use crate::rule::RuleKind;

/// Statement rules whose node kind depends on the rule alone.
pub(super) fn simple_statement(rule: RuleKind) -> Option<NodeKind> {
    let kind = match rule {
        RuleKind::ExpressionStatement => NodeKind::ExpressionStatement,
        RuleKind::EmptyStatement => NodeKind::EmptyStatement,
        RuleKind::StatementBlock => NodeKind::BlockStatement,
        RuleKind::ReturnStatement => NodeKind::ReturnStatement,
        RuleKind::IfStatement => NodeKind::IfStatement,
        RuleKind::ElseClause => NodeKind::ElseClause,
        RuleKind::ForStatement => NodeKind::ForStatement,
        RuleKind::WhileStatement => NodeKind::WhileStatement,
        RuleKind::DoStatement => NodeKind::DoWhileStatement,
        RuleKind::BreakStatement => NodeKind::BreakStatement,
        RuleKind::ContinueStatement => NodeKind::ContinueStatement,
        RuleKind::ThrowStatement => NodeKind::ThrowStatement,
        RuleKind::TryStatement => NodeKind::TryStatement,
        RuleKind::CatchClause => NodeKind::CatchClause,
        RuleKind::FinallyClause => NodeKind::FinallyClause,
        _ => return None,
    };
    Some(kind)
}

/// `for_in_statement` covers both `for (x in o)` and `for (x of xs)`.
pub(super) fn for_in_statement(children: &[Node]) -> NodeKind {
    if has_token(children, "of") {
        NodeKind::ForOfStatement
    } else {
        NodeKind::ForInStatement
    }
}
