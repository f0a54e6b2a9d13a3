//! Expressions.
//!
//! Operator-carrying kinds read the operator from a keyword or punctuation
//! child; an expression with no such child has no mapping.

use super::{first_operator, has_token, operator_text};
use crate::nodes::{Node, NodeKind};
use crate::rule::RuleKind;

const LOGICAL_OPERATORS: [&str; 3] = ["&&", "||", "??"];

/// The operator of an infix form follows its left operand, which may itself
/// be a keyword token such as `this`.
fn infix_operator(children: &[Node]) -> Option<&str> {
    children.iter().skip(1).find_map(operator_text)
}

pub(super) fn binary(children: &[Node]) -> Option<NodeKind> {
    let operator = infix_operator(children)?.to_string();
    if LOGICAL_OPERATORS.contains(&operator.as_str()) {
        Some(NodeKind::LogicalExpression { operator })
    } else {
        Some(NodeKind::BinaryExpression { operator })
    }
}

pub(super) fn unary(children: &[Node]) -> Option<NodeKind> {
    let operator = first_operator(children)?.to_string();
    Some(NodeKind::UnaryExpression { operator })
}

const UPDATE_OPERATORS: [&str; 2] = ["++", "--"];

/// `++x` has the operator first, `x++` last. The operand may itself be a
/// keyword token such as `this`.
pub(super) fn update(children: &[Node]) -> Option<NodeKind> {
    let (index, operator) = children.iter().enumerate().find_map(|(index, child)| {
        operator_text(child)
            .filter(|text| UPDATE_OPERATORS.contains(text))
            .map(|text| (index, text))
    })?;
    Some(NodeKind::UpdateExpression {
        operator: operator.to_string(),
        prefix: index == 0,
    })
}

pub(super) fn assignment(children: &[Node]) -> Option<NodeKind> {
    let operator = infix_operator(children)?.to_string();
    Some(NodeKind::AssignmentExpression { operator })
}

pub(super) fn call(children: &[Node]) -> NodeKind {
    NodeKind::CallExpression {
        optional: has_token(children, "?."),
    }
}

/// `member_expression` (`a.b`) and `subscript_expression` (`a[b]`).
pub(super) fn member(children: &[Node], computed: bool) -> NodeKind {
    NodeKind::MemberExpression {
        computed,
        optional: has_token(children, "?."),
    }
}

pub(super) fn function(children: &[Node], generator_rule: bool) -> NodeKind {
    NodeKind::FunctionExpression {
        is_async: has_token(children, "async"),
        generator: generator_rule || has_token(children, "*"),
    }
}

pub(super) fn arrow_function(children: &[Node]) -> NodeKind {
    NodeKind::ArrowFunctionExpression {
        is_async: has_token(children, "async"),
    }
}

/// Expression rules whose node kind depends on the rule alone.
pub(super) fn simple_expression(rule: RuleKind) -> Option<NodeKind> {
    let kind = match rule {
        RuleKind::NewExpression => NodeKind::NewExpression,
        RuleKind::ParenthesizedExpression => NodeKind::ParenthesizedExpression,
        RuleKind::TernaryExpression => NodeKind::ConditionalExpression,
        RuleKind::SequenceExpression => NodeKind::SequenceExpression,
        RuleKind::SpreadElement => NodeKind::SpreadElement,
        RuleKind::AwaitExpression => NodeKind::AwaitExpression,
        RuleKind::Arguments => NodeKind::Arguments,
        RuleKind::Array => NodeKind::ArrayExpression,
        RuleKind::Object => NodeKind::ObjectExpression,
        RuleKind::Pair => NodeKind::Property,
        _ => return None,
    };
    Some(kind)
}
