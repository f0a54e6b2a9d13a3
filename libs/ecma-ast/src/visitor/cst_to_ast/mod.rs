//! # CST to AST Transformation
//!
//! Walks a parse tree through [`RuleContext`] and builds the typed [`Node`]
//! tree. Every context maps to exactly one node:
//!
//! ```text
//! terminal context           → Node::Token     (tokens.rs)
//! context with children      → Node::Composite (kind from the rule dispatch)
//! rule with no constructor   → Unknown { rule } of the matching shape
//! ```
//!
//! Children are built first, in grammar order, so a composite's position is
//! simply its first child's start to its last child's end, and its text is
//! the source slice under that range.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::ParserConfig;
//! use ecma_ast::visitor::cst_to_ast::transform;
//!
//! let source = "let a = 1;";
//! let tree = ecma_parser::parse_source(source).unwrap();
//! let program = transform(tree.root_node(), source, &ParserConfig::default()).unwrap();
//! assert_eq!(program.node_type(), "Program");
//! ```

mod declarations;
mod expressions;
mod literals;
mod statements;
mod tokens;

use config::constants::{ParserConfig, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;
use tracing::{trace, warn};

use crate::context::RuleContext;
use crate::error::ParseError;
use crate::nodes::{Node, NodeKind, TokenKind};
use crate::position::{get_position, Position};
use crate::rule::RuleKind;

pub use literals::{parse_number, unescape_string};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Transform a parse tree into an AST.
///
/// ## Parameters
///
/// - `root`: entry context of the parse tree (normally the `program` rule)
/// - `source`: the text the parse tree was built from
/// - `config`: nesting limit
///
/// ## Returns
///
/// The AST root. Unmapped rules become `Unknown` nodes; only a nesting
/// overflow or offsets that do not slice `source` produce an error.
///
/// The caller is responsible for rejecting trees that contain `ERROR` or
/// `MISSING` nodes beforehand; this function maps them like any other rule.
pub fn transform<C: RuleContext>(
    root: C,
    source: &str,
    config: &ParserConfig,
) -> Result<Node, ParseError> {
    let builder = AstBuilder {
        source,
        limit: config.max_nesting_depth,
    };
    builder.visit(root, 0)
}

// =============================================================================
// BUILDER
// =============================================================================

struct AstBuilder<'s> {
    source: &'s str,
    limit: usize,
}

impl AstBuilder<'_> {
    fn visit<C: RuleContext>(&self, ctx: C, depth: usize) -> Result<Node, ParseError> {
        if depth >= self.limit {
            let offset = ctx.byte_range().start;
            warn!(limit = self.limit, offset, "parse tree nesting limit exceeded");
            return Err(ParseError::NestingTooDeep {
                limit: self.limit,
                offset,
            });
        }

        let rule_name = ctx.rule_name();
        let rule = RuleKind::from_grammar_name(rule_name, ctx.is_named());
        let child_contexts = ctx.child_contexts();

        if child_contexts.is_empty() {
            let position = get_position(&ctx);
            let text = self.text_at(position)?;
            return Ok(tokens::build_leaf(rule, rule_name, text, position));
        }

        let mut children = Vec::with_capacity(child_contexts.len());
        for child in child_contexts {
            let node = maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
                self.visit(child, depth + 1)
            })?;
            children.push(node);
        }

        let position = match Position::covering(&children) {
            Some(position) => position,
            None => get_position(&ctx),
        };
        let text = self.text_at(position)?;
        let kind = build_kind(rule, rule_name, &children);
        Ok(Node::composite(kind, text, position, children))
    }

    fn text_at(&self, position: Position) -> Result<&str, ParseError> {
        position
            .slice(self.source)
            .ok_or(ParseError::InvalidPosition {
                start: position.start(),
                end: position.end(),
                len: self.source.len(),
            })
    }
}

// =============================================================================
// RULE DISPATCH
// =============================================================================

/// Routes a rule with children to its constructor; unregistered rules, and
/// registered ones whose shape does not fit, fall back to `Unknown`.
fn build_kind(rule: RuleKind, rule_name: &str, children: &[Node]) -> NodeKind {
    let kind = match rule {
        RuleKind::Program => Some(NodeKind::Program),

        // Declarations
        RuleKind::LexicalDeclaration | RuleKind::VariableDeclaration => {
            declarations::variable_declaration(children)
        }
        RuleKind::VariableDeclarator => Some(NodeKind::VariableDeclarator),
        RuleKind::FunctionDeclaration => Some(declarations::function_declaration(children, false)),
        RuleKind::GeneratorFunctionDeclaration => {
            Some(declarations::function_declaration(children, true))
        }
        RuleKind::ClassDeclaration => Some(NodeKind::ClassDeclaration),
        RuleKind::ClassBody => Some(NodeKind::ClassBody),
        RuleKind::MethodDefinition => Some(NodeKind::MethodDefinition),
        RuleKind::FormalParameters => Some(NodeKind::Parameters),

        // Statements
        RuleKind::ExpressionStatement
        | RuleKind::EmptyStatement
        | RuleKind::StatementBlock
        | RuleKind::ReturnStatement
        | RuleKind::IfStatement
        | RuleKind::ElseClause
        | RuleKind::ForStatement
        | RuleKind::WhileStatement
        | RuleKind::DoStatement
        | RuleKind::BreakStatement
        | RuleKind::ContinueStatement
        | RuleKind::ThrowStatement
        | RuleKind::TryStatement
        | RuleKind::CatchClause
        | RuleKind::FinallyClause => statements::simple_statement(rule),
        RuleKind::ForInStatement => Some(statements::for_in_statement(children)),

        // Expressions
        RuleKind::BinaryExpression => expressions::binary(children),
        RuleKind::UnaryExpression => expressions::unary(children),
        RuleKind::UpdateExpression => expressions::update(children),
        RuleKind::AssignmentExpression | RuleKind::AugmentedAssignmentExpression => {
            expressions::assignment(children)
        }
        RuleKind::CallExpression => Some(expressions::call(children)),
        RuleKind::MemberExpression => Some(expressions::member(children, false)),
        RuleKind::SubscriptExpression => Some(expressions::member(children, true)),
        RuleKind::FunctionExpression => Some(expressions::function(children, false)),
        RuleKind::GeneratorFunction => Some(expressions::function(children, true)),
        RuleKind::ArrowFunction => Some(expressions::arrow_function(children)),
        RuleKind::NewExpression
        | RuleKind::ParenthesizedExpression
        | RuleKind::TernaryExpression
        | RuleKind::SequenceExpression
        | RuleKind::SpreadElement
        | RuleKind::AwaitExpression
        | RuleKind::Arguments
        | RuleKind::Array
        | RuleKind::Object
        | RuleKind::Pair => expressions::simple_expression(rule),

        // Composite literals
        RuleKind::String => Some(literals::string(children)),
        RuleKind::Regex => Some(literals::regex(children)),
        RuleKind::TemplateString => Some(NodeKind::TemplateLiteral),
        RuleKind::TemplateSubstitution => Some(NodeKind::TemplateSubstitution),

        _ => None,
    };

    kind.unwrap_or_else(|| {
        trace!(rule = rule_name, "no constructor for rule, emitting Unknown");
        NodeKind::Unknown {
            rule: rule_name.to_string(),
        }
    })
}

// =============================================================================
// SHARED HELPERS
// =============================================================================

/// Text of the first keyword or punctuation token among `children`.
fn first_operator(children: &[Node]) -> Option<&str> {
    children.iter().find_map(operator_text)
}

/// Text of a keyword or punctuation token; `None` for anything else.
fn operator_text(node: &Node) -> Option<&str> {
    let token = node.as_token()?;
    match token.kind() {
        TokenKind::Keyword | TokenKind::Punctuator => Some(token.text()),
        _ => None,
    }
}

/// Whether a keyword or punctuation child is spelled `text`.
fn has_token(children: &[Node], text: &str) -> bool {
    children
        .iter()
        .filter_map(operator_text)
        .any(|operator| operator == text)
}

#[cfg(test)]
mod tests;
