//! Terminal contexts: every context without children becomes a token.

use tracing::trace;

use super::literals::parse_number;
use crate::nodes::{LiteralValue, Node, NodeKind, TokenKind};
use crate::position::Position;
use crate::rule::RuleKind;

/// Builds the node for a context with no children.
///
/// An empty `program` is the one childless context that stays composite, so
/// the root of a blank file is still a `Program`.
pub(super) fn build_leaf(rule: RuleKind, rule_name: &str, text: &str, position: Position) -> Node {
    if rule == RuleKind::Program {
        return Node::composite(NodeKind::Program, text, position, Vec::new());
    }
    Node::token(classify(rule, rule_name, text), text, position)
}

fn classify(rule: RuleKind, rule_name: &str, text: &str) -> TokenKind {
    match rule {
        RuleKind::Identifier | RuleKind::Undefined => TokenKind::Identifier {
            name: text.to_string(),
        },
        RuleKind::Number => match parse_number(text) {
            Some(value) => TokenKind::Literal { value },
            None => {
                trace!(text, "unparseable number literal");
                unknown(rule_name)
            }
        },
        RuleKind::True => literal(LiteralValue::Boolean(true)),
        RuleKind::False => literal(LiteralValue::Boolean(false)),
        RuleKind::Null => literal(LiteralValue::Null),
        RuleKind::This | RuleKind::Super => TokenKind::Keyword,
        RuleKind::Comment | RuleKind::HashBangLine => TokenKind::Comment,
        RuleKind::StringFragment
        | RuleKind::EscapeSequence
        | RuleKind::RegexPattern
        | RuleKind::RegexFlags => TokenKind::Fragment,
        RuleKind::OptionalChain => TokenKind::Punctuator,
        RuleKind::Anonymous if is_word(rule_name) => TokenKind::Keyword,
        RuleKind::Anonymous => TokenKind::Punctuator,
        _ => {
            trace!(rule = rule_name, "no token mapping for terminal, emitting Unknown");
            unknown(rule_name)
        }
    }
}

fn literal(value: LiteralValue) -> TokenKind {
    TokenKind::Literal { value }
}

fn unknown(rule_name: &str) -> TokenKind {
    TokenKind::Unknown {
        rule: rule_name.to_string(),
    }
}

/// Anonymous tokens spelled with letters are keywords (`const`, `typeof`, `of`).
fn is_word(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}
