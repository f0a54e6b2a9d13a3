use config::constants::DIAGNOSTIC_SNIPPET_CHARS;
use serde::{Deserialize, Serialize};

use crate::context::RuleContext;
use crate::position::Position;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message with severity and location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub position: Position,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>, position: Position) -> Self {
        Self {
            severity,
            message: message.into(),
            position,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn error(message: impl Into<String>, position: Position) -> Self {
        Self::new(Severity::Error, message, position)
    }

    pub fn warning(message: impl Into<String>, position: Position) -> Self {
        Self::new(Severity::Warning, message, position)
    }
}

/// Collects one diagnostic per `ERROR` and `MISSING` node, in document order.
///
/// The walk keeps its own stack so damaged, deeply nested input cannot
/// exhaust the call stack.
pub fn collect_syntax_errors<C: RuleContext>(root: C, source: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut stack = vec![root];

    while let Some(ctx) = stack.pop() {
        let range = ctx.byte_range();
        let position = Position::new(range.start, range.end);
        if ctx.is_missing() {
            diagnostics.push(
                Diagnostic::error(format!("Missing: {}", ctx.rule_name()), position)
                    .with_hint("The parser expected this token here"),
            );
        } else if ctx.is_error() {
            let snippet: String = position
                .slice(source)
                .unwrap_or_default()
                .chars()
                .take(DIAGNOSTIC_SNIPPET_CHARS)
                .collect();
            diagnostics.push(Diagnostic::error(
                format!("Syntax error near '{snippet}'"),
                position,
            ));
        }
        stack.extend(ctx.child_contexts().into_iter().rev());
    }

    diagnostics
}
