use thiserror::Error;

use crate::diagnostic::Diagnostic;

/// Reasons no AST could be produced.
///
/// Grammar coverage gaps are not errors: they become `Unknown` nodes.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The external parser could not run.
    #[cfg(feature = "native-parser")]
    #[error(transparent)]
    Grammar(#[from] ecma_parser::ParserError),

    /// The parse tree contains `ERROR` or `MISSING` nodes.
    #[error("{} syntax error(s) in source", .0.len())]
    Syntax(Vec<Diagnostic>),

    /// Parse-tree nesting exceeded the configured limit.
    #[error("nesting deeper than {limit} levels at byte {offset}")]
    NestingTooDeep { limit: usize, offset: usize },

    /// A context reported offsets that do not slice the source.
    #[error("invalid position {start}..{end} for source of length {len}")]
    InvalidPosition { start: usize, end: usize, len: usize },
}

impl ParseError {
    /// Diagnostics attached to a syntax failure; empty for other errors.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            ParseError::Syntax(diagnostics) => diagnostics,
            _ => &[],
        }
    }
}
