//! Parser module for converting ECMAScript source to AST.
//!
//! This module provides the native entry points. It calls the tree-sitter
//! parser and converts the CST to the AST.

use config::constants::ParserConfig;
use tracing::debug;

use crate::diagnostic::collect_syntax_errors;
use crate::error::ParseError;
use crate::nodes::Node;
use crate::visitor::cst_to_ast;

/// Source-to-AST parser with a fixed configuration.
///
/// # Example
///
/// ```rust
/// use config::constants::ParserConfig;
/// use ecma_ast::Parser;
///
/// let parser = Parser::with_config(ParserConfig::new(64).unwrap());
/// assert!(parser.parse("let a = 1;").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses `source`, returning `None` if no AST can be produced.
    pub fn parse(&self, source: &str) -> Option<Node> {
        self.parse_with_diagnostics(source).ok()
    }

    /// Parses `source`, reporting why no AST could be produced.
    ///
    /// This is the main entry point for the AST layer. It:
    /// 1. Calls ecma-parser to get the CST
    /// 2. Rejects trees containing `ERROR` or `MISSING` nodes
    /// 3. Converts the CST to the AST
    pub fn parse_with_diagnostics(&self, source: &str) -> Result<Node, ParseError> {
        let tree = ecma_parser::parse_source(source)?;
        let root = tree.root_node();

        if root.has_error() {
            let diagnostics = collect_syntax_errors(root, source);
            debug!(count = diagnostics.len(), "source contains syntax errors");
            return Err(ParseError::Syntax(diagnostics));
        }

        let program = cst_to_ast::transform(root, source, &self.config)?;
        debug!(bytes = source.len(), "parsed source to AST");
        Ok(program)
    }
}

/// Parses ECMAScript source code to AST.
///
/// Returns `None` when the source has syntax errors, nests deeper than the
/// default limit, or the grammar cannot be loaded.
///
/// # Examples
/// ```
/// let program = ecma_ast::parse("const x = 42;").unwrap();
/// assert_eq!(program.node_type(), "Program");
///
/// assert!(ecma_ast::parse("const x = ;").is_none());
/// ```
pub fn parse(source: &str) -> Option<Node> {
    Parser::new().parse(source)
}

/// Like [`parse`], reporting the reason for failure.
///
/// # Examples
/// ```
/// use ecma_ast::{parse_with_diagnostics, ParseError};
///
/// let err = parse_with_diagnostics("const = 1;").unwrap_err();
/// assert!(matches!(err, ParseError::Syntax(_)));
/// assert!(!err.diagnostics().is_empty());
/// ```
pub fn parse_with_diagnostics(source: &str) -> Result<Node, ParseError> {
    Parser::new().parse_with_diagnostics(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_source() {
        let program = parse("let a = 1;\nlet b = a + 2;").unwrap();
        assert_eq!(program.node_type(), "Program");
        assert_eq!(program.child_nodes().len(), 2);
    }

    #[test]
    fn test_parse_invalid_source_is_none() {
        assert!(parse("const x = ;").is_none());
        assert!(parse("function (").is_none());
    }

    #[test]
    fn test_missing_token_is_reported() {
        let err = parse_with_diagnostics("let a = (1 + 2;").unwrap_err();
        assert!(!err.diagnostics().is_empty());
    }

    #[test]
    fn test_parser_nesting_limit() {
        let source = format!("x = {}1{};", "[".repeat(30), "]".repeat(30));
        let shallow = Parser::with_config(ParserConfig::new(8).unwrap());
        assert!(matches!(
            shallow.parse_with_diagnostics(&source),
            Err(ParseError::NestingTooDeep { limit: 8, .. })
        ));
        assert!(Parser::new().parse(&source).is_some());
    }

    #[test]
    fn test_parser_exposes_config() {
        let parser = Parser::new();
        assert_eq!(parser.config(), &ParserConfig::default());
    }
}
