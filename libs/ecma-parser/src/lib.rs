//! This crate provides ECMAScript language support for the [tree-sitter][]
//! parsing library, as consumed by `ecma-ast`.
//!
//! Typically, you will call [`parse_source`] and hand the resulting tree to the
//! AST layer:
//!
//! ```
//! let tree = ecma_parser::parse_source("const x = 42;").unwrap();
//! assert!(!tree.root_node().has_error());
//! assert_eq!(tree.root_node().kind(), "program");
//! ```
//!
//! Grammar compilation, tokenization and error recovery all live in the
//! `tree-sitter-javascript` grammar; this crate only loads it.
//!
//! [tree-sitter]: https://tree-sitter.github.io/

use thiserror::Error;
use tree_sitter::{Language, LanguageError, Parser, Tree};

/// Name of the grammar's entry rule.
pub const ROOT_RULE: &str = "program";

/// Errors raised before a syntax tree exists.
#[derive(Debug, Error)]
pub enum ParserError {
    /// The grammar could not be loaded into the parser (ABI mismatch).
    #[error("failed to load ECMAScript grammar: {0}")]
    Language(#[from] LanguageError),

    /// tree-sitter gave up without producing a tree.
    #[error("parser returned no tree")]
    NoTree,
}

/// Returns the tree-sitter [`Language`] for the ECMAScript grammar.
pub fn language() -> Language {
    tree_sitter_javascript::LANGUAGE.into()
}

/// Parses ECMAScript source code and returns a syntax tree.
///
/// This is a high-level wrapper around tree-sitter that handles parser
/// initialization. A fresh parser is created per call, so concurrent callers
/// share no state.
///
/// # Arguments
/// * `source` - The ECMAScript source code to parse
///
/// # Returns
/// * `Ok(Tree)` - The syntax tree; it may still contain `ERROR`/`MISSING` nodes
/// * `Err(ParserError)` - The grammar failed to load or no tree was produced
///
/// # Examples
/// ```
/// use ecma_parser::parse_source;
///
/// let tree = parse_source("const x = ;").unwrap();
/// // tree-sitter recovers and marks the damage instead of failing
/// assert!(tree.root_node().has_error());
/// ```
pub fn parse_source(source: &str) -> Result<Tree, ParserError> {
    let mut parser = Parser::new();
    parser.set_language(&language())?;
    parser.parse(source, None).ok_or(ParserError::NoTree)
}
