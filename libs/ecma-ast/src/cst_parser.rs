//! # CST Parser Module
//!
//! Converts a serialized CST (from web-tree-sitter) into the AST.
//! This module provides browser-safe parsing by accepting a pre-parsed CST
//! from JavaScript instead of using the Rust tree-sitter crate.
//!
//! ## Architecture
//!
//! ```text
//! Browser: ECMAScript Source → web-tree-sitter → Serialized CST (JSON)
//! WASM: Serialized CST → cst_parser → AST
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ecma_ast::cst::SerializedNode;
//! use ecma_ast::cst_parser::parse_from_cst;
//!
//! let cst: SerializedNode = serde_json::from_str(json)?;
//! let program = parse_from_cst(&cst, source)?;
//! ```

use config::constants::ParserConfig;
use tracing::debug;

use crate::cst::SerializedNode;
use crate::diagnostic::collect_syntax_errors;
use crate::error::ParseError;
use crate::nodes::Node;
use crate::visitor::cst_to_ast;

/// Parses a serialized CST into the AST with the default configuration.
///
/// # Arguments
///
/// * `root` - The root node of the serialized CST
/// * `source` - The source text the CST was produced from
///
/// # Returns
///
/// The `Program` node, or an error if the CST carries syntax errors, nests
/// too deeply, or reports offsets outside `source`.
///
/// # Example
///
/// ```rust
/// use ecma_ast::cst::SerializedNode;
/// use ecma_ast::cst_parser::parse_from_cst;
///
/// let json = r#"{
///     "type": "program", "text": "x;", "startIndex": 0, "endIndex": 2, "isNamed": true,
///     "children": [{
///         "type": "expression_statement", "text": "x;", "startIndex": 0, "endIndex": 2,
///         "isNamed": true,
///         "children": [
///             { "type": "identifier", "text": "x", "startIndex": 0, "endIndex": 1, "isNamed": true },
///             { "type": ";", "text": ";", "startIndex": 1, "endIndex": 2, "isNamed": false }
///         ]
///     }]
/// }"#;
/// let cst: SerializedNode = serde_json::from_str(json).unwrap();
/// let program = parse_from_cst(&cst, "x;").unwrap();
/// assert_eq!(program.child_nodes()[0].node_type(), "ExpressionStatement");
/// ```
pub fn parse_from_cst(root: &SerializedNode, source: &str) -> Result<Node, ParseError> {
    parse_from_cst_with_config(root, source, &ParserConfig::default())
}

/// Like [`parse_from_cst`], with an explicit configuration.
pub fn parse_from_cst_with_config(
    root: &SerializedNode,
    source: &str,
    config: &ParserConfig,
) -> Result<Node, ParseError> {
    let diagnostics = collect_syntax_errors(root, source);
    if !diagnostics.is_empty() {
        debug!(count = diagnostics.len(), "serialized CST contains syntax errors");
        return Err(ParseError::Syntax(diagnostics));
    }

    cst_to_ast::transform(root, source, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::TextPoint;

    fn leaf(node_type: &str, named: bool, start: usize, source: &str) -> SerializedNode {
        let text = &source[start..start + node_type_len(node_type, named, source, start)];
        SerializedNode {
            node_type: node_type.to_string(),
            text: text.to_string(),
            start_index: start,
            end_index: start + text.len(),
            start_position: TextPoint::default(),
            end_position: TextPoint::default(),
            children: Vec::new(),
            named_children: Vec::new(),
            is_named: named,
            is_missing: false,
            field_name: None,
        }
    }

    /// Anonymous tokens are as long as their spelling; named leaves run to
    /// the next space or semicolon.
    fn node_type_len(node_type: &str, named: bool, source: &str, start: usize) -> usize {
        if !named {
            return node_type.len();
        }
        source[start..]
            .find(|c: char| c == ' ' || c == ';')
            .unwrap_or(source.len() - start)
    }

    fn parent(node_type: &str, children: Vec<SerializedNode>, source: &str) -> SerializedNode {
        let start = children.first().map_or(0, |c| c.start_index);
        let end = children.last().map_or(0, |c| c.end_index);
        SerializedNode {
            node_type: node_type.to_string(),
            text: source[start..end].to_string(),
            start_index: start,
            end_index: end,
            start_position: TextPoint::default(),
            end_position: TextPoint::default(),
            children,
            named_children: Vec::new(),
            is_named: true,
            is_missing: false,
            field_name: None,
        }
    }

    /// `const x = 42;` as web-tree-sitter would serialize it.
    fn const_declaration(source: &str) -> SerializedNode {
        let declarator = parent(
            "variable_declarator",
            vec![
                leaf("identifier", true, 6, source),
                leaf("=", false, 8, source),
                leaf("number", true, 10, source),
            ],
            source,
        );
        let declaration = parent(
            "lexical_declaration",
            vec![
                leaf("const", false, 0, source),
                declarator,
                leaf(";", false, 12, source),
            ],
            source,
        );
        parent("program", vec![declaration], source)
    }

    #[test]
    fn test_parse_serialized_declaration() {
        let source = "const x = 42;";
        let program = parse_from_cst(&const_declaration(source), source).unwrap();
        assert_eq!(program.node_type(), "Program");
        assert_eq!(program.text(), source);

        let declaration = &program.child_nodes()[0];
        assert_eq!(declaration.node_type(), "VariableDeclaration");
        let declarator = &declaration.child_nodes()[1];
        let parts: Vec<&str> = declarator.significant_children().map(|n| n.text()).collect();
        assert_eq!(parts, ["x", "42"]);
    }

    #[test]
    fn test_error_nodes_are_rejected() {
        let source = "const x = ;";
        let mut root = const_declaration("const x = 42;");
        root.children[0].children[1].children[2] = SerializedNode {
            node_type: "ERROR".to_string(),
            ..leaf(";", false, 10, source)
        };
        let err = parse_from_cst(&root, source).unwrap_err();
        assert!(matches!(err, ParseError::Syntax(_)));
        assert_eq!(err.diagnostics().len(), 1);
    }

    #[test]
    fn test_missing_nodes_are_rejected() {
        let source = "const x = 42";
        let mut root = const_declaration("const x = 42;");
        let semicolon = &mut root.children[0].children[2];
        semicolon.is_missing = true;
        semicolon.start_index = 12;
        semicolon.end_index = 12;
        let err = parse_from_cst(&root, source).unwrap_err();
        assert!(err.diagnostics()[0].message.starts_with("Missing"));
    }

    #[test]
    fn test_offsets_outside_source_are_rejected() {
        let root = const_declaration("const x = 42;");
        let err = parse_from_cst(&root, "const").unwrap_err();
        assert!(matches!(err, ParseError::InvalidPosition { .. }));
    }
}
