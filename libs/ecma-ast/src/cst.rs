//! # Serialized CST Types
//!
//! Defines types for receiving a serialized Concrete Syntax Tree from JavaScript.
//! This allows parsing to happen in web-tree-sitter (browser) and AST conversion
//! to happen in Rust WASM.
//!
//! ## Architecture
//!
//! ```text
//! Browser: ECMAScript Source → web-tree-sitter → Serialized CST (JSON)
//! WASM: Serialized CST → ecma-ast → AST
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ecma_ast::cst::SerializedNode;
//! use ecma_ast::parse_from_cst;
//!
//! let cst: SerializedNode = serde_json::from_str(json)?;
//! let program = parse_from_cst(&cst, source)?;
//! ```
//!
//! `serde_json::from_str` stops at 128 levels of nesting, which a CST of
//! ordinary code can exceed. For deep input, enable serde_json's
//! `unbounded_depth` feature and grow the stack with `serde_stacker`:
//!
//! ```rust,ignore
//! use serde::Deserialize;
//!
//! let mut json = serde_json::Deserializer::from_str(json);
//! json.disable_recursion_limit();
//! let cst = SerializedNode::deserialize(serde_stacker::Deserializer::new(&mut json))?;
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::context::RuleContext;

/// A serialized syntax tree node from web-tree-sitter.
///
/// # Fields
///
/// * `node_type` - The grammar rule name (e.g., "program", "lexical_declaration")
/// * `text` - The source text covered by this node
/// * `start_index` - Byte offset where this node starts
/// * `end_index` - Byte offset where this node ends
/// * `start_position` - Row/column position where this node starts
/// * `end_position` - Row/column position where this node ends
/// * `children` - All child nodes (including anonymous nodes)
/// * `named_children` - Only named child nodes
/// * `is_named` - Whether this is a named node in the grammar
/// * `is_missing` - Whether error recovery inserted this node
/// * `field_name` - The field name if this node is a field child
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedNode {
    /// Node type from grammar (e.g., "program", "identifier", "=")
    #[serde(rename = "type")]
    pub node_type: String,

    /// Source text covered by this node
    pub text: String,

    /// Byte offset where this node starts
    #[serde(rename = "startIndex")]
    pub start_index: usize,

    /// Byte offset where this node ends
    #[serde(rename = "endIndex")]
    pub end_index: usize,

    /// Start position (row, column)
    #[serde(rename = "startPosition", default)]
    pub start_position: TextPoint,

    /// End position (row, column)
    #[serde(rename = "endPosition", default)]
    pub end_position: TextPoint,

    /// All child nodes
    #[serde(default)]
    pub children: Vec<SerializedNode>,

    /// Named children only
    #[serde(rename = "namedChildren", default)]
    pub named_children: Vec<SerializedNode>,

    /// Whether this is a named node
    #[serde(rename = "isNamed")]
    pub is_named: bool,

    /// Whether this node was inserted by error recovery
    #[serde(rename = "isMissing", default)]
    pub is_missing: bool,

    /// Field name if this node is a field child
    #[serde(rename = "fieldName", default)]
    pub field_name: Option<String>,
}

/// Row/column location in source code.
///
/// Both row and column are zero-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPoint {
    /// Zero-based row number
    pub row: usize,
    /// Zero-based column number
    pub column: usize,
}

impl SerializedNode {
    /// Checks if this node is an error node.
    pub fn is_error(&self) -> bool {
        self.node_type == "ERROR"
    }

    /// Checks if this node is a missing node.
    ///
    /// Older serializers encode missing nodes only through a `MISSING` prefix
    /// on the type, so both forms are accepted.
    pub fn is_missing(&self) -> bool {
        self.is_missing || self.node_type.starts_with("MISSING")
    }
}

impl<'a> RuleContext for &'a SerializedNode {
    fn rule_name(&self) -> &str {
        &self.node_type
    }

    fn is_named(&self) -> bool {
        self.is_named
    }

    fn is_error(&self) -> bool {
        SerializedNode::is_error(self)
    }

    fn is_missing(&self) -> bool {
        SerializedNode::is_missing(self)
    }

    fn child_contexts(&self) -> Vec<Self> {
        let node: &'a SerializedNode = self;
        node.children.iter().collect()
    }

    fn byte_range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }
}
