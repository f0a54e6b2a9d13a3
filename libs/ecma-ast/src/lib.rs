//! # ECMAScript AST Crate
//!
//! Converts a tree-sitter CST (Concrete Syntax Tree) into a uniform, typed AST
//! for ECMAScript programs. Every node carries its exact source text and byte
//! position.
//!
//! ## Architecture
//!
//! ### Native (CLI/Server)
//!
//! ```text
//! ECMAScript Source → ecma-parser (tree-sitter CST) → ecma-ast (AST)
//! ```
//!
//! ### Browser (WASM)
//!
//! ```text
//! ECMAScript Source → web-tree-sitter (JS) → Serialized CST → ecma-ast (AST)
//! ```
//!
//! ## Usage
//!
//! ### Native Parsing
//!
//! ```rust
//! let program = ecma_ast::parse("const x = 42;").unwrap();
//! assert_eq!(program.node_type(), "Program");
//! assert_eq!(program.child_nodes()[0].node_type(), "VariableDeclaration");
//!
//! // syntax errors produce no tree
//! assert!(ecma_ast::parse("const x = ;").is_none());
//! ```
//!
//! ### Browser Parsing (from serialized CST)
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
//!
//! ## Design Principles
//!
//! - **Two node shapes**: `Token` leaves have no child list; `Composite` nodes always do
//! - **Source Mapping**: `&source[node.position()] == node.text()` for every node
//! - **Total over valid syntax**: unmapped grammar rules become `Unknown` nodes
//! - **Immutable trees**: rewriting builds new trees, see [`transform`]
//! - **Browser-Safe**: without `native-parser` the crate needs no C toolchain

pub mod analysis;
pub mod ast;
pub mod context;
pub mod cst;
pub mod cst_parser;
pub mod diagnostic;
pub mod error;
pub mod nodes;
#[cfg(feature = "native-parser")]
pub mod parser;
pub mod position;
pub mod rule;
pub mod transform;
pub mod traverse;
pub mod validate;
pub mod visitor;

// Re-exports for convenience
pub use context::RuleContext;
pub use cst::SerializedNode;
pub use cst_parser::{parse_from_cst, parse_from_cst_with_config};
pub use diagnostic::{Diagnostic, Severity};
pub use error::ParseError;
pub use nodes::{Composite, DeclarationKind, LiteralValue, Node, NodeKind, Token, TokenKind};
#[cfg(feature = "native-parser")]
pub use parser::{parse, parse_with_diagnostics, Parser};
pub use position::{Point, Position};
pub use rule::RuleKind;
