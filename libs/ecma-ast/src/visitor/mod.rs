//! # AST Visitors
//!
//! Visitor implementations for CST to AST transformation.
//!
//! ## Structure
//!
//! ```text
//! visitor/
//! ├── mod.rs              - This file
//! └── cst_to_ast/         - CST to AST transformation
//!     ├── mod.rs          - Recursive builder and rule dispatch
//!     ├── tokens.rs       - Terminal classification
//!     ├── literals.rs     - Number, string and regex decoding
//!     ├── declarations.rs - Declarations, functions, classes
//!     ├── statements.rs   - Statement kinds
//!     └── expressions.rs  - Expression kinds
//! ```

pub mod cst_to_ast;
