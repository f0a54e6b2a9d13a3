//! # Config Crate
//!
//! Centralized configuration for the ECMAScript AST pipeline.
//! Limits, stack-growth parameters and diagnostic formatting values are
//! defined here so the parser binding and the AST crate agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ParserConfig, DEFAULT_MAX_NESTING_DEPTH};
//!
//! let config = ParserConfig::default();
//! assert_eq!(config.max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
//!
//! let shallow = ParserConfig::new(16).unwrap();
//! assert!(shallow.max_nesting_depth < config.max_nesting_depth);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated**: Runtime settings are built through checked constructors
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
