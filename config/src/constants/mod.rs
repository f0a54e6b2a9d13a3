//! Centralized configuration values shared across the ECMAScript AST pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use thiserror::Error;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum depth of parse-tree nesting the CST-to-AST visitor accepts.
///
/// Depth is counted in parse-tree levels, not source-level constructs: a single
/// parenthesized expression adds two or three levels. Deeper input is rejected
/// with a nesting error rather than risking stack exhaustion.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MAX_NESTING_DEPTH;
/// assert!(DEFAULT_MAX_NESTING_DEPTH >= 512);
/// ```
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 2_000;

/// Smallest nesting limit a [`ParserConfig`] accepts. A program node, one
/// statement and one token already need three levels.
///
/// # Examples
/// ```
/// use config::constants::MIN_NESTING_DEPTH;
/// assert_eq!(MIN_NESTING_DEPTH, 3);
/// ```
pub const MIN_NESTING_DEPTH: usize = 3;

// =============================================================================
// STACK CONSTANTS
// =============================================================================

/// Remaining stack (in bytes) below which recursive walks allocate a new
/// segment through the `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 128 * 1024;

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

// =============================================================================
// DIAGNOSTIC CONSTANTS
// =============================================================================

/// Number of characters of offending source quoted in a syntax diagnostic.
///
/// # Examples
/// ```
/// use config::constants::DIAGNOSTIC_SNIPPET_CHARS;
/// let snippet: String = "const x = ;".chars().take(DIAGNOSTIC_SNIPPET_CHARS).collect();
/// assert_eq!(snippet, "const x = ;");
/// ```
pub const DIAGNOSTIC_SNIPPET_CHARS: usize = 20;

// =============================================================================
// PARSER CONFIG
// =============================================================================

/// Immutable snapshot of the settings that drive CST-to-AST construction.
///
/// # Examples
/// ```
/// use config::constants::{ParserConfig, DEFAULT_MAX_NESTING_DEPTH};
/// let config = ParserConfig::default();
/// assert_eq!(config.max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest parse-tree level the visitor descends into before giving up.
    pub max_nesting_depth: usize,
}

impl ParserConfig {
    /// Builds a configuration, rejecting limits too small to hold any program.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ParserConfig;
    /// let cfg = ParserConfig::new(64).expect("valid config");
    /// assert_eq!(cfg.max_nesting_depth, 64);
    /// ```
    pub fn new(max_nesting_depth: usize) -> Result<Self, ConfigError> {
        if max_nesting_depth < MIN_NESTING_DEPTH {
            return Err(ConfigError::NestingDepthTooSmall(max_nesting_depth));
        }
        Ok(Self { max_nesting_depth })
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Raised when the nesting limit cannot fit a program, a statement and a token.
    #[error("max_nesting_depth must be >= {min}: {0}", min = MIN_NESTING_DEPTH)]
    NestingDepthTooSmall(usize),
}

#[cfg(test)]
mod tests;
