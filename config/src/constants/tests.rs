//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane.
#[test]
fn default_constants_are_valid() {
    let cfg = ParserConfig::default();
    assert!(cfg.max_nesting_depth >= MIN_NESTING_DEPTH);
    assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
    assert!(DIAGNOSTIC_SNIPPET_CHARS > 0);
}

/// Validates the builder rejects limits below the minimum.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        ParserConfig::new(2).unwrap_err(),
        ConfigError::NestingDepthTooSmall(2)
    );
    assert_eq!(
        ParserConfig::new(MIN_NESTING_DEPTH).unwrap().max_nesting_depth,
        MIN_NESTING_DEPTH
    );
}

#[test]
fn config_error_message_names_the_limit() {
    let message = ConfigError::NestingDepthTooSmall(1).to_string();
    assert!(message.contains(">= 3"));
    assert!(message.ends_with(": 1"));
}
