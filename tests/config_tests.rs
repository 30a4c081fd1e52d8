// tests/config_tests.rs
//
// Kept to a single test: it mutates process environment variables.

use sift_lang::config::{ParserConfig, DEFAULT_MAX_DEPTH};
use sift_lang::{parse_with_config, ParseError};

#[test]
fn test_from_env() {
    unsafe {
        std::env::set_var("SIFT_MAX_DEPTH", "abc");
        std::env::set_var("SIFT_STRIP_CODE_FENCES", "nonsense");
    }
    let config = ParserConfig::from_env();
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    assert!(config.strip_code_fences);

    unsafe {
        std::env::set_var("SIFT_MAX_DEPTH", "3");
        std::env::set_var("SIFT_STRIP_CODE_FENCES", "0");
    }
    let config = ParserConfig::from_env();
    assert_eq!(config.max_depth, 3);
    assert!(!config.strip_code_fences);

    assert!(parse_with_config(r#"not(not(eq("a", 1)))"#, &config).is_ok());
    assert!(matches!(
        parse_with_config(r#"not(not(not(eq("a", 1))))"#, &config),
        Err(ParseError::NestingTooDeep { limit: 3, .. })
    ));

    unsafe {
        std::env::remove_var("SIFT_MAX_DEPTH");
        std::env::remove_var("SIFT_STRIP_CODE_FENCES");
    }
    assert_eq!(ParserConfig::from_env(), ParserConfig::default());
}
