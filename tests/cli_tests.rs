use serde_json::json;
use sift_lang::cli::{execute_parse, function_to_json, CliError, OutputFormat, ParseOptions, ParseResult};
use sift_lang::{parse, ParseError};

fn options(text: &str) -> ParseOptions {
    ParseOptions {
        text: text.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_function_to_json() {
    let func = parse(r#"and(eq("artist", true), lt("length", 180), custom(2.5))"#).unwrap();

    assert_eq!(
        function_to_json(&func),
        json!({
            "function": "and",
            "kind": "operator",
            "args": [
                {"function": "eq", "kind": "comparator", "args": ["artist", true]},
                {"function": "lt", "kind": "comparator", "args": ["length", 180]},
                {"function": "custom", "args": [2.5]}
            ]
        })
    );
}

#[test]
fn test_execute_parse_json() {
    let result = execute_parse(&options(r#"eq("genre", "pop")"#)).unwrap();
    match result {
        ParseResult::Rendered(output) => {
            let value: serde_json::Value = serde_json::from_str(&output).unwrap();
            assert_eq!(value["function"], "eq");
            assert_eq!(value["args"][1], "pop");
        }
        other => panic!("Expected rendered output, got {:?}", other),
    }
}

#[test]
fn test_execute_parse_dsl_is_canonical() {
    let opts = ParseOptions {
        format: OutputFormat::Dsl,
        ..options(r#"and( eq( "a" ,1 ),eq("b",2.0) )"#)
    };
    match execute_parse(&opts).unwrap() {
        ParseResult::Rendered(output) => assert_eq!(output, r#"and(eq("a", 1), eq("b", 2.0))"#),
        other => panic!("Expected rendered output, got {:?}", other),
    }
}

#[test]
fn test_syntax_only() {
    let opts = ParseOptions {
        syntax_only: true,
        ..options("foo()")
    };
    assert!(matches!(execute_parse(&opts).unwrap(), ParseResult::SyntaxValid));
}

#[test]
fn test_parse_error_surfaces() {
    let err = execute_parse(&options(r#"eq("a", 1"#)).unwrap_err();
    assert!(matches!(err, CliError::Parse(ParseError::Syntax { .. })));
    assert!(err.to_string().starts_with("Parse error: Expected"));
}

#[test]
fn test_blank_text_is_empty_input() {
    let err = execute_parse(&options("  ")).unwrap_err();
    assert!(matches!(err, CliError::Parse(ParseError::EmptyInput)));
}
