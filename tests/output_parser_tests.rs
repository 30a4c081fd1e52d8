use sift_lang::{
    Argument, Comparator, Operator, OutputParser, ParseError, ParserConfig, StructuredQueryParser,
};

#[test]
fn test_parse() {
    let parser = StructuredQueryParser::new();
    let func = parser.parse(r#"eq("genre", "pop")"#).unwrap();
    assert_eq!(func.name, "eq");
    assert_eq!(func.args[1], Argument::String("pop".into()));
}

#[test]
fn test_parse_with_prompt_ignores_prompt() {
    let parser = StructuredQueryParser::new();
    let text = r#"and(gt("year", 2000), lt("length", 180))"#;

    let plain = parser.parse(text).unwrap();
    let prompted = parser
        .parse_with_prompt(text, "Find songs after 2000 shorter than three minutes")
        .unwrap();
    assert_eq!(plain, prompted);

    let err = parser.parse_with_prompt("", "anything").unwrap_err();
    assert_eq!(err, ParseError::EmptyInput);
}

#[test]
fn test_type_name() {
    assert_eq!(StructuredQueryParser::new().type_name(), "structured_query_parser");
}

#[test]
fn test_format_instructions_list_vocabularies() {
    let instructions = StructuredQueryParser::new().format_instructions();
    for op in Operator::ALL {
        assert!(instructions.contains(op.as_str()));
    }
    for cmp in Comparator::ALL {
        assert!(instructions.contains(cmp.as_str()), "missing {}", cmp);
    }
}

#[test]
fn test_code_fence_stripped_by_default() {
    let parser = StructuredQueryParser::new();
    let func = parser.parse("```\nlt(\"length\", 180)\n```").unwrap();
    assert_eq!(func.name, "lt");
    assert_eq!(func.args[1], Argument::Integer(180));
}

#[test]
fn test_code_fence_kept_when_disabled() {
    let parser =
        StructuredQueryParser::with_config(ParserConfig::default().with_strip_code_fences(false));
    let result = parser.parse("```\nlt(\"length\", 180)\n```");
    assert!(matches!(result, Err(ParseError::Lex(_))));
}

#[test]
fn test_depth_limit_applies() {
    let parser = StructuredQueryParser::with_config(ParserConfig::default().with_max_depth(1));
    assert!(parser.parse(r#"eq("a", 1)"#).is_ok());
    assert!(matches!(
        parser.parse(r#"not(eq("a", 1))"#),
        Err(ParseError::NestingTooDeep { limit: 1, .. })
    ));
}

#[test]
fn test_usable_as_trait_object() {
    let parsers: Vec<Box<dyn OutputParser<Output = sift_lang::Function, Error = ParseError>>> =
        vec![Box::new(StructuredQueryParser::new())];

    for parser in &parsers {
        assert!(parser.parse("foo()").is_ok());
    }
}

#[test]
fn test_fenced_error_positions_refer_to_original_text() {
    let parser = StructuredQueryParser::new();

    let err = parser.parse("```\neq(\"a\" 1)\n```").unwrap_err();
    let position = err.position().unwrap();
    assert_eq!(position.offset, 11);
    assert_eq!(position.line, 2);
    assert_eq!(position.column, 8);
    assert!(err.to_string().contains("line 2, column 8"));

    let err = parser.parse("```text\nand(\n  eq(\"a\", 1),\n  #)\n```").unwrap_err();
    let position = err.position().unwrap();
    assert_eq!(position.line, 4);
    assert_eq!(position.column, 3);
}

#[test]
fn test_unfenced_error_positions_unchanged() {
    let parser = StructuredQueryParser::new();
    let err = parser.parse("eq(\"a\" 1)").unwrap_err();
    let position = err.position().unwrap();
    assert_eq!((position.offset, position.line, position.column), (7, 1, 8));
}
