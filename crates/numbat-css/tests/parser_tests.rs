//! Integration tests for the stylesheet parser.

use numbat_css::{ColorValue, CssParseError, SelectorKind, Unit, Value, parse_stylesheet};

#[test]
fn test_whitespace_separates_selectors_into_one_flat_group() {
    // No combinator semantics: all three alternatives land in one rule.
    let sheet = parse_stylesheet(".className #idName tag { color: red; }").unwrap();
    assert_eq!(sheet.rules.len(), 1);

    let selectors = &sheet.rules[0].selectors;
    assert_eq!(selectors.len(), 3);
    assert_eq!(selectors[0].kind, SelectorKind::Class);
    assert_eq!(selectors[0].name, "className");
    assert_eq!(selectors[1].kind, SelectorKind::Id);
    assert_eq!(selectors[1].name, "idName");
    assert_eq!(selectors[2].kind, SelectorKind::Tag);
    assert_eq!(selectors[2].name, "tag");
}

#[test]
fn test_comma_separated_selectors() {
    let sheet = parse_stylesheet("h1, h2, .title { margin: 0px; }").unwrap();
    let selectors = &sheet.rules[0].selectors;
    assert_eq!(selectors.len(), 3);
    assert_eq!(selectors[2].kind, SelectorKind::Class);
}

#[test]
fn test_multiple_rules_and_declarations() {
    let sheet = parse_stylesheet(
        "body { background: #1e1e2e; padding: 2em; }\nh1 { color: red; }",
    )
    .unwrap();
    assert_eq!(sheet.rules.len(), 2);

    let body = &sheet.rules[0];
    assert_eq!(body.declarations.len(), 2);
    assert_eq!(body.declarations[0].name, "background");
    assert_eq!(
        body.declarations[0].value,
        Value::Color(ColorValue::opaque(0x1e, 0x1e, 0x2e))
    );
    assert_eq!(body.declarations[1].value, Value::Length(2.0, Unit::Em));

    assert_eq!(sheet.rules[1].declarations[0].value, Value::keyword("red"));
}

#[test]
fn test_empty_rule_body() {
    let sheet = parse_stylesheet("p { }").unwrap();
    assert_eq!(sheet.rules.len(), 1);
    assert!(sheet.rules[0].declarations.is_empty());
}

#[test]
fn test_hyphenated_names_parse() {
    let sheet = parse_stylesheet(".nav-bar { justify-content: space-between; }").unwrap();
    let rule = &sheet.rules[0];
    assert_eq!(rule.selectors[0].name, "nav-bar");
    assert_eq!(rule.declarations[0].name, "justify-content");
    assert_eq!(rule.declarations[0].value, Value::keyword("space-between"));
}

#[test]
fn test_viewport_units() {
    let sheet = parse_stylesheet("div { width: 50vw; height: 100vh; }").unwrap();
    let decls = &sheet.rules[0].declarations;
    assert_eq!(decls[0].value, Value::Length(50.0, Unit::Vw));
    assert_eq!(decls[1].value, Value::Length(100.0, Unit::Vh));
}

#[test]
fn test_unknown_unit_is_fatal() {
    assert_eq!(
        parse_stylesheet("p { width: 10pt; }"),
        Err(CssParseError::UnknownUnit {
            unit: "pt".to_string(),
        })
    );
}

#[test]
fn test_unclosed_block_is_fatal() {
    assert_eq!(
        parse_stylesheet("p { color: red;"),
        Err(CssParseError::UnexpectedEndOfInput)
    );
}
