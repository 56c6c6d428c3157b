//! Integration tests for specificity ordering and styled-tree construction.

use numbat_css::{
    ColorValue, Display, SelectorKind, Value, build_styled_tree, parse_stylesheet,
    sort_by_specificity,
};
use numbat_html::parse_document;

#[test]
fn test_sorted_sheet_groups_and_explodes() {
    let sheet = parse_stylesheet(
        "h1 { color: red; } .title, #header { color: blue; } p { color: black; }",
    )
    .unwrap();
    let sorted = sort_by_specificity(&sheet);

    // The selector group explodes into one rule per alternative, then the
    // rules partition into Tag, Class, Id with input order kept per group.
    let kinds: Vec<SelectorKind> = sorted
        .rules
        .iter()
        .map(|rule| rule.selectors[0].kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            SelectorKind::Tag,
            SelectorKind::Tag,
            SelectorKind::Class,
            SelectorKind::Id
        ]
    );
    assert_eq!(sorted.rules[0].selectors[0].name, "h1");
    assert_eq!(sorted.rules[1].selectors[0].name, "p");
    assert_eq!(sorted.rules[2].selectors[0].name, "title");
    assert_eq!(sorted.rules[3].selectors[0].name, "header");
}

#[test]
fn test_id_beats_class_beats_tag_regardless_of_source_order() {
    let tree = parse_document("<h1 class=\"x\" id=\"y\">Hello</h1>").unwrap();
    let sheet = parse_stylesheet(
        "#y { color: blue; } .x { color: green; } h1 { color: black; }",
    )
    .unwrap();
    let styled = build_styled_tree(&tree, &sheet);
    assert_eq!(styled.value("color"), Some(&Value::keyword("blue")));
}

#[test]
fn test_id_rule_styles_matching_element() {
    let tree = parse_document("<h1 id='heading1'>Hello</h1>").unwrap();
    let sheet = parse_stylesheet("#heading1 { color: red; }").unwrap();
    let styled = build_styled_tree(&tree, &sheet);

    assert_eq!(styled.property_map.len(), 1);
    assert_eq!(styled.value("color"), Some(&Value::keyword("red")));

    // The text child mirrors the document tree but matches nothing.
    assert_eq!(styled.children.len(), 1);
    assert!(styled.children[0].property_map.is_empty());
}

#[test]
fn test_selector_group_styles_both_elements() {
    let tree = parse_document("<div id=\"header\"><h1 class=\"title\">My Blog</h1></div>").unwrap();
    let sheet = parse_stylesheet(".title, #header { color: #ffff00; }").unwrap();
    let styled = build_styled_tree(&tree, &sheet);

    let yellow = Value::Color(ColorValue::opaque(0xff, 0xff, 0x00));
    assert_eq!(styled.value("color"), Some(&yellow));
    assert_eq!(styled.children[0].value("color"), Some(&yellow));
    assert!(styled.children[0].children[0].property_map.is_empty());
}

#[test]
fn test_class_matching_is_whole_string() {
    let tree = parse_document("<li class=\"list__item active\">x</li>").unwrap();
    let sheet = parse_stylesheet(".active { color: red; } .list__item { color: blue; }").unwrap();
    let styled = build_styled_tree(&tree, &sheet);

    // Class comparison is against the whole attribute value, so neither
    // single-token selector matches the two-token class list.
    assert_eq!(styled.value("color"), None);
}

#[test]
fn test_display_from_property_and_tag_defaults() {
    let tree = parse_document("<div><span>a</span><style>b</style></div>").unwrap();
    let sheet = parse_stylesheet("span { display: block; }").unwrap();
    let styled = build_styled_tree(&tree, &sheet);

    assert_eq!(styled.display(), Display::Block);
    assert_eq!(styled.children[0].display(), Display::Block);
    assert_eq!(styled.children[1].display(), Display::None);
}

#[test]
fn test_styled_tree_serialization_shape() {
    let tree = parse_document("<p>hi</p>").unwrap();
    let sheet = parse_stylesheet("p { margin: 4px; }").unwrap();
    let styled = build_styled_tree(&tree, &sheet);

    let value = serde_json::to_value(&styled).unwrap();
    assert_eq!(value["node"]["type"], "element");
    assert_eq!(value["node"]["tagName"], "p");
    assert_eq!(value["propertyMap"]["margin"], serde_json::json!([4.0, "px"]));
    assert_eq!(value["children"][0]["node"]["type"], "text");
    assert_eq!(value["children"][0]["propertyMap"], serde_json::json!({}));
}
