//! Broken input still yields a complete, lossless tree.

use javelin::parser::parse;
use javelin::tree::SyntaxTree;
use rstest::rstest;

#[rstest]
#[case::missing_semicolon("class A { int x = 1 }")]
#[case::stray_token("class A { void m() { ) } }")]
#[case::unterminated_class("class A { void m() {")]
#[case::garbage_at_top("int x; class A {}")]
fn test_errors_keep_every_character(#[case] source: &str) {
    let parsed = parse(source);
    assert!(!parsed.ok(), "expected errors for {source:?}");
    assert_eq!(parsed.syntax().text().to_string(), source);
    for error in &parsed.errors {
        assert!(u32::from(error.range.end()) as usize <= source.len());
    }
}

#[test]
fn test_session_keeps_parse_errors() {
    let tree = SyntaxTree::parse("class A { void m() { ) } }");
    assert!(!tree.errors().is_empty());
    assert_eq!(tree.text(), "class A { void m() { ) } }");
}
