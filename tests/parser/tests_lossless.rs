//! The CST reproduces its source exactly, trivia included.

use javelin::parser::{FragmentKind, SyntaxKind, parse, parse_fragment};
use rstest::rstest;

use crate::helpers::source_fixtures::*;

#[rstest]
#[case::call(CALL_WITH_THREE_ARGUMENTS)]
#[case::product(PRODUCT_FIELD)]
#[case::while_loop(WHILE_WITH_BODY)]
#[case::if_else(IF_ELSE)]
#[case::foreach(FOREACH_OVER_ITEMS)]
#[case::record(RECORD_POINT)]
#[case::patterns(PATTERNS_IN_SWITCH)]
#[case::kitchen_sink(KITCHEN_SINK)]
#[case::block_comments(DOCUMENTED_CLASS)]
fn test_parse_is_lossless(#[case] source: &str) {
    let parsed = parse(source);
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);
    let root = parsed.syntax();
    assert_eq!(root.kind(), SyntaxKind::JAVA_FILE);
    assert_eq!(root.text().to_string(), source);
}

#[rstest]
#[case::expression("a + b * c", FragmentKind::Expression, SyntaxKind::BINARY_EXPRESSION)]
#[case::statement("while (x) y();", FragmentKind::Statement, SyntaxKind::WHILE_STATEMENT)]
#[case::block("{ int a = 1; }", FragmentKind::CodeBlock, SyntaxKind::CODE_BLOCK)]
#[case::type_element("java.util.Map<K, V>[]", FragmentKind::Type, SyntaxKind::TYPE)]
#[case::pattern("Point(int x, _)", FragmentKind::Pattern, SyntaxKind::RECORD_PATTERN)]
#[case::member("void run() {}", FragmentKind::Member, SyntaxKind::METHOD)]
fn test_fragment_parse(#[case] text: &str, #[case] kind: FragmentKind, #[case] expected: SyntaxKind) {
    let parsed = parse_fragment(text, kind);
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);
    let holder = parsed.syntax();
    assert_eq!(holder.kind(), SyntaxKind::DUMMY_HOLDER);
    assert_eq!(holder.first_child().map(|n| n.kind()), Some(expected));
    assert_eq!(holder.text().to_string(), text);
}

#[test]
fn test_shift_operators_are_glued() {
    let parsed = parse_fragment("a >>> b >> c", FragmentKind::Expression);
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);
    let signs: Vec<_> = parsed
        .syntax()
        .descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| !t.kind().is_trivia() && t.kind() != SyntaxKind::IDENT)
        .map(|t| t.text().to_string())
        .collect();
    assert_eq!(signs, vec![">>>", ">>"]);
}
