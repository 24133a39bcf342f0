//! Pattern parsing
//!
//! ```text
//! Pattern        = PrimaryPattern ('when' Expression)?
//! PrimaryPattern = '_' | '(' Pattern ')' | Type DeconstructionList
//!                | Modifiers Type (Name | '_')
//! ```

use super::declarations::{parse_modifier_list, parse_type};
use super::{JavaParser, eat_next, expect_next, peek, skip_type_at};
use crate::parser::syntax_kind::SyntaxKind;

/// Pattern with an optional `when` guard (case labels only)
pub fn parse_pattern<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    let checkpoint = p.checkpoint();
    parse_primary_pattern(p);

    if peek(p, SyntaxKind::WHEN_KW) {
        p.start_node_at(checkpoint, SyntaxKind::GUARDED_PATTERN);
        eat_next(p, SyntaxKind::WHEN_KW);
        p.skip_trivia();
        super::expressions::parse_expression(p);
        p.finish_node();
    }
}

/// Pattern without a guard, as accepted by `instanceof` and record components
pub fn parse_primary_pattern<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    match p.current_kind() {
        SyntaxKind::UNDERSCORE => {
            p.start_node(SyntaxKind::UNNAMED_PATTERN);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::L_PAREN => {
            p.start_node(SyntaxKind::PARENTHESIZED_PATTERN);
            p.bump();
            parse_pattern(p);
            expect_next(p, SyntaxKind::R_PAREN);
            p.finish_node();
        }
        _ => {
            let record = !p.at(SyntaxKind::FINAL_KW)
                && !p.at(SyntaxKind::AT)
                && skip_type_at(p, 0).is_some_and(|m| p.nth(m) == SyntaxKind::L_PAREN);
            if record {
                p.start_node(SyntaxKind::RECORD_PATTERN);
                parse_type(p);
                parse_deconstruction_list(p);
                p.finish_node();
            } else {
                p.start_node(SyntaxKind::TYPE_TEST_PATTERN);
                parse_pattern_variable(p);
                p.finish_node();
            }
        }
    }
}

/// PatternVariable = Modifiers Type (Name | '_')
fn parse_pattern_variable<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::PATTERN_VARIABLE);
    parse_modifier_list(p);
    parse_type(p);
    p.skip_trivia();
    if p.current_kind().is_name_token() || p.at(SyntaxKind::UNDERSCORE) {
        p.bump();
    } else {
        p.error(format!("expected pattern name, found {:?}", p.current_kind()));
    }
    p.finish_node();
}

/// DeconstructionList = '(' (PrimaryPattern (',' PrimaryPattern)*)? ')'
fn parse_deconstruction_list<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::DECONSTRUCTION_LIST);
    p.expect(SyntaxKind::L_PAREN);
    p.skip_trivia();
    if !p.at(SyntaxKind::R_PAREN) {
        parse_record_component_pattern(p);
        while eat_next(p, SyntaxKind::COMMA) {
            parse_record_component_pattern(p);
        }
    }
    expect_next(p, SyntaxKind::R_PAREN);
    p.finish_node();
}

fn parse_record_component_pattern<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    parse_primary_pattern(p);
}
