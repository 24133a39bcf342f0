//! Expression parsing
//!
//! Precedence climbing over the Java operator table:
//!
//! ```text
//! Assignment → Conditional → Binary(|| && | ^ & == relational shift + *)
//!     → Unary (prefix, cast) → Postfix (call, qualify, index, ++/--)
//!     → Primary
//! ```
//!
//! Binary, postfix and qualified forms are wrapped around their first
//! operand through a checkpoint, so every operator node owns its operands
//! as direct children.

use super::{JavaParser, cast_lookahead, eat_next, expect_name, expect_next, pattern_lookahead, peek};
use crate::parser::kind_set;
use crate::parser::syntax_kind::SyntaxKind;

/// Binding power of a binary operator; higher binds tighter
fn binary_power(kind: SyntaxKind) -> Option<u8> {
    let power = match kind {
        SyntaxKind::PIPE_PIPE => 1,
        SyntaxKind::AMP_AMP => 2,
        SyntaxKind::PIPE => 3,
        SyntaxKind::CARET => 4,
        SyntaxKind::AMP => 5,
        SyntaxKind::EQ_EQ | SyntaxKind::BANG_EQ => 6,
        SyntaxKind::LT
        | SyntaxKind::GT
        | SyntaxKind::LT_EQ
        | SyntaxKind::GT_EQ
        | SyntaxKind::INSTANCEOF_KW => 7,
        SyntaxKind::LT_LT | SyntaxKind::GT_GT | SyntaxKind::GT_GT_GT => 8,
        SyntaxKind::PLUS | SyntaxKind::MINUS => 9,
        SyntaxKind::STAR | SyntaxKind::SLASH | SyntaxKind::PERCENT => 10,
        _ => return None,
    };
    Some(power)
}

/// The operator at the next non-trivia position, with the number of raw
/// tokens it spans (right shifts are glued from several `>` tokens)
fn peek_operator<P: JavaParser>(p: &P) -> (SyntaxKind, usize) {
    match p.peek_shift() {
        Some(glued) => glued,
        None => (p.nth(0), 1),
    }
}

fn bump_operator<P: JavaParser>(p: &mut P, kind: SyntaxKind, count: usize) {
    p.skip_trivia();
    if count > 1 {
        p.bump_glued(kind, count);
    } else {
        p.bump();
    }
}

/// Expression = Assignment
pub fn parse_expression<P: JavaParser>(p: &mut P) -> bool {
    let start = p.get_pos();
    parse_assignment(p);
    p.get_pos() > start
}

/// Assignment = Conditional (AssignmentOperator Assignment)?
fn parse_assignment<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    let checkpoint = p.checkpoint();
    parse_conditional(p);

    let (op, count) = peek_operator(p);
    if kind_set::ASSIGNMENT_OPERATORS.contains(op) {
        p.start_node_at(checkpoint, SyntaxKind::ASSIGNMENT_EXPRESSION);
        bump_operator(p, op, count);
        p.skip_trivia();
        parse_assignment(p);
        p.finish_node();
    }
}

/// Conditional = Binary ('?' Expression ':' Conditional)?
fn parse_conditional<P: JavaParser>(p: &mut P) {
    let checkpoint = p.checkpoint();
    parse_binary(p, 1);

    if peek(p, SyntaxKind::QUESTION) {
        p.start_node_at(checkpoint, SyntaxKind::CONDITIONAL_EXPRESSION);
        eat_next(p, SyntaxKind::QUESTION);
        p.skip_trivia();
        parse_expression(p);
        expect_next(p, SyntaxKind::COLON);
        p.skip_trivia();
        parse_conditional(p);
        p.finish_node();
    }
}

/// Binary = Unary (op Unary)*, left associative, climbing by binding power
fn parse_binary<P: JavaParser>(p: &mut P, min_power: u8) {
    let checkpoint = p.checkpoint();
    parse_unary(p);

    loop {
        let (op, count) = peek_operator(p);
        if kind_set::ASSIGNMENT_OPERATORS.contains(op) {
            break;
        }
        let Some(power) = binary_power(op) else {
            break;
        };
        if power < min_power {
            break;
        }

        if op == SyntaxKind::INSTANCEOF_KW {
            p.start_node_at(checkpoint, SyntaxKind::INSTANCE_OF_EXPRESSION);
            bump_operator(p, op, count);
            p.skip_trivia();
            if pattern_lookahead(p, 0) {
                super::patterns::parse_primary_pattern(p);
            } else {
                super::declarations::parse_type(p);
            }
            p.finish_node();
            continue;
        }

        p.start_node_at(checkpoint, SyntaxKind::BINARY_EXPRESSION);
        bump_operator(p, op, count);
        p.skip_trivia();
        parse_binary(p, power + 1);
        p.finish_node();
    }
}

/// Unary = PrefixOp Unary | '(' Type ')' Unary | Postfix
fn parse_unary<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    if kind_set::PREFIX_OPERATORS.contains(p.current_kind()) {
        p.start_node(SyntaxKind::PREFIX_EXPRESSION);
        p.bump();
        parse_unary(p);
        p.finish_node();
    } else if cast_lookahead(p) {
        p.start_node(SyntaxKind::TYPE_CAST_EXPRESSION);
        p.bump(); // (
        p.skip_trivia();
        super::declarations::parse_type(p);
        expect_next(p, SyntaxKind::R_PAREN);
        parse_unary(p);
        p.finish_node();
    } else {
        parse_postfix(p);
    }
}

/// Postfix = Primary ('.' Name Arguments? | Arguments | '[' Expression ']' | '++' | '--')*
fn parse_postfix<P: JavaParser>(p: &mut P) {
    let checkpoint = p.checkpoint();
    if !parse_primary(p) {
        return;
    }

    loop {
        match p.nth(0) {
            SyntaxKind::DOT => {
                p.start_node_at(checkpoint, SyntaxKind::REFERENCE_EXPRESSION);
                eat_next(p, SyntaxKind::DOT);
                p.skip_trivia();
                if p.at(SyntaxKind::THIS_KW) || p.at(SyntaxKind::CLASS_KW) {
                    p.bump();
                } else {
                    expect_name(p);
                }
                p.finish_node();
                if peek(p, SyntaxKind::L_PAREN) {
                    p.start_node_at(checkpoint, SyntaxKind::METHOD_CALL_EXPRESSION);
                    parse_argument_list(p);
                    p.finish_node();
                }
            }
            SyntaxKind::L_BRACKET => {
                p.start_node_at(checkpoint, SyntaxKind::ARRAY_ACCESS_EXPRESSION);
                eat_next(p, SyntaxKind::L_BRACKET);
                p.skip_trivia();
                parse_expression(p);
                expect_next(p, SyntaxKind::R_BRACKET);
                p.finish_node();
            }
            SyntaxKind::PLUS_PLUS | SyntaxKind::MINUS_MINUS => {
                p.start_node_at(checkpoint, SyntaxKind::POSTFIX_EXPRESSION);
                p.skip_trivia();
                p.bump();
                p.finish_node();
            }
            _ => break,
        }
    }
}

/// Primary = Literal | 'this' | 'super' | Name Arguments? | '(' Expression ')'
///         | New | Switch
fn parse_primary<P: JavaParser>(p: &mut P) -> bool {
    p.skip_trivia();
    let kind = p.current_kind();
    match kind {
        k if kind_set::LITERALS.contains(k) => {
            p.start_node(SyntaxKind::LITERAL_EXPRESSION);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::THIS_KW => {
            p.start_node(SyntaxKind::THIS_EXPRESSION);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::SUPER_KW => {
            p.start_node(SyntaxKind::REFERENCE_EXPRESSION);
            p.bump();
            p.finish_node();
        }
        k if k.is_name_token() => {
            let checkpoint = p.checkpoint();
            p.start_node(SyntaxKind::REFERENCE_EXPRESSION);
            p.bump();
            p.finish_node();
            if peek(p, SyntaxKind::L_PAREN) {
                p.start_node_at(checkpoint, SyntaxKind::METHOD_CALL_EXPRESSION);
                parse_argument_list(p);
                p.finish_node();
            }
        }
        SyntaxKind::L_PAREN => {
            p.start_node(SyntaxKind::PARENTH_EXPRESSION);
            p.bump();
            p.skip_trivia();
            parse_expression(p);
            expect_next(p, SyntaxKind::R_PAREN);
            p.finish_node();
        }
        SyntaxKind::NEW_KW => parse_new(p),
        SyntaxKind::SWITCH_KW => {
            p.start_node(SyntaxKind::SWITCH_EXPRESSION);
            super::statements::parse_switch_rest(p);
            p.finish_node();
        }
        _ => {
            p.error(format!("expected expression, found {:?}", kind));
            return false;
        }
    }
    true
}

/// New = 'new' (Primitive | Reference) (Arguments | ('[' Expression ']')+)
fn parse_new<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::NEW_EXPRESSION);
    p.expect(SyntaxKind::NEW_KW);
    p.skip_trivia();

    if kind_set::PRIMITIVE_TYPES.contains(p.current_kind()) {
        p.bump();
    } else {
        super::declarations::parse_code_reference(p);
    }

    if peek(p, SyntaxKind::L_PAREN) {
        parse_argument_list(p);
    } else if peek(p, SyntaxKind::L_BRACKET) {
        while peek(p, SyntaxKind::L_BRACKET) {
            eat_next(p, SyntaxKind::L_BRACKET);
            p.skip_trivia();
            if !p.at(SyntaxKind::R_BRACKET) {
                parse_expression(p);
            }
            expect_next(p, SyntaxKind::R_BRACKET);
        }
    } else {
        p.error("expected '(' or '[' after type in new expression".to_string());
    }
    p.finish_node();
}

/// Arguments = '(' (Expression (',' Expression)*)? ')'
pub fn parse_argument_list<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::EXPRESSION_LIST);
    p.expect(SyntaxKind::L_PAREN);
    p.skip_trivia();
    if !p.at(SyntaxKind::R_PAREN) {
        parse_expression(p);
        while eat_next(p, SyntaxKind::COMMA) {
            p.skip_trivia();
            parse_expression(p);
        }
    }
    expect_next(p, SyntaxKind::R_PAREN);
    p.finish_node();
}

/// Comma-separated expressions without brackets, as in a `for` update
pub fn parse_expression_list_bare<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    let checkpoint = p.checkpoint();
    parse_expression(p);
    if peek(p, SyntaxKind::COMMA) {
        p.start_node_at(checkpoint, SyntaxKind::EXPRESSION_LIST);
        while eat_next(p, SyntaxKind::COMMA) {
            p.skip_trivia();
            parse_expression(p);
        }
        p.finish_node();
    }
}
