//! Statement parsing
//!
//! Statements own their terminating `;`. A `for` initializer is a complete
//! statement (an EMPTY_STATEMENT when omitted), so the loop's own direct `;`
//! separates the condition from the update.

use super::declarations::{class_start_lookahead, parse_class, parse_modifier_list, parse_parameter, parse_type};
use super::expressions::{parse_expression, parse_expression_list_bare};
use super::{
    JavaParser, declaration_lookahead, eat_next, expect_name, expect_next, pattern_lookahead, peek,
};
use crate::parser::kind_set;
use crate::parser::syntax_kind::SyntaxKind;

/// CodeBlock = '{' Statement* '}'
pub fn parse_code_block<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::CODE_BLOCK);
    p.expect(SyntaxKind::L_BRACE);
    parse_statements_until_brace(p, false);
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

fn parse_statements_until_brace<P: JavaParser>(p: &mut P, switch_body: bool) {
    loop {
        p.skip_trivia();
        if p.at_eof() || p.at(SyntaxKind::R_BRACE) {
            break;
        }
        let pos_before = p.get_pos();
        if switch_body && at_switch_label(p) {
            parse_switch_label(p);
        } else {
            parse_statement(p);
        }
        // Safety: if we didn't make progress, force-skip a token
        if p.get_pos() == pos_before && !p.at_eof() {
            p.error(format!("stuck on token: {:?}", p.current_kind()));
            p.bump();
        }
    }
}

/// Statement = Block | ';' | If | While | Do | For | Foreach | Return | Yield
///           | Break | Continue | Throw | Switch | Declaration | ExpressionStatement
pub fn parse_statement<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    match p.current_kind() {
        SyntaxKind::L_BRACE => {
            p.start_node(SyntaxKind::BLOCK_STATEMENT);
            parse_code_block(p);
            p.finish_node();
        }
        SyntaxKind::SEMICOLON => {
            p.start_node(SyntaxKind::EMPTY_STATEMENT);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::IF_KW => parse_if(p),
        SyntaxKind::WHILE_KW => parse_while(p),
        SyntaxKind::DO_KW => parse_do_while(p),
        SyntaxKind::FOR_KW => parse_for(p),
        SyntaxKind::RETURN_KW => {
            p.start_node(SyntaxKind::RETURN_STATEMENT);
            p.bump();
            if !peek(p, SyntaxKind::SEMICOLON) {
                p.skip_trivia();
                parse_expression(p);
            }
            expect_next(p, SyntaxKind::SEMICOLON);
            p.finish_node();
        }
        SyntaxKind::YIELD_KW if at_yield_statement(p) => {
            p.start_node(SyntaxKind::YIELD_STATEMENT);
            p.bump();
            p.skip_trivia();
            parse_expression(p);
            expect_next(p, SyntaxKind::SEMICOLON);
            p.finish_node();
        }
        kind @ (SyntaxKind::BREAK_KW | SyntaxKind::CONTINUE_KW) => {
            let node = if kind == SyntaxKind::BREAK_KW {
                SyntaxKind::BREAK_STATEMENT
            } else {
                SyntaxKind::CONTINUE_STATEMENT
            };
            p.start_node(node);
            p.bump();
            if p.nth(0).is_name_token() {
                expect_name(p);
            }
            expect_next(p, SyntaxKind::SEMICOLON);
            p.finish_node();
        }
        SyntaxKind::THROW_KW => {
            p.start_node(SyntaxKind::THROW_STATEMENT);
            p.bump();
            p.skip_trivia();
            parse_expression(p);
            expect_next(p, SyntaxKind::SEMICOLON);
            p.finish_node();
        }
        SyntaxKind::SWITCH_KW => {
            p.start_node(SyntaxKind::SWITCH_STATEMENT);
            parse_switch_rest(p);
            p.finish_node();
        }
        _ if class_start_lookahead(p) => {
            p.start_node(SyntaxKind::DECLARATION_STATEMENT);
            parse_class(p);
            p.finish_node();
        }
        _ if declaration_lookahead(p).is_some() => parse_declaration_statement(p),
        _ => {
            p.start_node(SyntaxKind::EXPRESSION_STATEMENT);
            parse_expression(p);
            expect_next(p, SyntaxKind::SEMICOLON);
            p.finish_node();
        }
    }
}

/// `yield` is a statement keyword unless it is used as a plain name
fn at_yield_statement<P: JavaParser>(p: &P) -> bool {
    let next = p.nth(1);
    !(kind_set::ASSIGNMENT_OPERATORS.contains(next)
        || matches!(
            next,
            SyntaxKind::DOT
                | SyntaxKind::L_PAREN
                | SyntaxKind::L_BRACKET
                | SyntaxKind::PLUS_PLUS
                | SyntaxKind::MINUS_MINUS
                | SyntaxKind::SEMICOLON
        ))
}

/// Declaration = LocalVariable (',' Declarator)* ';'
fn parse_declaration_statement<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::DECLARATION_STATEMENT);
    parse_local_variables(p);
    expect_next(p, SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// LocalVariable = Modifiers Type Declarator; later declarators carry only
/// the name and initializer
fn parse_local_variables<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::LOCAL_VARIABLE);
    parse_modifier_list(p);
    parse_type(p);
    parse_declarator(p);
    p.finish_node();

    while eat_next(p, SyntaxKind::COMMA) {
        p.skip_trivia();
        p.start_node(SyntaxKind::LOCAL_VARIABLE);
        parse_declarator(p);
        p.finish_node();
    }
}

/// Declarator = Name ('[' ']')* ('=' Expression)?
fn parse_declarator<P: JavaParser>(p: &mut P) {
    expect_name(p);
    while peek(p, SyntaxKind::L_BRACKET) && p.nth(1) == SyntaxKind::R_BRACKET {
        eat_next(p, SyntaxKind::L_BRACKET);
        eat_next(p, SyntaxKind::R_BRACKET);
    }
    if eat_next(p, SyntaxKind::EQ) {
        p.skip_trivia();
        parse_expression(p);
    }
}

/// If = 'if' '(' Expression ')' Statement ('else' Statement)?
fn parse_if<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::IF_STATEMENT);
    p.expect(SyntaxKind::IF_KW);
    parse_parenthesized_condition(p);
    parse_statement(p);
    if eat_next(p, SyntaxKind::ELSE_KW) {
        parse_statement(p);
    }
    p.finish_node();
}

/// While = 'while' '(' Expression ')' Statement
fn parse_while<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::WHILE_STATEMENT);
    p.expect(SyntaxKind::WHILE_KW);
    parse_parenthesized_condition(p);
    parse_statement(p);
    p.finish_node();
}

/// Do = 'do' Statement 'while' '(' Expression ')' ';'
fn parse_do_while<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::DO_WHILE_STATEMENT);
    p.expect(SyntaxKind::DO_KW);
    parse_statement(p);
    expect_next(p, SyntaxKind::WHILE_KW);
    parse_parenthesized_condition(p);
    expect_next(p, SyntaxKind::SEMICOLON);
    p.finish_node();
}

fn parse_parenthesized_condition<P: JavaParser>(p: &mut P) {
    expect_next(p, SyntaxKind::L_PAREN);
    p.skip_trivia();
    parse_expression(p);
    expect_next(p, SyntaxKind::R_PAREN);
}

/// For     = 'for' '(' Init Expression? ';' Update? ')' Statement
/// Foreach = 'for' '(' Parameter ':' Expression ')' Statement
fn parse_for<P: JavaParser>(p: &mut P) {
    let foreach = foreach_lookahead(p);
    let kind = if foreach {
        SyntaxKind::FOREACH_STATEMENT
    } else {
        SyntaxKind::FOR_STATEMENT
    };

    p.start_node(kind);
    p.expect(SyntaxKind::FOR_KW);
    expect_next(p, SyntaxKind::L_PAREN);

    if foreach {
        parse_parameter(p);
        expect_next(p, SyntaxKind::COLON);
        p.skip_trivia();
        parse_expression(p);
    } else {
        parse_for_initializer(p);
        if !peek(p, SyntaxKind::SEMICOLON) {
            p.skip_trivia();
            parse_expression(p);
        }
        expect_next(p, SyntaxKind::SEMICOLON);
        if !peek(p, SyntaxKind::R_PAREN) {
            parse_expression_list_bare(p);
        }
    }

    expect_next(p, SyntaxKind::R_PAREN);
    parse_statement(p);
    p.finish_node();
}

/// Whether `for ( modifiers Type name :` follows
fn foreach_lookahead<P: JavaParser>(p: &P) -> bool {
    if p.nth(1) != SyntaxKind::L_PAREN {
        return false;
    }
    let m = super::skip_modifiers_at(p, 2);
    let Some(m) = super::skip_type_at(p, m) else {
        return false;
    };
    p.nth(m).is_name_token() && p.nth(m + 1) == SyntaxKind::COLON
}

/// Init = ';' | Declaration | ExpressionList ';'
fn parse_for_initializer<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    if p.at(SyntaxKind::SEMICOLON) {
        p.start_node(SyntaxKind::EMPTY_STATEMENT);
        p.bump();
        p.finish_node();
    } else if declaration_lookahead(p).is_some() {
        parse_declaration_statement(p);
    } else {
        p.start_node(SyntaxKind::EXPRESSION_STATEMENT);
        parse_expression_list_bare(p);
        expect_next(p, SyntaxKind::SEMICOLON);
        p.finish_node();
    }
}

// =============================================================================
// Switch
// =============================================================================

/// SwitchRest = 'switch' '(' Expression ')' SwitchBody
///
/// Shared by switch statements and switch expressions; the caller opens
/// the node.
pub fn parse_switch_rest<P: JavaParser>(p: &mut P) {
    p.expect(SyntaxKind::SWITCH_KW);
    parse_parenthesized_condition(p);
    p.skip_trivia();
    p.start_node(SyntaxKind::CODE_BLOCK);
    p.expect(SyntaxKind::L_BRACE);
    parse_statements_until_brace(p, true);
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

fn at_switch_label<P: JavaParser>(p: &P) -> bool {
    p.at(SyntaxKind::CASE_KW)
        || (p.at(SyntaxKind::DEFAULT_KW)
            && matches!(p.nth(1), SyntaxKind::COLON | SyntaxKind::ARROW))
}

/// Label = ('case' CaseLabelElements | 'default') (':' | '->' RuleBody)
fn parse_switch_label<P: JavaParser>(p: &mut P) {
    let checkpoint = p.checkpoint();
    if p.at(SyntaxKind::DEFAULT_KW) {
        p.bump();
    } else {
        p.expect(SyntaxKind::CASE_KW);
        parse_case_label_element_list(p);
    }

    if peek(p, SyntaxKind::ARROW) {
        p.start_node_at(checkpoint, SyntaxKind::SWITCH_LABELED_RULE);
        eat_next(p, SyntaxKind::ARROW);
        p.skip_trivia();
        match p.current_kind() {
            SyntaxKind::L_BRACE => {
                p.start_node(SyntaxKind::BLOCK_STATEMENT);
                parse_code_block(p);
                p.finish_node();
            }
            SyntaxKind::THROW_KW => parse_statement(p),
            _ => {
                p.start_node(SyntaxKind::EXPRESSION_STATEMENT);
                parse_expression(p);
                expect_next(p, SyntaxKind::SEMICOLON);
                p.finish_node();
            }
        }
        p.finish_node();
    } else {
        p.start_node_at(checkpoint, SyntaxKind::SWITCH_LABEL_STATEMENT);
        expect_next(p, SyntaxKind::COLON);
        p.finish_node();
    }
}

/// CaseLabelElements = CaseLabelElement (',' CaseLabelElement)*
fn parse_case_label_element_list<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::CASE_LABEL_ELEMENT_LIST);
    parse_case_label_element(p);
    while eat_next(p, SyntaxKind::COMMA) {
        parse_case_label_element(p);
    }
    p.finish_node();
}

/// CaseLabelElement = 'default' | Pattern | Expression
fn parse_case_label_element<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    if p.at(SyntaxKind::DEFAULT_KW) {
        p.start_node(SyntaxKind::DEFAULT_CASE_LABEL_ELEMENT);
        p.bump();
        p.finish_node();
    } else if pattern_lookahead(p, 0) {
        super::patterns::parse_pattern(p);
    } else {
        parse_expression(p);
    }
}
