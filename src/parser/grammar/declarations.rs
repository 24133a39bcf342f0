//! Declaration parsing: files, imports, classes, members, types and modifiers
//!
//! Member kinds are only known after the modifiers, type and name have been
//! read, so members start from a checkpoint and are wrapped once the shape
//! is clear.

use super::{
    JavaParser, eat_next, expect_name, expect_next, peek, skip_modifiers_at,
};
use crate::parser::kind_set;
use crate::parser::syntax_kind::SyntaxKind;

/// The flavour of a class body, which decides the member forms it accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassFlavor {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

/// JavaFile = PackageStatement? ImportList ClassDeclaration*
pub fn parse_java_file<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::JAVA_FILE);
    p.skip_trivia();

    if p.at(SyntaxKind::PACKAGE_KW) {
        parse_package_statement(p);
        p.skip_trivia();
    }

    p.start_node(SyntaxKind::IMPORT_LIST);
    if p.at(SyntaxKind::IMPORT_KW) {
        parse_import(p);
        while peek(p, SyntaxKind::IMPORT_KW) {
            p.skip_trivia();
            parse_import(p);
        }
    }
    p.finish_node();

    while !p.at_eof() {
        let pos_before = p.get_pos();
        p.skip_trivia();
        if p.at_eof() {
            break;
        }
        if p.at(SyntaxKind::SEMICOLON) {
            p.bump();
        } else if class_start_lookahead(p) {
            parse_class(p);
        } else {
            p.error_recover(
                format!("expected class declaration, found {:?}", p.current_kind()),
                &[
                    SyntaxKind::CLASS_KW,
                    SyntaxKind::INTERFACE_KW,
                    SyntaxKind::PUBLIC_KW,
                    SyntaxKind::R_BRACE,
                ],
            );
        }
        // Safety: if we didn't make progress, force-skip a token
        if p.get_pos() == pos_before && !p.at_eof() {
            p.error(format!("stuck on token: {:?}", p.current_kind()));
            p.bump();
        }
    }

    p.finish_node();
}

/// PackageStatement = 'package' CodeReference ';'
fn parse_package_statement<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::PACKAGE_STATEMENT);
    p.expect(SyntaxKind::PACKAGE_KW);
    parse_code_reference(p);
    expect_next(p, SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// Import = 'import' 'static'? CodeReference ('.' '*')? ';'
fn parse_import<P: JavaParser>(p: &mut P) {
    let kind = if p.nth(1) == SyntaxKind::STATIC_KW {
        SyntaxKind::IMPORT_STATIC_STATEMENT
    } else {
        SyntaxKind::IMPORT_STATEMENT
    };
    p.start_node(kind);
    p.expect(SyntaxKind::IMPORT_KW);
    eat_next(p, SyntaxKind::STATIC_KW);
    parse_code_reference(p);
    if peek(p, SyntaxKind::DOT) && p.nth(1) == SyntaxKind::STAR {
        eat_next(p, SyntaxKind::DOT);
        eat_next(p, SyntaxKind::STAR);
    }
    expect_next(p, SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// Whether a class, interface, enum, record or annotation type declaration
/// starts here (after any modifiers)
pub(crate) fn class_start_lookahead<P: JavaParser>(p: &P) -> bool {
    let m = skip_modifiers_at(p, 0);
    match p.nth(m) {
        SyntaxKind::CLASS_KW | SyntaxKind::INTERFACE_KW | SyntaxKind::ENUM_KW => true,
        SyntaxKind::AT => p.nth(m + 1) == SyntaxKind::INTERFACE_KW,
        SyntaxKind::RECORD_KW => {
            p.nth(m + 1).is_name_token()
                && matches!(p.nth(m + 2), SyntaxKind::L_PAREN | SyntaxKind::LT)
        }
        _ => false,
    }
}

/// ClassDeclaration = Modifiers ClassKeyword Name TypeParameters? RecordHeader?
///                    ExtendsList? ImplementsList? ClassBody
pub fn parse_class<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    let checkpoint = p.checkpoint();
    parse_modifier_list(p);
    p.start_node_at(checkpoint, SyntaxKind::CLASS);
    parse_class_rest(p);
    p.finish_node();
}

/// Everything after the modifier list; the CLASS node is already open
fn parse_class_rest<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    let flavor = match p.current_kind() {
        SyntaxKind::INTERFACE_KW => ClassFlavor::Interface,
        SyntaxKind::ENUM_KW => ClassFlavor::Enum,
        SyntaxKind::RECORD_KW => ClassFlavor::Record,
        SyntaxKind::AT => ClassFlavor::Annotation,
        _ => ClassFlavor::Class,
    };
    match flavor {
        ClassFlavor::Annotation => {
            p.bump(); // @
            expect_next(p, SyntaxKind::INTERFACE_KW);
        }
        ClassFlavor::Class => {
            p.expect(SyntaxKind::CLASS_KW);
        }
        _ => p.bump(),
    }
    expect_name(p);

    if peek(p, SyntaxKind::LT) {
        parse_type_parameter_list(p);
    }
    if flavor == ClassFlavor::Record && peek(p, SyntaxKind::L_PAREN) {
        parse_record_header(p);
    }
    if peek(p, SyntaxKind::EXTENDS_KW) {
        parse_reference_list(p, SyntaxKind::EXTENDS_LIST, SyntaxKind::EXTENDS_KW);
    }
    if peek(p, SyntaxKind::IMPLEMENTS_KW) {
        parse_reference_list(p, SyntaxKind::IMPLEMENTS_LIST, SyntaxKind::IMPLEMENTS_KW);
    }

    parse_class_body(p, flavor);
}

/// ClassBody = '{' Member* '}'
fn parse_class_body<P: JavaParser>(p: &mut P, flavor: ClassFlavor) {
    if !expect_next(p, SyntaxKind::L_BRACE) {
        return;
    }
    loop {
        p.skip_trivia();
        if p.at_eof() || p.at(SyntaxKind::R_BRACE) {
            break;
        }
        let pos_before = p.get_pos();
        parse_member(p, flavor);
        if p.get_pos() == pos_before && !p.at_eof() {
            p.error(format!("stuck on token: {:?}", p.current_kind()));
            p.bump();
        }
    }
    p.expect(SyntaxKind::R_BRACE);
}

/// Member = ';' | ClassDeclaration | Initializer | Method | AnnotationMethod | Field
pub fn parse_member<P: JavaParser>(p: &mut P, flavor: ClassFlavor) {
    p.skip_trivia();
    if p.at(SyntaxKind::SEMICOLON) {
        p.bump();
        return;
    }
    if class_start_lookahead(p) {
        parse_class(p);
        return;
    }

    let checkpoint = p.checkpoint();
    parse_modifier_list(p);

    match p.nth(0) {
        SyntaxKind::L_BRACE => {
            p.start_node_at(checkpoint, SyntaxKind::CLASS_INITIALIZER);
            super::statements::parse_code_block(p);
            p.finish_node();
        }
        SyntaxKind::LT => {
            p.start_node_at(checkpoint, SyntaxKind::METHOD);
            parse_type_parameter_list(p);
            if !(p.nth(0).is_name_token() && p.nth(1) == SyntaxKind::L_PAREN) {
                parse_type(p);
            }
            expect_name(p);
            parse_method_rest(p, false);
            p.finish_node();
        }
        name if name.is_name_token() && p.nth(1) == SyntaxKind::L_PAREN => {
            // Constructor
            p.start_node_at(checkpoint, SyntaxKind::METHOD);
            expect_name(p);
            parse_method_rest(p, false);
            p.finish_node();
        }
        name if name.is_name_token()
            && flavor == ClassFlavor::Record
            && p.nth(1) == SyntaxKind::L_BRACE =>
        {
            // Compact canonical constructor
            p.start_node_at(checkpoint, SyntaxKind::METHOD);
            expect_name(p);
            super::statements::parse_code_block(p);
            p.finish_node();
        }
        _ => {
            parse_type(p);
            let named = expect_name(p);
            if named && peek(p, SyntaxKind::L_PAREN) {
                let kind = if flavor == ClassFlavor::Annotation {
                    SyntaxKind::ANNOTATION_METHOD
                } else {
                    SyntaxKind::METHOD
                };
                p.start_node_at(checkpoint, kind);
                parse_method_rest(p, kind == SyntaxKind::ANNOTATION_METHOD);
                p.finish_node();
            } else if named {
                p.start_node_at(checkpoint, SyntaxKind::FIELD);
                parse_dimensions(p);
                if eat_next(p, SyntaxKind::EQ) {
                    p.skip_trivia();
                    super::expressions::parse_expression(p);
                }
                expect_next(p, SyntaxKind::SEMICOLON);
                p.finish_node();
            } else {
                // The name diagnostic is already reported; swallow the rest
                p.start_node_at(checkpoint, SyntaxKind::ERROR);
                while !p.at_eof() && !p.at_any(&[SyntaxKind::SEMICOLON, SyntaxKind::R_BRACE]) {
                    p.bump();
                }
                p.eat(SyntaxKind::SEMICOLON);
                p.finish_node();
            }
        }
    }
}

/// MethodRest = Parameters Dims? ThrowsList? ('default' Value)? (CodeBlock | ';')
fn parse_method_rest<P: JavaParser>(p: &mut P, annotation_method: bool) {
    parse_parameter_list(p);
    parse_dimensions(p);
    if peek(p, SyntaxKind::THROWS_KW) {
        parse_reference_list(p, SyntaxKind::THROWS_LIST, SyntaxKind::THROWS_KW);
    }
    if annotation_method && eat_next(p, SyntaxKind::DEFAULT_KW) {
        parse_annotation_value(p);
    }
    if peek(p, SyntaxKind::L_BRACE) {
        super::statements::parse_code_block(p);
    } else {
        expect_next(p, SyntaxKind::SEMICOLON);
    }
}

fn parse_dimensions<P: JavaParser>(p: &mut P) {
    while peek(p, SyntaxKind::L_BRACKET) && p.nth(1) == SyntaxKind::R_BRACKET {
        eat_next(p, SyntaxKind::L_BRACKET);
        eat_next(p, SyntaxKind::R_BRACKET);
    }
}

// =============================================================================
// Modifiers and annotations
// =============================================================================

/// Modifiers = (ModifierKeyword | Annotation)*
///
/// Always produces a MODIFIER_LIST node, empty when there are no modifiers.
pub fn parse_modifier_list<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::MODIFIER_LIST);
    loop {
        let kind = p.nth(0);
        let is_default_label = kind == SyntaxKind::DEFAULT_KW
            && matches!(p.nth(1), SyntaxKind::COLON | SyntaxKind::ARROW);
        if kind_set::MODIFIER_KEYWORDS.contains(kind) && !is_default_label {
            p.skip_trivia();
            p.bump();
        } else if kind == SyntaxKind::AT && p.nth(1) != SyntaxKind::INTERFACE_KW {
            p.skip_trivia();
            parse_annotation(p);
        } else {
            break;
        }
    }
    p.finish_node();
}

/// Annotation = '@' CodeReference AnnotationParameters?
fn parse_annotation<P: JavaParser>(p: &mut P) {
    p.start_node(SyntaxKind::ANNOTATION);
    p.expect(SyntaxKind::AT);
    parse_code_reference(p);
    if peek(p, SyntaxKind::L_PAREN) {
        p.skip_trivia();
        p.start_node(SyntaxKind::ANNOTATION_PARAMETER_LIST);
        p.bump();
        p.skip_trivia();
        if !p.at(SyntaxKind::R_PAREN) {
            parse_name_value_pair(p);
            while eat_next(p, SyntaxKind::COMMA) {
                parse_name_value_pair(p);
            }
        }
        expect_next(p, SyntaxKind::R_PAREN);
        p.finish_node();
    }
    p.finish_node();
}

/// NameValuePair = (Name '=')? Value
fn parse_name_value_pair<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::NAME_VALUE_PAIR);
    if p.current_kind().is_name_token() && p.nth(1) == SyntaxKind::EQ {
        p.bump();
        eat_next(p, SyntaxKind::EQ);
    }
    parse_annotation_value(p);
    p.finish_node();
}

/// Value = Annotation | Expression
fn parse_annotation_value<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    if p.at(SyntaxKind::AT) {
        parse_annotation(p);
    } else {
        super::expressions::parse_expression(p);
    }
}

// =============================================================================
// Types and references
// =============================================================================

/// CodeReference = Name TypeArguments? ('.' Name TypeArguments?)*
///
/// Qualified references nest: the qualifier is itself a JAVA_CODE_REFERENCE.
pub fn parse_code_reference<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    let checkpoint = p.checkpoint();
    p.start_node(SyntaxKind::JAVA_CODE_REFERENCE);
    expect_name(p);
    if peek(p, SyntaxKind::LT) {
        parse_type_arguments(p);
    }
    p.finish_node();

    while peek(p, SyntaxKind::DOT) && p.nth(1).is_name_token() {
        p.start_node_at(checkpoint, SyntaxKind::JAVA_CODE_REFERENCE);
        eat_next(p, SyntaxKind::DOT);
        expect_name(p);
        if peek(p, SyntaxKind::LT) {
            parse_type_arguments(p);
        }
        p.finish_node();
    }
}

/// TypeArguments = '<' (Type (',' Type)*)? '>'
fn parse_type_arguments<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::REFERENCE_PARAMETER_LIST);
    p.expect(SyntaxKind::LT);
    p.skip_trivia();
    if !p.at(SyntaxKind::GT) {
        parse_type(p);
        while eat_next(p, SyntaxKind::COMMA) {
            parse_type(p);
        }
    }
    expect_next(p, SyntaxKind::GT);
    p.finish_node();
}

/// Type = (Primitive | '?' (('extends' | 'super') Type)? | CodeReference) ('[' ']')*
pub fn parse_type<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::TYPE);
    let kind = p.current_kind();
    if kind_set::PRIMITIVE_TYPES.contains(kind) {
        p.bump();
    } else if kind == SyntaxKind::QUESTION {
        p.bump();
        if eat_next(p, SyntaxKind::EXTENDS_KW) || eat_next(p, SyntaxKind::SUPER_KW) {
            parse_type(p);
        }
    } else if kind.is_name_token() {
        parse_code_reference(p);
    } else {
        p.error(format!("expected type, found {:?}", kind));
    }
    parse_dimensions(p);
    p.finish_node();
}

/// A parameter or record component type, which may end in `...`
fn parse_variable_arity_type<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    let checkpoint = p.checkpoint();
    parse_type(p);
    if peek(p, SyntaxKind::ELLIPSIS) {
        p.start_node_at(checkpoint, SyntaxKind::TYPE);
        eat_next(p, SyntaxKind::ELLIPSIS);
        p.finish_node();
    }
}

/// TypeParameters = '<' TypeParameter (',' TypeParameter)* '>'
fn parse_type_parameter_list<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::TYPE_PARAMETER_LIST);
    p.expect(SyntaxKind::LT);
    parse_type_parameter(p);
    while eat_next(p, SyntaxKind::COMMA) {
        parse_type_parameter(p);
    }
    expect_next(p, SyntaxKind::GT);
    p.finish_node();
}

/// TypeParameter = Name ('extends' CodeReference ('&' CodeReference)*)?
fn parse_type_parameter<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::TYPE_PARAMETER);
    expect_name(p);
    if peek(p, SyntaxKind::EXTENDS_KW) {
        p.skip_trivia();
        p.start_node(SyntaxKind::EXTENDS_BOUND_LIST);
        p.bump();
        parse_code_reference(p);
        while eat_next(p, SyntaxKind::AMP) {
            parse_code_reference(p);
        }
        p.finish_node();
    }
    p.finish_node();
}

/// ReferenceList = Keyword CodeReference (',' CodeReference)*
fn parse_reference_list<P: JavaParser>(p: &mut P, kind: SyntaxKind, keyword: SyntaxKind) {
    p.skip_trivia();
    p.start_node(kind);
    p.expect(keyword);
    parse_code_reference(p);
    while eat_next(p, SyntaxKind::COMMA) {
        parse_code_reference(p);
    }
    p.finish_node();
}

// =============================================================================
// Parameters and record components
// =============================================================================

/// Parameters = '(' (Parameter (',' Parameter)*)? ')'
fn parse_parameter_list<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::PARAMETER_LIST);
    p.expect(SyntaxKind::L_PAREN);
    p.skip_trivia();
    if !p.at(SyntaxKind::R_PAREN) {
        parse_parameter(p);
        while eat_next(p, SyntaxKind::COMMA) {
            parse_parameter(p);
        }
    }
    expect_next(p, SyntaxKind::R_PAREN);
    p.finish_node();
}

/// Parameter = Modifiers Type Name Dims?
pub fn parse_parameter<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::PARAMETER);
    parse_modifier_list(p);
    parse_variable_arity_type(p);
    expect_name(p);
    parse_dimensions(p);
    p.finish_node();
}

/// RecordHeader = '(' (RecordComponent (',' RecordComponent)*)? ')'
fn parse_record_header<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::RECORD_HEADER);
    p.expect(SyntaxKind::L_PAREN);
    p.skip_trivia();
    if !p.at(SyntaxKind::R_PAREN) {
        parse_record_component(p);
        while eat_next(p, SyntaxKind::COMMA) {
            parse_record_component(p);
        }
    }
    expect_next(p, SyntaxKind::R_PAREN);
    p.finish_node();
}

/// RecordComponent = Modifiers Type Name
fn parse_record_component<P: JavaParser>(p: &mut P) {
    p.skip_trivia();
    p.start_node(SyntaxKind::RECORD_COMPONENT);
    parse_modifier_list(p);
    parse_variable_arity_type(p);
    expect_name(p);
    p.finish_node();
}
