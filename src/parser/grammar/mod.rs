//! Grammar modules for the Java subset
//!
//! The parsing logic is organized by construct:
//! - `declarations` - files, imports, classes, members, types, modifiers
//! - `statements` - blocks and every statement form, switch labels and rules
//! - `expressions` - precedence-climbing expression parser
//! - `patterns` - type-test, record, parenthesized, unnamed and guarded patterns
//!
//! The parsing functions are generic over [`JavaParser`] so the grammar does
//! not depend on the concrete token buffer or tree builder.

pub mod declarations;
pub mod expressions;
pub mod patterns;
pub mod statements;

use crate::parser::kind_set::{self, KindSet};
use crate::parser::syntax_kind::SyntaxKind;
use rowan::Checkpoint;

pub use declarations::{parse_class, parse_java_file, parse_member, parse_type};
pub use expressions::parse_expression;
pub use patterns::parse_pattern;
pub use statements::{parse_code_block, parse_statement};

/// Interface between the grammar functions and the parser that owns the
/// tokens and the green tree builder.
///
/// `at*` inspect the raw current token (trivia included); `nth` looks past
/// trivia. Grammar functions skip trivia before starting a node and only
/// consume trivia after a node when something else follows, so trailing
/// whitespace always lands in the enclosing node.
pub trait JavaParser {
    // Token inspection
    fn current_kind(&self) -> SyntaxKind;
    fn at(&self, kind: SyntaxKind) -> bool;
    fn at_any(&self, kinds: &[SyntaxKind]) -> bool;
    fn at_eof(&self) -> bool;

    /// Kind of the nth non-trivia token from the current position
    fn nth(&self, n: usize) -> SyntaxKind;

    /// A right-shift operator spelled by adjacent `>`/`>=` tokens starting
    /// at the next non-trivia token, with the number of tokens it spans
    fn peek_shift(&self) -> Option<(SyntaxKind, usize)>;

    // Position tracking
    fn get_pos(&self) -> usize;

    // Token consumption
    fn bump(&mut self);
    fn bump_glued(&mut self, kind: SyntaxKind, count: usize);
    fn eat(&mut self, kind: SyntaxKind) -> bool;
    fn expect(&mut self, kind: SyntaxKind) -> bool;

    // Trivia handling
    fn skip_trivia(&mut self);

    // Node building
    fn start_node(&mut self, kind: SyntaxKind);
    fn finish_node(&mut self);
    fn checkpoint(&mut self) -> Checkpoint;
    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind);

    // Diagnostics
    fn error(&mut self, message: String);
    fn error_recover(&mut self, message: String, recovery: &[SyntaxKind]);
}

/// Whether the next non-trivia token is `kind`
pub(crate) fn peek<P: JavaParser>(p: &P, kind: SyntaxKind) -> bool {
    p.nth(0) == kind
}

/// Skip trivia and consume `kind` if it is next
pub(crate) fn eat_next<P: JavaParser>(p: &mut P, kind: SyntaxKind) -> bool {
    if peek(p, kind) {
        p.skip_trivia();
        p.bump();
        true
    } else {
        false
    }
}

/// Skip trivia and require `kind`
pub(crate) fn expect_next<P: JavaParser>(p: &mut P, kind: SyntaxKind) -> bool {
    p.skip_trivia();
    p.expect(kind)
}

/// Consume a name token (identifier or contextual keyword)
pub(crate) fn expect_name<P: JavaParser>(p: &mut P) -> bool {
    p.skip_trivia();
    if p.current_kind().is_name_token() {
        p.bump();
        true
    } else {
        p.error(format!("expected identifier, found {:?}", p.current_kind()));
        false
    }
}

// =============================================================================
// Lookahead
// =============================================================================

/// Skip a type starting at non-trivia offset `n`, returning the offset just
/// past it. Only token kinds are inspected; nothing is consumed.
pub(crate) fn skip_type_at<P: JavaParser>(p: &P, n: usize) -> Option<usize> {
    let mut m = n;
    let first = p.nth(m);
    if kind_set::PRIMITIVE_TYPES.contains(first) {
        m += 1;
    } else if first.is_name_token() {
        m += 1;
        loop {
            if p.nth(m) == SyntaxKind::LT {
                m = skip_type_arguments_at(p, m)?;
            }
            if p.nth(m) == SyntaxKind::DOT && p.nth(m + 1).is_name_token() {
                m += 2;
            } else {
                break;
            }
        }
    } else {
        return None;
    }
    while p.nth(m) == SyntaxKind::L_BRACKET && p.nth(m + 1) == SyntaxKind::R_BRACKET {
        m += 2;
    }
    Some(m)
}

const TYPE_ARGUMENT_TOKENS: KindSet = KindSet::new(&[
    SyntaxKind::COMMA,
    SyntaxKind::DOT,
    SyntaxKind::QUESTION,
    SyntaxKind::EXTENDS_KW,
    SyntaxKind::SUPER_KW,
    SyntaxKind::L_BRACKET,
    SyntaxKind::R_BRACKET,
    SyntaxKind::AMP,
])
.union(kind_set::PRIMITIVE_TYPES);

fn skip_type_arguments_at<P: JavaParser>(p: &P, n: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut m = n;
    loop {
        let kind = p.nth(m);
        match kind {
            SyntaxKind::LT => depth += 1,
            SyntaxKind::GT => {
                depth -= 1;
                if depth == 0 {
                    return Some(m + 1);
                }
            }
            k if k.is_name_token() || TYPE_ARGUMENT_TOKENS.contains(k) => {}
            _ => return None,
        }
        m += 1;
    }
}

/// Skip modifier keywords and simple annotations at offset `n`
pub(crate) fn skip_modifiers_at<P: JavaParser>(p: &P, n: usize) -> usize {
    let mut m = n;
    loop {
        let kind = p.nth(m);
        if kind_set::MODIFIER_KEYWORDS.contains(kind) && kind != SyntaxKind::DEFAULT_KW {
            m += 1;
        } else if kind == SyntaxKind::AT && p.nth(m + 1) != SyntaxKind::INTERFACE_KW {
            m += 2;
            while p.nth(m) == SyntaxKind::DOT {
                m += 2;
            }
            if p.nth(m) == SyntaxKind::L_PAREN {
                let mut depth = 0usize;
                loop {
                    match p.nth(m) {
                        SyntaxKind::L_PAREN => depth += 1,
                        SyntaxKind::R_PAREN => {
                            depth -= 1;
                            if depth == 0 {
                                m += 1;
                                break;
                            }
                        }
                        SyntaxKind::ERROR => return m,
                        _ => {}
                    }
                    m += 1;
                }
            }
        } else {
            return m;
        }
    }
}

/// If the upcoming tokens read `modifiers Type name`, the kind that follows
/// the name
pub(crate) fn declaration_lookahead<P: JavaParser>(p: &P) -> Option<SyntaxKind> {
    let m = skip_modifiers_at(p, 0);
    let m = skip_type_at(p, m)?;
    if !p.nth(m).is_name_token() {
        return None;
    }
    match p.nth(m + 1) {
        next @ (SyntaxKind::EQ
        | SyntaxKind::SEMICOLON
        | SyntaxKind::COMMA
        | SyntaxKind::COLON
        | SyntaxKind::L_BRACKET) => Some(next),
        _ => None,
    }
}

/// Whether a pattern (rather than an expression or bare type) starts at
/// non-trivia offset `n`
pub(crate) fn pattern_lookahead<P: JavaParser>(p: &P, n: usize) -> bool {
    match p.nth(n) {
        SyntaxKind::UNDERSCORE | SyntaxKind::FINAL_KW => true,
        SyntaxKind::L_PAREN => pattern_lookahead(p, n + 1),
        first => match skip_type_at(p, n) {
            Some(m) => {
                let next = p.nth(m);
                next.is_name_token()
                    || next == SyntaxKind::UNDERSCORE
                    || (next == SyntaxKind::L_PAREN && first.is_name_token())
            }
            None => false,
        },
    }
}

/// Whether a cast `(Type) operand` starts at the current token
pub(crate) fn cast_lookahead<P: JavaParser>(p: &P) -> bool {
    if p.nth(0) != SyntaxKind::L_PAREN {
        return false;
    }
    let Some(m) = skip_type_at(p, 1) else {
        return false;
    };
    if p.nth(m) != SyntaxKind::R_PAREN {
        return false;
    }
    if kind_set::PRIMITIVE_TYPES.contains(p.nth(1)) {
        return true;
    }
    let next = p.nth(m + 1);
    next.is_name_token()
        || matches!(
            next,
            SyntaxKind::INTEGER_LITERAL
                | SyntaxKind::FLOAT_LITERAL
                | SyntaxKind::STRING_LITERAL
                | SyntaxKind::CHAR_LITERAL
                | SyntaxKind::TRUE_KW
                | SyntaxKind::FALSE_KW
                | SyntaxKind::NULL_KW
                | SyntaxKind::L_PAREN
                | SyntaxKind::BANG
                | SyntaxKind::TILDE
                | SyntaxKind::THIS_KW
                | SyntaxKind::SUPER_KW
                | SyntaxKind::NEW_KW
                | SyntaxKind::SWITCH_KW
        )
}
