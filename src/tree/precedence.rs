//! Operator precedence and the parenthesization rule for expression edits

use super::composite::HasRoles;
use super::role::Role;
use crate::parser::{SyntaxKind, SyntaxNode, kind_set};

/// Java operator precedence, tightest first. Casts share the prefix level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Precedence {
    Primary = 0,
    Call,
    Postfix,
    Prefix,
    Multiplicative,
    Additive,
    Shift,
    Relational,
    Equality,
    BitAnd,
    BitXor,
    BitOr,
    And,
    Or,
    Conditional,
    Assignment,
}

impl Precedence {
    /// Precedence of a binary operator token
    pub fn of_operator(sign: SyntaxKind) -> Option<Precedence> {
        use SyntaxKind::*;
        let precedence = match sign {
            STAR | SLASH | PERCENT => Precedence::Multiplicative,
            PLUS | MINUS => Precedence::Additive,
            LT_LT | GT_GT | GT_GT_GT => Precedence::Shift,
            LT | GT | LT_EQ | GT_EQ | INSTANCEOF_KW => Precedence::Relational,
            EQ_EQ | BANG_EQ => Precedence::Equality,
            AMP => Precedence::BitAnd,
            CARET => Precedence::BitXor,
            PIPE => Precedence::BitOr,
            AMP_AMP => Precedence::And,
            PIPE_PIPE => Precedence::Or,
            _ => return None,
        };
        Some(precedence)
    }
}

/// Precedence of an expression node. Non-expressions bind as primaries.
pub fn precedence_of(expr: &SyntaxNode) -> Precedence {
    use SyntaxKind::*;
    match expr.kind() {
        LITERAL_EXPRESSION | THIS_EXPRESSION | PARENTH_EXPRESSION => Precedence::Primary,
        REFERENCE_EXPRESSION => {
            if expr.find_child_by_role(Role::Qualifier).ok().flatten().is_some() {
                Precedence::Call
            } else {
                Precedence::Primary
            }
        }
        METHOD_CALL_EXPRESSION | ARRAY_ACCESS_EXPRESSION | NEW_EXPRESSION => Precedence::Call,
        POSTFIX_EXPRESSION => Precedence::Postfix,
        PREFIX_EXPRESSION | TYPE_CAST_EXPRESSION | SWITCH_EXPRESSION => Precedence::Prefix,
        BINARY_EXPRESSION => operation_sign(expr)
            .and_then(Precedence::of_operator)
            .unwrap_or(Precedence::Or),
        INSTANCE_OF_EXPRESSION => Precedence::Relational,
        CONDITIONAL_EXPRESSION => Precedence::Conditional,
        ASSIGNMENT_EXPRESSION => Precedence::Assignment,
        _ => Precedence::Primary,
    }
}

fn operation_sign(expr: &SyntaxNode) -> Option<SyntaxKind> {
    expr.find_children_by_role(Role::OperationSign)
        .first()
        .map(|sign| sign.kind())
}

/// Whether `(a op b) op c` and `a op (b op c)` always agree.
///
/// `+` is only treated as associative when neither side mentions a string
/// literal, since `"" + 1 + 2` and `"" + (1 + 2)` differ. Without type
/// information this is a textual approximation.
fn is_associative(sign: SyntaxKind, parent: &SyntaxNode, replacement: &SyntaxNode) -> bool {
    use SyntaxKind::*;
    match sign {
        STAR | AMP | PIPE | CARET | AMP_AMP | PIPE_PIPE => true,
        PLUS => !mentions_string(parent) && !mentions_string(replacement),
        _ => false,
    }
}

fn mentions_string(node: &SyntaxNode) -> bool {
    node.descendants_with_tokens().any(|e| {
        matches!(
            e.kind(),
            SyntaxKind::STRING_LITERAL | SyntaxKind::CHAR_LITERAL
        )
    })
}

/// Whether `replacement`, placed in `role` of expression `parent`, must be
/// wrapped in parentheses to keep the parse unchanged
pub fn needs_parentheses(parent: &SyntaxNode, role: Role, replacement: &SyntaxNode) -> bool {
    if !kind_set::EXPRESSIONS.contains(parent.kind())
        || !kind_set::EXPRESSIONS.contains(replacement.kind())
    {
        return false;
    }
    let outer = precedence_of(parent);
    let inner = precedence_of(replacement);
    match (parent.kind(), role) {
        (SyntaxKind::BINARY_EXPRESSION, Role::LOperand) => inner > outer,
        (SyntaxKind::BINARY_EXPRESSION, Role::ROperand) => {
            if inner != outer {
                return inner > outer;
            }
            let sign = operation_sign(parent);
            let same_sign = sign.is_some() && sign == operation_sign(replacement);
            !(same_sign
                && sign.is_some_and(|sign| is_associative(sign, parent, replacement)))
        }
        (SyntaxKind::ASSIGNMENT_EXPRESSION, Role::LOperand) => inner >= outer,
        (SyntaxKind::ASSIGNMENT_EXPRESSION, Role::ROperand) => inner > outer,
        (SyntaxKind::CONDITIONAL_EXPRESSION, Role::Condition) => inner >= outer,
        (SyntaxKind::CONDITIONAL_EXPRESSION, Role::ElseExpression) => inner > outer,
        (SyntaxKind::PREFIX_EXPRESSION, Role::Operand) => {
            inner > outer || signs_would_fuse(parent, replacement)
        }
        (SyntaxKind::TYPE_CAST_EXPRESSION, Role::Operand) => {
            inner > outer || reads_as_binary_after_cast(parent, replacement)
        }
        (SyntaxKind::POSTFIX_EXPRESSION | SyntaxKind::INSTANCE_OF_EXPRESSION, Role::Operand) => {
            inner > outer
        }
        (SyntaxKind::REFERENCE_EXPRESSION, Role::Qualifier)
        | (SyntaxKind::ARRAY_ACCESS_EXPRESSION, Role::ArrayExpression) => {
            inner > Precedence::Call
        }
        _ => false,
    }
}

/// `(T) -x` with a reference type `T` parses as the subtraction `(T) - x`,
/// so signed operands of such casts keep their parentheses
fn reads_as_binary_after_cast(cast: &SyntaxNode, replacement: &SyntaxNode) -> bool {
    use SyntaxKind::*;
    if replacement.kind() != PREFIX_EXPRESSION
        || !matches!(
            operation_sign(replacement),
            Some(PLUS | MINUS | PLUS_PLUS | MINUS_MINUS)
        )
    {
        return false;
    }
    let primitive = cast
        .child_node_by_role(Role::CastType)
        .ok()
        .flatten()
        .and_then(|ty| ty.child_token_by_role(Role::PrimitiveType).ok().flatten())
        .is_some();
    !primitive
}

/// `-` followed by `-x` or `--x` would lex as `--`
fn signs_would_fuse(parent: &SyntaxNode, replacement: &SyntaxNode) -> bool {
    use SyntaxKind::*;
    if replacement.kind() != PREFIX_EXPRESSION {
        return false;
    }
    match (operation_sign(parent), operation_sign(replacement)) {
        (Some(PLUS), Some(PLUS | PLUS_PLUS)) => true,
        (Some(MINUS), Some(MINUS | MINUS_MINUS)) => true,
        _ => false,
    }
}
