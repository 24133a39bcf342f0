//! Role schemas: which child kinds fill which roles, per composite kind
//!
//! A schema is declarative. Its *delimiters* are direct child tokens that
//! advance a section counter while children are scanned left to right; a
//! delimiter itself belongs to the section it closes. Each *slot* accepts a
//! set of kinds, optionally only within one section, and the first matching
//! slot wins. Trivia never receives a role.
//!
//! Sections disambiguate children of the same kind: the three expressions
//! of `c ? a : b` are told apart by the `?` and `:` tokens between them.

use super::role::Role;
use crate::parser::kind_set::{self, KindSet};
use crate::parser::SyntaxKind;
use crate::parser::SyntaxKind::*;

/// Where in the delimiter-separated child sequence a slot applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Any,
    At(u8),
}

impl Section {
    pub fn admits(self, section: u8) -> bool {
        match self {
            Section::Any => true,
            Section::At(expected) => expected == section,
        }
    }
}

/// One role a child may hold
#[derive(Debug, Clone, Copy)]
pub struct RoleSlot {
    pub role: Role,
    pub accepts: KindSet,
    pub section: Section,
}

/// The role layout of one composite kind
#[derive(Debug)]
pub struct RoleSchema {
    pub kind: SyntaxKind,
    pub delimiters: KindSet,
    pub slots: &'static [RoleSlot],
}

impl RoleSchema {
    /// Role of a child of `kind` seen in `section`, if any slot accepts it
    pub fn classify(&self, section: u8, kind: SyntaxKind) -> Option<Role> {
        if kind.is_trivia() {
            return None;
        }
        self.slots
            .iter()
            .find(|slot| slot.section.admits(section) && slot.accepts.contains(kind))
            .map(|slot| slot.role)
    }

    pub fn slot(&self, role: Role) -> Option<&RoleSlot> {
        self.slots.iter().find(|slot| slot.role == role)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.slot(role).is_some()
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.slots.iter().map(|slot| slot.role)
    }

    pub fn is_delimiter(&self, kind: SyntaxKind) -> bool {
        self.delimiters.contains(kind)
    }
}

macro_rules! slot {
    ($role:ident, $accepts:expr) => {
        RoleSlot {
            role: Role::$role,
            accepts: $accepts,
            section: Section::Any,
        }
    };
    ($role:ident, $accepts:expr, $section:literal) => {
        RoleSlot {
            role: Role::$role,
            accepts: $accepts,
            section: Section::At($section),
        }
    };
}

macro_rules! schema {
    ($name:ident, $kind:ident, [$($delim:ident),* $(,)?], [$($slot:expr),* $(,)?]) => {
        static $name: RoleSchema = RoleSchema {
            kind: $kind,
            delimiters: KindSet::new(&[$($delim),*]),
            slots: &[$($slot),*],
        };
    };
    ($name:ident, $kind:ident, $delims:expr, [$($slot:expr),* $(,)?]) => {
        static $name: RoleSchema = RoleSchema {
            kind: $kind,
            delimiters: $delims,
            slots: &[$($slot),*],
        };
    };
}

const fn one(kind: SyntaxKind) -> KindSet {
    KindSet::new(&[kind])
}

pub const NAME_TOKENS: KindSet = KindSet::new(&[IDENT, RECORD_KW, YIELD_KW, WHEN_KW]);
const BINDER_NAMES: KindSet = NAME_TOKENS.union(one(UNDERSCORE));
const REFERENCE_NAMES: KindSet = NAME_TOKENS.union(KindSet::new(&[THIS_KW, SUPER_KW, CLASS_KW]));
const EXPRESSIONS: KindSet = kind_set::EXPRESSIONS;
const STATEMENTS: KindSet = kind_set::STATEMENTS;
const ANNOTATION_VALUES: KindSet = EXPRESSIONS.union(one(ANNOTATION));
const IMPORT_STATEMENTS: KindSet = KindSet::new(&[IMPORT_STATEMENT, IMPORT_STATIC_STATEMENT]);
const CLASS_KEYWORDS: KindSet = KindSet::new(&[CLASS_KW, INTERFACE_KW, ENUM_KW, RECORD_KW]);
const STATEMENT_KEYWORDS: KindSet = KindSet::new(&[
    PACKAGE_KW,
    IMPORT_KW,
    IF_KW,
    WHILE_KW,
    DO_KW,
    FOR_KW,
    RETURN_KW,
    YIELD_KW,
    BREAK_KW,
    CONTINUE_KW,
    THROW_KW,
    SWITCH_KW,
    THIS_KW,
]);

// =============================================================================
// FILE LEVEL
// =============================================================================

schema!(JAVA_FILE_SCHEMA, JAVA_FILE, [], [
    slot!(PackageStatement, one(PACKAGE_STATEMENT)),
    slot!(ImportList, one(IMPORT_LIST)),
    slot!(Member, one(CLASS)),
]);

schema!(PACKAGE_STATEMENT_SCHEMA, PACKAGE_STATEMENT, [], [
    slot!(Keyword, STATEMENT_KEYWORDS),
    slot!(PackageReference, one(JAVA_CODE_REFERENCE)),
    slot!(Semicolon, one(SEMICOLON)),
]);

schema!(IMPORT_LIST_SCHEMA, IMPORT_LIST, [], [
    slot!(ImportStatement, IMPORT_STATEMENTS),
]);

schema!(IMPORT_STATEMENT_SCHEMA, IMPORT_STATEMENT, [], [
    slot!(Keyword, STATEMENT_KEYWORDS),
    slot!(ImportReference, one(JAVA_CODE_REFERENCE)),
    slot!(Dot, one(DOT)),
    slot!(OnDemand, one(STAR)),
    slot!(Semicolon, one(SEMICOLON)),
]);

schema!(IMPORT_STATIC_STATEMENT_SCHEMA, IMPORT_STATIC_STATEMENT, [], [
    slot!(Keyword, STATEMENT_KEYWORDS),
    slot!(StaticKeyword, one(STATIC_KW)),
    slot!(ImportReference, one(JAVA_CODE_REFERENCE)),
    slot!(Dot, one(DOT)),
    slot!(OnDemand, one(STAR)),
    slot!(Semicolon, one(SEMICOLON)),
]);

schema!(JAVA_CODE_REFERENCE_SCHEMA, JAVA_CODE_REFERENCE, [], [
    slot!(Qualifier, one(JAVA_CODE_REFERENCE)),
    slot!(Dot, one(DOT)),
    slot!(ReferenceName, NAME_TOKENS),
    slot!(ReferenceParameterList, one(REFERENCE_PARAMETER_LIST)),
]);

// =============================================================================
// MODIFIERS AND ANNOTATIONS
// =============================================================================

schema!(MODIFIER_LIST_SCHEMA, MODIFIER_LIST, [], [
    slot!(Annotation, one(ANNOTATION)),
    slot!(ModifierKeyword, kind_set::MODIFIER_KEYWORDS),
]);

schema!(ANNOTATION_SCHEMA, ANNOTATION, [], [
    slot!(At, one(AT)),
    slot!(ClassReference, one(JAVA_CODE_REFERENCE)),
    slot!(AnnotationParameterList, one(ANNOTATION_PARAMETER_LIST)),
]);

schema!(ANNOTATION_PARAMETER_LIST_SCHEMA, ANNOTATION_PARAMETER_LIST, [], [
    slot!(LParen, one(L_PAREN)),
    slot!(NameValuePair, one(NAME_VALUE_PAIR)),
    slot!(Separator, one(COMMA)),
    slot!(RParen, one(R_PAREN)),
]);

schema!(NAME_VALUE_PAIR_SCHEMA, NAME_VALUE_PAIR, [], [
    slot!(Name, NAME_TOKENS),
    slot!(Eq, one(EQ)),
    slot!(AnnotationValue, ANNOTATION_VALUES),
]);

// =============================================================================
// DECLARATIONS
// =============================================================================

schema!(CLASS_SCHEMA, CLASS, CLASS_KEYWORDS, [
    slot!(ModifierList, one(MODIFIER_LIST)),
    slot!(At, one(AT)),
    slot!(ClassKeyword, CLASS_KEYWORDS, 0),
    slot!(Name, NAME_TOKENS, 1),
    slot!(TypeParameterList, one(TYPE_PARAMETER_LIST)),
    slot!(RecordHeader, one(RECORD_HEADER)),
    slot!(ExtendsList, one(EXTENDS_LIST)),
    slot!(ImplementsList, one(IMPLEMENTS_LIST)),
    slot!(LBrace, one(L_BRACE)),
    slot!(Member, kind_set::MEMBERS),
    slot!(RBrace, one(R_BRACE)),
]);

schema!(CLASS_INITIALIZER_SCHEMA, CLASS_INITIALIZER, [], [
    slot!(ModifierList, one(MODIFIER_LIST)),
    slot!(MethodBody, one(CODE_BLOCK)),
]);

schema!(EXTENDS_LIST_SCHEMA, EXTENDS_LIST, [], [
    slot!(ListKeyword, one(EXTENDS_KW)),
    slot!(TypeReference, one(JAVA_CODE_REFERENCE)),
    slot!(Separator, one(COMMA)),
]);

schema!(IMPLEMENTS_LIST_SCHEMA, IMPLEMENTS_LIST, [], [
    slot!(ListKeyword, one(IMPLEMENTS_KW)),
    slot!(TypeReference, one(JAVA_CODE_REFERENCE)),
    slot!(Separator, one(COMMA)),
]);

schema!(THROWS_LIST_SCHEMA, THROWS_LIST, [], [
    slot!(ListKeyword, one(THROWS_KW)),
    slot!(TypeReference, one(JAVA_CODE_REFERENCE)),
    slot!(Separator, one(COMMA)),
]);

schema!(EXTENDS_BOUND_LIST_SCHEMA, EXTENDS_BOUND_LIST, [], [
    slot!(ListKeyword, one(EXTENDS_KW)),
    slot!(TypeReference, one(JAVA_CODE_REFERENCE)),
    slot!(Separator, one(AMP)),
]);

schema!(TYPE_PARAMETER_LIST_SCHEMA, TYPE_PARAMETER_LIST, [], [
    slot!(LAngle, one(LT)),
    slot!(TypeParameter, one(TYPE_PARAMETER)),
    slot!(Separator, one(COMMA)),
    slot!(RAngle, one(GT)),
]);

schema!(TYPE_PARAMETER_SCHEMA, TYPE_PARAMETER, [], [
    slot!(Name, NAME_TOKENS),
    slot!(ExtendsList, one(EXTENDS_BOUND_LIST)),
]);

schema!(REFERENCE_PARAMETER_LIST_SCHEMA, REFERENCE_PARAMETER_LIST, [], [
    slot!(LAngle, one(LT)),
    slot!(TypeArgument, one(TYPE)),
    slot!(Separator, one(COMMA)),
    slot!(RAngle, one(GT)),
]);

schema!(TYPE_SCHEMA, TYPE, [], [
    slot!(PrimitiveType, kind_set::PRIMITIVE_TYPES),
    slot!(ClassReference, one(JAVA_CODE_REFERENCE)),
    slot!(ComponentType, one(TYPE)),
    slot!(Wildcard, one(QUESTION)),
    slot!(BoundKeyword, KindSet::new(&[EXTENDS_KW, SUPER_KW])),
    slot!(Ellipsis, one(ELLIPSIS)),
]);

schema!(FIELD_SCHEMA, FIELD, [], [
    slot!(ModifierList, one(MODIFIER_LIST)),
    slot!(Type, one(TYPE)),
    slot!(Name, NAME_TOKENS),
    slot!(Eq, one(EQ)),
    slot!(Initializer, EXPRESSIONS),
    slot!(Semicolon, one(SEMICOLON)),
]);

schema!(LOCAL_VARIABLE_SCHEMA, LOCAL_VARIABLE, [], [
    slot!(ModifierList, one(MODIFIER_LIST)),
    slot!(Type, one(TYPE)),
    slot!(Name, NAME_TOKENS),
    slot!(Eq, one(EQ)),
    slot!(Initializer, EXPRESSIONS),
]);

schema!(METHOD_SCHEMA, METHOD, [], [
    slot!(ModifierList, one(MODIFIER_LIST)),
    slot!(TypeParameterList, one(TYPE_PARAMETER_LIST)),
    slot!(ReturnType, one(TYPE)),
    slot!(Name, NAME_TOKENS),
    slot!(ParameterList, one(PARAMETER_LIST)),
    slot!(ThrowsList, one(THROWS_LIST)),
    slot!(MethodBody, one(CODE_BLOCK)),
    slot!(Semicolon, one(SEMICOLON)),
]);

schema!(ANNOTATION_METHOD_SCHEMA, ANNOTATION_METHOD, [DEFAULT_KW], [
    slot!(ModifierList, one(MODIFIER_LIST)),
    slot!(ReturnType, one(TYPE)),
    slot!(Name, NAME_TOKENS),
    slot!(ParameterList, one(PARAMETER_LIST)),
    slot!(DefaultKeyword, one(DEFAULT_KW)),
    slot!(AnnotationDefaultValue, ANNOTATION_VALUES, 1),
    slot!(Semicolon, one(SEMICOLON)),
]);

schema!(PARAMETER_LIST_SCHEMA, PARAMETER_LIST, [], [
    slot!(LParen, one(L_PAREN)),
    slot!(Parameter, one(PARAMETER)),
    slot!(Separator, one(COMMA)),
    slot!(RParen, one(R_PAREN)),
]);

schema!(PARAMETER_SCHEMA, PARAMETER, [], [
    slot!(ModifierList, one(MODIFIER_LIST)),
    slot!(Type, one(TYPE)),
    slot!(Name, NAME_TOKENS),
]);

schema!(RECORD_HEADER_SCHEMA, RECORD_HEADER, [], [
    slot!(LParen, one(L_PAREN)),
    slot!(RecordComponent, one(RECORD_COMPONENT)),
    slot!(Separator, one(COMMA)),
    slot!(RParen, one(R_PAREN)),
]);

schema!(RECORD_COMPONENT_SCHEMA, RECORD_COMPONENT, [], [
    slot!(ModifierList, one(MODIFIER_LIST)),
    slot!(Type, one(TYPE)),
    slot!(Name, NAME_TOKENS),
]);

// =============================================================================
// STATEMENTS
// =============================================================================

schema!(CODE_BLOCK_SCHEMA, CODE_BLOCK, [], [
    slot!(LBrace, one(L_BRACE)),
    slot!(Statement, STATEMENTS),
    slot!(RBrace, one(R_BRACE)),
]);

schema!(BLOCK_STATEMENT_SCHEMA, BLOCK_STATEMENT, [], [
    slot!(Block, one(CODE_BLOCK)),
]);

schema!(EMPTY_STATEMENT_SCHEMA, EMPTY_STATEMENT, [], [
    slot!(Semicolon, one(SEMICOLON)),
]);

schema!(EXPRESSION_STATEMENT_SCHEMA, EXPRESSION_STATEMENT, [], [
    slot!(Expression, EXPRESSIONS.union(one(EXPRESSION_LIST))),
    slot!(Semicolon, one(SEMICOLON)),
]);

schema!(DECLARATION_STATEMENT_SCHEMA, DECLARATION_STATEMENT, [], [
    slot!(Variable, one(LOCAL_VARIABLE)),
    slot!(Member, one(CLASS)),
    slot!(Separator, one(COMMA)),
    slot!(Semicolon, one(SEMICOLON)),
]);

schema!(IF_STATEMENT_SCHEMA, IF_STATEMENT, [L_PAREN, R_PAREN, ELSE_KW], [
    slot!(Keyword, one(IF_KW)),
    slot!(LParen, one(L_PAREN)),
    slot!(Condition, EXPRESSIONS, 1),
    slot!(RParen, one(R_PAREN)),
    slot!(ThenBranch, STATEMENTS, 2),
    slot!(ElseKeyword, one(ELSE_KW)),
    slot!(ElseBranch, STATEMENTS, 3),
]);

schema!(WHILE_STATEMENT_SCHEMA, WHILE_STATEMENT, [L_PAREN, R_PAREN], [
    slot!(Keyword, one(WHILE_KW)),
    slot!(LParen, one(L_PAREN)),
    slot!(Condition, EXPRESSIONS, 1),
    slot!(RParen, one(R_PAREN)),
    slot!(LoopBody, STATEMENTS, 2),
]);

schema!(DO_WHILE_STATEMENT_SCHEMA, DO_WHILE_STATEMENT, [WHILE_KW, L_PAREN, R_PAREN], [
    slot!(Keyword, one(DO_KW)),
    slot!(LoopBody, STATEMENTS, 0),
    slot!(WhileKeyword, one(WHILE_KW)),
    slot!(LParen, one(L_PAREN)),
    slot!(Condition, EXPRESSIONS, 2),
    slot!(RParen, one(R_PAREN)),
    slot!(Semicolon, one(SEMICOLON), 3),
]);

schema!(FOR_STATEMENT_SCHEMA, FOR_STATEMENT, [L_PAREN, SEMICOLON, R_PAREN], [
    slot!(Keyword, one(FOR_KW)),
    slot!(LParen, one(L_PAREN)),
    slot!(ForInitialization, STATEMENTS, 1),
    slot!(Condition, EXPRESSIONS, 1),
    slot!(ForUpdate, EXPRESSIONS.union(one(EXPRESSION_LIST)), 2),
    slot!(RParen, one(R_PAREN)),
    slot!(LoopBody, STATEMENTS, 3),
]);

schema!(FOREACH_STATEMENT_SCHEMA, FOREACH_STATEMENT, [L_PAREN, COLON, R_PAREN], [
    slot!(Keyword, one(FOR_KW)),
    slot!(LParen, one(L_PAREN)),
    slot!(IterationParameter, one(PARAMETER), 1),
    slot!(Colon, one(COLON)),
    slot!(IteratedValue, EXPRESSIONS, 2),
    slot!(RParen, one(R_PAREN)),
    slot!(LoopBody, STATEMENTS, 3),
]);

schema!(RETURN_STATEMENT_SCHEMA, RETURN_STATEMENT, [], [
    slot!(Keyword, one(RETURN_KW)),
    slot!(ReturnValue, EXPRESSIONS),
    slot!(Semicolon, one(SEMICOLON)),
]);

schema!(YIELD_STATEMENT_SCHEMA, YIELD_STATEMENT, [], [
    slot!(Keyword, one(YIELD_KW)),
    slot!(Expression, EXPRESSIONS),
    slot!(Semicolon, one(SEMICOLON)),
]);

schema!(BREAK_STATEMENT_SCHEMA, BREAK_STATEMENT, [], [
    slot!(Keyword, one(BREAK_KW)),
    slot!(Label, NAME_TOKENS),
    slot!(Semicolon, one(SEMICOLON)),
]);

schema!(CONTINUE_STATEMENT_SCHEMA, CONTINUE_STATEMENT, [], [
    slot!(Keyword, one(CONTINUE_KW)),
    slot!(Label, NAME_TOKENS),
    slot!(Semicolon, one(SEMICOLON)),
]);

schema!(THROW_STATEMENT_SCHEMA, THROW_STATEMENT, [], [
    slot!(Keyword, one(THROW_KW)),
    slot!(Exception, EXPRESSIONS),
    slot!(Semicolon, one(SEMICOLON)),
]);

schema!(SWITCH_STATEMENT_SCHEMA, SWITCH_STATEMENT, [L_PAREN, R_PAREN], [
    slot!(Keyword, one(SWITCH_KW)),
    slot!(LParen, one(L_PAREN)),
    slot!(Selector, EXPRESSIONS, 1),
    slot!(RParen, one(R_PAREN)),
    slot!(SwitchBody, one(CODE_BLOCK), 2),
]);

schema!(SWITCH_LABEL_STATEMENT_SCHEMA, SWITCH_LABEL_STATEMENT, [], [
    slot!(CaseKeyword, one(CASE_KW)),
    slot!(DefaultKeyword, one(DEFAULT_KW)),
    slot!(CaseLabelElementList, one(CASE_LABEL_ELEMENT_LIST)),
    slot!(Colon, one(COLON)),
]);

schema!(SWITCH_LABELED_RULE_SCHEMA, SWITCH_LABELED_RULE, [], [
    slot!(CaseKeyword, one(CASE_KW)),
    slot!(DefaultKeyword, one(DEFAULT_KW)),
    slot!(CaseLabelElementList, one(CASE_LABEL_ELEMENT_LIST)),
    slot!(Arrow, one(ARROW)),
    slot!(RuleBody, STATEMENTS),
]);

schema!(CASE_LABEL_ELEMENT_LIST_SCHEMA, CASE_LABEL_ELEMENT_LIST, [], [
    slot!(CaseLabelElement, kind_set::CASE_LABEL_ELEMENTS),
    slot!(Separator, one(COMMA)),
]);

schema!(DEFAULT_CASE_LABEL_ELEMENT_SCHEMA, DEFAULT_CASE_LABEL_ELEMENT, [], [
    slot!(DefaultKeyword, one(DEFAULT_KW)),
]);

// =============================================================================
// EXPRESSIONS
// =============================================================================

schema!(EXPRESSION_LIST_SCHEMA, EXPRESSION_LIST, [], [
    slot!(LParen, one(L_PAREN)),
    slot!(ListElement, EXPRESSIONS),
    slot!(Separator, one(COMMA)),
    slot!(RParen, one(R_PAREN)),
]);

schema!(REFERENCE_EXPRESSION_SCHEMA, REFERENCE_EXPRESSION, [], [
    slot!(Qualifier, EXPRESSIONS),
    slot!(Dot, one(DOT)),
    slot!(ReferenceName, REFERENCE_NAMES),
]);

schema!(LITERAL_EXPRESSION_SCHEMA, LITERAL_EXPRESSION, [], [
    slot!(Literal, kind_set::LITERALS),
]);

schema!(THIS_EXPRESSION_SCHEMA, THIS_EXPRESSION, [], [
    slot!(Keyword, one(THIS_KW)),
]);

schema!(PARENTH_EXPRESSION_SCHEMA, PARENTH_EXPRESSION, [], [
    slot!(LParen, one(L_PAREN)),
    slot!(Expression, EXPRESSIONS),
    slot!(RParen, one(R_PAREN)),
]);

schema!(BINARY_EXPRESSION_SCHEMA, BINARY_EXPRESSION, kind_set::BINARY_OPERATORS, [
    slot!(LOperand, EXPRESSIONS, 0),
    slot!(OperationSign, kind_set::BINARY_OPERATORS),
    slot!(ROperand, EXPRESSIONS, 1),
]);

schema!(PREFIX_EXPRESSION_SCHEMA, PREFIX_EXPRESSION, [], [
    slot!(OperationSign, kind_set::PREFIX_OPERATORS),
    slot!(Operand, EXPRESSIONS),
]);

schema!(POSTFIX_EXPRESSION_SCHEMA, POSTFIX_EXPRESSION, [], [
    slot!(Operand, EXPRESSIONS),
    slot!(OperationSign, kind_set::POSTFIX_OPERATORS),
]);

schema!(TYPE_CAST_EXPRESSION_SCHEMA, TYPE_CAST_EXPRESSION, [], [
    slot!(LParen, one(L_PAREN)),
    slot!(CastType, one(TYPE)),
    slot!(RParen, one(R_PAREN)),
    slot!(Operand, EXPRESSIONS),
]);

schema!(CONDITIONAL_EXPRESSION_SCHEMA, CONDITIONAL_EXPRESSION, [QUESTION, COLON], [
    slot!(Condition, EXPRESSIONS, 0),
    slot!(Question, one(QUESTION)),
    slot!(ThenExpression, EXPRESSIONS, 1),
    slot!(Colon, one(COLON)),
    slot!(ElseExpression, EXPRESSIONS, 2),
]);

schema!(ASSIGNMENT_EXPRESSION_SCHEMA, ASSIGNMENT_EXPRESSION, kind_set::ASSIGNMENT_OPERATORS, [
    slot!(LOperand, EXPRESSIONS, 0),
    slot!(OperationSign, kind_set::ASSIGNMENT_OPERATORS),
    slot!(ROperand, EXPRESSIONS, 1),
]);

schema!(METHOD_CALL_EXPRESSION_SCHEMA, METHOD_CALL_EXPRESSION, [], [
    slot!(MethodExpression, one(REFERENCE_EXPRESSION)),
    slot!(ArgumentList, one(EXPRESSION_LIST)),
]);

schema!(NEW_EXPRESSION_SCHEMA, NEW_EXPRESSION, [], [
    slot!(NewKeyword, one(NEW_KW)),
    slot!(ClassReference, one(JAVA_CODE_REFERENCE)),
    slot!(PrimitiveType, kind_set::PRIMITIVE_TYPES),
    slot!(ArgumentList, one(EXPRESSION_LIST)),
    slot!(ArrayDimension, EXPRESSIONS),
]);

schema!(ARRAY_ACCESS_EXPRESSION_SCHEMA, ARRAY_ACCESS_EXPRESSION, [L_BRACKET], [
    slot!(ArrayExpression, EXPRESSIONS, 0),
    slot!(LBracket, one(L_BRACKET)),
    slot!(IndexExpression, EXPRESSIONS, 1),
    slot!(RBracket, one(R_BRACKET)),
]);

schema!(INSTANCE_OF_EXPRESSION_SCHEMA, INSTANCE_OF_EXPRESSION, [INSTANCEOF_KW], [
    slot!(Operand, EXPRESSIONS, 0),
    slot!(InstanceofKeyword, one(INSTANCEOF_KW)),
    slot!(CheckType, one(TYPE), 1),
    slot!(Pattern, kind_set::PATTERNS, 1),
]);

schema!(SWITCH_EXPRESSION_SCHEMA, SWITCH_EXPRESSION, [L_PAREN, R_PAREN], [
    slot!(Keyword, one(SWITCH_KW)),
    slot!(LParen, one(L_PAREN)),
    slot!(Selector, EXPRESSIONS, 1),
    slot!(RParen, one(R_PAREN)),
    slot!(SwitchBody, one(CODE_BLOCK), 2),
]);

// =============================================================================
// PATTERNS
// =============================================================================

schema!(TYPE_TEST_PATTERN_SCHEMA, TYPE_TEST_PATTERN, [], [
    slot!(PatternVariable, one(PATTERN_VARIABLE)),
]);

schema!(PATTERN_VARIABLE_SCHEMA, PATTERN_VARIABLE, [], [
    slot!(ModifierList, one(MODIFIER_LIST)),
    slot!(Type, one(TYPE)),
    slot!(Name, BINDER_NAMES),
]);

schema!(RECORD_PATTERN_SCHEMA, RECORD_PATTERN, [], [
    slot!(Type, one(TYPE)),
    slot!(DeconstructionList, one(DECONSTRUCTION_LIST)),
]);

schema!(DECONSTRUCTION_LIST_SCHEMA, DECONSTRUCTION_LIST, [], [
    slot!(LParen, one(L_PAREN)),
    slot!(DeconstructionComponent, kind_set::PATTERNS),
    slot!(Separator, one(COMMA)),
    slot!(RParen, one(R_PAREN)),
]);

schema!(PARENTHESIZED_PATTERN_SCHEMA, PARENTHESIZED_PATTERN, [], [
    slot!(LParen, one(L_PAREN)),
    slot!(Pattern, kind_set::PATTERNS.union(one(GUARDED_PATTERN))),
    slot!(RParen, one(R_PAREN)),
]);

schema!(UNNAMED_PATTERN_SCHEMA, UNNAMED_PATTERN, [], [
    slot!(Underscore, one(UNDERSCORE)),
]);

schema!(GUARDED_PATTERN_SCHEMA, GUARDED_PATTERN, [WHEN_KW], [
    slot!(Pattern, kind_set::PATTERNS, 0),
    slot!(WhenKeyword, one(WHEN_KW)),
    slot!(GuardingExpression, EXPRESSIONS, 1),
]);

/// The role schema of a composite kind, or `None` for tokens and for
/// structural roots (`DUMMY_HOLDER`, `ERROR`) whose children have no roles
pub fn schema_of(kind: SyntaxKind) -> Option<&'static RoleSchema> {
    let schema = match kind {
        JAVA_FILE => &JAVA_FILE_SCHEMA,
        PACKAGE_STATEMENT => &PACKAGE_STATEMENT_SCHEMA,
        IMPORT_LIST => &IMPORT_LIST_SCHEMA,
        IMPORT_STATEMENT => &IMPORT_STATEMENT_SCHEMA,
        IMPORT_STATIC_STATEMENT => &IMPORT_STATIC_STATEMENT_SCHEMA,
        JAVA_CODE_REFERENCE => &JAVA_CODE_REFERENCE_SCHEMA,
        MODIFIER_LIST => &MODIFIER_LIST_SCHEMA,
        ANNOTATION => &ANNOTATION_SCHEMA,
        ANNOTATION_PARAMETER_LIST => &ANNOTATION_PARAMETER_LIST_SCHEMA,
        NAME_VALUE_PAIR => &NAME_VALUE_PAIR_SCHEMA,
        CLASS => &CLASS_SCHEMA,
        CLASS_INITIALIZER => &CLASS_INITIALIZER_SCHEMA,
        EXTENDS_LIST => &EXTENDS_LIST_SCHEMA,
        IMPLEMENTS_LIST => &IMPLEMENTS_LIST_SCHEMA,
        THROWS_LIST => &THROWS_LIST_SCHEMA,
        TYPE_PARAMETER_LIST => &TYPE_PARAMETER_LIST_SCHEMA,
        TYPE_PARAMETER => &TYPE_PARAMETER_SCHEMA,
        EXTENDS_BOUND_LIST => &EXTENDS_BOUND_LIST_SCHEMA,
        REFERENCE_PARAMETER_LIST => &REFERENCE_PARAMETER_LIST_SCHEMA,
        TYPE => &TYPE_SCHEMA,
        FIELD => &FIELD_SCHEMA,
        METHOD => &METHOD_SCHEMA,
        ANNOTATION_METHOD => &ANNOTATION_METHOD_SCHEMA,
        PARAMETER_LIST => &PARAMETER_LIST_SCHEMA,
        PARAMETER => &PARAMETER_SCHEMA,
        RECORD_HEADER => &RECORD_HEADER_SCHEMA,
        RECORD_COMPONENT => &RECORD_COMPONENT_SCHEMA,
        LOCAL_VARIABLE => &LOCAL_VARIABLE_SCHEMA,
        CODE_BLOCK => &CODE_BLOCK_SCHEMA,
        BLOCK_STATEMENT => &BLOCK_STATEMENT_SCHEMA,
        EMPTY_STATEMENT => &EMPTY_STATEMENT_SCHEMA,
        EXPRESSION_STATEMENT => &EXPRESSION_STATEMENT_SCHEMA,
        DECLARATION_STATEMENT => &DECLARATION_STATEMENT_SCHEMA,
        IF_STATEMENT => &IF_STATEMENT_SCHEMA,
        WHILE_STATEMENT => &WHILE_STATEMENT_SCHEMA,
        DO_WHILE_STATEMENT => &DO_WHILE_STATEMENT_SCHEMA,
        FOR_STATEMENT => &FOR_STATEMENT_SCHEMA,
        FOREACH_STATEMENT => &FOREACH_STATEMENT_SCHEMA,
        RETURN_STATEMENT => &RETURN_STATEMENT_SCHEMA,
        YIELD_STATEMENT => &YIELD_STATEMENT_SCHEMA,
        BREAK_STATEMENT => &BREAK_STATEMENT_SCHEMA,
        CONTINUE_STATEMENT => &CONTINUE_STATEMENT_SCHEMA,
        THROW_STATEMENT => &THROW_STATEMENT_SCHEMA,
        SWITCH_STATEMENT => &SWITCH_STATEMENT_SCHEMA,
        SWITCH_LABEL_STATEMENT => &SWITCH_LABEL_STATEMENT_SCHEMA,
        SWITCH_LABELED_RULE => &SWITCH_LABELED_RULE_SCHEMA,
        CASE_LABEL_ELEMENT_LIST => &CASE_LABEL_ELEMENT_LIST_SCHEMA,
        DEFAULT_CASE_LABEL_ELEMENT => &DEFAULT_CASE_LABEL_ELEMENT_SCHEMA,
        EXPRESSION_LIST => &EXPRESSION_LIST_SCHEMA,
        REFERENCE_EXPRESSION => &REFERENCE_EXPRESSION_SCHEMA,
        LITERAL_EXPRESSION => &LITERAL_EXPRESSION_SCHEMA,
        THIS_EXPRESSION => &THIS_EXPRESSION_SCHEMA,
        PARENTH_EXPRESSION => &PARENTH_EXPRESSION_SCHEMA,
        BINARY_EXPRESSION => &BINARY_EXPRESSION_SCHEMA,
        PREFIX_EXPRESSION => &PREFIX_EXPRESSION_SCHEMA,
        POSTFIX_EXPRESSION => &POSTFIX_EXPRESSION_SCHEMA,
        TYPE_CAST_EXPRESSION => &TYPE_CAST_EXPRESSION_SCHEMA,
        CONDITIONAL_EXPRESSION => &CONDITIONAL_EXPRESSION_SCHEMA,
        ASSIGNMENT_EXPRESSION => &ASSIGNMENT_EXPRESSION_SCHEMA,
        METHOD_CALL_EXPRESSION => &METHOD_CALL_EXPRESSION_SCHEMA,
        NEW_EXPRESSION => &NEW_EXPRESSION_SCHEMA,
        ARRAY_ACCESS_EXPRESSION => &ARRAY_ACCESS_EXPRESSION_SCHEMA,
        INSTANCE_OF_EXPRESSION => &INSTANCE_OF_EXPRESSION_SCHEMA,
        SWITCH_EXPRESSION => &SWITCH_EXPRESSION_SCHEMA,
        TYPE_TEST_PATTERN => &TYPE_TEST_PATTERN_SCHEMA,
        PATTERN_VARIABLE => &PATTERN_VARIABLE_SCHEMA,
        RECORD_PATTERN => &RECORD_PATTERN_SCHEMA,
        DECONSTRUCTION_LIST => &DECONSTRUCTION_LIST_SCHEMA,
        PARENTHESIZED_PATTERN => &PARENTHESIZED_PATTERN_SCHEMA,
        UNNAMED_PATTERN => &UNNAMED_PATTERN_SCHEMA,
        GUARDED_PATTERN => &GUARDED_PATTERN_SCHEMA,
        _ => return None,
    };
    Some(schema)
}

/// Separator token between the elements of a separated list kind
pub fn list_separator(kind: SyntaxKind) -> Option<SyntaxKind> {
    match kind {
        EXTENDS_BOUND_LIST => Some(AMP),
        k if kind_set::SEPARATED_LISTS.contains(k) => Some(COMMA),
        DECLARATION_STATEMENT => Some(COMMA),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_schema_is_registered_under_its_kind() {
        for kind in SyntaxKind::all() {
            if let Some(schema) = schema_of(kind) {
                assert_eq!(schema.kind, kind);
                assert!(kind.is_node(), "{kind:?}");
            }
        }
    }

    #[test]
    fn test_every_expression_kind_has_a_schema() {
        for kind in kind_set::EXPRESSIONS.iter() {
            assert!(schema_of(kind).is_some(), "{kind:?}");
        }
    }

    #[test]
    fn test_unique_roles_appear_once_per_schema() {
        for kind in SyntaxKind::all() {
            let Some(schema) = schema_of(kind) else { continue };
            let mut seen = Vec::new();
            for role in schema.roles() {
                assert!(!seen.contains(&role), "{kind:?} lists {role:?} twice");
                seen.push(role);
            }
        }
    }

    #[test]
    fn test_sections_split_conditional_operands() {
        let schema = schema_of(CONDITIONAL_EXPRESSION).unwrap();
        assert_eq!(schema.classify(0, BINARY_EXPRESSION), Some(Role::Condition));
        assert_eq!(schema.classify(1, BINARY_EXPRESSION), Some(Role::ThenExpression));
        assert_eq!(schema.classify(2, BINARY_EXPRESSION), Some(Role::ElseExpression));
        assert_eq!(schema.classify(1, WHITESPACE), None);
    }

    #[test]
    fn test_list_separators() {
        assert_eq!(list_separator(RECORD_HEADER), Some(COMMA));
        assert_eq!(list_separator(EXTENDS_BOUND_LIST), Some(AMP));
        assert_eq!(list_separator(CODE_BLOCK), None);
    }
}
