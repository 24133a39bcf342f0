//! Node kind registry: bit-sets of syntax kinds and the named groups built on them
//!
//! Groups are `const` and never change after startup. Membership is a
//! single bit test, so role schemas and visitors can check
//! "any expression" or "any case label element" without matching long
//! lists of kinds.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use super::syntax_kind::SyntaxKind;

const WORDS: usize = 4;

const _: () = assert!((SyntaxKind::__LAST as usize) <= WORDS * 64);

/// A set of syntax kinds, one bit per kind
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KindSet([u64; WORDS]);

impl KindSet {
    pub const EMPTY: KindSet = KindSet([0; WORDS]);

    /// Build a set from a list of kinds
    pub const fn new(kinds: &[SyntaxKind]) -> KindSet {
        let mut bits = [0u64; WORDS];
        let mut i = 0;
        while i < kinds.len() {
            let raw = kinds[i] as usize;
            bits[raw / 64] |= 1 << (raw % 64);
            i += 1;
        }
        KindSet(bits)
    }

    /// Build a set from an inclusive range of kinds in declaration order
    pub const fn range(first: SyntaxKind, last: SyntaxKind) -> KindSet {
        let mut bits = [0u64; WORDS];
        let mut raw = first as usize;
        while raw <= last as usize {
            bits[raw / 64] |= 1 << (raw % 64);
            raw += 1;
        }
        KindSet(bits)
    }

    pub const fn union(self, other: KindSet) -> KindSet {
        let mut bits = self.0;
        let mut i = 0;
        while i < WORDS {
            bits[i] |= other.0[i];
            i += 1;
        }
        KindSet(bits)
    }

    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let raw = kind as usize;
        self.0[raw / 64] & (1 << (raw % 64)) != 0
    }

    pub const fn is_empty(&self) -> bool {
        let mut i = 0;
        while i < WORDS {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Iterate over the member kinds in declaration order
    pub fn iter(&self) -> impl Iterator<Item = SyntaxKind> + '_ {
        SyntaxKind::all().filter(move |kind| self.contains(*kind))
    }
}

impl std::fmt::Debug for KindSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl From<SyntaxKind> for KindSet {
    fn from(kind: SyntaxKind) -> Self {
        KindSet::new(&[kind])
    }
}

// ============================================================================
// Groups
// ============================================================================

use SyntaxKind::*;

pub const TRIVIA: KindSet = KindSet::new(&[WHITESPACE, LINE_COMMENT, BLOCK_COMMENT]);

pub const COMMENTS: KindSet = KindSet::new(&[LINE_COMMENT, BLOCK_COMMENT]);

pub const KEYWORDS: KindSet = KindSet::range(ABSTRACT_KW, WHEN_KW);

pub const MODIFIER_KEYWORDS: KindSet = KindSet::new(&[
    PUBLIC_KW,
    PROTECTED_KW,
    PRIVATE_KW,
    STATIC_KW,
    FINAL_KW,
    ABSTRACT_KW,
    DEFAULT_KW,
    NATIVE_KW,
    SYNCHRONIZED_KW,
    TRANSIENT_KW,
    VOLATILE_KW,
    STRICTFP_KW,
]);

pub const PRIMITIVE_TYPES: KindSet = KindSet::new(&[
    BOOLEAN_KW, BYTE_KW, CHAR_KW, SHORT_KW, INT_KW, LONG_KW, FLOAT_KW, DOUBLE_KW, VOID_KW,
]);

pub const LITERALS: KindSet = KindSet::new(&[
    INTEGER_LITERAL,
    FLOAT_LITERAL,
    STRING_LITERAL,
    CHAR_LITERAL,
    TRUE_KW,
    FALSE_KW,
    NULL_KW,
]);

pub const BINARY_OPERATORS: KindSet = KindSet::new(&[
    PIPE_PIPE, AMP_AMP, PIPE, CARET, AMP, EQ_EQ, BANG_EQ, LT, GT, LT_EQ, GT_EQ, LT_LT, GT_GT,
    GT_GT_GT, PLUS, MINUS, STAR, SLASH, PERCENT,
]);

pub const ASSIGNMENT_OPERATORS: KindSet = KindSet::new(&[
    EQ,
    PLUS_EQ,
    MINUS_EQ,
    STAR_EQ,
    SLASH_EQ,
    PERCENT_EQ,
    AMP_EQ,
    PIPE_EQ,
    CARET_EQ,
    LT_LT_EQ,
    GT_GT_EQ,
    GT_GT_GT_EQ,
]);

pub const PREFIX_OPERATORS: KindSet =
    KindSet::new(&[PLUS, MINUS, BANG, TILDE, PLUS_PLUS, MINUS_MINUS]);

pub const POSTFIX_OPERATORS: KindSet = KindSet::new(&[PLUS_PLUS, MINUS_MINUS]);

pub const EXPRESSIONS: KindSet = KindSet::new(&[
    REFERENCE_EXPRESSION,
    LITERAL_EXPRESSION,
    THIS_EXPRESSION,
    PARENTH_EXPRESSION,
    BINARY_EXPRESSION,
    PREFIX_EXPRESSION,
    POSTFIX_EXPRESSION,
    TYPE_CAST_EXPRESSION,
    CONDITIONAL_EXPRESSION,
    ASSIGNMENT_EXPRESSION,
    METHOD_CALL_EXPRESSION,
    NEW_EXPRESSION,
    ARRAY_ACCESS_EXPRESSION,
    INSTANCE_OF_EXPRESSION,
    SWITCH_EXPRESSION,
]);

pub const STATEMENTS: KindSet = KindSet::new(&[
    BLOCK_STATEMENT,
    EMPTY_STATEMENT,
    EXPRESSION_STATEMENT,
    DECLARATION_STATEMENT,
    IF_STATEMENT,
    WHILE_STATEMENT,
    DO_WHILE_STATEMENT,
    FOR_STATEMENT,
    FOREACH_STATEMENT,
    RETURN_STATEMENT,
    YIELD_STATEMENT,
    BREAK_STATEMENT,
    CONTINUE_STATEMENT,
    THROW_STATEMENT,
    SWITCH_STATEMENT,
    SWITCH_LABEL_STATEMENT,
    SWITCH_LABELED_RULE,
]);

pub const LOOPS: KindSet = KindSet::new(&[
    WHILE_STATEMENT,
    DO_WHILE_STATEMENT,
    FOR_STATEMENT,
    FOREACH_STATEMENT,
]);

/// Primary patterns: everything that can stand on its own without a guard
pub const PATTERNS: KindSet = KindSet::new(&[
    TYPE_TEST_PATTERN,
    RECORD_PATTERN,
    PARENTHESIZED_PATTERN,
    UNNAMED_PATTERN,
]);

pub const CASE_LABEL_ELEMENTS: KindSet =
    EXPRESSIONS
        .union(PATTERNS)
        .union(KindSet::new(&[GUARDED_PATTERN, DEFAULT_CASE_LABEL_ELEMENT]));

pub const MEMBERS: KindSet =
    KindSet::new(&[FIELD, METHOD, ANNOTATION_METHOD, CLASS, CLASS_INITIALIZER]);

pub const REFERENCE_LISTS: KindSet =
    KindSet::new(&[EXTENDS_LIST, IMPLEMENTS_LIST, THROWS_LIST, EXTENDS_BOUND_LIST]);

/// Nodes whose elements are delimited by a separator token
pub const SEPARATED_LISTS: KindSet = REFERENCE_LISTS.union(KindSet::new(&[
    RECORD_HEADER,
    PARAMETER_LIST,
    TYPE_PARAMETER_LIST,
    REFERENCE_PARAMETER_LIST,
    EXPRESSION_LIST,
    DECONSTRUCTION_LIST,
    CASE_LABEL_ELEMENT_LIST,
    ANNOTATION_PARAMETER_LIST,
]));

pub const TOKENS: KindSet = KindSet::range(WHITESPACE, WHEN_KW).union(KindSet::new(&[ERROR]));

pub const NODES: KindSet = KindSet::range(JAVA_FILE, ERROR);

/// Named groups of the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindGroup {
    Trivia,
    Comments,
    Keywords,
    ModifierKeywords,
    PrimitiveTypes,
    Literals,
    BinaryOperators,
    AssignmentOperators,
    PrefixOperators,
    PostfixOperators,
    Expressions,
    Statements,
    Loops,
    Patterns,
    CaseLabelElements,
    Members,
    ReferenceLists,
    SeparatedLists,
    Tokens,
    Nodes,
}

impl KindGroup {
    pub const ALL: [KindGroup; 20] = [
        KindGroup::Trivia,
        KindGroup::Comments,
        KindGroup::Keywords,
        KindGroup::ModifierKeywords,
        KindGroup::PrimitiveTypes,
        KindGroup::Literals,
        KindGroup::BinaryOperators,
        KindGroup::AssignmentOperators,
        KindGroup::PrefixOperators,
        KindGroup::PostfixOperators,
        KindGroup::Expressions,
        KindGroup::Statements,
        KindGroup::Loops,
        KindGroup::Patterns,
        KindGroup::CaseLabelElements,
        KindGroup::Members,
        KindGroup::ReferenceLists,
        KindGroup::SeparatedLists,
        KindGroup::Tokens,
        KindGroup::Nodes,
    ];

    pub const fn set(self) -> KindSet {
        match self {
            KindGroup::Trivia => TRIVIA,
            KindGroup::Comments => COMMENTS,
            KindGroup::Keywords => KEYWORDS,
            KindGroup::ModifierKeywords => MODIFIER_KEYWORDS,
            KindGroup::PrimitiveTypes => PRIMITIVE_TYPES,
            KindGroup::Literals => LITERALS,
            KindGroup::BinaryOperators => BINARY_OPERATORS,
            KindGroup::AssignmentOperators => ASSIGNMENT_OPERATORS,
            KindGroup::PrefixOperators => PREFIX_OPERATORS,
            KindGroup::PostfixOperators => POSTFIX_OPERATORS,
            KindGroup::Expressions => EXPRESSIONS,
            KindGroup::Statements => STATEMENTS,
            KindGroup::Loops => LOOPS,
            KindGroup::Patterns => PATTERNS,
            KindGroup::CaseLabelElements => CASE_LABEL_ELEMENTS,
            KindGroup::Members => MEMBERS,
            KindGroup::ReferenceLists => REFERENCE_LISTS,
            KindGroup::SeparatedLists => SEPARATED_LISTS,
            KindGroup::Tokens => TOKENS,
            KindGroup::Nodes => NODES,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            KindGroup::Trivia => "trivia",
            KindGroup::Comments => "comments",
            KindGroup::Keywords => "keywords",
            KindGroup::ModifierKeywords => "modifier-keywords",
            KindGroup::PrimitiveTypes => "primitive-types",
            KindGroup::Literals => "literals",
            KindGroup::BinaryOperators => "binary-operators",
            KindGroup::AssignmentOperators => "assignment-operators",
            KindGroup::PrefixOperators => "prefix-operators",
            KindGroup::PostfixOperators => "postfix-operators",
            KindGroup::Expressions => "expressions",
            KindGroup::Statements => "statements",
            KindGroup::Loops => "loops",
            KindGroup::Patterns => "patterns",
            KindGroup::CaseLabelElements => "case-label-elements",
            KindGroup::Members => "members",
            KindGroup::ReferenceLists => "reference-lists",
            KindGroup::SeparatedLists => "separated-lists",
            KindGroup::Tokens => "tokens",
            KindGroup::Nodes => "nodes",
        }
    }

    /// Look up a group by its registry name
    pub fn from_name(name: &str) -> Option<KindGroup> {
        GROUPS_BY_NAME.get(name).copied()
    }
}

static GROUPS_BY_NAME: Lazy<FxHashMap<&'static str, KindGroup>> = Lazy::new(|| {
    KindGroup::ALL
        .iter()
        .map(|group| (group.name(), *group))
        .collect()
});

/// Resolve a group by name.
///
/// # Panics
/// An unknown name is a programming error and panics.
pub fn group(name: &str) -> KindSet {
    match KindGroup::from_name(name) {
        Some(group) => group.set(),
        None => panic!("undefined syntax kind group `{name}`"),
    }
}

/// Whether `kind` belongs to `group`
pub fn is_member(kind: SyntaxKind, group: KindGroup) -> bool {
    group.set().contains(kind)
}
