//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Tokens come first, composite nodes after `JAVA_FILE`.

/// All syntax kinds (tokens and nodes) of the Java subset
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (classes, statements, expressions, patterns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,
    INTEGER_LITERAL, // 42, 0xFF, 10L
    FLOAT_LITERAL,   // 3.14, 1e10, 2f
    STRING_LITERAL,  // "hello"
    CHAR_LITERAL,    // 'c'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,     // {
    R_BRACE,     // }
    L_PAREN,     // (
    R_PAREN,     // )
    L_BRACKET,   // [
    R_BRACKET,   // ]
    SEMICOLON,   // ;
    COMMA,       // ,
    DOT,         // .
    ELLIPSIS,    // ...
    AT,          // @
    COLON,       // :
    COLON_COLON, // ::
    QUESTION,    // ?
    ARROW,       // ->
    UNDERSCORE,  // _

    // =========================================================================
    // OPERATORS
    // =========================================================================
    EQ,          // =
    EQ_EQ,       // ==
    BANG_EQ,     // !=
    LT,          // <
    GT,          // >
    LT_EQ,       // <=
    GT_EQ,       // >=
    AMP_AMP,     // &&
    PIPE_PIPE,   // ||
    PLUS,        // +
    MINUS,       // -
    STAR,        // *
    SLASH,       // /
    PERCENT,     // %
    AMP,         // &
    PIPE,        // |
    CARET,       // ^
    TILDE,       // ~
    BANG,        // !
    PLUS_PLUS,   // ++
    MINUS_MINUS, // --
    LT_LT,       // <<
    GT_GT,       // >>  (glued by the parser)
    GT_GT_GT,    // >>> (glued by the parser)
    PLUS_EQ,     // +=
    MINUS_EQ,    // -=
    STAR_EQ,     // *=
    SLASH_EQ,    // /=
    PERCENT_EQ,  // %=
    AMP_EQ,      // &=
    PIPE_EQ,     // |=
    CARET_EQ,    // ^=
    LT_LT_EQ,    // <<=
    GT_GT_EQ,    // >>=  (glued by the parser)
    GT_GT_GT_EQ, // >>>= (glued by the parser)

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    ABSTRACT_KW,
    BOOLEAN_KW,
    BREAK_KW,
    BYTE_KW,
    CASE_KW,
    CHAR_KW,
    CLASS_KW,
    CONTINUE_KW,
    DEFAULT_KW,
    DO_KW,
    DOUBLE_KW,
    ELSE_KW,
    ENUM_KW,
    EXTENDS_KW,
    FINAL_KW,
    FLOAT_KW,
    FOR_KW,
    IF_KW,
    IMPLEMENTS_KW,
    IMPORT_KW,
    INSTANCEOF_KW,
    INT_KW,
    INTERFACE_KW,
    LONG_KW,
    NATIVE_KW,
    NEW_KW,
    PACKAGE_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    PUBLIC_KW,
    RETURN_KW,
    SHORT_KW,
    STATIC_KW,
    STRICTFP_KW,
    SUPER_KW,
    SWITCH_KW,
    SYNCHRONIZED_KW,
    THIS_KW,
    THROW_KW,
    THROWS_KW,
    TRANSIENT_KW,
    VOID_KW,
    VOLATILE_KW,
    WHILE_KW,
    TRUE_KW,
    FALSE_KW,
    NULL_KW,

    // Contextual keywords (also usable as names)
    RECORD_KW,
    YIELD_KW,
    WHEN_KW,

    // =========================================================================
    // COMPOSITE NODES (non-terminals in the grammar)
    // =========================================================================
    // Root
    JAVA_FILE,
    DUMMY_HOLDER, // Root of fragments built by the factory

    // File level
    PACKAGE_STATEMENT,
    IMPORT_LIST,
    IMPORT_STATEMENT,
    IMPORT_STATIC_STATEMENT,
    JAVA_CODE_REFERENCE,

    // Modifiers and annotations
    MODIFIER_LIST,
    ANNOTATION,
    ANNOTATION_PARAMETER_LIST,
    NAME_VALUE_PAIR,

    // Declarations
    CLASS,
    CLASS_INITIALIZER,
    EXTENDS_LIST,
    IMPLEMENTS_LIST,
    THROWS_LIST,
    TYPE_PARAMETER_LIST,
    TYPE_PARAMETER,
    EXTENDS_BOUND_LIST,
    REFERENCE_PARAMETER_LIST,
    TYPE,
    FIELD,
    METHOD,
    ANNOTATION_METHOD,
    PARAMETER_LIST,
    PARAMETER,
    RECORD_HEADER,
    RECORD_COMPONENT,
    LOCAL_VARIABLE,

    // Statements
    CODE_BLOCK,
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
    CASE_LABEL_ELEMENT_LIST,
    DEFAULT_CASE_LABEL_ELEMENT,

    // Expressions
    EXPRESSION_LIST,
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

    // Patterns
    TYPE_TEST_PATTERN,
    PATTERN_VARIABLE,
    RECORD_PATTERN,
    DECONSTRUCTION_LIST,
    PARENTHESIZED_PATTERN,
    UNNAMED_PATTERN,
    GUARDED_PATTERN,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT
        )
    }

    /// Check if this is a keyword, contextual keywords included
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ABSTRACT_KW as u16) && (self as u16) <= (Self::WHEN_KW as u16)
    }

    /// Check if this is a punctuation or operator token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::GT_GT_GT_EQ as u16)
    }

    /// Check if this is a literal token
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::INTEGER_LITERAL
                | Self::FLOAT_LITERAL
                | Self::STRING_LITERAL
                | Self::CHAR_LITERAL
                | Self::TRUE_KW
                | Self::FALSE_KW
                | Self::NULL_KW
        )
    }

    /// Check if this kind names a leaf token rather than a composite node.
    ///
    /// `ERROR` is both: the lexer emits it for bad characters and the
    /// parser wraps unparseable runs in an `ERROR` node.
    pub fn is_token(self) -> bool {
        (self as u16) < (Self::JAVA_FILE as u16) || self == Self::ERROR
    }

    /// Check if this kind names a composite node
    pub fn is_node(self) -> bool {
        (self as u16) >= (Self::JAVA_FILE as u16) && self != Self::__LAST
    }

    /// Check if this token can be used where a name is expected.
    ///
    /// Contextual keywords (`record`, `yield`, `when`) are only keywords in
    /// specific positions and are plain identifiers elsewhere.
    pub fn is_name_token(self) -> bool {
        matches!(
            self,
            Self::IDENT | Self::RECORD_KW | Self::YIELD_KW | Self::WHEN_KW
        )
    }

    /// All real kinds in declaration order
    pub fn all() -> impl Iterator<Item = SyntaxKind> {
        (0..SyntaxKind::__LAST as u16).map(|raw| SyntaxKind::from(rowan::SyntaxKind(raw)))
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JavaLanguage {}

impl rowan::Language for JavaLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<JavaLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<JavaLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<JavaLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<JavaLanguage>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_and_node_partition() {
        for kind in SyntaxKind::all() {
            if kind == SyntaxKind::ERROR {
                assert!(kind.is_token() && kind.is_node());
            } else {
                assert_ne!(kind.is_token(), kind.is_node(), "{kind:?}");
            }
        }
    }

    #[test]
    fn test_raw_round_trip() {
        for kind in SyntaxKind::all() {
            let raw: rowan::SyntaxKind = kind.into();
            assert_eq!(SyntaxKind::from(raw), kind);
        }
    }

    #[test]
    fn test_contextual_keywords_are_names() {
        assert!(SyntaxKind::RECORD_KW.is_keyword());
        assert!(SyntaxKind::RECORD_KW.is_name_token());
        assert!(!SyntaxKind::CLASS_KW.is_name_token());
    }
}
