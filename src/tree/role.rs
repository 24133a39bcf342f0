//! Child roles
//!
//! A role names what a child means inside its parent (`LoopBody`,
//! `IteratedValue`, `Name`, ...). Roles are only meaningful relative to the
//! parent's kind; the mapping lives in [`super::schema`].

/// How many children of one parent may hold a role at the same time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplicity {
    /// At most one child; a second match is a consistency fault
    One,
    /// Any number of children, in source order
    Many,
}

/// Semantic tag of a child within its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    // Punctuation and keywords
    Name,
    Keyword,
    ClassKeyword,
    StaticKeyword,
    ListKeyword,
    BoundKeyword,
    ElseKeyword,
    WhileKeyword,
    WhenKeyword,
    InstanceofKeyword,
    DefaultKeyword,
    CaseKeyword,
    NewKeyword,
    At,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LAngle,
    RAngle,
    Semicolon,
    Colon,
    Question,
    Arrow,
    Dot,
    Eq,
    Ellipsis,
    Wildcard,
    Underscore,
    Separator,

    // File level
    PackageStatement,
    ImportList,
    ImportStatement,
    PackageReference,
    ImportReference,
    OnDemand,

    // References and types
    Qualifier,
    ReferenceName,
    ReferenceParameterList,
    ClassReference,
    TypeReference,
    TypeArgument,
    Type,
    PrimitiveType,
    ComponentType,

    // Modifiers and annotations
    ModifierList,
    ModifierKeyword,
    Annotation,
    AnnotationParameterList,
    NameValuePair,
    AnnotationValue,

    // Declarations
    Member,
    TypeParameterList,
    TypeParameter,
    RecordHeader,
    RecordComponent,
    ExtendsList,
    ImplementsList,
    ThrowsList,
    ReturnType,
    ParameterList,
    Parameter,
    MethodBody,
    Initializer,
    AnnotationDefaultValue,
    Variable,

    // Statements
    Block,
    Statement,
    Expression,
    Condition,
    ThenBranch,
    ElseBranch,
    LoopBody,
    ForInitialization,
    ForUpdate,
    IterationParameter,
    IteratedValue,
    ReturnValue,
    Label,
    Exception,
    Selector,
    SwitchBody,
    CaseLabelElementList,
    CaseLabelElement,
    RuleBody,

    // Expressions
    Literal,
    ListElement,
    LOperand,
    ROperand,
    Operand,
    OperationSign,
    CastType,
    ThenExpression,
    ElseExpression,
    MethodExpression,
    ArgumentList,
    ArrayExpression,
    IndexExpression,
    ArrayDimension,
    CheckType,

    // Patterns
    Pattern,
    PatternVariable,
    DeconstructionList,
    DeconstructionComponent,
    GuardingExpression,
}

impl Role {
    pub fn multiplicity(self) -> Multiplicity {
        match self {
            Role::Member
            | Role::ImportStatement
            | Role::Annotation
            | Role::ModifierKeyword
            | Role::TypeParameter
            | Role::TypeReference
            | Role::TypeArgument
            | Role::Parameter
            | Role::RecordComponent
            | Role::Statement
            | Role::Variable
            | Role::NameValuePair
            | Role::ListElement
            | Role::CaseLabelElement
            | Role::DeconstructionComponent
            | Role::ArrayDimension
            | Role::Separator => Multiplicity::Many,
            _ => Multiplicity::One,
        }
    }

    pub fn is_unique(self) -> bool {
        self.multiplicity() == Multiplicity::One
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_roles_repeat() {
        assert_eq!(Role::Separator.multiplicity(), Multiplicity::Many);
        assert_eq!(Role::Member.multiplicity(), Multiplicity::Many);
        assert!(!Role::CaseLabelElement.is_unique());
    }

    #[test]
    fn test_structural_roles_are_unique() {
        for role in [Role::Name, Role::LoopBody, Role::IteratedValue, Role::ImportReference] {
            assert!(role.is_unique(), "{role:?}");
        }
    }
}
