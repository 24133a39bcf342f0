//! Error types for role queries, tree edits and node construction

use thiserror::Error;

use super::role::Role;
use crate::parser::{SyntaxKind, TextRange};

/// A broken structural assumption. These are programming errors, never
/// user-facing conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyFault {
    /// The element passed as a child has a different parent
    #[error("{child:?} at {range:?} is not a child of {parent:?}")]
    NotAChild {
        parent: SyntaxKind,
        child: SyntaxKind,
        range: TextRange,
    },

    /// A role limited to one child matched several
    #[error("{parent:?} has {count} children in unique role {role:?}")]
    DuplicateRole {
        parent: SyntaxKind,
        role: Role,
        count: usize,
    },

    /// A child the grammar guarantees is absent
    #[error("{parent:?} at {range:?} is missing its {role:?} child")]
    MissingRequiredChild {
        parent: SyntaxKind,
        role: Role,
        range: TextRange,
    },

    /// A node from another tree, or an immutable node, was handed to an edit
    #[error("{kind:?} at {range:?} does not belong to this tree")]
    ForeignNode { kind: SyntaxKind, range: TextRange },

    /// A node was asked to replace a child of its own subtree
    #[error("{kind:?} at {range:?} cannot replace one of its own descendants")]
    SelfContainment { kind: SyntaxKind, range: TextRange },
}

/// Failure to build a node from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// The text did not parse cleanly
    #[error("failed to parse {text:?}: {message}")]
    Parse { text: String, message: String },

    /// The text parsed, but not to a single node of the requested kind
    #[error("{text:?} does not form a single {expected}")]
    UnexpectedShape { text: String, expected: &'static str },

    /// The kind is a token or cannot stand on its own
    #[error("cannot construct a standalone {0:?}")]
    UnsupportedKind(SyntaxKind),
}

/// Rejected tree edit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error(transparent)]
    Fault(#[from] ConsistencyFault),

    /// The replacement would not hold the role of the element it replaces
    #[error("{parent:?} cannot take a {found:?} as its {role:?}")]
    RoleMismatch {
        parent: SyntaxKind,
        role: Role,
        found: SyntaxKind,
    },

    /// The child has no role and the parent has no policy for removing it
    #[error("{child:?} cannot be removed from {parent:?}")]
    Unremovable {
        parent: SyntaxKind,
        child: SyntaxKind,
    },

    /// List insertion into a node that is not a separated list
    #[error("{0:?} is not a separated list")]
    NotAList(SyntaxKind),

    #[error(transparent)]
    Factory(#[from] FactoryError),
}

pub type MutationResult<T> = Result<T, MutationError>;
