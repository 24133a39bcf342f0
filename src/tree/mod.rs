//! Role-indexed CST layer
//!
//! Builds on the rowan trees produced by [`crate::parser`]:
//!
//! - [`role`] and [`schema`]: what each child of a composite node means
//! - [`composite`]: role lookup and reverse classification ([`HasRoles`])
//! - [`guard`], [`precedence`], [`factory`]: grammar-preserving edits
//! - [`file`]: the edit session ([`SyntaxTree`]) with its children cache
//! - [`visitor`]: double dispatch over every node and token kind
//! - [`scope`]: bindings contributed by declarations, loops and patterns

pub mod composite;
pub mod error;
pub mod factory;
pub mod file;
pub mod guard;
pub mod options;
pub mod precedence;
pub mod role;
pub mod schema;
pub mod scope;
pub mod visitor;

pub use composite::{CompositeModifierList, HasRoles, RoleScan};
pub use error::{ConsistencyFault, FactoryError, MutationError, MutationResult};
pub use file::SyntaxTree;
pub use options::TreeOptions;
pub use precedence::{Precedence, needs_parentheses, precedence_of};
pub use role::{Multiplicity, Role};
pub use schema::{RoleSchema, RoleSlot, Section, list_separator, schema_of};
pub use scope::{
    Binding, BindingCollector, BindingKind, DeclarationSource, NameResolver, ResolveState,
    ScopeEvent, ScopeProcessor, resolve_name, visible_bindings, walk_up,
};
pub use visitor::{Accept, Visitor, walk};
