//! Role-indexed access to composite nodes
//!
//! Roles are never stored. Every query rescans the direct children against
//! the parent's [`RoleSchema`], so edits made anywhere in the tree are
//! visible to the next query without any invalidation step.

use super::error::ConsistencyFault;
use super::role::Role;
use super::schema::{RoleSchema, schema_of};
use crate::parser::{KindSet, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Iterator over the direct children of a node paired with their roles
pub struct RoleScan {
    children: rowan::SyntaxElementChildren<crate::parser::JavaLanguage>,
    schema: Option<&'static RoleSchema>,
    section: u8,
}

impl RoleScan {
    pub fn new(node: &SyntaxNode) -> Self {
        Self {
            children: node.children_with_tokens(),
            schema: schema_of(node.kind()),
            section: 0,
        }
    }

    /// Section the next child will be classified in
    pub fn section(&self) -> u8 {
        self.section
    }
}

/// Section a direct child of `node` is classified in
pub fn section_of(node: &SyntaxNode, child: &SyntaxElement) -> Option<u8> {
    let mut scan = RoleScan::new(node);
    loop {
        let section = scan.section();
        let (candidate, _) = scan.next()?;
        if candidate == *child {
            return Some(section);
        }
    }
}

impl Iterator for RoleScan {
    type Item = (SyntaxElement, Option<Role>);

    fn next(&mut self) -> Option<Self::Item> {
        let child = self.children.next()?;
        let Some(schema) = self.schema else {
            return Some((child, None));
        };
        let kind = child.kind();
        let role = schema.classify(self.section, kind);
        if child.as_token().is_some() && schema.is_delimiter(kind) {
            self.section = self.section.saturating_add(1);
        }
        Some((child, role))
    }
}

/// Role queries over the direct children of a node
pub trait HasRoles {
    /// Role schema of this node's kind, if it is a composite with roles
    fn schema(&self) -> Option<&'static RoleSchema>;

    /// Direct children paired with their roles, in source order
    fn role_scan(&self) -> RoleScan;

    /// The child holding `role`, or `None` if the role is empty.
    ///
    /// For unique roles, finding several children is a fault.
    fn find_child_by_role(&self, role: Role) -> Result<Option<SyntaxElement>, ConsistencyFault>;

    /// Every child holding `role`, in source order
    fn find_children_by_role(&self, role: Role) -> Vec<SyntaxElement>;

    /// Role of a direct child, or `None` if it holds no role
    fn role_of(&self, child: &SyntaxElement) -> Result<Option<Role>, ConsistencyFault>;

    /// Direct children whose kind is in `set`, in source order
    fn find_children_by_group(&self, set: KindSet) -> Vec<SyntaxElement>;

    /// The child holding a role the grammar guarantees is filled
    fn required_child_by_role(&self, role: Role) -> Result<SyntaxElement, ConsistencyFault>;

    fn child_node_by_role(&self, role: Role) -> Result<Option<SyntaxNode>, ConsistencyFault> {
        Ok(self.find_child_by_role(role)?.and_then(|e| e.into_node()))
    }

    fn child_token_by_role(&self, role: Role) -> Result<Option<SyntaxToken>, ConsistencyFault> {
        Ok(self.find_child_by_role(role)?.and_then(|e| e.into_token()))
    }

    fn child_nodes_by_role(&self, role: Role) -> Vec<SyntaxNode> {
        self.find_children_by_role(role)
            .into_iter()
            .filter_map(|e| e.into_node())
            .collect()
    }
}

impl HasRoles for SyntaxNode {
    fn schema(&self) -> Option<&'static RoleSchema> {
        schema_of(self.kind())
    }

    fn role_scan(&self) -> RoleScan {
        RoleScan::new(self)
    }

    fn find_child_by_role(&self, role: Role) -> Result<Option<SyntaxElement>, ConsistencyFault> {
        let mut matches = self
            .role_scan()
            .filter(|(_, r)| *r == Some(role))
            .map(|(child, _)| child);
        let first = matches.next();
        if first.is_some() && role.is_unique() {
            let extra = matches.count();
            if extra > 0 {
                let fault = ConsistencyFault::DuplicateRole {
                    parent: self.kind(),
                    role,
                    count: extra + 1,
                };
                tracing::error!("{fault}");
                return Err(fault);
            }
        }
        Ok(first)
    }

    fn find_children_by_role(&self, role: Role) -> Vec<SyntaxElement> {
        self.role_scan()
            .filter(|(_, r)| *r == Some(role))
            .map(|(child, _)| child)
            .collect()
    }

    fn role_of(&self, child: &SyntaxElement) -> Result<Option<Role>, ConsistencyFault> {
        if child.parent().as_ref() != Some(self) {
            let fault = ConsistencyFault::NotAChild {
                parent: self.kind(),
                child: child.kind(),
                range: child.text_range(),
            };
            tracing::error!("{fault}");
            return Err(fault);
        }
        Ok(self
            .role_scan()
            .find(|(candidate, _)| candidate == child)
            .and_then(|(_, role)| role))
    }

    fn find_children_by_group(&self, set: KindSet) -> Vec<SyntaxElement> {
        self.children_with_tokens()
            .filter(|child| set.contains(child.kind()))
            .collect()
    }

    fn required_child_by_role(&self, role: Role) -> Result<SyntaxElement, ConsistencyFault> {
        self.find_child_by_role(role)?.ok_or_else(|| {
            let fault = ConsistencyFault::MissingRequiredChild {
                parent: self.kind(),
                role,
                range: self.text_range(),
            };
            tracing::error!("{fault}");
            fault
        })
    }
}

/// Read-only union of several modifier lists.
///
/// Not part of any tree. A record component and the matching parameter of
/// the record's explicit canonical constructor both carry modifiers; this
/// presents them as one list, earlier sublists first.
#[derive(Debug, Clone)]
pub struct CompositeModifierList {
    sublists: Vec<SyntaxNode>,
}

impl CompositeModifierList {
    /// Aggregate the given nodes, ignoring any that are not modifier lists
    pub fn new(sublists: impl IntoIterator<Item = SyntaxNode>) -> Self {
        Self {
            sublists: sublists
                .into_iter()
                .filter(|node| node.kind() == SyntaxKind::MODIFIER_LIST)
                .collect(),
        }
    }

    pub fn sublists(&self) -> &[SyntaxNode] {
        &self.sublists
    }

    /// Whether any sublist carries the modifier keyword
    pub fn has_modifier(&self, keyword: SyntaxKind) -> bool {
        self.sublists.iter().any(|list| {
            list.find_children_by_role(Role::ModifierKeyword)
                .iter()
                .any(|modifier| modifier.kind() == keyword)
        })
    }

    /// Annotations of every sublist, in sublist order
    pub fn annotations(&self) -> Vec<SyntaxNode> {
        self.sublists
            .iter()
            .flat_map(|list| list.child_nodes_by_role(Role::Annotation))
            .collect()
    }

    /// First annotation whose name is `name`, or ends with `.name`
    pub fn find_annotation(&self, name: &str) -> Option<SyntaxNode> {
        self.annotations().into_iter().find(|annotation| {
            annotation_name(annotation).is_some_and(|qualified| {
                qualified == name
                    || qualified
                        .strip_suffix(name)
                        .is_some_and(|prefix| prefix.ends_with('.'))
            })
        })
    }

    pub fn is_empty(&self) -> bool {
        self.sublists
            .iter()
            .all(|list| list.children_with_tokens().all(|c| c.kind().is_trivia()))
    }
}

/// Qualified name of an annotation, without trivia
fn annotation_name(annotation: &SyntaxNode) -> Option<String> {
    let reference = annotation.child_node_by_role(Role::ClassReference).ok()??;
    Some(
        reference
            .descendants_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_string())
            .collect(),
    )
}
