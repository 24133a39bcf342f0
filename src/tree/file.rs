//! Edit session over a parsed Java file
//!
//! A [`SyntaxTree`] owns a mutable rowan tree and is the sanctioned way to
//! change it. Every successful edit bumps a generation counter; cached
//! child lists remember the generation they were computed at and are only
//! trusted while it is still current.

use std::cell::{Cell, RefCell};

use rowan::GreenNode;
use rustc_hash::FxHashMap;

use super::composite::HasRoles;
use super::error::{ConsistencyFault, MutationResult};
use super::guard;
use super::options::TreeOptions;
use crate::parser::{self, JavaFile, KindSet, SyntaxElement, SyntaxError, SyntaxNode, AstNode};

#[derive(Debug)]
struct CachedChildren {
    generation: u64,
    children: Vec<SyntaxElement>,
}

/// A mutable syntax tree with guarded edits and a children cache.
///
/// Rowan's mutable trees are not `Send`, so a session is confined to one
/// thread. Use [`SyntaxTree::green`] to hand an immutable snapshot to
/// readers on other threads.
#[derive(Debug)]
pub struct SyntaxTree {
    root: SyntaxNode,
    errors: Vec<SyntaxError>,
    options: TreeOptions,
    generation: Cell<u64>,
    children_cache: RefCell<FxHashMap<(SyntaxNode, KindSet), CachedChildren>>,
}

impl SyntaxTree {
    /// Parse Java source into an edit session with default options
    pub fn parse(source: &str) -> Self {
        Self::parse_with_options(source, TreeOptions::default())
    }

    pub fn parse_with_options(source: &str, options: TreeOptions) -> Self {
        let parse = parser::parse(source);
        let mut tree = Self::from_green(parse.green, options);
        tree.errors = parse.errors;
        tree
    }

    /// Start a session on a copy of an existing tree
    pub fn from_green(green: GreenNode, options: TreeOptions) -> Self {
        Self {
            root: SyntaxNode::new_root_mut(green),
            errors: Vec::new(),
            options,
            generation: Cell::new(0),
            children_cache: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    /// Typed view of the root, if it is a compilation unit
    pub fn java_file(&self) -> Option<JavaFile> {
        JavaFile::cast(self.root.clone())
    }

    /// Errors from parsing the source text
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    /// Incremented by every successful edit
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub fn text(&self) -> String {
        self.root.text().to_string()
    }

    /// Immutable snapshot of the current state, shareable across threads
    pub fn green(&self) -> GreenNode {
        self.root.green().into_owned()
    }

    /// Children of `node` whose kind is in `set`, cached for large results.
    ///
    /// Returns exactly what [`HasRoles::find_children_by_group`] returns.
    pub fn find_children_by_group(&self, node: &SyntaxNode, set: KindSet) -> Vec<SyntaxElement> {
        let key = (node.clone(), set);
        let generation = self.generation();
        if let Some(cached) = self.children_cache.borrow().get(&key) {
            if cached.generation == generation {
                tracing::trace!("children cache hit for {:?}", node.kind());
                return cached.children.clone();
            }
        }
        let children = node.find_children_by_group(set);
        if self.options.should_cache(children.len()) {
            tracing::trace!(
                "caching {} children of {:?} at generation {}",
                children.len(),
                node.kind(),
                generation
            );
            self.children_cache.borrow_mut().insert(
                key,
                CachedChildren {
                    generation,
                    children: children.clone(),
                },
            );
        }
        children
    }

    /// Number of cached child lists
    pub fn cached_entries(&self) -> usize {
        self.children_cache.borrow().len()
    }

    /// Replace a direct child of `parent`, parenthesizing expressions when
    /// precedence requires it. Returns the element now in the tree.
    pub fn replace_child(
        &self,
        parent: &SyntaxNode,
        old: &SyntaxElement,
        new: impl Into<SyntaxElement>,
    ) -> MutationResult<SyntaxElement> {
        self.check_owned(parent)?;
        let inserted = guard::replace(parent, old, new.into())?;
        self.invalidate("replace");
        Ok(inserted)
    }

    /// Delete a direct child of `parent`, keeping the grammar intact
    pub fn delete_child(&self, parent: &SyntaxNode, child: &SyntaxElement) -> MutationResult<()> {
        self.check_owned(parent)?;
        guard::delete(parent, child, &self.options)?;
        self.invalidate("delete");
        Ok(())
    }

    /// Insert into a separated list after `anchor`, or as the first element
    pub fn add_list_element(
        &self,
        list: &SyntaxNode,
        element: impl Into<SyntaxElement>,
        anchor: Option<&SyntaxElement>,
    ) -> MutationResult<SyntaxElement> {
        self.check_owned(list)?;
        let inserted = guard::insert_list_element(list, element.into(), anchor)?;
        self.invalidate("insert");
        Ok(inserted)
    }

    fn check_owned(&self, node: &SyntaxNode) -> Result<(), ConsistencyFault> {
        let root = node.ancestors().last();
        if root.as_ref() == Some(&self.root) {
            return Ok(());
        }
        let fault = ConsistencyFault::ForeignNode {
            kind: node.kind(),
            range: node.text_range(),
        };
        tracing::error!("{fault}");
        Err(fault)
    }

    fn invalidate(&self, edit: &str) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.children_cache.borrow_mut().clear();
        tracing::debug!("{edit} advanced tree to generation {generation}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SyntaxKind;
    use crate::tree::factory;
    use crate::tree::role::Role;

    fn switch_body(tree: &SyntaxTree) -> SyntaxNode {
        tree.root()
            .descendants()
            .find(|n| n.kind() == SyntaxKind::SWITCH_STATEMENT)
            .and_then(|n| n.child_node_by_role(Role::SwitchBody).ok().flatten())
            .unwrap()
    }

    fn many_cases(count: usize) -> String {
        let cases: String = (0..count).map(|i| format!("case {i}: break; ")).collect();
        format!("class A {{ void m(int x) {{ switch (x) {{ {cases}}} }} }}")
    }

    #[test]
    fn test_edits_advance_generation() {
        let tree = SyntaxTree::parse("class A { void m() { f(x, y); } }");
        assert_eq!(tree.generation(), 0);
        let list = tree
            .root()
            .descendants()
            .find(|n| n.kind() == SyntaxKind::EXPRESSION_LIST)
            .unwrap();
        let y = list.find_children_by_role(Role::ListElement)[1].clone();
        tree.delete_child(&list, &y).unwrap();
        assert_eq!(tree.generation(), 1);
        assert_eq!(tree.text(), "class A { void m() { f(x); } }");
    }

    #[test]
    fn test_large_results_are_cached_and_invalidated() {
        let tree = SyntaxTree::parse(&many_cases(12));
        let body = switch_body(&tree);
        let set = crate::parser::kind_set::STATEMENTS;
        let first = tree.find_children_by_group(&body, set);
        assert_eq!(first.len(), 24);
        assert_eq!(tree.cached_entries(), 1);

        let statement = first[1].clone();
        tree.delete_child(&body, &statement).unwrap();
        assert_eq!(tree.cached_entries(), 0);
        assert_eq!(tree.find_children_by_group(&body, set).len(), 23);
    }

    #[test]
    fn test_small_results_are_not_cached() {
        let tree = SyntaxTree::parse(&many_cases(3));
        let body = switch_body(&tree);
        tree.find_children_by_group(&body, crate::parser::kind_set::STATEMENTS);
        assert_eq!(tree.cached_entries(), 0);
    }

    #[test]
    fn test_foreign_nodes_are_rejected() {
        let tree = SyntaxTree::parse("class A {}");
        let other = factory::expression("a + b").unwrap();
        let left = other.find_child_by_role(Role::LOperand).unwrap().unwrap();
        let result = tree.replace_child(&other, &left, factory::expression("c").unwrap());
        assert!(matches!(
            result,
            Err(crate::tree::MutationError::Fault(ConsistencyFault::ForeignNode { .. }))
        ));
        assert_eq!(tree.generation(), 0);
    }

    #[test]
    fn test_green_snapshot_is_unaffected_by_later_edits() {
        let tree = SyntaxTree::parse("class A { int x = a * b; }");
        let before = tree.green();
        let binary = tree
            .root()
            .descendants()
            .find(|n| n.kind() == SyntaxKind::BINARY_EXPRESSION)
            .unwrap();
        let right = binary.find_child_by_role(Role::ROperand).unwrap().unwrap();
        tree.replace_child(&binary, &right, factory::expression("c").unwrap())
            .unwrap();
        assert_eq!(SyntaxNode::new_root(before).text().to_string(), "class A { int x = a * b; }");
        assert_eq!(tree.text(), "class A { int x = a * c; }");
    }
}
