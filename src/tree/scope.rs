//! Declaration scope bridge
//!
//! Nodes that introduce names (classes, methods, blocks, loops, patterns,
//! guards) report them to a [`ScopeProcessor`] during a scan that walks
//! from a reference up to the root. A node is told which of its children
//! the scan came from (`last_parent`) and only exposes what is visible
//! from there. Returning `false` anywhere stops the whole scan.

use smol_str::SmolStr;

use super::composite::HasRoles;
use super::role::Role;
use crate::parser::{SyntaxKind, SyntaxNode};

/// What declared a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    Class,
    TypeParameter,
    Field,
    Method,
    Parameter,
    RecordComponent,
    LocalVariable,
    PatternVariable,
}

/// A name and the node that declares it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    pub name: SmolStr,
    pub declaration: SyntaxNode,
    pub kind: BindingKind,
}

/// State threaded through a scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveState {
    /// Only bindings with this name are of interest
    pub name_hint: Option<SmolStr>,
}

impl ResolveState {
    pub fn named(name: impl Into<SmolStr>) -> Self {
        Self {
            name_hint: Some(name.into()),
        }
    }

    pub fn accepts(&self, name: &str) -> bool {
        self.name_hint.as_deref().is_none_or(|hint| hint == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeEvent {
    /// The node is about to report the declarations it holds
    DeclarationHolder(SyntaxNode),
}

/// Receiver of bindings during a scan
pub trait ScopeProcessor {
    /// Called once per visible binding. `false` stops the scan.
    fn execute(&mut self, binding: &Binding, state: &ResolveState) -> bool;

    fn handle_event(&mut self, _event: ScopeEvent) {}
}

/// Nodes that can contribute bindings to a scan
pub trait DeclarationSource {
    /// Report the bindings visible from `last_parent` to `processor`.
    ///
    /// `last_parent` is the child the scan came up through, or `None` when
    /// another node forwards to this one. `place` is where the scan began.
    fn process_declarations(
        &self,
        processor: &mut dyn ScopeProcessor,
        state: &ResolveState,
        last_parent: Option<&SyntaxNode>,
        place: &SyntaxNode,
    ) -> bool;
}

impl DeclarationSource for SyntaxNode {
    fn process_declarations(
        &self,
        processor: &mut dyn ScopeProcessor,
        state: &ResolveState,
        last_parent: Option<&SyntaxNode>,
        place: &SyntaxNode,
    ) -> bool {
        let from_child = last_parent.filter(|child| child.parent().as_ref() == Some(self));
        let scan = Scan {
            processor,
            state,
            place,
        };
        match self.kind() {
            SyntaxKind::JAVA_FILE => scan.file(self),
            SyntaxKind::CLASS => scan.class(self),
            SyntaxKind::METHOD | SyntaxKind::ANNOTATION_METHOD => scan.method(self),
            SyntaxKind::CODE_BLOCK => scan.code_block(self, from_child),
            SyntaxKind::DECLARATION_STATEMENT => scan.declaration_statement(self, from_child),
            SyntaxKind::FOR_STATEMENT => scan.for_statement(self, from_child),
            SyntaxKind::FOREACH_STATEMENT => scan.foreach_statement(self, from_child),
            SyntaxKind::IF_STATEMENT => {
                scan.condition_into(self, from_child, Role::ThenBranch)
            }
            SyntaxKind::WHILE_STATEMENT => scan.condition_into(self, from_child, Role::LoopBody),
            SyntaxKind::SWITCH_LABELED_RULE => scan.switch_rule(self, from_child),
            SyntaxKind::SWITCH_LABEL_STATEMENT => scan.case_labels(self),
            SyntaxKind::CASE_LABEL_ELEMENT_LIST => match from_child {
                Some(_) => true,
                None => scan.all_children(self),
            },
            SyntaxKind::TYPE_TEST_PATTERN => scan.forward_role(self, Role::PatternVariable),
            SyntaxKind::PATTERN_VARIABLE => scan.declare(self, BindingKind::PatternVariable),
            SyntaxKind::RECORD_PATTERN => scan.forward_role(self, Role::DeconstructionList),
            SyntaxKind::DECONSTRUCTION_LIST => scan.all_children(self),
            SyntaxKind::UNNAMED_PATTERN => true,
            SyntaxKind::PARENTHESIZED_PATTERN => scan.forward_role(self, Role::Pattern),
            SyntaxKind::GUARDED_PATTERN => scan.guarded_pattern(self),
            SyntaxKind::INSTANCE_OF_EXPRESSION => scan.forward_role(self, Role::Pattern),
            SyntaxKind::PARENTH_EXPRESSION => scan.forward_role(self, Role::Expression),
            SyntaxKind::BINARY_EXPRESSION => scan.conditional_and(self, from_child),
            _ => true,
        }
    }
}

struct Scan<'a> {
    processor: &'a mut dyn ScopeProcessor,
    state: &'a ResolveState,
    place: &'a SyntaxNode,
}

impl Scan<'_> {
    fn forward(self, node: &SyntaxNode) -> bool {
        node.process_declarations(self.processor, self.state, None, self.place)
    }

    fn forward_role(self, node: &SyntaxNode, role: Role) -> bool {
        match node.child_node_by_role(role).ok().flatten() {
            Some(child) => self.forward(&child),
            None => true,
        }
    }

    fn all_children(self, node: &SyntaxNode) -> bool {
        node.children()
            .all(|child| child.process_declarations(self.processor, self.state, None, self.place))
    }

    fn declare(self, node: &SyntaxNode, kind: BindingKind) -> bool {
        declare(self.processor, self.state, node, kind)
    }

    fn file(self, file: &SyntaxNode) -> bool {
        self.processor
            .handle_event(ScopeEvent::DeclarationHolder(file.clone()));
        file.child_nodes_by_role(Role::Member)
            .iter()
            .all(|class| declare(self.processor, self.state, class, BindingKind::Class))
    }

    fn class(self, class: &SyntaxNode) -> bool {
        self.processor
            .handle_event(ScopeEvent::DeclarationHolder(class.clone()));
        if !type_parameters(self.processor, self.state, class) {
            return false;
        }
        if let Some(header) = class.child_node_by_role(Role::RecordHeader).ok().flatten() {
            for component in header.child_nodes_by_role(Role::RecordComponent) {
                if !declare(self.processor, self.state, &component, BindingKind::RecordComponent) {
                    return false;
                }
            }
        }
        for member in class.child_nodes_by_role(Role::Member) {
            let kind = match member.kind() {
                SyntaxKind::FIELD => BindingKind::Field,
                SyntaxKind::METHOD | SyntaxKind::ANNOTATION_METHOD => BindingKind::Method,
                SyntaxKind::CLASS => BindingKind::Class,
                _ => continue,
            };
            if !declare(self.processor, self.state, &member, kind) {
                return false;
            }
        }
        true
    }

    fn method(self, method: &SyntaxNode) -> bool {
        self.processor
            .handle_event(ScopeEvent::DeclarationHolder(method.clone()));
        if !type_parameters(self.processor, self.state, method) {
            return false;
        }
        let Some(parameters) = method.child_node_by_role(Role::ParameterList).ok().flatten() else {
            return true;
        };
        parameters
            .child_nodes_by_role(Role::Parameter)
            .iter()
            .all(|parameter| declare(self.processor, self.state, parameter, BindingKind::Parameter))
    }

    /// Declarations before `last_parent`, plus the bindings of the nearest
    /// preceding old-style case label
    fn code_block(self, block: &SyntaxNode, last_parent: Option<&SyntaxNode>) -> bool {
        self.processor
            .handle_event(ScopeEvent::DeclarationHolder(block.clone()));
        let statements = block.child_nodes_by_role(Role::Statement);
        let visible = match last_parent {
            Some(child) => statements
                .iter()
                .position(|s| s == child)
                .map_or(&statements[..], |index| &statements[..index]),
            None => &statements[..],
        };
        let mut seen_label = false;
        for statement in visible.iter().rev() {
            let proceed = match statement.kind() {
                SyntaxKind::DECLARATION_STATEMENT => statement.process_declarations(
                    self.processor,
                    self.state,
                    None,
                    self.place,
                ),
                SyntaxKind::SWITCH_LABEL_STATEMENT if !seen_label => {
                    seen_label = true;
                    statement.process_declarations(self.processor, self.state, None, self.place)
                }
                _ => true,
            };
            if !proceed {
                return false;
            }
        }
        true
    }

    fn declaration_statement(self, statement: &SyntaxNode, last_parent: Option<&SyntaxNode>) -> bool {
        for child in statement.children() {
            let proceed = match child.kind() {
                SyntaxKind::LOCAL_VARIABLE => {
                    declare(self.processor, self.state, &child, BindingKind::LocalVariable)
                }
                SyntaxKind::CLASS => declare(self.processor, self.state, &child, BindingKind::Class),
                _ => true,
            };
            if !proceed {
                return false;
            }
            if last_parent == Some(&child) {
                break;
            }
        }
        true
    }

    fn for_statement(self, statement: &SyntaxNode, last_parent: Option<&SyntaxNode>) -> bool {
        let Some(last_parent) = last_parent else {
            return true;
        };
        match statement.child_node_by_role(Role::ForInitialization).ok().flatten() {
            Some(init) if &init != last_parent => self.forward(&init),
            _ => true,
        }
    }

    /// The iteration parameter is in scope in the body, never in the
    /// iterated value, which is evaluated before it is bound
    fn foreach_statement(self, statement: &SyntaxNode, last_parent: Option<&SyntaxNode>) -> bool {
        let Some(last_parent) = last_parent else {
            return true;
        };
        let iterated = statement.child_node_by_role(Role::IteratedValue).ok().flatten();
        if iterated.as_ref() == Some(last_parent) {
            return true;
        }
        match statement.child_node_by_role(Role::IterationParameter).ok().flatten() {
            Some(parameter) => self.declare(&parameter, BindingKind::Parameter),
            None => true,
        }
    }

    /// Pattern bindings of a condition flow into the branch taken when it
    /// holds
    fn condition_into(self, statement: &SyntaxNode, last_parent: Option<&SyntaxNode>, branch: Role) -> bool {
        let Some(last_parent) = last_parent else {
            return true;
        };
        let taken = statement.child_node_by_role(branch).ok().flatten();
        if taken.as_ref() != Some(last_parent) {
            return true;
        }
        self.forward_role(statement, Role::Condition)
    }

    fn switch_rule(self, rule: &SyntaxNode, last_parent: Option<&SyntaxNode>) -> bool {
        let body = rule.child_node_by_role(Role::RuleBody).ok().flatten();
        if last_parent.is_some() && body.as_ref() != last_parent {
            return true;
        }
        self.case_labels(rule)
    }

    fn case_labels(self, label: &SyntaxNode) -> bool {
        self.forward_role(label, Role::CaseLabelElementList)
    }

    fn guarded_pattern(self, guarded: &SyntaxNode) -> bool {
        if let Some(pattern) = guarded.child_node_by_role(Role::Pattern).ok().flatten() {
            if !pattern.process_declarations(self.processor, self.state, None, self.place) {
                return false;
            }
        }
        self.forward_role(guarded, Role::GuardingExpression)
    }

    /// `a && b`: bindings of `a` are in scope in `b`, and both hold when
    /// the whole expression does
    fn conditional_and(self, binary: &SyntaxNode, last_parent: Option<&SyntaxNode>) -> bool {
        let is_and = binary
            .child_token_by_role(Role::OperationSign)
            .ok()
            .flatten()
            .is_some_and(|sign| sign.kind() == SyntaxKind::AMP_AMP);
        if !is_and {
            return true;
        }
        let left = binary.child_node_by_role(Role::LOperand).ok().flatten();
        let right = binary.child_node_by_role(Role::ROperand).ok().flatten();
        let operands = match last_parent {
            None => vec![left, right],
            Some(child) if right.as_ref() == Some(child) => vec![left],
            Some(_) => Vec::new(),
        };
        operands
            .into_iter()
            .flatten()
            .all(|operand| operand.process_declarations(self.processor, self.state, None, self.place))
    }
}

fn type_parameters(processor: &mut dyn ScopeProcessor, state: &ResolveState, owner: &SyntaxNode) -> bool {
    let Some(list) = owner.child_node_by_role(Role::TypeParameterList).ok().flatten() else {
        return true;
    };
    list.child_nodes_by_role(Role::TypeParameter)
        .iter()
        .all(|parameter| declare(processor, state, parameter, BindingKind::TypeParameter))
}

/// Name a declaration binds, or `None` for unnamed binders like `_`
pub fn binder_name(node: &SyntaxNode) -> Option<SmolStr> {
    let name = node.child_token_by_role(Role::Name).ok().flatten()?;
    if name.kind() == SyntaxKind::UNDERSCORE {
        return None;
    }
    Some(SmolStr::new(name.text()))
}

fn declare(
    processor: &mut dyn ScopeProcessor,
    state: &ResolveState,
    node: &SyntaxNode,
    kind: BindingKind,
) -> bool {
    let Some(name) = binder_name(node) else {
        return true;
    };
    if !state.accepts(&name) {
        return true;
    }
    let binding = Binding {
        name,
        declaration: node.clone(),
        kind,
    };
    tracing::trace!("binding {} ({:?})", binding.name, binding.kind);
    processor.execute(&binding, state)
}

/// Scan from `place` up to the root, asking every enclosing node for its
/// bindings. Returns `false` if the processor stopped the scan.
pub fn walk_up(processor: &mut dyn ScopeProcessor, place: &SyntaxNode, state: &ResolveState) -> bool {
    let mut last_parent = place.clone();
    let mut scope = Some(place.clone());
    while let Some(node) = scope {
        if !node.process_declarations(processor, state, Some(&last_parent), place) {
            tracing::debug!("scan from {:?} stopped at {:?}", place.kind(), node.kind());
            return false;
        }
        scope = node.parent();
        last_parent = node;
    }
    true
}

/// Collects every binding visible from a place, innermost first
#[derive(Debug, Default)]
pub struct BindingCollector {
    pub bindings: Vec<Binding>,
}

impl BindingCollector {
    pub fn names(&self) -> Vec<&str> {
        self.bindings.iter().map(|b| b.name.as_str()).collect()
    }
}

impl ScopeProcessor for BindingCollector {
    fn execute(&mut self, binding: &Binding, _state: &ResolveState) -> bool {
        self.bindings.push(binding.clone());
        true
    }
}

/// Stops at the first binding with the wanted name
#[derive(Debug)]
pub struct NameResolver {
    name: SmolStr,
    pub result: Option<Binding>,
}

impl NameResolver {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            result: None,
        }
    }
}

impl ScopeProcessor for NameResolver {
    fn execute(&mut self, binding: &Binding, _state: &ResolveState) -> bool {
        if binding.name == self.name {
            self.result = Some(binding.clone());
            return false;
        }
        true
    }
}

/// Bindings visible at `place`, innermost first
pub fn visible_bindings(place: &SyntaxNode) -> Vec<Binding> {
    let mut collector = BindingCollector::default();
    walk_up(&mut collector, place, &ResolveState::default());
    collector.bindings
}

/// The innermost declaration of `name` visible at `place`
pub fn resolve_name(place: &SyntaxNode, name: &str) -> Option<Binding> {
    let mut resolver = NameResolver::new(name);
    walk_up(&mut resolver, place, &ResolveState::named(name));
    resolver.result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn reference(root: &SyntaxNode, name: &str) -> SyntaxNode {
        root.descendants()
            .filter(|n| n.kind() == SyntaxKind::REFERENCE_EXPRESSION)
            .find(|n| n.text() == name)
            .unwrap()
    }

    #[test]
    fn test_method_parameters_are_visible_in_body() {
        let root = parse("class A { int f; void m(int p) { int l = 1; use(p); } }").syntax();
        let place = reference(&root, "p");
        let names = BindingCollector {
            bindings: visible_bindings(&place),
        };
        assert_eq!(names.names(), vec!["l", "p", "f", "m", "A"]);
    }

    #[test]
    fn test_later_locals_are_not_visible() {
        let root = parse("class A { void m() { use(x); int x = 1; } }").syntax();
        let place = reference(&root, "x");
        assert!(resolve_name(&place, "x").is_none());
    }

    #[test]
    fn test_instanceof_binding_flows_through_and() {
        let root = parse("class A { void m(Object o) { if (o instanceof String s && s.isEmpty()) {} } }")
            .syntax();
        let place = reference(&root, "s");
        let binding = resolve_name(&place, "s").unwrap();
        assert_eq!(binding.kind, BindingKind::PatternVariable);
    }

    #[test]
    fn test_resolver_stops_at_innermost() {
        let root = parse("class A { int x; void m(int x) { use(x); } }").syntax();
        let place = reference(&root, "x");
        let binding = resolve_name(&place, "x").unwrap();
        assert_eq!(binding.kind, BindingKind::Parameter);
    }
}
