//! Mutation guard: grammar-preserving replace, delete and insert
//!
//! These functions assume the caller checked that every element belongs
//! to a mutable tree; [`super::SyntaxTree`] does that and is the intended
//! entry point.

use std::ops::RangeInclusive;

use rowan::NodeOrToken;

use super::composite::{HasRoles, section_of};
use super::error::{ConsistencyFault, MutationError, MutationResult};
use super::factory;
use super::options::TreeOptions;
use super::precedence::needs_parentheses;
use super::role::Role;
use super::schema::list_separator;
use crate::parser::{SyntaxElement, SyntaxKind, SyntaxNode, kind_set};

/// Replace `old` with `new`, parenthesizing expressions where precedence
/// requires it. Returns the element actually inserted.
pub fn replace(
    parent: &SyntaxNode,
    old: &SyntaxElement,
    new: SyntaxElement,
) -> MutationResult<SyntaxElement> {
    let role = parent.role_of(old)?;
    if let NodeOrToken::Node(node) = &new {
        if parent.ancestors().any(|ancestor| &ancestor == node) {
            let fault = ConsistencyFault::SelfContainment {
                kind: node.kind(),
                range: node.text_range(),
            };
            tracing::error!("{fault}");
            return Err(fault.into());
        }
    }
    let mut new = factory::detached(new);

    if let (Some(role), Some(schema)) = (role, parent.schema()) {
        let section = section_of(parent, old).unwrap_or(0);
        if schema.classify(section, new.kind()) != Some(role) {
            return Err(MutationError::RoleMismatch {
                parent: parent.kind(),
                role,
                found: new.kind(),
            });
        }
        let wrap = match &new {
            NodeOrToken::Node(node) if needs_parentheses(parent, role, node) => Some(node.clone()),
            _ => None,
        };
        if let Some(node) = wrap {
            tracing::debug!(
                "parenthesizing {:?} as {:?} of {:?}",
                node.kind(),
                role,
                parent.kind()
            );
            new = factory::parenthesize(node).into();
        }
    }

    let index = old.index();
    tracing::trace!("replace {:?} with {:?} at {}", old.kind(), new.kind(), index);
    parent.splice_children(index..index + 1, vec![new.clone()]);
    Ok(new)
}

/// Remove `child` from `parent`, applying the policy of its role
pub fn delete(
    parent: &SyntaxNode,
    child: &SyntaxElement,
    options: &TreeOptions,
) -> MutationResult<()> {
    let role = parent.role_of(child)?;
    let kind = parent.kind();

    match role {
        Some(Role::LoopBody) if kind_set::LOOPS.contains(kind) => {
            substitute(parent, child, factory::empty_block_statement())
        }
        Some(Role::ThenBranch) if kind == SyntaxKind::IF_STATEMENT => {
            substitute(parent, child, factory::empty_block_statement())
        }
        Some(Role::ForInitialization) if kind == SyntaxKind::FOR_STATEMENT => {
            substitute(parent, child, factory::empty_statement())
        }
        Some(Role::Variable) if kind == SyntaxKind::DECLARATION_STATEMENT => {
            delete_variable(parent, child, options)
        }
        Some(Role::ElseBranch) if kind == SyntaxKind::IF_STATEMENT => {
            let range = else_range(parent, child);
            remove(parent, range);
            Ok(())
        }
        Some(role) if is_list_element(kind, role) => {
            let range = list_element_range(parent, child, options);
            remove(parent, range);
            Ok(())
        }
        Some(_) => {
            remove(parent, child.index()..=child.index());
            Ok(())
        }
        None if child.kind().is_trivia() || parent.schema().is_none() => {
            remove(parent, child.index()..=child.index());
            Ok(())
        }
        None => Err(MutationError::Unremovable {
            parent: kind,
            child: child.kind(),
        }),
    }
}

/// Insert `element` into separated list `list`, after `anchor` or first
pub fn insert_list_element(
    list: &SyntaxNode,
    element: SyntaxElement,
    anchor: Option<&SyntaxElement>,
) -> MutationResult<SyntaxElement> {
    let kind = list.kind();
    let separator = list_separator(kind).ok_or(MutationError::NotAList(kind))?;
    let schema = list.schema().ok_or(MutationError::NotAList(kind))?;
    let element = factory::detached(element);
    let role = match schema.classify(0, element.kind()) {
        Some(role) if is_list_element(kind, role) => role,
        _ => {
            return Err(MutationError::RoleMismatch {
                parent: kind,
                role: list_element_role(kind),
                found: element.kind(),
            });
        }
    };

    let existing = list.find_children_by_role(role);
    let (index, pieces) = match anchor {
        Some(anchor) => {
            list.role_of(anchor)?;
            let mut pieces = separator_tokens(separator);
            pieces.push(element.clone());
            (anchor.index() + 1, pieces)
        }
        None => match existing.first() {
            Some(first) => {
                let mut pieces = vec![element.clone()];
                pieces.extend(separator_tokens(separator));
                (first.index(), pieces)
            }
            None => empty_list_insertion(list, element.clone()),
        },
    };
    tracing::trace!("insert {:?} into {:?} at {}", element.kind(), kind, index);
    list.splice_children(index..index, pieces);
    Ok(element)
}

fn is_list_element(kind: SyntaxKind, role: Role) -> bool {
    list_separator(kind).is_some() && !role.is_unique() && role != Role::Separator
}

fn list_element_role(kind: SyntaxKind) -> Role {
    super::schema::schema_of(kind)
        .and_then(|schema| schema.roles().find(|role| is_list_element(kind, *role)))
        .unwrap_or(Role::ListElement)
}

fn separator_tokens(separator: SyntaxKind) -> Vec<SyntaxElement> {
    match separator {
        SyntaxKind::AMP => vec![
            factory::whitespace(" ").into(),
            factory::token(SyntaxKind::AMP, "&").into(),
            factory::whitespace(" ").into(),
        ],
        _ => vec![
            factory::token(separator, ",").into(),
            factory::whitespace(" ").into(),
        ],
    }
}

/// The first element of an empty list goes after its opening bracket or
/// list keyword, else at the start
fn empty_list_insertion(list: &SyntaxNode, element: SyntaxElement) -> (usize, Vec<SyntaxElement>) {
    let opener = list.role_scan().find(|(_, role)| {
        matches!(role, Some(Role::LParen | Role::LAngle | Role::ListKeyword))
    });
    match opener {
        Some((keyword, Some(Role::ListKeyword))) => (
            keyword.index() + 1,
            vec![factory::whitespace(" ").into(), element],
        ),
        Some((bracket, _)) => (bracket.index() + 1, vec![element]),
        None => (0, vec![element]),
    }
}

/// Put `replacement` where `child` was, for roles that cannot be empty
fn substitute(
    parent: &SyntaxNode,
    child: &SyntaxElement,
    replacement: SyntaxNode,
) -> MutationResult<()> {
    tracing::debug!(
        "substituting {:?} for deleted {:?} of {:?}",
        replacement.kind(),
        child.kind(),
        parent.kind()
    );
    let index = child.index();
    parent.splice_children(index..index + 1, vec![replacement.into()]);
    Ok(())
}

/// Remove one variable of a declaration statement.
///
/// Only the first variable carries the modifiers and the type, so those
/// move to its successor. The last remaining variable takes the whole
/// statement with it, under the policy of the statement's own parent.
fn delete_variable(
    declaration: &SyntaxNode,
    variable: &SyntaxElement,
    options: &TreeOptions,
) -> MutationResult<()> {
    let variables = declaration.child_nodes_by_role(Role::Variable);
    if variables.len() == 1 {
        return match declaration.parent() {
            Some(holder) => delete(&holder, &declaration.clone().into(), options),
            None => {
                remove(declaration, variable.index()..=variable.index());
                Ok(())
            }
        };
    }

    if let (Some(first), Some(next)) = (variables.first(), variables.get(1)) {
        if variable.as_node() == Some(first) {
            carry_declared_type(first, next)?;
        }
    }
    let range = list_element_range(declaration, variable, options);
    remove(declaration, range);
    Ok(())
}

/// Move everything up to the type, and the trivia after it, from `from`
/// to the front of `to`
fn carry_declared_type(from: &SyntaxNode, to: &SyntaxNode) -> MutationResult<()> {
    let Some(declared_type) = from.child_node_by_role(Role::Type)? else {
        return Ok(());
    };
    let end = trailing_trivia_end(&declared_type.into());
    let moved: Vec<SyntaxElement> = from.children_with_tokens().take(end + 1).collect();

    tracing::trace!("moving {} declared type elements to the next variable", moved.len());
    let moved: Vec<SyntaxElement> = moved.into_iter().map(factory::detached).collect();
    to.splice_children(0..0, moved);
    Ok(())
}

/// The else branch together with its keyword and the trivia before it
fn else_range(parent: &SyntaxNode, branch: &SyntaxElement) -> RangeInclusive<usize> {
    let start = parent
        .find_child_by_role(Role::ElseKeyword)
        .ok()
        .flatten()
        .map(|keyword| leading_trivia_start(&keyword))
        .unwrap_or(branch.index());
    start..=branch.index()
}

/// Range covering a list element and one adjacent separator.
///
/// The following separator is preferred, so `f(x, y, z)` minus `y` is
/// `f(x, z)`; the last element takes the preceding one instead.
fn list_element_range(
    parent: &SyntaxNode,
    child: &SyntaxElement,
    options: &TreeOptions,
) -> RangeInclusive<usize> {
    let Some(separator) = list_separator(parent.kind()) else {
        return child.index()..=child.index();
    };
    if let Some(next) = next_significant(child).filter(|e| e.kind() == separator) {
        let end = if options.trim_separator_trivia {
            trailing_trivia_end(&next)
        } else {
            next.index()
        };
        return child.index()..=end;
    }
    if let Some(prev) = prev_significant(child).filter(|e| e.kind() == separator) {
        let start = if options.trim_separator_trivia {
            leading_trivia_start(&prev)
        } else {
            prev.index()
        };
        return start..=child.index();
    }
    child.index()..=child.index()
}

fn next_significant(element: &SyntaxElement) -> Option<SyntaxElement> {
    let mut current = element.next_sibling_or_token();
    while let Some(e) = current {
        if !e.kind().is_trivia() {
            return Some(e);
        }
        current = e.next_sibling_or_token();
    }
    None
}

fn prev_significant(element: &SyntaxElement) -> Option<SyntaxElement> {
    let mut current = element.prev_sibling_or_token();
    while let Some(e) = current {
        if !e.kind().is_trivia() {
            return Some(e);
        }
        current = e.prev_sibling_or_token();
    }
    None
}

/// Index of the last trivia sibling directly after `element`, or its own
fn trailing_trivia_end(element: &SyntaxElement) -> usize {
    let mut end = element.index();
    let mut current = element.next_sibling_or_token();
    while let Some(e) = current {
        if !e.kind().is_trivia() {
            break;
        }
        end = e.index();
        current = e.next_sibling_or_token();
    }
    end
}

/// Index of the first trivia sibling directly before `element`, or its own
fn leading_trivia_start(element: &SyntaxElement) -> usize {
    let mut start = element.index();
    let mut current = element.prev_sibling_or_token();
    while let Some(e) = current {
        if !e.kind().is_trivia() {
            break;
        }
        start = e.index();
        current = e.prev_sibling_or_token();
    }
    start
}

/// Detach every child in `range`.
///
/// `splice_children` with an empty replacement only drops the first
/// element of the range, so the elements are collected and detached one by one.
fn remove(parent: &SyntaxNode, range: RangeInclusive<usize>) {
    tracing::trace!("remove children {:?} of {:?}", range, parent.kind());
    let doomed: Vec<SyntaxElement> = parent
        .children_with_tokens()
        .skip(*range.start())
        .take(range.end() + 1 - range.start())
        .collect();
    for element in doomed {
        match element {
            NodeOrToken::Node(node) => node.detach(),
            NodeOrToken::Token(token) => token.detach(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{FragmentKind, parse_fragment};

    fn mutable_expression(text: &str) -> SyntaxNode {
        let parse = parse_fragment(text, FragmentKind::Expression);
        assert!(parse.ok(), "{:?}", parse.errors);
        let root = SyntaxNode::new_root_mut(parse.green);
        root.first_child().unwrap()
    }

    #[test]
    fn test_replace_rejects_role_change() {
        let call = mutable_expression("f(x)");
        let args = call.child_node_by_role(Role::ArgumentList).unwrap().unwrap();
        let result = replace(&call, &args.into(), factory::statement(";").unwrap().into());
        assert!(matches!(result, Err(MutationError::RoleMismatch { .. })));
    }

    #[test]
    fn test_delete_from_single_element_list() {
        let call = mutable_expression("f(x)");
        let args = call.child_node_by_role(Role::ArgumentList).unwrap().unwrap();
        let x = args.find_child_by_role(Role::ListElement).unwrap().unwrap();
        delete(&args, &x, &TreeOptions::default()).unwrap();
        assert_eq!(call.text().to_string(), "f()");
    }

    #[test]
    fn test_remove_detaches_every_element_in_range() {
        let call = mutable_expression("f(x, y)");
        let args = call.child_node_by_role(Role::ArgumentList).unwrap().unwrap();
        remove(&args, 0..=3);
        assert_eq!(args.text().to_string(), "y)");
        assert_eq!(args.children_with_tokens().count(), 2);
    }

    #[test]
    fn test_delete_first_argument_leaves_no_separator() {
        let call = mutable_expression("f(x, y)");
        let args = call.child_node_by_role(Role::ArgumentList).unwrap().unwrap();
        let x = args.find_children_by_role(Role::ListElement)[0].clone();
        delete(&args, &x, &TreeOptions::default()).unwrap();
        assert_eq!(call.text().to_string(), "f(y)");
    }

    #[test]
    fn test_replace_with_parent_is_a_fault() {
        let product = mutable_expression("a * b");
        let rhs = product.find_child_by_role(Role::ROperand).unwrap().unwrap();
        let result = replace(&product, &rhs, product.clone().into());
        assert!(matches!(
            result,
            Err(MutationError::Fault(ConsistencyFault::SelfContainment { .. }))
        ));
        assert_eq!(product.text().to_string(), "a * b");
    }

    #[test]
    fn test_insert_into_empty_and_populated_list() {
        let call = mutable_expression("f()");
        let args = call.child_node_by_role(Role::ArgumentList).unwrap().unwrap();
        let a = insert_list_element(&args, factory::expression("a").unwrap().into(), None).unwrap();
        insert_list_element(&args, factory::expression("b").unwrap().into(), Some(&a)).unwrap();
        insert_list_element(&args, factory::expression("z").unwrap().into(), None).unwrap();
        assert_eq!(call.text().to_string(), "f(z, a, b)");
    }

    #[test]
    fn test_insert_rejects_non_lists() {
        let call = mutable_expression("f()");
        let result = insert_list_element(&call, factory::expression("a").unwrap().into(), None);
        assert_eq!(result, Err(MutationError::NotAList(SyntaxKind::METHOD_CALL_EXPRESSION)));
    }

    #[test]
    fn test_delete_unroled_token_is_refused() {
        let ty = SyntaxNode::new_root_mut(parse_fragment("int[]", FragmentKind::Type).green);
        let ty = ty.first_child().unwrap();
        let bracket = ty
            .children_with_tokens()
            .find(|c| c.kind() == SyntaxKind::L_BRACKET)
            .unwrap();
        assert!(matches!(
            delete(&ty, &bracket, &TreeOptions::default()),
            Err(MutationError::Unremovable { .. })
        ));
    }
}
