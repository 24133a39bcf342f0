//! File-level and declaration wrappers: imports, classes, members, types

use super::{
    AstNode, SyntaxKind, SyntaxNode, SyntaxToken, consistent, required_node, role_node,
    role_nodes, role_token,
};
use super::{CodeBlock, Expression};
use crate::tree::{CompositeModifierList, HasRoles, Role};

// ============================================================================
// File level
// ============================================================================

ast_node!(JavaFile, JAVA_FILE);

impl JavaFile {
    role_node_method!(package_statement, PackageStatement, PackageStatement);
    role_node_method!(import_list, ImportList, ImportList);
    role_nodes_method!(classes, Class, Member);

    /// Imports in source order, empty when the file has none
    pub fn imports(&self) -> Vec<ImportStatement> {
        self.import_list()
            .map(|list| list.imports())
            .unwrap_or_default()
    }
}

ast_node!(PackageStatement, PACKAGE_STATEMENT);

impl PackageStatement {
    role_node_method!(reference, CodeReference, PackageReference);

    /// Dotted package name, e.g. `com.example.app`
    pub fn package_name(&self) -> Option<String> {
        self.reference().map(|r| r.qualified_name())
    }
}

ast_node!(ImportList, IMPORT_LIST);

impl ImportList {
    role_nodes_method!(imports, ImportStatement, ImportStatement);
}

/// `import a.b.C;`, `import a.b.*;` or `import static a.B.m;`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportStatement(pub(crate) SyntaxNode);

impl AstNode for ImportStatement {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::IMPORT_STATEMENT | SyntaxKind::IMPORT_STATIC_STATEMENT
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self(node))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl ImportStatement {
    role_node_method!(reference, CodeReference, ImportReference);

    pub fn is_static(&self) -> bool {
        self.0.kind() == SyntaxKind::IMPORT_STATIC_STATEMENT
    }

    /// Whether the import ends in `.*`
    pub fn is_on_demand(&self) -> bool {
        role_token(&self.0, Role::OnDemand).is_some()
    }

    pub fn imported_name(&self) -> Option<String> {
        self.reference().map(|r| r.qualified_name())
    }
}

// ============================================================================
// References
// ============================================================================

ast_node!(CodeReference, JAVA_CODE_REFERENCE);

impl CodeReference {
    role_node_method!(qualifier, CodeReference, Qualifier);
    role_node_method!(type_arguments, ReferenceParameterList, ReferenceParameterList);

    pub fn reference_name(&self) -> Option<SyntaxToken> {
        role_token(&self.0, Role::ReferenceName)
    }

    /// Dotted name without type arguments
    pub fn qualified_name(&self) -> String {
        let last = self
            .reference_name()
            .map(|t| t.text().to_string())
            .unwrap_or_default();
        match self.qualifier() {
            Some(qualifier) => format!("{}.{}", qualifier.qualified_name(), last),
            None => last,
        }
    }
}

/// `extends`, `implements`, `throws` and type-parameter bound lists
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceList(pub(crate) SyntaxNode);

impl AstNode for ReferenceList {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::EXTENDS_LIST
                | SyntaxKind::IMPLEMENTS_LIST
                | SyntaxKind::THROWS_LIST
                | SyntaxKind::EXTENDS_BOUND_LIST
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self(node))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl ReferenceList {
    role_nodes_method!(references, CodeReference, TypeReference);
}

// ============================================================================
// Modifiers and annotations
// ============================================================================

ast_node!(ModifierList, MODIFIER_LIST);

impl ModifierList {
    role_nodes_method!(annotations, Annotation, Annotation);

    pub fn modifiers(&self) -> Vec<SyntaxKind> {
        self.0
            .find_children_by_role(Role::ModifierKeyword)
            .into_iter()
            .map(|element| element.kind())
            .collect()
    }

    pub fn has_modifier(&self, keyword: SyntaxKind) -> bool {
        self.modifiers().contains(&keyword)
    }

    /// Annotation whose name is `name` or ends in `.name`
    pub fn find_annotation(&self, name: &str) -> Option<Annotation> {
        self.annotations()
            .into_iter()
            .find(|annotation| annotation.matches_name(name))
    }
}

ast_node!(Annotation, ANNOTATION);

impl Annotation {
    role_node_method!(reference, CodeReference, ClassReference);
    role_node_method!(parameter_list, AnnotationParameterList, AnnotationParameterList);

    pub fn qualified_name(&self) -> Option<String> {
        self.reference().map(|r| r.qualified_name())
    }

    pub(crate) fn matches_name(&self, name: &str) -> bool {
        self.qualified_name().is_some_and(|qualified| {
            qualified == name
                || qualified
                    .strip_suffix(name)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}

ast_node!(AnnotationParameterList, ANNOTATION_PARAMETER_LIST);

impl AnnotationParameterList {
    role_nodes_method!(pairs, NameValuePair, NameValuePair);
}

ast_node!(NameValuePair, NAME_VALUE_PAIR);

impl NameValuePair {
    name_method!();

    /// Expression or nested annotation
    pub fn value(&self) -> Option<SyntaxNode> {
        consistent(self.0.child_node_by_role(Role::AnnotationValue))
    }
}

// ============================================================================
// Classes
// ============================================================================

/// Which keyword declared a class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassFlavor {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

ast_node!(Class, CLASS);

impl Class {
    name_method!();
    role_node_method!(modifier_list, ModifierList, ModifierList);
    role_node_method!(type_parameter_list, TypeParameterList, TypeParameterList);
    role_node_method!(record_header, RecordHeader, RecordHeader);
    role_node_method!(extends_list, ReferenceList, ExtendsList);
    role_node_method!(implements_list, ReferenceList, ImplementsList);
    role_nodes_method!(members, Member, Member);

    pub fn flavor(&self) -> ClassFlavor {
        let keyword = role_token(&self.0, Role::ClassKeyword).map(|t| t.kind());
        match keyword {
            Some(SyntaxKind::INTERFACE_KW) if role_token(&self.0, Role::At).is_some() => {
                ClassFlavor::Annotation
            }
            Some(SyntaxKind::INTERFACE_KW) => ClassFlavor::Interface,
            Some(SyntaxKind::ENUM_KW) => ClassFlavor::Enum,
            Some(SyntaxKind::RECORD_KW) => ClassFlavor::Record,
            _ => ClassFlavor::Class,
        }
    }

    pub fn fields(&self) -> Vec<Field> {
        self.members()
            .into_iter()
            .filter_map(|m| match m {
                Member::Field(f) => Some(f),
                _ => None,
            })
            .collect()
    }

    /// Methods, constructors included
    pub fn methods(&self) -> Vec<Method> {
        self.members()
            .into_iter()
            .filter_map(|m| match m {
                Member::Method(method) => Some(method),
                _ => None,
            })
            .collect()
    }

    pub fn constructors(&self) -> Vec<Method> {
        self.methods()
            .into_iter()
            .filter(|m| m.is_constructor())
            .collect()
    }

    pub fn inner_classes(&self) -> Vec<Class> {
        self.members()
            .into_iter()
            .filter_map(|m| match m {
                Member::Class(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    /// The constructor of a record whose parameters mirror its components,
    /// or its compact constructor
    pub fn canonical_constructor(&self) -> Option<Method> {
        let header = self.record_header()?;
        let component_types: Vec<Option<String>> = header
            .components()
            .iter()
            .map(|c| c.declared_type().map(|t| t.syntax().text().to_string()))
            .collect();
        self.constructors().into_iter().find(|ctor| {
            if ctor.is_compact_constructor() {
                return true;
            }
            let parameter_types: Vec<Option<String>> = ctor
                .parameters()
                .iter()
                .map(|p| p.declared_type().map(|t| t.syntax().text().to_string()))
                .collect();
            parameter_types == component_types
        })
    }
}

ast_enum! {
    /// A class body member
    Member {
        Class(Class) = CLASS,
        Field(Field) = FIELD,
        Method(Method) = METHOD,
        AnnotationMethod(AnnotationMethod) = ANNOTATION_METHOD,
        Initializer(ClassInitializer) = CLASS_INITIALIZER,
    }
}

ast_node!(ClassInitializer, CLASS_INITIALIZER);

impl ClassInitializer {
    role_node_method!(modifier_list, ModifierList, ModifierList);
    required_node_method!(body, CodeBlock, MethodBody);

    pub fn is_static(&self) -> bool {
        self.modifier_list()
            .is_some_and(|m| m.has_modifier(SyntaxKind::STATIC_KW))
    }
}

// ============================================================================
// Type parameters and types
// ============================================================================

ast_node!(TypeParameterList, TYPE_PARAMETER_LIST);

impl TypeParameterList {
    role_nodes_method!(parameters, TypeParameter, TypeParameter);
}

ast_node!(TypeParameter, TYPE_PARAMETER);

impl TypeParameter {
    name_method!();
    role_node_method!(bound_list, ReferenceList, ExtendsList);

    pub fn bounds(&self) -> Vec<CodeReference> {
        self.bound_list()
            .map(|list| list.references())
            .unwrap_or_default()
    }
}

ast_node!(ReferenceParameterList, REFERENCE_PARAMETER_LIST);

impl ReferenceParameterList {
    role_nodes_method!(arguments, TypeElement, TypeArgument);
}

ast_node!(TypeElement, TYPE);

impl TypeElement {
    role_node_method!(reference, CodeReference, ClassReference);
    role_node_method!(component_type, TypeElement, ComponentType);
    role_token_method!(primitive, PrimitiveType);

    pub fn is_wildcard(&self) -> bool {
        role_token(&self.0, Role::Wildcard).is_some()
    }

    pub fn is_varargs(&self) -> bool {
        role_token(&self.0, Role::Ellipsis).is_some()
    }

    /// Number of `[]` pairs written directly on this type
    pub fn array_dimensions(&self) -> usize {
        self.0
            .children_with_tokens()
            .filter(|e| e.kind() == SyntaxKind::L_BRACKET)
            .count()
    }
}

// ============================================================================
// Variables
// ============================================================================

ast_node!(Field, FIELD);

impl Field {
    name_method!();
    role_node_method!(modifier_list, ModifierList, ModifierList);
    role_node_method!(declared_type, TypeElement, Type);
    role_node_method!(initializer, Expression, Initializer);
}

ast_node!(LocalVariable, LOCAL_VARIABLE);

impl LocalVariable {
    name_method!();
    role_node_method!(initializer, Expression, Initializer);

    /// Later declarators of `int a, b;` share the first one's modifiers
    pub fn modifier_list(&self) -> Option<ModifierList> {
        role_node(&self.first_declarator(), Role::ModifierList)
    }

    /// The written type; later declarators share the first one's
    pub fn declared_type(&self) -> Option<TypeElement> {
        role_node(&self.first_declarator(), Role::Type)
    }

    fn first_declarator(&self) -> SyntaxNode {
        if role_node::<TypeElement>(&self.0, Role::Type).is_some() {
            return self.0.clone();
        }
        self.0
            .parent()
            .and_then(|parent| {
                parent
                    .children()
                    .find(|sibling| sibling.kind() == SyntaxKind::LOCAL_VARIABLE)
            })
            .unwrap_or_else(|| self.0.clone())
    }
}

// ============================================================================
// Methods and parameters
// ============================================================================

ast_node!(Method, METHOD);

impl Method {
    name_method!();
    role_node_method!(modifier_list, ModifierList, ModifierList);
    role_node_method!(type_parameter_list, TypeParameterList, TypeParameterList);
    role_node_method!(return_type, TypeElement, ReturnType);
    role_node_method!(parameter_list, ParameterList, ParameterList);
    role_node_method!(throws_list, ReferenceList, ThrowsList);
    role_node_method!(body, CodeBlock, MethodBody);

    /// Constructors have no return type
    pub fn is_constructor(&self) -> bool {
        self.return_type().is_none()
    }

    /// `Name { ... }` inside a record
    pub fn is_compact_constructor(&self) -> bool {
        self.is_constructor() && self.parameter_list().is_none()
    }

    pub fn parameters(&self) -> Vec<Parameter> {
        self.parameter_list()
            .map(|list| list.parameters())
            .unwrap_or_default()
    }

    pub fn is_abstract(&self) -> bool {
        self.body().is_none()
    }
}

ast_node!(AnnotationMethod, ANNOTATION_METHOD);

impl AnnotationMethod {
    name_method!();
    role_node_method!(modifier_list, ModifierList, ModifierList);
    role_node_method!(return_type, TypeElement, ReturnType);

    /// Expression or annotation after `default`
    pub fn default_value(&self) -> Option<SyntaxNode> {
        consistent(self.0.child_node_by_role(Role::AnnotationDefaultValue))
    }
}

ast_node!(ParameterList, PARAMETER_LIST);

impl ParameterList {
    role_nodes_method!(parameters, Parameter, Parameter);
}

ast_node!(Parameter, PARAMETER);

impl Parameter {
    name_method!();
    role_node_method!(modifier_list, ModifierList, ModifierList);
    role_node_method!(declared_type, TypeElement, Type);

    pub fn is_varargs(&self) -> bool {
        self.declared_type().is_some_and(|t| t.is_varargs())
    }
}

ast_node!(RecordHeader, RECORD_HEADER);

impl RecordHeader {
    role_nodes_method!(components, RecordComponent, RecordComponent);
}

ast_node!(RecordComponent, RECORD_COMPONENT);

impl RecordComponent {
    name_method!();
    role_node_method!(modifier_list, ModifierList, ModifierList);
    role_node_method!(declared_type, TypeElement, Type);

    pub fn record(&self) -> Option<Class> {
        self.0
            .parent()
            .and_then(|header| header.parent())
            .and_then(Class::cast)
    }

    /// The component's own modifiers together with those on the matching
    /// parameter of an explicit canonical constructor
    pub fn composite_modifier_list(&self) -> CompositeModifierList {
        let mut lists: Vec<SyntaxNode> = self
            .modifier_list()
            .map(|m| m.syntax().clone())
            .into_iter()
            .collect();
        if let Some(parameter) = self.canonical_parameter() {
            lists.extend(parameter.modifier_list().map(|m| m.syntax().clone()));
        }
        CompositeModifierList::new(lists)
    }

    fn canonical_parameter(&self) -> Option<Parameter> {
        let record = self.record()?;
        let index = record
            .record_header()?
            .components()
            .iter()
            .position(|c| c == self)?;
        record
            .canonical_constructor()?
            .parameters()
            .into_iter()
            .nth(index)
    }
}

