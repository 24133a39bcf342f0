//! Statement wrappers

use super::{
    AstNode, SyntaxKind, SyntaxNode, SyntaxToken, consistent, required_node, role_node,
    role_nodes, role_token,
};
use super::{Class, Expression, ExpressionList, LocalVariable, Parameter, Pattern};
use crate::tree::{HasRoles, Role};

ast_node!(CodeBlock, CODE_BLOCK);

impl CodeBlock {
    role_nodes_method!(statements, Statement, Statement);

    pub fn is_empty(&self) -> bool {
        self.statements().is_empty()
    }
}

ast_node!(BlockStatement, BLOCK_STATEMENT);

impl BlockStatement {
    required_node_method!(block, CodeBlock, Block);
}

ast_node!(EmptyStatement, EMPTY_STATEMENT);

ast_node!(ExpressionStatement, EXPRESSION_STATEMENT);

impl ExpressionStatement {
    role_node_method!(expression, Expression, Expression);

    /// `a++, b++` in a `for` initializer
    pub fn expression_list(&self) -> Option<ExpressionList> {
        role_node(&self.0, Role::Expression)
    }
}

ast_node!(DeclarationStatement, DECLARATION_STATEMENT);

impl DeclarationStatement {
    role_nodes_method!(variables, LocalVariable, Variable);
    role_node_method!(class, Class, Member);
}

ast_node!(IfStatement, IF_STATEMENT);

impl IfStatement {
    role_node_method!(condition, Expression, Condition);
    role_node_method!(then_branch, Statement, ThenBranch);
    role_node_method!(else_branch, Statement, ElseBranch);
    role_token_method!(else_keyword, ElseKeyword);
}

ast_node!(WhileStatement, WHILE_STATEMENT);

impl WhileStatement {
    role_node_method!(condition, Expression, Condition);
    role_node_method!(body, Statement, LoopBody);
}

ast_node!(DoWhileStatement, DO_WHILE_STATEMENT);

impl DoWhileStatement {
    role_node_method!(body, Statement, LoopBody);
    role_node_method!(condition, Expression, Condition);
}

ast_node!(ForStatement, FOR_STATEMENT);

impl ForStatement {
    role_node_method!(initialization, Statement, ForInitialization);
    role_node_method!(condition, Expression, Condition);
    role_node_method!(body, Statement, LoopBody);

    /// Single expression or comma list
    pub fn update(&self) -> Option<SyntaxNode> {
        consistent(self.0.child_node_by_role(Role::ForUpdate))
    }
}

ast_node!(ForeachStatement, FOREACH_STATEMENT);

impl ForeachStatement {
    role_node_method!(iteration_parameter, Parameter, IterationParameter);
    role_node_method!(iterated_value, Expression, IteratedValue);
    role_node_method!(body, Statement, LoopBody);
}

ast_node!(ReturnStatement, RETURN_STATEMENT);

impl ReturnStatement {
    role_node_method!(value, Expression, ReturnValue);
}

ast_node!(YieldStatement, YIELD_STATEMENT);

impl YieldStatement {
    role_node_method!(expression, Expression, Expression);
}

ast_node!(BreakStatement, BREAK_STATEMENT);

impl BreakStatement {
    role_token_method!(label, Label);
}

ast_node!(ContinueStatement, CONTINUE_STATEMENT);

impl ContinueStatement {
    role_token_method!(label, Label);
}

ast_node!(ThrowStatement, THROW_STATEMENT);

impl ThrowStatement {
    role_node_method!(exception, Expression, Exception);
}

ast_node!(SwitchStatement, SWITCH_STATEMENT);

impl SwitchStatement {
    role_node_method!(selector, Expression, Selector);
    role_node_method!(body, CodeBlock, SwitchBody);
}

ast_node!(SwitchLabelStatement, SWITCH_LABEL_STATEMENT);

impl SwitchLabelStatement {
    role_node_method!(element_list, CaseLabelElementList, CaseLabelElementList);

    /// `default:` as opposed to `case ...:`
    pub fn is_default(&self) -> bool {
        role_token(&self.0, Role::DefaultKeyword).is_some()
    }
}

ast_node!(SwitchLabeledRule, SWITCH_LABELED_RULE);

impl SwitchLabeledRule {
    role_node_method!(element_list, CaseLabelElementList, CaseLabelElementList);
    role_node_method!(body, Statement, RuleBody);

    pub fn is_default(&self) -> bool {
        role_token(&self.0, Role::DefaultKeyword).is_some()
    }
}

ast_node!(CaseLabelElementList, CASE_LABEL_ELEMENT_LIST);

impl CaseLabelElementList {
    role_nodes_method!(elements, CaseLabelElement, CaseLabelElement);
}

ast_node!(DefaultCaseLabelElement, DEFAULT_CASE_LABEL_ELEMENT);

impl DefaultCaseLabelElement {
    role_token_method!(keyword, DefaultKeyword);
}

ast_enum! {
    /// Any statement, including the forms only found in switch bodies
    Statement {
        Block(BlockStatement) = BLOCK_STATEMENT,
        Empty(EmptyStatement) = EMPTY_STATEMENT,
        Expression(ExpressionStatement) = EXPRESSION_STATEMENT,
        Declaration(DeclarationStatement) = DECLARATION_STATEMENT,
        If(IfStatement) = IF_STATEMENT,
        While(WhileStatement) = WHILE_STATEMENT,
        DoWhile(DoWhileStatement) = DO_WHILE_STATEMENT,
        For(ForStatement) = FOR_STATEMENT,
        Foreach(ForeachStatement) = FOREACH_STATEMENT,
        Return(ReturnStatement) = RETURN_STATEMENT,
        Yield(YieldStatement) = YIELD_STATEMENT,
        Break(BreakStatement) = BREAK_STATEMENT,
        Continue(ContinueStatement) = CONTINUE_STATEMENT,
        Throw(ThrowStatement) = THROW_STATEMENT,
        Switch(SwitchStatement) = SWITCH_STATEMENT,
        SwitchLabel(SwitchLabelStatement) = SWITCH_LABEL_STATEMENT,
        SwitchRule(SwitchLabeledRule) = SWITCH_LABELED_RULE,
    }
}

impl Statement {
    /// Loops own a `LoopBody` child
    pub fn is_loop(&self) -> bool {
        matches!(
            self,
            Statement::While(_) | Statement::DoWhile(_) | Statement::For(_) | Statement::Foreach(_)
        )
    }

    pub fn loop_body(&self) -> Option<Statement> {
        match self {
            Statement::While(s) => s.body(),
            Statement::DoWhile(s) => s.body(),
            Statement::For(s) => s.body(),
            Statement::Foreach(s) => s.body(),
            _ => None,
        }
    }

    /// The keyword token that opens the statement, if any
    pub fn keyword(&self) -> Option<SyntaxToken> {
        role_token(self.syntax(), Role::Keyword)
    }
}

/// One element of a `case` label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CaseLabelElement {
    Default(DefaultCaseLabelElement),
    Pattern(Pattern),
    Expression(Expression),
}

impl AstNode for CaseLabelElement {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind == SyntaxKind::DEFAULT_CASE_LABEL_ELEMENT
            || Pattern::can_cast(kind)
            || Expression::can_cast(kind)
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        if node.kind() == SyntaxKind::DEFAULT_CASE_LABEL_ELEMENT {
            return Some(Self::Default(DefaultCaseLabelElement(node)));
        }
        if Pattern::can_cast(node.kind()) {
            return Pattern::cast(node).map(Self::Pattern);
        }
        Expression::cast(node).map(Self::Expression)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Default(inner) => inner.syntax(),
            Self::Pattern(inner) => inner.syntax(),
            Self::Expression(inner) => inner.syntax(),
        }
    }
}

