//! Recursive descent parser for the Java subset
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.

use super::grammar::{self, JavaParser, declarations::ClassFlavor};
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// What a fragment parse should produce under its DUMMY_HOLDER root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Expression,
    Statement,
    CodeBlock,
    Type,
    Pattern,
    Member,
}

/// Parse a Java compilation unit into a CST rooted at JAVA_FILE
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    grammar::parse_java_file(&mut parser);
    parser.finish()
}

/// Parse a standalone fragment into a CST rooted at DUMMY_HOLDER.
///
/// Used to build replacement subtrees from text. Input left over after the
/// fragment is reported as an error.
pub fn parse_fragment(input: &str, kind: FragmentKind) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.start_node(SyntaxKind::DUMMY_HOLDER);
    parser.skip_trivia();
    match kind {
        FragmentKind::Expression => {
            grammar::parse_expression(&mut parser);
        }
        FragmentKind::Statement => grammar::parse_statement(&mut parser),
        FragmentKind::CodeBlock => grammar::parse_code_block(&mut parser),
        FragmentKind::Type => grammar::parse_type(&mut parser),
        FragmentKind::Pattern => grammar::parse_pattern(&mut parser),
        FragmentKind::Member => grammar::parse_member(&mut parser, ClassFlavor::Class),
    }
    parser.skip_trivia();
    if !parser.at_eof() {
        parser.error_recover("unexpected input after fragment".to_string(), &[]);
    }
    parser.finish_node();
    parser.finish()
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    /// Index of the nth non-trivia token at or after the current position
    fn nth_index(&self, n: usize) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .skip(self.pos)
            .filter(|(_, t)| !t.kind.is_trivia())
            .nth(n)
            .map(|(idx, _)| idx)
    }

    fn raw_kind(&self, idx: usize) -> SyntaxKind {
        self.tokens
            .get(idx)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::ERROR)
    }
}

impl JavaParser for Parser<'_> {
    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        !self.at_eof() && self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        !self.at_eof() && kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn nth(&self, n: usize) -> SyntaxKind {
        self.nth_index(n)
            .map(|idx| self.tokens[idx].kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    fn peek_shift(&self) -> Option<(SyntaxKind, usize)> {
        let start = self.nth_index(0)?;
        if self.raw_kind(start) != SyntaxKind::GT {
            return None;
        }
        let glued = match (
            self.raw_kind(start + 1),
            self.raw_kind(start + 2),
        ) {
            (SyntaxKind::GT, SyntaxKind::GT_EQ) => (SyntaxKind::GT_GT_GT_EQ, 3),
            (SyntaxKind::GT, SyntaxKind::GT) => (SyntaxKind::GT_GT_GT, 3),
            (SyntaxKind::GT_EQ, _) => (SyntaxKind::GT_GT_EQ, 2),
            (SyntaxKind::GT, _) => (SyntaxKind::GT_GT, 2),
            _ => return None,
        };
        Some(glued)
    }

    fn get_pos(&self) -> usize {
        self.pos
    }

    fn bump(&mut self) {
        let tokens = self.tokens;
        if let Some(token) = tokens.get(self.pos) {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn bump_glued(&mut self, kind: SyntaxKind, count: usize) {
        let end = (self.pos + count).min(self.tokens.len());
        let text: String = self.tokens[self.pos..end].iter().map(|t| t.text).collect();
        self.builder.token(kind.into(), &text);
        self.pos = end;
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {:?}", kind));
            false
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.builder.checkpoint()
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    fn error(&mut self, message: String) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .or_else(|| self.tokens.last().map(|t| TextRange::empty(t.end())))
            .unwrap_or_else(|| TextRange::empty(TextSize::new(0)));
        self.errors.push(SyntaxError::new(message, range));
    }

    fn error_recover(&mut self, message: String, recovery: &[SyntaxKind]) {
        self.error(message);
        self.builder.start_node(SyntaxKind::ERROR.into());
        // Always consume at least one token to make progress
        let mut consumed = false;
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump();
            consumed = true;
        }
        if !consumed && !self.at_eof() {
            self.bump();
        }
        self.builder.finish_node();
    }
}
