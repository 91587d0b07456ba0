//! Stylesheet parser.
//!
//! Builds a rowan GreenNode tree from tokens. Rules, at-rules, class
//! selectors, and `:name(...)` pseudo functions get structured nodes;
//! declaration bodies stay flat. A compound like `.a.b` becomes ONE
//! `CLASS_SELECTOR` node whose text is the full compound — name matching
//! operates on selector literal text.

use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use crate::parser::SyntaxError;

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

/// Parse stylesheet source into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_stylesheet();
    parser.finish()
}

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

    fn current_kind(&self) -> SyntaxKind {
        self.tokens
            .get(self.pos)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Raw lookahead without trivia skipping — selector compounds are
    /// whitespace-sensitive.
    fn raw_nth(&self, n: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    fn bump(&mut self) {
        if let Some(token) = self.tokens.get(self.pos) {
            if token.kind == SyntaxKind::ERROR {
                let range = TextRange::at(token.offset, TextSize::of(token.text));
                self.errors
                    .push(SyntaxError::new("unexpected character", range));
            }
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    fn parse_stylesheet(&mut self) {
        self.builder.start_node(SyntaxKind::STYLESHEET.into());
        while !self.at_eof() {
            match self.current_kind() {
                kind if kind.is_trivia() => self.bump(),
                SyntaxKind::AT => self.parse_at_rule(),
                SyntaxKind::R_BRACE | SyntaxKind::SEMICOLON => self.bump(),
                _ => self.parse_rule(),
            }
        }
        self.builder.finish_node();
    }

    fn parse_rule(&mut self) {
        self.builder.start_node(SyntaxKind::RULE.into());
        self.parse_prelude();
        if self.at(SyntaxKind::L_BRACE) {
            self.parse_declaration_block();
        } else if self.at(SyntaxKind::SEMICOLON) {
            self.bump();
        }
        self.builder.finish_node();
    }

    /// Selector prelude: runs until `{`, `;`, `}` or end of input.
    fn parse_prelude(&mut self) {
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::L_BRACE | SyntaxKind::SEMICOLON | SyntaxKind::R_BRACE => return,
                SyntaxKind::DOT if self.raw_nth(1) == SyntaxKind::IDENT => {
                    self.parse_class_selector()
                }
                SyntaxKind::COLON
                    if self.raw_nth(1) == SyntaxKind::IDENT
                        && self.raw_nth(2) == SyntaxKind::L_PAREN =>
                {
                    self.parse_pseudo_fn()
                }
                _ => self.bump(),
            }
        }
    }

    /// A maximal contiguous `.ident(.ident)*` run, one node.
    fn parse_class_selector(&mut self) {
        self.builder.start_node(SyntaxKind::CLASS_SELECTOR.into());
        loop {
            self.bump(); // .
            self.bump(); // ident
            if !(self.at(SyntaxKind::DOT) && self.raw_nth(1) == SyntaxKind::IDENT) {
                break;
            }
        }
        self.builder.finish_node();
    }

    /// `:name( ... )`, e.g. `:global(.skip)`. Inner selectors become child
    /// nodes so ancestry checks can see the function.
    fn parse_pseudo_fn(&mut self) {
        self.builder.start_node(SyntaxKind::PSEUDO_FN.into());
        self.bump(); // :
        self.bump(); // name
        self.bump(); // (
        let mut depth = 0u32;
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::R_PAREN => {
                    self.bump();
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                SyntaxKind::L_PAREN => {
                    depth += 1;
                    self.bump();
                }
                SyntaxKind::DOT if self.raw_nth(1) == SyntaxKind::IDENT => {
                    self.parse_class_selector()
                }
                SyntaxKind::COLON
                    if self.raw_nth(1) == SyntaxKind::IDENT
                        && self.raw_nth(2) == SyntaxKind::L_PAREN =>
                {
                    self.parse_pseudo_fn()
                }
                _ => self.bump(),
            }
        }
        self.builder.finish_node();
    }

    /// Opaque `{ ... }` declaration body.
    fn parse_declaration_block(&mut self) {
        self.builder.start_node(SyntaxKind::BLOCK.into());
        self.bump(); // {
        let mut depth = 0u32;
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::R_BRACE => {
                    self.bump();
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                SyntaxKind::L_BRACE => {
                    depth += 1;
                    self.bump();
                }
                _ => self.bump(),
            }
        }
        self.builder.finish_node();
    }

    fn parse_at_rule(&mut self) {
        self.builder.start_node(SyntaxKind::AT_RULE.into());
        self.bump(); // @
        if self.at(SyntaxKind::IDENT) {
            self.bump(); // name
        }
        self.parse_prelude();
        if self.at(SyntaxKind::SEMICOLON) {
            self.bump();
        } else if self.at(SyntaxKind::L_BRACE) {
            self.parse_rule_block();
        }
        self.builder.finish_node();
    }

    /// At-rule body: a nested rule list.
    fn parse_rule_block(&mut self) {
        self.builder.start_node(SyntaxKind::BLOCK.into());
        self.bump(); // {
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::R_BRACE => {
                    self.bump();
                    break;
                }
                kind if kind.is_trivia() => self.bump(),
                SyntaxKind::AT => self.parse_at_rule(),
                SyntaxKind::SEMICOLON => self.bump(),
                _ => self.parse_rule(),
            }
        }
        self.builder.finish_node();
    }
}
