//! Targeted parser for the script subset.
//!
//! Builds a rowan GreenNode tree from tokens. The tree is lossless and
//! mostly flat: only the shapes the resolution engine cares about become
//! structured nodes (variable declarations, imports, calls, bracket-indexed
//! access, JSX open tags and their attributes, string literals). Everything
//! else is bumped through as raw tokens.

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

/// Parse script source into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_source_file();
    parser.finish()
}

/// Identifiers that cannot end an expression, so a following `<` opens a
/// JSX tag rather than a comparison.
fn is_non_expression_keyword(text: &str) -> bool {
    matches!(
        text,
        "return"
            | "default"
            | "typeof"
            | "in"
            | "of"
            | "new"
            | "void"
            | "do"
            | "else"
            | "case"
            | "yield"
            | "await"
            | "delete"
    )
}

struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
    /// Whether the previous significant token could end an expression.
    /// Drives the `<`-starts-a-JSX-tag heuristic.
    prev_ends_expr: bool,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
            prev_ends_expr: false,
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&'a Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn current_text(&self) -> &str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The nth significant (non-trivia) token kind from the current position.
    fn nth(&self, n: usize) -> SyntaxKind {
        let mut idx = self.pos;
        let mut count = 0;
        while idx < self.tokens.len() {
            if !self.tokens[idx].kind.is_trivia() {
                if count == n {
                    return self.tokens[idx].kind;
                }
                count += 1;
            }
            idx += 1;
        }
        SyntaxKind::ERROR
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            if token.kind == SyntaxKind::ERROR {
                let range = TextRange::at(token.offset, TextSize::of(token.text));
                self.errors
                    .push(SyntaxError::new("unexpected character", range));
            }
            if !token.kind.is_trivia() {
                self.prev_ends_expr = match token.kind {
                    SyntaxKind::IDENT => !is_non_expression_keyword(token.text),
                    SyntaxKind::STRING
                    | SyntaxKind::NUMBER
                    | SyntaxKind::R_PAREN
                    | SyntaxKind::R_BRACKET => true,
                    _ => false,
                };
            }
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn skip_trivia(&mut self) {
        while self.current_kind().is_trivia() && !self.at_eof() {
            self.bump();
        }
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    fn parse_source_file(&mut self) {
        self.builder.start_node(SyntaxKind::SOURCE_FILE.into());
        while !self.at_eof() {
            self.parse_element();
        }
        self.builder.finish_node();
    }

    fn parse_element(&mut self) {
        if self.at(SyntaxKind::IDENT) {
            let text = self.current_text();
            if matches!(text, "const" | "let" | "var")
                && self.nth(1) == SyntaxKind::IDENT
                && self.nth(2) == SyntaxKind::EQ
            {
                self.parse_var_decl();
                return;
            }
            if text == "import" {
                self.parse_import_decl();
                return;
            }
        }
        self.parse_atom();
    }

    /// One expression-level item: structured if it matches a recognized
    /// shape, a single raw token otherwise.
    fn parse_atom(&mut self) {
        match self.current_kind() {
            SyntaxKind::IDENT => {
                if self.nth(1) == SyntaxKind::L_PAREN {
                    self.parse_call_expr();
                } else if self.nth(1) == SyntaxKind::L_BRACKET {
                    self.parse_index_expr();
                } else {
                    self.bump();
                }
            }
            SyntaxKind::STRING => self.parse_string_literal(),
            SyntaxKind::LT if self.at_jsx_tag_start() => self.parse_jsx_tag(),
            _ => self.bump(),
        }
    }

    fn parse_string_literal(&mut self) {
        self.builder.start_node(SyntaxKind::STRING_LITERAL.into());
        self.bump();
        self.builder.finish_node();
    }

    fn parse_var_decl(&mut self) {
        self.builder.start_node(SyntaxKind::VAR_DECL.into());
        self.bump(); // const/let/var
        self.skip_trivia();
        self.bump(); // name
        self.skip_trivia();
        self.bump(); // =
        let mut depth = 0u32;
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::SEMICOLON if depth == 0 => {
                    self.bump();
                    break;
                }
                SyntaxKind::L_BRACE => {
                    depth += 1;
                    self.bump();
                }
                SyntaxKind::R_BRACE => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                    self.bump();
                }
                SyntaxKind::IDENT
                    if depth == 0
                        && matches!(
                            self.current_text(),
                            "const" | "let" | "var" | "import" | "export" | "function" | "class"
                                | "return"
                        ) =>
                {
                    break;
                }
                _ => self.parse_atom(),
            }
        }
        self.builder.finish_node();
    }

    fn parse_import_decl(&mut self) {
        self.builder.start_node(SyntaxKind::IMPORT_DECL.into());
        self.bump(); // import
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::SEMICOLON => {
                    self.bump();
                    break;
                }
                SyntaxKind::STRING => self.parse_string_literal(),
                SyntaxKind::IDENT
                    if matches!(
                        self.current_text(),
                        "const" | "let" | "var" | "import" | "export" | "function" | "class"
                    ) =>
                {
                    break;
                }
                _ => self.bump(),
            }
        }
        self.builder.finish_node();
    }

    fn parse_call_expr(&mut self) {
        self.builder.start_node(SyntaxKind::CALL_EXPR.into());
        self.bump(); // callee
        self.skip_trivia();
        if self.at(SyntaxKind::L_PAREN) {
            self.parse_inner(SyntaxKind::L_PAREN, SyntaxKind::R_PAREN);
        }
        self.builder.finish_node();
    }

    fn parse_index_expr(&mut self) {
        self.builder.start_node(SyntaxKind::INDEX_EXPR.into());
        self.bump(); // qualifier
        self.skip_trivia();
        if self.at(SyntaxKind::L_BRACKET) {
            self.parse_inner(SyntaxKind::L_BRACKET, SyntaxKind::R_BRACKET);
        }
        self.builder.finish_node();
    }

    fn parse_jsx_expression(&mut self) {
        self.builder.start_node(SyntaxKind::JSX_EXPRESSION.into());
        self.parse_inner(SyntaxKind::L_BRACE, SyntaxKind::R_BRACE);
        self.builder.finish_node();
    }

    /// Consume a balanced `open ... close` region, recognizing nested
    /// structured shapes along the way.
    fn parse_inner(&mut self, open: SyntaxKind, close: SyntaxKind) {
        self.bump(); // open
        let mut depth = 0u32;
        while !self.at_eof() {
            let kind = self.current_kind();
            if kind == close {
                self.bump();
                if depth == 0 {
                    return;
                }
                depth -= 1;
            } else if kind == open {
                depth += 1;
                self.bump();
            } else {
                self.parse_atom();
            }
        }
    }

    // =========================================================================
    // JSX
    // =========================================================================

    /// `<` opens a JSX tag when the previous significant token cannot end an
    /// expression and an identifier follows (the standard JSX/comparison
    /// disambiguation heuristic).
    fn at_jsx_tag_start(&self) -> bool {
        !self.prev_ends_expr && self.nth(1) == SyntaxKind::IDENT
    }

    fn parse_jsx_tag(&mut self) {
        self.builder.start_node(SyntaxKind::JSX_TAG.into());
        self.bump(); // <
        self.skip_trivia();
        self.bump(); // tag name
        while self.at(SyntaxKind::DOT) {
            self.bump();
            if self.at(SyntaxKind::IDENT) {
                self.bump();
            }
        }
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::GT => {
                    self.bump();
                    break;
                }
                SyntaxKind::SLASH => {
                    self.bump();
                    if self.at(SyntaxKind::GT) {
                        self.bump();
                    }
                    break;
                }
                SyntaxKind::IDENT
                    if self.nth(1) == SyntaxKind::EQ
                        && matches!(self.nth(2), SyntaxKind::STRING | SyntaxKind::L_BRACE) =>
                {
                    self.parse_jsx_attribute();
                }
                SyntaxKind::L_BRACE => self.parse_jsx_expression(),
                _ => self.bump(),
            }
        }
        self.builder.finish_node();
        // A following `<` is a child or closing tag, not a comparison.
        self.prev_ends_expr = false;
    }

    fn parse_jsx_attribute(&mut self) {
        self.builder.start_node(SyntaxKind::JSX_ATTRIBUTE.into());
        self.bump(); // name
        self.skip_trivia();
        self.bump(); // =
        self.skip_trivia();
        match self.current_kind() {
            SyntaxKind::STRING => self.parse_string_literal(),
            SyntaxKind::L_BRACE => self.parse_jsx_expression(),
            _ => {}
        }
        self.builder.finish_node();
    }
}
