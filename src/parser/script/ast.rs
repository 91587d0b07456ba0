//! Typed AST wrappers over the untyped script CST.
//!
//! Each struct wraps a SyntaxNode and provides methods to access the pieces
//! the resolution engine needs.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
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
    };
}

fn ident_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| token.kind() == SyntaxKind::IDENT)
}

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

// ============================================================================
// Declarations
// ============================================================================

ast_node!(VarDecl, VAR_DECL);

impl VarDecl {
    /// The declared name: the identifier between the `const`/`let`/`var`
    /// keyword and the `=`.
    pub fn name(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .take_while(|element| element.kind() != SyntaxKind::EQ)
            .filter_map(|element| element.into_token())
            .filter(|token| token.kind() == SyntaxKind::IDENT)
            .nth(1)
    }
}

ast_node!(ImportDecl, IMPORT_DECL);

impl ImportDecl {
    /// Whether this import introduces a binding with the given name
    /// (`import styles from ...`, `import { a, b } from ...`).
    pub fn binds(&self, name: &str) -> bool {
        ident_tokens(&self.0)
            .filter(|token| !matches!(token.text(), "import" | "from" | "as" | "type"))
            .any(|token| token.text() == name)
    }
}

// ============================================================================
// Expressions
// ============================================================================

ast_node!(CallExpr, CALL_EXPR);

impl CallExpr {
    pub fn callee(&self) -> Option<SyntaxToken> {
        ident_tokens(&self.0).next()
    }
}

ast_node!(IndexExpr, INDEX_EXPR);

impl IndexExpr {
    /// The qualifier identifier, e.g. `styles` in `styles['normal']`.
    pub fn qualifier(&self) -> Option<SyntaxToken> {
        ident_tokens(&self.0).next()
    }

    /// The bracketed string literal, if the index is a plain string.
    pub fn index_literal(&self) -> Option<StringLiteral> {
        self.0.children().find_map(StringLiteral::cast)
    }
}

ast_node!(StringLiteral, STRING_LITERAL);

impl StringLiteral {
    /// The underlying STRING token.
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .find(|token| token.kind() == SyntaxKind::STRING)
    }

    /// The literal text including quotes.
    pub fn raw_text(&self) -> String {
        self.0.text().to_string()
    }

    /// The literal value with exactly one leading and one trailing quote
    /// character stripped. `None` when the text is too short to carry both
    /// quotes.
    pub fn value(&self) -> Option<String> {
        let text = self.raw_text();
        if text.len() < 2 {
            return None;
        }
        let first = text.chars().next()?;
        let last = text.chars().next_back()?;
        if matches!(first, '\'' | '"') && matches!(last, '\'' | '"') {
            Some(text[1..text.len() - 1].to_string())
        } else {
            None
        }
    }
}

// ============================================================================
// JSX
// ============================================================================

ast_node!(JsxTag, JSX_TAG);

ast_node!(JsxAttribute, JSX_ATTRIBUTE);

impl JsxAttribute {
    pub fn name(&self) -> Option<SyntaxToken> {
        ident_tokens(&self.0).next()
    }

    /// The attribute value when it is a plain string literal.
    pub fn value_literal(&self) -> Option<StringLiteral> {
        self.0.children().find_map(StringLiteral::cast)
    }

    /// The attribute value when it is a braced JSX expression.
    pub fn expression_value(&self) -> Option<JsxExpression> {
        self.0.children().find_map(JsxExpression::cast)
    }
}

ast_node!(JsxExpression, JSX_EXPRESSION);
