//! Typed AST wrappers over the untyped CSS CST.

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

fn first_ident(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|element| element.into_token())
        .find(|token| token.kind() == SyntaxKind::IDENT)
}

ast_node!(Stylesheet, STYLESHEET);

ast_node!(Rule, RULE);

ast_node!(Block, BLOCK);

ast_node!(ClassSelector, CLASS_SELECTOR);

impl ClassSelector {
    /// The selector's literal text including the leading `.` — for a
    /// compound this is the whole run, e.g. `.a.b`.
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }

    /// The class name without the leading `.`.
    pub fn name(&self) -> String {
        let text = self.text();
        text.strip_prefix('.').map(str::to_string).unwrap_or(text)
    }
}

ast_node!(PseudoFn, PSEUDO_FN);

impl PseudoFn {
    /// The function name, e.g. `global` in `:global(...)`.
    pub fn name(&self) -> Option<String> {
        first_ident(&self.0).map(|token| token.text().to_string())
    }
}

ast_node!(AtRule, AT_RULE);

impl AtRule {
    /// The at-rule name, e.g. `media` in `@media ...`.
    pub fn name(&self) -> Option<String> {
        first_ident(&self.0).map(|token| token.text().to_string())
    }
}
