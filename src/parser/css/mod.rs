//! Stylesheet subset: lexer, CST, typed AST.

pub mod ast;
mod lexer;
#[allow(clippy::module_inception)]
mod parser;
mod syntax_kind;

pub use ast::*;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, parse};
pub use syntax_kind::{CssLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
