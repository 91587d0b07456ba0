//! Script (JS/TS/JSX/TSX) subset: lexer, CST, typed AST.

pub mod ast;
mod lexer;
#[allow(clippy::module_inception)]
mod parser;
mod syntax_kind;

pub use ast::*;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, parse};
pub use syntax_kind::{ScriptLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
