//! Rowan-based parsers for the two input languages.
//!
//! This module provides lossless CSTs using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//! ```
//!
//! Neither parser is a general-purpose language parser. Each recognizes
//! exactly the structure the resolution engine navigates — stylesheet
//! imports, bracket-indexed access, JSX attributes, class selectors,
//! `:global(...)` functions — and passes everything else through as flat
//! tokens. The trees are lossless: concatenating all token text reproduces
//! the input.

pub mod css;
pub mod script;

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};

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
