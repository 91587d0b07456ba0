//! Syntax kinds for the script (JS/TS/JSX/TSX) CST.
//!
//! Tokens are leaf nodes (identifiers, strings, punctuation).
//! Nodes are composite (variable declarations, indexed access, JSX
//! attributes). Only the shapes the resolution engine navigates get
//! dedicated node kinds; everything else stays flat under its parent.

/// All syntax kinds (tokens and nodes) in the script CST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,  // identifier (also keywords: const, import, ...)
    STRING, // 'hello' or "hello", quotes included
    NUMBER, // 42, 3.14

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,   // {
    R_BRACE,   // }
    L_BRACKET, // [
    R_BRACKET, // ]
    L_PAREN,   // (
    R_PAREN,   // )
    LT,        // <
    GT,        // >
    SLASH,     // /
    EQ,        // =
    DOT,       // .
    COMMA,     // ,
    SEMICOLON, // ;
    COLON,     // :
    PUNCT,     // any other operator/punctuation character

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE,    // root
    VAR_DECL,       // const styles = require('./x.css');
    IMPORT_DECL,    // import styles from './x.css';
    CALL_EXPR,      // require('./x.css')
    INDEX_EXPR,     // styles['normal']
    STRING_LITERAL, // node wrapping every STRING token
    JSX_TAG,        // <div styleName="a b"> (the open tag only)
    JSX_ATTRIBUTE,  // styleName="a b" or styleName={expr}
    JSX_EXPRESSION, // { expr } as an attribute value

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScriptLanguage {}

impl rowan::Language for ScriptLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<ScriptLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ScriptLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ScriptLanguage>;
