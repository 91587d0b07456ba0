//! Syntax kinds for the stylesheet CST.

/// All syntax kinds (tokens and nodes) in the CSS CST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    COMMENT,

    // =========================================================================
    // TOKENS
    // =========================================================================
    IDENT,  // class-name, -webkit-foo, global
    STRING, // "..." or '...'
    NUMBER, // 12, 1.5em, 100%
    DOT,    // .
    COLON,  // :
    COMMA,  // ,
    SEMICOLON,
    L_PAREN,
    R_PAREN,
    L_BRACE,
    R_BRACE,
    AT,    // @
    DELIM, // any other selector/value character (#, >, *, %, ...)

    // =========================================================================
    // NODES
    // =========================================================================
    STYLESHEET,     // root
    RULE,           // .a .b { ... }
    AT_RULE,        // @media ... { ... }
    BLOCK,          // { ... }
    CLASS_SELECTOR, // .a or the compound .a.b as a single node
    PSEUDO_FN,      // :global(...)

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::COMMENT)
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
pub enum CssLanguage {}

impl rowan::Language for CssLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<CssLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<CssLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<CssLanguage>;
