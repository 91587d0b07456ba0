//! Logos-based lexer for stylesheets.

use logos::Logos;
use rowan::TextSize;

use super::syntax_kind::SyntaxKind;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    Comment,

    #[regex(r"-?[A-Za-z_][A-Za-z0-9_-]*")]
    Ident,

    #[regex(r#""[^"\n]*""#)]
    DoubleQuoteString,

    #[regex(r"'[^'\n]*'")]
    SingleQuoteString,

    #[regex(r"[0-9]+(\.[0-9]+)?[a-zA-Z%]*")]
    Number,

    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("@")]
    At,

    // hash selectors, combinators, units, anything else the engine
    // navigates past
    #[regex(r".", priority = 1)]
    Delim,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::Comment => SyntaxKind::COMMENT,
            LogosToken::Ident => SyntaxKind::IDENT,
            LogosToken::DoubleQuoteString | LogosToken::SingleQuoteString => SyntaxKind::STRING,
            LogosToken::Number => SyntaxKind::NUMBER,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Semicolon => SyntaxKind::SEMICOLON,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::LBrace => SyntaxKind::L_BRACE,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::At => SyntaxKind::AT,
            LogosToken::Delim => SyntaxKind::DELIM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_rule() {
        let tokens = tokenize(".normal { color: red; }");
        let kinds: Vec<_> = tokens
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                SyntaxKind::DOT,
                SyntaxKind::IDENT,
                SyntaxKind::L_BRACE,
                SyntaxKind::IDENT,
                SyntaxKind::COLON,
                SyntaxKind::IDENT,
                SyntaxKind::SEMICOLON,
                SyntaxKind::R_BRACE,
            ]
        );
    }

    #[test]
    fn test_hyphenated_ident_is_one_token() {
        let tokens = tokenize(".my-class-name");
        assert_eq!(tokens[1].kind, SyntaxKind::IDENT);
        assert_eq!(tokens[1].text, "my-class-name");
    }

    #[test]
    fn test_hash_and_combinator_are_delims() {
        let tokens = tokenize("#id > * { color: #333; }");
        assert!(
            tokens
                .iter()
                .filter(|t| matches!(t.text, "#" | ">" | "*"))
                .all(|t| t.kind == SyntaxKind::DELIM)
        );
        assert!(tokens.iter().all(|t| t.kind != SyntaxKind::ERROR));
    }

    #[test]
    fn test_dimension_number() {
        let tokens = tokenize("margin: 1.5em;");
        assert!(
            tokens
                .iter()
                .any(|t| t.kind == SyntaxKind::NUMBER && t.text == "1.5em")
        );
    }
}
