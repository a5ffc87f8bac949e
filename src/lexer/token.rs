//! Token types produced by the scanner
//!
//! Unlike a parser-facing lexer, every byte of the input ends up in some
//! [`Token`]: whitespace, comments and preprocessor lines are tokens too, so
//! that the token stream can be written back out verbatim.

use std::fmt;

/// Source location information for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Classification of a token. Exactly one kind per token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    StringLiteral,
    CharLiteral,
    Number,
    Preprocessor,
    BlockComment,
    LineComment,
    Operator,
    Punctuation,
    Whitespace,
    Newline,
    /// Never produced by the scanner; available to consumers that re-tag tokens.
    Other,
}

impl TokenKind {
    /// Returns true for tokens that carry no code: whitespace, newlines and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::BlockComment
                | TokenKind::LineComment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string literal",
            TokenKind::CharLiteral => "char literal",
            TokenKind::Number => "number",
            TokenKind::Preprocessor => "preprocessor directive",
            TokenKind::BlockComment => "block comment",
            TokenKind::LineComment => "line comment",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// A classified slice of the source, owning a copy of its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: String, location: SourceLocation) -> Self {
        Self {
            kind,
            text,
            location,
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Whitespace | TokenKind::Newline => {
                write!(f, "{} {:?} at {}", self.kind, self.text, self.location)
            }
            _ => write!(f, "{} '{}' at {}", self.kind, self.text, self.location),
        }
    }
}

/// Concatenates token texts in order. For a scanner output this reproduces
/// the scanned source exactly.
pub fn join_tokens(tokens: &[Token]) -> String {
    let capacity = tokens.iter().map(|t| t.text.len()).sum();
    let mut out = String::with_capacity(capacity);
    for token in tokens {
        out.push_str(&token.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let token = Token::new(
            TokenKind::Keyword,
            "int".to_string(),
            SourceLocation::new(3, 5),
        );
        assert_eq!(token.to_string(), "keyword 'int' at 3:5");

        let newline = Token::new(TokenKind::Newline, "\n".to_string(), SourceLocation::new(1, 1));
        assert_eq!(newline.to_string(), "newline \"\\n\" at 1:1");
    }

    #[test]
    fn test_join_tokens() {
        let tokens = vec![
            Token::new(TokenKind::Keyword, "int".to_string(), SourceLocation::new(1, 1)),
            Token::new(TokenKind::Whitespace, " ".to_string(), SourceLocation::new(1, 4)),
            Token::new(TokenKind::Identifier, "x".to_string(), SourceLocation::new(1, 5)),
        ];
        assert_eq!(join_tokens(&tokens), "int x");
        assert_eq!(join_tokens(&[]), "");
    }
}
