//! Lossless scanner for C-family source text
//!
//! Splits source text into a complete, order-preserving [`Token`] stream.
//! Nothing is skipped: whitespace, comments and preprocessor directives become
//! tokens, so concatenating every token's text gives the input back unchanged.
//!
//! The scanner never fails. Malformed input is accepted permissively:
//! unterminated block comments, string literals, character literals and
//! directives are consumed to the end of the input, so any text can go through
//! the pipeline and come back out.
//!
//! Keyword recognition depends on the [`KeywordSet`] the scanner is given;
//! the same scanner handles both vocabularies.

use super::token::{SourceLocation, Token, TokenKind};
use crate::keywords::KeywordSet;

/// Accented letters allowed in identifiers, needed for C🥖 keywords such as
/// `caractère` or `pardéfaut`.
const ACCENTED_LETTERS: &[char] = &[
    'é', 'è', 'ê', 'ë', 'à', 'â', 'ä', 'ô', 'ö', 'ù', 'û', 'ü', 'ÿ', 'ç', 'É', 'È', 'Ê', 'Ë',
    'À', 'Â', 'Ä', 'Ô', 'Ö', 'Ù', 'Û', 'Ü', 'Ÿ', 'Ç',
];

/// Two-character lexemes the operator branch extends to.
const DIGRAPHS: &[&str] = &[
    "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "==", "!=", "<=",
    ">=", "&&", "||", "->", "..",
];

/// Lexemes classified as operators; anything else from the operator branch is
/// punctuation.
const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "!", "<", ">", "&", "|", "^", "~", "++", "--", "+=", "-=",
    "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "<<=", ">>=", "==", "!=", "<=", ">=", "&&",
    "||", "->",
];

/// Whitespace as C sources see it: Unicode white space plus the byte-order
/// mark, but not NEL (U+0085), which is scanned as punctuation.
fn is_space(ch: char) -> bool {
    match ch {
        '\u{FEFF}' => true,
        '\u{85}' => false,
        _ => ch.is_whitespace(),
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ACCENTED_LETTERS.contains(&ch)
}

fn is_identifier_char(ch: char) -> bool {
    is_identifier_start(ch) || ch.is_ascii_digit()
}

fn is_octal_digit(ch: char) -> bool {
    matches!(ch, '0'..='7')
}

/// Scanner over one source string
pub struct Scanner<'k> {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    /// True while only whitespace has been consumed since the last newline
    at_line_start: bool,
    keywords: &'k KeywordSet,
}

impl<'k> Scanner<'k> {
    /// Create a scanner that classifies words found in `keywords` as
    /// [`TokenKind::Keyword`].
    pub fn new(input: &str, keywords: &'k KeywordSet) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            at_line_start: true,
            keywords,
        }
    }

    /// Tokenize the entire input
    pub fn scan(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while !self.is_at_end() {
            tokens.push(self.next_token());
        }
        tokens
    }

    /// Scan one token. Every branch consumes at least one character.
    fn next_token(&mut self) -> Token {
        let loc = self.current_location();
        let start = self.position;
        // Only `Some` here: next_token is never called at end of input
        let ch = self.peek().unwrap_or('\0');
        let next = self.peek_ahead(1);

        let kind = if is_space(ch) {
            self.whitespace()
        } else if ch == '/' && next == Some('*') {
            self.block_comment()
        } else if ch == '/' && next == Some('/') {
            self.line_comment()
        } else if ch == '#' && self.at_line_start {
            self.preprocessor_directive()
        } else if ch == '"' || ch == '\'' {
            self.quoted(ch)
        } else if ch.is_ascii_digit() || (ch == '.' && next.is_some_and(|c| c.is_ascii_digit())) {
            self.number()
        } else if is_identifier_start(ch) {
            self.identifier_or_keyword_run()
        } else {
            self.operator_or_punctuation()
        };

        if !matches!(kind, TokenKind::Whitespace | TokenKind::Newline) {
            self.at_line_start = false;
        }

        let text: String = self.input[start..self.position].iter().collect();
        let kind = if kind == TokenKind::Identifier && self.keywords.contains(&text) {
            TokenKind::Keyword
        } else {
            kind
        };

        Token::new(kind, text, loc)
    }

    /// Whitespace run, cut after the first newline
    fn whitespace(&mut self) -> TokenKind {
        while let Some(ch) = self.peek() {
            if !is_space(ch) {
                break;
            }
            self.advance();
            if ch == '\n' {
                return TokenKind::Newline;
            }
        }
        TokenKind::Whitespace
    }

    /// Block comment (/* ... */), to end of input if unterminated
    fn block_comment(&mut self) -> TokenKind {
        self.advance(); // '/'
        self.advance(); // '*'

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance(); // '*'
                self.advance(); // '/'
                break;
            }
            self.advance();
        }
        TokenKind::BlockComment
    }

    /// Line comment (// ...), newline excluded
    fn line_comment(&mut self) -> TokenKind {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
        TokenKind::LineComment
    }

    /// Preprocessor directive up to end of line, absorbing backslash
    /// continuations
    fn preprocessor_directive(&mut self) -> TokenKind {
        self.advance(); // '#'

        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            if ch == '\\' {
                match (self.peek_ahead(1), self.peek_ahead(2)) {
                    (Some('\n'), _) => {
                        self.advance();
                        self.advance();
                        continue;
                    }
                    (Some('\r'), Some('\n')) => {
                        self.advance();
                        self.advance();
                        self.advance();
                        continue;
                    }
                    _ => {}
                }
            }
            self.advance();
        }
        TokenKind::Preprocessor
    }

    /// String or character literal delimited by `quote`. A backslash always
    /// escapes the following character; unterminated literals run to end of
    /// input.
    fn quoted(&mut self, quote: char) -> TokenKind {
        self.advance(); // opening quote

        while let Some(ch) = self.peek() {
            self.advance();
            if ch == quote {
                break;
            }
            if ch == '\\' {
                self.advance();
            }
        }

        if quote == '"' {
            TokenKind::StringLiteral
        } else {
            TokenKind::CharLiteral
        }
    }

    /// Numeric literal: hex, octal or decimal with fraction and exponent,
    /// followed by any run of letters as suffix
    fn number(&mut self) -> TokenKind {
        let first = self.peek();
        let second = self.peek_ahead(1);

        if first == Some('0') && matches!(second, Some('x') | Some('X')) {
            self.advance(); // '0'
            self.advance(); // 'x'
            self.advance_while(|c| c.is_ascii_hexdigit());
        } else if first == Some('0') && second.is_some_and(is_octal_digit) {
            self.advance(); // '0'
            self.advance_while(is_octal_digit);
        } else {
            self.advance_while(|c| c.is_ascii_digit());

            if self.peek() == Some('.') {
                self.advance();
                self.advance_while(|c| c.is_ascii_digit());
            }

            if matches!(self.peek(), Some('e') | Some('E')) {
                self.advance();
                if matches!(self.peek(), Some('+') | Some('-')) {
                    self.advance();
                }
                self.advance_while(|c| c.is_ascii_digit());
            }
        }

        // Suffixes (u, l, f, ...), taken as-is
        self.advance_while(|c| c.is_ascii_alphabetic());
        TokenKind::Number
    }

    /// Maximal identifier run. Classified as keyword by the caller.
    fn identifier_or_keyword_run(&mut self) -> TokenKind {
        self.advance_while(is_identifier_char);
        TokenKind::Identifier
    }

    /// One character, extended to a known two-character lexeme
    fn operator_or_punctuation(&mut self) -> TokenKind {
        let mut lexeme = String::new();
        if let Some(ch) = self.advance() {
            lexeme.push(ch);
        }

        if let Some(next) = self.peek() {
            lexeme.push(next);
            if DIGRAPHS.contains(&lexeme.as_str()) {
                self.advance();
            } else {
                lexeme.pop();
            }
        }

        if OPERATORS.contains(&lexeme.as_str()) {
            TokenKind::Operator
        } else {
            TokenKind::Punctuation
        }
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = *self.input.get(self.position)?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
            self.at_line_start = true;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Tokenize `source`, recognizing the words of `keywords` as keywords.
pub fn scan(source: &str, keywords: &KeywordSet) -> Vec<Token> {
    Scanner::new(source, keywords).scan()
}
