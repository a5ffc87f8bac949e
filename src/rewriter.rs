//! Keyword rewriting
//!
//! [`rewrite`] walks a token stream and swaps keyword tokens for their
//! translation, copying every other token through unchanged. Because the
//! scanner is lossless, the output differs from the input only where a keyword
//! was replaced.
//!
//! [`Translator`] ties the scanner and the rewriter together for one
//! [`Direction`] and reports what it did.

use crate::keywords::{builtin, Dictionary, Direction, TranslationTable, Vocabulary};
use crate::lexer::{scan, SourceLocation, Token, TokenKind};

/// Rebuild text from `tokens`, replacing keyword tokens found in `table`.
pub fn rewrite(tokens: &[Token], table: &TranslationTable) -> String {
    let capacity = tokens.iter().map(|t| t.text.len()).sum();
    let mut out = String::with_capacity(capacity);

    for token in tokens {
        match replacement(token, table) {
            Some(word) => out.push_str(word),
            None => out.push_str(&token.text),
        }
    }

    out
}

fn replacement(token: &Token, table: &TranslationTable) -> Option<&'static str> {
    if token.kind == TokenKind::Keyword {
        table.get(&token.text)
    } else {
        None
    }
}

/// An identifier of the input that is spelled like a keyword of the output
/// vocabulary. It is copied through as-is, but converting the output back
/// will turn it into a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub word: String,
    pub location: SourceLocation,
    /// Vocabulary in which `word` is a keyword
    pub vocabulary: Vocabulary,
}

/// Result of one conversion
#[derive(Debug, Clone)]
pub struct Translation {
    pub output: String,
    /// Number of keyword tokens replaced
    pub replaced: usize,
    pub collisions: Vec<Collision>,
}

/// Scanner + rewriter for one direction over a dictionary
#[derive(Debug, Clone, Copy)]
pub struct Translator<'d> {
    dictionary: &'d Dictionary,
    direction: Direction,
}

impl<'d> Translator<'d> {
    pub fn new(dictionary: &'d Dictionary, direction: Direction) -> Self {
        Self {
            dictionary,
            direction,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Tokenize `source` with the keyword set of this direction's input
    /// vocabulary.
    pub fn scan(&self, source: &str) -> Vec<Token> {
        let vocabulary = self.direction.input_vocabulary();
        scan(source, self.dictionary.keywords(vocabulary))
    }

    /// Convert `source` and collect statistics and collisions.
    pub fn run(&self, source: &str) -> Translation {
        self.run_tokens(&self.scan(source))
    }

    /// Same as [`run`](Self::run) over tokens already produced by
    /// [`scan`](Self::scan).
    pub fn run_tokens(&self, tokens: &[Token]) -> Translation {
        let table = self.dictionary.table(self.direction);

        let mut replaced = 0;
        for token in tokens {
            if let Some(word) = replacement(token, table) {
                replaced += 1;
                crate::trace!("{} -> '{}'", token, word);
            }
        }
        let collisions = self.collisions(tokens);
        let output = rewrite(tokens, table);

        crate::debug!(
            "{}: {} tokens, {} keywords replaced, {} collisions",
            self.direction,
            tokens.len(),
            replaced,
            collisions.len()
        );

        Translation {
            output,
            replaced,
            collisions,
        }
    }

    /// Identifiers in `tokens` that are keywords of the output vocabulary.
    pub fn collisions(&self, tokens: &[Token]) -> Vec<Collision> {
        let vocabulary = self.direction.output_vocabulary();
        let output_words = self.dictionary.keywords(vocabulary);

        tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Identifier && output_words.contains(&t.text))
            .map(|t| Collision {
                word: t.text.clone(),
                location: t.location,
                vocabulary,
            })
            .collect()
    }
}

/// Convert `source` in `direction` using `dictionary`.
pub fn convert(source: &str, direction: Direction, dictionary: &Dictionary) -> String {
    let translator = Translator::new(dictionary, direction);
    rewrite(&translator.scan(source), dictionary.table(direction))
}

/// Convert `source` with an arbitrary `table`, working out from the table
/// which vocabulary the source is written in. Tables without a recognizable
/// marker pair are treated as C → C🥖.
pub fn convert_with_table(source: &str, table: &TranslationTable, dictionary: &Dictionary) -> String {
    let direction = Direction::infer(table, dictionary).unwrap_or(Direction::ToTarget);
    let tokens = scan(source, dictionary.keywords(direction.input_vocabulary()));
    rewrite(&tokens, table)
}

/// Translate C source to C🥖 with the built-in dictionary.
pub fn translate(source: &str) -> String {
    convert(source, Direction::ToTarget, builtin())
}

/// Compile C🥖 source back to C with the built-in dictionary.
pub fn compile(source: &str) -> String {
    convert(source, Direction::ToOrigin, builtin())
}
