//! # Introduction
//!
//! Baguette converts C source code to C🥖, a French spelling of the C
//! keywords, and back. Only keywords change: identifiers, literals, comments,
//! preprocessor lines, operators and whitespace are copied byte for byte, so a
//! file survives any number of round trips unchanged.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Tokens → Rewriter → Source
//! ```
//!
//! 1. [`lexer`] — splits the text into a lossless token stream. Which words
//!    count as keywords depends on the [`keywords::KeywordSet`] it is given.
//! 2. [`rewriter`] — replaces keyword tokens through a
//!    [`keywords::TranslationTable`] and joins everything back together.
//! 3. [`keywords`] — the built-in dictionary and the tables and sets derived
//!    from it.
//! 4. [`cli`] and [`ui`] — command-line front end and side-by-side preview;
//!    not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! let c = "int main() { return 0; }";
//! let baguette = baguette::translate(c);
//! assert_eq!(baguette, "entier main() { retourner 0; }");
//! assert_eq!(baguette::compile(&baguette), c);
//! ```

pub mod cli;
pub mod config;
pub mod keywords;
pub mod lexer;
pub mod logging;
pub mod rewriter;
pub mod ui;

pub use rewriter::{compile, translate};
