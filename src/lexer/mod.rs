//! C source scanner
//!
//! This module turns C (or C🥖) source text into a lossless token stream:
//! - [`token`]: token, kind and location definitions
//! - [`scanner`]: the scanner itself (source text → tokens)
//!
//! The token stream is flat. There is no grammar on top of it; the only
//! consumer is the keyword [`rewriter`](crate::rewriter).

pub mod scanner;
pub mod token;

pub use scanner::{scan, Scanner};
pub use token::{join_tokens, SourceLocation, Token, TokenKind};
