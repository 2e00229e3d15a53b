//! A single-pass, code-point-level scanner that turns a short chat message
//! into a flat stream of typed, formatted tokens: plain text, newlines,
//! emoji (native sequences and resolved text aliases), mentions, commands,
//! hashtags, user stickers, auto-detected links, and Markdown formatting
//! markers with bitwise style flags.
//!
//! The entry point is [`parse`]. Everything else in this crate exists to
//! support it: [`Scanner`] owns the single-pass cursor and pending-text
//! buffer, the `recognizers` module holds one function per token kind, and
//! [`normalize::normalize`] merges the scanner's raw token stream into its
//! final, caller-facing shape.

pub mod data;
mod driver;
pub mod error;
pub mod format;
mod normalize;
pub mod options;
pub mod predicates;
pub mod recognizers;
pub mod scanner;
pub mod token;
pub mod trie;

pub use error::{TokenizerError, TokenizerResult};
pub use format::Format;
pub use options::{MentionMode, ParseOptions};
pub use scanner::Scanner;
pub use token::{Emoji, Token, TokenKind};

/// Tokenize `text` under `options`. Total and infallible: every input
/// string, including the empty string and malformed fragments of a link or
/// Markdown run, produces a valid token list (§7 — there is no recoverable
/// error channel in the scan itself).
pub fn parse(text: &str, options: ParseOptions) -> Vec<Token> {
    driver::parse(text, options)
}
