//! Error types for the crate's fallible, non-per-parse operations.
//!
//! `parse` itself is infallible (see module docs on [`crate::driver`]); the
//! only things that can fail are building the static lookup structures
//! (tries, alias tables) from caller-supplied data.

use thiserror::Error;

/// Marked `#[non_exhaustive]` so a future fallible case (e.g. a rejected
/// `ParseOptions` combination) can be added without a semver break, matching
/// how `DatabaseError` grows new variants over time in the source monorepo.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TokenizerError {
    #[error("trie patterns must be non-empty strings")]
    EmptyPattern,
}

pub type TokenizerResult<T> = Result<T, TokenizerError>;
