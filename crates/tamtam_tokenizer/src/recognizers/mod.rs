//! One module per recognizer, dispatched by [`crate::driver`] in the fixed
//! order the spec requires. Every `recognize*` function here follows the
//! same contract: try to consume a token starting at the scanner's current
//! position; on success, leave the scanner advanced past it (with any token
//! already pushed, or the span claimed as pending text); on failure, rewind
//! to the entry position and return `false`.

pub mod emoji;
pub mod link;
pub mod markdown;
pub mod newline;
pub mod simple;
pub mod text_emoji;
