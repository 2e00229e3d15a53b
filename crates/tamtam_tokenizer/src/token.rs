//! The token types emitted by [`crate::parse`].
//!
//! `Token` derives `Serialize`/`Deserialize` because the documented external
//! interface is "an editor or renderer consumes the token stream" — in the
//! system this crate grew out of, that boundary is a JS/TS editor, so the
//! natural wire shape for `Token` is JSON, the same way the teacher's CST
//! nodes are serializable for its own JS bindings.

use serde::{Deserialize, Serialize};

use crate::format::Format;

/// An inline emoji attachment on a `Text` token's value. `from`/`to` are char
/// offsets *within that token's `value`*, not absolute positions in the
/// original input, so that a `Text` token carrying the value of a keycap or
/// ZWJ sequence (or a resolved text-emoji alias) can be reconstructed
/// without splitting the surrounding run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    pub from: usize,
    pub to: usize,
    /// Set only for resolved text-emoji aliases (`:)` → the glyph it maps
    /// to); `None` for native Unicode emoji sequences, where the glyph is
    /// already literally present in `value[from..to]`.
    pub emoji: Option<String>,
}

/// Kind-specific payload. Common fields (`value`, `format`, `sticky`) live on
/// [`Token`] itself; this only carries what differs per kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TokenKind {
    Text {
        emoji: Vec<Emoji>,
    },
    Link {
        /// Normalized absolute URL (see §4.9 of the spec this implements):
        /// `mailto:`/`http://`/`http:` prepended as needed for bare
        /// addresses, verbatim otherwise.
        link: String,
        /// True when the link was auto-detected from plain text rather than
        /// coming from an explicit `magnet:`/`mailto:` literal the caller
        /// already wrapped. Both `magnet:` and `mailto:` autolinks set this
        /// true; only a pre-formed `Link` token constructed by a caller
        /// outside this crate would ever set it false.
        auto: bool,
    },
    UserSticker {
        sticker_id: String,
    },
    Mention {
        mention: String,
    },
    Command {
        command: String,
    },
    HashTag {
        hashtag: String,
    },
    /// A single Markdown marker character (`*`, `_`, `~`, `` ` ``), paired
    /// with the format bit it toggles.
    Markdown {
        marker: char,
        bit: Format,
    },
    Newline,
    /// A standalone emoji token. The default driver never constructs this —
    /// native and alias emoji are always attached inline to the enclosing
    /// `Text` token (§4.5) — but the variant exists so callers that embed
    /// this crate in a legacy standalone-emoji-token mode can still produce
    /// and serialize one.
    Emoji {
        emoji: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Verbatim input substring this token covers. Invariant: concatenating
    /// every token's `value` in order reproduces the original input exactly.
    pub value: String,
    pub format: Format,
    /// Meaningful only for `Text`/`Link` tokens; affects downstream editing
    /// operations (`setLink`, `insertText`, `trim`) that this crate does not
    /// implement but must preserve the field for.
    pub sticky: bool,
    #[serde(flatten)]
    pub kind: TokenKind,
}

impl Token {
    pub fn text(value: String, format: Format, emoji: Vec<Emoji>) -> Self {
        Token {
            value,
            format,
            sticky: false,
            kind: TokenKind::Text { emoji },
        }
    }

    pub fn newline(value: String) -> Self {
        Token {
            value,
            format: Format::empty(),
            sticky: false,
            kind: TokenKind::Newline,
        }
    }

    pub fn markdown(marker: char, bit: Format, format: Format) -> Self {
        Token {
            value: marker.to_string(),
            format,
            sticky: false,
            kind: TokenKind::Markdown { marker, bit },
        }
    }

    /// Returns true if this token is `Text` and has the given format,
    /// letting the normalizer check merge eligibility without a nested
    /// match at every call site.
    pub fn is_mergeable_text_with(&self, format: Format) -> bool {
        matches!(self.kind, TokenKind::Text { .. }) && self.format == format
    }

    pub fn is_markdown(&self) -> bool {
        matches!(self.kind, TokenKind::Markdown { .. })
    }

    pub fn is_hashtag(&self) -> bool {
        matches!(self.kind, TokenKind::HashTag { .. })
    }

    pub fn is_newline(&self) -> bool {
        matches!(self.kind, TokenKind::Newline)
    }

    pub fn is_emoji_like(&self) -> bool {
        matches!(self.kind, TokenKind::Emoji { .. })
            || matches!(&self.kind, TokenKind::Text { emoji } if !emoji.is_empty())
    }
}
