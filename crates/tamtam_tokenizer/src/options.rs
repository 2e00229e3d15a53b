//! Typed configuration for [`crate::parse`], replacing the distilled spec's
//! loose options map with an explicit struct the way the teacher passes a
//! small, explicit configuration value (`LexContext`/`ParserState`) into its
//! tokenizer rather than a stringly-typed bag of flags.

/// How `@mentions` are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MentionMode {
    /// `@` recognition is disabled entirely.
    #[default]
    Disabled,
    /// Body accepts Unicode letters in addition to the ASCII identifier set
    /// (`[a-zA-Z0-9_-]`), e.g. `@пользователь`.
    Loose,
    /// Body is restricted to the ASCII identifier set.
    Strict,
}

impl MentionMode {
    pub fn is_enabled(self) -> bool {
        self != MentionMode::Disabled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Enable `:)`-style alias resolution via the text-emoji recognizer.
    pub text_emoji: bool,
    /// Enable and configure `@mention` recognition.
    pub mention: MentionMode,
    /// Enable `#tag` recognition.
    pub hashtag: bool,
    /// Enable `/command` recognition.
    pub command: bool,
    /// Enable `#u...s#` user-sticker recognition.
    pub user_sticker: bool,
    /// Enable URL/email auto-detection.
    pub link: bool,
    /// Suppress Unicode-emoji sequence scanning (keycap/flag/ZWJ/forced).
    pub skip_emoji: bool,
    /// Stamp the scanner's live format bitset onto `Text` tokens. When
    /// false, every `Text` token is pushed with `Format::empty()`.
    pub use_format: bool,
    /// Mark emitted `Link` tokens `sticky = true`.
    pub sticky_link: bool,
}

impl Default for ParseOptions {
    /// All features enabled, matching the common "auto-detect everything"
    /// case for a chat composer.
    fn default() -> Self {
        ParseOptions {
            text_emoji: true,
            mention: MentionMode::Loose,
            hashtag: true,
            command: true,
            user_sticker: true,
            link: true,
            skip_emoji: false,
            use_format: true,
            sticky_link: false,
        }
    }
}

impl ParseOptions {
    /// All features enabled, but mentions require an ASCII identifier body.
    pub fn strict_mentions() -> Self {
        ParseOptions {
            mention: MentionMode::Strict,
            ..Self::default()
        }
    }

    /// Only text, newlines, and Markdown: the shape a read-only renderer
    /// uses when auto-detection (links, mentions, hashtags, emoji) has
    /// already been resolved upstream and re-detecting it would be wrong.
    pub fn minimal() -> Self {
        ParseOptions {
            text_emoji: false,
            mention: MentionMode::Disabled,
            hashtag: false,
            command: false,
            user_sticker: false,
            link: false,
            skip_emoji: true,
            use_format: true,
            sticky_link: false,
        }
    }
}
