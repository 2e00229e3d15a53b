//! The shared, single-owner scanner state threaded through every recognizer.
//!
//! Grounded on the teacher's `Lexer` (`intl_markdown::lexer`): a cursor over
//! decoded characters, `checkpoint`/rewind-style backtracking, and a
//! current/peek/advance API. Unlike the teacher, which walks raw bytes and
//! decodes UTF-8 lazily, this scanner decodes the whole input into a `Vec<char>`
//! up front — the spec's recognizers repeatedly peek and rewind across
//! multi-character lookahead (fragments, protocol tries, emoji sequences),
//! which is far simpler over a random-access `[char]` than over a byte
//! stream with embedded multi-byte UTF-8 sequences.
//!
//! A `char` is already exactly one Unicode scalar value, so unlike the
//! UTF-16-based source this was distilled from, there is no one-vs-two-unit
//! distinction to reproduce: every code point, including supplementary-plane
//! emoji, advances the cursor by exactly one position. See `DESIGN.md` for
//! this resolved open question.

use crate::format::Format;
use crate::options::ParseOptions;
use crate::token::{Emoji, Token, TokenKind};

/// Which bracket family a path/query/hash segment is currently balancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Paren,
    Square,
    Curly,
}

/// Per-kind open/close counters for the link recognizer's segment scanner.
/// Reset to zero whenever a new path/query/hash segment starts (invariant 5).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Brackets {
    paren: i32,
    square: i32,
    curly: i32,
}

impl Brackets {
    fn slot(&mut self, kind: BracketKind) -> &mut i32 {
        match kind {
            BracketKind::Paren => &mut self.paren,
            BracketKind::Square => &mut self.square,
            BracketKind::Curly => &mut self.curly,
        }
    }

    pub fn open(&mut self, kind: BracketKind) {
        *self.slot(kind) += 1;
    }

    /// Decrements the counter for `kind` if it is positive and returns
    /// whether a matching open was on record.
    pub fn try_close(&mut self, kind: BracketKind) -> bool {
        let slot = self.slot(kind);
        if *slot > 0 {
            *slot -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        *self = Brackets::default();
    }
}

/// An open Markdown marker waiting for its matching close, tracked as an
/// index into `Scanner::tokens` (not a pointer) so back-propagation on close
/// is index arithmetic, per the spec's design notes.
#[derive(Debug, Clone, Copy)]
pub struct FormatOpener {
    pub bit: Format,
    pub token_index: usize,
}

pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    pub options: ParseOptions,

    format: Format,
    format_stack: Vec<FormatOpener>,

    tokens: Vec<Token>,

    text_start: Option<usize>,
    text_end: Option<usize>,
    pending_emoji: Vec<Emoji>,

    pub brackets: Brackets,
    quote_single: bool,
    quote_double: bool,
}

impl Scanner {
    pub fn new(input: &str, options: ParseOptions) -> Self {
        Scanner {
            chars: input.chars().collect(),
            pos: 0,
            options,
            format: Format::empty(),
            format_stack: Vec::new(),
            tokens: Vec::new(),
            text_start: None,
            text_end: None,
            pending_emoji: Vec::new(),
            brackets: Brackets::default(),
            quote_single: false,
            quote_double: false,
        }
    }

    // --- position / lookahead -------------------------------------------------

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn has_next(&self) -> bool {
        self.pos < self.chars.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    pub fn peek_prev(&self) -> Option<char> {
        if self.pos == 0 {
            None
        } else {
            self.chars.get(self.pos - 1).copied()
        }
    }

    /// Seek to an absolute position. Used by recognizers (and the trie) to
    /// restore a saved checkpoint; never used to skip ahead without having
    /// first visited every intervening position, so this never violates
    /// position monotonicity as an *advancing* move — only as a rewind.
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(pos <= self.chars.len(), "seek past end of input");
        self.pos = pos;
    }

    /// Advance one position unconditionally, without inspecting the
    /// character. Used by the trie, which already validated the character
    /// via its own transition map.
    pub fn advance_raw(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    /// Advance one position and return the character that was at the
    /// cursor, or `None` at end of input.
    pub fn next(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Advance iff the current character equals `expected`.
    pub fn consume_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Advance iff the current character satisfies `pred`.
    pub fn consume_if(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(c) if pred(c) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Repeatedly consume while `pred` matches; returns whether at least one
    /// character was consumed.
    pub fn consume_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let start = self.pos;
        while self.consume_if(&pred) {}
        self.pos != start
    }

    // --- pending text -----------------------------------------------------

    /// Append the current character to the pending-text span, advancing the
    /// cursor, and toggle the quote bits when it is `'` or `"`. No-op (does
    /// not advance) at end of input.
    pub fn consume_text(&mut self) {
        let Some(c) = self.peek() else { return };
        if self.text_start.is_none() {
            self.text_start = Some(self.pos);
        }
        self.pos += 1;
        self.text_end = Some(self.pos);
        match c {
            '\'' => self.quote_single = !self.quote_single,
            '"' => self.quote_double = !self.quote_double,
            _ => {}
        }
    }

    pub fn quotes(&self) -> (bool, bool) {
        (self.quote_single, self.quote_double)
    }

    fn pending_text_span(&self) -> Option<(usize, usize)> {
        match (self.text_start, self.text_end) {
            (Some(s), Some(e)) if e > s => Some((s, e)),
            _ => None,
        }
    }

    fn pending_text_last_char(&self) -> Option<char> {
        let (_, end) = self.pending_text_span()?;
        self.chars.get(end - 1).copied()
    }

    /// Claim `[start, pos)` as pending text without re-consuming it
    /// character-by-character. Used when a recognizer partially matched but
    /// decided the span isn't a token after all (the link recognizer's
    /// `Skip` outcome) — this is a performance contract: it must not cause a
    /// rescan of those characters.
    pub fn mark_pending(&mut self, start: usize) {
        if start >= self.pos {
            return;
        }
        if self.text_start.is_none() {
            self.text_start = Some(start);
        }
        self.text_end = Some(self.pos);
    }

    /// Record an inline emoji attachment covering `[from, to)`, extending
    /// the pending-text span to include it if necessary. `alias` is set for
    /// resolved text-emoji aliases.
    pub fn push_emoji(&mut self, from: usize, to: usize, alias: Option<String>) {
        if self.text_start.is_none() {
            self.text_start = Some(from);
        }
        self.text_end = Some(self.text_end.map_or(to, |e| e.max(to)));
        let base = self.text_start.unwrap();
        self.pending_emoji.push(Emoji {
            from: from - base,
            to: to - base,
            emoji: alias,
        });
    }

    /// Flush the pending-text span into a `Text` token, if non-empty.
    pub fn flush_text(&mut self) {
        let Some((start, end)) = self.pending_text_span() else {
            self.text_start = None;
            self.text_end = None;
            self.pending_emoji.clear();
            return;
        };
        let value: String = self.chars[start..end].iter().collect();
        let format = if self.options.use_format {
            self.format
        } else {
            Format::empty()
        };
        let emoji = std::mem::take(&mut self.pending_emoji);
        self.tokens.push(Token::text(value, format, emoji));
        self.text_start = None;
        self.text_end = None;
    }

    // --- token stream -------------------------------------------------------

    /// Flush any pending text, then append `token`.
    pub fn push(&mut self, token: Token) {
        self.flush_text();
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn tokens_mut(&mut self) -> &mut Vec<Token> {
        &mut self.tokens
    }

    pub fn last_token(&self) -> Option<&Token> {
        self.tokens.last()
    }

    // --- formatting ---------------------------------------------------------

    pub fn format(&self) -> Format {
        self.format
    }

    /// Open a Markdown marker: flushes pending text, pushes the marker
    /// token, ORs its bit into the live format set, and records the opener
    /// for later back-propagation on close.
    pub fn open_format(&mut self, marker: char, bit: Format) {
        self.push(Token::markdown(marker, bit, self.format));
        self.format |= bit;
        self.format_stack.push(FormatOpener {
            bit,
            token_index: self.tokens.len() - 1,
        });
    }

    /// Close the innermost opener for `bit`, OR-ing `bit` into every
    /// token's format between the opener and the just-pushed closing
    /// marker (exclusive of both markers themselves, which keep the format
    /// snapshot they were pushed with).
    pub fn close_format(&mut self, marker: char, bit: Format) {
        self.push(Token::markdown(marker, bit, self.format));
        self.format.remove(bit);
        let close_index = self.tokens.len() - 1;

        if let Some(at) = self.format_stack.iter().rposition(|o| o.bit == bit) {
            let opener = self.format_stack.remove(at);
            for token in &mut self.tokens[opener.token_index + 1..close_index] {
                token.format |= bit;
            }
        }
    }

    /// Downgrade every still-open Markdown opener to plain `Text` with
    /// `Format::empty()`, per invariant 3. Called once at end-of-parse.
    pub fn downgrade_unpaired_format(&mut self) {
        for opener in std::mem::take(&mut self.format_stack) {
            let token = &mut self.tokens[opener.token_index];
            if let TokenKind::Markdown { marker, .. } = &token.kind {
                let value = marker.to_string();
                token.kind = TokenKind::Text { emoji: Vec::new() };
                token.value = value;
                token.format = Format::empty();
            }
        }
    }

    // --- word boundary -------------------------------------------------------

    /// True when the scanner is positioned immediately after a delimiter,
    /// newline, Markdown marker, emoji, or at input start (§4.3, glossary
    /// "word bound").
    pub fn at_word_bound(&self) -> bool {
        if self.pos == 0 {
            return true;
        }
        if let Some(last) = self.pending_text_last_char() {
            return crate::predicates::is_delimiter(Some(last));
        }
        match self.tokens.last() {
            None => true,
            Some(t) if t.is_newline() || t.is_markdown() => true,
            Some(t) => t.ends_with_emoji(),
        }
    }

    pub fn reset_brackets(&mut self) {
        self.brackets.reset();
    }

    /// Collect the verbatim substring `[start, end)`. Used by recognizers
    /// that need the matched text to build a token's `value`/payload fields
    /// once a span has been accepted.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }
}

impl Token {
    /// Whether this token's trailing content is an emoji attachment that
    /// reaches the end of its value — the "previous token ended on an
    /// emoji" clause of `at_word_bound`.
    fn ends_with_emoji(&self) -> bool {
        match &self.kind {
            TokenKind::Emoji { .. } => true,
            TokenKind::Text { emoji } => {
                let len = self.value.chars().count();
                emoji.last().is_some_and(|e| e.to == len)
            }
            _ => false,
        }
    }
}
