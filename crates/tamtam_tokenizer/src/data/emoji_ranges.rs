//! Code-point classification for the emoji-sequence sub-recognizer (§4.5).
//!
//! The source this crate is descended from carries two slightly different
//! emoji-range tables in different places: a conservative enumerated
//! low-set and a broad `U+2000..U+3300` range. This implements the
//! enumerated version — an explicit symbol list plus the canonical high
//! emoji planes — matching the newer of the two code paths; a test that
//! depends on the broader `U+2000..U+3300` sweep accepting an arbitrary
//! dingbat would need the wider table instead.

/// A curated set of emoji-capable symbols in the `U+2000..U+3300` range.
/// Not exhaustive — see the module doc comment.
const LOW_SYMBOLS: &[char] = &[
    '©', '®', '‼', '⁉', '™',
    '↔', '↕', '↖', '↗', '↘', '↙', '↩', '↪',
    '⌚', '⌛', '⌨', '⏰', '⏱', '⏲', '⏳', '⏸', '⏹', '⏺',
    '☀', '☁', '☂', '☃', '☄', '★', '☆', '☎', '☑', '☔', '☕', '☘', '☝', '☠',
    '☢', '☣', '☦', '☪', '☮', '☯',
    '♈', '♉', '♊', '♋', '♌', '♍', '♎', '♏', '♐', '♑', '♒', '♓',
    '♠', '♣', '♥', '♦', '♨', '♻', '♾', '♿',
    '⚒', '⚓', '⚔', '⚕', '⚖', '⚗', '⚙', '⚛', '⚠', '⚡', '⚪', '⚫', '⚰', '⚱', '⚽', '⚾',
    '⛄', '⛅', '⛈', '⛎', '⛏', '⛑', '⛓', '⛔', '⛩', '⛪', '⛰', '⛱', '⛲', '⛳', '⛴', '⛵',
    '⛷', '⛸', '⛹', '⛺', '⛽',
    '✂', '✅', '✈', '✉', '✊', '✋', '✌', '✍', '✏', '✒', '✔', '✖', '✝', '✡', '✨', '✳', '✴',
    '❄', '❇', '❌', '❎', '❓', '❔', '❕', '❗', '❣', '❤',
    '➕', '➖', '➗', '➡', '➰', '➿',
];

#[inline]
fn in_low_symbols(c: char) -> bool {
    LOW_SYMBOLS.contains(&c)
}

/// Canonical high emoji planes: the supplementary-plane ranges the original
/// table enumerates wholesale rather than symbol-by-symbol.
#[inline]
fn in_high_ranges(c: char) -> bool {
    matches!(c, '\u{1E400}'..='\u{1F3FF}' | '\u{1E800}'..='\u{1F7FF}' | '\u{1EC00}'..='\u{1FBFF}')
}

/// True if `c` can start an emoji item in the `emoji-sequence` sub-recognizer.
#[inline]
pub fn is_emoji_base(c: char) -> bool {
    in_low_symbols(c) || in_high_ranges(c)
}
