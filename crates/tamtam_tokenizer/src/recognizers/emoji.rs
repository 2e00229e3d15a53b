//! Emoji sequence recognition: keycap, regional/tag flags, ZWJ-joined
//! sequences, and the catch-all "forced emoji" (any code point + VS-16).
//! Tried in that order; the first to match wins and is recorded as an
//! inline attachment on the pending-text span, per §4.5.

use crate::data::emoji_ranges::is_emoji_base;
use crate::scanner::Scanner;

const VS16: char = '\u{FE0F}';
const KEYCAP: char = '\u{20E3}';

/// Non-mutating lookahead for "does a keycap sequence start here", used by
/// the link recognizer to terminate domain/segment scanning on a keycap
/// glyph without committing to consuming it.
pub fn starts_with_keycap(s: &Scanner) -> bool {
    let base_ok = matches!(s.peek_at(0), Some(c) if c.is_ascii_digit() || c == '#' || c == '*');
    if !base_ok {
        return false;
    }
    let mut i = 1;
    if s.peek_at(i) == Some(VS16) {
        i += 1;
    }
    s.peek_at(i) == Some(KEYCAP)
}

fn consume_keycap(s: &mut Scanner) -> bool {
    if !starts_with_keycap(s) {
        return false;
    }
    s.next();
    s.consume_char(VS16);
    s.consume_char(KEYCAP);
    true
}

fn is_regional_indicator(c: char) -> bool {
    matches!(c, '\u{1F1E6}'..='\u{1F1FF}')
}

fn is_tag_char(c: char) -> bool {
    matches!(c, '\u{E0020}'..='\u{E007E}')
}

fn consume_flag(s: &mut Scanner) -> bool {
    let start = s.pos();

    if let Some(c) = s.peek() {
        if is_regional_indicator(c) {
            s.next();
            if matches!(s.peek(), Some(c2) if is_regional_indicator(c2)) {
                s.next();
                return true;
            }
            s.seek(start);
        }
    }

    if s.consume_char('\u{1F3F4}') {
        let mut tags = 0usize;
        while s.consume_if(is_tag_char) {
            tags += 1;
        }
        if tags > 0 && s.consume_char('\u{E007F}') {
            return true;
        }
    }

    s.seek(start);
    false
}

fn is_skin_modifier(c: char) -> bool {
    matches!(c, '\u{1F3FB}'..='\u{1F3FF}')
}

fn is_gender_sign(c: char) -> bool {
    matches!(c, '\u{2640}' | '\u{2642}')
}

fn consume_emoji_item(s: &mut Scanner) -> bool {
    let Some(base) = s.peek() else { return false };
    if !is_emoji_base(base) {
        return false;
    }
    s.next();
    s.consume_if(is_skin_modifier);
    s.consume_if(is_gender_sign);
    s.consume_char(VS16);
    true
}

fn consume_emoji_sequence(s: &mut Scanner) -> bool {
    let start = s.pos();
    if !consume_emoji_item(s) {
        s.seek(start);
        return false;
    }
    loop {
        let before_zwj = s.pos();
        if s.consume_char('\u{200D}') {
            if consume_emoji_item(s) {
                continue;
            }
            s.seek(before_zwj);
        }
        break;
    }
    true
}

fn consume_forced_emoji(s: &mut Scanner) -> bool {
    let start = s.pos();
    if s.peek().is_some() {
        s.next();
        if s.consume_char(VS16) {
            return true;
        }
    }
    s.seek(start);
    false
}

pub fn recognize(s: &mut Scanner) -> bool {
    if s.options.skip_emoji {
        return false;
    }
    let start = s.pos();
    let matched = consume_keycap(s)
        || consume_flag(s)
        || consume_emoji_sequence(s)
        || consume_forced_emoji(s);
    if matched {
        let end = s.pos();
        s.push_emoji(start, end, None);
    }
    matched
}
