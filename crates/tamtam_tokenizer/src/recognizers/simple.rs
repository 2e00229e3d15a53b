//! The word-bound prefix recognizers: `@mention`, `/command`, `#hashtag`,
//! and `#u…s#` user stickers (§4.7). All four share the same failure
//! discipline — rewind to the entry position on rejection — but each has
//! its own boundary rule and body alphabet.

use crate::format::Format;
use crate::options::MentionMode;
use crate::predicates::{is_delimiter, is_identifier, is_unicode_identifier};
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

fn push_format_stamped(s: &mut Scanner, value: String, kind: TokenKind) {
    let format = if s.options.use_format {
        s.format()
    } else {
        Format::empty()
    };
    s.push(Token {
        value,
        format,
        sticky: false,
        kind,
    });
}

pub fn recognize_mention(s: &mut Scanner) -> bool {
    let mode = s.options.mention;
    if !mode.is_enabled() || !s.at_word_bound() {
        return false;
    }
    let start = s.pos();
    if !s.consume_char('@') {
        return false;
    }
    let body_start = s.pos();
    let accept: fn(char) -> bool = match mode {
        MentionMode::Strict => is_identifier,
        MentionMode::Loose => is_unicode_identifier,
        MentionMode::Disabled => unreachable!("checked above"),
    };
    s.consume_while(accept);
    let body_end = s.pos();
    if body_end == body_start && !is_delimiter(s.peek()) {
        s.seek(start);
        return false;
    }
    let value = s.slice(start, body_end);
    let mention = s.slice(body_start, body_end);
    push_format_stamped(s, value, TokenKind::Mention { mention });
    true
}

pub fn recognize_command(s: &mut Scanner) -> bool {
    if !s.options.command || !s.at_word_bound() {
        return false;
    }
    let start = s.pos();
    if !s.consume_char('/') {
        return false;
    }
    let body_start = s.pos();
    s.consume_while(is_identifier);
    let body_end = s.pos();
    if body_end == body_start && !is_delimiter(s.peek()) {
        s.seek(start);
        return false;
    }
    let value = s.slice(start, body_end);
    let command = s.slice(body_start, body_end);
    push_format_stamped(s, value, TokenKind::Command { command });
    true
}

pub fn recognize_hashtag(s: &mut Scanner) -> bool {
    if !s.options.hashtag {
        return false;
    }
    let chained = matches!(s.last_token(), Some(t) if t.is_hashtag());
    if !s.at_word_bound() && !chained {
        return false;
    }
    let start = s.pos();
    if !s.consume_char('#') {
        return false;
    }
    let body_start = s.pos();
    s.consume_while(is_unicode_identifier);
    let body_end = s.pos();
    if body_end == body_start && !is_delimiter(s.peek()) {
        s.seek(start);
        return false;
    }
    let value = s.slice(start, body_end);
    let hashtag = s.slice(body_start, body_end);
    push_format_stamped(s, value, TokenKind::HashTag { hashtag });
    true
}

pub fn recognize_user_sticker(s: &mut Scanner) -> bool {
    if !s.options.user_sticker {
        return false;
    }
    let start = s.pos();
    if !(s.consume_char('#') && s.consume_char('u')) {
        s.seek(start);
        return false;
    }
    let body_start = s.pos();
    s.consume_while(|c| c.is_ascii_alphanumeric());
    let body_end = s.pos();
    if !(s.consume_char('s') && s.consume_char('#')) {
        s.seek(start);
        return false;
    }
    let value = s.slice(start, s.pos());
    let sticker_id = s.slice(body_start, body_end);
    push_format_stamped(s, value, TokenKind::UserSticker { sticker_id });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;

    #[test]
    fn mention_captures_loose_unicode_body() {
        let mut s = Scanner::new("@пользователь ", ParseOptions::default());
        assert!(recognize_mention(&mut s));
        assert!(matches!(&s.tokens()[0].kind, TokenKind::Mention { mention } if mention == "пользователь"));
    }

    #[test]
    fn bare_mention_at_eof_is_accepted() {
        let mut s = Scanner::new("@", ParseOptions::default());
        assert!(recognize_mention(&mut s));
        assert!(matches!(&s.tokens()[0].kind, TokenKind::Mention { mention } if mention.is_empty()));
    }

    #[test]
    fn command_rejects_mid_word_slash() {
        let mut s = Scanner::new("km/h", ParseOptions::default());
        s.consume_text();
        s.consume_text();
        assert!(!recognize_command(&mut s));
    }

    #[test]
    fn hashtags_chain_without_delimiter() {
        let mut s = Scanner::new("#a#b", ParseOptions::default());
        assert!(recognize_hashtag(&mut s));
        assert!(recognize_hashtag(&mut s));
        assert_eq!(s.tokens().len(), 2);
    }

    #[test]
    fn user_sticker_requires_closing_s_hash() {
        let mut s = Scanner::new("#u123s#", ParseOptions::default());
        assert!(recognize_user_sticker(&mut s));
        assert!(matches!(&s.tokens()[0].kind, TokenKind::UserSticker { sticker_id } if sticker_id == "123"));
    }

    #[test]
    fn user_sticker_rewinds_without_close() {
        let mut s = Scanner::new("#u123", ParseOptions::default());
        assert!(!recognize_user_sticker(&mut s));
        assert_eq!(s.pos(), 0);
    }
}
