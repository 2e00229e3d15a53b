//! URL/email auto-detection (§4.9) — magnet links, `mailto:` literals,
//! protocol-prefixed addresses, and bare domain/email detection, with the
//! shared `fragment` scanner doing the label-by-label walk that both the
//! domain and email paths need.
//!
//! This is the hardest recognizer in the crate: unlike the others, it
//! backtracks across multiple candidate parses (`strict-email`,
//! `strict-address`, `email-or-address`) and has to resolve the ambiguity
//! between "trailing sentence punctuation" and "part of the domain" before
//! committing.

use bitflags::bitflags;

use crate::data::protocols::{MAGNET_TRIE, MAILTO_TRIE, PROTOCOL_TRIE};
use crate::data::tld::is_valid_tld;
use crate::format::Format;
use crate::predicates::{is_delimiter, is_printable_special, is_unicode_alpha};
use crate::recognizers::emoji::starts_with_keycap;
use crate::scanner::{BracketKind, Scanner};
use crate::token::Token;

const MAX_LABEL_LEN: usize = 63;

bitflags! {
    /// Both the input mask passed to [`fragment`] (`DOT`/`ASCII`/`UNICODE`/
    /// `PRINTABLE`) and its result bitset (which additionally sets
    /// `MIDDLE_PRINTABLE`, `TRAILING_PRINTABLE`, `OCTET_OVERFLOW`, and
    /// `VALID_TLD`) share one type, mirroring how the spec describes them
    /// as the same flag vocabulary used two ways.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Fragment: u16 {
        const DOT               = 1;
        const ASCII              = 1 << 1;
        const UNICODE            = 1 << 2;
        const PRINTABLE          = 1 << 3;
        const MIDDLE_PRINTABLE   = 1 << 4;
        const TRAILING_PRINTABLE = 1 << 5;
        const OCTET_OVERFLOW     = 1 << 6;
        const VALID_TLD          = 1 << 7;
    }
}

const DOMAIN_MASK: Fragment = Fragment::DOT.union(Fragment::ASCII).union(Fragment::UNICODE);
const PREFIX_MASK: Fragment = Fragment::DOT
    .union(Fragment::ASCII)
    .union(Fragment::UNICODE)
    .union(Fragment::PRINTABLE);

/// The label-walking primitive shared by the email and domain paths.
/// Consumes dot-separated labels made of the character classes enabled in
/// `mask`, returning a bitset describing what was observed. Rewinds a
/// trailing dot that is immediately followed by a delimiter (end-of-sentence)
/// rather than consuming it.
fn fragment(s: &mut Scanner, mask: Fragment) -> Fragment {
    let mut result = Fragment::empty();
    let mut label_len = 0usize;
    let mut printable_seen = false;
    let mut last_was_printable = false;

    loop {
        let Some(c) = s.peek() else { break };
        if starts_with_keycap(s) {
            break;
        }
        if let Some(bit) = Format::for_marker(c) {
            if s.format().contains(bit) {
                break;
            }
        }

        if c == '.' {
            if !mask.contains(Fragment::DOT) || label_len == 0 {
                break;
            }
            if is_delimiter(s.peek_at(1)) {
                break;
            }
            s.next();
            result.insert(Fragment::DOT);
            label_len = 0;
            continue;
        }

        let is_ascii_label = mask.contains(Fragment::ASCII)
            && (c.is_ascii_alphanumeric() || c == '_' || c == '-');
        let is_unicode_label = mask.contains(Fragment::UNICODE) && is_unicode_alpha(c);
        let is_printable = mask.contains(Fragment::PRINTABLE) && is_printable_special(c);

        if !(is_ascii_label || is_unicode_label || is_printable) {
            break;
        }

        if is_printable {
            result.insert(Fragment::PRINTABLE);
            if printable_seen {
                result.insert(Fragment::MIDDLE_PRINTABLE);
            }
            printable_seen = true;
            last_was_printable = true;
        } else {
            if printable_seen {
                result.insert(Fragment::MIDDLE_PRINTABLE);
            }
            last_was_printable = false;
        }

        s.next();
        label_len += 1;
        if label_len > MAX_LABEL_LEN {
            result.insert(Fragment::OCTET_OVERFLOW);
        }
        if is_ascii_label {
            result.insert(Fragment::ASCII);
        }
        if is_unicode_label {
            result.insert(Fragment::UNICODE);
        }
    }

    if last_was_printable {
        result.insert(Fragment::TRAILING_PRINTABLE);
    }

    if mask.contains(Fragment::DOT) && result.contains(Fragment::DOT) && label_len > 0 {
        let last_label = s.slice(s.pos() - label_len, s.pos());
        if is_valid_tld(&last_label) {
            result.insert(Fragment::VALID_TLD);
        }
    }

    result
}

fn is_email_local_part(f: Fragment) -> bool {
    (f.intersects(Fragment::ASCII | Fragment::PRINTABLE))
        && !f.intersects(Fragment::UNICODE | Fragment::OCTET_OVERFLOW)
}

fn is_domain(f: Fragment) -> bool {
    f.contains(Fragment::DOT)
        && f.contains(Fragment::VALID_TLD)
        && f.intersects(Fragment::ASCII | Fragment::UNICODE)
        && !f.intersects(Fragment::PRINTABLE | Fragment::OCTET_OVERFLOW)
}

fn consume_segment(s: &mut Scanner) {
    loop {
        if starts_with_keycap(s) {
            break;
        }
        let Some(c) = s.peek() else { break };

        if c == '%' {
            if matches!(s.peek_at(1), Some(h) if h.is_ascii_hexdigit())
                && matches!(s.peek_at(2), Some(h) if h.is_ascii_hexdigit())
            {
                s.next();
                s.next();
                s.next();
                continue;
            }
            s.next();
            continue;
        }

        if matches!(c, '!' | ',' | '.' | ';' | '?') && is_segment_word_edge_after(s) {
            break;
        }

        if let Some(kind) = bracket_kind(c) {
            if is_open_bracket(c) {
                s.brackets.open(kind);
                s.next();
                continue;
            }
            if s.brackets.try_close(kind) {
                s.next();
                continue;
            }
            if !is_segment_word_edge_after(s) {
                s.next();
                continue;
            }
            break;
        }

        let unreserved = c.is_ascii_alphanumeric()
            || is_unicode_alpha(c)
            || matches!(c, '$' | '-' | '_' | '.' | '+' | '!' | '*' | '\'');
        let search_char = matches!(c, ';' | ':' | '@' | '&' | '=');

        if unreserved || search_char || c == '/' {
            s.next();
            continue;
        }

        break;
    }
}

fn is_segment_word_edge_after(s: &Scanner) -> bool {
    is_delimiter(s.peek_at(1))
}

fn bracket_kind(c: char) -> Option<BracketKind> {
    match c {
        '(' | ')' => Some(BracketKind::Paren),
        '[' | ']' => Some(BracketKind::Square),
        '{' | '}' => Some(BracketKind::Curly),
        _ => None,
    }
}

fn is_open_bracket(c: char) -> bool {
    matches!(c, '(' | '[' | '{')
}

fn consume_port(s: &mut Scanner) -> bool {
    let start = s.pos();
    if !s.consume_char(':') {
        return false;
    }
    if starts_with_keycap(s) || !s.consume_while(|c| c.is_ascii_digit()) {
        s.seek(start);
        return false;
    }
    true
}

fn consume_path(s: &mut Scanner) -> bool {
    if s.peek() != Some('/') {
        return false;
    }
    s.next();
    s.reset_brackets();
    consume_segment(s);
    true
}

fn consume_query_string(s: &mut Scanner) -> bool {
    if s.peek() != Some('?') || is_delimiter(s.peek_at(1)) {
        return false;
    }
    s.next();
    s.reset_brackets();
    consume_segment(s);
    true
}

fn consume_hash(s: &mut Scanner) -> bool {
    if s.peek() != Some('#') {
        return false;
    }
    s.next();
    s.reset_brackets();
    consume_segment(s);
    true
}

fn consume_trailers(s: &mut Scanner) {
    consume_port(s);
    consume_path(s);
    consume_query_string(s);
    consume_hash(s);
}

enum Outcome {
    No,
    Yes,
    Skip,
}

fn recognize_magnet(s: &mut Scanner) -> Outcome {
    let start = s.pos();
    if !MAGNET_TRIE.consume(s) {
        return Outcome::No;
    }
    consume_query_string(s);
    let value = s.slice(start, s.pos());
    emit_link(s, value.clone(), value, false);
    Outcome::Yes
}

fn recognize_strict_email(s: &mut Scanner) -> Outcome {
    let start = s.pos();
    if !MAILTO_TRIE.consume(s) {
        return Outcome::No;
    }
    let local = fragment(s, PREFIX_MASK);
    if !(is_email_local_part(local) && s.peek() == Some('@')) {
        s.mark_pending(start);
        return Outcome::Skip;
    }
    s.next();
    let domain = fragment(s, DOMAIN_MASK);
    if !is_domain(domain) {
        s.mark_pending(start);
        return Outcome::Skip;
    }
    consume_query_string(s);
    let value = s.slice(start, s.pos());
    let link = value.clone();
    emit_link(s, value, link, true);
    Outcome::Yes
}

/// Consumes the `user;?&=:`-class login section of `user@host`, terminated
/// by `@`. Rewinds entirely if no `@` is ever reached.
fn consume_login(s: &mut Scanner) -> bool {
    let start = s.pos();
    let mut any = false;
    loop {
        match s.peek() {
            Some(c) if c.is_ascii_alphanumeric() || matches!(c, ';' | '?' | '&' | '=' | ':' | '-' | '_' | '.') => {
                s.next();
                any = true;
            }
            Some('@') => {
                s.next();
                return any;
            }
            _ => break,
        }
    }
    s.seek(start);
    false
}

fn recognize_strict_address(s: &mut Scanner) -> Outcome {
    let start = s.pos();
    if !PROTOCOL_TRIE.consume(s) {
        return Outcome::No;
    }
    let had_login = consume_login(s);
    let domain_result = fragment(s, DOMAIN_MASK);
    if domain_result.is_empty() && !had_login {
        s.mark_pending(start);
        return Outcome::Skip;
    }
    consume_trailers(s);
    let value = s.slice(start, s.pos());
    let link = if value.starts_with("//") {
        format!("http:{value}")
    } else {
        value.clone()
    };
    emit_link(s, value, link, false);
    Outcome::Yes
}

fn recognize_email_or_address(s: &mut Scanner) -> Outcome {
    let start = s.pos();
    let prefix = fragment(s, PREFIX_MASK);

    if is_email_local_part(prefix) && s.peek() == Some('@') {
        let at_pos = s.pos();
        s.next();
        let domain_result = fragment(s, DOMAIN_MASK);
        if is_domain(domain_result) {
            consume_query_string(s);
            let value = s.slice(start, s.pos());
            let link = format!("mailto:{value}");
            emit_link(s, value, link, true);
            return Outcome::Yes;
        }
        s.seek(at_pos);
    }

    let mut prefix = prefix;
    if prefix.contains(Fragment::TRAILING_PRINTABLE) && !prefix.contains(Fragment::MIDDLE_PRINTABLE)
    {
        // End-of-sentence ambiguity (`ok.ru?`): the trailing printable char
        // is more likely punctuation than part of the domain. Strip it and
        // retry as an address.
        s.seek(s.pos() - 1);
        prefix.remove(Fragment::TRAILING_PRINTABLE | Fragment::PRINTABLE);
    }

    if is_domain(prefix) {
        consume_trailers(s);
        let value = s.slice(start, s.pos());
        let link = if value.contains(':') && value.split(':').next().is_some_and(|scheme| {
            !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
        }) {
            value.clone()
        } else {
            format!("http://{value}")
        };
        emit_link(s, value, link, true);
        return Outcome::Yes;
    }

    if s.pos() > start {
        s.mark_pending(start);
        return Outcome::Skip;
    }
    Outcome::No
}

fn emit_link(s: &mut Scanner, value: String, link: String, auto: bool) {
    let sticky = s.options.sticky_link;
    s.push(Token {
        value,
        format: Format::empty(),
        sticky,
        kind: crate::token::TokenKind::Link { link, auto },
    });
}

pub fn recognize(s: &mut Scanner) -> bool {
    if !s.options.link || !s.at_word_bound() {
        return false;
    }
    let start = s.pos();

    match recognize_magnet(s) {
        Outcome::Yes => return true,
        Outcome::Skip => return true,
        Outcome::No => s.seek(start),
    }

    match recognize_strict_email(s) {
        Outcome::Yes => return true,
        Outcome::Skip => return true,
        Outcome::No => s.seek(start),
    }

    match recognize_strict_address(s) {
        Outcome::Yes => return true,
        Outcome::Skip => return true,
        Outcome::No => s.seek(start),
    }

    match recognize_email_or_address(s) {
        Outcome::Yes => true,
        Outcome::Skip => true,
        Outcome::No => {
            s.seek(start);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;
    use crate::token::TokenKind;

    #[test]
    fn recognizes_bare_domain_with_valid_tld() {
        let mut s = Scanner::new("ok.ru more", ParseOptions::default());
        assert!(recognize(&mut s));
        assert!(matches!(&s.tokens()[0].kind, TokenKind::Link { link, .. } if link == "http://ok.ru"));
    }

    #[test]
    fn strips_trailing_question_mark_at_end_of_sentence() {
        let mut s = Scanner::new("ok.ru?", ParseOptions::default());
        assert!(recognize(&mut s));
        assert!(matches!(&s.tokens()[0].kind, TokenKind::Link { link, .. } if link == "http://ok.ru"));
        assert_eq!(s.pos(), "ok.ru".chars().count());
    }

    #[test]
    fn recognizes_bare_email() {
        let mut s = Scanner::new("test@mail.ru", ParseOptions::default());
        assert!(recognize(&mut s));
        assert!(matches!(&s.tokens()[0].kind, TokenKind::Link { link, .. } if link == "mailto:test@mail.ru"));
    }

    #[test]
    fn recognizes_explicit_https_with_path_and_query() {
        let mut s = Scanner::new("https://a.co/p?x=1, ok", ParseOptions::default());
        assert!(recognize(&mut s));
        assert!(
            matches!(&s.tokens()[0].kind, TokenKind::Link { link, .. } if link == "https://a.co/p?x=1")
        );
    }

    #[test]
    fn magnet_link_round_trips_value_as_link() {
        let mut s = Scanner::new("magnet:?xt=urn:x", ParseOptions::default());
        assert!(recognize(&mut s));
        assert!(
            matches!(&s.tokens()[0].kind, TokenKind::Link { link, .. } if link == "magnet:?xt=urn:x")
        );
    }

    #[test]
    fn rejects_non_word_bound_start() {
        let mut s = Scanner::new("ok.ru", ParseOptions::default());
        s.consume_text();
        assert!(!recognize(&mut s));
    }
}
