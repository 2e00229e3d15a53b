//! Character predicates used throughout the scanner and its recognizers.
//!
//! Everything here operates on a single Unicode scalar value (`char`) rather
//! than a byte, since the scanner walks code points, not UTF-8 bytes.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};
use unicode_xid::UnicodeXID;

/// `0`..=`9`.
#[inline]
pub fn is_number(c: char) -> bool {
    c.is_ascii_digit()
}

/// An ASCII letter, case-insensitively.
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[inline]
pub fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || is_number(c)
}

/// True for any code point in Unicode's `Letter` general category group.
/// Used where the original scanner must accept non-Latin scripts (domain
/// labels, mention bodies in loose mode) but ASCII-only predicates would not.
#[inline]
pub fn is_unicode_alpha(c: char) -> bool {
    matches!(c.general_category_group(), GeneralCategoryGroup::Letter)
}

/// Space, tab, or NBSP. Deliberately narrower than `char::is_whitespace`:
/// newlines are classified separately by [`is_newline`].
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{00A0}')
}

#[inline]
pub fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{000C}')
}

const DELIMITER_PUNCTUATION: &[char] = &[
    '!', '"', '\'', ',', '.', ':', ';', '?', '(', ')', '[', ']', '{', '}', '-', '\u{2013}',
    '\u{2014}',
];

/// Punctuation that counts as delimiting for word-boundary and identifier-end
/// purposes. Narrower than `char::is_ascii_punctuation`: it is the explicit
/// set the original scanner treats as sentence/word punctuation, not every
/// ASCII symbol (`#`, `@`, `/`, `*`, `_`, `~`, `` ` `` are all significant
/// elsewhere and must not terminate a body early via this predicate).
#[inline]
pub fn is_punctuation(c: char) -> bool {
    DELIMITER_PUNCTUATION.contains(&c)
}

/// Alias kept for call sites that read more naturally with the "delimiter
/// punctuation" name (the link recognizer's segment scanner, for instance).
#[inline]
pub fn is_delimiter_punct(c: char) -> bool {
    is_punctuation(c)
}

/// A Markdown formatting marker character.
#[inline]
pub fn is_format_marker(c: char) -> bool {
    matches!(c, '*' | '_' | '~' | '`')
}

/// Whitespace, newline, punctuation, or a formatting marker: anywhere a word
/// or recognized span is expected to end.
#[inline]
pub fn is_delimiter(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => is_newline(c) || is_whitespace(c) || is_punctuation(c) || is_format_marker(c),
    }
}

/// Body character for mentions, commands, and user stickers: alphanumeric,
/// underscore, or hyphen.
#[inline]
pub fn is_identifier(c: char) -> bool {
    is_alphanumeric(c) || c == '_' || c == '-'
}

/// Unicode-aware identifier character used by loose-mode mentions/hashtags,
/// which must accept non-Latin handles (`@пользователь`) in addition to the
/// ASCII identifier set. Delegates to `unicode-xid`'s `XID_Continue` class
/// rather than the coarser general-category letter test, since it already
/// includes combining marks and digits from other scripts.
#[inline]
pub fn is_unicode_identifier(c: char) -> bool {
    c == '_' || c == '-' || c.is_xid_continue()
}

/// ASCII ucase fold, mirroring the source scanner's bit-twiddle
/// (`c & !32`) but spelled out for readability; used by the protocol trie's
/// case-insensitive matching.
#[inline]
pub fn ascii_upper(c: char) -> char {
    if c.is_ascii_lowercase() {
        ((c as u8) - 32) as char
    } else {
        c
    }
}

/// Printable "special" characters accepted inside email local parts and
/// unreserved URI segments: `! $ % & * + = ^ \` { | } ~`.
#[inline]
pub fn is_printable_special(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '%' | '&' | '*' | '+' | '=' | '^' | '`' | '{' | '|' | '}' | '~'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_ascii_letters_and_digits() {
        assert!(is_alpha('a'));
        assert!(is_alpha('Z'));
        assert!(!is_alpha('5'));
        assert!(is_number('5'));
        assert!(is_alphanumeric('9'));
    }

    #[test]
    fn unicode_alpha_accepts_non_latin_letters() {
        assert!(is_unicode_alpha('ы'));
        assert!(is_unicode_alpha('й'));
        assert!(!is_unicode_alpha('5'));
        assert!(!is_unicode_alpha(' '));
    }

    #[test]
    fn delimiter_covers_eof_and_markers() {
        assert!(is_delimiter(None));
        assert!(is_delimiter(Some(' ')));
        assert!(is_delimiter(Some('*')));
        assert!(is_delimiter(Some('.')));
        assert!(!is_delimiter(Some('a')));
    }

    #[test]
    fn ascii_upper_only_touches_lowercase() {
        assert_eq!(ascii_upper('a'), 'A');
        assert_eq!(ascii_upper('Z'), 'Z');
        assert_eq!(ascii_upper('5'), '5');
    }
}
