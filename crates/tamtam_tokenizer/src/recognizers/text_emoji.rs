//! `:)`-style alias resolution (§4.6): requires a word boundary, a trie
//! match, and a delimiter immediately after the match — otherwise `:)ish`
//! would resolve the emoji inside a word, which chat clients don't do.

use crate::data::text_emoji::{TEXT_EMOJI_MAP, TEXT_EMOJI_TRIE};
use crate::predicates::is_delimiter;
use crate::scanner::Scanner;

pub fn recognize(s: &mut Scanner) -> bool {
    if !s.options.text_emoji || !s.at_word_bound() {
        return false;
    }
    let start = s.pos();
    if !TEXT_EMOJI_TRIE.consume(s) {
        return false;
    }
    if !is_delimiter(s.peek()) {
        s.seek(start);
        return false;
    }
    let end = s.pos();
    let key = s.slice(start, end);
    let alias = TEXT_EMOJI_MAP.get(key.as_str()).map(|v| v.to_string());
    s.push_emoji(start, end, alias);
    true
}
