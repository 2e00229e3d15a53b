//! The text-emoji alias table (`:)` → 🙂) and the trie built over its keys.
//! Aliases are matched case-sensitively: `:D` and `:d` are conventionally
//! distinct in chat clients (one reads as "laughing", the other is just
//! punctuation followed by a letter), so the trie is built with
//! `ignore_case = false`.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::trie::Trie;

const ALIASES: &[(&str, &str)] = &[
    (":)", "🙂"),
    (":-)", "🙂"),
    (":(", "🙁"),
    (":-(", "🙁"),
    (":D", "😀"),
    (":-D", "😀"),
    (";)", "😉"),
    (";-)", "😉"),
    (":P", "😛"),
    (":-P", "😛"),
    (":p", "😛"),
    (":O", "😮"),
    (":o", "😮"),
    (":'(", "😢"),
    (":|", "😐"),
    (":-|", "😐"),
    ("B)", "😎"),
    ("B-)", "😎"),
    ("<3", "❤️"),
    ("</3", "💔"),
    (":3", "😺"),
    ("xD", "😆"),
    ("XD", "😆"),
];

lazy_static! {
    pub static ref TEXT_EMOJI_MAP: HashMap<&'static str, &'static str> =
        ALIASES.iter().copied().collect();
    pub static ref TEXT_EMOJI_TRIE: Trie = Trie::build(ALIASES.iter().map(|(key, _)| *key), false)
        .expect("alias keys are non-empty");
}
