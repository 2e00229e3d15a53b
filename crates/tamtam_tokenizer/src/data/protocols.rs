//! The protocol scheme trie, plus the standalone `mailto:`/`magnet:` prefix
//! tries the link recognizer's `strict-email`/`magnet` sub-recognizers use.

use lazy_static::lazy_static;

use crate::trie::Trie;

/// Schemes the strict-address sub-recognizer accepts as an explicit
/// protocol prefix. `//` (protocol-relative) is included deliberately — the
/// link recognizer prepends `http:` for it at normalization time.
const PROTOCOLS: &[&str] = &[
    "http://",
    "https://",
    "ftp://",
    "ftps://",
    "tg://",
    "tt://",
    "tamtam://",
    "skype://",
    "//",
];

lazy_static! {
    pub static ref PROTOCOL_TRIE: Trie =
        Trie::build(PROTOCOLS, true).expect("protocol list is non-empty and has no empty entries");
    pub static ref MAILTO_TRIE: Trie =
        Trie::build(["mailto:"], true).expect("mailto prefix is non-empty");
    pub static ref MAGNET_TRIE: Trie =
        Trie::build(["magnet:"], true).expect("magnet prefix is non-empty");
}
