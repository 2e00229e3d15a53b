//! The top-level dispatch loop (§4.10): at every position, try each
//! recognizer in a fixed precedence order; the first to consume wins;
//! otherwise the current code point is folded into pending text.

use crate::normalize::normalize;
use crate::options::ParseOptions;
use crate::recognizers::{emoji, link, markdown, newline, simple, text_emoji};
use crate::scanner::Scanner;
use crate::token::Token;

/// Order matters: this is the precedence the spec's dispatch table fixes.
/// A recognizer earlier in the list always gets first refusal at a
/// position even if a later one would also match (e.g. `#u1s#` is claimed
/// by the user-sticker recognizer before the hashtag recognizer ever sees
/// the leading `#`).
fn dispatch(s: &mut Scanner) -> bool {
    markdown::recognize(s)
        || newline::recognize(s)
        || emoji::recognize(s)
        || text_emoji::recognize(s)
        || simple::recognize_user_sticker(s)
        || simple::recognize_mention(s)
        || simple::recognize_command(s)
        || simple::recognize_hashtag(s)
        || link::recognize(s)
}

pub fn parse(text: &str, options: ParseOptions) -> Vec<Token> {
    let mut scanner = Scanner::new(text, options);

    while scanner.has_next() {
        let start = scanner.pos();
        if !dispatch(&mut scanner) {
            scanner.consume_text();
        }
        debug_assert!(
            scanner.pos() > start,
            "recognizer dispatch must always make progress"
        );
    }

    scanner.flush_text();
    scanner.downgrade_unpaired_format();

    normalize(scanner.tokens().to_vec())
}
