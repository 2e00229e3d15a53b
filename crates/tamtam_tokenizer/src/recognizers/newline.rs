//! `\r\n` / `\r` / `\n` / `\f`, each emitted as a single `Newline` token
//! carrying the exact sequence consumed.

use crate::scanner::Scanner;
use crate::token::Token;

pub fn recognize(s: &mut Scanner) -> bool {
    let start = s.pos();
    let consumed = if s.consume_char('\r') {
        s.consume_char('\n');
        true
    } else {
        s.consume_char('\n') || s.consume_char('\u{000C}')
    };
    if !consumed {
        return false;
    }
    let value = s.slice(start, s.pos());
    s.push(Token::newline(value));
    true
}
