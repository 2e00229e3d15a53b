//! Markdown open/close pairing (§4.8). `*`→Bold, `_`→Italic, `~`→Strike,
//! `` ` ``→Monospace. At a start-bound position a contiguous run of markers
//! not yet open is greedily opened; otherwise a run of currently-open
//! markers is provisionally closed, but only commits if the character right
//! after the run is a delimiter — `*bold* not*italic` must not treat the
//! second `*` as closing anything.

use crate::format::Format;
use crate::predicates::is_delimiter;
use crate::scanner::Scanner;

fn is_start_bound(s: &Scanner) -> bool {
    match s.peek_prev() {
        None => true,
        Some(c) => is_delimiter(Some(c)) || matches!(c, '(' | '[' | '{'),
    }
}

fn try_open(s: &mut Scanner) -> bool {
    let start = s.pos();
    let mut opened = false;
    while let Some(c) = s.peek() {
        let Some(bit) = Format::for_marker(c) else {
            break;
        };
        if s.format().contains(bit) {
            break;
        }
        s.advance_raw();
        s.open_format(c, bit);
        opened = true;
    }
    if !opened {
        s.seek(start);
    }
    opened
}

fn try_close(s: &mut Scanner) -> bool {
    let start = s.pos();
    let mut pending: Vec<(char, Format)> = Vec::new();
    while let Some(c) = s.peek() {
        let Some(bit) = Format::for_marker(c) else {
            break;
        };
        if !s.format().contains(bit) {
            break;
        }
        s.advance_raw();
        pending.push((c, bit));
    }
    if pending.is_empty() {
        return false;
    }
    if !is_delimiter(s.peek()) {
        // Looked like a close run but isn't end-bound: keep the characters
        // as pending text rather than rescanning them.
        s.mark_pending(start);
        return true;
    }
    for (marker, bit) in pending {
        s.close_format(marker, bit);
    }
    true
}

pub fn recognize(s: &mut Scanner) -> bool {
    if is_start_bound(s) {
        try_open(s)
    } else {
        try_close(s)
    }
}
