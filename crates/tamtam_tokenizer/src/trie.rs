//! An ordered prefix tree over `char`, used to greedily match a small,
//! static set of strings (URI schemes, `mailto:`/`magnet:` prefixes,
//! text-emoji alias keys) against the scanner's input.
//!
//! Modeled after the checkpoint/rewind discipline in the teacher's lexer
//! (`Lexer::checkpoint`/`rewind` in `intl_markdown`): a trie consume always
//! leaves the scanner exactly where it started if no path reaches a
//! terminal node.

use std::collections::BTreeMap;

use crate::error::{TokenizerError, TokenizerResult};
use crate::predicates::ascii_upper;
use crate::scanner::Scanner;

#[derive(Debug, Default)]
struct Node {
    children: BTreeMap<char, Node>,
    terminal: bool,
}

/// A small ordered prefix tree. Nodes use a `BTreeMap` rather than a
/// `HashMap` since the alphabets involved (URI schemes, emoji aliases) are
/// tiny; a sorted small map beats hashing for lookups this size.
#[derive(Debug, Default)]
pub struct Trie {
    root: Node,
    ignore_case: bool,
}

impl Trie {
    /// Build a trie from a list of patterns. `ignore_case` folds ASCII
    /// letters to uppercase both at build time and at match time.
    pub fn build<I, S>(patterns: I, ignore_case: bool) -> TokenizerResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = Node::default();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                return Err(TokenizerError::EmptyPattern);
            }
            let mut node = &mut root;
            for c in pattern.chars() {
                let key = if ignore_case { ascii_upper(c) } else { c };
                node = node.children.entry(key).or_default();
            }
            node.terminal = true;
        }
        Ok(Trie { root, ignore_case })
    }

    /// Greedily consume the longest path through the trie that the scanner's
    /// remaining input matches, committing only if some prefix along the way
    /// reached a terminal node. Returns `true` and leaves the scanner
    /// advanced past the longest matched terminal; returns `false` and
    /// rewinds to the entry position otherwise.
    pub fn consume(&self, scanner: &mut Scanner) -> bool {
        let start = scanner.pos();
        let mut node = &self.root;
        let mut longest_match: Option<usize> = None;

        loop {
            if node.terminal {
                longest_match = Some(scanner.pos());
            }
            let Some(c) = scanner.peek() else { break };
            let key = if self.ignore_case { ascii_upper(c) } else { c };
            match node.children.get(&key) {
                Some(next) => {
                    node = next;
                    scanner.advance_raw();
                }
                None => break,
            }
        }

        match longest_match {
            Some(end) => {
                scanner.seek(end);
                true
            }
            None => {
                scanner.seek(start);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;

    #[test]
    fn matches_longest_terminal_prefix() {
        let trie = Trie::build(["http://", "https://", "//"], true).unwrap();
        let mut scanner = Scanner::new("https://example.com", ParseOptions::default());
        assert!(trie.consume(&mut scanner));
        assert_eq!(scanner.pos(), "https://".chars().count());
    }

    #[test]
    fn rewinds_on_no_match() {
        let trie = Trie::build(["mailto:"], true).unwrap();
        let mut scanner = Scanner::new("hello world", ParseOptions::default());
        assert!(!trie.consume(&mut scanner));
        assert_eq!(scanner.pos(), 0);
    }

    #[test]
    fn ignore_case_folds_ascii() {
        let trie = Trie::build(["MAILTO:"], true).unwrap();
        let mut scanner = Scanner::new("mailto:a@b.com", ParseOptions::default());
        assert!(trie.consume(&mut scanner));
    }

    #[test]
    fn rejects_empty_pattern() {
        assert!(matches!(
            Trie::build([""], true),
            Err(TokenizerError::EmptyPattern)
        ));
    }
}
