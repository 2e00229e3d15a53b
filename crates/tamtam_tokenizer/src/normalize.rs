//! Post-parse cleanup: merge adjacent equal-format `Text` tokens, rebasing
//! their inline emoji offsets, per invariant 2. Unpaired Markdown openers
//! have already been downgraded to `Text` by the scanner before this runs,
//! so a single merge pass is sufficient — it never needs to rerun.

use crate::token::{Emoji, Token, TokenKind};

pub fn normalize(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token.value.is_empty() && matches!(token.kind, TokenKind::Text { .. }) {
            continue;
        }
        match out.last_mut() {
            Some(prev) if prev.is_mergeable_text_with(token.format) => {
                merge_text_into(prev, token);
            }
            _ => out.push(token),
        }
    }
    out
}

fn merge_text_into(prev: &mut Token, next: Token) {
    let TokenKind::Text { emoji: next_emoji } = next.kind else {
        unreachable!("caller checked is_mergeable_text_with");
    };
    let offset = prev.value.chars().count();
    let TokenKind::Text { emoji: prev_emoji } = &mut prev.kind else {
        unreachable!("caller checked is_mergeable_text_with");
    };
    prev_emoji.extend(next_emoji.into_iter().map(|e| Emoji {
        from: e.from + offset,
        to: e.to + offset,
        emoji: e.emoji,
    }));
    prev.value.push_str(&next.value);
}
