//! The six concrete scenarios from the specification's testable-properties
//! section, plus the documented boundary cases, run as integration tests
//! against the public `parse` entry point.

use tamtam_tokenizer::{parse, Format, MentionMode, ParseOptions, Token, TokenKind};
use test_case::test_case;

fn text_values(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.value.as_str()).collect()
}

#[test]
fn scenario_bold_markdown() {
    let tokens = parse("hello *world*", ParseOptions::default());
    assert_eq!(
        text_values(&tokens),
        vec!["hello ", "*", "world", "*"]
    );
    let bold = tokens.iter().find(|t| t.value == "world").unwrap();
    assert!(bold.format.contains(Format::BOLD));
}

#[test]
fn scenario_cyrillic_text_with_bare_domain_and_trailing_question_mark() {
    let tokens = parse("ты заходил на ok.ru?", ParseOptions::default());
    let link = tokens
        .iter()
        .find(|t| matches!(t.kind, TokenKind::Link { .. }))
        .expect("a link token");
    assert!(matches!(&link.kind, TokenKind::Link { link, .. } if link == "http://ok.ru"));
    assert_eq!(link.value, "ok.ru");
    assert_eq!(tokens.last().unwrap().value, "?");
}

#[test]
fn scenario_bare_email() {
    let tokens = parse("test@mail.ru", ParseOptions::default());
    assert_eq!(tokens.len(), 1);
    assert!(matches!(
        &tokens[0].kind,
        TokenKind::Link { link, auto: true } if link == "mailto:test@mail.ru"
    ));
}

#[test]
fn scenario_explicit_link_strips_trailing_comma() {
    let tokens = parse("see https://a.co/p?x=1, ok", ParseOptions::default());
    let link = tokens
        .iter()
        .find(|t| matches!(t.kind, TokenKind::Link { .. }))
        .unwrap();
    assert!(matches!(&link.kind, TokenKind::Link { link, .. } if link == "https://a.co/p?x=1"));
    assert!(tokens.last().unwrap().value.ends_with(", ok"));
}

#[test]
fn scenario_emoji_command_hashtag_mention_in_one_message() {
    let tokens = parse(":) /start #tag @me", ParseOptions::default());
    let emoji_text = tokens
        .iter()
        .find(|t| matches!(&t.kind, TokenKind::Text { emoji } if !emoji.is_empty()))
        .expect("inline emoji attachment on a text token");
    let TokenKind::Text { emoji } = &emoji_text.kind else {
        unreachable!()
    };
    let attachment = &emoji[0];
    assert_eq!(
        &emoji_text.value[attachment.from..attachment.to],
        ":)"
    );
    assert_eq!(attachment.emoji.as_deref(), Some("🙂"));
    assert!(tokens
        .iter()
        .any(|t| matches!(&t.kind, TokenKind::Command { command } if command == "start")));
    assert!(tokens
        .iter()
        .any(|t| matches!(&t.kind, TokenKind::HashTag { hashtag } if hashtag == "tag")));
    assert!(tokens
        .iter()
        .any(|t| matches!(&t.kind, TokenKind::Mention { mention } if mention == "me")));
}

#[test]
fn scenario_nested_markdown_italic_wrapping_bold() {
    let tokens = parse("_italic *both* end_", ParseOptions::default());
    let both = tokens.iter().find(|t| t.value == "both").unwrap();
    assert!(both.format.contains(Format::BOLD));
    assert!(both.format.contains(Format::ITALIC));
    let italic_only = tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::Text { .. }))
        .find(|t| t.value.contains("italic"))
        .unwrap();
    assert!(italic_only.format.contains(Format::ITALIC));
    assert!(!italic_only.format.contains(Format::BOLD));
}

#[test]
fn boundary_empty_string_yields_no_tokens() {
    assert!(parse("", ParseOptions::default()).is_empty());
}

#[test_case("/", ParseOptions::default() => "")]
#[test_case("@", ParseOptions::default() => "")]
#[test_case("#", ParseOptions::default() => "")]
fn boundary_lone_prefix_emits_empty_body_token(input: &str, options: ParseOptions) -> String {
    let tokens = parse(input, options);
    assert_eq!(tokens.len(), 1, "expected exactly one token for {input:?}");
    match &tokens[0].kind {
        TokenKind::Command { command } => command.clone(),
        TokenKind::Mention { mention } => mention.clone(),
        TokenKind::HashTag { hashtag } => hashtag.clone(),
        other => panic!("unexpected token kind for {input:?}: {other:?}"),
    }
}

#[test]
fn boundary_supplementary_code_point_round_trips() {
    let input = "a\u{1F600}b";
    let tokens = parse(input, ParseOptions::default());
    let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(rebuilt, input);
}

#[test_case("http://"; "http")]
#[test_case("https://"; "https")]
#[test_case("ftp://"; "ftp")]
#[test_case("tg://"; "telegram-style scheme")]
#[test_case("skype://"; "skype")]
fn protocol_prefixed_addresses_are_recognized(scheme: &str) {
    let input = format!("{scheme}example.com/x");
    let tokens = parse(&input, ParseOptions::default());
    assert!(
        tokens
            .iter()
            .any(|t| matches!(t.kind, TokenKind::Link { .. })),
        "expected a link for {input:?}, got {tokens:?}"
    );
}

#[test_case("ok.ru" => true)]
#[test_case("example.com" => true)]
#[test_case("not.a.tld.zzzzzzz" => false)]
fn tld_acceptance_drives_bare_domain_detection(host: &str) -> bool {
    let tokens = parse(host, ParseOptions::default());
    tokens
        .iter()
        .any(|t| matches!(t.kind, TokenKind::Link { .. }))
}

#[test]
fn strict_mention_mode_rejects_unicode_body() {
    let tokens = parse("@пользователь", ParseOptions::strict_mentions());
    // The Unicode body isn't a valid strict-mode identifier, so the `@`
    // degrades to plain text rather than forming a Mention token.
    assert!(!tokens
        .iter()
        .any(|t| matches!(t.kind, TokenKind::Mention { .. })));
}

#[test]
fn minimal_options_disable_every_auto_detect_feature() {
    let tokens = parse(
        "@me #tag /cmd test@mail.ru :)",
        ParseOptions::minimal(),
    );
    assert!(tokens
        .iter()
        .all(|t| matches!(t.kind, TokenKind::Text { .. } | TokenKind::Newline)));
}
