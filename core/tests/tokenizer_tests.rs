use slotdex_core::tokenizer::{tokenize, HtmlLexer, TokenKind};

#[test]
fn it_strips_markup_and_styles() {
    let html = r#"<!DOCTYPE html>
<html><head><style>h1, p { color: red; }</style></head>
<body><p class="intro">Rust &amp; Friends</p></body></html>"#;
    let words = tokenize(html);
    assert_eq!(words, vec!["rust", "friends"]);
}

#[test]
fn it_canonicalizes_links_and_emails() {
    let toks: Vec<(TokenKind, String)> = HtmlLexer
        .scan("see http://www.Example.com/path or mail jane.doe@example.org")
        .map(|t| (t.kind, t.value))
        .collect();
    assert!(toks.contains(&(TokenKind::Hyperlink, "examplecom".to_string())));
    assert!(toks.contains(&(TokenKind::Email, "jane.doe".to_string())));
}

#[test]
fn it_normalizes_numbers() {
    let toks = tokenize("call 555-1234 or pay 1,250.75 by 2007");
    assert_eq!(toks, vec!["call", "5551234", "or", "pay", "1250", "by", "2007"]);
}

#[test]
fn leading_zeros_are_ignored() {
    assert_eq!(tokenize("007"), vec!["7"]);
}

#[test]
fn tokens_are_lazy() {
    let mut it = HtmlLexer.tokens("alpha beta gamma");
    assert_eq!(it.next().as_deref(), Some("alpha"));
    assert_eq!(it.next().as_deref(), Some("beta"));
    assert_eq!(it.next().as_deref(), Some("gamma"));
    assert_eq!(it.next(), None);
}
