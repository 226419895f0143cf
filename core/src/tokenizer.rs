//! Lexer for raw HTML pages.
//!
//! Markup, stylesheet blocks and entities are consumed and dropped. Words,
//! numbers, hyperlinks and e-mail addresses come out normalized: lower-cased
//! where it matters, with inline tags and joining punctuation removed.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // Alternatives are tried in order at the current position; first match wins.
    static ref RULES: Regex = Regex::new(concat!(
        r"\A(?:",
        r"(?P<css>([\S^,]*,\s*)*\S+\s*\{[^}]+\})",
        r"|(?P<tag><(![^>]+|/?\w+((\s*[^\s=>])+=(\s*[^\s=>])+)*\s*/?)>)",
        r"|(?P<link>(htt(p|ps)://|www.)[^\s</]+)",
        r"|(?P<email>\S+@\S+\.[^<\s,?!.\xa0\x85]+)",
        r"|(?P<number>[1-9](\d|,|\.|-)*)",
        r"|(?P<entity>&\w+)",
        r"|(?P<word>[A-z](\w|'|-|\.\w|<[^>]+>)*)",
        r"|(?P<newline>\n+)",
        r")",
    ))
    .expect("valid lexer rules");
    static ref LINK_NOISE: Regex = Regex::new(r"https://|http://|www|\.").expect("valid regex");
    static ref EMAIL_NOISE: Regex = Regex::new(r"@.*|<[^>]+>").expect("valid regex");
    static ref NUMBER_NOISE: Regex = Regex::new(r",|-|\.\S*").expect("valid regex");
    static ref WORD_NOISE: Regex = Regex::new(r"\.|-|'|<[^>]+>").expect("valid regex");
}

/// Skipped without trying any rule.
const IGNORED: &[char] = &[
    ' ', '[', ']', '+', '$', '|', '=', '%', '*', '{', '}', '/', '0', '-', '"', '#', '>', '(', ')',
    ';', ':', '!', '?', '.', ',', '\t', '\u{a0}', '\u{85}', '\u{e2}', '\0',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Hyperlink,
    Email,
    Number,
    Word,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

/// Stateless; every call to [`HtmlLexer::tokens`] starts a fresh scan.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlLexer;

impl HtmlLexer {
    pub fn new() -> Self {
        Self
    }

    /// Normalized token strings, produced lazily.
    pub fn tokens<'a>(&self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        self.scan(text).map(|t| t.value)
    }

    pub fn scan<'a>(&self, text: &'a str) -> Tokens<'a> {
        Tokens { text, pos: 0 }
    }
}

/// Convenience wrapper collecting every token of `text`.
pub fn tokenize(text: &str) -> Vec<String> {
    HtmlLexer.tokens(text).collect()
}

pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn classify(caps: &Captures<'_>) -> Option<Token> {
        if let Some(m) = caps.name("link") {
            let lowered = m.as_str().to_lowercase();
            let value = LINK_NOISE.replace_all(&lowered, "").into_owned();
            return Some(Token { kind: TokenKind::Hyperlink, value });
        }
        if let Some(m) = caps.name("email") {
            let value = EMAIL_NOISE.replace_all(m.as_str(), "").into_owned();
            return Some(Token { kind: TokenKind::Email, value });
        }
        if let Some(m) = caps.name("number") {
            let value = NUMBER_NOISE.replace_all(m.as_str(), "").into_owned();
            return Some(Token { kind: TokenKind::Number, value });
        }
        if let Some(m) = caps.name("word") {
            let lowered = m.as_str().to_lowercase();
            let value = WORD_NOISE.replace_all(&lowered, "").into_owned();
            return Some(Token { kind: TokenKind::Word, value });
        }
        // css, tag, entity, newline
        None
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            let c = rest.chars().next()?;
            if IGNORED.contains(&c) {
                self.pos += c.len_utf8();
                continue;
            }
            match RULES.captures(rest) {
                Some(caps) => {
                    let end = caps.get(0).map_or(0, |m| m.end());
                    // zero-width matches cannot happen with these rules, but never stall
                    self.pos += end.max(c.len_utf8());
                    if let Some(token) = Self::classify(&caps) {
                        return Some(token);
                    }
                }
                None => self.pos += c.len_utf8(),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_lowercased() {
        assert_eq!(tokenize("Hello World"), vec!["hello", "world"]);
    }

    #[test]
    fn markup_is_dropped() {
        let toks = tokenize("<html><body class=main>Cats</body></html>");
        assert_eq!(toks, vec!["cats"]);
    }

    #[test]
    fn inline_tags_do_not_split_words() {
        assert_eq!(tokenize("<b>E</b>lephants"), vec!["elephants"]);
    }

    #[test]
    fn contractions_and_abbreviations_join() {
        assert_eq!(tokenize("we'll see Ph.D well-known"), vec!["well", "see", "phd", "wellknown"]);
    }

    #[test]
    fn kinds_are_reported() {
        let kinds: Vec<TokenKind> = HtmlLexer.scan("word 42").map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Word, TokenKind::Number]);
    }
}
