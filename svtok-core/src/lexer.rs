//! Regex-driven lexer
//!
//! Splits raw text into tokens and paragraph-break markers. At every position
//! the alternatives are tried in order: word-like runs, numeric expressions,
//! paragraph breaks, and finally a single non-whitespace character. A single
//! character that repeats (`...`, `!!`) is widened to the whole run.
//! Combining marks count as word characters, so decomposed letters stay in
//! their word.

use std::sync::OnceLock;

use regex::Regex;

use crate::token::{BreakKind, Item};

const TOKEN_PATTERN: &str = r"(?x)
      \w+ (?: [^\s/] \w+ )* -?          # word-like run: e-post, t.ex, för-
    | [+.]? \d+ (?: [\s:/,.-] \d+ )*    # numeric expression: +46, .5, 1/2
    | (?P<para> \n (?: \s* \n )+ )      # paragraph break
    | (?P<char> \S )                    # single character, widened to a run
";

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"))
}

/// Lazy tokenizer over a borrowed document
///
/// Never fails: every non-whitespace character ends up in some token.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the start of `text`
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Byte offset where the next scan starts
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = token_pattern().captures_at(self.text, self.pos)?;
        let whole = caps.get(0)?;

        if caps.name("para").is_some() {
            self.pos = whole.end();
            return Some(Item::Break(BreakKind::Paragraph));
        }

        let mut end = whole.end();
        if caps.name("char").is_some() {
            if let Some(ch) = whole.as_str().chars().next() {
                end += self.text[end..]
                    .chars()
                    .take_while(|&c| c == ch)
                    .map(char::len_utf8)
                    .sum::<usize>();
            }
        }

        self.pos = end;
        Some(Item::Token(&self.text[whole.start()..end]))
    }
}
