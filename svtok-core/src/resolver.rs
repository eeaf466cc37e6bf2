//! Abbreviation folding and sentence-break insertion
//!
//! The resolver sits between the lexer and the sentence grouper. For every
//! token that starts some abbreviation it scans ahead for the longest
//! matching key and folds the match into the key's canonical token. Every
//! token that is not folded goes through a one-token orthographic test: a
//! token ending in `. : ! ?` followed by a token starting with an uppercase
//! letter gets a sentence break after it, unless the previous emission was a
//! folded abbreviation.

use crate::abbreviation::AbbreviationTable;
use crate::lookahead::Lookahead;
use crate::token::{BreakKind, Item};

const TERMINATORS: [char; 4] = ['.', ':', '!', '?'];

/// Lazy abbreviation resolver over a stream of lexer items
#[derive(Debug)]
pub struct Resolver<'a, I: Iterator<Item = Item<'a>>> {
    table: &'a AbbreviationTable,
    input: Lookahead<I>,
    /// Whether the previous iteration folded an abbreviation
    after_abbreviation: bool,
    /// Sentence break waiting to follow the token just returned
    pending_break: bool,
}

impl<'a, I: Iterator<Item = Item<'a>>> Resolver<'a, I> {
    /// Create a resolver reading from `input`
    ///
    /// The lookahead window equals the longest key in `table`, which is enough
    /// to see the item following the longest possible match.
    pub fn new(table: &'a AbbreviationTable, input: I) -> Self {
        Self {
            table,
            input: Lookahead::new(input, table.max_key_len()),
            after_abbreviation: false,
            pending_break: false,
        }
    }

    /// Find the longest key starting with `head` in the upcoming items
    ///
    /// Returns the key length in tokens and its canonical form. Nothing is
    /// consumed.
    fn longest_match(&mut self, head: &'a str) -> Option<(usize, &'a str)> {
        let table = self.table;
        let mut node = table.step(table.root(), head)?;
        let mut best = None;

        for offset in 0..table.max_key_len().saturating_sub(1) {
            let Some(&Item::Token(next)) = self.input.peek(offset) else {
                break;
            };
            let Some(child) = table.step(node, next) else {
                break;
            };
            node = child;

            if let Some(canonical) = table.canonical(node) {
                if (head == "." || next == ".") && self.closes_input(offset + 1) {
                    break;
                }
                best = Some((offset + 2, canonical));
            }
        }

        best
    }

    /// Whether no token follows the item at `offset`
    fn closes_input(&mut self, offset: usize) -> bool {
        !matches!(self.input.peek(offset), Some(Item::Token(_)))
    }

    /// Orthographic sentence-boundary test after an unfolded token
    fn ends_sentence(&mut self, token: &str) -> bool {
        if self.after_abbreviation || !token.ends_with(TERMINATORS) {
            return false;
        }
        match self.input.peek(0) {
            Some(Item::Token(next)) => next.chars().next().is_some_and(char::is_uppercase),
            _ => false,
        }
    }
}

impl<'a, I: Iterator<Item = Item<'a>>> Iterator for Resolver<'a, I> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending_break {
            self.pending_break = false;
            return Some(Item::Break(BreakKind::Sentence));
        }

        let token = match self.input.advance()? {
            Item::Token(token) => token,
            marker => {
                self.after_abbreviation = false;
                return Some(marker);
            }
        };

        if let Some((len, canonical)) = self.longest_match(token) {
            for _ in 1..len {
                self.input.advance();
            }
            self.after_abbreviation = true;
            return Some(Item::Token(canonical));
        }

        self.pending_break = self.ends_sentence(token);
        self.after_abbreviation = false;
        Some(Item::Token(token))
    }
}
