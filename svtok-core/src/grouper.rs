//! Sentence grouping
//!
//! Collects tokens into sentences, closing the current sentence at every
//! marker. Markers that would close an empty sentence are dropped.

use crate::token::{Item, Sentence};

/// Lazy iterator of sentences over a marked token stream
#[derive(Debug, Clone)]
pub struct Sentences<I> {
    input: I,
    done: bool,
}

impl<'a, I: Iterator<Item = Item<'a>>> Sentences<I> {
    /// Group the items of `input` into sentences
    pub fn new(input: I) -> Self {
        Self { input, done: false }
    }
}

impl<'a, I: Iterator<Item = Item<'a>>> Iterator for Sentences<I> {
    type Item = Sentence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut sentence = Vec::new();
        for item in self.input.by_ref() {
            match item {
                Item::Token(token) => sentence.push(token),
                Item::Break(_) if sentence.is_empty() => {}
                Item::Break(_) => return Some(sentence),
            }
        }

        self.done = true;
        (!sentence.is_empty()).then_some(sentence)
    }
}

impl<'a, I: Iterator<Item = Item<'a>>> std::iter::FusedIterator for Sentences<I> {}
