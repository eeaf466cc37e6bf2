//! Bounded lookahead over an iterator
//!
//! A small ring buffer in front of an upstream iterator. Items are pulled only
//! when a peek reaches past what is already buffered, so the buffer never
//! holds more than `window` items.

use std::collections::VecDeque;
use std::fmt;

/// Sliding window with `peek(offset)` and `advance()`
pub struct Lookahead<I: Iterator> {
    source: I,
    buffer: VecDeque<I::Item>,
    window: usize,
}

impl<I: Iterator> Lookahead<I> {
    /// Wrap `source`, allowing peeks up to `window` items ahead
    pub fn new(source: I, window: usize) -> Self {
        let window = window.max(1);
        Self {
            source,
            buffer: VecDeque::with_capacity(window),
            window,
        }
    }

    /// Maximum number of items that can be buffered
    pub fn window(&self) -> usize {
        self.window
    }

    /// Look at the item `offset` positions ahead without consuming it
    ///
    /// Returns `None` when the upstream ends first, or when `offset` lies
    /// outside the window.
    pub fn peek(&mut self, offset: usize) -> Option<&I::Item> {
        if offset >= self.window {
            return None;
        }
        while self.buffer.len() <= offset {
            let item = self.source.next()?;
            self.buffer.push_back(item);
        }
        self.buffer.get(offset)
    }

    /// Consume and return the next item
    pub fn advance(&mut self) -> Option<I::Item> {
        self.buffer.pop_front().or_else(|| self.source.next())
    }

    /// Number of items currently held in the buffer
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

impl<I: Iterator> fmt::Debug for Lookahead<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lookahead")
            .field("window", &self.window)
            .field("buffered", &self.buffer.len())
            .finish()
    }
}

impl<I: Iterator> Iterator for Lookahead<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}
