//! Items flowing between pipeline stages

/// Kind of structural break carried by a marker
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BreakKind {
    /// Blank-line run found by the lexer
    Paragraph,
    /// Sentence boundary inserted by the resolver
    Sentence,
}

/// One element of a token stream
///
/// Tokens borrow from the source text, or from the abbreviation table when an
/// abbreviation has been folded into its canonical form.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Item<'a> {
    /// A token string
    Token(&'a str),
    /// A paragraph or sentence break
    Break(BreakKind),
}

impl<'a> Item<'a> {
    /// Token text, or `None` for a marker
    #[inline]
    pub fn as_token(&self) -> Option<&'a str> {
        match *self {
            Item::Token(token) => Some(token),
            Item::Break(_) => None,
        }
    }

    /// Whether this item is a marker of either kind
    #[inline]
    pub fn is_break(&self) -> bool {
        matches!(self, Item::Break(_))
    }
}

/// A non-empty run of tokens between two breaks
pub type Sentence<'a> = Vec<&'a str>;
