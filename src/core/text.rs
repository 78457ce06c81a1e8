//! Positioned character sequence
//!
//! [`ArabicText`] owns the (already pre-normalized) characters of one input.
//! [`Position`] is a cheap, copyable cursor into it: an index plus a borrow of
//! the sequence. Every lookahead and lookbehind is bounds-checked index
//! arithmetic that yields `None` past either end.

use crate::data::alphabet::is_sentence_end;

/// Immutable character sequence the rule engine walks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArabicText {
    chars: Vec<char>,
}

impl ArabicText {
    pub fn new(chars: Vec<char>) -> Self {
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character at `index`, if any
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Cursor at `index`, or `None` when out of bounds
    pub fn at(&self, index: usize) -> Option<Position<'_>> {
        (index < self.chars.len()).then_some(Position { text: self, index })
    }

    pub fn first(&self) -> Option<Position<'_>> {
        self.at(0)
    }

    pub fn last(&self) -> Option<Position<'_>> {
        self.chars.len().checked_sub(1).and_then(|i| self.at(i))
    }

    /// Iterate over every position in order
    pub fn positions(&self) -> impl Iterator<Item = Position<'_>> + '_ {
        (0..self.chars.len()).map(move |index| Position { text: self, index })
    }
}

impl From<&str> for ArabicText {
    fn from(text: &str) -> Self {
        Self::new(text.chars().collect())
    }
}

/// A view of one element of an [`ArabicText`]
///
/// Predicates are computed on demand from the surrounding characters; a
/// position never caches anything.
#[derive(Debug, Clone, Copy)]
pub struct Position<'a> {
    text: &'a ArabicText,
    index: usize,
}

impl<'a> Position<'a> {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn char(&self) -> char {
        self.text.chars[self.index]
    }

    /// Whether the character here is `c`
    #[inline]
    pub fn is(&self, c: char) -> bool {
        self.char() == c
    }

    pub fn text(&self) -> &'a ArabicText {
        self.text
    }

    /// Position `n` steps ahead, `None` if that runs past the end
    pub fn next(&self, n: usize) -> Option<Position<'a>> {
        let index = self.index.checked_add(n)?;
        self.text.at(index)
    }

    /// Position `n` steps back, `None` if that runs past the start
    pub fn prev(&self, n: usize) -> Option<Position<'a>> {
        let index = self.index.checked_sub(n)?;
        self.text.at(index)
    }

    /// Character `n` steps ahead
    #[inline]
    pub fn peek(&self, n: usize) -> Option<char> {
        self.next(n).map(|p| p.char())
    }

    /// Character `n` steps back
    #[inline]
    pub fn behind(&self, n: usize) -> Option<char> {
        self.prev(n).map(|p| p.char())
    }

    /// Up to `n` preceding characters, nearest first
    pub fn preceded(&self, n: usize) -> String {
        (1..=n).map_while(|k| self.behind(k)).collect()
    }

    /// Up to `n` following characters, nearest first
    pub fn succeeded(&self, n: usize) -> String {
        (1..=n).map_while(|k| self.peek(k)).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.is(' ')
    }

    pub fn is_start(&self) -> bool {
        self.index == 0
    }

    pub fn is_end(&self) -> bool {
        self.index + 1 == self.text.len()
    }

    /// Previous element is whitespace or absent
    pub fn is_word_start(&self) -> bool {
        match self.behind(1) {
            None => true,
            Some(c) => c == ' ',
        }
    }

    /// Previous element absent, or the one two back is absent, whitespace or
    /// sentence-ending punctuation
    pub fn is_phrase_start(&self) -> bool {
        if self.prev(1).is_none() {
            return true;
        }
        match self.behind(2) {
            None => true,
            Some(c) => c == ' ' || is_sentence_end(c),
        }
    }

    /// Start of text, or a blank that itself follows start of text or
    /// sentence-ending punctuation
    ///
    /// This is the narrower test used for the phrase-initial forms of the
    /// article and the divine name.
    pub fn opens_phrase(&self) -> bool {
        match self.prev(1) {
            None => true,
            Some(p) if p.is_blank() => match p.behind(1) {
                None => true,
                Some(c) => is_sentence_end(c),
            },
            Some(_) => false,
        }
    }

    /// Neither a word start nor followed by a blank
    ///
    /// The last character of the text is never mid-word.
    pub fn is_mid(&self) -> bool {
        if self.is_word_start() {
            return false;
        }
        match self.next(1) {
            Some(next) => !next.is_blank(),
            None => false,
        }
    }
}

impl PartialEq<char> for Position<'_> {
    fn eq(&self, other: &char) -> bool {
        self.char() == *other
    }
}
