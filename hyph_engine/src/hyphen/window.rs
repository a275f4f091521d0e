/*! Locating the word to hyphenate within a cell buffer.

 A [`WordWindow`] delimits the single alphabetic run a buffer is allowed to contain,
 `start..=end`, together with the *stem end*: the last letter still under analysis.
 Suffix stripping moves the stem end backward; the digram scorer walks it further back
 segment by segment. The word bounds themselves never change.
 */

use std::fmt::{Display, Formatter};
use crate::cells::Cell;

/// Words with fewer letters are never hyphenated.
pub const MIN_WORD_LEN: usize = 5;

/// A word within a cell buffer; lives for a single analysis.
#[derive(Clone, Debug)]
pub struct WordWindow<'a> {
    cells: &'a [Cell],
    start: usize,
    end: usize,
    stem_end: usize,
}

impl<'a> WordWindow<'a> {
    /// Finds the word at `cursor`: optional punctuation, a run of letters, optional
    /// punctuation, and then the end of the buffer. Returns `None` if the buffer holds
    /// anything else, or if the word is shorter than [`MIN_WORD_LEN`].
    pub fn locate(cells: &'a [Cell], cursor: usize) -> Option<Self> {
        let at = |i: usize| cells.get(i).copied().unwrap_or(Cell::End);
        let mut i = cursor;
        while at(i).is_punct() { i += 1 }
        if !at(i).is_letter() { return None }
        let start = i;
        while at(i).is_letter() { i += 1 }
        let end = i - 1;
        while at(i).is_punct() { i += 1 }
        if !at(i).is_end() { return None }
        if end + 1 - start < MIN_WORD_LEN { return None }
        Some(WordWindow { cells, start, end, stem_end: end })
    }

    /// Index of the first letter.
    pub fn start(&self) -> usize { self.start }
    /// Index of the last letter.
    pub fn end(&self) -> usize { self.end }
    /// Index of the last letter of the stem still under analysis.
    pub fn stem_end(&self) -> usize { self.stem_end }
    pub(crate) fn set_stem_end(&mut self, stem_end: usize) { self.stem_end = stem_end }

    /// Number of letters in the word.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.end + 1 - self.start }

    /// Whether `pos` is a position a break may be reported at, i.e. in `(start, end]`.
    pub fn contains_break(&self, pos: usize) -> bool {
        pos > self.start && pos <= self.end
    }

    pub fn cell(&self, i: usize) -> Cell {
        self.cells.get(i).copied().unwrap_or(Cell::End)
    }

    /// The lower-cased letter at `i`.
    pub fn letter(&self, i: usize) -> u8 {
        self.cell(i).lower()
    }

    /// The closest vowel strictly before `i` that is still within the word.
    pub fn vowel_before(&self, i: usize) -> Option<usize> {
        (self.start..i.min(self.end + 1)).rev().find(|&j| self.cell(j).is_vowel())
    }
}

impl Display for WordWindow<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in self.start..=self.end {
            write!(f, "{}", self.letter(i) as char)?;
        }
        Ok(())
    }
}
