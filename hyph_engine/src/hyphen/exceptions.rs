/*! The exception dictionary: words with explicitly authored break points.

 Words are kept packed in a fixed-size byte buffer, the way the formatter always has:
 every entry is a run of lower-case letters closed by a `0` byte, and the letter a
 hyphen may precede carries [`BREAK_FLAG`]. An empty entry (a lone `0`) closes the
 list. Entries are never removed individually; [`clear`](ExceptionDictionary::clear)
 drops them all.
 */

use crate::cells::lower_code;
use crate::hyphen::BreakList;
use crate::hyphen::window::WordWindow;
use crate::utils::errors::HyphError;

/// Size of the word buffer, in bytes, unless configured otherwise.
pub const DEFAULT_EXCEPTION_CAPACITY: usize = 128;
/// Marks a letter that a hyphen may precede.
pub const BREAK_FLAG: u8 = 0o200;

/// See the [module documentation](self).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExceptionDictionary {
    bytes: Vec<u8>,
    capacity: usize,
}

impl Default for ExceptionDictionary {
    fn default() -> Self { Self::with_capacity(DEFAULT_EXCEPTION_CAPACITY) }
}

impl ExceptionDictionary {
    pub fn new() -> Self { Self::default() }

    /// An empty dictionary whose word buffer holds `capacity` bytes,
    /// terminators included.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut bytes = Vec::with_capacity(capacity);
        bytes.push(0);
        ExceptionDictionary { bytes, capacity }
    }

    pub fn capacity(&self) -> usize { self.capacity }

    /// Bytes taken by the complete entries.
    pub fn used(&self) -> usize { self.bytes.len() - 1 }

    /// Number of words.
    pub fn len(&self) -> usize { self.entries().count() }
    pub fn is_empty(&self) -> bool { self.used() == 0 }

    pub fn clear(&mut self) {
        self.bytes.clear();
        self.bytes.push(0);
    }

    /// Appends the whitespace separated words of `text`. A `-` in a word marks a break
    /// before the following letter and is not stored itself; letters are stored in
    /// lower case. Words with anything but letters and hyphens are skipped.
    ///
    /// Returns the number of words added. Once a word does not fit, it and everything
    /// after it is dropped and [`HyphError::DictionaryFull`] is returned; the words
    /// stored before stay usable.
    pub fn load(&mut self, text: &str) -> Result<usize, HyphError> {
        let mut added = 0;
        for word in text.split_whitespace() {
            let Some(entry) = Self::encode(word) else {
                log::debug!(target: "hyphen", "not an exception word: {word:?}");
                continue
            };
            if self.used() + entry.len() + 2 >= self.capacity {
                return Err(HyphError::DictionaryFull { capacity: self.capacity })
            }
            self.bytes.pop();
            self.bytes.extend_from_slice(&entry);
            self.bytes.extend_from_slice(&[0, 0]);
            added += 1;
        }
        Ok(added)
    }

    fn encode(word: &str) -> Option<Vec<u8>> {
        let mut entry = Vec::with_capacity(word.len());
        let mut flag = 0;
        for c in word.chars() {
            match c {
                '-' => flag = BREAK_FLAG,
                c if c.is_ascii_alphabetic() => {
                    // no break before the first letter
                    if entry.is_empty() { flag = 0 }
                    entry.push(lower_code(c as u8) | flag);
                    flag = 0;
                }
                _ => return None,
            }
        }
        if entry.is_empty() { None } else { Some(entry) }
    }

    /// The packed entries, in load order.
    pub fn entries(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.split(|b| *b == 0).take_while(|e| !e.is_empty())
    }

    /// The words, with their breaks written as hyphens.
    pub fn words(&self) -> impl Iterator<Item = String> + '_ {
        self.entries().map(|entry| {
            let mut s = String::with_capacity(entry.len() * 2);
            for b in entry {
                if b & BREAK_FLAG != 0 { s.push('-') }
                s.push((b & !BREAK_FLAG) as char);
            }
            s
        })
    }

    /// Looks the stem of `window` up. An entry matches if it spells the stem exactly,
    /// or the stem minus a final `s`. On a match, the break of every flagged letter is
    /// appended to `breaks` and `true` is returned.
    pub fn lookup(&self, window: &WordWindow, breaks: &mut BreakList) -> bool {
        let (start, stem_end) = (window.start(), window.stem_end());
        for entry in self.entries() {
            let mut w = start;
            let mut k = 0;
            while k < entry.len() && w <= stem_end && entry[k] & !BREAK_FLAG == window.letter(w) {
                k += 1;
                w += 1;
            }
            if k < entry.len() { continue }
            // a final `s` of the stem, not of the whole word
            if w == stem_end + 1 || (w == stem_end && window.letter(w) == b's') {
                breaks.extend(entry.iter().enumerate()
                    .filter(|(_, b)| *b & BREAK_FLAG != 0)
                    .map(|(i, _)| start + i));
                return true
            }
        }
        false
    }
}
