/*! The suffix table and backward suffix stripping.

 Entries are filed under the final letter of their suffix (see [`notation`](super::notation)
 for the text form). Stripping repeatedly matches the end of the stem against the entries
 of its final letter, records the breaks the first matching entry carries and cuts the
 stem back to just before the earliest of them, e.g. `-a-tions` in "affirmations" leaves
 "affirm" for the next round.
 */

use std::fmt::{Display, Formatter};
use arrayvec::ArrayVec;
use lazy_static::lazy_static;
use crate::hyphen::BreakList;
use crate::hyphen::exceptions::ExceptionDictionary;
use crate::hyphen::notation::{self, BREAK_MARK, LENGTH_MASK, MAX_SUFFIX_LEN};
use crate::hyphen::window::WordWindow;
use crate::utils::Ptr;
use crate::utils::errors::HyphError;

include!(concat!(env!("OUT_DIR"), "/suffixes.rs"));

/// The control bits of a suffix entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct SuffixFlags(u8);
impl SuffixFlags {
    /// A break precedes the final letter.
    pub const BREAK_BEFORE_FINAL: SuffixFlags = SuffixFlags(notation::BREAK_MARK);
    /// Breaks of this entry do not need a vowel before them.
    pub const SKIP_VOWEL_CHECK: SuffixFlags = SuffixFlags(notation::SKIP_VOWEL_CHECK);
    /// Nothing is stripped after this entry.
    pub const STOP: SuffixFlags = SuffixFlags(notation::STOP);

    fn from_header(header: u8) -> Self { SuffixFlags(header & !LENGTH_MASK) }
    pub fn bits(self) -> u8 { self.0 }
    pub fn contains(self, other: SuffixFlags) -> bool { self.0 & other.0 == other.0 }
}
impl std::ops::BitOr for SuffixFlags {
    type Output = SuffixFlags;
    fn bitor(self, rhs: Self) -> Self { SuffixFlags(self.0 | rhs.0) }
}

/// A single suffix: its final letter and the letters before it, in reading order,
/// each carrying [`BREAK_MARK`] if a break precedes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuffixEntry {
    pub last: u8,
    pub flags: SuffixFlags,
    pub pattern: ArrayVec<u8, { MAX_SUFFIX_LEN - 1 }>,
}

impl SuffixEntry {
    /// Number of letters, the final one included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.pattern.len() + 1 }

    /// Whether the stem of `window` ends in this suffix.
    fn matches(&self, window: &WordWindow) -> bool {
        let stem = window.stem_end();
        stem >= window.start() + self.pattern.len()
            && window.letter(stem) == self.last
            && self.pattern.iter().rev().enumerate()
                .all(|(i, b)| b & !BREAK_MARK == window.letter(stem - 1 - i))
    }

    /// Walks the matched suffix from its end, cutting the stem back before every break
    /// and recording it. Fails if a break would precede the first letter, or (unless
    /// [`SKIP_VOWEL_CHECK`](SuffixFlags::SKIP_VOWEL_CHECK) is set) has no vowel before it.
    /// Breaks recorded before a failure stay recorded.
    fn mark(&self, window: &mut WordWindow, breaks: &mut BreakList) -> bool {
        let stem = window.stem_end();
        let skip_vowels = self.flags.contains(SuffixFlags::SKIP_VOWEL_CHECK);
        let marks = std::iter::once((stem, self.flags.contains(SuffixFlags::BREAK_BEFORE_FINAL)))
            .chain(self.pattern.iter().rev().enumerate()
                .map(|(i, b)| (stem - 1 - i, b & BREAK_MARK != 0)));
        for (pos, _) in marks.filter(|(_, marked)| *marked) {
            if pos <= window.start() { return false }
            window.set_stem_end(pos - 1);
            if !skip_vowels && window.vowel_before(pos).is_none() {
                log::trace!(target: "hyphen", "no vowel before {pos} in {window}");
                return false
            }
            breaks.push(pos);
        }
        true
    }
}

impl Display for SuffixEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for b in &self.pattern {
            if b & BREAK_MARK != 0 { f.write_str("-")? }
            write!(f, "{}", (b & !BREAK_MARK) as char)?;
        }
        if self.flags.contains(SuffixFlags::BREAK_BEFORE_FINAL) { f.write_str("-")? }
        write!(f, "{}", self.last as char)?;
        if self.flags.contains(SuffixFlags::SKIP_VOWEL_CHECK) { f.write_str(" novowel")? }
        if self.flags.contains(SuffixFlags::STOP) { f.write_str(" stop")? }
        Ok(())
    }
}

impl From<notation::NotationEntry> for SuffixEntry {
    fn from(e: notation::NotationEntry) -> Self {
        SuffixEntry {
            last: e.last,
            flags: SuffixFlags::from_header(e.header),
            pattern: e.pattern.into_iter().take(MAX_SUFFIX_LEN - 1).collect(),
        }
    }
}

lazy_static! {
    static ref STANDARD: Ptr<SuffixTable> = Ptr::new(SuffixTable::decode(&SUFFIX_INDEX, &SUFFIX_BYTES));
}

/// Suffix entries for every letter `a..=z`, in preference order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuffixTable {
    entries: [Vec<SuffixEntry>; 26],
}

impl Default for SuffixTable {
    fn default() -> Self { Self::empty() }
}

impl SuffixTable {
    /// The table bundled with the crate, decoded on first use.
    pub fn standard() -> Ptr<SuffixTable> { STANDARD.clone() }

    /// A table without entries; the suffix stage then never succeeds.
    pub fn empty() -> Self {
        SuffixTable { entries: array_init::array_init(|_| Vec::new()) }
    }

    /// Builds a table from the text notation of [`notation`](super::notation).
    pub fn from_notation(text: &str) -> Result<Self, HyphError> {
        let mut table = Self::empty();
        for (i, line) in text.lines().enumerate() {
            match notation::parse_line(line) {
                Ok(Some(e)) => table.push(e.into()),
                Ok(None) => (),
                Err(message) => return Err(HyphError::SuffixNotation { line: i + 1, message }),
            }
        }
        Ok(table)
    }

    /// Decodes the packed form. A list that runs off the end of `bytes`, or holds a
    /// malformed entry, is cut off there.
    pub fn decode(index: &[u16; 26], bytes: &[u8]) -> Self {
        let mut table = Self::empty();
        for (i, &offset) in index.iter().enumerate() {
            if offset == 0 { continue }
            let last = b'a' + i as u8;
            let mut o = offset as usize;
            loop {
                let Some(&header) = bytes.get(o) else {
                    log::warn!(target: "hyphen", "suffix list for '{}' is not terminated", last as char);
                    break
                };
                if header == 0 { break }
                let len = (header & LENGTH_MASK) as usize;
                let pattern = match bytes.get(o + 1..o + len) {
                    Some(p) if len > 0 && p.iter().all(|b| (b & !BREAK_MARK).is_ascii_lowercase()) => p,
                    _ => {
                        log::warn!(target: "hyphen", "malformed suffix entry for '{}' at offset {o}", last as char);
                        break
                    }
                };
                table.entries[i].push(SuffixEntry {
                    last,
                    flags: SuffixFlags::from_header(header),
                    pattern: pattern.iter().copied().collect(),
                });
                o += len;
            }
        }
        table
    }

    fn push(&mut self, entry: SuffixEntry) {
        if entry.last.is_ascii_lowercase() {
            self.entries[(entry.last - b'a') as usize].push(entry)
        }
    }

    /// The entries for suffixes ending in `letter` (either case).
    pub fn entries_for(&self, letter: u8) -> &[SuffixEntry] {
        let l = letter.to_ascii_lowercase();
        if l.is_ascii_lowercase() { &self.entries[(l - b'a') as usize] } else { &[] }
    }

    /// All entries, by final letter.
    pub fn iter(&self) -> impl Iterator<Item = &SuffixEntry> {
        self.entries.iter().flatten()
    }

    pub fn len(&self) -> usize { self.entries.iter().map(Vec::len).sum() }
    pub fn is_empty(&self) -> bool { self.entries.iter().all(Vec::is_empty) }

    /// Strips suffixes off the stem of `window` for as long as they match. After every
    /// suffix without [`STOP`](SuffixFlags::STOP) the remaining stem is looked up in
    /// `exceptions`. Returns `true` if the word is done: a `STOP` suffix matched, or the
    /// exception dictionary knew the stem. Otherwise the digram stage takes over on
    /// whatever stem is left, keeping the breaks found so far.
    pub fn strip(&self, window: &mut WordWindow, exceptions: &ExceptionDictionary, breaks: &mut BreakList) -> bool {
        for _ in 0..window.len() {
            let stem = window.stem_end();
            let Some(entry) = self.entries_for(window.letter(stem)).iter().find(|e| e.matches(window)) else {
                return false
            };
            log::trace!(target: "hyphen", "{window}: suffix {entry} at {stem}");
            if !entry.mark(window, breaks) { return false }
            if entry.flags.contains(SuffixFlags::STOP) { return true }
            if window.stem_end() >= stem { return false }
            if exceptions.lookup(window, breaks) { return true }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::cells;

    fn strip(table: &SuffixTable, word: &str) -> (bool, BreakList, usize) {
        let buf = cells(word);
        let mut window = WordWindow::locate(&buf, 0).unwrap();
        let mut breaks = Vec::new();
        let done = table.strip(&mut window, &ExceptionDictionary::new(), &mut breaks);
        (done, breaks, window.stem_end())
    }

    #[test]
    fn standard_table() {
        let table = SuffixTable::standard();
        assert!(!table.is_empty());
        assert!(table.entries_for(b'q').is_empty());
        assert!(table.entries_for(b'-').is_empty());
        let g: Vec<String> = table.entries_for(b'G').iter().map(|e| e.to_string()).collect();
        assert_eq!(g, vec!["-ing"]);
        let e = &table.entries_for(b'e')[0];
        assert_eq!(e.to_string(), "-wise novowel stop");
        assert_eq!(e.len(), 4);
        assert!(e.flags.contains(SuffixFlags::SKIP_VOWEL_CHECK | SuffixFlags::STOP));
        assert!(!e.flags.contains(SuffixFlags::BREAK_BEFORE_FINAL));
        assert!(table.iter().all(|e| e.len() <= MAX_SUFFIX_LEN));
    }

    #[test]
    fn notation_matches_packed() {
        let text = include_str!("../resources/suffixes.txt");
        let table = SuffixTable::from_notation(text).unwrap();
        assert_eq!(&table, SuffixTable::standard().as_ref());
        let entries = notation::parse(text).unwrap();
        let (index, bytes) = notation::pack(&entries).unwrap();
        assert_eq!(SuffixTable::decode(&index, &bytes), table);
    }

    #[test]
    fn notation_errors() {
        let err = SuffixTable::from_notation("-ing\n\n-a-ble frob").unwrap_err();
        assert!(matches!(err, HyphError::SuffixNotation { line: 3, .. }));
        for bad in ["-in-", "-i--ng", "-i2ng", "ing", "-abcdefghijklmnop"] {
            assert!(SuffixTable::from_notation(bad).is_err(), "{bad}");
        }
        assert!(SuffixTable::from_notation("ing stop # no break").is_ok());
    }

    #[test]
    fn decode_truncates() {
        let mut index = [0u16; 26];
        // "-ly", then an entry claiming 5 bytes with only 2 left
        index[(b'y' - b'a') as usize] = 1;
        let bytes = [0u8, 0x02, b'l' | BREAK_MARK, 0x05, b'x'];
        let table = SuffixTable::decode(&index, &bytes);
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries_for(b'y')[0].to_string(), "-ly");
    }

    #[test]
    fn single_suffix() {
        let table = SuffixTable::from_notation("-ing novowel").unwrap();
        // r u n n i n g
        assert_eq!(strip(&table, "running"), (false, vec![4], 3));
        assert_eq!(strip(&table, "RUNNING."), (false, vec![4], 3));
        assert_eq!(strip(&table, "runner"), (false, vec![], 5));
    }

    #[test]
    fn repeated_stripping() {
        let table = SuffixTable::from_notation("-ly\n-ful").unwrap();
        // h o p e f u l l y
        assert_eq!(strip(&table, "hopefully"), (false, vec![7, 4], 3));
    }

    #[test]
    fn stop() {
        let table = SuffixTable::from_notation("-ly\n-ward stop\n-ful").unwrap();
        // b a c k w a r d l y
        assert_eq!(strip(&table, "backwardly"), (true, vec![8, 4], 3));
    }

    #[test]
    fn vowel_check() {
        let table = SuffixTable::from_notation("-ness").unwrap();
        assert_eq!(strip(&table, "shyness"), (false, vec![3], 2));
        // no vowel before the break; the stem stays cut
        assert_eq!(strip(&table, "strness"), (false, vec![], 2));
        let table = SuffixTable::from_notation("-ness novowel").unwrap();
        assert_eq!(strip(&table, "strness"), (false, vec![3], 2));
    }

    #[test]
    fn no_break_before_the_word() {
        let table = SuffixTable::from_notation("-ness novowel\n-ly").unwrap();
        assert_eq!(strip(&table, "xness"), (false, vec![1], 0));
        assert_eq!(strip(&table, "nessly"), (false, vec![4], 3));
    }

    #[test]
    fn exceptions_after_stripping() {
        let table = SuffixTable::from_notation("-ly").unwrap();
        let mut dict = ExceptionDictionary::new();
        dict.load("pre-sent").unwrap();
        let buf = cells("presently");
        let mut window = WordWindow::locate(&buf, 0).unwrap();
        let mut breaks = Vec::new();
        assert!(table.strip(&mut window, &dict, &mut breaks));
        assert_eq!(breaks, vec![7, 3]);
    }
}
