/*! Coded character cells, the unit of text the hyphenation engine scans.

 The formatter represents text as a sequence of packed words: a 7-bit character code,
 some formatting bits (font, zero-width, ...) above it, and a *marker* bit that flags
 non-character tokens like motions. A [`Cell`] is the decoded form of such a word;
 [`Cell::from_packed`] and [`Cell::to_packed`] convert between the two.

 All classification ([`is_letter`](Cell::is_letter), [`is_vowel`](Cell::is_vowel),
 [`is_punct`](Cell::is_punct), [`lower`](Cell::lower)) looks at the character code only,
 never at the formatting bits.
 */

use std::fmt::{Display, Formatter};

/// Mask of the character code in a packed cell.
pub const CHAR_MASK: u32 = 0o177;
/// The bit flagging a control marker (a motion or similar non-character token).
pub const MARKER_BIT: u32 = 0o100000;
const ATTR_SHIFT: u32 = 7;
const ATTR_MASK: u32 = 0o377;

/// A single coded character cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    /// A character with its 7-bit code and the formatting bits it was set with.
    Char { code: u8, attrs: u8 },
    /// A formatting token that is never part of a word. Keeps the packed value.
    Marker(u32),
    /// The terminator of a cell buffer.
    #[default]
    End,
}

impl Cell {
    /// Decode a packed cell; `0` is the terminator.
    pub fn from_packed(raw: u32) -> Self {
        if raw == 0 {
            Cell::End
        } else if raw & MARKER_BIT != 0 {
            Cell::Marker(raw)
        } else {
            Cell::Char {
                code: (raw & CHAR_MASK) as u8,
                attrs: ((raw >> ATTR_SHIFT) & ATTR_MASK) as u8,
            }
        }
    }

    /// Inverse of [`from_packed`](Self::from_packed) (for the bits it keeps).
    pub fn to_packed(self) -> u32 {
        match self {
            Cell::Char { code, attrs } => (code as u32 & CHAR_MASK) | ((attrs as u32) << ATTR_SHIFT),
            Cell::Marker(raw) => raw | MARKER_BIT,
            Cell::End => 0,
        }
    }

    /// The character code, if this is a character.
    pub fn code(self) -> Option<u8> {
        match self {
            Cell::Char { code, .. } => Some(code & CHAR_MASK as u8),
            _ => None,
        }
    }

    pub fn is_end(self) -> bool {
        matches!(self, Cell::End)
    }

    /// `A-Z` or `a-z`.
    pub fn is_letter(self) -> bool {
        self.code().is_some_and(|c| c.is_ascii_alphabetic())
    }

    /// Anything that is neither a letter nor the terminator: digits, spaces,
    /// punctuation proper and markers alike.
    pub fn is_punct(self) -> bool {
        !self.is_end() && !self.is_letter()
    }

    /// `a`, `e`, `i`, `o`, `u` and `y`, in either case.
    pub fn is_vowel(self) -> bool {
        self.code().is_some_and(|c| is_vowel_code(lower_code(c)))
    }

    /// The lower-cased character code; `0` for markers and the terminator.
    /// Only meaningful for letters, see [`lower_code`].
    pub fn lower(self) -> u8 {
        self.code().map_or(0, lower_code)
    }
}

/// Shifts every code below `a` up by `'a' - 'A'`, so upper-case letters become lower-case.
/// Codes that are not letters come out as garbage; callers only pass letters.
pub fn lower_code(code: u8) -> u8 {
    if code < b'a' { code + (b'a' - b'A') } else { code }
}

/// Whether a lower-cased code is a vowel; `y` counts as one.
pub fn is_vowel_code(code: u8) -> bool {
    matches!(code, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

impl From<u8> for Cell {
    fn from(b: u8) -> Self {
        if b == 0 { Cell::End } else { Cell::Char { code: b & CHAR_MASK as u8, attrs: 0 } }
    }
}

/// Characters outside the 7-bit range become markers, so they never count as letters.
impl From<char> for Cell {
    fn from(c: char) -> Self {
        if c.is_ascii() { Cell::from(c as u8) } else { Cell::Marker(c as u32) }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Char { code, .. } => write!(f, "{}", (*code & CHAR_MASK as u8) as char),
            Cell::Marker(_) => write!(f, "\u{fffd}"),
            Cell::End => Ok(()),
        }
    }
}

/// A terminated cell buffer holding the characters of `s`, one cell per `char`.
pub fn cells(s: &str) -> Vec<Cell> {
    let mut ret: Vec<Cell> = s.chars().map(Cell::from).collect();
    ret.push(Cell::End);
    ret
}
